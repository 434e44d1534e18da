//! Simulated episode playback. Nothing is decoded; a per-episode ticker
//! fabricates progress and the buttons relabel themselves from it.

pub const PLAY_LABEL: &str = "▶ Play Episode";
pub const PAUSE_LABEL: &str = "⏸ Pause Episode";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Idle,
    Playing { progress: u32 },
}

/// Ticker side effects for the render layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCmd {
    StartTicker(usize),
    StopTicker(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// Rounded percentage shown by this tick, `None` for a stale tick.
    pub percent: Option<u32>,
    pub cmds: Vec<AudioCmd>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioState {
    episodes: Vec<Playback>,
    duration: u32,
}

impl AudioState {
    pub fn new(episode_count: usize, duration_ticks: u32) -> Self {
        Self {
            episodes: vec![Playback::Idle; episode_count],
            duration: duration_ticks.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn playback(&self, index: usize) -> Option<Playback> {
        self.episodes.get(index).copied()
    }

    pub fn is_playing(&self, index: usize) -> bool {
        matches!(self.playback(index), Some(Playback::Playing { .. }))
    }

    pub fn playing_count(&self) -> usize {
        self.episodes
            .iter()
            .filter(|p| matches!(p, Playback::Playing { .. }))
            .count()
    }

    /// Button activation. Flips the clicked episode, then forces every other
    /// playing episode back to idle.
    pub fn toggle(&mut self, index: usize) -> Vec<AudioCmd> {
        let Some(current) = self.playback(index) else {
            return vec![];
        };
        let mut cmds = Vec::new();
        match current {
            Playback::Idle => {
                self.episodes[index] = Playback::Playing { progress: 0 };
                cmds.push(AudioCmd::StartTicker(index));
            }
            Playback::Playing { .. } => {
                self.episodes[index] = Playback::Idle;
                cmds.push(AudioCmd::StopTicker(index));
            }
        }
        for (other, playback) in self.episodes.iter_mut().enumerate() {
            if other != index && matches!(playback, Playback::Playing { .. }) {
                *playback = Playback::Idle;
                cmds.push(AudioCmd::StopTicker(other));
            }
        }
        cmds
    }

    /// One ticker callback for `index`.
    pub fn tick(&mut self, index: usize) -> TickOutcome {
        let Some(Playback::Playing { progress }) = self.playback(index) else {
            return TickOutcome {
                percent: None,
                cmds: vec![],
            };
        };
        let progress = progress + 1;
        let percent = percentage(progress, self.duration);
        let cmds = if progress >= self.duration {
            self.episodes[index] = Playback::Idle;
            vec![AudioCmd::StopTicker(index)]
        } else {
            self.episodes[index] = Playback::Playing { progress };
            vec![]
        };
        TickOutcome {
            percent: Some(percent),
            cmds,
        }
    }

    pub fn label(&self, index: usize) -> String {
        match self.playback(index) {
            Some(Playback::Playing { progress: 0 }) => PAUSE_LABEL.to_string(),
            Some(Playback::Playing { progress }) => {
                format!("⏸ Playing... {}%", percentage(progress, self.duration))
            }
            _ => PLAY_LABEL.to_string(),
        }
    }
}

pub fn percentage(progress: u32, duration: u32) -> u32 {
    (f64::from(progress) / f64::from(duration.max(1)) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn audio() -> AudioState {
        AudioState::new(3, 30)
    }

    #[rstest]
    fn play_starts_ticker(mut audio: AudioState) {
        assert_eq!(audio.toggle(0), vec![AudioCmd::StartTicker(0)]);
        assert!(audio.is_playing(0));
        assert_eq!(audio.label(0), PAUSE_LABEL);
    }

    #[rstest]
    fn pause_is_immediate(mut audio: AudioState) {
        audio.toggle(1);
        audio.tick(1);
        audio.tick(1);
        assert_eq!(audio.toggle(1), vec![AudioCmd::StopTicker(1)]);
        assert_eq!(audio.playback(1), Some(Playback::Idle));
        assert_eq!(audio.label(1), PLAY_LABEL);
    }

    #[rstest]
    fn playing_another_episode_stops_the_first(mut audio: AudioState) {
        audio.toggle(0);
        let cmds = audio.toggle(2);
        assert_eq!(cmds, vec![AudioCmd::StartTicker(2), AudioCmd::StopTicker(0)]);
        assert!(!audio.is_playing(0));
        assert!(audio.is_playing(2));
        assert_eq!(audio.playing_count(), 1);
    }

    #[rstest]
    fn runs_to_completion_after_duration(mut audio: AudioState) {
        audio.toggle(0);
        let mut last = 0;
        for tick in 1..=30 {
            let outcome = audio.tick(0);
            let percent = outcome.percent.unwrap();
            assert!(percent >= last);
            last = percent;
            if tick < 30 {
                assert!(outcome.cmds.is_empty());
                assert!(audio.is_playing(0));
            } else {
                assert_eq!(outcome.cmds, vec![AudioCmd::StopTicker(0)]);
            }
        }
        assert_eq!(last, 100);
        assert_eq!(audio.playback(0), Some(Playback::Idle));
    }

    #[rstest]
    fn stale_tick_is_ignored(mut audio: AudioState) {
        let outcome = audio.tick(0);
        assert_eq!(outcome.percent, None);
        assert!(outcome.cmds.is_empty());
    }

    #[rstest]
    fn out_of_range_toggle_is_noop(mut audio: AudioState) {
        assert!(audio.toggle(7).is_empty());
        assert_eq!(audio.playing_count(), 0);
    }

    #[rstest]
    fn label_shows_rounded_percentage(mut audio: AudioState) {
        audio.toggle(0);
        audio.tick(0);
        assert_eq!(audio.label(0), "⏸ Playing... 3%");
        audio.tick(0);
        assert_eq!(audio.label(0), "⏸ Playing... 7%");
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 3)]
    #[case(15, 50)]
    #[case(29, 97)]
    #[case(30, 100)]
    fn percentage_rounds(#[case] progress: u32, #[case] expected: u32) {
        assert_eq!(percentage(progress, 30), expected);
    }
}
