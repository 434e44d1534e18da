use std::collections::BTreeSet;

use ancient_tech_site::state::audio::{AudioCmd, AudioState, Playback, PLAY_LABEL};

#[derive(Clone, Copy, Debug)]
enum Event {
    Click(usize),
    Tick(usize),
}

/// Mirrors the ticker bookkeeping the episodes component performs.
fn apply(audio: &mut AudioState, running: &mut BTreeSet<usize>, event: Event) {
    let cmds = match event {
        Event::Click(i) => audio.toggle(i),
        // Only running tickers fire.
        Event::Tick(i) if running.contains(&i) => audio.tick(i).cmds,
        Event::Tick(_) => vec![],
    };
    for cmd in cmds {
        match cmd {
            AudioCmd::StartTicker(i) => {
                running.insert(i);
            }
            AudioCmd::StopTicker(i) => {
                running.remove(&i);
            }
        }
    }
}

fn all_sequences(len: usize, buttons: usize) -> Vec<Vec<Event>> {
    let events: Vec<Event> = (0..buttons)
        .flat_map(|i| [Event::Click(i), Event::Tick(i)])
        .collect();
    let mut sequences = vec![vec![]];
    for _ in 0..len {
        sequences = sequences
            .into_iter()
            .flat_map(|seq| {
                events.iter().map(move |event| {
                    let mut next = seq.clone();
                    next.push(*event);
                    next
                })
            })
            .collect();
    }
    sequences
}

#[test]
fn at_most_one_episode_plays_for_every_sequence() {
    for sequence in all_sequences(5, 3) {
        // Short duration so completions happen inside the sequences.
        let mut audio = AudioState::new(3, 2);
        let mut running = BTreeSet::new();
        for event in &sequence {
            apply(&mut audio, &mut running, *event);
            assert!(audio.playing_count() <= 1, "sequence {:?}", sequence);
            let playing: BTreeSet<usize> = (0..3).filter(|i| audio.is_playing(*i)).collect();
            assert_eq!(playing, running, "tickers out of sync for {:?}", sequence);
        }
    }
}

#[test]
fn untouched_episode_finishes_after_thirty_ticks() {
    let mut audio = AudioState::new(2, 30);
    let mut running = BTreeSet::new();
    apply(&mut audio, &mut running, Event::Click(1));
    for _ in 0..29 {
        apply(&mut audio, &mut running, Event::Tick(1));
    }
    assert!(audio.is_playing(1));
    assert_eq!(audio.label(1), "⏸ Playing... 97%");

    let last = audio.tick(1);
    assert_eq!(last.percent, Some(100));
    assert_eq!(last.cmds, vec![AudioCmd::StopTicker(1)]);
    assert_eq!(audio.playback(1), Some(Playback::Idle));
    assert_eq!(audio.label(1), PLAY_LABEL);
}

#[test]
fn switching_episodes_stops_previous_ticker() {
    let mut audio = AudioState::new(3, 30);
    let mut running = BTreeSet::new();
    apply(&mut audio, &mut running, Event::Click(0));
    apply(&mut audio, &mut running, Event::Tick(0));
    apply(&mut audio, &mut running, Event::Click(2));
    assert_eq!(running, BTreeSet::from([2]));
    assert_eq!(audio.label(0), PLAY_LABEL);
}
