use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::Episode;
use crate::components::reveal::use_reveal;
use crate::state::audio::{AudioCmd, AudioState};
use crate::state::keyboard::is_activation_key;
use crate::utils::shared::{use_state_handle, StateHandle};
use crate::utils::tickers::Tickers;

/// Executes ticker commands. `from_tick` is set when running inside an
/// interval callback, where the finishing ticker must not be dropped in place.
fn apply_audio_cmds(
    cmds: Vec<AudioCmd>,
    audio: &StateHandle<AudioState>,
    tickers: &Rc<RefCell<Tickers>>,
    interval_ms: u32,
    from_tick: bool,
) {
    for cmd in cmds {
        match cmd {
            AudioCmd::StartTicker(index) => {
                let audio = audio.clone();
                let tickers_for_tick = tickers.clone();
                tickers.borrow_mut().start(index, interval_ms, move || {
                    let outcome = audio.update(|a| a.tick(index));
                    if let Some(percent) = outcome.percent {
                        log::debug!("Episode {} simulated playback at {}%", index + 1, percent);
                    }
                    apply_audio_cmds(outcome.cmds, &audio, &tickers_for_tick, interval_ms, true);
                });
            }
            AudioCmd::StopTicker(index) if from_tick => {
                tickers.borrow_mut().stop_deferred(index);
            }
            AudioCmd::StopTicker(index) => {
                tickers.borrow_mut().stop(index);
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct EpisodesProps {
    pub episodes: Vec<Episode>,
}

#[function_component]
pub fn Episodes(props: &EpisodesProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let audio = {
        let count = props.episodes.len();
        let duration = config.episode_duration_ticks;
        use_state_handle(move || AudioState::new(count, duration))
    };
    let tickers = use_mut_ref(Tickers::default);

    // Drop every running ticker when the section unmounts.
    {
        let tickers = tickers.clone();
        use_effect_with_deps(
            move |_| move || tickers.borrow_mut().clear(),
            (),
        );
    }

    let on_toggle = {
        let audio = audio.clone();
        let tickers = tickers.clone();
        let interval_ms = config.tick_interval_ms;
        Callback::from(move |index: usize| {
            let cmds = audio.update(|a| a.toggle(index));
            apply_audio_cmds(cmds, &audio, &tickers, interval_ms, false);
        })
    };

    html! {
        <div class="episodes__grid">
            { for props.episodes.iter().enumerate().map(|(index, episode)| {
                let (label, playing) = audio.read(|a| (a.label(index), a.is_playing(index)));
                html! {
                    <EpisodeCard
                        key={index}
                        {index}
                        episode={*episode}
                        {label}
                        {playing}
                        on_toggle={on_toggle.clone()}
                    />
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EpisodeCardProps {
    pub index: usize,
    pub episode: Episode,
    pub label: String,
    pub playing: bool,
    pub on_toggle: Callback<usize>,
}

#[function_component]
pub fn EpisodeCard(props: &EpisodeCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let index = props.index;

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(index))
    };

    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e.key()) {
                on_toggle.emit(index);
                e.prevent_default();
            }
        })
    };

    let episode = &props.episode;
    html! {
        <article
            ref={node}
            class={classes!("episode-card", revealed)}
            tabindex="0"
            data-episode-index={index.to_string()}
            {onkeydown}
        >
            <span class="episode-card__number">{format!("Episode {}", episode.number)}</span>
            <h3 class="episode-card__title">{episode.title}</h3>
            <p class="episode-card__summary">{episode.summary}</p>
            <div class="episode-card__footer">
                <span class="episode-card__runtime">{episode.runtime}</span>
                <button
                    class={classes!("btn", "audio-btn", props.playing.then_some("playing"))}
                    {onclick}
                >
                    {&props.label}
                </button>
            </div>
        </article>
    }
}
