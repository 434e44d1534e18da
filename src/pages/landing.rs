use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::episodes::Episodes;
use crate::components::floating_city::FloatingCity;
use crate::components::modal::TechModal;
use crate::components::nav::NavBar;
use crate::components::newsletter::NewsletterForm;
use crate::components::notification::{Notifications, Notifier};
use crate::components::reveal::RevealCard;
use crate::components::tech_grid::TechGrid;
use crate::config::SiteConfig;
use crate::content::{tech_items, EPISODES, NAV_LINKS, TEXT_CARDS, THEMES};
use crate::state::keyboard::{global_key, wrap_focus, KeyCommand};
use crate::state::modal::{CloseTrigger, ModalContent, ModalState};
use crate::state::nav::{section_probe, NavState};
use crate::state::notification::NotificationStack;
use crate::state::scroll::ScrollState;
use crate::utils::dom;
use crate::utils::shared::use_state_handle;

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_memo(|_| SiteConfig::load(), ());
    let nav = use_state_handle(|| NavState::new(NAV_LINKS.iter().map(|link| link.id)));
    let scroll = use_state_handle(ScrollState::default);
    let modal = use_state_handle(ModalState::default);
    let toasts = use_state_handle(NotificationStack::default);
    let notifier = Notifier::new(toasts.clone(), &config);

    {
        use_effect_with_deps(
            move |_| {
                gloo_console::log!("Ancient Tech Decoded ready");
                || ()
            },
            (),
        );
    }

    // Nav show/hide and active-section tracking
    {
        let nav = nav.clone();
        let scroll = scroll.clone();
        let config = config.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        let offset = dom::scroll_y();
                        let nav_height = dom::nav_height();
                        scroll.update(|s| s.on_scroll(offset, config.nav_hide_threshold_px));
                        let probe = section_probe(offset, nav_height, config.section_lookahead_px);
                        let sections = dom::section_spans();
                        nav.update(|n| n.recompute(probe, &sections));
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("Failed to bind scroll listener: {:?}", e);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Escape closes the dialog; arrows cycle focus between episode cards
    {
        let modal = modal.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Ok(document) = dom::document() {
                    let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        match global_key(&e.key()) {
                            KeyCommand::CloseModal => {
                                if modal.read(ModalState::is_open) {
                                    modal.update(|m| m.close(CloseTrigger::Escape));
                                }
                            }
                            KeyCommand::MoveFocus(direction) => {
                                let next = dom::focused_card_index()
                                    .and_then(|current| wrap_focus(current, EPISODES.len(), direction));
                                if let Some(next) = next {
                                    dom::focus_card(next);
                                    e.prevent_default();
                                }
                            }
                            KeyCommand::Ignore => {}
                        }
                    });
                    if let Err(e) = document
                        .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("Failed to bind keydown listener: {:?}", e);
                    }
                    Box::new(move || {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let on_nav_select = {
        let nav = nav.clone();
        Callback::from(move |id: String| {
            let target_top = dom::section_top(&id);
            let nav_height = dom::nav_height();
            if let Some(request) = nav.update(|n| n.activate(&id, target_top, nav_height)) {
                dom::smooth_scroll(request);
            }
        })
    };

    let on_tech_select = {
        let modal = modal.clone();
        Callback::from(move |content: ModalContent| modal.update(|m| m.present(content)))
    };
    let on_modal_close = {
        let modal = modal.clone();
        Callback::from(move |trigger: CloseTrigger| {
            modal.update(|m| m.close(trigger));
        })
    };
    let on_modal_backdrop = {
        let modal = modal.clone();
        Callback::from(move |is_backdrop: bool| {
            if is_backdrop {
                modal.update(|m| m.backdrop_click(true));
            }
        })
    };
    let on_modal_explore = {
        let modal = modal.clone();
        let episodes_id = config.episodes_section_id.clone();
        Callback::from(move |_: ()| {
            let episodes_top = dom::section_top(&episodes_id);
            let nav_height = dom::nav_height();
            if let Some(request) = modal.update(|m| m.explore(episodes_top, nav_height)) {
                dom::smooth_scroll(request);
            }
        })
    };

    let active = nav.read(|n| n.active().map(str::to_string));
    let nav_transform = scroll.read(ScrollState::nav_transform);
    let open_modal = modal.read(|m| m.content().cloned());
    let visible_toasts = toasts.read(|t| t.toasts().to_vec());

    html! {
        <ContextProvider<Rc<SiteConfig>> context={config.clone()}>
        <ContextProvider<Notifier> context={notifier}>
            <div class="landing-page">
                <NavBar
                    links={NAV_LINKS.to_vec()}
                    {active}
                    transform={nav_transform}
                    on_select={on_nav_select}
                />

                <section id="home" class="hero">
                    <div class="hero__content">
                        <h1 class="hero__title">{"Ancient Tech Decoded"}</h1>
                        <p class="hero__subtitle">
                            {"A podcast about the machines, materials and ideas our ancestors got right first."}
                        </p>
                    </div>
                    <FloatingCity />
                </section>

                <section id="episodes" class="episodes">
                    <h2 class="section-title">{"Episodes"}</h2>
                    <Episodes episodes={EPISODES.to_vec()} />
                </section>

                <section id="technology" class="technology">
                    <h2 class="section-title">{"Then and Now"}</h2>
                    <TechGrid items={tech_items()} on_select={on_tech_select} />
                </section>

                <section id="texts" class="texts">
                    <h2 class="section-title">{"Ancient Texts"}</h2>
                    <div class="texts__grid">
                        { for TEXT_CARDS.iter().map(|card| html! {
                            <RevealCard class="text-card">
                                <h3 class="text-card__title">{card.title}</h3>
                                <span class="text-card__origin">{card.origin}</span>
                                <p class="text-card__excerpt">{card.excerpt}</p>
                            </RevealCard>
                        }) }
                    </div>
                    <div class="themes">
                        { for THEMES.iter().map(|theme| html! {
                            <RevealCard class="theme-item">
                                <h4>{theme.name}</h4>
                                <p>{theme.blurb}</p>
                            </RevealCard>
                        }) }
                    </div>
                </section>

                <section id="newsletter" class="newsletter">
                    <h2 class="section-title">{"Stay in the Loop"}</h2>
                    <p>{"New episodes and field notes, straight to your inbox."}</p>
                    <NewsletterForm />
                </section>

                if let Some(content) = open_modal {
                    <TechModal
                        {content}
                        on_close={on_modal_close}
                        on_backdrop={on_modal_backdrop}
                        on_explore={on_modal_explore}
                    />
                }
                <Notifications toasts={visible_toasts} />
            </div>
        </ContextProvider<Notifier>>
        </ContextProvider<Rc<SiteConfig>>>
    }
}
