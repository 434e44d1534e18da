use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notification::Notifier;
use crate::config::SiteConfig;
use crate::state::newsletter::{NewsletterState, SubmitOutcome};
use crate::state::notification::NotificationKind;
use crate::utils::shared::use_state_handle;

#[function_component]
pub fn NewsletterForm() -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let notifier = use_context::<Notifier>();
    let form = use_state_handle(NewsletterState::default);

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.update(|f| f.set_email(input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let delay_ms = config.newsletter_delay_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(notifier) = notifier.clone() else {
                log::warn!("Newsletter form rendered without a notifier");
                return;
            };
            match form.update(|f| f.submit()) {
                SubmitOutcome::Rejected(err) => {
                    notifier.notify(err.to_string(), NotificationKind::Error);
                }
                SubmitOutcome::Pending(email) => {
                    log::info!("Simulating newsletter signup for {}", email);
                    let form = form.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(delay_ms).await;
                        let message = form.update(|f| f.complete());
                        notifier.notify(message, NotificationKind::Success);
                    });
                }
                SubmitOutcome::Ignored => {}
            }
        })
    };

    let (email, submitting, label) =
        form.read(|f| (f.email().to_string(), f.is_submitting(), f.button_label()));

    html! {
        <form class="newsletter-form" {onsubmit} novalidate=true>
            <input
                type="email"
                class="form-control"
                placeholder="you@example.com"
                value={email}
                {oninput}
            />
            <button type="submit" class="btn btn--primary" disabled={submitting}>
                {label}
            </button>
        </form>
    }
}
