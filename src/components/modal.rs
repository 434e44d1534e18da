use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use crate::state::modal::{CloseTrigger, ModalContent, MODAL_STYLES};

#[derive(Properties, PartialEq)]
pub struct TechModalProps {
    pub content: ModalContent,
    pub on_close: Callback<CloseTrigger>,
    /// Receives whether the click landed on the backdrop itself.
    pub on_backdrop: Callback<bool>,
    pub on_explore: Callback<()>,
}

/// Detail dialog for a technology pairing. The style block is rendered with
/// the overlay so both disappear together.
#[function_component]
pub fn TechModal(props: &TechModalProps) -> Html {
    let backdrop = use_node_ref();

    let on_icon_close = props.on_close.reform(|_: MouseEvent| CloseTrigger::Icon);
    let on_button_close = props.on_close.reform(|_: MouseEvent| CloseTrigger::Button);
    let on_explore = props.on_explore.reform(|_: MouseEvent| ());
    let on_backdrop_click = {
        let backdrop = backdrop.clone();
        props.on_backdrop.reform(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            target.is_some() && target == backdrop.get()
        })
    };

    html! {
        <>
            <style>{MODAL_STYLES}</style>
            <div class="tech-modal" role="dialog" aria-modal="true">
                <div ref={backdrop} class="tech-modal__backdrop" onclick={on_backdrop_click}>
                    <div class="tech-modal__content">
                        <button class="tech-modal__close" aria-label="Close" onclick={on_icon_close}>{"×"}</button>
                        <h3 class="tech-modal__title">{props.content.title()}</h3>
                        <p class="tech-modal__description">{&props.content.description}</p>
                        <div class="tech-modal__actions">
                            <button class="btn btn--primary tech-modal__explore" onclick={on_explore}>
                                {"Explore Episode"}
                            </button>
                            <button class="btn btn--outline tech-modal__close-btn" onclick={on_button_close}>
                                {"Close"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </>
    }
}
