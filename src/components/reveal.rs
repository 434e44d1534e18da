use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::state::reveal::RevealLatch;

/// Watches `node` and returns the entrance-animation class once it has
/// scrolled into view. The observer detaches after the first reveal.
#[hook]
pub fn use_reveal(node: NodeRef) -> Option<&'static str> {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let latch = use_state_eq(RevealLatch::default);

    {
        let latch = latch.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut cleanup: Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>)> = None;
                if let Some(element) = node.cast::<Element>() {
                    let mut seen = *latch;
                    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                    continue;
                                };
                                if seen.observe(entry.is_intersecting()) {
                                    latch.set(seen);
                                    observer.unobserve(&entry.target());
                                }
                            }
                        },
                    );
                    let mut options = IntersectionObserverInit::new();
                    options
                        .root_margin(&config.reveal_root_margin())
                        .threshold(&JsValue::from_f64(config.reveal_threshold));
                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                        Ok(observer) => {
                            observer.observe(&element);
                            cleanup = Some((observer, callback));
                        }
                        Err(e) => log::warn!("IntersectionObserver unavailable: {:?}", e),
                    }
                }
                move || {
                    if let Some((observer, _callback)) = cleanup {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    latch.class()
}

#[derive(Properties, PartialEq)]
pub struct RevealCardProps {
    pub class: &'static str,
    #[prop_or_default]
    pub children: Children,
}

/// Plain content card that fades in on first sight.
#[function_component]
pub fn RevealCard(props: &RevealCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    html! {
        <div ref={node} class={classes!(props.class, revealed)}>
            { for props.children.iter() }
        </div>
    }
}
