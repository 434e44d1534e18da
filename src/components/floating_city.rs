use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::state::parallax::CityTilt;
use crate::utils::dom;

/// Hero illustration that tilts toward the pointer.
#[function_component]
pub fn FloatingCity() -> Html {
    let tilt = use_state_eq(|| None::<CityTilt>);

    {
        let tilt = tilt.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Ok(document) = dom::document() {
                    let callback = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                        let Some((width, height)) = dom::viewport_size() else {
                            return;
                        };
                        let next = CityTilt::from_pointer(
                            f64::from(e.client_x()),
                            f64::from(e.client_y()),
                            width,
                            height,
                        );
                        if next.is_some() {
                            tilt.set(next);
                        }
                    });
                    if let Err(e) = document
                        .add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("Failed to bind mousemove listener: {:?}", e);
                    }
                    Box::new(move || {
                        let _ = document.remove_event_listener_with_callback(
                            "mousemove",
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

    let style = (*tilt).map(|t| format!("transform: {};", t.transform()));

    html! {
        <div class="floating-city" {style}>
            <div class="floating-city__tower"></div>
            <div class="floating-city__tower floating-city__tower--tall"></div>
            <div class="floating-city__tower"></div>
            <div class="floating-city__platform"></div>
        </div>
    }
}
