use yew::prelude::*;

use crate::content::NavLink;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub links: Vec<NavLink>,
    pub active: Option<String>,
    pub transform: &'static str,
    pub on_select: Callback<String>,
}

#[function_component]
pub fn NavBar(props: &NavBarProps) -> Html {
    html! {
        <nav class="nav" style={format!("transform: {};", props.transform)}>
            <div class="nav__container">
                <a class="nav__brand" href="#home">{"Ancient Tech Decoded"}</a>
                <ul class="nav__menu">
                    { for props.links.iter().map(|link| {
                        let is_active = props.active.as_deref() == Some(link.id);
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let id = link.id.to_string();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_select.emit(id.clone());
                            })
                        };
                        html! {
                            <li>
                                <a
                                    href={format!("#{}", link.id)}
                                    class={classes!("nav__link", is_active.then_some("active"))}
                                    {onclick}
                                >
                                    {link.label}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </nav>
    }
}
