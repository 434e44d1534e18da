use yew::prelude::*;

use crate::components::reveal::use_reveal;
use crate::state::grid::{GridState, ItemHighlight, TechItem};
use crate::state::modal::ModalContent;
use crate::utils::shared::use_state_handle;

#[derive(Properties, PartialEq)]
pub struct TechGridProps {
    pub items: Vec<TechItem>,
    pub on_select: Callback<ModalContent>,
}

#[function_component]
pub fn TechGrid(props: &TechGridProps) -> Html {
    let grid = {
        let items = props.items.clone();
        use_state_handle(move || GridState::new(items))
    };

    let on_enter = {
        let grid = grid.clone();
        Callback::from(move |index: usize| grid.update(|g| g.pointer_enter(index)))
    };
    let on_leave = {
        let grid = grid.clone();
        Callback::from(move |index: usize| grid.update(|g| g.pointer_leave(index)))
    };
    let on_click = {
        let grid = grid.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |index: usize| {
            if let Some(content) = grid.read(|g| g.click(index)) {
                on_select.emit(content);
            }
        })
    };

    let cells = grid.read(|g| {
        g.items()
            .iter()
            .enumerate()
            .map(|(index, item)| (index, item.clone(), g.highlight(index)))
            .collect::<Vec<_>>()
    });

    html! {
        <div class="tech-grid">
            { for cells.into_iter().map(|(index, item, highlight)| html! {
                <TechItemCell
                    key={index}
                    {index}
                    {item}
                    {highlight}
                    on_enter={on_enter.clone()}
                    on_leave={on_leave.clone()}
                    on_click={on_click.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TechItemCellProps {
    pub index: usize,
    pub item: TechItem,
    pub highlight: ItemHighlight,
    pub on_enter: Callback<usize>,
    pub on_leave: Callback<usize>,
    pub on_click: Callback<usize>,
}

#[function_component]
pub fn TechItemCell(props: &TechItemCellProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let index = props.index;
    let item = &props.item;

    let onmouseenter = props.on_enter.reform(move |_: MouseEvent| index);
    let onmouseleave = props.on_leave.reform(move |_: MouseEvent| index);
    let onclick = props.on_click.reform(move |_: MouseEvent| index);

    html! {
        <div
            ref={node}
            class={classes!("tech-item", revealed)}
            data-category={item.category}
            style={props.highlight.style()}
            {onmouseenter}
            {onmouseleave}
            {onclick}
        >
            <span class="tech-item__ancient">{item.ancient}</span>
            if item.connector {
                <div
                    class="tech-item__connector"
                    style={format!("box-shadow: {};", props.highlight.connector_shadow())}
                ></div>
            }
            <span class="tech-item__modern">{item.modern}</span>
            <p class="tech-item__description">{item.description}</p>
        </div>
    }
}
