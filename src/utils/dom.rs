//! Measurements and side effects against the live document.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::error::SiteError;
use crate::state::nav::{ScrollRequest, SectionSpan};

pub const NAV_SELECTOR: &str = ".nav";
pub const EPISODE_CARD_CLASS: &str = "episode-card";
pub const EPISODE_INDEX_ATTR: &str = "data-episode-index";

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoWindow)
}

pub fn element_by_id(id: &str) -> Result<HtmlElement, SiteError> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| SiteError::MissingElement(format!("#{}", id)))
}

fn query(selector: &str) -> Result<HtmlElement, SiteError> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| SiteError::MissingElement(selector.to_string()))
}

/// Offset of a section from the document top, `None` if it isn't on the page.
pub fn section_top(id: &str) -> Option<f64> {
    match element_by_id(id) {
        Ok(section) => Some(f64::from(section.offset_top())),
        Err(e) => {
            log::debug!("Scroll target skipped: {}", e);
            None
        }
    }
}

pub fn nav_height() -> f64 {
    query(NAV_SELECTOR)
        .map(|nav| f64::from(nav.offset_height()))
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    window().ok().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_size() -> Option<(f64, f64)> {
    let window = window().ok()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Every `section[id]` with its vertical extent.
pub fn section_spans() -> Vec<SectionSpan> {
    let Ok(sections) = document().and_then(|doc| {
        doc.query_selector_all("section[id]")
            .map_err(|_| SiteError::MissingElement("section[id]".to_string()))
    }) else {
        return vec![];
    };
    (0..sections.length())
        .filter_map(|i| sections.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| {
            SectionSpan::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect()
}

pub fn smooth_scroll(request: ScrollRequest) {
    if let Ok(window) = window() {
        let mut options = ScrollToOptions::new();
        options.top(request.top).behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Index of the episode card holding focus, if any.
pub fn focused_card_index() -> Option<usize> {
    let active = document().ok()?.active_element()?;
    if !active.class_list().contains(EPISODE_CARD_CLASS) {
        return None;
    }
    active.get_attribute(EPISODE_INDEX_ATTR)?.parse().ok()
}

pub fn focus_card(index: usize) {
    let selector = format!(".{}[{}=\"{}\"]", EPISODE_CARD_CLASS, EPISODE_INDEX_ATTR, index);
    match query(&selector) {
        Ok(card) => {
            if let Err(e) = card.focus() {
                log::debug!("Failed to focus episode card {}: {:?}", index, e);
            }
        }
        Err(e) => log::debug!("Focus target skipped: {}", e),
    }
}
