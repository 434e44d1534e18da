use crate::state::nav::{scroll_target, ScrollRequest};

/// Text shown by the technology detail dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalContent {
    pub ancient: String,
    pub modern: String,
    pub description: String,
}

impl ModalContent {
    pub fn new(
        ancient: impl Into<String>,
        modern: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            ancient: ancient.into(),
            modern: modern.into(),
            description: description.into(),
        }
    }

    pub fn title(&self) -> String {
        format!("{} ↔ {}", self.ancient, self.modern)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    Icon,
    Button,
    Backdrop,
    Escape,
}

/// The dialog overlay. The overlay and its style block are rendered as one
/// unit, so closing removes both no matter which trigger fired.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: Option<ModalContent>,
}

impl ModalState {
    pub fn content(&self) -> Option<&ModalContent> {
        self.open.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Opening while a dialog is already up replaces its content.
    pub fn present(&mut self, content: ModalContent) {
        self.open = Some(content);
    }

    /// Returns whether a dialog was torn down.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        let closed = self.open.take().is_some();
        if closed {
            log::debug!("Tech modal closed via {:?}", trigger);
        }
        closed
    }

    /// Clicks bubbling up from the dialog content must not close it.
    pub fn backdrop_click(&mut self, target_is_backdrop: bool) -> bool {
        target_is_backdrop && self.close(CloseTrigger::Backdrop)
    }

    /// "Explore Episode": tear down, then scroll to the episodes section if
    /// the page has one.
    pub fn explore(&mut self, episodes_top: Option<f64>, nav_height: f64) -> Option<ScrollRequest> {
        self.open.take()?;
        episodes_top.map(|top| scroll_target(top, nav_height))
    }
}

pub const MODAL_STYLES: &str = r#"
        .tech-modal {
            position: fixed;
            top: 0;
            left: 0;
            width: 100%;
            height: 100%;
            z-index: 2000;
            animation: fadeIn 0.3s ease-out;
        }
        .tech-modal__backdrop {
            width: 100%;
            height: 100%;
            background: rgba(19, 52, 59, 0.9);
            display: flex;
            align-items: center;
            justify-content: center;
            padding: var(--space-20);
        }
        .tech-modal__content {
            background: var(--color-surface);
            border-radius: var(--radius-lg);
            padding: var(--space-32);
            max-width: 500px;
            width: 100%;
            position: relative;
            border: 1px solid var(--color-teal-300);
            box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
        }
        .tech-modal__close {
            position: absolute;
            top: var(--space-16);
            right: var(--space-16);
            background: none;
            border: none;
            font-size: var(--font-size-2xl);
            color: var(--color-text-secondary);
            cursor: pointer;
        }
        .tech-modal__close:hover {
            color: var(--color-teal-300);
        }
        .tech-modal__title {
            font-size: var(--font-size-xl);
            margin-bottom: var(--space-16);
            color: var(--color-teal-300);
            text-align: center;
        }
        .tech-modal__description {
            margin-bottom: var(--space-24);
            line-height: 1.6;
            text-align: center;
        }
        .tech-modal__actions {
            display: flex;
            gap: var(--space-12);
            justify-content: center;
        }
        @keyframes fadeIn {
            from { opacity: 0; }
            to { opacity: 1; }
        }
    "#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn open_modal() -> ModalState {
        let mut modal = ModalState::default();
        modal.present(ModalContent::new("Baghdad Battery", "Electroplating", "Clay jar cell."));
        modal
    }

    #[rstest]
    #[case(CloseTrigger::Icon)]
    #[case(CloseTrigger::Button)]
    #[case(CloseTrigger::Backdrop)]
    #[case(CloseTrigger::Escape)]
    fn every_close_path_tears_down(#[case] trigger: CloseTrigger) {
        let mut modal = open_modal();
        assert!(modal.close(trigger));
        assert!(!modal.is_open());
        assert!(!modal.close(trigger));
    }

    #[test]
    fn bubbled_click_keeps_dialog_open() {
        let mut modal = open_modal();
        assert!(!modal.backdrop_click(false));
        assert!(modal.is_open());
        assert!(modal.backdrop_click(true));
        assert!(!modal.is_open());
    }

    #[test]
    fn explore_closes_and_scrolls() {
        let mut modal = open_modal();
        assert_eq!(modal.explore(Some(900.0), 80.0), Some(ScrollRequest { top: 820.0 }));
        assert!(!modal.is_open());
    }

    #[test]
    fn explore_without_episodes_section_only_closes() {
        let mut modal = open_modal();
        assert_eq!(modal.explore(None, 80.0), None);
        assert!(!modal.is_open());
    }

    #[test]
    fn present_replaces_open_dialog() {
        let mut modal = open_modal();
        modal.present(ModalContent::new("Damascus Steel", "Carbon Nanotubes", "Patterned blades."));
        assert_eq!(
            modal.content().map(ModalContent::title),
            Some("Damascus Steel ↔ Carbon Nanotubes".to_string())
        );
    }
}
