use crate::state::modal::ModalContent;

pub const CONNECTOR_GLOW: &str = "0 0 20px rgba(50, 184, 198, 0.6)";
pub const HIGHLIGHT_BACKGROUND: &str = "var(--color-bg-1)";
pub const SURFACE_BACKGROUND: &str = "var(--color-surface)";

/// One cell of the "then and now" technology grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TechItem {
    pub ancient: &'static str,
    pub modern: &'static str,
    pub description: &'static str,
    pub category: Option<&'static str>,
    pub connector: bool,
}

/// Inline styles currently applied to a grid item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemHighlight {
    pub glow: bool,
    pub background: Option<&'static str>,
}

impl ItemHighlight {
    pub fn connector_shadow(&self) -> &'static str {
        if self.glow {
            CONNECTOR_GLOW
        } else {
            "none"
        }
    }

    pub fn style(&self) -> Option<String> {
        self.background.map(|bg| format!("background: {};", bg))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridState {
    items: Vec<TechItem>,
    highlights: Vec<ItemHighlight>,
}

impl GridState {
    pub fn new(items: Vec<TechItem>) -> Self {
        let highlights = vec![ItemHighlight::default(); items.len()];
        Self { items, highlights }
    }

    pub fn items(&self) -> &[TechItem] {
        &self.items
    }

    pub fn highlight(&self, index: usize) -> ItemHighlight {
        self.highlights.get(index).copied().unwrap_or_default()
    }

    pub fn pointer_enter(&mut self, index: usize) {
        let (Some(item), Some(highlight)) = (self.items.get(index), self.highlights.get_mut(index))
        else {
            return;
        };
        // Items without a connector only get the background swap.
        highlight.glow = item.connector;
        if item.category.is_some() {
            highlight.background = Some(HIGHLIGHT_BACKGROUND);
        }
    }

    pub fn pointer_leave(&mut self, index: usize) {
        if let Some(highlight) = self.highlights.get_mut(index) {
            highlight.glow = false;
            highlight.background = Some(SURFACE_BACKGROUND);
        }
    }

    pub fn click(&self, index: usize) -> Option<ModalContent> {
        self.items.get(index).map(|item| {
            ModalContent::new(item.ancient, item.modern, item.description)
        })
    }
}
