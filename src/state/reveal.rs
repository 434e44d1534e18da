/// Classes whose elements get an entrance animation.
pub const OBSERVED_CLASSES: [&str; 4] = ["episode-card", "tech-item", "text-card", "theme-item"];

pub const REVEALED_CLASS: &str = "animate-in";

/// One-shot latch: once an element has been seen it stays revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one intersection callback. Returns true only on the transition
    /// into the revealed state.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn class(&self) -> Option<&'static str> {
        self.revealed.then_some(REVEALED_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_and_never_reverts() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert_eq!(latch.class(), None);
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.is_revealed());
        assert_eq!(latch.class(), Some(REVEALED_CLASS));
    }
}
