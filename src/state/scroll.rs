/// Tracks the last scroll offset so the nav bar can hide while the reader
/// scrolls down and come back on the way up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    last_offset: f64,
    nav_hidden: bool,
}

impl ScrollState {
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn nav_hidden(&self) -> bool {
        self.nav_hidden
    }

    /// Returns whether the nav bar should now be hidden.
    pub fn on_scroll(&mut self, offset: f64, hide_threshold: f64) -> bool {
        self.nav_hidden = offset > self.last_offset && offset > hide_threshold;
        self.last_offset = offset;
        self.nav_hidden
    }

    pub fn nav_transform(&self) -> &'static str {
        if self.nav_hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}
