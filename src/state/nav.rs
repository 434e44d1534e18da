/// Vertical extent of a page section, measured from the document top.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// A smooth scroll the render layer should perform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
}

/// Places a section's top just below the navigation bar.
pub fn scroll_target(section_top: f64, nav_height: f64) -> ScrollRequest {
    ScrollRequest {
        top: section_top - nav_height,
    }
}

/// Position used to decide which section is currently being read.
pub fn section_probe(scroll_y: f64, nav_height: f64, lookahead: f64) -> f64 {
    scroll_y + nav_height + lookahead
}

/// Active-link state for the navigation bar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    links: Vec<String>,
    active: Option<String>,
}

impl NavState {
    pub fn new<I, S>(links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            links: links.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, link: &str) -> bool {
        self.active.as_deref() == Some(link)
    }

    /// Handles a click on a nav link. `target_top` is the measured offset of
    /// the linked section, or `None` when the section is not on the page, in
    /// which case nothing changes.
    pub fn activate(
        &mut self,
        link: &str,
        target_top: Option<f64>,
        nav_height: f64,
    ) -> Option<ScrollRequest> {
        let top = target_top?;
        self.active = Some(link.to_string());
        Some(scroll_target(top, nav_height))
    }

    /// Re-derives the active link from the scroll probe. When no section
    /// contains the probe the previous active link is kept.
    pub fn recompute(&mut self, probe: f64, sections: &[SectionSpan]) {
        if let Some(section) = sections.iter().find(|s| s.contains(probe)) {
            self.active = self
                .links
                .iter()
                .find(|link| **link == section.id)
                .cloned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn nav() -> NavState {
        NavState::new(["home", "episodes", "technology", "newsletter"])
    }

    #[fixture]
    fn sections() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new("home", 0.0, 800.0),
            SectionSpan::new("episodes", 800.0, 1200.0),
            SectionSpan::new("technology", 2000.0, 900.0),
            SectionSpan::new("footer-notes", 2900.0, 300.0),
        ]
    }

    #[rstest]
    fn nothing_active_initially(nav: NavState) {
        assert_eq!(nav.active(), None);
    }

    #[rstest]
    fn click_activates_link_and_scrolls_below_nav(mut nav: NavState) {
        let request = nav.activate("episodes", Some(800.0), 72.0);
        assert_eq!(request, Some(ScrollRequest { top: 728.0 }));
        assert!(nav.is_active("episodes"));
        assert!(!nav.is_active("home"));
    }

    #[rstest]
    fn click_on_missing_section_is_noop(mut nav: NavState) {
        nav.activate("home", Some(0.0), 72.0);
        assert_eq!(nav.activate("newsletter", None, 72.0), None);
        assert_eq!(nav.active(), Some("home"));
    }

    #[rstest]
    #[case(0.0, Some("home"))]
    #[case(700.0, Some("episodes"))]
    #[case(1900.0, Some("technology"))]
    fn scroll_probe_selects_section(
        mut nav: NavState,
        sections: Vec<SectionSpan>,
        #[case] scroll_y: f64,
        #[case] expected: Option<&str>,
    ) {
        nav.recompute(section_probe(scroll_y, 70.0, 100.0), &sections);
        assert_eq!(nav.active(), expected);
    }

    #[rstest]
    fn moving_between_sections_switches_active_link(mut nav: NavState, sections: Vec<SectionSpan>) {
        nav.recompute(section_probe(100.0, 70.0, 100.0), &sections);
        assert_eq!(nav.active(), Some("home"));
        nav.recompute(section_probe(900.0, 70.0, 100.0), &sections);
        assert_eq!(nav.active(), Some("episodes"));
        assert!(!nav.is_active("home"));
    }

    #[rstest]
    fn section_without_link_clears_all(mut nav: NavState, sections: Vec<SectionSpan>) {
        nav.recompute(section_probe(900.0, 70.0, 100.0), &sections);
        nav.recompute(2950.0, &sections);
        assert_eq!(nav.active(), None);
    }

    #[rstest]
    fn probe_past_every_section_keeps_previous(mut nav: NavState, sections: Vec<SectionSpan>) {
        nav.recompute(section_probe(1900.0, 70.0, 100.0), &sections);
        nav.recompute(10_000.0, &sections);
        assert_eq!(nav.active(), Some("technology"));
    }

    #[test]
    fn span_end_is_exclusive() {
        let span = SectionSpan::new("a", 100.0, 50.0);
        assert!(span.contains(100.0));
        assert!(span.contains(149.9));
        assert!(!span.contains(150.0));
    }
}
