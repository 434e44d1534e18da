use serde::Deserialize;

const SITE_CONFIG: &str = include_str!("../config/site.json");

/// Timing and geometry knobs for every interactive piece of the page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub tick_interval_ms: u32,
    pub episode_duration_ticks: u32,
    pub nav_hide_threshold_px: f64,
    pub section_lookahead_px: f64,
    pub newsletter_delay_ms: u32,
    pub notification_visible_ms: u32,
    pub notification_exit_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin_px: u32,
    pub episodes_section_id: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            episode_duration_ticks: 30,
            nav_hide_threshold_px: 100.0,
            section_lookahead_px: 100.0,
            newsletter_delay_ms: 2000,
            notification_visible_ms: 5000,
            notification_exit_ms: 300,
            reveal_threshold: 0.1,
            reveal_bottom_margin_px: 50,
            episodes_section_id: "episodes".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse the config bundled into the binary, falling back to defaults.
    pub fn load() -> Self {
        Self::from_json(SITE_CONFIG).unwrap_or_else(|e| {
            log::warn!("Failed to parse bundled site config, using defaults: {}", e);
            Self::default()
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Root margin string handed to the IntersectionObserver.
    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_bottom_margin_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_config_matches_defaults() {
        assert_eq!(SiteConfig::from_json(SITE_CONFIG).unwrap(), SiteConfig::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = SiteConfig::from_json(r#"{ "episode_duration_ticks": 5 }"#).unwrap();
        assert_eq!(config.episode_duration_ticks, 5);
        assert_eq!(config.newsletter_delay_ms, 2000);
        assert_eq!(config.episodes_section_id, "episodes");
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(SiteConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn reveal_root_margin_uses_negative_bottom() {
        assert_eq!(SiteConfig::default().reveal_root_margin(), "0px 0px -50px 0px");
    }
}
