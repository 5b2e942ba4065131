//! Site configuration and variant presets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two generations of the site script shipped with different thresholds and
//! durations. [`Variant`] names them; [`SiteConfig::for_variant`] yields the
//! preset and [`SiteConfig::from_json`] applies per-field overrides from the
//! page's inline `#folio-config` block on top of the chosen preset.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

/// Element id of the optional inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Which generation of site behavior to reproduce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Header elevates past 100px and hides on downward scroll; 600ms scroll.
    #[default]
    Modern,
    /// Header elevates past 50px and never hides; 800ms scroll.
    Classic,
}

/// Resolved configuration used by every controller.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub variant: Variant,
    /// Scroll position beyond which the header is elevated.
    pub header_elevate_px: f64,
    /// Scroll position beyond which downward scrolling hides the header.
    /// `None` disables hiding.
    pub header_hide_px: Option<f64>,
    pub scroll_duration_ms: f64,
    /// Offset used instead of the header height when the page has no header.
    pub scroll_fallback_offset_px: f64,
    pub menu_link_close_delay_ms: u32,
    pub menu_stagger_ms: u32,
    pub swipe_close_px: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_selectors: Vec<String>,
    pub skill_duration_ms: f64,
    pub skill_delay_ms: f64,
    pub counter_duration_ms: f64,
    pub counter_delay_ms: f64,
    /// Speed of the single hero background layer.
    pub hero_parallax_speed: f64,
    pub konami_duration_ms: u32,
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::for_variant(Variant::Modern)
    }
}

impl SiteConfig {
    /// Preset values for a variant.
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        let (header_elevate_px, header_hide_px, scroll_duration_ms) = match variant {
            Variant::Modern => (100.0, Some(300.0), 600.0),
            Variant::Classic => (50.0, None, 800.0),
        };
        Self {
            variant,
            header_elevate_px,
            header_hide_px,
            scroll_duration_ms,
            scroll_fallback_offset_px: 80.0,
            menu_link_close_delay_ms: 500,
            menu_stagger_ms: 50,
            swipe_close_px: 50.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),
            reveal_selectors: vec![
                ".group".to_owned(),
                "section > div".to_owned(),
                "footer > div".to_owned(),
                "[data-reveal]".to_owned(),
            ],
            skill_duration_ms: 1500.0,
            skill_delay_ms: 200.0,
            counter_duration_ms: 2000.0,
            counter_delay_ms: 100.0,
            hero_parallax_speed: 0.5,
            konami_duration_ms: 3000,
            log_level: log::Level::Info,
        }
    }

    /// Parse an inline config block and layer it over its variant preset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::OutOfRange`] for non-positive durations or a reveal
    /// threshold outside `0.0..=1.0`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let overrides: ConfigOverrides = serde_json::from_str(raw)?;
        let mut config = Self::for_variant(overrides.variant.unwrap_or_default());
        overrides.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Combined reveal selector for `querySelectorAll`.
    #[must_use]
    pub fn reveal_selector(&self) -> String {
        self.reveal_selectors.join(", ")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("scroll_duration_ms", self.scroll_duration_ms),
            ("skill_duration_ms", self.skill_duration_ms),
            ("counter_duration_ms", self.counter_duration_ms),
        ];
        for (field, value) in durations {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        for (field, value) in [("skill_delay_ms", self.skill_delay_ms), ("counter_delay_ms", self.counter_delay_ms)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        let finite = [
            ("header_elevate_px", self.header_elevate_px),
            ("header_hide_px", self.header_hide_px.unwrap_or(0.0)),
            ("scroll_fallback_offset_px", self.scroll_fallback_offset_px),
            ("hero_parallax_speed", self.hero_parallax_speed),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::OutOfRange { field: "reveal_threshold", value: self.reveal_threshold });
        }
        if !(self.swipe_close_px.is_finite() && self.swipe_close_px > 0.0) {
            return Err(ConfigError::OutOfRange { field: "swipe_close_px", value: self.swipe_close_px });
        }
        Ok(())
    }
}

/// Wire shape of the inline config block. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigOverrides {
    variant: Option<Variant>,
    header_elevate_px: Option<f64>,
    /// `null` is indistinguishable from absent here; use `header_hide = false`.
    header_hide_px: Option<f64>,
    header_hide: Option<bool>,
    scroll_duration_ms: Option<f64>,
    scroll_fallback_offset_px: Option<f64>,
    menu_link_close_delay_ms: Option<u32>,
    menu_stagger_ms: Option<u32>,
    swipe_close_px: Option<f64>,
    reveal_threshold: Option<f64>,
    reveal_root_margin: Option<String>,
    reveal_selectors: Option<Vec<String>>,
    skill_duration_ms: Option<f64>,
    skill_delay_ms: Option<f64>,
    counter_duration_ms: Option<f64>,
    counter_delay_ms: Option<f64>,
    hero_parallax_speed: Option<f64>,
    konami_duration_ms: Option<u32>,
    log_level: Option<String>,
}

impl ConfigOverrides {
    fn apply(self, config: &mut SiteConfig) {
        if let Some(v) = self.header_elevate_px {
            config.header_elevate_px = v;
        }
        if let Some(v) = self.header_hide_px {
            config.header_hide_px = Some(v);
        }
        if self.header_hide == Some(false) {
            config.header_hide_px = None;
        } else if self.header_hide == Some(true) && config.header_hide_px.is_none() {
            config.header_hide_px = Some(300.0);
        }
        if let Some(v) = self.scroll_duration_ms {
            config.scroll_duration_ms = v;
        }
        if let Some(v) = self.scroll_fallback_offset_px {
            config.scroll_fallback_offset_px = v;
        }
        if let Some(v) = self.menu_link_close_delay_ms {
            config.menu_link_close_delay_ms = v;
        }
        if let Some(v) = self.menu_stagger_ms {
            config.menu_stagger_ms = v;
        }
        if let Some(v) = self.swipe_close_px {
            config.swipe_close_px = v;
        }
        if let Some(v) = self.reveal_threshold {
            config.reveal_threshold = v;
        }
        if let Some(v) = self.reveal_root_margin {
            config.reveal_root_margin = v;
        }
        if let Some(v) = self.reveal_selectors.filter(|s| !s.is_empty()) {
            config.reveal_selectors = v;
        }
        if let Some(v) = self.skill_duration_ms {
            config.skill_duration_ms = v;
        }
        if let Some(v) = self.skill_delay_ms {
            config.skill_delay_ms = v;
        }
        if let Some(v) = self.counter_duration_ms {
            config.counter_duration_ms = v;
        }
        if let Some(v) = self.counter_delay_ms {
            config.counter_delay_ms = v;
        }
        if let Some(v) = self.hero_parallax_speed {
            config.hero_parallax_speed = v;
        }
        if let Some(v) = self.konami_duration_ms {
            config.konami_duration_ms = v;
        }
        match self.log_level.as_deref().map(str::parse::<log::Level>) {
            Some(Ok(level)) => config.log_level = level,
            Some(Err(_)) => log::warn!("ignoring unknown log level in site config"),
            None => {}
        }
    }
}
