//! Skill-bar and counter targets, tweens, and display formatting.
//!
//! Both animate linearly from zero after a short start delay so the reveal
//! transition is already underway. The final frame shows the target exactly;
//! counters floor while running so they never display a value above `N`.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::anim::Tween;
use crate::config::SiteConfig;
use crate::easing::Curve;

/// Attribute carrying a skill bar's fill percentage.
pub const SKILL_ATTR: &str = "data-skill";

/// Attribute carrying a counter's integer target.
pub const COUNT_ATTR: &str = "data-count";

/// Target fill of a skill bar, in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillSpec {
    pub target_pct: f64,
}

impl SkillSpec {
    /// Parse `"85"` or `"85%"`, clamped to `0..=100`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let Ok(value) = raw.trim().trim_end_matches('%').trim().parse::<f64>() else {
            return None;
        };
        if !value.is_finite() {
            return None;
        }
        Some(Self { target_pct: value.clamp(0.0, 100.0) })
    }

    #[must_use]
    pub fn tween(&self, config: &SiteConfig) -> Tween {
        Tween::new(0.0, self.target_pct, config.skill_duration_ms, Curve::Linear).with_delay(config.skill_delay_ms)
    }

    /// Inline `width` for an interpolated value, rounded to two decimals.
    #[must_use]
    pub fn width(&self, value: f64) -> String {
        let shown = value.clamp(0.0, self.target_pct);
        format!("{}%", (shown * 100.0).round() / 100.0)
    }
}

/// Integer target of a counter and whether its text ends in `+`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: u64,
    pub plus_suffix: bool,
}

impl CounterSpec {
    /// Build from the `data-count` attribute and the element's original text.
    ///
    /// An empty attribute falls back to the digits in `text`.
    #[must_use]
    pub fn parse(data_count: &str, text: &str) -> Option<Self> {
        let plus_suffix = text.trim_end().ends_with('+') || data_count.trim_end().ends_with('+');
        let source = if data_count.trim().is_empty() { text } else { data_count };
        let digits = source.chars().filter(char::is_ascii_digit).collect::<String>();
        let Ok(target) = digits.parse::<u64>() else {
            return None;
        };
        Some(Self { target, plus_suffix })
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn tween(&self, config: &SiteConfig) -> Tween {
        Tween::new(0.0, self.target as f64, config.counter_duration_ms, Curve::Linear)
            .with_delay(config.counter_delay_ms)
    }

    /// Text for an interpolated value: floored, capped at the target, with
    /// the `+` suffix when the original had one.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn text(&self, value: f64) -> String {
        let shown = if value >= self.target as f64 {
            self.target
        } else if value.is_finite() && value > 0.0 {
            (value.floor() as u64).min(self.target)
        } else {
            0
        };
        if self.plus_suffix { format!("{shown}+") } else { shown.to_string() }
    }
}
