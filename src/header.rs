//! Header elevated/hidden tracking, recomputed on each coalesced scroll frame.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::config::SiteConfig;

/// Element id of the fixed site header.
pub const HEADER_ID: &str = "header";

/// Class added to `#header` while elevated.
pub const SCROLLED_CLASS: &str = "scrolled";

const HIDDEN_TRANSFORM: &str = "translateY(-100%)";
const VISIBLE_TRANSFORM: &str = "translateY(0)";

/// Whether a scroll offset is past the elevation threshold.
#[must_use]
pub fn is_elevated(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub elevated: bool,
    pub hidden: bool,
}

#[derive(Debug)]
pub struct HeaderTracker {
    elevate_px: f64,
    hide_px: Option<f64>,
    last_scroll: f64,
    state: HeaderState,
}

impl HeaderTracker {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            elevate_px: config.header_elevate_px,
            hide_px: config.header_hide_px,
            last_scroll: 0.0,
            state: HeaderState::default(),
        }
    }

    /// Recompute the header state for `scroll_y`.
    ///
    /// Hidden only while moving down past the hide threshold; any upward or
    /// zero movement, or being above the threshold, shows it again.
    pub fn update(&mut self, scroll_y: f64) -> HeaderState {
        let elevated = is_elevated(scroll_y, self.elevate_px);
        let hidden = self
            .hide_px
            .is_some_and(|hide_px| scroll_y > self.last_scroll && scroll_y > hide_px);
        self.last_scroll = scroll_y;
        self.state = HeaderState { elevated, hidden };
        self.state
    }

    /// Inline transform for the header, or `None` when hiding is disabled.
    #[must_use]
    pub fn transform(&self) -> Option<&'static str> {
        self.hide_px?;
        Some(if self.state.hidden { HIDDEN_TRANSFORM } else { VISIBLE_TRANSFORM })
    }
}
