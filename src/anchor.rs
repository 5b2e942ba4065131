//! Same-page anchor resolution and smooth scroll planning.
//!
//! A click on `a[href^="#"]` becomes a [`ScrollStart`]: the menu is closed
//! first, scroll ownership is claimed from the [`ViewportState`], and a
//! cubic ease-in-out [`Tween`] from the current offset to the target is
//! handed to the scheduler. Frames are written back through
//! [`SmoothScroller::on_frame`], which drops them once a newer scroll has
//! taken over.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

use crate::anim::Tween;
use crate::config::SiteConfig;
use crate::easing::Curve;
use crate::menu::{MenuController, MenuTransition, TOGGLE_HREF};
use crate::viewport::{ScrollTicket, ViewportState};

/// Element id addressed by a same-page anchor, or `None` when the click
/// should be left alone (menu toggle, bare `#`, other pages).
#[must_use]
pub fn anchor_target_id(href: &str) -> Option<&str> {
    if href == TOGGLE_HREF {
        return None;
    }
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(id)
}

/// Scroll offset that puts `target_doc_top` just below the fixed header.
///
/// `header_height` is the header's rendered height, or `None` when the page
/// has no header, in which case `fallback_offset` is used.
#[must_use]
pub fn target_offset(target_doc_top: f64, header_height: Option<f64>, fallback_offset: f64) -> f64 {
    (target_doc_top - header_height.unwrap_or(fallback_offset)).max(0.0)
}

/// Start and end of one scroll animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPlan {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl ScrollPlan {
    #[must_use]
    pub fn tween(&self) -> Tween {
        Tween::new(self.from, self.to, self.duration_ms, Curve::EaseInOutCubic)
    }
}

/// A scroll that has claimed the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollStart {
    pub plan: ScrollPlan,
    pub ticket: ScrollTicket,
    /// The menu was open and has been closed as part of this start.
    pub closed_menu: bool,
}

#[derive(Debug)]
pub struct SmoothScroller {
    duration_ms: f64,
    fallback_offset: f64,
    active: Option<ScrollTicket>,
}

impl SmoothScroller {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            duration_ms: config.scroll_duration_ms,
            fallback_offset: config.scroll_fallback_offset_px,
            active: None,
        }
    }

    /// Close the menu if needed, then claim the viewport and plan the scroll.
    ///
    /// Returns `None` only if the viewport refused the claim.
    pub fn begin(
        &mut self,
        menu: &mut MenuController,
        viewport: &mut ViewportState,
        target_doc_top: f64,
        header_height: Option<f64>,
    ) -> Option<ScrollStart> {
        let closed_menu = menu.close(viewport) == MenuTransition::Closed;
        let ticket = viewport.claim_scroll()?;
        let plan = ScrollPlan {
            from: viewport.scroll_y(),
            to: target_offset(target_doc_top, header_height, self.fallback_offset),
            duration_ms: self.duration_ms,
        };
        self.active = Some(ticket);
        log::debug!("anchor: scrolling {} -> {}", plan.from, plan.to);
        Some(ScrollStart { plan, ticket, closed_menu })
    }

    /// Accept one scheduler frame. Returns the offset to write, or `None` if
    /// this scroll has been superseded.
    pub fn on_frame(&mut self, viewport: &mut ViewportState, value: f64, finished: bool) -> Option<f64> {
        let ticket = self.active?;
        if !viewport.write_scroll(ticket, value) {
            self.active = None;
            return None;
        }
        if finished {
            viewport.release(ticket);
            self.active = None;
        }
        Some(value)
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.active.is_some()
    }
}
