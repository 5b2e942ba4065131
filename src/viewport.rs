//! Shared viewport state: scroll position and body scroll lock.
//!
//! DESIGN
//! ======
//! The document scroll offset and the body's overflow/padding are global in
//! the browser. Both the menu (body lock) and the anchor scroller (scroll
//! writes) touch them, so they go through this one object with two rules:
//!
//! - Only the holder of the current [`ScrollTicket`] may write the scroll
//!   position. Claiming a new ticket invalidates the previous one.
//! - No ticket is issued while the body is locked; the menu must close
//!   first.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Proof of scroll-write ownership for one animation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollTicket(u64);

/// Body scroll suppression applied while the menu is open.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyLock {
    /// Inline `padding-right` compensating the hidden scrollbar.
    pub scrollbar_width_px: f64,
}

impl BodyLock {
    /// Build a lock from `window.innerWidth` and `documentElement.clientWidth`.
    #[must_use]
    pub fn from_widths(inner_width: f64, client_width: f64) -> Self {
        Self { scrollbar_width_px: (inner_width - client_width).max(0.0) }
    }

    /// Value for the body's inline `padding-right`.
    #[must_use]
    pub fn padding_right(&self) -> String {
        format!("{}px", self.scrollbar_width_px)
    }
}

#[derive(Debug, Default)]
pub struct ViewportState {
    scroll_y: f64,
    owner: Option<ScrollTicket>,
    next_ticket: u64,
    body_lock: Option<BodyLock>,
}

impl ViewportState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known document scroll offset.
    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Record a scroll offset read back from the browser.
    pub fn observe_scroll(&mut self, y: f64) {
        self.scroll_y = y;
    }

    /// Apply a body lock. Returns `false` if one is already in place.
    pub fn lock_body(&mut self, lock: BodyLock) -> bool {
        if self.body_lock.is_some() {
            return false;
        }
        self.body_lock = Some(lock);
        true
    }

    /// Remove the body lock. Returns `false` if the body was not locked.
    pub fn unlock_body(&mut self) -> bool {
        self.body_lock.take().is_some()
    }

    #[must_use]
    pub fn body_lock(&self) -> Option<BodyLock> {
        self.body_lock
    }

    /// Take scroll-write ownership, superseding any running animation.
    ///
    /// Returns `None` while the body is locked.
    pub fn claim_scroll(&mut self) -> Option<ScrollTicket> {
        if self.body_lock.is_some() {
            log::debug!("viewport: scroll claim refused while body is locked");
            return None;
        }
        self.next_ticket += 1;
        let ticket = ScrollTicket(self.next_ticket);
        self.owner = Some(ticket);
        Some(ticket)
    }

    /// Write a scroll offset on behalf of `ticket`. Stale tickets are ignored.
    pub fn write_scroll(&mut self, ticket: ScrollTicket, y: f64) -> bool {
        if self.owner != Some(ticket) {
            return false;
        }
        self.scroll_y = y;
        true
    }

    /// Give up ownership if `ticket` still holds it.
    pub fn release(&mut self, ticket: ScrollTicket) {
        if self.owner == Some(ticket) {
            self.owner = None;
        }
    }
}
