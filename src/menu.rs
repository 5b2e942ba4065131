//! Mobile menu state machine and its dismissal gestures.
//!
//! The controller is an owned value. Callers that need to close it (the
//! anchor scroller) receive it by reference; there is no global instance.
//! Opening and closing go through [`ViewportState`] so the body lock and the
//! scroll owner never disagree.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::config::SiteConfig;
use crate::viewport::{BodyLock, ViewportState};

/// Element id of the menu container.
pub const MENU_ID: &str = "menu";

/// Class and accessible label of the generated close button.
pub const CLOSE_CLASS: &str = "close";
pub const CLOSE_LABEL: &str = "Close menu";

pub const ITEM_START_OPACITY: &str = "0";
pub const ITEM_START_TRANSFORM: &str = "translateX(20px)";
pub const ITEM_END_OPACITY: &str = "1";
pub const ITEM_END_TRANSFORM: &str = "translateX(0)";
pub const ITEM_TRANSITION: &str = "opacity 0.4s ease-out, transform 0.4s ease-out";

/// Class on `<body>` while the menu is open.
pub const BODY_OPEN_CLASS: &str = "is-menu-visible";

/// `href` of the toggle anchor and of the generated close button.
pub const TOGGLE_HREF: &str = "#menu";

/// Keyboard key that dismisses the open menu.
pub const ESCAPE_KEY: &str = "Escape";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Work the DOM layer must do after a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuTransition {
    Opened(OpenEffects),
    Closed,
    /// Already in the requested state.
    Unchanged,
}

/// Side effects of opening the menu.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenEffects {
    pub lock: BodyLock,
    /// Entrance delay for each `<li>` in the menu, in order.
    pub item_delays_ms: Vec<u32>,
}

/// Entrance delays for `count` menu items, `step_ms` apart.
#[must_use]
pub fn stagger_delays(count: usize, step_ms: u32) -> Vec<u32> {
    (0..count)
        .map(|index| u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms))
        .collect()
}

#[derive(Debug)]
pub struct MenuController {
    state: MenuState,
    stagger_ms: u32,
    swipe_close_px: f64,
    touch_start_x: Option<f64>,
}

impl MenuController {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            state: MenuState::Closed,
            stagger_ms: config.menu_stagger_ms,
            swipe_close_px: config.swipe_close_px,
            touch_start_x: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Open the menu, locking body scroll with `lock`.
    pub fn open(&mut self, viewport: &mut ViewportState, lock: BodyLock, item_count: usize) -> MenuTransition {
        if self.is_open() {
            return MenuTransition::Unchanged;
        }
        self.state = MenuState::Open;
        viewport.lock_body(lock);
        log::debug!("menu: open");
        MenuTransition::Opened(OpenEffects { lock, item_delays_ms: stagger_delays(item_count, self.stagger_ms) })
    }

    /// Close the menu and release the body lock.
    pub fn close(&mut self, viewport: &mut ViewportState) -> MenuTransition {
        if !self.is_open() {
            return MenuTransition::Unchanged;
        }
        self.state = MenuState::Closed;
        self.touch_start_x = None;
        viewport.unlock_body();
        log::debug!("menu: closed");
        MenuTransition::Closed
    }

    pub fn toggle(&mut self, viewport: &mut ViewportState, lock: BodyLock, item_count: usize) -> MenuTransition {
        if self.is_open() { self.close(viewport) } else { self.open(viewport, lock, item_count) }
    }

    /// Close on Escape while open.
    pub fn on_key(&mut self, key: &str, viewport: &mut ViewportState) -> MenuTransition {
        if key == ESCAPE_KEY { self.close(viewport) } else { MenuTransition::Unchanged }
    }

    /// Close on a document click that landed outside both the menu and its toggle.
    pub fn on_document_click(
        &mut self,
        inside_menu: bool,
        on_toggle: bool,
        viewport: &mut ViewportState,
    ) -> MenuTransition {
        if inside_menu || on_toggle {
            return MenuTransition::Unchanged;
        }
        self.close(viewport)
    }

    pub fn on_touch_start(&mut self, screen_x: f64) {
        if self.is_open() {
            self.touch_start_x = Some(screen_x);
        }
    }

    /// Close when the finger travelled left by at least the swipe distance.
    pub fn on_touch_end(&mut self, screen_x: f64, viewport: &mut ViewportState) -> MenuTransition {
        let Some(start_x) = self.touch_start_x.take() else {
            return MenuTransition::Unchanged;
        };
        if start_x - screen_x >= self.swipe_close_px {
            return self.close(viewport);
        }
        MenuTransition::Unchanged
    }
}
