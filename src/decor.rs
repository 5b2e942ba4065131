//! Page-load fade-in, floating cards, and lazy-image fallback.
//!
//! These behaviors are cosmetic. They have no failure mode beyond not
//! running, so the core is constants plus the page-load phase machine.

#[cfg(test)]
#[path = "decor_test.rs"]
mod decor_test;

// ── Page load ───────────────────────────────────────────────────

/// Class on `<body>` from mount until the fade-in starts.
pub const LOADING_CLASS: &str = "is-loading";

/// Pause after the first frame following `load` before fading in.
pub const LOAD_SETTLE_DELAY_MS: u32 = 100;

/// First match is the hero section that fades in.
pub const HERO_SECTION_SELECTOR: &str = "section";

pub const HERO_START_OPACITY: &str = "0";
pub const HERO_START_TRANSFORM: &str = "translateY(20px)";
pub const HERO_END_OPACITY: &str = "1";
pub const HERO_END_TRANSFORM: &str = "translateY(0)";
pub const HERO_TRANSITION: &str = "opacity 0.8s ease-out, transform 0.8s ease-out";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Mounted; waiting for `window.load`.
    #[default]
    Loading,
    /// `load` fired; waiting out one frame plus the settle delay.
    Settling,
    /// Loading class removed and hero fading in.
    Ready,
}

/// Whether a `document.readyState` value means the DOM is fully parsed.
#[must_use]
pub fn is_dom_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Whether a `document.readyState` value means `window.load` already fired.
#[must_use]
pub fn is_load_complete(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Page-load fade-in sequence. Each step fires at most once.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageLoader {
    phase: LoadPhase,
}

impl PageLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// `window.load` fired. Returns `true` if the settle step should be scheduled.
    pub fn on_load(&mut self) -> bool {
        if self.phase != LoadPhase::Loading {
            return false;
        }
        self.phase = LoadPhase::Settling;
        true
    }

    /// Settle delay elapsed. Returns `true` if the hero should fade in now.
    pub fn on_settled(&mut self) -> bool {
        if self.phase != LoadPhase::Settling {
            return false;
        }
        self.phase = LoadPhase::Ready;
        true
    }
}

// ── Floating cards ──────────────────────────────────────────────

pub const CARD_SELECTOR: &str = ".group";
pub const CARD_HOVER_TRANSFORM: &str = "translateY(-8px) scale(1.02)";

/// Inline `animation-delay` for the `index`-th card, 100ms apart.
#[must_use]
pub fn card_animation_delay(index: usize) -> String {
    format!("{}.{}s", index / 10, index % 10)
}

// ── Lazy images ─────────────────────────────────────────────────

/// Attribute holding the deferred image source.
pub const LAZY_SRC_ATTR: &str = "data-src";

pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Native `loading="lazy"` makes the observer fallback unnecessary.
#[must_use]
pub fn needs_lazy_fallback(native_lazy_supported: bool) -> bool {
    !native_lazy_supported
}
