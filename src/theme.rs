//! Dark mode preference resolution, toggle, and persistence.
//!
//! Resolution order at startup: stored flag, then the system
//! `prefers-color-scheme`, then light. A toggle always persists. System
//! changes are followed only while nothing is stored, so one manual toggle
//! pins the theme for every later visit.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. A failed write is logged and the applied theme
//! still changes for the current page view.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::error::FolioError;

/// localStorage key holding the explicit preference.
pub const STORAGE_KEY: &str = "theme";

/// Class placed on the root element while the dark theme is applied.
pub const DARK_CLASS: &str = "dark";

/// Media query reporting the system preference.
pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored flag. Anything but `"dark"` / `"light"` counts as unset.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    fn from_system(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

/// Where the explicit preference lives between visits.
pub trait PreferenceStore {
    /// Raw stored value, if any.
    fn load(&self) -> Option<String>;

    /// Persist a value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage rejects the write.
    fn save(&mut self, theme: Theme) -> Result<(), FolioError>;
}

/// In-memory store for tests and browsers without `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Option<String>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn with_value(value: &str) -> Self {
        Self { value: Some(value.to_owned()), writes: 0 }
    }

    /// How many times [`PreferenceStore::save`] has been called.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, theme: Theme) -> Result<(), FolioError> {
        self.value = Some(theme.as_str().to_owned());
        self.writes += 1;
        Ok(())
    }
}

/// Owns the applied theme and its backing store.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    applied: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the starting theme. `system_dark` is `None` when the media
    /// query is unavailable. Never writes to the store.
    pub fn init(store: S, system_dark: Option<bool>) -> Self {
        let applied = match store.load().as_deref().and_then(Theme::parse) {
            Some(stored) => stored,
            None => system_dark.map_or(Theme::Light, Theme::from_system),
        };
        log::debug!("theme: resolved {} at startup", applied.as_str());
        Self { store, applied }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.applied
    }

    /// Whether the visitor has an explicit preference on record.
    #[must_use]
    pub fn has_explicit_preference(&self) -> bool {
        self.store.load().as_deref().and_then(Theme::parse).is_some()
    }

    /// Flip the applied theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        self.applied = self.applied.toggled();
        if let Err(e) = self.store.save(self.applied) {
            log::warn!("theme: failed to persist preference: {e}");
        }
        log::debug!("theme: toggled to {}", self.applied.as_str());
        self.applied
    }

    /// Follow a system preference change unless the visitor chose a theme.
    ///
    /// Returns the new theme when it changed.
    pub fn on_system_change(&mut self, dark: bool) -> Option<Theme> {
        if self.has_explicit_preference() {
            return None;
        }
        let next = Theme::from_system(dark);
        if next == self.applied {
            return None;
        }
        self.applied = next;
        Some(next)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
