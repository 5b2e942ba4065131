//! Konami-code matcher.
//!
//! Progress advances on each matching key and drops to zero on any other
//! key, including one that would start a fresh attempt. A full match fires
//! once and rearms.

#[cfg(test)]
#[path = "konami_test.rs"]
mod konami_test;

/// `KeyboardEvent.key` values of the sequence, in order.
pub const SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Class on `<body>` while the easter egg is active.
pub const ACTIVE_CLASS: &str = "konami";

#[derive(Clone, Copy, Debug, Default)]
pub struct KonamiTracker {
    progress: usize,
    activations: u64,
}

impl KonamiTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key. Returns `true` when this key completes the sequence.
    ///
    /// Letter keys match case-insensitively so Caps Lock does not break it.
    pub fn press(&mut self, key: &str) -> bool {
        let expected = SEQUENCE[self.progress];
        let matches = if expected.len() == 1 { key.eq_ignore_ascii_case(expected) } else { key == expected };
        if !matches {
            self.progress = 0;
            return false;
        }
        self.progress += 1;
        if self.progress == SEQUENCE.len() {
            self.progress = 0;
            self.activations += 1;
            log::info!("konami: sequence complete");
            return true;
        }
        false
    }

    /// Count of completed sequences; identifies the latest activation.
    #[must_use]
    pub fn activation(&self) -> u64 {
        self.activations
    }

    /// Whether `activation` is still the most recent one. An expiry timer
    /// for an older activation must leave the class alone.
    #[must_use]
    pub fn is_latest(&self, activation: u64) -> bool {
        activation == self.activations
    }

    /// Number of keys matched so far.
    #[must_use]
    pub fn progress(&self) -> usize {
        self.progress
    }
}
