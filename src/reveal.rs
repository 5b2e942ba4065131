//! One-shot watch sets behind the reveal and lazy-load observers.
//!
//! An element enters a [`OneShotSet`] once, fires once on its first
//! qualifying intersection, and is then only remembered as fired. There is no
//! way to re-arm a key, which is what keeps every reveal-triggered animation
//! to a single run per page view.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::progress::{CounterSpec, SkillSpec};

/// Class added when an element starts being watched.
pub const REVEAL_CLASS: &str = "reveal";

/// Class added on first intersection. Never removed.
pub const REVEALED_CLASS: &str = "revealed";

/// What firing a reveal should start besides the class toggle.
#[derive(Clone, Debug, PartialEq)]
pub enum RevealKind {
    Plain,
    SkillBar(SkillSpec),
    Counter(CounterSpec),
}

/// Keys waiting for their first intersection, each with a payload.
#[derive(Debug)]
pub struct OneShotSet<K, V> {
    pending: HashMap<K, V>,
    fired: HashSet<K>,
}

impl<K, V> Default for OneShotSet<K, V> {
    fn default() -> Self {
        Self { pending: HashMap::new(), fired: HashSet::new() }
    }
}

impl<K: Eq + Hash + Clone, V> OneShotSet<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `key`. Returns `false` if it is already watched or has
    /// already fired.
    pub fn observe(&mut self, key: K, payload: V) -> bool {
        if self.fired.contains(&key) || self.pending.contains_key(&key) {
            return false;
        }
        self.pending.insert(key, payload);
        true
    }

    /// Feed one intersection record. On the first intersecting record the
    /// payload is returned and the caller must stop observing the element.
    pub fn on_intersection(&mut self, key: &K, is_intersecting: bool) -> Option<V> {
        if !is_intersecting {
            return None;
        }
        let payload = self.pending.remove(key)?;
        self.fired.insert(key.clone());
        Some(payload)
    }
}

/// The reveal watcher's set.
pub type RevealSet<K> = OneShotSet<K, RevealKind>;

/// Classify an element from its marker attributes and text.
///
/// `data-skill` wins over `data-count`; unparseable values fall back to a
/// plain reveal.
#[must_use]
pub fn classify(data_skill: Option<&str>, data_count: Option<&str>, text: &str) -> RevealKind {
    if let Some(skill) = data_skill.and_then(SkillSpec::parse) {
        return RevealKind::SkillBar(skill);
    }
    if let Some(raw) = data_count {
        if let Some(counter) = CounterSpec::parse(raw, text) {
            return RevealKind::Counter(counter);
        }
    }
    RevealKind::Plain
}
