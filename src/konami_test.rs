use super::*;

fn feed(tracker: &mut KonamiTracker, keys: &[&str]) -> Vec<bool> {
    keys.iter().map(|key| tracker.press(key)).collect()
}

#[test]
fn full_sequence_activates_once() {
    let mut tracker = KonamiTracker::new();
    let results = feed(&mut tracker, &SEQUENCE);
    assert_eq!(results.iter().filter(|hit| **hit).count(), 1);
    assert!(results[9]);
    assert_eq!(tracker.progress(), 0);
}

#[test]
fn nine_correct_then_wrong_resets_without_activation() {
    let mut tracker = KonamiTracker::new();
    let results = feed(&mut tracker, &SEQUENCE[..9]);
    assert!(results.iter().all(|hit| !hit));
    assert_eq!(tracker.progress(), 9);
    assert!(!tracker.press("x"));
    assert_eq!(tracker.progress(), 0);
}

#[test]
fn mismatch_gives_no_partial_credit() {
    let mut tracker = KonamiTracker::new();
    feed(&mut tracker, &["ArrowUp", "ArrowUp", "ArrowUp"]);
    assert_eq!(tracker.progress(), 0);
    assert!(!tracker.press("ArrowDown"));
    assert_eq!(tracker.progress(), 0);
}

#[test]
fn letters_ignore_case() {
    let mut tracker = KonamiTracker::new();
    feed(&mut tracker, &SEQUENCE[..8]);
    assert!(!tracker.press("B"));
    assert!(tracker.press("A"));
}

#[test]
fn sequence_can_repeat() {
    let mut tracker = KonamiTracker::new();
    feed(&mut tracker, &SEQUENCE);
    let again = feed(&mut tracker, &SEQUENCE);
    assert!(again[9]);
}

#[test]
fn retrigger_supersedes_earlier_activation() {
    let mut tracker = KonamiTracker::new();
    feed(&mut tracker, &SEQUENCE);
    let first = tracker.activation();
    assert!(tracker.is_latest(first));
    feed(&mut tracker, &SEQUENCE);
    let second = tracker.activation();
    assert!(!tracker.is_latest(first));
    assert!(tracker.is_latest(second));
}
