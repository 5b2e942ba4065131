use proptest::prelude::*;

use super::*;
use crate::config::Variant;

#[test]
fn modern_elevates_past_one_hundred() {
    let mut header = HeaderTracker::new(&SiteConfig::for_variant(Variant::Modern));
    assert!(!header.update(100.0).elevated);
    assert!(header.update(100.5).elevated);
}

#[test]
fn classic_elevates_past_fifty() {
    let mut header = HeaderTracker::new(&SiteConfig::for_variant(Variant::Classic));
    assert!(!header.update(50.0).elevated);
    assert!(header.update(51.0).elevated);
}

#[test]
fn hides_when_scrolling_down_past_three_hundred() {
    let mut header = HeaderTracker::new(&SiteConfig::default());
    header.update(250.0);
    assert!(!header.update(300.0).hidden);
    assert!(header.update(320.0).hidden);
    assert_eq!(header.transform(), Some("translateY(-100%)"));
}

#[test]
fn reappears_when_scrolling_up() {
    let mut header = HeaderTracker::new(&SiteConfig::default());
    header.update(500.0);
    assert!(header.update(900.0).hidden);
    assert!(!header.update(880.0).hidden);
    assert_eq!(header.transform(), Some("translateY(0)"));
}

#[test]
fn stationary_scroll_shows_header() {
    let mut header = HeaderTracker::new(&SiteConfig::default());
    header.update(900.0);
    assert!(!header.update(900.0).hidden);
}

#[test]
fn classic_never_hides_or_writes_transform() {
    let mut header = HeaderTracker::new(&SiteConfig::for_variant(Variant::Classic));
    header.update(400.0);
    assert!(!header.update(2000.0).hidden);
    assert_eq!(header.transform(), None);
}

#[test]
fn direction_compares_against_previous_update() {
    let mut header = HeaderTracker::new(&SiteConfig::default());
    header.update(500.0);
    assert!(!header.update(450.0).hidden);
    assert!(header.update(460.0).hidden);
}

proptest! {
    #[test]
    fn elevated_iff_past_threshold(p in -1000.0_f64..100_000.0, threshold in 50.0_f64..=100.0) {
        let mut config = SiteConfig::default();
        config.header_elevate_px = threshold;
        let mut header = HeaderTracker::new(&config);
        prop_assert_eq!(header.update(p).elevated, p > threshold);
    }
}
