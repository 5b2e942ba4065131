#![allow(clippy::float_cmp)]

use super::*;
use crate::anim::Scheduler;
use crate::viewport::BodyLock;

// =============================================================
// Anchor resolution
// =============================================================

#[test]
fn anchor_target_id_strips_hash() {
    assert_eq!(anchor_target_id("#projects"), Some("projects"));
}

#[test]
fn anchor_target_id_skips_menu_toggle() {
    assert_eq!(anchor_target_id("#menu"), None);
}

#[test]
fn anchor_target_id_skips_bare_hash_and_other_pages() {
    assert_eq!(anchor_target_id("#"), None);
    assert_eq!(anchor_target_id("/about#team"), None);
    assert_eq!(anchor_target_id(""), None);
}

// =============================================================
// Offsets
// =============================================================

#[test]
fn offset_subtracts_header_height() {
    assert_eq!(target_offset(1200.0, Some(72.0), 80.0), 1128.0);
}

#[test]
fn offset_uses_fallback_without_header() {
    assert_eq!(target_offset(1200.0, None, 80.0), 1120.0);
}

#[test]
fn offset_is_clamped_at_top() {
    assert_eq!(target_offset(20.0, Some(72.0), 80.0), 0.0);
}

// =============================================================
// Scroller
// =============================================================

#[test]
fn begin_plans_from_current_scroll() {
    let config = SiteConfig::default();
    let mut scroller = SmoothScroller::new(&config);
    let mut menu = MenuController::new(&config);
    let mut viewport = ViewportState::new();
    viewport.observe_scroll(300.0);

    let start = scroller.begin(&mut menu, &mut viewport, 2000.0, Some(100.0)).unwrap();
    assert_eq!(start.plan, ScrollPlan { from: 300.0, to: 1900.0, duration_ms: 600.0 });
    assert!(!start.closed_menu);
    assert!(scroller.is_scrolling());
}

#[test]
fn classic_variant_scrolls_for_800ms() {
    let config = SiteConfig::for_variant(crate::config::Variant::Classic);
    let mut scroller = SmoothScroller::new(&config);
    let mut menu = MenuController::new(&config);
    let mut viewport = ViewportState::new();
    let start = scroller.begin(&mut menu, &mut viewport, 500.0, None).unwrap();
    assert_eq!(start.plan.duration_ms, 800.0);
}

#[test]
fn anchor_click_with_open_menu_closes_menu_and_reaches_target() {
    let config = SiteConfig::default();
    let mut scroller = SmoothScroller::new(&config);
    let mut menu = MenuController::new(&config);
    let mut viewport = ViewportState::new();
    let mut scheduler = Scheduler::new();
    menu.open(&mut viewport, BodyLock { scrollbar_width_px: 15.0 }, 3);

    // #projects sits at document top 1500 under a 64px header.
    let start = scroller.begin(&mut menu, &mut viewport, 1500.0, Some(64.0)).unwrap();
    assert!(start.closed_menu);
    assert!(!menu.is_open());
    assert_eq!(viewport.body_lock(), None);

    scheduler.start("scroll", start.plan.tween());
    let mut now = 0.0;
    let mut last = 0.0;
    while !scheduler.is_idle() {
        for frame in scheduler.tick(now) {
            let written = scroller.on_frame(&mut viewport, frame.value, frame.finished).unwrap();
            assert!(written >= last);
            last = written;
        }
        now += 16.0;
    }
    assert_eq!(viewport.scroll_y(), 1436.0);
    assert!(now - 16.0 <= 600.0 + 16.0);
    assert!(!scroller.is_scrolling());
    assert!(!viewport.write_scroll(start.ticket, 0.0));
}

#[test]
fn midpoint_frame_follows_cubic_curve() {
    let plan = ScrollPlan { from: 0.0, to: 1000.0, duration_ms: 600.0 };
    let mut tween = plan.tween();
    tween.advance(0.0);
    let quarter = tween.advance(150.0).unwrap();
    assert!((quarter - 62.5).abs() < 1e-9);
    let half = tween.advance(300.0).unwrap();
    assert!((half - 500.0).abs() < 1e-9);
}

#[test]
fn superseded_scroll_stops_writing() {
    let config = SiteConfig::default();
    let mut first = SmoothScroller::new(&config);
    let mut second = SmoothScroller::new(&config);
    let mut menu = MenuController::new(&config);
    let mut viewport = ViewportState::new();

    first.begin(&mut menu, &mut viewport, 800.0, None).unwrap();
    second.begin(&mut menu, &mut viewport, 1600.0, None).unwrap();
    assert_eq!(first.on_frame(&mut viewport, 50.0, false), None);
    assert!(!first.is_scrolling());
    assert_eq!(second.on_frame(&mut viewport, 75.0, false), Some(75.0));
}
