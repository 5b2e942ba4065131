#![allow(clippy::float_cmp)]

use proptest::prelude::*;

use super::*;

// =============================================================
// SkillSpec
// =============================================================

#[test]
fn skill_parse_accepts_percent_suffix() {
    assert_eq!(SkillSpec::parse("85"), Some(SkillSpec { target_pct: 85.0 }));
    assert_eq!(SkillSpec::parse(" 72.5% "), Some(SkillSpec { target_pct: 72.5 }));
}

#[test]
fn skill_parse_clamps_and_rejects() {
    assert_eq!(SkillSpec::parse("140"), Some(SkillSpec { target_pct: 100.0 }));
    assert_eq!(SkillSpec::parse("-3"), Some(SkillSpec { target_pct: 0.0 }));
    assert_eq!(SkillSpec::parse("lots"), None);
    assert_eq!(SkillSpec::parse("NaN"), None);
}

#[test]
fn skill_width_rounds_and_caps() {
    let skill = SkillSpec { target_pct: 85.0 };
    assert_eq!(skill.width(42.123_456), "42.12%");
    assert_eq!(skill.width(85.0), "85%");
    assert_eq!(skill.width(90.0), "85%");
}

#[test]
fn skill_tween_uses_configured_timing() {
    let config = SiteConfig::default();
    let tween = SkillSpec { target_pct: 60.0 }.tween(&config);
    assert_eq!(tween.duration_ms, 1500.0);
    assert_eq!(tween.delay_ms, 200.0);
    assert_eq!(tween.to, 60.0);
}

// =============================================================
// CounterSpec
// =============================================================

#[test]
fn counter_parse_reads_attribute_and_plus() {
    assert_eq!(CounterSpec::parse("50", "0+"), Some(CounterSpec { target: 50, plus_suffix: true }));
    assert_eq!(CounterSpec::parse("12", "0"), Some(CounterSpec { target: 12, plus_suffix: false }));
}

#[test]
fn counter_parse_falls_back_to_text() {
    assert_eq!(CounterSpec::parse("", "1,200+"), Some(CounterSpec { target: 1200, plus_suffix: true }));
    assert_eq!(CounterSpec::parse("", "many"), None);
}

#[test]
fn counter_text_floors_while_running() {
    let counter = CounterSpec { target: 10, plus_suffix: true };
    assert_eq!(counter.text(0.0), "0+");
    assert_eq!(counter.text(9.99), "9+");
    assert_eq!(counter.text(10.0), "10+");
}

#[test]
fn counter_text_never_exceeds_target() {
    let counter = CounterSpec { target: 7, plus_suffix: false };
    assert_eq!(counter.text(123.0), "7");
    assert_eq!(counter.text(-4.0), "0");
}

#[test]
fn counter_tween_uses_configured_timing() {
    let config = SiteConfig::default();
    let tween = CounterSpec { target: 30, plus_suffix: false }.tween(&config);
    assert_eq!(tween.duration_ms, 2000.0);
    assert_eq!(tween.delay_ms, 100.0);
}

proptest! {
    #[test]
    fn skill_bar_ends_exactly_on_target(target in 0.0_f64..=100.0, step in 1.0_f64..40.0) {
        let config = SiteConfig::default();
        let skill = SkillSpec { target_pct: target };
        let mut tween = skill.tween(&config);
        let mut now = 0.0;
        let mut last = None;
        while !tween.is_done() {
            if let Some(value) = tween.advance(now) {
                prop_assert!(value <= target);
                last = Some(value);
            }
            now += step;
        }
        prop_assert_eq!(last, Some(target));
        prop_assert!(now - step <= config.skill_delay_ms + config.skill_duration_ms + 2.0 * step);
    }

    #[test]
    fn counter_ends_exactly_on_target(target in 0_u64..1_000_000, plus in any::<bool>(), step in 1.0_f64..40.0) {
        let config = SiteConfig::default();
        let counter = CounterSpec { target, plus_suffix: plus };
        let mut tween = counter.tween(&config);
        let mut now = 0.0;
        let mut last = None;
        while !tween.is_done() {
            if let Some(value) = tween.advance(now) {
                last = Some(counter.text(value));
            }
            now += step;
        }
        let expected = if plus { format!("{target}+") } else { target.to_string() };
        prop_assert_eq!(last, Some(expected));
    }
}
