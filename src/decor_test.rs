use super::*;

#[test]
fn loader_runs_each_step_once() {
    let mut loader = PageLoader::new();
    assert_eq!(loader.phase(), LoadPhase::Loading);
    assert!(!loader.on_settled());
    assert!(loader.on_load());
    assert!(!loader.on_load());
    assert_eq!(loader.phase(), LoadPhase::Settling);
    assert!(loader.on_settled());
    assert!(!loader.on_settled());
    assert_eq!(loader.phase(), LoadPhase::Ready);
}

#[test]
fn ready_states_split_parse_from_load() {
    assert!(!is_dom_parsed("loading"));
    assert!(is_dom_parsed("interactive"));
    assert!(is_dom_parsed("complete"));
    assert!(!is_load_complete("interactive"));
    assert!(is_load_complete("complete"));
}

#[test]
fn card_delays_step_by_tenths() {
    assert_eq!(card_animation_delay(0), "0.0s");
    assert_eq!(card_animation_delay(3), "0.3s");
    assert_eq!(card_animation_delay(12), "1.2s");
}

#[test]
fn lazy_fallback_only_without_native_support() {
    assert!(needs_lazy_fallback(false));
    assert!(!needs_lazy_fallback(true));
}
