#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_is_modern_preset() {
    let config = SiteConfig::default();
    assert_eq!(config.variant, Variant::Modern);
    assert_eq!(config.header_elevate_px, 100.0);
    assert_eq!(config.header_hide_px, Some(300.0));
    assert_eq!(config.scroll_duration_ms, 600.0);
    assert_eq!(config.scroll_fallback_offset_px, 80.0);
    assert_eq!(config.menu_link_close_delay_ms, 500);
}

#[test]
fn classic_preset_differs_in_header_and_scroll() {
    let config = SiteConfig::for_variant(Variant::Classic);
    assert_eq!(config.header_elevate_px, 50.0);
    assert_eq!(config.header_hide_px, None);
    assert_eq!(config.scroll_duration_ms, 800.0);
}

#[test]
fn from_json_empty_object_is_default() {
    let config = SiteConfig::from_json("{}").unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn from_json_variant_then_overrides() {
    let config = SiteConfig::from_json(r#"{ "variant": "classic", "scroll_duration_ms": 700 }"#).unwrap();
    assert_eq!(config.variant, Variant::Classic);
    assert_eq!(config.header_elevate_px, 50.0);
    assert_eq!(config.scroll_duration_ms, 700.0);
}

#[test]
fn from_json_header_hide_toggle() {
    let off = SiteConfig::from_json(r#"{ "header_hide": false }"#).unwrap();
    assert_eq!(off.header_hide_px, None);
    let on = SiteConfig::from_json(r#"{ "variant": "classic", "header_hide": true }"#).unwrap();
    assert_eq!(on.header_hide_px, Some(300.0));
    let custom = SiteConfig::from_json(r#"{ "variant": "classic", "header_hide_px": 450 }"#).unwrap();
    assert_eq!(custom.header_hide_px, Some(450.0));
}

#[test]
fn from_json_parses_log_level() {
    let config = SiteConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
    assert_eq!(config.log_level, log::Level::Debug);
}

#[test]
fn from_json_unknown_log_level_keeps_default() {
    let config = SiteConfig::from_json(r#"{ "log_level": "chatty" }"#).unwrap();
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn from_json_rejects_unknown_fields() {
    let err = SiteConfig::from_json(r#"{ "scroll_speed": 3 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_malformed_json() {
    assert!(matches!(SiteConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_zero_duration() {
    let err = SiteConfig::from_json(r#"{ "skill_duration_ms": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "skill_duration_ms", .. }));
}

#[test]
fn from_json_rejects_threshold_above_one() {
    let err = SiteConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "reveal_threshold", .. }));
}

#[test]
fn from_json_rejects_overflowing_offsets() {
    for (field, json) in [
        ("header_elevate_px", r#"{ "header_elevate_px": 1e400 }"#),
        ("header_hide_px", r#"{ "header_hide_px": -1e400 }"#),
        ("scroll_fallback_offset_px", r#"{ "scroll_fallback_offset_px": 1e400 }"#),
        ("hero_parallax_speed", r#"{ "hero_parallax_speed": 1e400 }"#),
    ] {
        assert!(SiteConfig::from_json(json).is_err(), "{field} accepted an infinite value");
    }
}

#[test]
fn empty_selector_list_keeps_defaults() {
    let config = SiteConfig::from_json(r#"{ "reveal_selectors": [] }"#).unwrap();
    assert_eq!(config.reveal_selectors.len(), 4);
}

#[test]
fn reveal_selector_joins_with_commas() {
    let mut config = SiteConfig::default();
    config.reveal_selectors = vec![".a".to_owned(), ".b".to_owned()];
    assert_eq!(config.reveal_selector(), ".a, .b");
}
