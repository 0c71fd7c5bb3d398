use ecosmart_core::{ConfigError, SiteConfig};

#[test]
fn empty_object_yields_defaults() {
    let config = SiteConfig::from_json("{}").expect("empty override should parse");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn partial_override_changes_only_named_fields() {
    let config = SiteConfig::from_json(
        r#"{ "counters": { "duration_ms": 800 }, "ids": { "year": "copyright-year" } }"#,
    )
    .expect("partial override should parse");
    let defaults = SiteConfig::default();

    assert_eq!(config.counters.duration_ms, 800.0);
    assert_eq!(config.counters.random_min, defaults.counters.random_min);
    assert_eq!(config.ids.year, "copyright-year");
    assert_eq!(config.ids.theme_toggle, defaults.ids.theme_toggle);
    assert_eq!(config.theme_storage_key, "ecosmart-theme");
}

#[test]
fn invalid_json_is_a_parse_error() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn override_is_validated() {
    let err = SiteConfig::from_json(r#"{ "counters": { "duration_ms": 0 } }"#).unwrap_err();
    assert_eq!(err, ConfigError::InvalidDuration(0.0));

    let err = SiteConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLogLevel(_)));
}

#[test]
fn defaults_match_page_markup() {
    let config = SiteConfig::default();
    assert_eq!(config.ids.schedule_form, "scheduleForm");
    assert_eq!(config.selectors.scroll_target_attr, "data-scroll-target");
    assert_eq!(config.selectors.dark_mode_class, "dark-mode");
    assert_eq!(config.reveal_threshold, 0.15);
    assert_eq!(config.counters.duration_ms, 1600.0);
}
