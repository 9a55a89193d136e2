use levocalc_app::config::{LevoCalcConfig, load_config_from, save_config_to};
use levocalc_app::telemetry::LogFormat;
use levocalc_core::locale::Locale;
use levocalc_core::models::record::DuplicatePolicy;
use levocalc_engine::clearance::ClearanceModelKind;

#[test]
fn defaults_are_english_proportional_without_window() {
    let config = LevoCalcConfig::default();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.locale, Locale::En);
    assert_eq!(config.clearance_model, ClearanceModelKind::Proportional);
    assert_eq!(config.duplicate_window_secs, None);
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert_eq!(config.duplicate_policy(), DuplicatePolicy::unwindowed());
}

#[test]
fn explicit_data_dir_wins() {
    let config = LevoCalcConfig {
        data_dir: Some("/srv/levocalc".into()),
        ..LevoCalcConfig::default()
    };
    assert_eq!(
        config.resolve_data_dir().unwrap(),
        std::path::PathBuf::from("/srv/levocalc")
    );
}

#[test]
fn window_seconds_become_a_windowed_policy() {
    let config = LevoCalcConfig {
        duplicate_window_secs: Some(60),
        ..LevoCalcConfig::default()
    };
    assert_eq!(
        config.duplicate_policy(),
        DuplicatePolicy::windowed(jiff::SignedDuration::from_secs(60))
    );
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = LevoCalcConfig {
        locale: Locale::Ar,
        clearance_model: ClearanceModelKind::CreatinineThreshold,
        duplicate_window_secs: Some(120),
        data_dir: Some(dir.path().join("data")),
        log_format: LogFormat::Json,
        ..LevoCalcConfig::default()
    };
    save_config_to(&path, &config).unwrap();

    assert!(!dir.path().join("nested").join("config.json.tmp").exists());
    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn save_stamps_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = LevoCalcConfig {
        config_version: 0,
        ..LevoCalcConfig::default()
    };
    save_config_to(&path, &config).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["config_version"], 1);
}

#[test]
fn unversioned_config_migrates_language_to_locale() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "language": "ar", "clearance_model": "creatinine_threshold" }"#)
        .unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.locale, Locale::Ar);
    assert_eq!(loaded.clearance_model, ClearanceModelKind::CreatinineThreshold);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 1 }"#).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded, LevoCalcConfig::default());
}

#[test]
fn newer_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 99 }"#).unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn unknown_clearance_model_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 1, "clearance_model": "magic" }"#).unwrap();

    assert!(load_config_from(&path).is_err());
}
