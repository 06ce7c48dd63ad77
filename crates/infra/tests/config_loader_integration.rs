//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use rewatch_domain::{EntityKind, LogFormat};
use rewatch_infra::config;
use tempfile::Builder;

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "digest": {
            "time_zone": "Europe/Helsinki",
            "publish_hour": 9,
            "lookback_hours": 36,
            "min_interest_score": 0.5
        },
        "logging": { "level": "debug", "format": "json" },
        "rules": [
            { "entity_type": "team", "entity_id": "BOS", "weight": 1.5, "label": "Bruins" },
            { "entity_type": "player", "entity_id": "8478402", "weight": 2.0 }
        ]
    }"#;

    let mut temp_file =
        Builder::new().suffix(".json").tempfile().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let result = config::load_from_file(Some(temp_file.path().to_path_buf()));
    assert!(result.is_ok(), "Failed to load config from JSON file: {result:?}");

    let config = result.unwrap();

    // Verify digest configuration
    assert_eq!(config.digest.time_zone, "Europe/Helsinki");
    assert_eq!(config.digest.publish_hour, 9);
    assert_eq!(config.digest.lookback_hours, 36);
    assert_eq!(config.digest.min_interest_score, 0.5);

    // Verify logging configuration
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);

    // Verify rules
    assert_eq!(config.rules.len(), 2);
    assert_eq!(config.rules[0].entity_kind(), Some(EntityKind::Team));
    assert_eq!(config.rules[0].label.as_deref(), Some("Bruins"));
    assert_eq!(config.rules[1].entity_kind(), Some(EntityKind::Player));
}

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
[digest]
time_zone = "America/New_York"
publish_hour = 6

[render]
no_matches = "Матчей нет."
not_found = "ссылка не найдена"

[[rules]]
entity_type = "team"
entity_id = "NYR"
weight = 0.75

[[rules]]
entity_type = "league"
entity_id = "NHL"
weight = 3
"#;

    let mut temp_file =
        Builder::new().suffix(".toml").tempfile().expect("Failed to create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("Failed to write to temp file");

    let config = config::load_from_file(Some(temp_file.path().to_path_buf()))
        .expect("Failed to load config from TOML file");

    assert_eq!(config.digest.time_zone, "America/New_York");
    assert_eq!(config.digest.publish_hour, 6);
    assert_eq!(config.digest.lookback_hours, 48);
    assert_eq!(config.render.no_matches, "Матчей нет.");
    assert_eq!(config.render.not_found, "ссылка не найдена");
    assert_eq!(config.render.highlights, "highlights");

    // Unknown kinds survive loading; the scorer skips them
    assert_eq!(config.rules.len(), 2);
    assert_eq!(config.rules[1].entity_kind(), None);
    assert_eq!(config.rules[1].weight, 3.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_values_fail_validation_not_parsing() {
    let mut temp_file =
        Builder::new().suffix(".toml").tempfile().expect("Failed to create temp file");
    temp_file
        .write_all(b"[digest]\npublish_hour = 30\n")
        .expect("Failed to write to temp file");

    let config = config::load_from_file(Some(temp_file.path().to_path_buf()))
        .expect("Out-of-range values still parse");
    assert!(config.validate().is_err());
}
