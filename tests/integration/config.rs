//! Validators built from config files.

use super::common::{fixture_dir, validator_with};
use std::fs;
use tahqiq::{MatchType, Riwaya, Validator, ValidatorConfig};

fn config_from(json: &str) -> ValidatorConfig {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("tahqiq.json");
    fs::write(&path, json).expect("Failed to write config");
    ValidatorConfig::from_file(&path).expect("Failed to read config")
}

#[test]
fn config_file_selects_riwayat() {
    let config = config_from(r#"{"riwayat": ["warsh"], "allowPartial": true}"#);
    assert_eq!(config.active_riwayat(), vec![Riwaya::Hafs, Riwaya::Warsh]);

    let validator = validator_with(config);
    assert!(validator.index().is_multi_riwaya());
    assert!(validator.validate("مَلِكِ يَوْمِ ٱلدِّينِ").is_valid);
}

#[test]
fn max_suggestions_from_config() {
    let query = "فبأي آلاء ربكما تكذبان";

    let none = validator_with(config_from(r#"{"maxSuggestions": 0, "allowPartial": true}"#));
    assert!(none.validate(query).suggestions.is_empty());

    let one = validator_with(config_from(r#"{"maxSuggestions": 1, "allowPartial": true}"#));
    assert_eq!(one.validate(query).suggestions.len(), 1);
}

#[test]
fn display_options_shape_normalized_input_only() {
    let validator = validator_with(config_from(
        r#"{"display": {"removeDiacritics": false}, "allowPartial": true}"#,
    ));
    let text = validator.get_verse(55, 13).unwrap().text.clone();

    let result = validator.validate(&text);
    assert_eq!(result.match_type, MatchType::Exact);
    assert!(result.normalized_input.unwrap().contains('\u{0650}'));

    // lookups ignore the display options
    assert_eq!(validator.validate("فبأي آلاء ربكما تكذبان").match_type, MatchType::Normalized);
}

#[test]
fn config_without_allow_partial_rejects_fixture() {
    let config = config_from("{}");
    assert!(Validator::from_data_dir(fixture_dir(), config).is_err());
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tahqiq.json");
    fs::write(&path, r#"{"maxSuggestions": "three"}"#).unwrap();
    assert!(ValidatorConfig::from_file(&path).is_err());
}
