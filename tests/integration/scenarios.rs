//! The reference scenarios, end to end.

use super::common::primary;
use tahqiq::{normalize, MatchType, NormalizeOptions};

#[test]
fn scenario_normalize_basmala() {
    assert_eq!(normalize("بِسْمِ اللَّهِ", &NormalizeOptions::default()), "بسم الله");
}

#[test]
fn scenario_canonical_text_is_exact() {
    let validator = primary();
    let text = validator.get_verse(1, 1).unwrap().text.clone();

    let result = validator.validate(&text);
    assert!(result.is_valid);
    assert_eq!(result.match_type, MatchType::Exact);
    assert_eq!(result.reference.as_deref(), Some("1:1"));
}

#[test]
fn scenario_common_spelling_is_normalized() {
    let result = primary().validate("بسم الله الرحمن الرحيم");
    assert!(result.is_valid);
    assert_eq!(result.match_type, MatchType::Normalized);
    assert_eq!(result.reference.as_deref(), Some("1:1"));
    // 27:30 ends with the basmala but is a different verse
    assert!(result.suggestions.is_empty());
}

#[test]
fn scenario_unrelated_arabic_is_none() {
    let result = primary().validate("مرحبا كيف حالك اليوم");
    assert!(!result.is_valid);
    assert_eq!(result.match_type, MatchType::None);
    assert!(result.matched_verse.is_none());
}

#[test]
fn scenario_truncation_is_none() {
    let result = primary().validate("بسم الله");
    assert!(!result.is_valid);
    assert_eq!(result.match_type, MatchType::None);
}

#[test]
fn scenario_fabrication() {
    let analysis = primary().analyze_fabrication("بسم الله الفلان");
    let flags: Vec<bool> = analysis.words.iter().map(|w| w.is_fabricated).collect();
    assert_eq!(flags, vec![false, false, true]);
    assert_eq!(analysis.stats.total_words, 3);
    assert_eq!(analysis.stats.fabricated_words, 1);
    assert!((analysis.stats.fabricated_ratio - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn fabrication_of_a_genuine_passage_across_verses() {
    // end of 112:1 followed by the start of 112:2
    let analysis = primary().analyze_fabrication("هو الله أحد الله الصمد");
    assert_eq!(analysis.stats.fabricated_words, 0);
    assert_eq!(analysis.stats.total_words, 5);
}

#[test]
fn fabrication_of_empty_input() {
    let analysis = primary().analyze_fabrication("   ");
    assert!(analysis.words.is_empty());
    assert_eq!(analysis.stats.fabricated_ratio, 0.0);
}

#[test]
fn validate_against_explains_a_misquote() {
    // 113:1 cited, 114:1 quoted
    let result = primary().validate_against("قل أعوذ برب الناس", "113:1");
    assert_eq!(result.match_type, MatchType::None);
    assert_eq!(result.normalized_input.as_deref(), Some("قل اعوذ برب الناس"));
    assert_eq!(result.expected_normalized.as_deref(), Some("قل اعوذ برب الفلق"));
    assert_eq!(result.mismatch_index, Some("قل اعوذ برب ال".chars().count()));
}

#[test]
fn validate_against_a_range() {
    let validator = primary();
    let text = validator.get_verse_range(1, 1, 3).unwrap().text;

    let result = validator.validate_against(&text, "1:1-3");
    assert_eq!(result.match_type, MatchType::Exact);
    assert_eq!(result.reference.as_deref(), Some("1:1-3"));

    // a range is not a single verse for whole-corpus validation
    assert_eq!(validator.validate(&text).match_type, MatchType::None);
}

#[test]
fn search_finds_containing_verses() {
    let hits = primary().search("الرحمن الرحيم", 10);
    let refs: Vec<String> = hits.iter().map(|h| h.verse.reference()).collect();
    assert_eq!(refs, vec!["1:3", "1:1", "27:30"]);
    assert!((hits[0].similarity - 1.0).abs() < 1e-12);
    assert!(hits.windows(2).all(|w| w[0].similarity >= w[1].similarity));
}

#[test]
fn results_serialize_camel_case() {
    let result = primary().validate_against("قل هو الله الصمد", "112:1");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["isValid"], false);
    assert_eq!(json["matchType"], "none");
    assert!(json["mismatchIndex"].is_u64());
    assert!(json.get("matchedVerse").is_none());
    assert!(json.get("suggestions").is_none());
}
