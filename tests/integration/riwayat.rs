//! Multi-riwaya behavior with Warsh loaded from disk.

use super::common::{primary, with_warsh};
use tahqiq::{MatchType, Riwaya};

const WARSH_1_4: &str = "مَلِكِ يَوْمِ ٱلدِّينِ";

#[test]
fn active_riwayat_are_listed_primary_first() {
    let ids: Vec<Riwaya> = with_warsh().riwayat().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![Riwaya::Hafs, Riwaya::Warsh]);
    assert_eq!(with_warsh().riwayat()[1].name_arabic, "ورش");
}

#[test]
fn variant_reading_is_found_only_when_loaded() {
    assert_eq!(primary().validate(WARSH_1_4).match_type, MatchType::None);

    let result = with_warsh().validate(WARSH_1_4);
    assert_eq!(result.match_type, MatchType::Exact);
    assert_eq!(result.reference.as_deref(), Some("1:4"));

    let matches = result.variant_matches.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].riwaya, Riwaya::Warsh);
    // the verse carries primary metadata, the variant text is Warsh's own
    assert_eq!(matches[0].verse.text, "مَٰلِكِ يَوْمِ ٱلدِّينِ");
    assert_eq!(matches[0].variant_text, WARSH_1_4);
}

#[test]
fn primary_reading_is_not_attributed_to_warsh() {
    let text = with_warsh().get_verse(1, 4).unwrap().text.clone();
    let result = with_warsh().validate(&text);
    assert_eq!(result.match_type, MatchType::Exact);

    let riwayat: Vec<Riwaya> = result
        .variant_matches
        .unwrap()
        .iter()
        .map(|m| m.riwaya)
        .collect();
    assert_eq!(riwayat, vec![Riwaya::Hafs]);
}

#[test]
fn cited_range_uses_the_variant_text() {
    let validator = with_warsh();
    let hafs = validator.get_verse_range(1, 1, 3).unwrap().text;
    let text = format!("{} {}", hafs, WARSH_1_4);

    assert_eq!(primary().validate_against(&text, "1:1-4").match_type, MatchType::None);

    let result = validator.validate_against(&text, "1:1-4");
    assert_eq!(result.match_type, MatchType::Exact);
    assert_eq!(result.reference.as_deref(), Some("1:1-4"));
    assert_eq!(result.variant_matches.unwrap()[0].riwaya, Riwaya::Warsh);
}

#[test]
fn citation_outside_the_variant_still_reports_divergence() {
    let result = with_warsh().validate_against("قل أعوذ برب الناس", "113:1");
    assert_eq!(result.match_type, MatchType::None);
    assert!(result.variant_matches.is_none());
    assert!(result.mismatch_index.is_some());
}

#[test]
fn variant_text_is_part_of_the_flattened_corpus() {
    let analysis = with_warsh().analyze_fabrication("ملك يوم الدين");
    assert_eq!(analysis.stats.fabricated_words, 0);
    assert!(with_warsh().index().flattened().contains("ملك يوم الدين"));
    assert!(!primary().index().flattened().contains("ملك يوم الدين"));
}

#[test]
fn search_reports_primary_verses_only() {
    for hit in with_warsh().search("يوم الدين", 10) {
        assert_eq!(hit.verse.reference(), "1:4");
    }
    assert_eq!(with_warsh().search("يوم الدين", 10).len(), 1);
}
