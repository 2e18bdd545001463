//! Every verse of the fixture must validate as itself.
//!
//! Repeated texts (55:13 and 55:16) resolve to their first occurrence; the
//! expected reference is computed the same way here rather than hard-coded.

use super::common::{fixture_texts, primary, with_warsh};
use tahqiq::{canonicalize, MatchType};

/// Reference of the first verse whose `key(text)` equals `key(target)`.
fn first_with_key(texts: &[(String, String)], target: &str, key: fn(&str) -> String) -> String {
    let wanted = key(target);
    texts
        .iter()
        .find(|(_, text)| key(text) == wanted)
        .map(|(reference, _)| reference.clone())
        .expect("target is in the list")
}

#[test]
fn canonical_texts_are_exact() {
    let texts = fixture_texts();
    for validator in [primary(), with_warsh()] {
        for (reference, text) in &texts {
            let result = validator.validate(text);
            assert_eq!(result.match_type, MatchType::Exact, "{}", reference);
            assert_eq!(
                result.reference.unwrap(),
                first_with_key(&texts, text, str::to_string),
                "{}",
                reference
            );
        }
    }
}

#[test]
fn canonicalized_texts_are_normalized() {
    let texts = fixture_texts();
    for (reference, text) in &texts {
        let result = primary().validate(&canonicalize(text));
        assert_eq!(result.match_type, MatchType::Normalized, "{}", reference);
        assert_eq!(
            result.reference.unwrap(),
            first_with_key(&texts, text, canonicalize),
            "{}",
            reference
        );
    }
}

#[test]
fn every_verse_validates_against_its_own_citation() {
    for (reference, text) in fixture_texts() {
        let result = primary().validate_against(&text, &reference);
        assert_eq!(result.match_type, MatchType::Exact, "{}", reference);
        assert_eq!(result.reference.as_deref(), Some(reference.as_str()));
        assert!(result.mismatch_index.is_none());
    }
}

#[test]
fn matched_verse_is_consistent_with_reference() {
    for (_, text) in fixture_texts() {
        let result = primary().validate(&text);
        let verse = result.matched_verse.unwrap();
        assert_eq!(Some(verse.reference()), result.reference);
        assert_eq!(primary().get_verse(verse.surah, verse.ayah), Some(&verse));
    }
}
