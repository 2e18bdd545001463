//! Validator invariants over the fixture corpus.

use super::common::{fixture_texts, primary};
use super::*;
use tahqiq::normalize::chars::is_diacritic;
use tahqiq::{canonicalize, MatchType};

/// Index into the fixture's verses.
fn verse_index() -> impl Strategy<Value = usize> {
    0..fixture_texts().len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_non_arabic_is_none(text in non_arabic_text()) {
        let result = primary().validate(&text);
        prop_assert_eq!(result.match_type, MatchType::None);
        prop_assert!(!result.is_valid);
        prop_assert!(result.normalized_input.is_some());
        prop_assert!(result.suggestions.is_empty());
    }

    #[test]
    fn prop_verdict_fields_agree(text in arabic_text()) {
        let result = primary().validate(&text);
        prop_assert_eq!(result.is_valid, result.match_type.is_match());
        prop_assert_eq!(result.is_valid, result.matched_verse.is_some());
        prop_assert_eq!(result.is_valid, result.reference.is_some());
    }

    #[test]
    fn prop_match_is_sound(text in arabic_text()) {
        let result = primary().validate(&text);
        if let Some(verse) = result.matched_verse {
            match result.match_type {
                MatchType::Exact => prop_assert_eq!(text.trim(), verse.text.as_str()),
                _ => prop_assert_eq!(canonicalize(&text), canonicalize(&verse.text)),
            }
        }
    }

    #[test]
    fn prop_dropping_vowels_keeps_the_match(i in verse_index(), seed in any::<u64>()) {
        let (reference, text) = &fixture_texts()[i];
        // drop a pseudo-random subset of the vowel marks
        let stripped: String = text
            .chars()
            .enumerate()
            .filter(|&(n, c)| !(is_diacritic(c) && (seed >> (n % 64)) & 1 == 1))
            .map(|(_, c)| c)
            .collect();

        let result = primary().validate(&stripped);
        prop_assert!(result.is_valid, "{} lost its match", reference);
        let verse = result.matched_verse.unwrap();
        prop_assert_eq!(canonicalize(&verse.text), canonicalize(text));
    }

    #[test]
    fn prop_mismatch_index_points_at_the_change(i in verse_index(), at in any::<prop::sample::Index>()) {
        let (reference, text) = &fixture_texts()[i];
        let key: Vec<char> = canonicalize(text).chars().collect();
        let k = at.index(key.len());
        let replacement = if key[k] == 'ق' { 'ث' } else { 'ق' };
        let quoted: String = key[..k].iter().chain(std::iter::once(&replacement)).collect();

        let result = primary().validate_against(&quoted, reference);
        prop_assert_eq!(result.match_type, MatchType::None);
        prop_assert_eq!(result.mismatch_index, Some(k));
    }

    #[test]
    fn prop_truncated_quote_diverges_at_its_end(i in verse_index(), at in any::<prop::sample::Index>()) {
        let (reference, text) = &fixture_texts()[i];
        let key = canonicalize(text);
        let words: Vec<&str> = key.split(' ').collect();
        prop_assume!(words.len() > 1);
        let quoted = words[..1 + at.index(words.len() - 1)].join(" ");

        let result = primary().validate_against(&quoted, reference);
        prop_assert_eq!(result.match_type, MatchType::None);
        prop_assert_eq!(result.mismatch_index, Some(quoted.chars().count()));
    }
}
