//! Fabrication analyzer invariants.

use super::common::{fixture_texts, primary};
use super::*;
use tahqiq::canonicalize;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_every_word_gets_one_verdict(text in arabic_text()) {
        let analysis = primary().analyze_fabrication(&text);
        let words: Vec<&str> = analysis.normalized_input.split_whitespace().collect();
        let judged: Vec<&str> = analysis.words.iter().map(|w| w.word.as_str()).collect();
        prop_assert_eq!(judged, words);
    }

    #[test]
    fn prop_stats_match_verdicts(text in arabic_text()) {
        let analysis = primary().analyze_fabrication(&text);
        let fabricated = analysis.words.iter().filter(|w| w.is_fabricated).count();
        prop_assert_eq!(analysis.stats.total_words, analysis.words.len());
        prop_assert_eq!(analysis.stats.fabricated_words, fabricated);
        if fabricated == 0 {
            prop_assert_eq!(analysis.stats.fabricated_ratio, 0.0);
        } else {
            let ratio = fabricated as f64 / analysis.words.len() as f64;
            prop_assert!((analysis.stats.fabricated_ratio - ratio).abs() < 1e-12);
        }
    }

    #[test]
    fn prop_verse_spans_are_genuine(
        i in 0..fixture_texts().len(),
        from in any::<prop::sample::Index>(),
        len in any::<prop::sample::Index>(),
    ) {
        let key = canonicalize(&fixture_texts()[i].1);
        let words: Vec<&str> = key.split(' ').collect();
        let start = from.index(words.len());
        let end = start + 1 + len.index(words.len() - start);
        let span = words[start..end].join(" ");

        let analysis = primary().analyze_fabrication(&span);
        prop_assert_eq!(analysis.stats.fabricated_words, 0, "{}", span);
    }

    #[test]
    fn prop_latin_words_are_fabricated(
        latin in prop::collection::vec(prop::string::string_regex("[a-z]{1,6}").unwrap(), 1..4),
    ) {
        let text = format!("بسم الله {}", latin.join(" "));
        let analysis = primary().analyze_fabrication(&text);
        let flags: Vec<bool> = analysis.words.iter().map(|w| w.is_fabricated).collect();
        let mut expected = vec![false, false];
        expected.extend(std::iter::repeat(true).take(latin.len()));
        prop_assert_eq!(flags, expected);
    }
}
