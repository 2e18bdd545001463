//! Normalizer invariants.

use super::*;
use tahqiq::normalize::chars::is_diacritic;
use tahqiq::{canonicalize, normalize, NormalizeOptions};

fn any_options() -> impl Strategy<Value = NormalizeOptions> {
    prop::array::uniform11(any::<bool>()).prop_map(|b| NormalizeOptions {
        remove_diacritics: b[0],
        normalize_alef_variants: b[1],
        normalize_alef_maqsura: b[2],
        normalize_teh_marbuta: b[3],
        remove_tatweel: b[4],
        normalize_hamza_carriers: b[5],
        normalize_whitespace: b[6],
        normalize_presentation_forms: b[7],
        normalize_digits: b[8],
        strip_bidi_controls: b[9],
        apply_script_heuristics: b[10],
    })
}

proptest! {
    #[test]
    fn prop_idempotent(text in arabic_text()) {
        let once = canonicalize(&text);
        prop_assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn prop_idempotent_literal(text in arabic_text()) {
        let options = NormalizeOptions::literal();
        let once = normalize(&text, &options);
        prop_assert_eq!(normalize(&once, &options), once);
    }

    #[test]
    fn prop_idempotent_any_options(text in arabic_text(), options in any_options()) {
        let once = normalize(&text, &options);
        prop_assert_eq!(normalize(&once, &options), once);
    }

    #[test]
    fn prop_deterministic(text in arabic_text()) {
        prop_assert_eq!(canonicalize(&text), canonicalize(&text));
    }

    #[test]
    fn prop_output_has_no_marks_or_noise(text in arabic_text()) {
        let out = canonicalize(&text);
        for c in out.chars() {
            prop_assert!(!is_diacritic(c), "diacritic {:?} in {:?}", c, out);
            prop_assert!(!matches!(c, '\u{0640}' | '\u{200F}' | '\u{200B}' | '\u{06DB}' | '\u{0670}' | '\u{0654}'), "noise {:?} in {:?}", c, out);
            prop_assert!(!matches!(c, 'أ' | 'إ' | 'آ' | 'ٱ' | 'ى' | 'ة' | 'ؤ' | 'ئ'), "unfolded letter {:?} in {:?}", c, out);
        }
    }

    #[test]
    fn prop_whitespace_is_collapsed(text in arabic_text()) {
        let out = canonicalize(&text);
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.contains('\t') && !out.contains('\n'));
    }

    #[test]
    fn prop_vowel_marks_do_not_matter(word in prop::collection::vec(prop::sample::select(LETTERS), 1..10)) {
        let bare: String = word.iter().collect();
        let voweled: String = word.iter().flat_map(|&c| [c, '\u{064E}']).collect();
        prop_assert_eq!(canonicalize(&bare), canonicalize(&voweled));
    }

    #[test]
    fn prop_total_on_any_string(text in any::<String>()) {
        let _ = canonicalize(&text);
        let _ = normalize(&text, &NormalizeOptions::none());
    }
}
