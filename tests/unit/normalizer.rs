//! Normalizer behavior on real verse text.

use super::common::fixture_corpus;
use tahqiq::normalize::PIPELINE;
use tahqiq::{canonicalize, normalize, NormalizeOptions};

#[test]
fn voweled_fixture_verses_reduce_to_common_spelling() {
    let expected = [
        ((1, 1), "بسم الله الرحمن الرحيم"),
        ((1, 2), "الحمد لله رب العالمين"),
        ((1, 4), "مالك يوم الدين"),
        ((1, 7), "صراط الذين انعمت عليهم غير المغضوب عليهم ولا الضالين"),
        ((55, 13), "فباي الاء ربكما تكذبن"),
        ((112, 4), "ولم يكن له كفوا احد"),
        ((113, 4), "ومن شر النفاثات في العقد"),
        ((114, 3), "اله الناس"),
        ((114, 6), "من الجنه والناس"),
    ];
    let corpus = fixture_corpus();

    for ((surah, ayah), key) in expected {
        let verse = corpus
            .verses
            .iter()
            .find(|v| v.surah == surah && v.ayah == ayah)
            .expect("verse in fixture");
        assert_eq!(canonicalize(&verse.text), key, "{}:{}", surah, ayah);
    }
}

#[test]
fn basmala_scenario() {
    assert_eq!(normalize("بِسْمِ اللَّهِ", &NormalizeOptions::default()), "بسم الله");
}

#[test]
fn pipeline_equals_rules_applied_in_order() {
    let options = NormalizeOptions::aggressive();
    for verse in fixture_corpus().verses {
        let stepwise = PIPELINE
            .iter()
            .filter(|rule| rule.is_enabled(&options))
            .fold(verse.text.clone(), |acc, rule| (rule.apply)(&acc));
        assert_eq!(stepwise, normalize(&verse.text, &options), "{}", verse.reference());
    }
}

#[test]
fn normalized_fixture_is_a_fixpoint() {
    for verse in fixture_corpus().verses {
        let once = canonicalize(&verse.text);
        assert_eq!(canonicalize(&once), once, "{}", verse.reference());
    }
}

#[test]
fn none_preset_only_strips_annotation_marks() {
    let text = "ذَٰلِكَ ٱلْكِتَٰبُ لَا رَيْبَ ۛ فِيهِ ۛ";
    let out = normalize(text, &NormalizeOptions::none());
    assert!(!out.contains('\u{06DB}'));
    assert!(out.contains('\u{0670}'));
    assert!(out.contains('ٱ'));
}

#[test]
#[cfg(feature = "unicode-normalization")]
fn presentation_forms_match_plain_letters() {
    // lam-alef ligature and the Allah ligature, as pasted from some PDFs
    assert_eq!(canonicalize("\u{FEFB} \u{FDF2}"), canonicalize("لا الله"));
}
