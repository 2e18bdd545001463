// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Canonicalization of Arabic text for comparison.
//!
//! Three independent kinds of variation get in the way of a byte comparison:
//! vowel marks (present or not), script choice (the fully-voweled reference
//! orthography vs. everyday spelling), and encoding artifacts (ligatures,
//! bidi marks, digit systems). Each is handled by its own rule in
//! `rules.rs`; this module owns the order they run in and which of them the
//! caller has switched on.
//!
//! # Pipeline
//!
//! ```text
//!  1  compatibility_compose        presentation forms, ligatures (NFKC)
//!  2  strip_bidi_controls          RLM, ZWJ, BOM ...
//!  3  strip_annotation_marks       pause / section / small-letter marks
//!  4a expand_superscript_alef      ٰ  → ا                     [heuristics]
//!  4b resolve_hamza_above          ٔ  → و | ا | ∅              [heuristics]
//!     drop_hamza_before_alef       ءا → ا                     [heuristics]
//!  5  remove_diacritics            tashkeel
//!  6  remove_tatweel, compose_canonical,
//!     alef variants, alef maqsura, teh marbuta
//!  7  normalize_hamza_carriers     ؤ ئ
//!  8  normalize_digits             ٠-٩ ۰-۹ → 0-9
//!  9  collapse_whitespace
//! 10  word-final corrections       ان يا لاه                  [heuristics]
//! ```
//!
//! Stage 1 must precede every letter-level rule. Stage 4 must see the marks
//! before stage 5 removes them. Stage 10 only makes sense on fully
//! normalized, whitespace-collapsed words.
//!
//! # Idempotence
//!
//! `normalize(normalize(s, o), o) == normalize(s, o)` for every `o`. With the
//! default options one pass is enough. When marks survive (heuristics or
//! diacritic removal off), letter rules can leave a madda or hamza mark next
//! to a bare alef, waw or ya that stage 1 would compose on a second run, so
//! `normalize` repeats the pipeline until nothing changes. Property tests in
//! `tests/property/normalization.rs` check this on generated Arabic text.

pub mod chars;
pub mod rules;

use serde::{Deserialize, Serialize};

pub use chars::is_arabic_char;

/// Which normalization stages are active.
///
/// An immutable value: build one (usually from a preset) and pass it by
/// reference. There is no shared mutable default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NormalizeOptions {
    pub remove_diacritics: bool,
    pub normalize_alef_variants: bool,
    pub normalize_alef_maqsura: bool,
    pub normalize_teh_marbuta: bool,
    pub remove_tatweel: bool,
    pub normalize_hamza_carriers: bool,
    pub normalize_whitespace: bool,
    pub normalize_presentation_forms: bool,
    pub normalize_digits: bool,
    pub strip_bidi_controls: bool,
    /// Resolve marks only the fully-voweled script uses (superscript alef,
    /// hamza above) and apply the word-final corrections. Off keeps those
    /// marks in the output.
    pub apply_script_heuristics: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::aggressive()
    }
}

impl NormalizeOptions {
    /// Every stage on. Used for all corpus keys and lookups.
    pub const fn aggressive() -> Self {
        Self {
            remove_diacritics: true,
            normalize_alef_variants: true,
            normalize_alef_maqsura: true,
            normalize_teh_marbuta: true,
            remove_tatweel: true,
            normalize_hamza_carriers: true,
            normalize_whitespace: true,
            normalize_presentation_forms: true,
            normalize_digits: true,
            strip_bidi_controls: true,
            apply_script_heuristics: true,
        }
    }

    /// Every optional stage off. Only annotation marks are still removed.
    pub const fn none() -> Self {
        Self {
            remove_diacritics: false,
            normalize_alef_variants: false,
            normalize_alef_maqsura: false,
            normalize_teh_marbuta: false,
            remove_tatweel: false,
            normalize_hamza_carriers: false,
            normalize_whitespace: false,
            normalize_presentation_forms: false,
            normalize_digits: false,
            strip_bidi_controls: false,
            apply_script_heuristics: false,
        }
    }

    /// Aggressive settings without the script heuristics: closer to what the
    /// user typed, still comparable letter by letter.
    pub const fn literal() -> Self {
        Self {
            apply_script_heuristics: false,
            ..Self::aggressive()
        }
    }
}

/// A named stage of the pipeline.
pub struct Rule {
    /// Stable identifier, e.g. for tracing which stage changed a string.
    pub name: &'static str,
    /// Position in the documented pipeline (1-10).
    pub stage: u8,
    enabled: fn(&NormalizeOptions) -> bool,
    pub apply: fn(&str) -> String,
}

impl Rule {
    pub fn is_enabled(&self, options: &NormalizeOptions) -> bool {
        (self.enabled)(options)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("stage", &self.stage)
            .finish()
    }
}

fn always(_: &NormalizeOptions) -> bool {
    true
}

/// The pipeline, in execution order.
pub static PIPELINE: &[Rule] = &[
    Rule {
        name: "compatibility_compose",
        stage: 1,
        enabled: |o| o.normalize_presentation_forms,
        apply: rules::compatibility_compose,
    },
    Rule {
        name: "strip_bidi_controls",
        stage: 2,
        enabled: |o| o.strip_bidi_controls,
        apply: rules::strip_bidi_controls,
    },
    Rule {
        name: "strip_annotation_marks",
        stage: 3,
        enabled: always,
        apply: rules::strip_annotation_marks,
    },
    Rule {
        name: "expand_superscript_alef",
        stage: 4,
        enabled: |o| o.apply_script_heuristics,
        apply: rules::expand_superscript_alef,
    },
    Rule {
        name: "resolve_hamza_above",
        stage: 4,
        enabled: |o| o.apply_script_heuristics,
        apply: rules::resolve_hamza_above,
    },
    Rule {
        name: "drop_hamza_before_alef",
        stage: 4,
        enabled: |o| o.apply_script_heuristics,
        apply: rules::drop_hamza_before_alef,
    },
    Rule {
        name: "remove_diacritics",
        stage: 5,
        enabled: |o| o.remove_diacritics,
        apply: rules::remove_diacritics,
    },
    Rule {
        name: "remove_tatweel",
        stage: 6,
        enabled: |o| o.remove_tatweel,
        apply: rules::remove_tatweel,
    },
    Rule {
        name: "compose_canonical",
        stage: 6,
        enabled: always,
        apply: rules::compose_canonical,
    },
    Rule {
        name: "normalize_alef_variants",
        stage: 6,
        enabled: |o| o.normalize_alef_variants,
        apply: rules::normalize_alef_variants,
    },
    Rule {
        name: "normalize_alef_maqsura",
        stage: 6,
        enabled: |o| o.normalize_alef_maqsura,
        apply: rules::normalize_alef_maqsura,
    },
    Rule {
        name: "normalize_teh_marbuta",
        stage: 6,
        enabled: |o| o.normalize_teh_marbuta,
        apply: rules::normalize_teh_marbuta,
    },
    Rule {
        name: "normalize_hamza_carriers",
        stage: 7,
        enabled: |o| o.normalize_hamza_carriers,
        apply: rules::normalize_hamza_carriers,
    },
    Rule {
        name: "normalize_digits",
        stage: 8,
        enabled: |o| o.normalize_digits,
        apply: rules::normalize_digits,
    },
    Rule {
        name: "collapse_whitespace",
        stage: 9,
        enabled: |o| o.normalize_whitespace,
        apply: rules::collapse_whitespace,
    },
    Rule {
        name: "drop_alef_before_final_noon",
        stage: 10,
        enabled: |o| o.apply_script_heuristics,
        apply: rules::drop_alef_before_final_noon,
    },
    Rule {
        name: "collapse_final_ya_alef",
        stage: 10,
        enabled: |o| o.apply_script_heuristics,
        apply: rules::collapse_final_ya_alef,
    },
    Rule {
        name: "collapse_final_lam_alef_heh",
        stage: 10,
        enabled: |o| o.apply_script_heuristics,
        apply: rules::collapse_final_lam_alef_heh,
    },
];

/// Normalize `text` under `options`.
///
/// Total and deterministic: any string in, a string out.
///
/// ```
/// use tahqiq::{normalize, NormalizeOptions};
///
/// assert_eq!(normalize("بِسْمِ اللَّهِ", &NormalizeOptions::default()), "بسم الله");
/// ```
pub fn normalize(text: &str, options: &NormalizeOptions) -> String {
    let mut out = run_pipeline(text, options);

    // A surviving madda or hamza mark can end up next to a bare alef, waw or
    // ya once the letter rules have run. Another pass composes the pair, and
    // each such pass consumes at least one mark.
    let pending = out.chars().filter(|&c| chars::is_composing_mark(c)).count();
    for _ in 0..pending {
        let next = run_pipeline(&out, options);
        if next == out {
            break;
        }
        out = next;
    }
    out
}

fn run_pipeline(text: &str, options: &NormalizeOptions) -> String {
    PIPELINE
        .iter()
        .filter(|rule| rule.is_enabled(options))
        .fold(text.to_string(), |acc, rule| (rule.apply)(&acc))
}

/// Normalize with every stage on. This is the form every corpus key uses.
pub fn canonicalize(text: &str) -> String {
    normalize(text, &NormalizeOptions::aggressive())
}

/// Whether `text` contains at least one character in the Arabic blocks.
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic_char)
}
