// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Individual normalization rules.
//!
//! Each rule is a pure `fn(&str) -> String` that does exactly one thing. None
//! of them knows about `NormalizeOptions` or about the other rules; ordering
//! and gating live in the pipeline table in `mod.rs`. That split is what makes
//! the order dependencies visible: a rule that only works after another has
//! run says so in its doc comment, and the table encodes it.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use super::chars::*;

// ============================================================================
// ENCODING
// ============================================================================

/// Compatibility-normalize (NFKC): ligatures and presentation forms become
/// their base letters, e.g. `ﷲ` → `الله`, `ﻻ` → `لا`.
///
/// Must run before every letter-level rule, since those rules only know the
/// base Arabic block.
#[cfg(feature = "unicode-normalization")]
pub fn compatibility_compose(text: &str) -> String {
    text.nfkc().collect()
}

/// Without `unicode-normalization` the text is assumed to be pre-normalized.
#[cfg(not(feature = "unicode-normalization"))]
pub fn compatibility_compose(text: &str) -> String {
    text.to_string()
}

/// Canonical composition (NFC).
///
/// Removing tatweel or marks can leave a carrier letter directly in front of
/// a combining hamza or madda. Recomposing here means the letter rules that
/// follow see `أ` rather than `ا` + U+0654, and a second pass over the output
/// finds nothing left to compose.
#[cfg(feature = "unicode-normalization")]
pub fn compose_canonical(text: &str) -> String {
    text.nfc().collect()
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn compose_canonical(text: &str) -> String {
    text.to_string()
}

/// Remove directional formatting and zero-width characters.
pub fn strip_bidi_controls(text: &str) -> String {
    text.chars().filter(|&c| !is_bidi_control(c)).collect()
}

/// Remove pause, section and small-letter recitation marks.
pub fn strip_annotation_marks(text: &str) -> String {
    text.chars().filter(|&c| !is_annotation_mark(c)).collect()
}

// ============================================================================
// SCRIPT HEURISTICS (before diacritics are removed)
// ============================================================================

/// Superscript alef → full alef.
///
/// The voweled script writes the long vowel of `ٱلرَّحْمَٰنِ` as a mark;
/// common spelling writes a letter. The word-final rules below take back the
/// cases where common spelling drops it again.
pub fn expand_superscript_alef(text: &str) -> String {
    text.chars()
        .map(|c| if c == SUPERSCRIPT_ALEF { ALEF } else { c })
        .collect()
}

/// First letter after `i`, looking past marks and tatweel.
fn next_letter(chars: &[char], i: usize) -> Option<char> {
    chars[i + 1..]
        .iter()
        .copied()
        .find(|&c| !is_mark(c) && c != TATWEEL)
}

/// First letter before `i`, looking past marks and tatweel.
fn prev_letter(chars: &[char], i: usize) -> Option<char> {
    chars[..i]
        .iter()
        .rev()
        .copied()
        .find(|&c| !is_mark(c) && c != TATWEEL)
}

/// What a combining hamza above becomes, given its neighbouring letters.
/// `None` drops it.
fn hamza_above_replacement(prev: Option<char>, next: Option<char>) -> Option<char> {
    if next == Some(WAW) {
        return Some(WAW);
    }
    if matches!(prev, Some(YA | ALEF_MAQSURA)) {
        return None;
    }
    if next.is_some_and(is_alef_family) {
        return None;
    }
    Some(ALEF)
}

/// Resolve the combining hamza above (U+0654) into the letter common spelling
/// would use.
///
/// In priority order: before waw it is a waw seat; after ya the ya already
/// carries it; before an alef the alef already carries it; otherwise it sits
/// on an alef.
pub fn resolve_hamza_above(text: &str) -> String {
    if !text.contains(HAMZA_ABOVE) {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != HAMZA_ABOVE {
            out.push(c);
            continue;
        }
        if let Some(r) = hamza_above_replacement(prev_letter(&chars, i), next_letter(&chars, i)) {
            out.push(r);
        }
    }
    out
}

/// Drop a standalone hamza letter that directly precedes an alef-family letter.
///
/// The voweled script spells the long `ā` after a glottal stop as `ءَا` where
/// common spelling uses `آ`. A run of hamzas in front of the alef is dropped
/// as a whole so the rule is stable under re-application.
///
/// Runs after `resolve_hamza_above`, which can itself produce such an alef.
pub fn drop_hamza_before_alef(text: &str) -> String {
    if !text.contains(HAMZA) {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == HAMZA {
            let next = chars[i + 1..]
                .iter()
                .copied()
                .find(|&n| !is_mark(n) && n != TATWEEL && n != HAMZA);
            if next.is_some_and(is_alef_family) {
                continue;
            }
        }
        out.push(c);
    }
    out
}

// ============================================================================
// LETTERS
// ============================================================================

/// Remove tashkeel (vowels, tanween, shadda, sukun, madda).
pub fn remove_diacritics(text: &str) -> String {
    text.chars().filter(|&c| !is_diacritic(c)).collect()
}

/// Remove the elongation character.
pub fn remove_tatweel(text: &str) -> String {
    text.chars().filter(|&c| c != TATWEEL).collect()
}

/// `أ إ آ ٱ` → `ا`.
pub fn normalize_alef_variants(text: &str) -> String {
    text.chars()
        .map(|c| if is_alef_family(c) { ALEF } else { c })
        .collect()
}

/// `ى` → `ي`.
pub fn normalize_alef_maqsura(text: &str) -> String {
    text.chars()
        .map(|c| if c == ALEF_MAQSURA { YA } else { c })
        .collect()
}

/// `ة` → `ه`.
pub fn normalize_teh_marbuta(text: &str) -> String {
    text.chars()
        .map(|c| if c == TEH_MARBUTA { HEH } else { c })
        .collect()
}

/// Collapse hamza seats onto their carrier letter.
///
/// `ؤ` → `و`; `ئ` before `و` → `و`; `ئ` right after `ي` → dropped (the ya
/// already carries the sound); any other `ئ` → `ي`.
pub fn normalize_hamza_carriers(text: &str) -> String {
    if !text.contains(&[WAW_HAMZA, YA_HAMZA][..]) {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        match c {
            WAW_HAMZA => out.push(WAW),
            YA_HAMZA => {
                if chars.get(i + 1) == Some(&WAW) {
                    out.push(WAW);
                } else if i > 0 && chars[i - 1] == YA {
                    // carried by the preceding ya
                } else {
                    out.push(YA);
                }
            }
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// LAYOUT
// ============================================================================

/// Arabic-Indic and Eastern Arabic-Indic digits → ASCII.
pub fn normalize_digits(text: &str) -> String {
    text.chars().map(|c| ascii_digit(c).unwrap_or(c)).collect()
}

/// Collapse whitespace runs to a single space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// SCRIPT HEURISTICS (word-final, after everything else)
// ============================================================================

/// Apply `f` to every maximal non-whitespace run, keeping the whitespace.
fn map_words(text: &str, f: impl Fn(&mut Vec<char>)) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word: Vec<char> = Vec::new();
    for c in text.chars() {
        if c.is_whitespace() {
            if !word.is_empty() {
                f(&mut word);
                out.extend(word.drain(..));
            }
            out.push(c);
        } else {
            word.push(c);
        }
    }
    if !word.is_empty() {
        f(&mut word);
        out.extend(word);
    }
    out
}

/// `…Cان` → `…Cن` at the end of a word, C a consonant.
///
/// Undoes the superscript alef expansion where common spelling has no alef:
/// `الرحمان` → `الرحمن`.
pub fn drop_alef_before_final_noon(text: &str) -> String {
    map_words(text, |word| {
        let n = word.len();
        if n >= 3 && word[n - 1] == NOON && word[n - 2] == ALEF && is_consonant(word[n - 3]) {
            word.remove(n - 2);
        }
    })
}

/// Word-final `يا` → `ي` (`علىٰ` spelled out becomes `عليا`).
///
/// A run of alefs after the ya goes as a whole, so a second pass is a no-op.
pub fn collapse_final_ya_alef(text: &str) -> String {
    map_words(text, |word| {
        let alefs = word.iter().rev().take_while(|&&c| c == ALEF).count();
        if alefs > 0 && alefs < word.len() && word[word.len() - alefs - 1] == YA {
            word.truncate(word.len() - alefs);
        }
    })
}

/// Word-final `لاه` → `له` (`إِلَٰه` spelled out becomes `الاه`).
pub fn collapse_final_lam_alef_heh(text: &str) -> String {
    map_words(text, |word| {
        let n = word.len();
        if n >= 3 && word[n - 1] == HEH && word[n - 2] == ALEF && word[n - 3] == LAM {
            word.remove(n - 2);
        }
    })
}
