// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character classes used by the normalization rules.
//!
//! Everything here is a plain `char` predicate or constant. The rules in
//! `rules.rs` are written against these names rather than raw code points so
//! the pipeline reads like the orthography it handles.

pub const ALEF: char = '\u{0627}';
pub const ALEF_MADDA: char = '\u{0622}';
pub const ALEF_HAMZA_ABOVE: char = '\u{0623}';
pub const ALEF_HAMZA_BELOW: char = '\u{0625}';
pub const ALEF_WASLA: char = '\u{0671}';
pub const ALEF_MAQSURA: char = '\u{0649}';
pub const HAMZA: char = '\u{0621}';
pub const WAW: char = '\u{0648}';
pub const WAW_HAMZA: char = '\u{0624}';
pub const YA: char = '\u{064A}';
pub const YA_HAMZA: char = '\u{0626}';
pub const TEH_MARBUTA: char = '\u{0629}';
pub const HEH: char = '\u{0647}';
pub const LAM: char = '\u{0644}';
pub const NOON: char = '\u{0646}';
pub const TATWEEL: char = '\u{0640}';

/// Combining hamza above. Written on tatweel or bare consonants in the
/// fully-voweled script where common spelling uses a carrier letter.
pub const HAMZA_ABOVE: char = '\u{0654}';

/// Superscript (dagger) alef: a long vowel written as a mark.
pub const SUPERSCRIPT_ALEF: char = '\u{0670}';

/// Alef with or without a hamza/madda seat, plus alef wasla.
#[inline]
pub fn is_alef_family(c: char) -> bool {
    matches!(
        c,
        ALEF | ALEF_MADDA | ALEF_HAMZA_ABOVE | ALEF_HAMZA_BELOW | ALEF_WASLA
    )
}

/// Tashkeel removed by the diacritics stage.
///
/// Hamza above (U+0654) and superscript alef (U+0670) are deliberately absent:
/// the script heuristics resolve them into letters, and with heuristics
/// disabled they are kept.
#[inline]
pub fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0653}' | '\u{0655}'..='\u{065F}')
}

/// Recitation, pause and section marks. Never part of comparable content.
#[inline]
pub fn is_annotation_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0610}'..='\u{061A}'  // honorifics and small high signs
            | '\u{06D6}'..='\u{06ED}'  // Quranic pause marks and small letters
            | '\u{08D3}'..='\u{08FF}'  // Extended-A Quranic marks (open tanween etc.)
    )
}

/// Any combining mark a heuristic should look past when it searches for the
/// neighbouring letter.
#[inline]
pub fn is_mark(c: char) -> bool {
    is_diacritic(c) || is_annotation_mark(c) || c == HAMZA_ABOVE || c == SUPERSCRIPT_ALEF
}

/// Madda, hamza above and hamza below: the marks canonical composition folds
/// into alef, waw or ya.
#[inline]
pub fn is_composing_mark(c: char) -> bool {
    matches!(c, '\u{0653}'..='\u{0655}')
}

/// Directional formatting and zero-width characters.
#[inline]
pub fn is_bidi_control(c: char) -> bool {
    matches!(
        c,
        '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2066}'..='\u{2069}'
            | '\u{061C}'
            | '\u{FEFF}'
            | '\u{00AD}'
    )
}

/// Map Arabic-Indic (U+0660..) and Eastern Arabic-Indic (U+06F0..) digits to ASCII.
#[inline]
pub fn ascii_digit(c: char) -> Option<char> {
    let offset = match c {
        '\u{0660}'..='\u{0669}' => c as u32 - 0x0660,
        '\u{06F0}'..='\u{06F9}' => c as u32 - 0x06F0,
        _ => return None,
    };
    char::from_digit(offset, 10)
}

/// Check if a character falls in one of the Arabic Unicode blocks.
///
/// Covers the base block, Supplement, Extended-A and both presentation form
/// blocks, so raw ligatures count as Arabic before they are decomposed.
#[inline]
pub fn is_arabic_char(c: char) -> bool {
    matches!(
        c,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}'
    )
}

/// A letter that can precede the spurious word-final alef before noon.
///
/// Long-vowel letters are excluded: `ـوان`/`ـيان` are real spellings, not a
/// superscript alef spelled out.
#[inline]
pub fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && is_arabic_char(c) && !matches!(c, ALEF | WAW | YA | ALEF_MAQSURA)
}
