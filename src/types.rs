// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks: verses, surahs, riwayat, and what a query returns.
//!
//! Reference data types mirror the JSON the ingestion step writes (camelCase
//! keys), so they deserialize straight from the data directory. Result types
//! serialize the same way for the CLI's `--json` output.
//!
//! # Invariants
//!
//! - **Verse**: `1 ≤ surah ≤ 114`, `ayah ≥ 1`, `(surah, ayah)` unique, `id` unique.
//! - **Surah**: `verses_count` equals the number of loaded verses with that number
//!   (checked when the full corpus is loaded).
//! - **ValidationResult**: `is_valid ⇔ match_type != None`.
//! - **FabricationStats**: `total_words == words.len()`,
//!   `fabricated_ratio == fabricated_words / total_words` (0 when empty).
//!
//! Everything here is created once at load time and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of surahs in the complete corpus.
pub const SURAH_COUNT: u16 = 114;

/// Number of verses in the complete (Hafs) corpus.
pub const VERSE_COUNT: usize = 6236;

// =============================================================================
// REFERENCE DATA
// =============================================================================

/// One verse of the primary riwaya.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    pub id: u32,
    pub surah: u16,
    pub ayah: u16,
    /// Canonical, fully-voweled text.
    pub text: String,
    /// Diacritic-free spelling shipped with the data.
    #[serde(default)]
    pub text_simple: String,
    #[serde(default)]
    pub page: u16,
    #[serde(default)]
    pub juz: u8,
}

impl Verse {
    /// Address of this verse.
    pub fn address(&self) -> VerseAddress {
        VerseAddress {
            surah: self.surah,
            ayah: self.ayah,
        }
    }

    /// `"surah:ayah"`.
    pub fn reference(&self) -> String {
        self.address().to_string()
    }
}

/// `(surah, ayah)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VerseAddress {
    pub surah: u16,
    pub ayah: u16,
}

impl fmt::Display for VerseAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.surah, self.ayah)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevelationType {
    Meccan,
    Medinan,
}

impl fmt::Display for RevelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevelationType::Meccan => write!(f, "Meccan"),
            RevelationType::Medinan => write!(f, "Medinan"),
        }
    }
}

/// Chapter metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    pub verses_count: u16,
    pub revelation_type: RevelationType,
}

/// A transmission lineage of the text.
///
/// `Hafs` is the primary riwaya: its verses carry page/juz metadata and every
/// other riwaya is indexed against its address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Riwaya {
    Hafs,
    Warsh,
    Qalun,
    Shuba,
    Duri,
    Susi,
    Bazzi,
    Qunbul,
}

impl Riwaya {
    pub const ALL: [Riwaya; 8] = [
        Riwaya::Hafs,
        Riwaya::Warsh,
        Riwaya::Qalun,
        Riwaya::Shuba,
        Riwaya::Duri,
        Riwaya::Susi,
        Riwaya::Bazzi,
        Riwaya::Qunbul,
    ];

    pub const PRIMARY: Riwaya = Riwaya::Hafs;

    pub fn id(self) -> &'static str {
        match self {
            Riwaya::Hafs => "hafs",
            Riwaya::Warsh => "warsh",
            Riwaya::Qalun => "qalun",
            Riwaya::Shuba => "shuba",
            Riwaya::Duri => "duri",
            Riwaya::Susi => "susi",
            Riwaya::Bazzi => "bazzi",
            Riwaya::Qunbul => "qunbul",
        }
    }

    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }
}

impl fmt::Display for Riwaya {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Riwaya {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Riwaya::ALL
            .into_iter()
            .find(|r| r.id() == lower)
            .ok_or_else(|| format!("unknown riwaya '{}'", s))
    }
}

/// Metadata shipped alongside a riwaya's rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiwayaMeta {
    pub id: Riwaya,
    pub name: String,
    #[serde(default)]
    pub name_arabic: String,
    #[serde(default)]
    pub reciter_name: String,
    #[serde(default)]
    pub reciter_name_arabic: String,
}

impl RiwayaMeta {
    /// Metadata for the primary riwaya, which has no metadata file of its own.
    pub fn primary() -> Self {
        Self {
            id: Riwaya::Hafs,
            name: "Hafs".to_string(),
            name_arabic: "حفص".to_string(),
            reciter_name: "Asim".to_string(),
            reciter_name_arabic: "عاصم".to_string(),
        }
    }
}

/// One row of a non-primary riwaya.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRow {
    pub id: u32,
    pub surah: u16,
    pub ayah: u16,
    pub text: String,
}

// =============================================================================
// RESULTS
// =============================================================================

/// How a text matched.
///
/// `Exact` means byte-identical to the canonical text; `Normalized` means equal
/// only after canonicalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Normalized,
    None,
}

impl MatchType {
    pub fn is_match(self) -> bool {
        self != MatchType::None
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchType::Exact => write!(f, "exact"),
            MatchType::Normalized => write!(f, "normalized"),
            MatchType::None => write!(f, "none"),
        }
    }
}

/// Another verse the input also matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub verse: Verse,
    pub reference: String,
}

impl From<&Verse> for Suggestion {
    fn from(verse: &Verse) -> Self {
        Self {
            reference: verse.reference(),
            verse: verse.clone(),
        }
    }
}

/// A hit in one riwaya.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantMatch {
    pub riwaya: Riwaya,
    pub match_type: MatchType,
    pub verse: Verse,
    /// The riwaya's own text for this address.
    pub variant_text: String,
}

/// Verdict of `validate` / `validate_against`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub match_type: MatchType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_verse: Option<Verse>,
    /// `"surah:ayah"` or, for cited ranges, `"surah:start-end"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_normalized: Option<String>,
    /// Character (not byte) index of the first divergence between
    /// `normalized_input` and `expected_normalized`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatch_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_matches: Option<Vec<VariantMatch>>,
}

impl ValidationResult {
    /// A non-match carrying nothing but (optionally) the normalized input.
    pub fn none(normalized_input: Option<String>) -> Self {
        Self {
            is_valid: false,
            match_type: MatchType::None,
            matched_verse: None,
            reference: None,
            normalized_input,
            expected_normalized: None,
            mismatch_index: None,
            suggestions: Vec::new(),
            variant_matches: None,
        }
    }

    /// A match of `match_type` against `verse`, cited as `reference`.
    pub fn matched(match_type: MatchType, verse: Verse, reference: String) -> Self {
        Self {
            is_valid: match_type.is_match(),
            match_type,
            matched_verse: Some(verse),
            reference: Some(reference),
            normalized_input: None,
            expected_normalized: None,
            mismatch_index: None,
            suggestions: Vec::new(),
            variant_matches: None,
        }
    }
}

/// A contiguous range of verses joined into one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRange {
    /// Verse texts joined by single spaces.
    pub text: String,
    pub verses: Vec<Verse>,
}

/// One word of a fabrication analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordVerdict {
    pub word: String,
    pub is_fabricated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricationStats {
    pub total_words: usize,
    pub fabricated_words: usize,
    pub fabricated_ratio: f64,
}

impl FabricationStats {
    pub fn from_words(words: &[WordVerdict]) -> Self {
        let total_words = words.len();
        let fabricated_words = words.iter().filter(|w| w.is_fabricated).count();
        let fabricated_ratio = if total_words == 0 {
            0.0
        } else {
            fabricated_words as f64 / total_words as f64
        };
        Self {
            total_words,
            fabricated_words,
            fabricated_ratio,
        }
    }
}

/// Word-level verdict on invented content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricationAnalysis {
    pub normalized_input: String,
    pub words: Vec<WordVerdict>,
    pub stats: FabricationStats,
}

/// A `search` hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub verse: Verse,
    /// Relevance in `(0, 1]`.
    pub similarity: f64,
}
