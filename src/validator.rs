// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Classifying a quotation against the corpus.
//!
//! # Verdicts
//!
//! | Verdict      | Meaning                                                   |
//! |--------------|-----------------------------------------------------------|
//! | `Exact`      | trimmed input is byte-identical to a row's text           |
//! | `Normalized` | equal to a row's text once both are aggressively normalized |
//! | `None`       | neither; includes all non-Arabic input                    |
//!
//! `validate` searches the whole corpus; `validate_against` only checks the
//! citation it is given. Neither panics or returns an error: a bad citation
//! or a miss is a `None` verdict.
//!
//! # Riwayat
//!
//! There is a single matching routine. The index holds exactly the active
//! riwayat, primary first, so the same lookup serves one riwaya or eight;
//! the only difference with more than one active is that every hit is also
//! reported in `variant_matches`.
//!
//! ```text
//! exact hits (arena order) ─┐
//!                           ├─ dedup (riwaya, address), Exact wins ─→ hits
//! normalized hits ──────────┘
//!
//! hits[0]        → match_type, matched_verse, reference
//! other addresses→ suggestions (≤ max_suggestions)
//! all hits       → variant_matches (multi-riwaya only)
//! ```

use crate::config::ValidatorConfig;
use crate::corpus::{Corpus, CorpusError, Result};
use crate::fabrication;
use crate::index::{CorpusIndex, RowId};
use crate::normalize::{contains_arabic, normalize, NormalizeOptions};
use crate::reference::VerseRef;
use crate::search;
use crate::types::{
    FabricationAnalysis, MatchType, Riwaya, RiwayaMeta, SearchHit, Suggestion, Surah,
    ValidationResult, VariantMatch, Verse, VerseAddress, VerseRange,
};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Verifies quotations against an indexed corpus.
///
/// Cheap to clone: clones share one index.
#[derive(Debug, Clone)]
pub struct Validator {
    index: Arc<CorpusIndex>,
    config: ValidatorConfig,
}

/// One row that matched, before it is turned into result fields.
#[derive(Debug, Clone, Copy)]
struct Hit {
    row: RowId,
    match_type: MatchType,
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl Validator {
    /// Index `corpus` for the riwayat named in `config`.
    ///
    /// Riwayat present in `corpus` but not requested are left out of the
    /// index. A requested riwaya the corpus does not carry is an error.
    pub fn new(mut corpus: Corpus, config: ValidatorConfig) -> Result<Self> {
        corpus.check(config.allow_partial)?;

        let active = config.active_riwayat();
        for &riwaya in active.iter().skip(1) {
            if !corpus.riwayat.iter().any(|d| d.meta.id == riwaya) {
                return Err(CorpusError::RiwayaNotLoaded(riwaya));
            }
        }
        corpus.riwayat.retain(|d| active.contains(&d.meta.id));
        corpus
            .riwayat
            .sort_by_key(|d| active.iter().position(|&r| r == d.meta.id));

        Ok(Self {
            index: Arc::new(CorpusIndex::build(corpus)),
            config,
        })
    }

    /// Load the riwayat named in `config` from a data directory and index them.
    pub fn from_data_dir(dir: &Path, config: ValidatorConfig) -> Result<Self> {
        let corpus = Corpus::load(dir, &config.riwayat, config.allow_partial)?;
        Self::new(corpus, config)
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

impl Validator {
    /// Find `text` anywhere in the corpus.
    pub fn validate(&self, text: &str) -> ValidationResult {
        let trimmed = text.trim();
        let normalized_input = normalize(trimmed, &self.config.display);

        if !contains_arabic(trimmed) {
            debug!(verdict = %MatchType::None, "validate: no arabic characters");
            return ValidationResult::none(Some(normalized_input));
        }

        let lookup_key = normalize(trimmed, &NormalizeOptions::aggressive());
        let hits = self.collect_hits(trimmed, &lookup_key);

        let Some(first) = hits.first() else {
            debug!(verdict = %MatchType::None, "validate");
            return ValidationResult::none(Some(normalized_input));
        };

        let verse = &self.index.row(first.row).verse;
        let mut result =
            ValidationResult::matched(first.match_type, verse.clone(), verse.reference());
        result.normalized_input = Some(normalized_input);
        if self.index.is_multi_riwaya() {
            result.suggestions = self.suggestions(verse.address(), &hits);
            result.variant_matches = Some(self.variant_matches(&hits));
        } else if first.match_type == MatchType::Normalized {
            // A lone exact hit is the whole answer.
            result.suggestions = self.suggestions(verse.address(), &hits);
        }

        debug!(
            verdict = %result.match_type,
            reference = %verse.reference(),
            hits = hits.len(),
            "validate"
        );
        result
    }

    /// Check `text` against the verse or range `reference` cites.
    pub fn validate_against(&self, text: &str, reference: &str) -> ValidationResult {
        let Some(cited) = VerseRef::parse(reference) else {
            debug!(reference, "validate_against: malformed reference");
            return ValidationResult::none(None);
        };
        let Some(expected) = self.get_verse_range(cited.surah, cited.start, cited.end) else {
            debug!(reference, "validate_against: reference not in corpus");
            return ValidationResult::none(None);
        };

        let aggressive = NormalizeOptions::aggressive();
        let trimmed = text.trim();
        let input_key = normalize(trimmed, &aggressive);
        let expected_key = normalize(&expected.text, &aggressive);

        let primary_verdict = verdict(trimmed, &input_key, &expected.text, &expected_key);
        let first_verse = expected.verses[0].clone();

        let mut result = if primary_verdict.is_match() {
            ValidationResult::matched(primary_verdict, first_verse, cited.to_string())
        } else {
            let variant_matches = self.cited_variant_matches(&cited, &first_verse, trimmed, &input_key);
            match variant_matches.first().map(|m| m.match_type) {
                Some(match_type) => {
                    let mut result =
                        ValidationResult::matched(match_type, first_verse, cited.to_string());
                    result.variant_matches = Some(variant_matches);
                    result
                }
                None => {
                    let mut result = ValidationResult::none(None);
                    result.mismatch_index = first_divergence(&input_key, &expected_key);
                    result
                }
            }
        };
        result.normalized_input = Some(input_key);
        result.expected_normalized = Some(expected_key);

        debug!(
            verdict = %result.match_type,
            reference = %cited,
            mismatch_index = ?result.mismatch_index,
            "validate_against"
        );
        result
    }

    /// Word-level fabrication analysis against the flattened corpus.
    pub fn analyze_fabrication(&self, text: &str) -> FabricationAnalysis {
        let analysis = fabrication::analyze(text, self.index.flattened());
        debug!(
            words = analysis.stats.total_words,
            fabricated = analysis.stats.fabricated_words,
            "analyze_fabrication"
        );
        analysis
    }

    /// Exact and normalized hits over every active riwaya, Exact first,
    /// one per (riwaya, address).
    fn collect_hits(&self, trimmed: &str, lookup_key: &str) -> Vec<Hit> {
        let exact = self
            .index
            .exact_hits(trimmed)
            .iter()
            .map(|&row| Hit {
                row,
                match_type: MatchType::Exact,
            });
        let normalized = self
            .index
            .normalized_hits(lookup_key)
            .iter()
            .map(|&row| Hit {
                row,
                match_type: MatchType::Normalized,
            });

        let mut seen: HashSet<(Riwaya, VerseAddress)> = HashSet::new();
        exact
            .chain(normalized)
            .filter(|hit| {
                let row = self.index.row(hit.row);
                seen.insert((row.riwaya, row.address()))
            })
            .collect()
    }

    /// Distinct addresses among `hits` other than `matched`, in hit order.
    fn suggestions(&self, matched: VerseAddress, hits: &[Hit]) -> Vec<Suggestion> {
        let mut seen = HashSet::from([matched]);
        hits.iter()
            .map(|hit| &self.index.row(hit.row).verse)
            .filter(|verse| seen.insert(verse.address()))
            .take(self.config.max_suggestions)
            .map(Suggestion::from)
            .collect()
    }

    fn variant_matches(&self, hits: &[Hit]) -> Vec<VariantMatch> {
        hits.iter()
            .map(|hit| {
                let row = self.index.row(hit.row);
                VariantMatch {
                    riwaya: row.riwaya,
                    match_type: hit.match_type,
                    verse: row.verse.clone(),
                    variant_text: row.text.clone(),
                }
            })
            .collect()
    }

    /// Each non-primary riwaya's own text for the cited address, checked
    /// against the input. Exact matches first.
    fn cited_variant_matches(
        &self,
        cited: &VerseRef,
        verse: &Verse,
        trimmed: &str,
        input_key: &str,
    ) -> Vec<VariantMatch> {
        let aggressive = NormalizeOptions::aggressive();
        let mut matches: Vec<VariantMatch> = self
            .index
            .riwayat()
            .iter()
            .skip(1)
            .filter_map(|meta| {
                let text = self.variant_text(meta.id, cited)?;
                let key = normalize(&text, &aggressive);
                let match_type = verdict(trimmed, input_key, &text, &key);
                match_type.is_match().then(|| VariantMatch {
                    riwaya: meta.id,
                    match_type,
                    verse: verse.clone(),
                    variant_text: text,
                })
            })
            .collect();
        matches.sort_by_key(|m| m.match_type);
        matches
    }

    /// A riwaya's text for a citation. Addresses the riwaya does not list
    /// fall back to the primary text.
    fn variant_text(&self, riwaya: Riwaya, cited: &VerseRef) -> Option<String> {
        let mut listed_any = false;
        let mut parts = Vec::with_capacity(usize::from(cited.end - cited.start) + 1);
        for address in cited.addresses() {
            match self.index.variant_row(riwaya, address) {
                Some(row) => {
                    listed_any = true;
                    parts.push(row.text.as_str());
                }
                None => parts.push(self.index.primary_row(address)?.text.as_str()),
            }
        }
        listed_any.then(|| parts.join(" "))
    }
}

/// Exact, Normalized, or None for one candidate text.
fn verdict(trimmed: &str, input_key: &str, expected: &str, expected_key: &str) -> MatchType {
    if trimmed == expected {
        MatchType::Exact
    } else if input_key == expected_key {
        MatchType::Normalized
    } else {
        MatchType::None
    }
}

/// Character index of the first difference; the shorter length if one is a
/// prefix of the other; `None` if equal.
pub fn first_divergence(a: &str, b: &str) -> Option<usize> {
    let mut a = a.chars();
    let mut b = b.chars();
    let mut index = 0;
    loop {
        match (a.next(), b.next()) {
            (None, None) => return None,
            (Some(x), Some(y)) if x == y => index += 1,
            _ => return Some(index),
        }
    }
}

// =============================================================================
// ACCESSORS
// =============================================================================

impl Validator {
    /// Primary verse at `surah:ayah`.
    pub fn get_verse(&self, surah: u16, ayah: u16) -> Option<&Verse> {
        self.index.verse(surah, ayah)
    }

    /// Verses `start..=end` of `surah`, texts joined by single spaces.
    /// `None` if the range is empty or any verse in it is missing.
    pub fn get_verse_range(&self, surah: u16, start: u16, end: u16) -> Option<VerseRange> {
        if start == 0 || start > end {
            return None;
        }
        let verses: Vec<Verse> = (start..=end)
            .map(|ayah| self.index.verse(surah, ayah).cloned())
            .collect::<Option<_>>()?;
        let text = verses
            .iter()
            .map(|v| v.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Some(VerseRange { text, verses })
    }

    pub fn get_surah(&self, number: u16) -> Option<&Surah> {
        self.index.surah(number)
    }

    pub fn surahs(&self) -> &[Surah] {
        self.index.surahs()
    }

    /// Active riwayat, primary first.
    pub fn riwayat(&self) -> &[RiwayaMeta] {
        self.index.riwayat()
    }

    /// Number of primary verses loaded.
    pub fn verse_count(&self) -> usize {
        self.index.verse_count()
    }

    /// Primary verses most similar to `query`; see `search`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        search::search(&self.index, query, limit)
    }
}
