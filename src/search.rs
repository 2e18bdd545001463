// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Containment search over the primary text.
//!
//! Two tiers, like exact-then-fuzzy in a search engine:
//!
//! | Tier        | Hit when                                  | Similarity                        |
//! |-------------|-------------------------------------------|-----------------------------------|
//! | containment | normalized verse contains the query       | query chars / verse chars         |
//! | word        | (no containment hit) verse shares a word  | 0.5 × shared words / query words  |
//!
//! The word tier only runs when the containment tier is empty, and its scale
//! keeps it below any containment score. Ties break on verse id.

use crate::index::CorpusIndex;
use crate::normalize::{contains_arabic, normalize, NormalizeOptions};
use crate::types::SearchHit;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Weight of a word-overlap hit relative to a containment hit.
const WORD_TIER_SCALE: f64 = 0.5;

/// Up to `limit` primary verses most similar to `query`.
pub fn search(index: &CorpusIndex, query: &str, limit: usize) -> Vec<SearchHit> {
    if limit == 0 || !contains_arabic(query) {
        return Vec::new();
    }
    let query = normalize(query, &NormalizeOptions::aggressive());
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits = containment_hits(index, &query);
    if hits.is_empty() {
        hits = word_hits(index, &query);
    }

    hits.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
            .then(a.verse.id.cmp(&b.verse.id))
    });
    hits.truncate(limit);
    hits
}

fn containment_hits(index: &CorpusIndex, query: &str) -> Vec<SearchHit> {
    let query_chars = query.chars().count() as f64;
    index
        .rows_containing(query)
        .into_iter()
        .map(|id| index.row(id))
        .filter(|row| row.riwaya.is_primary())
        .map(|row| SearchHit {
            verse: row.verse.clone(),
            similarity: query_chars / row.normalized.chars().count() as f64,
        })
        .collect()
}

fn word_hits(index: &CorpusIndex, query: &str) -> Vec<SearchHit> {
    let query_words: HashSet<&str> = query.split(' ').collect();
    let total = query_words.len() as f64;
    index
        .primary_rows()
        .filter_map(|row| {
            let verse_words: HashSet<&str> = row.normalized.split(' ').collect();
            let shared = query_words.intersection(&verse_words).count();
            (shared > 0).then(|| SearchHit {
                verse: row.verse.clone(),
                similarity: WORD_TIER_SCALE * shared as f64 / total,
            })
        })
        .collect()
}
