// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The read-only lookup structure every query runs against.
//!
//! # Layout
//!
//! ```text
//!  rows (arena)                       exact map           normalized map
//!  ┌────┬───────┬──────┬─────────┐    text → [row]        key → [row]
//!  │  0 │ hafs  │ 1:1  │ بسم ... │
//!  │  1 │ hafs  │ 1:2  │ الحمد...│    flattened corpus
//!  │ .. │       │      │         │    "بسم الله ... الحمد لله ... ملك يوم الدين ..."
//!  │  n │ warsh │ 1:4  │ ملك ... │    └── SubstringIndex (suffix array)
//!  └────┴───────┴──────┴─────────┘
//! ```
//!
//! Primary rows come first in corpus order, then each additional riwaya in
//! load order. Both maps list row ids in that arena order, which is what
//! makes "the primary wins" and "first occurrence wins" fall out of a plain
//! iteration.
//!
//! A variant row borrows the metadata (id, page, juz) of the primary verse at
//! the same address. If the primary has no such address the verse is
//! synthesized from the row with page and juz 0.
//!
//! Built once by `CorpusIndex::build`; there is no mutation API.

pub mod sais;
pub mod substring;

use crate::corpus::Corpus;
use crate::normalize::{normalize, NormalizeOptions};
use crate::types::{Riwaya, RiwayaMeta, Surah, Verse, VerseAddress};
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;
use substring::SubstringIndex;
use tracing::{info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Position of a row in the arena.
pub type RowId = usize;

/// One text of one verse in one riwaya.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRow {
    pub verse: Verse,
    pub riwaya: Riwaya,
    /// The row's own text: `verse.text` for the primary, the variant
    /// spelling otherwise.
    pub text: String,
    /// `text` under `NormalizeOptions::aggressive()`.
    pub normalized: String,
}

impl IndexedRow {
    pub fn address(&self) -> VerseAddress {
        self.verse.address()
    }
}

#[derive(Debug)]
pub struct CorpusIndex {
    rows: Vec<IndexedRow>,
    exact_text_map: HashMap<String, Vec<RowId>>,
    normalized_text_map: HashMap<String, Vec<RowId>>,
    /// Primary rows by address.
    primary: BTreeMap<VerseAddress, RowId>,
    /// Non-primary rows by riwaya and address.
    variants: HashMap<(Riwaya, VerseAddress), RowId>,
    surahs: Vec<Surah>,
    riwayat: Vec<RiwayaMeta>,
    flattened: SubstringIndex,
    /// Byte offset of each non-empty row within `flattened`, ascending.
    row_starts: Vec<(usize, RowId)>,
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl CorpusIndex {
    /// Index every verse of `corpus` and every row of its riwayat.
    pub fn build(corpus: Corpus) -> Self {
        let started = Instant::now();
        let riwayat = corpus.riwaya_metas();

        let mut pending: Vec<(Verse, Riwaya, String)> = corpus
            .verses
            .iter()
            .map(|v| (v.clone(), Riwaya::PRIMARY, v.text.clone()))
            .collect();

        let by_address: HashMap<VerseAddress, &Verse> =
            corpus.verses.iter().map(|v| (v.address(), v)).collect();
        for data in &corpus.riwayat {
            for row in &data.rows {
                let address = VerseAddress {
                    surah: row.surah,
                    ayah: row.ayah,
                };
                let verse = match by_address.get(&address) {
                    Some(primary) => (*primary).clone(),
                    None => {
                        warn!(
                            riwaya = %data.meta.id,
                            address = %address,
                            "riwaya row has no primary counterpart"
                        );
                        Verse {
                            id: row.id,
                            surah: row.surah,
                            ayah: row.ayah,
                            text: row.text.clone(),
                            text_simple: String::new(),
                            page: 0,
                            juz: 0,
                        }
                    }
                };
                pending.push((verse, data.meta.id, row.text.clone()));
            }
        }

        let rows = normalize_rows(pending);

        let exact_text_map = build_text_map(&rows, |row| row.text.as_str());
        let normalized_text_map = build_text_map(&rows, |row| row.normalized.as_str());

        let mut primary = BTreeMap::new();
        let mut variants = HashMap::new();
        for (id, row) in rows.iter().enumerate() {
            if row.riwaya.is_primary() {
                primary.insert(row.address(), id);
            } else {
                variants.insert((row.riwaya, row.address()), id);
            }
        }

        let (flat, row_starts) = flatten(&rows);
        let flattened = SubstringIndex::new(flat);

        let mut surahs = corpus.surahs;
        surahs.sort_by_key(|s| s.number);

        info!(
            rows = rows.len(),
            riwayat = riwayat.len(),
            exact_keys = exact_text_map.len(),
            normalized_keys = normalized_text_map.len(),
            flattened_bytes = flattened.text().len(),
            suffixes = flattened.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "index built"
        );

        Self {
            rows,
            exact_text_map,
            normalized_text_map,
            primary,
            variants,
            surahs,
            riwayat,
            flattened,
            row_starts,
        }
    }
}

/// Normalize each row's text. Rows are independent, so this is the part of
/// the build that parallelizes.
fn normalize_rows(pending: Vec<(Verse, Riwaya, String)>) -> Vec<IndexedRow> {
    let options = NormalizeOptions::aggressive();
    let make = |(verse, riwaya, text): (Verse, Riwaya, String)| {
        let normalized = normalize(&text, &options);
        IndexedRow {
            verse,
            riwaya,
            text,
            normalized,
        }
    };

    #[cfg(feature = "parallel")]
    {
        pending.into_par_iter().map(make).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        pending.into_iter().map(make).collect()
    }
}

/// Group row ids by a text key. Ids within a key keep arena order.
pub fn build_text_map<'a, F>(rows: &'a [IndexedRow], key: F) -> HashMap<String, Vec<RowId>>
where
    F: Fn(&'a IndexedRow) -> &'a str,
{
    let mut map: HashMap<String, Vec<RowId>> = HashMap::with_capacity(rows.len());
    for (id, row) in rows.iter().enumerate() {
        map.entry(key(row).to_string()).or_default().push(id);
    }
    map
}

/// Every non-empty normalized row text, joined by single spaces, plus where
/// each row starts.
fn flatten(rows: &[IndexedRow]) -> (String, Vec<(usize, RowId)>) {
    let mut flat = String::with_capacity(rows.iter().map(|r| r.normalized.len() + 1).sum());
    let mut starts = Vec::with_capacity(rows.len());
    for (id, row) in rows.iter().enumerate() {
        if row.normalized.is_empty() {
            continue;
        }
        if !flat.is_empty() {
            flat.push(' ');
        }
        starts.push((flat.len(), id));
        flat.push_str(&row.normalized);
    }
    (flat, starts)
}

// =============================================================================
// QUERIES
// =============================================================================

impl CorpusIndex {
    pub fn row(&self, id: RowId) -> &IndexedRow {
        &self.rows[id]
    }

    pub fn rows(&self) -> &[IndexedRow] {
        &self.rows
    }

    /// Rows whose text is byte-identical to `text`.
    pub fn exact_hits(&self, text: &str) -> &[RowId] {
        self.exact_text_map.get(text).map_or(&[], Vec::as_slice)
    }

    /// Rows whose normalized text equals `key`.
    pub fn normalized_hits(&self, key: &str) -> &[RowId] {
        self.normalized_text_map.get(key).map_or(&[], Vec::as_slice)
    }

    /// Primary verse at `surah:ayah`.
    pub fn verse(&self, surah: u16, ayah: u16) -> Option<&Verse> {
        self.primary_row(VerseAddress { surah, ayah })
            .map(|row| &row.verse)
    }

    pub fn primary_row(&self, address: VerseAddress) -> Option<&IndexedRow> {
        self.primary.get(&address).map(|&id| &self.rows[id])
    }

    /// A non-primary riwaya's row at `address`.
    pub fn variant_row(&self, riwaya: Riwaya, address: VerseAddress) -> Option<&IndexedRow> {
        self.variants
            .get(&(riwaya, address))
            .map(|&id| &self.rows[id])
    }

    /// Primary rows in address order.
    pub fn primary_rows(&self) -> impl Iterator<Item = &IndexedRow> + '_ {
        self.primary.values().map(move |&id| &self.rows[id])
    }

    pub fn surah(&self, number: u16) -> Option<&Surah> {
        self.surahs
            .binary_search_by_key(&number, |s| s.number)
            .ok()
            .map(|i| &self.surahs[i])
    }

    /// All surahs, ordered by number.
    pub fn surahs(&self) -> &[Surah] {
        &self.surahs
    }

    /// Indexed riwayat, primary first.
    pub fn riwayat(&self) -> &[RiwayaMeta] {
        &self.riwayat
    }

    pub fn is_multi_riwaya(&self) -> bool {
        self.riwayat.len() > 1
    }

    /// Number of primary verses.
    pub fn verse_count(&self) -> usize {
        self.primary.len()
    }

    /// The flattened normalized corpus.
    pub fn flattened(&self) -> &SubstringIndex {
        &self.flattened
    }

    /// Rows whose normalized text contains `needle`, in arena order.
    /// Occurrences that straddle two rows do not count.
    pub fn rows_containing(&self, needle: &str) -> Vec<RowId> {
        if needle.is_empty() {
            return Vec::new();
        }
        let mut ids: Vec<RowId> = self
            .flattened
            .positions(needle)
            .into_iter()
            .filter_map(|pos| {
                let slot = self
                    .row_starts
                    .partition_point(|&(start, _)| start <= pos)
                    .checked_sub(1)?;
                let (start, id) = self.row_starts[slot];
                let end = start + self.rows[id].normalized.len();
                (pos + needle.len() <= end).then_some(id)
            })
            .collect();
        ids.dedup();
        ids
    }
}
