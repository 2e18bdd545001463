// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reference data: loading and structural checks.
//!
//! A `Corpus` is the raw material the index is built from: the primary verse
//! list, surah metadata, and zero or more additional riwayat. It is loaded
//! once and handed to `Validator::new`; nothing here is consulted per query.
//!
//! A missing or corrupt data file is fatal. The engine cannot do anything
//! useful without its corpus, so `load` fails loudly instead of degrading.
//!
//! # Checks
//!
//! | Check                        | Partial | Complete |
//! |------------------------------|---------|----------|
//! | non-empty                    | ✓       | ✓        |
//! | unique verse ids             | ✓       | ✓        |
//! | unique addresses per riwaya  | ✓       | ✓        |
//! | surah in 1..=114, ayah ≥ 1   | ✓       | ✓        |
//! | verse's surah has metadata   | ✓       | ✓        |
//! | `verses_count` matches       |         | ✓        |
//! | 6236 verses, 114 surahs      |         | ✓        |

mod error;
pub mod manifest;

pub use error::{CorpusError, Result};
pub use manifest::{DataManifest, RiwayaEntry, MANIFEST_FILE, MANIFEST_VERSION};

use crate::types::{Riwaya, RiwayaMeta, Surah, VariantRow, Verse, SURAH_COUNT, VERSE_COUNT};
use manifest::read_json;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Rows of one non-primary riwaya.
#[derive(Debug, Clone)]
pub struct RiwayaData {
    pub meta: RiwayaMeta,
    pub rows: Vec<VariantRow>,
}

/// Everything read from a data directory.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub verses: Vec<Verse>,
    pub surahs: Vec<Surah>,
    /// Additional riwayat, in the order they were requested.
    pub riwayat: Vec<RiwayaData>,
}

impl Corpus {
    /// Load the primary text plus the requested riwayat from `dir`.
    ///
    /// `Riwaya::Hafs` in `riwayat` is accepted and ignored (it is always
    /// loaded). With `allow_partial` the completeness checks are skipped,
    /// which is what test fixtures and single-surah data sets need.
    pub fn load(dir: &Path, riwayat: &[Riwaya], allow_partial: bool) -> Result<Self> {
        let started = Instant::now();
        let manifest = DataManifest::load(dir)?;

        let verses: Vec<Verse> = read_json(&dir.join(&manifest.verses))?;
        let surahs: Vec<Surah> = read_json(&dir.join(&manifest.surahs))?;

        let mut loaded = Vec::new();
        for &riwaya in riwayat.iter().filter(|r| !r.is_primary()) {
            if loaded.iter().any(|d: &RiwayaData| d.meta.id == riwaya) {
                continue;
            }
            let entry = manifest
                .riwayat
                .iter()
                .find(|e| e.meta.id == riwaya)
                .ok_or(CorpusError::RiwayaNotInManifest(riwaya))?;
            let rows: Vec<VariantRow> = read_json(&dir.join(&entry.verses))?;
            debug!(riwaya = %riwaya, rows = rows.len(), "loaded riwaya");
            loaded.push(RiwayaData {
                meta: entry.meta.clone(),
                rows,
            });
        }

        let corpus = Corpus {
            verses,
            surahs,
            riwayat: loaded,
        };
        corpus.check(allow_partial)?;

        info!(
            dir = %dir.display(),
            verses = corpus.verses.len(),
            surahs = corpus.surahs.len(),
            riwayat = corpus.riwayat.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "corpus loaded"
        );
        Ok(corpus)
    }

    /// Structural checks; see the module docs for which apply when.
    pub fn check(&self, allow_partial: bool) -> Result<()> {
        if self.verses.is_empty() {
            return Err(CorpusError::Empty);
        }

        for surah in &self.surahs {
            check_surah_number(surah.number)?;
        }
        let declared: HashMap<u16, u16> = self
            .surahs
            .iter()
            .map(|s| (s.number, s.verses_count))
            .collect();

        let mut ids = HashSet::with_capacity(self.verses.len());
        let mut addresses = HashSet::with_capacity(self.verses.len());
        let mut per_surah: HashMap<u16, usize> = HashMap::new();
        for verse in &self.verses {
            check_surah_number(verse.surah)?;
            if verse.ayah == 0 {
                return Err(CorpusError::InvalidAyah {
                    surah: verse.surah,
                    id: verse.id,
                });
            }
            if !declared.contains_key(&verse.surah) {
                return Err(CorpusError::MissingSurah {
                    surah: verse.surah,
                    ayah: verse.ayah,
                });
            }
            if !ids.insert(verse.id) {
                return Err(CorpusError::DuplicateVerseId { id: verse.id });
            }
            if !addresses.insert(verse.address()) {
                return Err(CorpusError::DuplicateAddress {
                    riwaya: Riwaya::PRIMARY,
                    surah: verse.surah,
                    ayah: verse.ayah,
                });
            }
            *per_surah.entry(verse.surah).or_default() += 1;
        }

        for data in &self.riwayat {
            if data.meta.id.is_primary() {
                return Err(CorpusError::PrimaryListedAsVariant(data.meta.id));
            }
            let mut seen = HashSet::with_capacity(data.rows.len());
            for row in &data.rows {
                check_surah_number(row.surah)?;
                if row.ayah == 0 {
                    return Err(CorpusError::InvalidAyah {
                        surah: row.surah,
                        id: row.id,
                    });
                }
                if !seen.insert((row.surah, row.ayah)) {
                    return Err(CorpusError::DuplicateAddress {
                        riwaya: data.meta.id,
                        surah: row.surah,
                        ayah: row.ayah,
                    });
                }
            }
        }

        if allow_partial {
            return Ok(());
        }

        if self.verses.len() != VERSE_COUNT || self.surahs.len() != SURAH_COUNT as usize {
            return Err(CorpusError::IncompleteCorpus {
                verses: self.verses.len(),
                surahs: self.surahs.len(),
            });
        }
        for surah in &self.surahs {
            let actual = per_surah.get(&surah.number).copied().unwrap_or(0);
            if actual != surah.verses_count as usize {
                return Err(CorpusError::VerseCountMismatch {
                    surah: surah.number,
                    declared: surah.verses_count,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Metadata of every riwaya in this corpus, primary first.
    pub fn riwaya_metas(&self) -> Vec<RiwayaMeta> {
        std::iter::once(RiwayaMeta::primary())
            .chain(self.riwayat.iter().map(|d| d.meta.clone()))
            .collect()
    }
}

fn check_surah_number(surah: u16) -> Result<()> {
    if surah == 0 || surah > SURAH_COUNT {
        return Err(CorpusError::SurahOutOfRange { surah });
    }
    Ok(())
}
