// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction-time failures.
//!
//! These are the only errors the engine produces. A query that finds nothing
//! is a `MatchType::None` result, and a bad citation is `None`; neither ever
//! reaches this type.

use crate::types::Riwaya;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported manifest version {found} (expected {expected})")]
    UnsupportedManifestVersion { found: u32, expected: u32 },

    #[error("riwaya '{0}' is requested but not listed in the data manifest")]
    RiwayaNotInManifest(Riwaya),

    #[error("riwaya '{0}' is requested but not present in the corpus")]
    RiwayaNotLoaded(Riwaya),

    #[error("riwaya '{0}' is the primary text and cannot be listed as a variant")]
    PrimaryListedAsVariant(Riwaya),

    #[error("corpus contains no verses")]
    Empty,

    #[error("duplicate verse id {id}")]
    DuplicateVerseId { id: u32 },

    #[error("duplicate address {surah}:{ayah} in {riwaya}")]
    DuplicateAddress { riwaya: Riwaya, surah: u16, ayah: u16 },

    #[error("surah number {surah} out of range 1..=114")]
    SurahOutOfRange { surah: u16 },

    #[error("ayah 0 at surah {surah} (id {id})")]
    InvalidAyah { surah: u16, id: u32 },

    #[error("verse {surah}:{ayah} references a surah with no metadata")]
    MissingSurah { surah: u16, ayah: u16 },

    #[error("surah {surah} declares {declared} verses but {actual} are loaded")]
    VerseCountMismatch {
        surah: u16,
        declared: u16,
        actual: usize,
    },

    #[error("incomplete corpus: {verses} verses across {surahs} surahs (expected 6236 across 114)")]
    IncompleteCorpus { verses: usize, surahs: usize },
}

pub type Result<T> = std::result::Result<T, CorpusError>;
