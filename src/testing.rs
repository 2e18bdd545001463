// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. The fixture
//! corpus is embedded at compile time so unit tests never touch the disk;
//! `FIXTURE_DIR` points at the same files for tests that exercise loading.

#![doc(hidden)]

use crate::config::ValidatorConfig;
use crate::corpus::{Corpus, DataManifest, RiwayaData};
use crate::types::{RevelationType, Riwaya, Surah, VariantRow, Verse};
use crate::validator::Validator;

/// On-disk copy of the fixture corpus (surahs 1, 27, 55, 112-114 plus Warsh
/// rows for surahs 1 and 112).
pub const FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/fixtures/corpus");

const MANIFEST_JSON: &str = include_str!("../data/fixtures/corpus/manifest.json");
const QURAN_JSON: &str = include_str!("../data/fixtures/corpus/quran.json");
const SURAHS_JSON: &str = include_str!("../data/fixtures/corpus/surahs.json");
const WARSH_JSON: &str = include_str!("../data/fixtures/corpus/riwayat/warsh.json");

/// Create a verse with no page/juz metadata.
pub fn make_verse(id: u32, surah: u16, ayah: u16, text: &str) -> Verse {
    Verse {
        id,
        surah,
        ayah,
        text: text.to_string(),
        text_simple: String::new(),
        page: 0,
        juz: 0,
    }
}

pub fn make_surah(number: u16, verses_count: u16) -> Surah {
    Surah {
        number,
        name: format!("سورة {}", number),
        english_name: format!("Surah {}", number),
        verses_count,
        revelation_type: RevelationType::Meccan,
    }
}

/// The fixture corpus with every riwaya it ships.
pub fn fixture_corpus() -> Corpus {
    let manifest: DataManifest =
        serde_json::from_str(MANIFEST_JSON).expect("fixture manifest parses");
    let verses: Vec<Verse> = serde_json::from_str(QURAN_JSON).expect("fixture verses parse");
    let surahs: Vec<Surah> = serde_json::from_str(SURAHS_JSON).expect("fixture surahs parse");
    let warsh: Vec<VariantRow> = serde_json::from_str(WARSH_JSON).expect("fixture rows parse");

    let meta = manifest
        .riwayat
        .into_iter()
        .find(|e| e.meta.id == Riwaya::Warsh)
        .expect("fixture manifest lists warsh")
        .meta;

    Corpus {
        verses,
        surahs,
        riwayat: vec![RiwayaData { meta, rows: warsh }],
    }
}

/// Config for the fixture: partial loading, the given riwayat.
pub fn fixture_config(riwayat: &[Riwaya]) -> ValidatorConfig {
    ValidatorConfig {
        riwayat: riwayat.to_vec(),
        allow_partial: true,
        ..ValidatorConfig::default()
    }
}

/// Validator over the primary fixture text only.
pub fn fixture_validator() -> Validator {
    fixture_validator_with(&[Riwaya::Hafs])
}

/// Validator over the fixture with the given riwayat active.
pub fn fixture_validator_with(riwayat: &[Riwaya]) -> Validator {
    Validator::new(fixture_corpus(), fixture_config(riwayat)).expect("fixture corpus is valid")
}
