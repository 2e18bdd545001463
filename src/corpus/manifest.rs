// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `manifest.json`: what a data directory contains.
//!
//! Paths are relative to the directory holding the manifest.

use super::error::{CorpusError, Result};
use crate::types::RiwayaMeta;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const MANIFEST_FILE: &str = "manifest.json";
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DataManifest {
    pub version: u32,
    /// Primary verse array.
    pub verses: String,
    /// Surah metadata array.
    pub surahs: String,
    /// Additional riwayat available in this directory.
    #[serde(default)]
    pub riwayat: Vec<RiwayaEntry>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RiwayaEntry {
    pub meta: RiwayaMeta,
    /// `{id, surah, ayah, text}` row array.
    pub verses: String,
}

impl DataManifest {
    pub fn load(dir: &Path) -> Result<Self> {
        let manifest: DataManifest = read_json(&dir.join(MANIFEST_FILE))?;
        if manifest.version != MANIFEST_VERSION {
            return Err(CorpusError::UnsupportedManifestVersion {
                found: manifest.version,
                expected: MANIFEST_VERSION,
            });
        }
        Ok(manifest)
    }
}

/// Read and deserialize a JSON file, attaching the path to any failure.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CorpusError::Json {
        path: path.to_path_buf(),
        source,
    })
}
