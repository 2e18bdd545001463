// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validator configuration.
//!
//! Every field has a default, so `{}` is a valid config file:
//!
//! ```json
//! {
//!   "riwayat": ["hafs", "warsh"],
//!   "maxSuggestions": 3,
//!   "display": { "removeDiacritics": false },
//!   "allowPartial": false
//! }
//! ```

use crate::corpus::manifest::read_json;
use crate::corpus::Result;
use crate::normalize::NormalizeOptions;
use crate::types::Riwaya;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default cap on `ValidationResult::suggestions`.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorConfig {
    /// Riwayat to load. The primary riwaya is always loaded, listed or not.
    pub riwayat: Vec<Riwaya>,
    pub max_suggestions: usize,
    /// Options used for `normalized_input` in `validate` results. Lookups
    /// always use `NormalizeOptions::aggressive()`.
    pub display: NormalizeOptions,
    /// Skip the 6236-verse / 114-surah completeness checks.
    pub allow_partial: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            riwayat: vec![Riwaya::PRIMARY],
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            display: NormalizeOptions::default(),
            allow_partial: false,
        }
    }
}

impl ValidatorConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        read_json(path)
    }

    /// The primary riwaya followed by every other requested riwaya, without
    /// duplicates, in request order.
    pub fn active_riwayat(&self) -> Vec<Riwaya> {
        let mut active = vec![Riwaya::PRIMARY];
        for &riwaya in &self.riwayat {
            if !active.contains(&riwaya) {
                active.push(riwaya);
            }
        }
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_empty_object_is_default() {
        let config: ValidatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ValidatorConfig::default());
        assert_eq!(config.max_suggestions, 3);
        assert_eq!(config.active_riwayat(), vec![Riwaya::Hafs]);
    }

    #[test]
    fn test_partial_display_options() {
        let json = r#"{"display": {"removeDiacritics": false}, "riwayat": ["warsh"]}"#;
        let config: ValidatorConfig = serde_json::from_str(json).unwrap();
        assert!(!config.display.remove_diacritics);
        assert!(config.display.normalize_alef_variants);
        assert_eq!(config.active_riwayat(), vec![Riwaya::Hafs, Riwaya::Warsh]);
    }

    #[test]
    fn test_active_riwayat_dedups() {
        let config = ValidatorConfig {
            riwayat: vec![Riwaya::Qalun, Riwaya::Hafs, Riwaya::Qalun],
            ..Default::default()
        };
        assert_eq!(config.active_riwayat(), vec![Riwaya::Hafs, Riwaya::Qalun]);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tahqiq.json");
        fs::write(&path, r#"{"maxSuggestions": 1, "allowPartial": true}"#).unwrap();
        let config = ValidatorConfig::from_file(&path).unwrap();
        assert_eq!(config.max_suggestions, 1);
        assert!(config.allow_partial);
    }

    #[test]
    fn test_unknown_riwaya_is_rejected() {
        assert!(serde_json::from_str::<ValidatorConfig>(r#"{"riwayat": ["kisai"]}"#).is_err());
    }
}
