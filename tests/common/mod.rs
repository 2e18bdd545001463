//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::Path;
use std::sync::LazyLock;
use tahqiq::{Riwaya, Validator, ValidatorConfig};

// Re-export canonical test utilities from tahqiq::testing
pub use tahqiq::testing::{fixture_config, fixture_corpus, make_surah, make_verse, FIXTURE_DIR};

// ============================================================================
// CACHED VALIDATORS
// ============================================================================

/// Fixture corpus loaded from disk, primary text only.
static PRIMARY: LazyLock<Validator> = LazyLock::new(|| load(&[Riwaya::Hafs]));

/// Fixture corpus loaded from disk with Warsh active.
static WITH_WARSH: LazyLock<Validator> = LazyLock::new(|| load(&[Riwaya::Hafs, Riwaya::Warsh]));

fn load(riwayat: &[Riwaya]) -> Validator {
    Validator::from_data_dir(fixture_dir(), fixture_config(riwayat))
        .expect("Failed to load fixture corpus")
}

pub fn fixture_dir() -> &'static Path {
    Path::new(FIXTURE_DIR)
}

/// Validator over the on-disk fixture, Hafs only.
pub fn primary() -> &'static Validator {
    &PRIMARY
}

/// Validator over the on-disk fixture, Hafs and Warsh.
pub fn with_warsh() -> &'static Validator {
    &WITH_WARSH
}

/// Fresh validator with an arbitrary config, for tests that vary settings.
pub fn validator_with(config: ValidatorConfig) -> Validator {
    Validator::from_data_dir(fixture_dir(), config).expect("Failed to load fixture corpus")
}

// ============================================================================
// SAMPLES
// ============================================================================

/// Every primary verse text in the fixture, in corpus order.
pub fn fixture_texts() -> Vec<(String, String)> {
    fixture_corpus()
        .verses
        .iter()
        .map(|v| (v.reference(), v.text.clone()))
        .collect()
}
