//! Loading data directories: manifest handling and structural failures.

use super::common::{fixture_config, fixture_dir};
use std::fs;
use std::path::Path;
use tahqiq::{Corpus, CorpusError, Riwaya, Validator, ValidatorConfig};

/// Copy the fixture into a scratch directory so individual files can be broken.
fn scratch_copy() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join("riwayat")).expect("Failed to create riwayat dir");
    for file in ["manifest.json", "quran.json", "surahs.json", "riwayat/warsh.json"] {
        fs::copy(fixture_dir().join(file), dir.path().join(file)).expect("Failed to copy fixture");
    }
    dir
}

#[test]
fn fixture_loads_with_allow_partial() {
    let corpus = Corpus::load(fixture_dir(), &[Riwaya::Warsh], true).unwrap();
    assert_eq!(corpus.verses.len(), 29);
    assert_eq!(corpus.surahs.len(), 6);
    assert_eq!(corpus.riwayat.len(), 1);
    assert_eq!(corpus.riwayat[0].meta.id, Riwaya::Warsh);
}

#[test]
fn primary_and_repeats_in_request_are_ignored() {
    let corpus =
        Corpus::load(fixture_dir(), &[Riwaya::Hafs, Riwaya::Warsh, Riwaya::Warsh], true).unwrap();
    assert_eq!(corpus.riwayat.len(), 1);
}

#[test]
fn partial_fixture_is_rejected_by_default() {
    let err = Corpus::load(fixture_dir(), &[], false).unwrap_err();
    assert!(matches!(
        err,
        CorpusError::IncompleteCorpus {
            verses: 29,
            surahs: 6
        }
    ));

    let err = Validator::from_data_dir(fixture_dir(), ValidatorConfig::default()).unwrap_err();
    assert!(matches!(err, CorpusError::IncompleteCorpus { .. }));
}

#[test]
fn missing_directory_reports_manifest_path() {
    let err = Corpus::load(Path::new("/nonexistent/tahqiq-data"), &[], true).unwrap_err();
    match err {
        CorpusError::Io { path, .. } => assert!(path.ends_with("manifest.json")),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn riwaya_missing_from_manifest() {
    let err = Validator::from_data_dir(fixture_dir(), fixture_config(&[Riwaya::Qalun])).unwrap_err();
    assert!(matches!(err, CorpusError::RiwayaNotInManifest(Riwaya::Qalun)));
    assert!(err.to_string().contains("qalun"));
}

#[test]
fn malformed_verse_file_names_the_file() {
    let dir = scratch_copy();
    fs::write(dir.path().join("quran.json"), "[{\"id\": 1,").unwrap();

    let err = Corpus::load(dir.path(), &[], true).unwrap_err();
    match err {
        CorpusError::Json { path, .. } => assert!(path.ends_with("quran.json")),
        other => panic!("expected Json error, got {:?}", other),
    }
}

#[test]
fn unsupported_manifest_version() {
    let dir = scratch_copy();
    let manifest = fs::read_to_string(dir.path().join("manifest.json")).unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        manifest.replacen("\"version\": 1", "\"version\": 9", 1),
    )
    .unwrap();

    let err = Corpus::load(dir.path(), &[], true).unwrap_err();
    assert!(matches!(
        err,
        CorpusError::UnsupportedManifestVersion {
            found: 9,
            expected: 1
        }
    ));
}

#[test]
fn duplicate_variant_address_is_rejected() {
    let dir = scratch_copy();
    fs::write(
        dir.path().join("riwayat/warsh.json"),
        r#"[
            {"id": 1, "surah": 1, "ayah": 1, "text": "بسم الله"},
            {"id": 2, "surah": 1, "ayah": 1, "text": "بسم الله"}
        ]"#,
    )
    .unwrap();

    let err = Corpus::load(dir.path(), &[Riwaya::Warsh], true).unwrap_err();
    assert!(matches!(
        err,
        CorpusError::DuplicateAddress {
            riwaya: Riwaya::Warsh,
            surah: 1,
            ayah: 1
        }
    ));
}

#[test]
fn unlisted_riwaya_file_is_never_read() {
    let dir = scratch_copy();
    fs::write(dir.path().join("riwayat/warsh.json"), "not json").unwrap();

    // warsh is listed but not requested, so its broken file does not matter
    assert!(Corpus::load(dir.path(), &[], true).is_ok());
}
