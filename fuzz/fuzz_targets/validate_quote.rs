// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the validator's query paths.
//!
//! Arbitrary text and arbitrary citations against the embedded fixture. No
//! call may panic, and a result's fields must agree with its verdict.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;
use tahqiq::testing::fixture_validator_with;
use tahqiq::{MatchType, Riwaya, Validator};

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    reference: String,
    limit: u8,
}

fuzz_target!(|input: Input| {
    static VALIDATOR: OnceLock<Validator> = OnceLock::new();
    let validator = VALIDATOR.get_or_init(|| fixture_validator_with(&[Riwaya::Warsh]));

    let result = validator.validate(&input.text);
    assert_eq!(result.is_valid, result.match_type.is_match());
    assert_eq!(result.is_valid, result.reference.is_some());

    let cited = validator.validate_against(&input.text, &input.reference);
    if cited.match_type == MatchType::None {
        assert!(cited.reference.is_none());
    } else {
        assert!(cited.mismatch_index.is_none());
    }

    let analysis = validator.analyze_fabrication(&input.text);
    assert_eq!(analysis.words.len(), analysis.stats.total_words);

    let hits = validator.search(&input.text, usize::from(input.limit));
    assert!(hits.len() <= usize::from(input.limit));
});
