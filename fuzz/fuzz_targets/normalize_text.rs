// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the normalization pipeline.
//!
//! Every option set, any string. Normalization must be total and reach a
//! fixpoint in one call.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tahqiq::{normalize, NormalizeOptions};

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    flags: [bool; 11],
}

fuzz_target!(|input: Input| {
    let f = input.flags;
    let options = NormalizeOptions {
        remove_diacritics: f[0],
        normalize_alef_variants: f[1],
        normalize_alef_maqsura: f[2],
        normalize_teh_marbuta: f[3],
        remove_tatweel: f[4],
        normalize_hamza_carriers: f[5],
        normalize_whitespace: f[6],
        normalize_presentation_forms: f[7],
        normalize_digits: f[8],
        strip_bidi_controls: f[9],
        apply_script_heuristics: f[10],
    };

    let once = normalize(&input.text, &options);
    let twice = normalize(&once, &options);
    assert_eq!(once, twice, "not idempotent for {:?}", input);
});
