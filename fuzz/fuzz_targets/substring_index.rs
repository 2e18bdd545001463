// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the suffix-array substring index.
//!
//! Containment and occurrence counts must agree with a plain scan of the
//! text for any haystack and needle.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tahqiq::index::substring::SubstringIndex;

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    needle: String,
}

fuzz_target!(|input: Input| {
    let index = SubstringIndex::new(input.text.clone());

    assert_eq!(index.contains(&input.needle), input.text.contains(&input.needle));

    if !input.needle.is_empty() {
        let expected: Vec<usize> = input
            .text
            .char_indices()
            .map(|(i, _)| i)
            .filter(|&i| input.text[i..].starts_with(&input.needle))
            .collect();
        assert_eq!(index.positions(&input.needle), expected);
    }
});
