// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for citation parsing.
//!
//! Anything that parses must be in range and must print back to a string
//! that parses to the same citation.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tahqiq::VerseRef;

fuzz_target!(|data: &str| {
    let Some(cited) = VerseRef::parse(data) else {
        return;
    };

    assert!((1..=114).contains(&cited.surah));
    assert!(cited.start >= 1 && cited.start <= cited.end);
    assert_eq!(cited.addresses().count(), usize::from(cited.end - cited.start) + 1);

    let printed = cited.to_string();
    assert_eq!(VerseRef::parse(&printed), Some(cited), "{} -> {}", data, printed);
});
