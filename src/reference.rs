// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Citation parsing: `surah:ayah` and `surah:start-end`.
//!
//! Accepts exactly `^\d+:\d+(-\d+)?$`. No surrounding whitespace, no signs,
//! no Arabic-Indic digits; callers that want those normalize first. Parsing
//! is purely syntactic except for rejecting zero and inverted ranges; whether
//! the address exists is the corpus's business.

use crate::types::{VerseAddress, SURAH_COUNT};
use std::fmt;

/// A parsed citation. `start == end` for a single verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VerseRef {
    pub surah: u16,
    pub start: u16,
    pub end: u16,
}

impl VerseRef {
    /// Parse a citation. `None` for anything malformed or out of range.
    ///
    /// ```
    /// use tahqiq::VerseRef;
    ///
    /// assert_eq!(VerseRef::parse("2:255").map(|r| r.is_range()), Some(false));
    /// assert!(VerseRef::parse("2:5-1").is_none());
    /// assert!(VerseRef::parse("2 :255").is_none());
    /// ```
    pub fn parse(reference: &str) -> Option<Self> {
        let (surah, ayahs) = reference.split_once(':')?;
        let (start, end) = match ayahs.split_once('-') {
            Some((start, end)) => (start, Some(end)),
            None => (ayahs, None),
        };

        let surah = parse_number(surah)?;
        let start = parse_number(start)?;
        let end = match end {
            Some(end) => parse_number(end)?,
            None => start,
        };

        if surah == 0 || surah > SURAH_COUNT || start == 0 || start > end {
            return None;
        }

        Some(Self { surah, start, end })
    }

    pub fn single(surah: u16, ayah: u16) -> Self {
        Self {
            surah,
            start: ayah,
            end: ayah,
        }
    }

    pub fn is_range(&self) -> bool {
        self.start != self.end
    }

    /// Every address in the inclusive range.
    pub fn addresses(&self) -> impl Iterator<Item = VerseAddress> + '_ {
        (self.start..=self.end).map(move |ayah| VerseAddress {
            surah: self.surah,
            ayah,
        })
    }
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_range() {
            write!(f, "{}:{}-{}", self.surah, self.start, self.end)
        } else {
            write!(f, "{}:{}", self.surah, self.start)
        }
    }
}

/// ASCII digits only; `u16::from_str` alone would also accept a leading `+`.
fn parse_number(s: &str) -> Option<u16> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
