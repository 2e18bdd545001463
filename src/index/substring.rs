// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring queries over one large string.
//!
//! A suffix array restricted to character boundaries. Every suffix that
//! starts with `needle` sits in one contiguous run of the sorted array, so
//! `contains` and `count` are two binary searches: `O(m log n)` for a needle
//! of `m` bytes.
//!
//! ```text
//! text:  "رب الناس ملك الناس"
//!
//! sorted suffixes (char boundaries only)
//!   ...
//!   "الناس"               ┐
//!   "الناس ملك الناس"      ┘ ← run for needle "الناس"
//!   "ب الناس ملك الناس"
//!   ...
//! ```
//!
//! # Invariant
//!
//! `suffixes` is sorted by the byte order of `text[offset..]` and holds every
//! char-boundary offset exactly once. Byte order on UTF-8 equals code-point
//! order, so a run is also a run in character terms.

use super::sais::suffix_array;
use std::ops::Range;

pub struct SubstringIndex {
    text: String,
    suffixes: Vec<u32>,
}

impl SubstringIndex {
    pub fn new(text: String) -> Self {
        let suffixes = suffix_array(text.as_bytes())
            .into_iter()
            .filter(|&pos| text.is_char_boundary(pos as usize))
            .collect();
        Self { text, suffixes }
    }

    /// The indexed string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of indexed suffixes (characters in the text).
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Does `needle` occur anywhere in the text? The empty needle always does.
    pub fn contains(&self, needle: &str) -> bool {
        !self.run(needle.as_bytes()).is_empty() || needle.is_empty()
    }

    /// Byte offsets of every occurrence, in text order.
    pub fn positions(&self, needle: &str) -> Vec<usize> {
        if needle.is_empty() {
            return Vec::new();
        }
        let mut positions: Vec<usize> = self.suffixes[self.run(needle.as_bytes())]
            .iter()
            .map(|&pos| pos as usize)
            .collect();
        positions.sort_unstable();
        positions
    }

    fn suffix(&self, pos: u32) -> &[u8] {
        &self.text.as_bytes()[pos as usize..]
    }

    /// Range of `suffixes` whose suffix starts with `needle`.
    fn run(&self, needle: &[u8]) -> Range<usize> {
        let start = self.suffixes.partition_point(|&pos| self.suffix(pos) < needle);
        let len = self.suffixes[start..].partition_point(|&pos| self.suffix(pos).starts_with(needle));
        start..start + len
    }
}

impl std::fmt::Debug for SubstringIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubstringIndex")
            .field("bytes", &self.text.len())
            .field("suffixes", &self.suffixes.len())
            .finish()
    }
}
