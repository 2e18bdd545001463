// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-level detection of invented content.
//!
//! Walk the normalized input left to right. At each word, find the longest
//! run of words starting there that appears verbatim somewhere in the
//! flattened corpus; mark the run genuine and jump past it. A word that
//! starts no run of length 1 is fabricated.
//!
//! ```text
//! input:   بسم  الله  الفلان
//!          └─── 2 ───┘ └ 0 ┘
//!          genuine      fabricated      ratio = 1/3
//! ```
//!
//! The run length is found by binary search over `1..=remaining`. That
//! assumes containment is monotone in the run length (if `w[i..i+k]` occurs,
//! so does every shorter prefix), which holds for contiguous substrings. A
//! span that crosses a verse boundary counts, because the flattened corpus
//! joins verses with a space.
//!
//! Every input word lands in exactly one verdict, in input order.

use crate::index::substring::SubstringIndex;
use crate::normalize::{normalize, NormalizeOptions};
use crate::types::{FabricationAnalysis, FabricationStats, WordVerdict};

/// Classify every word of `text` as genuine or fabricated against `corpus`.
pub fn analyze(text: &str, corpus: &SubstringIndex) -> FabricationAnalysis {
    let normalized_input = normalize(text, &NormalizeOptions::aggressive());
    let words: Vec<&str> = normalized_input.split_whitespace().collect();

    let mut verdicts = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        let run = longest_run(&words[i..], corpus);
        if run == 0 {
            verdicts.push(WordVerdict {
                word: words[i].to_string(),
                is_fabricated: true,
            });
            i += 1;
        } else {
            verdicts.extend(words[i..i + run].iter().map(|w| WordVerdict {
                word: (*w).to_string(),
                is_fabricated: false,
            }));
            i += run;
        }
    }

    let stats = FabricationStats::from_words(&verdicts);
    FabricationAnalysis {
        normalized_input,
        words: verdicts,
        stats,
    }
}

/// Largest `k` in `0..=words.len()` such that the first `k` words, joined by
/// single spaces, occur in `corpus`.
fn longest_run(words: &[&str], corpus: &SubstringIndex) -> usize {
    let (mut lo, mut hi) = (0, words.len());
    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);
        if corpus.contains(&words[..mid].join(" ")) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}
