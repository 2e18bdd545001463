// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SA-IS: suffix array by induced sorting, O(n).
//!
//! The flattened corpus is highly repetitive: every additional riwaya repeats
//! most of the primary text verbatim, so neighbouring suffixes can share
//! prefixes thousands of bytes long. A comparison sort pays for that on every
//! comparison; induced sorting does not.
//!
//! ```text
//! Input: "banana$"            ($ = sentinel, smaller than every symbol)
//!
//!   b  a  n  a  n  a  $
//!   L  S  L  S  L  S  S       S: suffix smaller than its successor
//!      *     *     *          LMS: S-type right after an L-type
//!
//! 1. Drop LMS suffixes at the tails of their buckets
//! 2. Induce L-types left to right, S-types right to left
//! 3. Name LMS substrings; if names repeat, recurse on the names
//! 4. Induce once more from the correctly ordered LMS suffixes
//!
//! Output: [6, 5, 3, 1, 0, 4, 2]
//! ```
//!
//! Nong, Zhang, Chan (2009): "Linear Suffix Array Construction by Almost Pure
//! Induced-Sorting". <https://doi.org/10.1109/DCC.2009.42>

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Kind {
    S,
    L,
}

const EMPTY: u32 = u32::MAX;
const SENTINEL: u32 = 0;

/// Suffix array of `text`: `sa[i]` is the byte offset of the i-th smallest
/// suffix. Offsets are `u32`; inputs must stay under 4 GiB.
pub fn suffix_array(text: &[u8]) -> Vec<u32> {
    if text.is_empty() {
        return Vec::new();
    }

    // Shift every byte up by one so 0 is free for the sentinel.
    let mut symbols: Vec<u32> = text.iter().map(|&b| u32::from(b) + 1).collect();
    symbols.push(SENTINEL);

    let len = text.len() as u32;
    sais(&symbols, 257)
        .into_iter()
        .filter(|&pos| pos < len)
        .collect()
}

/// Induced sorting over an integer alphabet `0..alphabet_size`.
///
/// `text` must end with a symbol that is strictly smaller than every other
/// symbol and occurs nowhere else. Both the sentinel-terminated input and
/// the reduced strings built from LMS names satisfy this.
fn sais(text: &[u32], alphabet_size: usize) -> Vec<u32> {
    let n = text.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![0],
        2 => return if text[0] < text[1] { vec![0, 1] } else { vec![1, 0] },
        _ => {}
    }

    let kinds = classify(text);
    let lms: Vec<u32> = (1..n)
        .filter(|&i| is_lms(&kinds, i))
        .map(|i| i as u32)
        .collect();
    let buckets = bucket_sizes(text, alphabet_size);

    let mut sa = vec![EMPTY; n];
    induce(text, &kinds, &buckets, &lms, &mut sa);

    // Name LMS substrings in sorted order; equal substrings share a name.
    let mut names = vec![EMPTY; n];
    let mut name = 0u32;
    let mut prev: Option<usize> = None;
    for &pos in &sa {
        if pos == EMPTY {
            continue;
        }
        let pos = pos as usize;
        if !is_lms(&kinds, pos) {
            continue;
        }
        if let Some(prev) = prev {
            if !lms_substrings_equal(text, &kinds, prev, pos) {
                name += 1;
            }
        }
        names[pos] = name;
        prev = Some(pos);
    }

    let reduced: Vec<u32> = lms.iter().map(|&pos| names[pos as usize]).collect();
    let unique = name as usize + 1;

    let order: Vec<u32> = if unique < reduced.len() {
        sais(&reduced, unique)
    } else {
        // Names are already a permutation: invert it.
        let mut order = vec![0u32; reduced.len()];
        for (i, &name) in reduced.iter().enumerate() {
            order[name as usize] = i as u32;
        }
        order
    };

    let sorted_lms: Vec<u32> = order.iter().map(|&i| lms[i as usize]).collect();
    induce(text, &kinds, &buckets, &sorted_lms, &mut sa);
    sa
}

fn classify(text: &[u32]) -> Vec<Kind> {
    let n = text.len();
    let mut kinds = vec![Kind::S; n];
    for i in (0..n - 1).rev() {
        kinds[i] = match text[i].cmp(&text[i + 1]) {
            std::cmp::Ordering::Less => Kind::S,
            std::cmp::Ordering::Greater => Kind::L,
            std::cmp::Ordering::Equal => kinds[i + 1],
        };
    }
    kinds
}

#[inline]
fn is_lms(kinds: &[Kind], i: usize) -> bool {
    i > 0 && kinds[i] == Kind::S && kinds[i - 1] == Kind::L
}

fn bucket_sizes(text: &[u32], alphabet_size: usize) -> Vec<usize> {
    let mut sizes = vec![0; alphabet_size];
    for &c in text {
        sizes[c as usize] += 1;
    }
    sizes
}

fn bucket_heads(sizes: &[usize]) -> Vec<usize> {
    sizes
        .iter()
        .scan(0, |sum, &size| {
            let head = *sum;
            *sum += size;
            Some(head)
        })
        .collect()
}

fn bucket_tails(sizes: &[usize]) -> Vec<usize> {
    sizes
        .iter()
        .scan(0, |sum, &size| {
            *sum += size;
            Some(*sum)
        })
        .collect()
}

/// Place `lms` (in the order given) at bucket tails, then induce every L-type
/// and S-type suffix from them.
fn induce(text: &[u32], kinds: &[Kind], buckets: &[usize], lms: &[u32], sa: &mut [u32]) {
    sa.fill(EMPTY);

    let mut tails = bucket_tails(buckets);
    for &pos in lms.iter().rev() {
        let c = text[pos as usize] as usize;
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }

    let mut heads = bucket_heads(buckets);
    for i in 0..sa.len() {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos as usize - 1;
        if kinds[j] == Kind::L {
            let c = text[j] as usize;
            sa[heads[c]] = j as u32;
            heads[c] += 1;
        }
    }

    let mut tails = bucket_tails(buckets);
    for i in (0..sa.len()).rev() {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos as usize - 1;
        if kinds[j] == Kind::S {
            let c = text[j] as usize;
            tails[c] -= 1;
            sa[tails[c]] = j as u32;
        }
    }
}

/// Two LMS substrings are equal if they agree symbol by symbol and kind by
/// kind up to and including the next LMS position.
fn lms_substrings_equal(text: &[u32], kinds: &[Kind], a: usize, b: usize) -> bool {
    if a == b {
        return true;
    }
    let n = text.len();
    let mut k = 0;
    loop {
        let (pa, pb) = (a + k, b + k);
        if pa >= n || pb >= n {
            return pa >= n && pb >= n;
        }
        if text[pa] != text[pb] || kinds[pa] != kinds[pb] {
            return false;
        }
        if k > 0 {
            match (is_lms(kinds, pa), is_lms(kinds, pb)) {
                (true, true) => return true,
                (false, false) => {}
                _ => return false,
            }
        }
        k += 1;
    }
}
