//! Exact and approximate substring search
//!
//! Standalone pattern-matching utilities: naive scanning (exact, with
//! bounded mismatches, and strand-aware), a sorted k-mer index over a
//! reference text, and pigeonhole seed-and-extend matching built on that
//! index. None of this participates in assembly; the assembler has its own
//! bucket index over read prefixes.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{WeaverError, WeaverResult};
use crate::sequence::reverse_complement;

/// Offsets of every exact occurrence of `pattern` in `text`.
pub fn naive_exact(pattern: &[u8], text: &[u8]) -> Vec<usize> {
    if pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| &text[i..i + pattern.len()] == pattern)
        .collect()
}

/// Offsets where `pattern` occurs in `text` with at most `max_mismatches`
/// substitutions.
pub fn naive_mm(pattern: &[u8], text: &[u8], max_mismatches: usize) -> Vec<usize> {
    if pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| {
            let mut mismatches = 0;
            for (p, t) in pattern.iter().zip(&text[i..]) {
                if p != t {
                    mismatches += 1;
                    if mismatches > max_mismatches {
                        return false;
                    }
                }
            }
            true
        })
        .collect()
}

/// Offsets where `pattern` or its reverse complement occurs exactly in
/// `text`, ascending. A palindromic pattern (equal to its own reverse
/// complement) is scanned once so occurrences are not double-counted.
pub fn naive_with_rc(pattern: &[u8], text: &[u8]) -> Vec<usize> {
    let rc = reverse_complement(pattern);
    let mut offsets = naive_exact(pattern, text);
    if rc != pattern {
        offsets.extend(naive_exact(&rc, text));
        offsets.sort_unstable();
    }
    offsets
}

/// Sorted k-mer index over a reference text.
///
/// Holds every (k-mer, offset) pair of the text in lexicographic order and
/// answers queries by binary search.
#[derive(Debug, Clone)]
pub struct KmerIndex {
    k: usize,
    entries: Vec<(Vec<u8>, usize)>,
}

impl KmerIndex {
    pub fn build(text: &[u8], k: usize) -> WeaverResult<Self> {
        if k == 0 {
            return Err(WeaverError::InvalidInput(
                "k-mer length must be at least 1".to_string(),
            ));
        }
        let mut entries: Vec<(Vec<u8>, usize)> = if text.len() >= k {
            (0..=text.len() - k)
                .map(|i| (text[i..i + k].to_vec(), i))
                .collect()
        } else {
            Vec::new()
        };
        entries.sort();
        debug!(text_len = text.len(), k, entries = entries.len(), "built k-mer index");
        Ok(Self { k, entries })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Text offsets where `pattern`'s first k-mer occurs. Empty if the
    /// pattern is shorter than k. Offsets are in text order.
    pub fn query(&self, pattern: &[u8]) -> Vec<usize> {
        if pattern.len() < self.k {
            return Vec::new();
        }
        let seed = &pattern[..self.k];
        let from = self
            .entries
            .partition_point(|(kmer, _)| kmer.as_slice() < seed);
        // Entries sort by (k-mer, offset), so hits come out in text order.
        self.entries[from..]
            .iter()
            .take_while(|(kmer, _)| kmer.as_slice() == seed)
            .map(|(_, offset)| *offset)
            .collect()
    }

    /// Text offsets where the whole of `pattern` occurs: seed hits from
    /// [`Self::query`], each verified by extending past the first k-mer.
    pub fn query_verified(&self, pattern: &[u8], text: &[u8]) -> Vec<usize> {
        self.query(pattern)
            .into_iter()
            .filter(|&i| {
                i + pattern.len() <= text.len()
                    && &text[i + self.k..i + pattern.len()] == &pattern[self.k..]
            })
            .collect()
    }
}

/// Offsets where `pattern` occurs in `text` with at most `max_mismatches`
/// substitutions, found by pigeonhole seed-and-extend over `index`.
///
/// The pattern splits into `max_mismatches + 1` segments; any occurrence
/// with that few mismatches must contain at least one segment exactly, so
/// each segment is matched through the index and its flanks are verified
/// with mismatch counting. `index` must have been built over `text` with
/// k no larger than the segment length, or seeds cannot be looked up.
pub fn approximate_match(
    pattern: &[u8],
    text: &[u8],
    index: &KmerIndex,
    max_mismatches: usize,
) -> WeaverResult<Vec<usize>> {
    if pattern.is_empty() {
        return Err(WeaverError::InvalidInput("pattern is empty".to_string()));
    }
    let segments = max_mismatches + 1;
    let segment_len = pattern.len() / segments;
    if segment_len < index.k() {
        return Err(WeaverError::InvalidInput(format!(
            "pattern of length {} splits into segments of {} symbols, shorter than index k-mers ({})",
            pattern.len(),
            segment_len,
            index.k()
        )));
    }

    let mut matches = BTreeSet::new();
    for i in 0..segments {
        let start = i * segment_len;
        let end = if i == segments - 1 {
            pattern.len()
        } else {
            (i + 1) * segment_len
        };

        for hit in index.query_verified(&pattern[start..end], text) {
            // The candidate alignment places pattern[0] at hit - start.
            if hit < start || hit - start + pattern.len() > text.len() {
                continue;
            }
            let origin = hit - start;
            let mut mismatches = 0;
            for j in (0..start).chain(end..pattern.len()) {
                if pattern[j] != text[origin + j] {
                    mismatches += 1;
                    if mismatches > max_mismatches {
                        break;
                    }
                }
            }
            if mismatches <= max_mismatches {
                matches.insert(origin);
            }
        }
    }
    Ok(matches.into_iter().collect())
}
