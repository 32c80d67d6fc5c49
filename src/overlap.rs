//! Suffix-prefix overlap detection between two sequences

/// Length of the longest suffix of `a` that is also a prefix of `b` and is
/// at least `min_length` symbols long. Returns 0 if no such overlap exists.
///
/// The scan walks `a` left to right looking for occurrences of `b`'s first
/// `min_length` symbols. The first occurrence whose tail verifies as a full
/// prefix of `b` is necessarily the longest valid overlap, so the scan stops
/// there; later start positions can only yield shorter matches.
///
/// Empty inputs (or inputs shorter than `min_length`) yield 0, not an error.
pub fn overlap(a: &[u8], b: &[u8], min_length: usize) -> usize {
    if a.is_empty() || b.is_empty() || a.len() < min_length || b.len() < min_length {
        return 0;
    }
    let seed = &b[..min_length];
    let mut start = 0;
    while let Some(pos) = find_from(a, seed, start) {
        if b.starts_with(&a[pos..]) {
            return a.len() - pos;
        }
        start = pos + 1;
    }
    0
}

/// Leftmost occurrence of `needle` in `haystack` at or after `from`.
fn find_from(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return (from <= haystack.len()).then_some(from);
    }
    if haystack.len() < needle.len() || from > haystack.len() - needle.len() {
        return None;
    }
    (from..=haystack.len() - needle.len()).find(|&i| &haystack[i..i + needle.len()] == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_overlap() {
        assert_eq!(overlap(b"ABCD", b"CDXY", 2), 2);
        assert_eq!(overlap(b"TTACGT", b"ACGTAC", 3), 4);
    }

    #[test]
    fn test_threshold_boundary() {
        // Suffix "CGT" of a equals b's first three symbols, exactly at the
        // threshold.
        assert_eq!(overlap(b"TTACGT", b"CGTACCA", 3), 3);
        // No shared suffix/prefix of length >= 3 at all.
        assert_eq!(overlap(b"TTACGT", b"GTACCA", 3), 0);
    }

    #[test]
    fn test_returns_longest_overlap() {
        // Suffix "ACGTACGT" of a is itself a prefix of b, longer than the
        // shorter nested match "ACGT".
        assert_eq!(overlap(b"TTACGTACGT", b"ACGTACGTAA", 4), 8);
    }

    #[test]
    fn test_full_containment() {
        // The whole of a is a prefix of b.
        assert_eq!(overlap(b"ACGT", b"ACGTTT", 2), 4);
    }

    #[test]
    fn test_empty_and_short_inputs() {
        assert_eq!(overlap(b"", b"ACGT", 1), 0);
        assert_eq!(overlap(b"ACGT", b"", 1), 0);
        assert_eq!(overlap(b"", b"", 1), 0);
        assert_eq!(overlap(b"AC", b"ACGT", 3), 0);
        assert_eq!(overlap(b"ACGT", b"AC", 3), 0);
    }

    #[test]
    fn test_min_length_filters_short_matches() {
        // Suffix/prefix match of length 2 exists but threshold is 3.
        assert_eq!(overlap(b"AACD", b"CDXY", 2), 2);
        assert_eq!(overlap(b"AACD", b"CDXY", 3), 0);
    }

    #[test]
    fn test_seed_occurs_but_never_verifies() {
        // "AB" occurs twice inside a but neither tail is a prefix of b.
        assert_eq!(overlap(b"ABXABY", b"ABZZZZ", 2), 0);
    }

    #[test]
    fn test_find_from() {
        assert_eq!(find_from(b"AABAB", b"AB", 0), Some(1));
        assert_eq!(find_from(b"AABAB", b"AB", 2), Some(3));
        assert_eq!(find_from(b"AABAB", b"AB", 4), None);
        assert_eq!(find_from(b"AB", b"ABC", 0), None);
    }
}
