//! Dynamic-programming edit distance

/// Fill the DP table row by row and return the final row.
///
/// Rows are indexed by `p`, columns by `t`. With `free_prefix` the first
/// row is zeroed, letting `p` begin its alignment anywhere in `t`.
fn final_dp_row(p: &[u8], t: &[u8], free_prefix: bool) -> Vec<usize> {
    let mut prev: Vec<usize> = if free_prefix {
        vec![0; t.len() + 1]
    } else {
        (0..=t.len()).collect()
    };
    let mut current = vec![0usize; t.len() + 1];

    for (i, &pc) in p.iter().enumerate() {
        current[0] = i + 1;
        for (j, &tc) in t.iter().enumerate() {
            let deletion = prev[j + 1] + 1;
            let insertion = current[j] + 1;
            let substitution = prev[j] + usize::from(pc != tc);
            current[j + 1] = deletion.min(insertion).min(substitution);
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev
}

/// Global (Levenshtein) edit distance between `p` and `t`.
pub fn edit_distance(p: &[u8], t: &[u8]) -> usize {
    *final_dp_row(p, t, false)
        .last()
        .expect("DP row is never empty")
}

/// Smallest edit distance between `p` and any substring of `t`.
///
/// The free-prefix variant: the first DP row is zeroed so the alignment
/// may start anywhere in `t`, and the answer is the minimum over the last
/// row so it may end anywhere too.
pub fn best_match_distance(p: &[u8], t: &[u8]) -> usize {
    final_dp_row(p, t, true)
        .into_iter()
        .min()
        .expect("DP row is never empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance(b"shake spea", b"Shakespear"), 3);
        assert_eq!(edit_distance(b"ACGT", b"ACGT"), 0);
        assert_eq!(edit_distance(b"ACGT", b"AGT"), 1);
        assert_eq!(edit_distance(b"", b"ACGT"), 4);
        assert_eq!(edit_distance(b"ACGT", b""), 4);
        assert_eq!(edit_distance(b"", b""), 0);
    }

    #[test]
    fn test_edit_distance_symmetry() {
        assert_eq!(
            edit_distance(b"GCGTATGC", b"TATTGGCTATACGGTT"),
            edit_distance(b"TATTGGCTATACGGTT", b"GCGTATGC")
        );
    }

    #[test]
    fn test_best_match_distance() {
        assert_eq!(best_match_distance(b"GCGTATGC", b"TATTGGCTATACGGTT"), 2);
        // Exact substring scores zero.
        assert_eq!(best_match_distance(b"TACG", b"ACGTACGTA"), 0);
        // Empty pattern matches anywhere for free.
        assert_eq!(best_match_distance(b"", b"ACGT"), 0);
    }

    #[test]
    fn test_best_match_in_empty_text() {
        // Only insertions remain.
        assert_eq!(best_match_distance(b"ACGT", b""), 4);
    }
}
