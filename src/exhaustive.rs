//! Exhaustive shortest-common-superstring search
//!
//! Ground truth for the greedy assembler on validation-scale inputs.
//! Enumerates every permutation of the read set, so it is factorial in the
//! number of reads; keep N small.

use std::collections::HashSet;

use itertools::Itertools;
use tracing::debug;

use crate::error::{WeaverError, WeaverResult};
use crate::overlap::overlap;

/// Exhaustively find a shortest common superstring of `reads`.
///
/// Returns the first minimal superstring encountered in permutation order,
/// together with the number of distinct superstrings achieving the minimal
/// length (solutions are frequently non-unique). Unlike the assembler,
/// every positive overlap counts here (minimum overlap threshold 1), since
/// ground truth must not be limited by a seed length.
pub fn shortest_superstring<S: AsRef<[u8]>>(reads: &[S]) -> WeaverResult<(Vec<u8>, usize)> {
    if reads.is_empty() {
        return Err(WeaverError::InvalidInput(
            "read collection is empty".to_string(),
        ));
    }

    let reads: Vec<&[u8]> = reads.iter().map(AsRef::as_ref).collect();
    let mut shortest: Option<Vec<u8>> = None;
    let mut co_minimal: HashSet<Vec<u8>> = HashSet::new();

    for perm in (0..reads.len()).permutations(reads.len()) {
        let superstring = chain_superstring(&reads, &perm);
        match &shortest {
            Some(best) if superstring.len() > best.len() => {}
            Some(best) if superstring.len() == best.len() => {
                co_minimal.insert(superstring);
            }
            _ => {
                co_minimal.clear();
                co_minimal.insert(superstring.clone());
                shortest = Some(superstring);
            }
        }
    }

    let shortest = shortest.expect("non-empty read set yields at least one permutation");
    debug!(
        reads = reads.len(),
        length = shortest.len(),
        co_minimal = co_minimal.len(),
        "exhaustive search complete"
    );
    Ok((shortest, co_minimal.len()))
}

/// Superstring for one fixed read ordering: each read contributes its
/// non-overlapping tail relative to the read before it.
fn chain_superstring(reads: &[&[u8]], order: &[usize]) -> Vec<u8> {
    let mut superstring = reads[order[0]].to_vec();
    for pair in order.windows(2) {
        let olen = overlap(reads[pair[0]], reads[pair[1]], 1);
        superstring.extend_from_slice(&reads[pair[1]][olen..]);
    }
    superstring
}
