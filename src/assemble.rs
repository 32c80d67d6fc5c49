//! Greedy superstring reduction
//!
//! Repeatedly merges the pair of fragments with the globally largest
//! suffix/prefix overlap until no overlap of at least k remains, then
//! concatenates whatever is left. Greedy maximum-overlap merging is a
//! constant-factor approximation of the shortest common superstring, not
//! an exact algorithm; [`crate::exhaustive`] provides ground truth for
//! validation-scale inputs.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{WeaverError, WeaverResult};
use crate::index::PrefixIndex;
use crate::overlap::overlap;

/// Minimum live-fragment count before per-round candidate scans move to
/// the rayon pool.
const PARALLEL_SCAN_THRESHOLD: usize = 64;

#[derive(Debug, Clone, Copy)]
struct Merge {
    source: usize,
    target: usize,
    len: usize,
}

/// Greedy overlap-layout assembler.
///
/// `k` is both the index seed length and the minimum overlap accepted for
/// a merge. Ties in maximum overlap are broken by the first pair in
/// enumeration order over the live fragment list, which keeps fragments in
/// creation order (merged fragments are appended at the tail); the result
/// is identical across runs and across the serial and parallel scan paths.
#[derive(Debug, Clone)]
pub struct Assembler {
    k: usize,
    max_merges: Option<usize>,
}

impl Assembler {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_merges: None,
        }
    }

    /// Cap the number of merge rounds. Stopping early still yields a valid
    /// superstring (the concatenation of the remaining fragments), just not
    /// a fully reduced one; callers needing bounded latency use this.
    pub fn with_max_merges(mut self, cap: usize) -> Self {
        self.max_merges = Some(cap);
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Assemble `reads` into a single superstring.
    ///
    /// Terminates after at most N-1 merges: every merge removes two
    /// fragments and inserts one, so the live count strictly decreases.
    pub fn assemble<S: AsRef<[u8]>>(&self, reads: &[S]) -> WeaverResult<Vec<u8>> {
        if self.k == 0 {
            return Err(WeaverError::InvalidInput(
                "minimum overlap k must be at least 1".to_string(),
            ));
        }
        if reads.is_empty() {
            return Err(WeaverError::InvalidInput(
                "read collection is empty".to_string(),
            ));
        }

        // Fragment arena: merged fragments get fresh ids at the tail, dead
        // parents stay behind as empty slots. The live list holds the ids
        // still in play, always ascending by creation order.
        let mut arena: Vec<Vec<u8>> = reads.iter().map(|r| r.as_ref().to_vec()).collect();
        let mut live: Vec<usize> = (0..arena.len()).collect();
        let mut index = PrefixIndex::build(&arena, self.k)?;

        let mut merges = 0usize;
        while live.len() > 1 {
            if let Some(cap) = self.max_merges {
                if merges >= cap {
                    debug!(cap, "merge cap reached, returning partial assembly");
                    break;
                }
            }

            let best = match self.best_merge(&arena, &live, &index) {
                Some(best) => best,
                None => break,
            };

            // The merge candidate came from a scan of the current snapshot;
            // only now does the working set change, as one atomic update:
            // detach both parents from the index, splice the child in.
            index.remove(best.source, &arena[best.source]);
            index.remove(best.target, &arena[best.target]);

            let mut merged = std::mem::take(&mut arena[best.source]);
            let tail = std::mem::take(&mut arena[best.target]);
            merged.extend_from_slice(&tail[best.len..]);

            let child = arena.len();
            index.insert(child, &merged);
            arena.push(merged);
            live.retain(|&id| id != best.source && id != best.target);
            live.push(child);

            merges += 1;
            debug!(
                source = best.source,
                target = best.target,
                overlap = best.len,
                remaining = live.len(),
                "merged fragments"
            );
        }

        info!(
            input_reads = reads.len(),
            merges,
            fragments = live.len(),
            "assembly complete"
        );

        let total: usize = live.iter().map(|&id| arena[id].len()).sum();
        let mut superstring = Vec::with_capacity(total);
        for &id in &live {
            superstring.extend_from_slice(&arena[id]);
        }
        Ok(superstring)
    }

    /// Maximum-overlap pair across the current live set, or None when no
    /// pair overlaps by at least k.
    fn best_merge(&self, arena: &[Vec<u8>], live: &[usize], index: &PrefixIndex) -> Option<Merge> {
        let scan_source = |&source: &usize| -> Option<Merge> {
            let a = arena[source].as_slice();
            let mut best: Option<Merge> = None;
            for target in index.candidates(a) {
                if target == source {
                    continue;
                }
                let len = overlap(a, &arena[target], self.k);
                if len > 0 && best.map_or(true, |b| len > b.len) {
                    best = Some(Merge {
                        source,
                        target,
                        len,
                    });
                }
            }
            best
        };

        // Per-source scans are independent; the reduction over sources is
        // a sequential fold in live order so ties resolve identically to a
        // plain nested loop.
        let per_source: Vec<Option<Merge>> = if live.len() >= PARALLEL_SCAN_THRESHOLD {
            live.par_iter().map(scan_source).collect()
        } else {
            live.iter().map(scan_source).collect()
        };

        per_source
            .into_iter()
            .flatten()
            .fold(None, |best: Option<Merge>, candidate| {
                match best {
                    Some(b) if b.len >= candidate.len => Some(b),
                    _ => Some(candidate),
                }
            })
    }
}
