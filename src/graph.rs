//! Overlap graph construction over a read collection
//!
//! Edges are discovered through the prefix bucket index: walking a read's
//! k-mers over the prefix buckets surfaces every read that can overlap it
//! by >= k, so the pairwise work is O(N * average bucket size) instead of
//! O(N^2).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{WeaverError, WeaverResult};
use crate::index::PrefixIndex;
use crate::overlap::overlap;

/// A directed overlap edge: the last `len` symbols of read `source` equal
/// the first `len` symbols of read `target`. Reads are identified by their
/// position in the input collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Overlap {
    pub source: usize,
    pub target: usize,
    pub len: usize,
}

/// Build the full overlap graph of `reads` at seed length `k`.
///
/// Returns every (source, target, len) with source != target and
/// len >= k. Edge order is deterministic: ascending by source, then by
/// target within a source. Reads with identical content produce one edge
/// per instance pair. Cycles (A->B and B->A) are expected and fine; the
/// graph is an edge list, nothing traverses it here.
pub fn overlap_graph<S: AsRef<[u8]>>(reads: &[S], k: usize) -> WeaverResult<Vec<Overlap>> {
    if k == 0 {
        return Err(WeaverError::InvalidInput(
            "seed length k must be at least 1".to_string(),
        ));
    }
    if reads.is_empty() {
        return Err(WeaverError::InvalidInput(
            "read collection is empty".to_string(),
        ));
    }

    let bytes: Vec<&[u8]> = reads.iter().map(AsRef::as_ref).collect();
    let index = PrefixIndex::build(&bytes, k)?;

    let show_progress = bytes.len() > 1000 && std::env::var("WEAVER_SILENT").is_err();
    let pb = if show_progress {
        let pb = ProgressBar::new(bytes.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} reads ({per_sec})")
                .unwrap()
                .progress_chars("##-"),
        );
        pb.set_message("Scanning overlap candidates...");
        Some(Arc::new(pb))
    } else {
        None
    };
    let scanned = AtomicUsize::new(0);

    // Candidate scans are independent per source read; the nested collect
    // preserves source order so the flattened edge list is deterministic.
    let per_source: Vec<Vec<Overlap>> = bytes
        .par_iter()
        .enumerate()
        .map(|(source, a)| {
            let count = scanned.fetch_add(1, Ordering::Relaxed);
            if let Some(ref pb) = pb {
                if count % 100 == 0 {
                    pb.set_position(count as u64);
                }
            }

            index
                .candidates(a)
                .into_iter()
                .filter(|&target| target != source)
                .filter_map(|target| {
                    let len = overlap(a, bytes[target], k);
                    (len > 0).then_some(Overlap {
                        source,
                        target,
                        len,
                    })
                })
                .collect()
        })
        .collect();

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let edges: Vec<Overlap> = per_source.into_iter().flatten().collect();
    debug!(reads = bytes.len(), k, edges = edges.len(), "built overlap graph");
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reads() -> Vec<&'static [u8]> {
        vec![b"CGTACG", b"TACGTA", b"GTACGT", b"ACGTAC", b"GTACGA", b"TACGAT"]
    }

    /// All-pairs reference: the graph must match this exactly.
    fn direct_edges(reads: &[&[u8]], k: usize) -> Vec<Overlap> {
        let mut edges = Vec::new();
        for (source, a) in reads.iter().enumerate() {
            for (target, b) in reads.iter().enumerate() {
                if source == target {
                    continue;
                }
                let len = overlap(a, b, k);
                if len > 0 {
                    edges.push(Overlap {
                        source,
                        target,
                        len,
                    });
                }
            }
        }
        edges
    }

    #[test]
    fn test_matches_direct_pairwise_computation() {
        let reads = reads();
        let edges = overlap_graph(&reads, 3).unwrap();
        assert!(!edges.is_empty());
        assert_eq!(edges, direct_edges(&reads, 3));
    }

    #[test]
    fn test_known_edge_present() {
        let reads = reads();
        let edges = overlap_graph(&reads, 3).unwrap();
        // "CGTACG" ends with ACG; "ACGTAC" starts with it.
        let edge = edges
            .iter()
            .find(|e| e.source == 0 && e.target == 3)
            .expect("CGTACG -> ACGTAC edge missing");
        assert!(edge.len >= 3);
    }

    #[test]
    fn test_edge_lengths_bounded_by_read_lengths() {
        let reads = reads();
        for edge in overlap_graph(&reads, 3).unwrap() {
            assert!(edge.len <= reads[edge.source].len());
            assert!(edge.len <= reads[edge.target].len());
            assert!(edge.len >= 3);
        }
    }

    #[test]
    fn test_disjoint_reads_give_empty_graph() {
        let reads: Vec<&[u8]> = vec![b"AAAA", b"CCCC", b"GGGG"];
        assert!(overlap_graph(&reads, 3).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_inputs() {
        let reads = reads();
        assert!(matches!(
            overlap_graph(&reads, 0),
            Err(WeaverError::InvalidInput(_))
        ));
        let empty: Vec<&[u8]> = Vec::new();
        assert!(matches!(
            overlap_graph(&empty, 3),
            Err(WeaverError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_mutual_overlap_cycle() {
        // ABAB <-> BABA overlap both ways; both edges must appear.
        let reads: Vec<&[u8]> = vec![b"ABAB", b"BABA"];
        let edges = overlap_graph(&reads, 2).unwrap();
        assert!(edges.contains(&Overlap {
            source: 0,
            target: 1,
            len: 3
        }));
        assert!(edges.contains(&Overlap {
            source: 1,
            target: 0,
            len: 3
        }));
    }
}
