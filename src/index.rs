//! K-mer bucket index over read prefixes
//!
//! Maps each read's first k symbols to the set of reads sharing that prefix.
//! A read B overlaps a read A by some length L >= k exactly when B's first
//! k symbols occur inside A at position |A| - L, so walking A's k-mers over
//! the prefix buckets yields every read that can possibly overlap A by k or
//! more, replacing the all-pairs scan with a handful of bucket lookups.
//!
//! The index is an explicit object built from a snapshot of the collection;
//! when the collection changes (a merge removes two fragments and adds one)
//! the caller updates it through [`PrefixIndex::insert`] and
//! [`PrefixIndex::remove`].

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::debug;

use crate::error::{WeaverError, WeaverResult};

/// Bucket index from length-k prefixes to read ids.
///
/// Ids are the caller's collection indexes. Each bucket keeps its ids in
/// ascending order so candidate enumeration is deterministic across runs.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    k: usize,
    buckets: HashMap<Vec<u8>, Vec<usize>>,
}

impl PrefixIndex {
    /// Build an index over `reads` with seed length `k`.
    ///
    /// Reads shorter than k are skipped: they cannot supply a length-k
    /// prefix and so can never be found through this index.
    pub fn build<S: AsRef<[u8]> + Sync>(reads: &[S], k: usize) -> WeaverResult<Self> {
        if k == 0 {
            return Err(WeaverError::InvalidInput(
                "seed length k must be at least 1".to_string(),
            ));
        }

        // Partition across workers, merge the partial bucket maps, then
        // sort each bucket so order is independent of the partitioning.
        let mut buckets = reads
            .par_iter()
            .enumerate()
            .fold(
                HashMap::<Vec<u8>, Vec<usize>>::new,
                |mut acc, (id, read)| {
                    let read = read.as_ref();
                    if read.len() >= k {
                        acc.entry(read[..k].to_vec()).or_default().push(id);
                    }
                    acc
                },
            )
            .reduce(HashMap::new, |mut left, right| {
                for (key, mut ids) in right {
                    left.entry(key).or_default().append(&mut ids);
                }
                left
            });

        for ids in buckets.values_mut() {
            ids.sort_unstable();
        }

        debug!(
            reads = reads.len(),
            k,
            buckets = buckets.len(),
            "built prefix index"
        );

        Ok(Self { k, buckets })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of distinct prefix keys currently indexed.
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Reads whose first k symbols equal `key`. Empty if none.
    pub fn bucket(&self, key: &[u8]) -> &[usize] {
        debug_assert_eq!(key.len(), self.k);
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every read that could overlap `read` as a target by >= k symbols:
    /// the union of the buckets selected by each of `read`'s k-mers,
    /// ascending and deduplicated. `read` itself is not filtered out.
    ///
    /// Empty if `read` is shorter than k (it cannot act as an overlap
    /// source).
    pub fn candidates(&self, read: &[u8]) -> Vec<usize> {
        if read.len() < self.k {
            return Vec::new();
        }
        let mut ids: Vec<usize> = read
            .windows(self.k)
            .filter_map(|kmer| self.buckets.get(kmer))
            .flatten()
            .copied()
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Register a new read under its prefix key. No-op for reads shorter
    /// than k.
    pub fn insert(&mut self, id: usize, read: &[u8]) {
        if read.len() < self.k {
            return;
        }
        let bucket = self.buckets.entry(read[..self.k].to_vec()).or_default();
        let pos = bucket.partition_point(|&existing| existing < id);
        bucket.insert(pos, id);
    }

    /// Remove a read from its prefix bucket. No-op if the read was never
    /// indexed (shorter than k, or already removed).
    pub fn remove(&mut self, id: usize, read: &[u8]) {
        if read.len() < self.k {
            return;
        }
        let key = &read[..self.k];
        if let Some(bucket) = self.buckets.get_mut(key) {
            if let Ok(pos) = bucket.binary_search(&id) {
                bucket.remove(pos);
            }
            if bucket.is_empty() {
                self.buckets.remove(key);
            }
        }
    }
}
