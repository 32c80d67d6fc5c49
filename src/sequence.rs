//! Sequencing read representation and symbol-level utilities

use serde::{Deserialize, Serialize};

/// A single sequencing read or assembled fragment.
///
/// Identity is positional: two reads with identical content are distinct
/// entities in a collection, and stay distinct until the assembler merges
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    pub id: String,
    pub description: Option<String>,
    pub sequence: Vec<u8>,
    /// Per-base quality string from FASTQ input; ignored by the assembly core.
    #[serde(default)]
    pub quality: Option<Vec<u8>>,
}

impl Sequence {
    pub fn new(id: String, sequence: Vec<u8>) -> Self {
        Self {
            id,
            description: None,
            sequence,
            quality: None,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_quality(mut self, quality: Vec<u8>) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn to_string(&self) -> String {
        String::from_utf8_lossy(&self.sequence).to_string()
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.sequence
    }
}

/// Complement of a single nucleotide; unrecognized symbols become 'N'.
fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        b'a' => b't',
        b't' => b'a',
        b'g' => b'c',
        b'c' => b'g',
        b'n' => b'n',
        _ => b'N',
    }
}

/// Reverse complement of a nucleotide strand.
pub fn reverse_complement(strand: &[u8]) -> Vec<u8> {
    strand.iter().rev().map(|&b| complement(b)).collect()
}

/// Count occurrences of `base` at each read offset across a collection.
///
/// The result is as long as the longest read. Useful for spotting bad
/// sequencing cycles (e.g. a position where 'N' spikes across all reads).
pub fn base_count_by_position(reads: &[Sequence], base: u8) -> Vec<usize> {
    let width = reads.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut counts = vec![0usize; width];
    for read in reads {
        for (i, &b) in read.sequence.iter().enumerate() {
            if b == base {
                counts[i] += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement(b"ATGC"), b"GCAT");
        assert_eq!(reverse_complement(b""), b"");
        assert_eq!(reverse_complement(b"AAAA"), b"TTTT");
        assert_eq!(reverse_complement(b"ATGCN"), b"NGCAT");
    }

    #[test]
    fn test_reverse_complement_palindrome() {
        // TTAA is its own reverse complement
        assert_eq!(reverse_complement(b"TTAA"), b"TTAA");
    }

    #[test]
    fn test_sequence_builders() {
        let seq = Sequence::new("read1".to_string(), b"ACGT".to_vec())
            .with_description("test read".to_string())
            .with_quality(b"IIII".to_vec());
        assert_eq!(seq.len(), 4);
        assert!(!seq.is_empty());
        assert_eq!(seq.description.as_deref(), Some("test read"));
        assert_eq!(seq.quality.as_deref(), Some(b"IIII".as_ref()));
        assert_eq!(seq.to_string(), "ACGT");
    }

    #[test]
    fn test_base_count_by_position() {
        let reads = vec![
            Sequence::new("a".into(), b"ANGT".to_vec()),
            Sequence::new("b".into(), b"ACNTN".to_vec()),
        ];
        let counts = base_count_by_position(&reads, b'N');
        assert_eq!(counts, vec![0, 1, 1, 0, 1]);
    }

    #[test]
    fn test_base_count_empty_collection() {
        assert!(base_count_by_position(&[], b'N').is_empty());
    }
}
