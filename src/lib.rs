//! Greedy overlap-layout read assembly core
//!
//! Reconstructs an unknown sequence from short overlapping reads:
//! suffix/prefix overlaps are discovered through a k-mer prefix bucket
//! index, collected into a sparse overlap graph, and greedily merged,
//! largest overlap first, into a single superstring.
//!
//! ```
//! use weaver::Assembler;
//!
//! let reads: Vec<&[u8]> = vec![b"ABCD", b"CDEF", b"EFGH"];
//! let superstring = Assembler::new(2).assemble(&reads).unwrap();
//! assert_eq!(superstring, b"ABCDEFGH");
//! ```
//!
//! The greedy reduction is a heuristic; [`exhaustive::shortest_superstring`]
//! provides exact ground truth for validation-scale inputs. Supporting
//! modules carry read ingestion ([`formats`]), pattern matching over a
//! reference text ([`search`]) and DP edit distance ([`distance`]).

pub mod assemble;
pub mod distance;
pub mod error;
pub mod exhaustive;
pub mod formats;
pub mod graph;
pub mod index;
pub mod overlap;
pub mod search;
pub mod sequence;

// Re-export commonly used types
pub use assemble::Assembler;
pub use error::{WeaverError, WeaverResult};
pub use exhaustive::shortest_superstring;
pub use graph::{overlap_graph, Overlap};
pub use index::PrefixIndex;
pub use overlap::overlap;
pub use sequence::{reverse_complement, Sequence};
