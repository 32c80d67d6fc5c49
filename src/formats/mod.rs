//! Read ingestion adapters
//!
//! FASTA and FASTQ readers producing in-memory [`Sequence`](crate::sequence::Sequence)
//! collections for the assembly core. Gzipped input is handled
//! transparently based on the `.gz` extension.

pub mod fasta;
pub mod fastq;

pub use fasta::{parse_fasta, parse_fasta_bytes, write_fasta};
pub use fastq::{parse_fastq, parse_fastq_reader};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;

/// Open a file as a buffered reader, decompressing if it ends in `.gz`.
pub(crate) fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
