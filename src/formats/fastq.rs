use std::io::BufRead;
use std::path::Path;

use anyhow::{bail, Result};

use crate::sequence::Sequence;

/// Parse a FASTQ file (plain or gzipped).
///
/// Quality strings are kept on the returned sequences; the assembly core
/// ignores them.
pub fn parse_fastq(path: &Path) -> Result<Vec<Sequence>> {
    parse_fastq_reader(super::open_reader(path)?)
}

/// Parse four-line FASTQ records from any buffered reader.
pub fn parse_fastq_reader<R: BufRead>(mut reader: R) -> Result<Vec<Sequence>> {
    let mut sequences = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let name = line.trim_end();
        if name.is_empty() {
            continue;
        }
        let Some(name) = name.strip_prefix('@') else {
            bail!("malformed FASTQ record: name line {:?} does not start with '@'", name);
        };
        let (id, description) = match name.split_once(char::is_whitespace) {
            Some((id, rest)) => (id.to_string(), Some(rest.trim().to_string())),
            None => (name.to_string(), None),
        };

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            bail!("truncated FASTQ record {id}: missing sequence line");
        }
        let bases = line.trim_end().as_bytes().to_vec();

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            bail!("truncated FASTQ record {id}: missing separator line");
        }
        if !line.starts_with('+') {
            bail!("malformed FASTQ record {id}: expected '+' separator");
        }

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            bail!("truncated FASTQ record {id}: missing quality line");
        }
        let quality = line.trim_end().as_bytes().to_vec();
        if quality.len() != bases.len() {
            bail!(
                "malformed FASTQ record {id}: quality length {} does not match sequence length {}",
                quality.len(),
                bases.len()
            );
        }

        let mut sequence = Sequence::new(id, bases).with_quality(quality);
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            sequence = sequence.with_description(description);
        }
        sequences.push(sequence);
    }

    Ok(sequences)
}
