use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use nom::{
    bytes::complete::{tag, take_till},
    character::complete::{line_ending, not_line_ending},
    combinator::{map, opt},
    sequence::preceded,
    IResult,
};

use crate::sequence::Sequence;

/// Parse a FASTA header line
fn parse_header(input: &[u8]) -> IResult<&[u8], (&str, Option<&str>)> {
    let (input, _) = tag(b">")(input)?;
    let (input, id) = map(
        take_till(|c: u8| c == b' ' || c == b'\t' || c == b'\n' || c == b'\r'),
        |s: &[u8]| std::str::from_utf8(s).unwrap_or(""),
    )(input)?;
    let (input, description) = opt(preceded(
        tag(b" "),
        map(not_line_ending, |s: &[u8]| {
            std::str::from_utf8(s).unwrap_or("")
        }),
    ))(input)?;
    let (input, _) = opt(line_ending)(input)?;
    Ok((input, (id, description)))
}

/// Parse FASTA records from an in-memory buffer.
///
/// Headers are parsed with nom; sequence lines are concatenated and
/// uppercased until the next header. Blank lines anywhere are ignored.
pub fn parse_fasta_bytes(data: &[u8]) -> Result<Vec<Sequence>> {
    let mut sequences = Vec::new();
    let mut remaining = data;

    while let Some(&first) = remaining.first() {
        if first.is_ascii_whitespace() {
            remaining = &remaining[1..];
            continue;
        }
        if first != b'>' {
            bail!("expected FASTA header, found {:?}", first as char);
        }

        let (rest, (id, description)) = parse_header(remaining)
            .map_err(|e| anyhow::anyhow!("malformed FASTA header: {e}"))?;
        if id.is_empty() {
            bail!("FASTA header has no identifier");
        }

        let mut body = Vec::new();
        let mut rest = rest;
        while !rest.is_empty() && rest[0] != b'>' {
            let line_end = rest
                .iter()
                .position(|&c| c == b'\n')
                .map(|p| p + 1)
                .unwrap_or(rest.len());
            for &c in &rest[..line_end] {
                if !c.is_ascii_whitespace() {
                    body.push(c.to_ascii_uppercase());
                }
            }
            rest = &rest[line_end..];
        }

        let mut sequence = Sequence::new(id.to_string(), body);
        if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
            sequence = sequence.with_description(description.trim().to_string());
        }
        sequences.push(sequence);
        remaining = rest;
    }

    Ok(sequences)
}

/// Parse a FASTA file (plain or gzipped).
pub fn parse_fasta(path: &Path) -> Result<Vec<Sequence>> {
    let mut reader = super::open_reader(path)?;
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_fasta_bytes(&data)
}

/// Write sequences as FASTA with 60-column wrapped bodies.
pub fn write_fasta(path: &Path, sequences: &[Sequence]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for seq in sequences {
        match &seq.description {
            Some(desc) => writeln!(writer, ">{} {}", seq.id, desc)?,
            None => writeln!(writer, ">{}", seq.id)?,
        }
        for chunk in seq.sequence.chunks(60) {
            writer.write_all(chunk)?;
            writer.write_all(b"\n")?;
        }
    }
    writer.flush()?;
    Ok(())
}
