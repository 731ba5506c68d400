//! FASTA genome loading.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use flate2::read::MultiGzDecoder;
use tracing::debug;

/// Contig sequences keyed by record id, uppercased.
pub type Genome = HashMap<String, Vec<u8>>;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Open a text input, transparently decompressing gzip data.
pub fn open_reader<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let is_gzip = reader.fill_buf()?.starts_with(&GZIP_MAGIC);
    if is_gzip {
        debug!(path = %path.display(), "reading gzip-compressed input");
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(Box::new(reader))
    }
}

/// Parse every record of a FASTA stream.
///
/// The record id is the first whitespace-delimited token of the header line.
pub fn read_fasta<R: BufRead>(reader: R) -> Result<Genome> {
    let mut genome = Genome::new();
    let mut current: Option<(String, Vec<u8>)> = None;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if let Some(header) = line.strip_prefix('>') {
            if let Some((id, sequence)) = current.take() {
                genome.insert(id, sequence);
            }
            let id = header
                .split_whitespace()
                .next()
                .ok_or_else(|| anyhow!("empty FASTA header on line {}", line_no + 1))?;
            current = Some((id.to_string(), Vec::new()));
        } else if !line.is_empty() {
            let (_, sequence) = current
                .as_mut()
                .ok_or_else(|| anyhow!("sequence before first header on line {}", line_no + 1))?;
            sequence.extend(line.bytes().map(|base| base.to_ascii_uppercase()));
        }
    }
    if let Some((id, sequence)) = current {
        genome.insert(id, sequence);
    }

    debug!(contigs = genome.len(), "parsed FASTA");
    Ok(genome)
}

/// Load a (possibly gzip-compressed) FASTA file.
pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<Genome> {
    let path = path.as_ref();
    read_fasta(open_reader(path)?)
        .with_context(|| format!("failed to read genome from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn parses_multi_record_fasta() {
        let input = ">ctg1 description\nacgt\nNNAC\n\n>ctg2\nTTTT\n";
        let genome = read_fasta(Cursor::new(input)).unwrap();
        assert_eq!(genome.len(), 2);
        assert_eq!(genome["ctg1"], b"ACGTNNAC".to_vec());
        assert_eq!(genome["ctg2"], b"TTTT".to_vec());
    }

    #[test]
    fn rejects_sequence_without_header() {
        assert!(read_fasta(Cursor::new("ACGT\n>ctg1\nA\n")).is_err());
    }

    #[test]
    fn reads_gzip_input() {
        let path = std::env::temp_dir().join(format!("sitefold-fasta-{}.fa.gz", std::process::id()));
        {
            let file = File::create(&path).unwrap();
            let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
            encoder.write_all(b">chr\nacgtac\n").unwrap();
            encoder.finish().unwrap();
        }
        let genome = read_fasta_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(genome["chr"], b"ACGTAC".to_vec());
    }
}
