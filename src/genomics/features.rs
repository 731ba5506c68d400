//! Gene feature tables.
//!
//! The table is tab separated with a header row. Columns are located by name:
//! `gene_id`, `scaffold_id`, `start`, `end`, `strand` and `gene_type`; extra
//! columns are ignored. RNA genes are dropped.

use std::io::BufRead;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use super::fasta::{open_reader, Genome};
use super::{Gene, GeneList, Strand};

const REQUIRED_COLUMNS: [&str; 6] = ["gene_id", "scaffold_id", "start", "end", "strand", "gene_type"];

/// `gene_type` value of features the annotator skips.
pub const RNA_GENE_TYPE: &str = "RNA";

#[derive(Debug)]
struct ColumnIndex {
    gene_id: usize,
    scaffold_id: usize,
    start: usize,
    end: usize,
    strand: usize,
    gene_type: usize,
}

impl ColumnIndex {
    fn from_header(header: &str) -> Result<Self> {
        let names: Vec<&str> = header.split('\t').map(str::trim).collect();
        let find = |name: &str| {
            names
                .iter()
                .position(|column| *column == name)
                .ok_or_else(|| anyhow!("features header is missing column '{name}'"))
        };
        Ok(Self {
            gene_id: find(REQUIRED_COLUMNS[0])?,
            scaffold_id: find(REQUIRED_COLUMNS[1])?,
            start: find(REQUIRED_COLUMNS[2])?,
            end: find(REQUIRED_COLUMNS[3])?,
            strand: find(REQUIRED_COLUMNS[4])?,
            gene_type: find(REQUIRED_COLUMNS[5])?,
        })
    }
}

/// Parse a feature table into a sorted gene list, cutting each gene's coding
/// sequence out of `genome`.
pub fn read_features<R: BufRead>(reader: R, genome: &Genome) -> Result<GeneList> {
    let mut lines = reader.lines().enumerate();
    let header = match lines.next() {
        Some((_, line)) => line?,
        None => return Ok(GeneList::default()),
    };
    let columns = ColumnIndex::from_header(&header)?;

    let mut genes = Vec::new();
    let mut skipped_rna = 0usize;
    for (idx, line) in lines {
        let line_no = idx + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        let field = |column: usize| {
            fields
                .get(column)
                .copied()
                .map(str::trim)
                .ok_or_else(|| anyhow!("line {line_no}: expected at least {} columns", column + 1))
        };

        if field(columns.gene_type)? == RNA_GENE_TYPE {
            skipped_rna += 1;
            continue;
        }

        let gene_id = field(columns.gene_id)?;
        let scaffold_id = field(columns.scaffold_id)?;
        let start: u32 = field(columns.start)?
            .parse()
            .with_context(|| format!("line {line_no}: invalid start"))?;
        let end: u32 = field(columns.end)?
            .parse()
            .with_context(|| format!("line {line_no}: invalid end"))?;
        let strand: Strand = field(columns.strand)?
            .parse()
            .with_context(|| format!("line {line_no}: invalid strand"))?;
        let contig = genome
            .get(scaffold_id)
            .ok_or_else(|| anyhow!("line {line_no}: unknown scaffold '{scaffold_id}'"))?;

        let gene = Gene::from_contig(gene_id, scaffold_id, contig, start, end, strand)
            .with_context(|| format!("line {line_no}: invalid gene"))?;
        genes.push(gene);
    }

    debug!(genes = genes.len(), skipped_rna, "parsed feature table");
    Ok(GeneList::new(genes))
}

/// Load a (possibly gzip-compressed) feature table.
pub fn read_features_file<P: AsRef<Path>>(path: P, genome: &Genome) -> Result<GeneList> {
    let path = path.as_ref();
    read_features(open_reader(path)?, genome)
        .with_context(|| format!("failed to read features from {}", path.display()))
}
