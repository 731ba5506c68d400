use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use super::sequence::reverse_complement;
use super::Strand;

/// Errors raised while building gene models.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneError {
    /// Coordinates must satisfy `1 <= start <= end`.
    #[error("gene {gene_id}: invalid interval {start}..{end}")]
    InvalidInterval {
        /// Offending gene.
        gene_id: String,
        /// Reported start.
        start: u32,
        /// Reported end.
        end: u32,
    },
    /// The gene extends past the end of its contig.
    #[error("gene {gene_id}: end {end} exceeds contig length {contig_len}")]
    OutOfBounds {
        /// Offending gene.
        gene_id: String,
        /// Reported end.
        end: u32,
        /// Length of the contig sequence.
        contig_len: usize,
    },
    /// Strand column was neither `+` nor `-`.
    #[error("invalid strand '{0}'")]
    InvalidStrand(String),
}

impl FromStr for Strand {
    type Err = GeneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            other => Err(GeneError::InvalidStrand(other.to_string())),
        }
    }
}

/// Protein-coding gene on a single contig.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gene {
    /// Unique identifier.
    pub gene_id: Arc<str>,
    /// Contig the gene lies on.
    pub contig_id: Arc<str>,
    /// 1-based inclusive start on the forward strand.
    pub start: u32,
    /// 1-based inclusive end on the forward strand.
    pub end: u32,
    /// Strand of translation.
    pub strand: Strand,
    /// Sequence in coding orientation (already reverse-complemented for `-`).
    pub coding_sequence: Arc<[u8]>,
}

impl Gene {
    /// Construct a gene from an already oriented coding sequence.
    pub fn new(
        gene_id: impl Into<Arc<str>>,
        contig_id: impl Into<Arc<str>>,
        start: u32,
        end: u32,
        strand: Strand,
        coding_sequence: impl Into<Arc<[u8]>>,
    ) -> Result<Self, GeneError> {
        let gene_id = gene_id.into();
        if start == 0 || start > end {
            return Err(GeneError::InvalidInterval {
                gene_id: gene_id.to_string(),
                start,
                end,
            });
        }
        Ok(Self {
            gene_id,
            contig_id: contig_id.into(),
            start,
            end,
            strand,
            coding_sequence: coding_sequence.into(),
        })
    }

    /// Cut the gene out of its contig and orient it in the direction of
    /// translation.
    pub fn from_contig(
        gene_id: impl Into<Arc<str>>,
        contig_id: impl Into<Arc<str>>,
        contig: &[u8],
        start: u32,
        end: u32,
        strand: Strand,
    ) -> Result<Self, GeneError> {
        let gene = Self::new(gene_id, contig_id, start, end, strand, Vec::new())?;
        let span = contig
            .get(start as usize - 1..end as usize)
            .ok_or_else(|| GeneError::OutOfBounds {
                gene_id: gene.gene_id.to_string(),
                end,
                contig_len: contig.len(),
            })?;
        let coding_sequence: Arc<[u8]> = match strand {
            Strand::Forward => Arc::from(span),
            Strand::Reverse => Arc::from(reverse_complement(span)),
        };
        Ok(Self {
            coding_sequence,
            ..gene
        })
    }

    /// Genomic length of the gene.
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Whether `position` on this gene's contig falls inside the gene.
    pub fn contains(&self, position: u32) -> bool {
        (self.start..=self.end).contains(&position)
    }
}

/// Genes sorted by contig, then start.
///
/// Contigs are compared byte-wise, which is the same order sites must be
/// presented in.
#[derive(Debug, Clone, Default)]
pub struct GeneList {
    genes: Vec<Gene>,
}

impl GeneList {
    /// Sort `genes` into sweep order.
    pub fn new(mut genes: Vec<Gene>) -> Self {
        genes.sort_by(|a, b| {
            a.contig_id
                .cmp(&b.contig_id)
                .then(a.start.cmp(&b.start))
                .then(a.end.cmp(&b.end))
        });
        let list = Self { genes };
        let overlaps = list.overlap_count();
        if overlaps > 0 {
            warn!(
                overlaps,
                "overlapping genes are not supported; sites in shared regions may be misattributed"
            );
        }
        debug!(genes = list.len(), "built gene list");
        list
    }

    /// Number of adjacent gene pairs on the same contig whose intervals overlap.
    pub fn overlap_count(&self) -> usize {
        self.genes
            .windows(2)
            .filter(|pair| pair[0].contig_id == pair[1].contig_id && pair[1].start <= pair[0].end)
            .count()
    }

    /// All genes in sweep order.
    pub fn as_slice(&self) -> &[Gene] {
        &self.genes
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// True when no genes were loaded.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Genes lying on `contig_id`, in start order.
    pub fn contig(&self, contig_id: &str) -> &[Gene] {
        let lo = self
            .genes
            .partition_point(|gene| gene.contig_id.as_ref() < contig_id);
        let hi = self
            .genes
            .partition_point(|gene| gene.contig_id.as_ref() <= contig_id);
        &self.genes[lo..hi]
    }

    /// Per-contig sublists, each of which can be swept independently.
    pub fn partitions(&self) -> impl Iterator<Item = (&str, &[Gene])> + '_ {
        self.genes
            .chunk_by(|a, b| a.contig_id == b.contig_id)
            .map(|chunk| (chunk[0].contig_id.as_ref(), chunk))
    }
}

impl From<Vec<Gene>> for GeneList {
    fn from(genes: Vec<Gene>) -> Self {
        Self::new(genes)
    }
}
