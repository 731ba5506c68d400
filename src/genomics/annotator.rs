//! Coordinate sweep pairing a sorted site stream with a sorted gene list.
//!
//! A [`GeneSweep`] owns a cursor into the gene list that only moves forward.
//! Each call to [`GeneSweep::annotate`] either finds the gene enclosing the
//! site and classifies the codon, or decides the site is intergenic. Over a
//! whole stream the cursor advances at most once per gene, so total work is
//! linear in sites plus genes.

use std::cmp::Ordering;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;
use thiserror::Error;
use tracing::trace;

use super::sequence::{is_canonical_codon, substitute_base, translate_codon, SequenceError};
use super::{AlleleMap, Consequence, Gene, Nucleotide, SiteType, Strand};

/// Errors raised while sweeping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnnotatorError {
    /// A site sorted before the one annotated just before it.
    #[error("site {contig}:{position} is out of order (previous site {previous_contig}:{previous_position})")]
    OutOfOrderSite {
        /// Contig of the rejected site.
        contig: Arc<str>,
        /// Position of the rejected site.
        position: u32,
        /// Contig of the previously annotated site.
        previous_contig: Arc<str>,
        /// Position of the previously annotated site.
        previous_position: u32,
    },
    /// Codon translation failed.
    #[error("sequence error: {0}")]
    Sequence(#[from] SequenceError),
}

/// Reference codon overlapping a coding site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CodonContext {
    /// Codon in coding orientation.
    pub reference_codon: [u8; 3],
    /// Offset of the site within the codon (0, 1 or 2).
    pub codon_position: u8,
}

/// Per-allele translation outcome at a coding site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AlleleEffects {
    /// Amino acid encoded by the reference codon.
    pub reference_amino_acid: u8,
    /// Amino acid obtained by placing each forward-strand allele at the site.
    pub amino_acids: AlleleMap<u8>,
    /// Whether each allele preserves the reference amino acid.
    pub consequences: AlleleMap<Consequence>,
}

impl AlleleEffects {
    /// Number of synonymous alleles, including the reference base itself.
    pub fn synonymous_count(&self) -> usize {
        self.consequences
            .count(|consequence| *consequence == Consequence::Synonymous)
    }
}

/// Genomic site to annotate, together with the annotation written into it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Site {
    /// Contig identifier.
    pub contig: Arc<str>,
    /// 1-based position on the contig.
    pub position: u32,
    /// Coding classification.
    pub site_type: SiteType,
    /// Enclosing gene; `None` for non-coding and unannotatable sites.
    pub gene_id: Option<Arc<str>>,
    /// Reference codon, set whenever a complete codon could be read.
    pub codon: Option<CodonContext>,
    /// Translation outcomes, set for coding sites only.
    pub effects: Option<AlleleEffects>,
}

impl Site {
    /// Fresh, unannotated site.
    pub fn new(contig: impl Into<Arc<str>>, position: u32) -> Self {
        Self {
            contig: contig.into(),
            position,
            site_type: SiteType::NonCoding,
            gene_id: None,
            codon: None,
            effects: None,
        }
    }

    fn reset(&mut self) {
        self.site_type = SiteType::NonCoding;
        self.gene_id = None;
        self.codon = None;
        self.effects = None;
    }

    /// Order of the site relative to `gene`: `Less` when upstream, `Greater`
    /// when downstream, `Equal` when contained.
    fn locate(&self, gene: &Gene) -> Ordering {
        match self.contig.as_ref().cmp(gene.contig_id.as_ref()) {
            Ordering::Equal if self.position < gene.start => Ordering::Less,
            Ordering::Equal if self.position > gene.end => Ordering::Greater,
            other => other,
        }
    }

    fn sort_key(&self) -> (&str, u32) {
        (self.contig.as_ref(), self.position)
    }
}

/// Sweep behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// Reject sites that sort before the previously annotated one.
    pub check_order: bool,
}

impl SweepConfig {
    /// Enable or disable the sort-order check.
    pub fn with_order_check(mut self, check_order: bool) -> Self {
        self.check_order = check_order;
        self
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self { check_order: true }
    }
}

/// Locate the codon containing `position` inside `gene`.
///
/// Returns `None` when the codon would extend past the end of the coding
/// sequence.
pub fn fetch_reference_codon(position: u32, gene: &Gene) -> Option<CodonContext> {
    let offset = match gene.strand {
        Strand::Forward => position.checked_sub(gene.start)?,
        Strand::Reverse => gene.end.checked_sub(position)?,
    };
    let gene_pos = offset as usize;
    let codon_position = gene_pos % 3;
    let codon_start = gene_pos - codon_position;
    let codon = gene.coding_sequence.get(codon_start..codon_start + 3)?;
    Some(CodonContext {
        reference_codon: [codon[0], codon[1], codon[2]],
        codon_position: codon_position as u8,
    })
}

fn classify(codon: &CodonContext, strand: Strand) -> Result<AlleleEffects, AnnotatorError> {
    let reference_amino_acid = translate_codon(&codon.reference_codon)?;
    let mut amino_acids = [0u8; 4];
    for (slot, allele) in amino_acids.iter_mut().zip(Nucleotide::ALL) {
        let mutated = substitute_base(
            &codon.reference_codon,
            allele.as_ascii(),
            codon.codon_position as usize,
            strand,
        )?;
        *slot = translate_codon(&mutated)?;
    }
    let amino_acids = AlleleMap::from_fn(|allele| amino_acids[allele as usize]);
    let consequences = AlleleMap::from_fn(|allele| {
        if *amino_acids.get(allele) == reference_amino_acid {
            Consequence::Synonymous
        } else {
            Consequence::NonSynonymous
        }
    });
    Ok(AlleleEffects {
        reference_amino_acid,
        amino_acids,
        consequences,
    })
}

/// Single pass over a sorted gene list, annotating sites presented in the same
/// `(contig, position)` order.
///
/// The gene slice is borrowed immutably, so several sweeps (one per contig
/// partition) may share a [`super::GeneList`] across threads. A single sweep
/// must not be fed sites out of order.
#[derive(Debug, Clone)]
pub struct GeneSweep<'a> {
    genes: &'a [Gene],
    cursor: usize,
    previous: Option<(Arc<str>, u32)>,
    config: SweepConfig,
}

impl<'a> GeneSweep<'a> {
    /// Start a sweep at the first gene with the default configuration.
    pub fn new(genes: &'a [Gene]) -> Self {
        Self::with_config(genes, SweepConfig::default())
    }

    /// Start a sweep with an explicit configuration.
    pub fn with_config(genes: &'a [Gene], config: SweepConfig) -> Self {
        Self {
            genes,
            cursor: 0,
            previous: None,
            config,
        }
    }

    /// Index of the current candidate gene.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether every gene has been passed.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.genes.len()
    }

    /// Annotate `site` in place.
    ///
    /// Ambiguous or truncated reference codons are classified
    /// [`SiteType::NotAnnotated`]; they are not errors.
    pub fn annotate(&mut self, site: &mut Site) -> Result<(), AnnotatorError> {
        self.check_order(site)?;
        site.reset();

        let genes = self.genes;
        let gene = loop {
            let Some(gene) = genes.get(self.cursor) else {
                return Ok(());
            };
            match site.locate(gene) {
                Ordering::Less => return Ok(()),
                Ordering::Greater => {
                    self.cursor += 1;
                    trace!(cursor = self.cursor, passed = %gene.gene_id, "advanced gene cursor");
                }
                Ordering::Equal => break gene,
            }
        };

        let Some(codon) = fetch_reference_codon(site.position, gene) else {
            site.site_type = SiteType::NotAnnotated;
            return Ok(());
        };
        site.codon = Some(codon);
        if !is_canonical_codon(&codon.reference_codon) {
            site.site_type = SiteType::NotAnnotated;
            return Ok(());
        }

        let effects = classify(&codon, gene.strand)?;
        site.site_type = SiteType::Degenerate(effects.synonymous_count() as u8);
        site.gene_id = Some(Arc::clone(&gene.gene_id));
        site.effects = Some(effects);
        Ok(())
    }

    /// Annotate every site of `sites` in order.
    pub fn annotate_all<'s>(
        &mut self,
        sites: impl IntoIterator<Item = &'s mut Site>,
    ) -> Result<(), AnnotatorError> {
        for site in sites {
            self.annotate(site)?;
        }
        Ok(())
    }

    fn check_order(&mut self, site: &Site) -> Result<(), AnnotatorError> {
        if !self.config.check_order {
            return Ok(());
        }
        if let Some((contig, position)) = &self.previous {
            if site.sort_key() < (contig.as_ref(), *position) {
                return Err(AnnotatorError::OutOfOrderSite {
                    contig: Arc::clone(&site.contig),
                    position: site.position,
                    previous_contig: Arc::clone(contig),
                    previous_position: *position,
                });
            }
        }
        self.previous = Some((Arc::clone(&site.contig), site.position));
        Ok(())
    }
}
