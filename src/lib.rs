//! # Site degeneracy annotation
//!
//! Classifies genomic sites against a genome's protein-coding gene models.
//! Each site is either non-coding (`NC`), inside a gene with an ambiguous
//! reference codon (`NA`), or an N-fold degenerate coding site (`1D`..`4D`),
//! in which case every possible allele is labelled synonymous or
//! non-synonymous.
//!
//! ## Core Algorithm
//!
//! Genes and sites are both sorted by `(contig, position)`. A [`GeneSweep`]
//! walks the two lists together with a single forward-only cursor, so a stream
//! of `s` sites over `g` genes costs `O(s + g)`.
//!
//! ## Usage Example
//!
//! ```
//! use sitefold::{Gene, GeneList, GeneSweep, Site, SiteType, Strand};
//!
//! let genes = GeneList::new(vec![
//!     Gene::new("g1", "c1", 10, 18, Strand::Forward, b"ATGAAATAA".to_vec()).unwrap(),
//! ]);
//! let mut sweep = GeneSweep::new(genes.as_slice());
//!
//! let mut site = Site::new("c1", 15);
//! sweep.annotate(&mut site).unwrap();
//! assert_eq!(site.site_type, SiteType::Degenerate(2));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod genomics; // Gene models, codon logic and the sweep

// Re-exports for convenience
pub use genomics::{
    AlleleEffects, AnnotatorError, Consequence, Gene, GeneError, GeneList, GeneSweep,
    Nucleotide, SequenceError, Site, SiteType, Strand, SweepConfig,
};
