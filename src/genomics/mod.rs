//! Gene models, codon primitives and the site annotation sweep.
//!
//! The core is [`GeneSweep`]; the remaining modules load its inputs (genome,
//! feature table, variant sites) and format its output.

mod annotator;
mod gene;
mod types;

pub mod fasta;
pub mod features;
pub mod sequence;
pub mod table;
pub mod vcf;

pub use annotator::{
    fetch_reference_codon, AlleleEffects, AnnotatorError, CodonContext, GeneSweep, Site,
    SweepConfig,
};
pub use fasta::{read_fasta, read_fasta_file, Genome};
pub use features::{read_features, read_features_file};
pub use gene::{Gene, GeneError, GeneList};
pub use sequence::{
    complement, reverse_complement, substitute_base, translate_codon, SequenceError, STOP,
};
pub use table::{render_annotations, write_annotations};
pub use types::{AlleleMap, Consequence, Nucleotide, SiteType, Strand};
pub use vcf::{read_sites, sort_sites};
