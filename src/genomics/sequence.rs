//! Nucleotide and codon primitives: complementing, translation through the
//! standard genetic code, and strand-aware single-base substitution.

use thiserror::Error;

use super::{Nucleotide, Strand};

/// Amino acid symbol used for the three stop codons.
pub const STOP: u8 = b'_';

/// Standard genetic code (NCBI table 1) indexed by `16*b0 + 4*b1 + b2` with
/// bases ranked T, C, A, G.
const CODON_TABLE: &[u8; 64] =
    b"FFLLSSSSYY__CC_WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// Errors raised by codon-level operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// The codon is not one of the 64 uppercase ACGT triplets.
    #[error("unknown codon '{0}'")]
    UnknownCodon(String),
    /// Codon offsets are 0, 1 or 2.
    #[error("codon position {0} is outside 0..=2")]
    InvalidCodonPosition(usize),
    /// Alleles are restricted to A, T, C and G.
    #[error("invalid allele '{0}'")]
    InvalidAllele(char),
}

/// Watson-Crick complement of `A/T/G/C`; any other byte is returned unchanged.
#[inline]
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        other => other,
    }
}

/// Reverse the sequence and complement every base.
pub fn reverse_complement(sequence: &[u8]) -> Vec<u8> {
    sequence.iter().rev().map(|&base| complement(base)).collect()
}

/// True when every base of `codon` is one of A, T, C, G.
pub fn is_canonical_codon(codon: &[u8]) -> bool {
    codon.iter().all(|&base| Nucleotide::from_ascii(base).is_some())
}

fn table_rank(base: u8) -> Option<usize> {
    match base {
        b'T' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

/// Translate an uppercase DNA codon to its one-letter amino acid, [`STOP`] for
/// `TAA`, `TAG` and `TGA`.
pub fn translate_codon(codon: &[u8]) -> Result<u8, SequenceError> {
    let unknown = || SequenceError::UnknownCodon(String::from_utf8_lossy(codon).into_owned());
    let [b0, b1, b2] = codon else {
        return Err(unknown());
    };
    match (table_rank(*b0), table_rank(*b1), table_rank(*b2)) {
        (Some(r0), Some(r1), Some(r2)) => Ok(CODON_TABLE[16 * r0 + 4 * r1 + r2]),
        _ => Err(unknown()),
    }
}

/// Copy of `codon` with the base at `position` replaced by `allele`.
///
/// `allele` is always given on the forward genomic strand while `codon` is in
/// coding orientation, so on the reverse strand the allele is complemented
/// before it is written.
pub fn substitute_base(
    codon: &[u8; 3],
    allele: u8,
    position: usize,
    strand: Strand,
) -> Result<[u8; 3], SequenceError> {
    if position > 2 {
        return Err(SequenceError::InvalidCodonPosition(position));
    }
    let allele =
        Nucleotide::from_ascii(allele).ok_or(SequenceError::InvalidAllele(allele as char))?;
    let base = match strand {
        Strand::Forward => allele,
        Strand::Reverse => allele.complement(),
    };
    let mut substituted = *codon;
    substituted[position] = base.as_ascii();
    Ok(substituted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(b"ATG", b'M' ; "start")]
    #[test_case(b"TAA", STOP ; "ochre")]
    #[test_case(b"TAG", STOP ; "amber")]
    #[test_case(b"TGA", STOP ; "opal")]
    #[test_case(b"TGG", b'W' ; "tryptophan")]
    #[test_case(b"ATA", b'I' ; "isoleucine")]
    #[test_case(b"AGA", b'R' ; "arginine six fold")]
    #[test_case(b"GGT", b'G' ; "glycine")]
    #[test_case(b"CAC", b'H' ; "histidine")]
    fn translates_standard_code(codon: &[u8; 3], expected: u8) {
        assert_eq!(translate_codon(codon), Ok(expected));
    }

    #[test_case(b"ANG" ; "ambiguous base")]
    #[test_case(b"atg" ; "lowercase")]
    #[test_case(b"AT" ; "too short")]
    #[test_case(b"ATGA" ; "too long")]
    fn rejects_unknown_codons(codon: &[u8]) {
        assert!(matches!(
            translate_codon(codon),
            Err(SequenceError::UnknownCodon(_))
        ));
    }

    #[test]
    fn complement_passes_through_non_acgt() {
        assert_eq!(complement(b'A'), b'T');
        assert_eq!(complement(b'N'), b'N');
        assert_eq!(complement(b'-'), b'-');
        assert_eq!(reverse_complement(b"AACGTN"), b"NACGTT".to_vec());
    }

    #[test]
    fn substitution_complements_on_reverse_strand() {
        assert_eq!(substitute_base(b"ATG", b'G', 0, Strand::Forward), Ok(*b"GTG"));
        assert_eq!(substitute_base(b"ATG", b'G', 0, Strand::Reverse), Ok(*b"CTG"));
        assert_eq!(substitute_base(b"ATG", b'T', 2, Strand::Forward), Ok(*b"ATT"));
    }

    #[test]
    fn substitution_rejects_bad_arguments() {
        assert_eq!(
            substitute_base(b"ATG", b'A', 3, Strand::Forward),
            Err(SequenceError::InvalidCodonPosition(3))
        );
        assert_eq!(
            substitute_base(b"ATG", b'N', 1, Strand::Forward),
            Err(SequenceError::InvalidAllele('N'))
        );
    }
}
