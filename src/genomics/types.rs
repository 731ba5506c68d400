use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Canonical DNA base on the forward genomic strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Nucleotide {
    /// Adenine.
    A = 0,
    /// Thymine.
    T = 1,
    /// Cytosine.
    C = 2,
    /// Guanine.
    G = 3,
}

impl Nucleotide {
    /// Alleles in the order every per-allele table is laid out.
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::T, Nucleotide::C, Nucleotide::G];

    /// Parse an uppercase ASCII base. Lowercase and ambiguity codes are rejected.
    pub fn from_ascii(base: u8) -> Option<Self> {
        match base {
            b'A' => Some(Nucleotide::A),
            b'T' => Some(Nucleotide::T),
            b'C' => Some(Nucleotide::C),
            b'G' => Some(Nucleotide::G),
            _ => None,
        }
    }

    /// ASCII representation of the base.
    pub fn as_ascii(self) -> u8 {
        match self {
            Nucleotide::A => b'A',
            Nucleotide::T => b'T',
            Nucleotide::C => b'C',
            Nucleotide::G => b'G',
        }
    }

    /// Watson-Crick partner.
    pub fn complement(self) -> Self {
        match self {
            Nucleotide::A => Nucleotide::T,
            Nucleotide::T => Nucleotide::A,
            Nucleotide::C => Nucleotide::G,
            Nucleotide::G => Nucleotide::C,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ascii() as char)
    }
}

/// Genomic strand a gene is translated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Strand {
    /// `+`
    Forward,
    /// `-`
    Reverse,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => f.write_str("+"),
            Strand::Reverse => f.write_str("-"),
        }
    }
}

/// Fixed map from each of the four alleles to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AlleleMap<T> {
    values: [T; 4],
}

impl<T> AlleleMap<T> {
    /// Build the map by evaluating `f` once per allele, in [`Nucleotide::ALL`] order.
    pub fn from_fn(f: impl FnMut(Nucleotide) -> T) -> Self {
        Self {
            values: Nucleotide::ALL.map(f),
        }
    }

    /// Value recorded for `allele`.
    pub fn get(&self, allele: Nucleotide) -> &T {
        &self.values[allele.index()]
    }

    /// Iterate `(allele, value)` pairs in [`Nucleotide::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Nucleotide, &T)> + '_ {
        Nucleotide::ALL.into_iter().zip(self.values.iter())
    }

    /// Number of alleles whose value satisfies `pred`.
    pub fn count(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.values.iter().filter(|value| pred(value)).count()
    }
}

/// Effect of substituting an allele on the encoded amino acid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Consequence {
    /// Amino acid unchanged.
    Synonymous,
    /// Amino acid (or stop) changed.
    NonSynonymous,
}

impl fmt::Display for Consequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Consequence::Synonymous => f.write_str("SYN"),
            Consequence::NonSynonymous => f.write_str("NS"),
        }
    }
}

/// Coding context assigned to a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SiteType {
    /// Outside every gene.
    NonCoding,
    /// Inside a gene whose reference codon could not be translated.
    NotAnnotated,
    /// Coding site; the payload is the number of synonymous alleles (1..=4).
    Degenerate(u8),
}

impl SiteType {
    /// Degeneracy fold for coding sites.
    pub fn fold(self) -> Option<u8> {
        match self {
            SiteType::Degenerate(fold) => Some(fold),
            _ => None,
        }
    }

    /// Whether the site was classified inside a translated codon.
    pub fn is_coding(self) -> bool {
        matches!(self, SiteType::Degenerate(_))
    }
}

impl Default for SiteType {
    fn default() -> Self {
        SiteType::NonCoding
    }
}

impl fmt::Display for SiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteType::NonCoding => f.write_str("NC"),
            SiteType::NotAnnotated => f.write_str("NA"),
            SiteType::Degenerate(fold) => write!(f, "{fold}D"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allele_map_preserves_canonical_order() {
        let map = AlleleMap::from_fn(|allele| allele.as_ascii());
        let order: Vec<u8> = map.iter().map(|(_, &base)| base).collect();
        assert_eq!(order, b"ATCG".to_vec());
        assert_eq!(*map.get(Nucleotide::G), b'G');
    }

    #[test]
    fn site_type_labels() {
        assert_eq!(SiteType::NonCoding.to_string(), "NC");
        assert_eq!(SiteType::NotAnnotated.to_string(), "NA");
        assert_eq!(SiteType::Degenerate(4).to_string(), "4D");
        assert_eq!(SiteType::Degenerate(2).fold(), Some(2));
        assert_eq!(SiteType::NotAnnotated.fold(), None);
    }

    #[test]
    fn nucleotide_parsing_is_strict() {
        assert_eq!(Nucleotide::from_ascii(b'G'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_ascii(b'g'), None);
        assert_eq!(Nucleotide::from_ascii(b'N'), None);
        assert_eq!(Nucleotide::C.complement(), Nucleotide::G);
    }
}
