//! Tab-separated rendering of annotated sites.

use std::fmt::Display;
use std::io::Write;

use anyhow::{anyhow, Result};

use super::{AlleleMap, Site};

const HEADER: &str =
    "contig\tposition\tsite_type\tgene_id\tref_codon\tcodon_pos\tref_aa\tamino_acids\tsnp_types\n";

fn per_allele<T>(map: &AlleleMap<T>, render: impl Fn(&T) -> String) -> String {
    map.iter()
        .map(|(allele, value)| format!("{allele}:{}", render(value)))
        .collect::<Vec<_>>()
        .join(",")
}

fn or_empty<T: Display>(value: Option<T>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}

/// Write annotated sites as a tab-separated table.
pub fn write_annotations<W: Write>(writer: &mut W, sites: &[Site]) -> Result<()> {
    writer.write_all(HEADER.as_bytes())?;

    for site in sites {
        let codon = site.codon.as_ref();
        let effects = site.effects.as_ref();
        let line = format!(
            "{contig}\t{pos}\t{site_type}\t{gene}\t{ref_codon}\t{codon_pos}\t{ref_aa}\t{aas}\t{snps}\n",
            contig = site.contig,
            pos = site.position,
            site_type = site.site_type,
            gene = or_empty(site.gene_id.as_deref()),
            ref_codon = or_empty(codon.map(|c| String::from_utf8_lossy(&c.reference_codon).into_owned())),
            codon_pos = or_empty(codon.map(|c| c.codon_position)),
            ref_aa = or_empty(effects.map(|e| e.reference_amino_acid as char)),
            aas = or_empty(effects.map(|e| per_allele(&e.amino_acids, |aa| (*aa as char).to_string()))),
            snps = or_empty(effects.map(|e| per_allele(&e.consequences, ToString::to_string))),
        );
        writer.write_all(line.as_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

/// Render annotated sites into a table string.
pub fn render_annotations(sites: &[Site]) -> Result<String> {
    let mut buffer = Vec::new();
    write_annotations(&mut buffer, sites)?;
    String::from_utf8(buffer).map_err(|_| anyhow!("rendered table is not valid UTF-8"))
}
