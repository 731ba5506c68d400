//! Variant site input through htslib.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use rust_htslib::bcf::{self, Read};
use tracing::debug;

use super::Site;

/// Read the `CHROM`/`POS` of every record in a VCF, bgzipped VCF or BCF file.
///
/// Sites keep file order; use [`sort_sites`] before sweeping.
pub fn read_sites<P: AsRef<Path>>(path: P) -> Result<Vec<Site>> {
    let path = path.as_ref();
    let mut reader = bcf::Reader::from_path(path)
        .with_context(|| format!("failed to open variant file {}", path.display()))?;

    // One shared allocation per contig name.
    let mut contigs: HashMap<u32, Arc<str>> = HashMap::new();
    let mut sites = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to read record {}", idx + 1))?;
        let rid = record
            .rid()
            .ok_or_else(|| anyhow!("record {} has no contig", idx + 1))?;
        let contig = match contigs.get(&rid) {
            Some(contig) => Arc::clone(contig),
            None => {
                let name = record.header().rid2name(rid)?;
                let contig: Arc<str> = Arc::from(String::from_utf8_lossy(name).as_ref());
                contigs.insert(rid, Arc::clone(&contig));
                contig
            }
        };
        let position = u32::try_from(record.pos() + 1)
            .with_context(|| format!("record {} has an invalid position", idx + 1))?;
        sites.push(Site::new(contig, position));
    }

    debug!(sites = sites.len(), contigs = contigs.len(), "read variant sites");
    Ok(sites)
}

/// Order sites by contig, then position: the order a sweep requires.
pub fn sort_sites(sites: &mut [Site]) {
    sites.sort_by(|a, b| {
        a.contig
            .as_ref()
            .cmp(b.contig.as_ref())
            .then(a.position.cmp(&b.position))
    });
}
