#[path = "common/mod.rs"]
mod common;

use std::collections::HashSet;

use blake3::hash;
use common::{fixture_genes, fixture_sites};
use sitefold::genomics::render_annotations;
use sitefold::GeneSweep;

#[test]
fn sweep_output_is_deterministic() {
    let genes = fixture_genes();

    let mut fingerprints = HashSet::new();
    for _ in 0..5 {
        let mut sites = fixture_sites();
        let mut sweep = GeneSweep::new(genes.as_slice());
        sweep
            .annotate_all(sites.iter_mut())
            .expect("annotation succeeds");
        let table = render_annotations(&sites).expect("rendering succeeds");
        fingerprints.insert(hash(table.as_bytes()));
    }

    assert_eq!(fingerprints.len(), 1, "outputs diverged across runs");
}

#[test]
fn re_annotating_a_site_replaces_previous_fields() {
    let genes = fixture_genes();
    let mut site = sitefold::Site::new("c1", 10);
    GeneSweep::new(genes.as_slice()).annotate(&mut site).unwrap();
    assert!(site.effects.is_some());

    site.position = 20;
    GeneSweep::new(genes.as_slice()).annotate(&mut site).unwrap();
    assert_eq!(site.site_type, sitefold::SiteType::NonCoding);
    assert!(site.effects.is_none());
    assert!(site.codon.is_none());
}
