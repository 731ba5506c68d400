#[path = "common/mod.rs"]
mod common;
use common::{assert_snapshot, fixture_genes, fixture_sites};
use sitefold::genomics::render_annotations;
use sitefold::GeneSweep;

#[test]
fn render_annotations_matches_golden() {
    let genes = fixture_genes();
    let mut sites = fixture_sites();
    let mut sweep = GeneSweep::new(genes.as_slice());
    sweep
        .annotate_all(sites.iter_mut())
        .expect("fixture sites are sorted");

    let actual = render_annotations(&sites).expect("table rendering should succeed");
    assert_snapshot("annotations/simple.tsv", &actual);
}
