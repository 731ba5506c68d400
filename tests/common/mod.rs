#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use sitefold::{Gene, GeneList, Site, Strand};

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("SITEFOLD_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set SITEFOLD_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}

/// Three genes on `c1`: a forward gene, a reverse gene and a gene with an
/// ambiguous base.
pub fn fixture_genes() -> GeneList {
    GeneList::new(vec![
        Gene::new("g2", "c1", 30, 38, Strand::Reverse, b"ATGGCTTAA".to_vec()).unwrap(),
        Gene::new("g1", "c1", 10, 18, Strand::Forward, b"ATGAAATAA".to_vec()).unwrap(),
        Gene::new("g3", "c1", 50, 52, Strand::Forward, b"ANG".to_vec()).unwrap(),
    ])
}

/// Sorted sites covering every classification of [`fixture_genes`].
pub fn fixture_sites() -> Vec<Site> {
    [
        ("c0", 5),
        ("c1", 10),
        ("c1", 15),
        ("c1", 20),
        ("c1", 33),
        ("c1", 38),
        ("c1", 51),
        ("c2", 1),
    ]
    .into_iter()
    .map(|(contig, position)| Site::new(contig, position))
    .collect()
}
