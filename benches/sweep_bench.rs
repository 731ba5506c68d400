//! Sweep throughput benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sitefold::{Gene, GeneList, GeneSweep, Site, Strand};

const CODONS: [&[u8; 3]; 8] = [b"ATG", b"GCT", b"AAA", b"CTG", b"GGC", b"TCA", b"CGT", b"TGG"];

/// `count` genes of 300 bp separated by 100 bp gaps on one contig.
fn synthetic_genes(count: u32) -> GeneList {
    let genes = (0..count)
        .map(|idx| {
            let start = idx * 400 + 1;
            let sequence: Vec<u8> = (0..100)
                .flat_map(|codon| CODONS[(codon + idx as usize) % CODONS.len()].iter().copied())
                .collect();
            let strand = if idx % 2 == 0 { Strand::Forward } else { Strand::Reverse };
            Gene::new(format!("gene{idx}"), "chr1", start, start + 299, strand, sequence)
                .expect("valid synthetic gene")
        })
        .collect();
    GeneList::new(genes)
}

fn benchmark_sweep(c: &mut Criterion) {
    let genes = synthetic_genes(1_000);
    let sites: Vec<Site> = (1..400_000).step_by(4).map(|pos| Site::new("chr1", pos)).collect();

    c.bench_function("sweep_100k_sites_1k_genes", |b| {
        b.iter(|| {
            let mut batch = sites.clone();
            let mut sweep = GeneSweep::new(genes.as_slice());
            sweep.annotate_all(batch.iter_mut()).expect("sorted sites");
            black_box(batch);
        });
    });
}

criterion_group!(benches, benchmark_sweep);
criterion_main!(benches);
