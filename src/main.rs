use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sitefold::genomics::{
    read_fasta_file, read_features_file, read_sites, sort_sites, write_annotations,
};
use sitefold::{GeneSweep, SweepConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sitefold", about = "Annotate variant sites with coding degeneracy")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify each site as non-coding or N-fold degenerate and label every
    /// allele synonymous or non-synonymous.
    Annotate {
        /// Reference genome FASTA (optionally gzip-compressed).
        #[arg(long)]
        genome: PathBuf,
        /// Gene feature table (optionally gzip-compressed).
        #[arg(long)]
        features: PathBuf,
        /// Variant sites (VCF, bgzipped VCF or BCF).
        #[arg(long)]
        sites: PathBuf,
        /// Output table (default: stdout).
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Skip the sort-order check on the site stream.
        #[arg(long)]
        no_order_check: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Annotate {
            genome,
            features,
            sites,
            output,
            no_order_check,
        } => run_annotate(genome, features, sites, output, !no_order_check)?,
    }

    Ok(())
}

fn run_annotate(
    genome_path: PathBuf,
    features_path: PathBuf,
    sites_path: PathBuf,
    output_path: Option<PathBuf>,
    check_order: bool,
) -> Result<()> {
    let genome = read_fasta_file(&genome_path)?;
    info!(contigs = genome.len(), "loaded genome");

    let genes = read_features_file(&features_path, &genome)?;
    info!(genes = genes.len(), "loaded protein-coding genes");

    let mut sites = read_sites(&sites_path)?;
    sort_sites(&mut sites);
    info!(sites = sites.len(), "loaded sites");

    let config = SweepConfig::default().with_order_check(check_order);
    let mut sweep = GeneSweep::with_config(genes.as_slice(), config);
    sweep
        .annotate_all(sites.iter_mut())
        .context("annotation failed")?;

    let mut tally: BTreeMap<String, usize> = BTreeMap::new();
    for site in &sites {
        *tally.entry(site.site_type.to_string()).or_default() += 1;
    }
    for (site_type, count) in &tally {
        info!(%site_type, count, "annotated sites");
    }

    let mut writer: Box<dyn Write> = match &output_path {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("failed to create output file {}", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_annotations(&mut writer, &sites).context("failed to write annotations")?;

    Ok(())
}
