//! # gemextract
//!
//! Extract the butyrate pathway (or any keyword-defined pathway) from a genome-scale
//! metabolic model in COBRA JSON format.
//!
//! ```bash
//! gemextract --model Human-GEM.json --out-dir results
//! gemextract --model Human-GEM.json --config propionate.json --processes 2 -v
//! ```
//!
//! Writes `pathway_genes.csv`, `pathway_reactions.csv` and `pathway_summary.json` into the
//! output directory.
mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gemextract_core::configuration::{Configuration, PathwayConfiguration};
use gemextract_core::io::tabular::{write_records, write_summary};
use gemextract_core::metabolic_model::model::Model;
use gemextract_core::pathway::pipeline::extract_pathway;
use gemextract_core::report::{gene_evidence_rows, reaction_detail_rows, summary};

const GENES_FILE: &str = "pathway_genes.csv";
const REACTIONS_FILE: &str = "pathway_reactions.csv";
const SUMMARY_FILE: &str = "pathway_summary.json";

#[derive(Parser)]
#[command(name = "gemextract")]
#[command(about = "Extract a metabolic pathway and its gene evidence from a COBRA model", long_about = None)]
#[command(version)]
struct Cli {
    /// Model in COBRA JSON format
    #[arg(short, long)]
    model: PathBuf,

    /// Pathway configuration JSON (default: butyrate metabolism)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the reports are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Number of genes shown in the console preview
    #[arg(long)]
    preview: Option<usize>,

    /// Worker threads for verification and evidence extraction
    #[arg(short, long)]
    processes: Option<u32>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "gemextract=debug,gemextract_core=debug"
    } else {
        "gemextract=info,gemextract_core=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match &cli.config {
        Some(path) => PathwayConfiguration::read_json(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => PathwayConfiguration::default(),
    };
    if let Some(preview) = cli.preview {
        config.preview_size = preview;
    }
    if let Some(processes) = cli.processes {
        Configuration::set_processes(processes);
    }

    let model = Model::read_json(&cli.model)
        .with_context(|| format!("Failed to load model {}", cli.model.display()))?;
    info!(
        reactions = model.reactions.len(),
        genes = model.genes.len(),
        metabolites = model.metabolites.len(),
        "model loaded"
    );

    let extraction = extract_pathway(&model, &config).context("Pathway extraction failed")?;

    print!("{}", render::phase_breakdown(&extraction)?);
    print!("{}", render::compartments(&extraction, &config)?);
    print!("{}", render::gene_preview(&extraction, config.preview_size)?);
    print!("{}", render::diagnostics(&extraction)?);

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create {}", cli.out_dir.display()))?;
    let genes_path = cli.out_dir.join(GENES_FILE);
    write_records(&genes_path, &gene_evidence_rows(&extraction, &config))
        .with_context(|| format!("Failed to write {}", genes_path.display()))?;
    let reactions_path = cli.out_dir.join(REACTIONS_FILE);
    write_records(
        &reactions_path,
        &reaction_detail_rows(&model, &extraction, &config),
    )
    .with_context(|| format!("Failed to write {}", reactions_path.display()))?;
    let summary_path = cli.out_dir.join(SUMMARY_FILE);
    write_summary(&summary_path, &summary(&extraction))
        .with_context(|| format!("Failed to write {}", summary_path.display()))?;

    println!("\nReports written to {}", cli.out_dir.display());
    Ok(())
}
