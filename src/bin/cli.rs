//! Racechart CLI - extract race result charts to CSV

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use racechart::data::{extract_page_texts, write_records, ChartExtractor};
use racechart::RaceResultRecord;

/// Default directory holding source documents
const DEFAULT_DATA_DIR: &str = "data";
/// Default directory for extracted CSV files
const DEFAULT_OUTPUT_DIR: &str = "outputs";

#[derive(Parser)]
#[command(name = "racechart")]
#[command(author, version, about = "Extract race results from chart PDFs to CSV", long_about = None)]
struct Cli {
    /// Source document file name inside the data directory
    source: String,

    /// Path to the source data directory
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Path to the output directory
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("{}", "Racechart v0.2.0".cyan().bold());
    println!();

    let source_path = cli.data_dir.join(&cli.source);
    // Destination: same file name, .csv extension, inside the output dir
    let output_path = cli.output_dir.join(&cli.source).with_extension("csv");

    println!("{}: {:?}", "Extracting".green(), source_path);

    let pages = extract_page_texts(&source_path)
        .with_context(|| format!("Failed to read document {:?}", source_path))?;

    let pb = ProgressBar::new(pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let extractor = ChartExtractor::new();
    let mut records: Vec<RaceResultRecord> = Vec::new();
    for page in &pages {
        records.extend(extractor.extract_page(page));
        pb.inc(1);
    }
    pb.finish_and_clear();

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", cli.output_dir))?;

    write_records(&records, &output_path)
        .with_context(|| format!("Failed to write {:?}", output_path))?;

    println!("Saved {} rows to {:?}", records.len(), output_path);

    Ok(())
}
