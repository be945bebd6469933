//! tabscrape - Main Entry Point
//!
//! Scrapes one HTML table and prints it, as fixed-width text or JSON lines.

mod args;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tabscrape_table::{JsonLinesSink, Scraper, ScraperConfig, TableSink, TextSink, presets};
use tracing_subscriber::EnvFilter;

use args::{Args, OutputFormat, Preset};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the table
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let scraper = Scraper::new(config).context("invalid scraper definition")?;

    let table = match &args.file {
        Some(path) => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            scraper.scrape_html(&html)?
        }
        None => scraper
            .scrape()
            .with_context(|| format!("failed to scrape {}", scraper.config().url))?,
    };

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let written = match args.format {
        OutputFormat::Table => TextSink::new(writer).write_table(&table)?,
        OutputFormat::Json => JsonLinesSink::new(writer).write_table(&table)?,
    };
    tracing::info!("Successfully extracted {} rows", written);

    Ok(())
}

/// Resolve the scraper definition from a preset or a JSON file, then
/// apply command-line overrides
fn load_config(args: &Args) -> Result<ScraperConfig> {
    let mut config = match (&args.preset, &args.config) {
        (Some(Preset::Covid19), _) => presets::covid19(),
        (None, Some(path)) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid scraper definition in {}", path.display()))?
        }
        (None, None) => anyhow::bail!("either --preset or --config is required"),
    };

    if let Some(url) = &args.url {
        config.url = url.clone();
    }
    if let Some(order) = &args.columns {
        config.column_order = Some(order.clone());
    }
    if args.continue_on_error {
        config.continue_on_error = true;
    }
    Ok(config)
}
