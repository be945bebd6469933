//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "tabscrape", version, about = "Extract a typed table from an HTML page")]
#[command(group(ArgGroup::new("source").required(true).args(["preset", "config"])))]
pub struct Args {
    /// Built-in scraper definition
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Scraper definition as JSON
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the source URL
    #[arg(long)]
    pub url: Option<String>,

    /// Read HTML from a saved file instead of fetching
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Reorder output columns, comma separated
    #[arg(long, value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Drop malformed rows instead of failing
    #[arg(long)]
    pub continue_on_error: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Wikipedia COVID-19 cases by country and territory
    Covid19,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Right-aligned fixed-width text
    Table,
    /// One JSON object per row
    Json,
}
