//! tabscrape table extraction
//!
//! Turns an HTML table into a typed [`Table`] following a declarative
//! [`ScraperConfig`]:
//!
//! ```text
//! document -> container (selector) -> raw rows -> header check
//!          -> body rows -> typed cells -> Table -> optional column reorder
//! ```
//!
//! # Example
//! ```rust,ignore
//! use tabscrape_table::{ColumnDef, ColumnType, Scraper, ScraperConfig};
//!
//! let config = ScraperConfig {
//!     container_selector: "table.wikitable".into(),
//!     columns: vec![
//!         ColumnDef::new("country", ColumnType::String),
//!         ColumnDef::new("cases", ColumnType::Integer).zero_values(["-"]),
//!     ],
//!     header_row_count: 1,
//!     ..Default::default()
//! };
//! let table = Scraper::new(config)?.scrape_html(html)?;
//! println!("{table}");
//! ```

mod coerce;
mod config;
mod error;
mod extract;
mod header;
pub mod presets;
mod scraper;
mod sink;
mod table;

pub use coerce::{coerce_cell, coerce_row};
pub use config::{ColumnDef, ColumnType, ScraperConfig};
pub use error::{ConfigError, RearrangeError, RowError, ScrapeError, SinkError, StructureError};
pub use extract::{extract_row, extract_rows, locate_container};
pub use header::{body_rows, validate_header};
pub use scraper::Scraper;
pub use sink::{JsonLinesSink, TableSink, TextSink, is_identifier};
pub use table::{CellValue, Column, Table};

/// One table row as trimmed cell texts, `th` cells before `td` cells
pub type RawRow = Vec<String>;
