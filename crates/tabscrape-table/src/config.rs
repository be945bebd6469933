//! Scraper configuration
//!
//! Static, read-only definitions: built once per scraper and never mutated
//! during a scrape. Serde support lets a definition live in a JSON file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tabscrape_net::Url;
use tabscrape_select::parse_selectors;

use crate::{CellValue, ConfigError};

/// Declared type of an output column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ColumnType {
    #[default]
    String,
    Integer,
    Float,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
        }
    }

    /// Value produced for a zero-value sentinel
    pub fn zero(self) -> CellValue {
        match self {
            ColumnType::String => CellValue::Text(String::new()),
            ColumnType::Integer => CellValue::Integer(0),
            ColumnType::Float => CellValue::Float(0.0),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" | "text" => Ok(ColumnType::String),
            "integer" | "int" => Ok(ColumnType::Integer),
            "float" => Ok(ColumnType::Float),
            _ => Err(ConfigError::UnknownType(s.to_string())),
        }
    }
}

impl TryFrom<String> for ColumnType {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// How one source column maps to an output column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnDef {
    /// Consume the source position without producing an output column
    pub skip: bool,
    /// Output column name
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ColumnType,
    /// Raw texts mapped to the type's zero value, e.g. `-` for numbers
    pub zero_values: Vec<String>,
    /// Cut the text at the first occurrence, e.g. `[` for footnote marks
    pub truncate_from: Option<String>,
    /// Keep surrounding whitespace
    pub no_trim: bool,
}

impl ColumnDef {
    pub fn new(name: &str, ty: ColumnType) -> Self {
        Self {
            name: name.to_string(),
            ty,
            ..Self::default()
        }
    }

    /// A source column that is consumed but not output
    pub fn skipped() -> Self {
        Self {
            skip: true,
            ..Self::default()
        }
    }

    pub fn zero_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.zero_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn truncate_from(mut self, marker: &str) -> Self {
        self.truncate_from = Some(marker.to_string());
        self
    }

    pub fn no_trim(mut self) -> Self {
        self.no_trim = true;
        self
    }
}

/// Full definition of one table scrape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Source page
    pub url: String,
    /// Compound selector locating the table container
    pub container_selector: String,
    /// One definition per source cell, in source order
    pub columns: Vec<ColumnDef>,
    /// Row checked against `header_column_names`
    pub header_row_index: usize,
    /// Expected header texts; empty disables the header check
    pub header_column_names: Vec<String>,
    pub header_row_count: usize,
    pub footer_row_count: usize,
    /// Drop malformed body rows instead of failing
    pub continue_on_error: bool,
    /// Name of the produced table
    pub table_name: String,
    /// Final column order, by output name
    pub column_order: Option<Vec<String>>,
}

impl ScraperConfig {
    /// Check everything that does not need the document
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_selectors(&self.container_selector)?;

        if !self.header_column_names.is_empty() && self.header_row_index >= self.header_row_count {
            return Err(ConfigError::HeaderIndexOutOfRange {
                index: self.header_row_index,
                count: self.header_row_count,
            });
        }
        Ok(())
    }

    /// Parse the source URL; only needed when fetching
    pub fn source_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.url).map_err(|e| ConfigError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })
    }

    /// Target column order, if one is configured
    pub fn target_order(&self) -> Option<&[String]> {
        self.column_order.as_deref().filter(|order| !order.is_empty())
    }
}
