//! Output sinks
//!
//! A sink receives a finished table. Relational storage lives outside this
//! crate; `JsonLinesSink` writes the same shape a store would receive: one
//! record per row, stamped with the scrape time.

use std::io::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{CellValue, Column, SinkError, Table};

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[_a-zA-Z]+[_a-zA-Z0-9]*$").expect("valid identifier regex"));

/// Column added by timestamped sinks
const DATE_COLUMN: &str = "date";

/// Check that a name can be used as a table or column identifier
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER_RE.is_match(name)
}

/// Destination for extracted tables
pub trait TableSink {
    /// Write every row of `table`, returning the number of rows written
    fn write_table(&mut self, table: &Table) -> Result<usize, SinkError>;
}

/// Fixed-width text, as produced by `Table`'s `Display`
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TableSink for TextSink<W> {
    fn write_table(&mut self, table: &Table) -> Result<usize, SinkError> {
        writeln!(self.writer, "{table}")?;
        self.writer.flush()?;
        Ok(table.len())
    }
}

/// One JSON object per row, keyed by column name plus a `date` field
pub struct JsonLinesSink<W: Write> {
    writer: W,
    date: DateTime<Utc>,
}

impl<W: Write> JsonLinesSink<W> {
    /// Sink stamping rows with the current time
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            date: Utc::now(),
        }
    }

    /// Use a fixed timestamp
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn check_names(table: &Table) -> Result<(), SinkError> {
        if !is_identifier(&table.name) {
            return Err(SinkError::InvalidIdentifier(table.name.clone()));
        }
        for column in table.columns() {
            if !is_identifier(&column.name) {
                return Err(SinkError::InvalidIdentifier(column.name.clone()));
            }
            if column.name == DATE_COLUMN {
                return Err(SinkError::ReservedColumn(column.name.clone()));
            }
        }
        Ok(())
    }
}

impl<W: Write> TableSink for JsonLinesSink<W> {
    fn write_table(&mut self, table: &Table) -> Result<usize, SinkError> {
        Self::check_names(table)?;

        let date = self.date.to_rfc3339_opts(SecondsFormat::Secs, true);
        for values in table.rows() {
            let record = RowRecord {
                date: &date,
                columns: table.columns(),
                values,
            };
            serde_json::to_writer(&mut self.writer, &record)?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;

        tracing::info!("Wrote {} rows of {}", table.len(), table.name);
        Ok(table.len())
    }
}

/// Row serialized as an ordered map
struct RowRecord<'a> {
    date: &'a str,
    columns: &'a [Column],
    values: &'a [CellValue],
}

impl Serialize for RowRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len() + 1))?;
        map.serialize_entry(DATE_COLUMN, self.date)?;
        for (column, value) in self.columns.iter().zip(self.values) {
            map.serialize_entry(&column.name, value)?;
        }
        map.end()
    }
}
