//! Table model, assembly, column reordering and text rendering

use std::fmt;

use serde::Serialize;

use crate::{ColumnDef, ColumnType, RawRow, RearrangeError, RowError, coerce_row};

/// A typed cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl CellValue {
    /// Type tag of this value
    pub fn column_type(&self) -> ColumnType {
        match self {
            CellValue::Text(_) => ColumnType::String,
            CellValue::Integer(_) => ColumnType::Integer,
            CellValue::Float(_) => ColumnType::Float,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.pad(s),
            CellValue::Integer(n) => fmt::Display::fmt(n, f),
            CellValue::Float(x) => fmt::Display::fmt(x, f),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Integer(n)
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        CellValue::Float(x)
    }
}

/// Output column metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ColumnType,
}

/// Extracted table.
///
/// Every row holds exactly one value per column, typed as the column declares.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub name: String,
    columns: Vec<Column>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table from body rows.
    ///
    /// With `continue_on_error` a row that fails coercion is logged and
    /// dropped; otherwise the first failure is returned.
    pub fn assemble(
        name: &str,
        defs: &[ColumnDef],
        body: &[RawRow],
        continue_on_error: bool,
    ) -> Result<Table, RowError> {
        let columns = defs
            .iter()
            .filter(|def| !def.skip)
            .map(|def| Column {
                name: def.name.clone(),
                ty: def.ty,
            })
            .collect();

        let mut rows = Vec::with_capacity(body.len());
        for (index, raw) in body.iter().enumerate() {
            match coerce_row(raw, defs) {
                Ok(row) => rows.push(row),
                Err(err) if continue_on_error => {
                    tracing::warn!("Dropping body row {}: {}", index, err);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(Table {
            name: name.to_string(),
            columns,
            rows,
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// New table with columns in `target` order.
    ///
    /// `target` must hold the same names as the current columns, counting
    /// duplicates.
    pub fn rearrange_columns<S: AsRef<str>>(&self, target: &[S]) -> Result<Table, RearrangeError> {
        let current = self.column_names();
        let target: Vec<&str> = target.iter().map(AsRef::as_ref).collect();

        let mut sorted_current = current.clone();
        sorted_current.sort_unstable();
        let mut sorted_target = target.clone();
        sorted_target.sort_unstable();
        if sorted_current != sorted_target {
            return Err(RearrangeError::ColumnSetMismatch {
                target: target.iter().map(|s| s.to_string()).collect(),
                current: current.iter().map(|s| s.to_string()).collect(),
            });
        }

        // Every target name is present, so position() always finds it.
        let order: Vec<usize> = target
            .iter()
            .filter_map(|name| current.iter().position(|c| c == name))
            .collect();

        Ok(Table {
            name: self.name.clone(),
            columns: order.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| order.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        })
    }

    /// Display width per column: longest of the name and every rendered cell
    fn widths(&self, rendered: &[Vec<String>]) -> Vec<usize> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.name.chars().count()).collect();
        for row in rendered {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

/// Right-justified fixed-width rendering, header line first
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();
        let widths = self.widths(&rendered);

        let header = self.columns.iter().map(|c| c.name.as_str());
        write_line(f, header, &widths)?;
        for row in &rendered {
            f.write_str("\n")?;
            write_line(f, row.iter().map(String::as_str), &widths)?;
        }
        Ok(())
    }
}

fn write_line<'a>(
    f: &mut fmt::Formatter<'_>,
    fields: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> fmt::Result {
    for (i, (field, width)) in fields.zip(widths).enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{field:>width$}")?;
    }
    Ok(())
}
