//! Cell coercion
//!
//! Order matters: truncate, trim, zero-value check, then parse. A zero-value
//! sentinel never reaches the numeric parser, so `-1` can be a sentinel for
//! an integer column.

use crate::{CellValue, ColumnDef, ColumnType, RowError};

/// Convert one raw cell according to its column definition
pub fn coerce_cell(raw: &str, def: &ColumnDef) -> Result<CellValue, RowError> {
    let mut text = raw;
    if let Some(marker) = def.truncate_from.as_deref().filter(|m| !m.is_empty()) {
        if let Some(pos) = text.find(marker) {
            text = &text[..pos];
        }
    }
    if !def.no_trim {
        text = text.trim();
    }

    if def.zero_values.iter().any(|z| z == text) {
        return Ok(def.ty.zero());
    }

    let coercion_error = |reason: String| RowError::Coercion {
        column: def.name.clone(),
        value: text.to_string(),
        reason,
    };

    match def.ty {
        ColumnType::String => Ok(CellValue::Text(text.to_string())),
        ColumnType::Integer => text
            .replace(',', "")
            .parse::<i64>()
            .map(CellValue::Integer)
            .map_err(|e| coercion_error(e.to_string())),
        ColumnType::Float => text
            .replace(',', "")
            .parse::<f64>()
            .map(CellValue::Float)
            .map_err(|e| coercion_error(e.to_string())),
    }
}

/// Convert a raw row, dropping skipped positions.
///
/// The row must have exactly one cell per definition, skipped ones included.
pub fn coerce_row(row: &[String], defs: &[ColumnDef]) -> Result<Vec<CellValue>, RowError> {
    if row.len() != defs.len() {
        return Err(RowError::ColumnCountMismatch {
            expected: defs.len(),
            actual: row.len(),
            row: row.to_vec(),
        });
    }

    row.iter()
        .zip(defs)
        .filter(|(_, def)| !def.skip)
        .map(|(cell, def)| coerce_cell(cell, def))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> ColumnDef {
        ColumnDef::new("cases", ColumnType::Integer).zero_values(["-", "—", "–"])
    }

    #[test]
    fn test_integer_with_commas() {
        assert_eq!(coerce_cell(" 1,234 ", &int()).unwrap(), CellValue::Integer(1234));
        assert_eq!(coerce_cell("-5", &int()).unwrap(), CellValue::Integer(-5));
    }

    #[test]
    fn test_float_with_commas() {
        let def = ColumnDef::new("rate", ColumnType::Float);
        assert_eq!(coerce_cell("1,234.5", &def).unwrap(), CellValue::Float(1234.5));
    }

    #[test]
    fn test_zero_values_per_type() {
        assert_eq!(coerce_cell("—", &int()).unwrap(), CellValue::Integer(0));
        let float = ColumnDef::new("r", ColumnType::Float).zero_values(["n/a"]);
        assert_eq!(coerce_cell("n/a", &float).unwrap(), CellValue::Float(0.0));
        let text = ColumnDef::new("s", ColumnType::String).zero_values(["?"]);
        assert_eq!(coerce_cell("?", &text).unwrap(), CellValue::Text(String::new()));
    }

    #[test]
    fn test_zero_value_short_circuits_parsing() {
        let def = ColumnDef::new("n", ColumnType::Integer).zero_values(["-1"]);
        assert_eq!(coerce_cell("-1", &def).unwrap(), CellValue::Integer(0));
    }

    #[test]
    fn test_truncate_then_trim() {
        let def = ColumnDef::new("country", ColumnType::String).truncate_from("[");
        assert_eq!(
            coerce_cell(" France [a][b]", &def).unwrap(),
            CellValue::Text("France".into())
        );
        assert_eq!(coerce_cell("Spain", &def).unwrap(), CellValue::Text("Spain".into()));
    }

    #[test]
    fn test_truncated_text_can_be_zero_value() {
        let def = int().truncate_from("[");
        assert_eq!(coerce_cell("–[12]", &def).unwrap(), CellValue::Integer(0));
    }

    #[test]
    fn test_no_trim_keeps_whitespace() {
        let def = ColumnDef::new("s", ColumnType::String).no_trim();
        assert_eq!(coerce_cell(" a ", &def).unwrap(), CellValue::Text(" a ".into()));

        let num = ColumnDef::new("n", ColumnType::Integer).no_trim();
        assert!(coerce_cell(" 1", &num).is_err());
    }

    #[test]
    fn test_coercion_error_context() {
        let err = coerce_cell("12 (est.)", &int()).unwrap_err();
        assert!(matches!(
            err,
            RowError::Coercion { ref column, ref value, .. } if column == "cases" && value == "12 (est.)"
        ));
    }

    #[test]
    fn test_row_skips_positions() {
        let defs = vec![
            ColumnDef::skipped(),
            ColumnDef::new("country", ColumnType::String),
            int(),
        ];
        let row: Vec<String> = vec!["1".into(), "France".into(), "10".into()];
        assert_eq!(
            coerce_row(&row, &defs).unwrap(),
            vec![CellValue::Text("France".into()), CellValue::Integer(10)]
        );
    }

    #[test]
    fn test_row_count_mismatch() {
        let defs = vec![ColumnDef::skipped(), int()];
        let row: Vec<String> = vec!["x".into()];
        assert_eq!(
            coerce_row(&row, &defs),
            Err(RowError::ColumnCountMismatch { expected: 2, actual: 1, row: row.clone() })
        );
    }
}
