//! Header validation and body slicing

use crate::{RawRow, StructureError};

/// Check that the designated header row names the expected columns.
///
/// Matching is case-insensitive containment: an actual header of
/// "Countries and territories" satisfies an expected "countries".
pub fn validate_header(rows: &[RawRow], names: &[String], index: usize) -> Result<(), StructureError> {
    if names.is_empty() {
        return Ok(());
    }

    let cells = rows.get(index).ok_or(StructureError::InsufficientRows {
        expected: index + 1,
        actual: rows.len(),
    })?;
    if cells.len() != names.len() {
        return Err(StructureError::HeaderColumnCountMismatch {
            expected: names.len(),
            actual: cells.len(),
        });
    }

    for (position, (name, cell)) in names.iter().zip(cells).enumerate() {
        let expected = name.trim().to_lowercase();
        let actual = cell.trim().to_lowercase();
        if !actual.contains(&expected) {
            return Err(StructureError::HeaderMismatch {
                position,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// Rows strictly between the header block and the footer block
pub fn body_rows(rows: &[RawRow], header_count: usize, footer_count: usize) -> Result<&[RawRow], StructureError> {
    let expected = header_count + footer_count;
    if rows.len() < expected {
        return Err(StructureError::InsufficientRows {
            expected,
            actual: rows.len(),
        });
    }
    Ok(&rows[header_count..rows.len() - footer_count])
}
