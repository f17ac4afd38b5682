//! Errors.

use thiserror::Error;

/// Errors reported by checked constructors and operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MathError {
    #[error(
        "Expected a {expected_rows}x{expected_columns} matrix but got {rows} row(s) \
         with {columns} column(s)"
    )]
    ShapeMismatch {
        expected_rows: usize,
        expected_columns: usize,
        rows: usize,
        columns: usize,
    },
    #[error("Matrix is singular (determinant {determinant}) and has no inverse")]
    SingularMatrix { determinant: f32 },
}

impl MathError {
    pub(crate) fn check_flat_len<const ROWS: usize, const COLUMNS: usize>(
        len: usize,
    ) -> Result<(), Self> {
        if len == ROWS * COLUMNS {
            Ok(())
        } else {
            // A flat sequence is reported as a single row.
            Err(Self::ShapeMismatch {
                expected_rows: ROWS,
                expected_columns: COLUMNS,
                rows: 1,
                columns: len,
            })
        }
    }

    pub(crate) fn check_rows<const ROWS: usize, const COLUMNS: usize>(
        rows: &[impl AsRef<[f32]>],
    ) -> Result<(), Self> {
        let ragged_or_wrong = rows.iter().find(|row| row.as_ref().len() != COLUMNS);
        if rows.len() == ROWS && ragged_or_wrong.is_none() {
            Ok(())
        } else {
            Err(Self::ShapeMismatch {
                expected_rows: ROWS,
                expected_columns: COLUMNS,
                rows: rows.len(),
                columns: ragged_or_wrong
                    .or(rows.first())
                    .map_or(0, |row| row.as_ref().len()),
            })
        }
    }
}
