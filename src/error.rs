//! Error types for matrix construction, access, arithmetic and persistence

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by matrix operations.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// A matrix file could not be read or is malformed
    #[error("Error reading file: {0}")]
    Format(#[from] FormatError),

    /// Coordinate access outside the declared dimensions
    #[error("Index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Operand shapes are incompatible for the requested operation
    #[error("Matrix dimensions must match for {op}: {lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        op: &'static str,
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// Invalid construction parameters
    #[error("Invalid dimensions: {0}")]
    Validation(String),

    /// Fixed-width integer overflow while computing a result entry
    #[error("Integer overflow computing entry ({row}, {col})")]
    Overflow { row: usize, col: usize },

    /// Writing a matrix file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a matrix file failed to load.
///
/// All variants surface as [`MatrixError::Format`]; the variant keeps the
/// underlying cause for diagnostics.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line: {0}")]
    Read(#[source] io::Error),

    #[error("missing `{0}=` header")]
    MissingHeader(&'static str),

    #[error("line {line}: expected `{expected}=<integer>`, found `{found}`")]
    Header {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("line {line}: negative dimension in `{found}`")]
    NegativeDimension { line: usize, found: String },

    #[error("line {line}: expected `(row, col, value)`, found `{found}`")]
    Entry { line: usize, found: String },
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, MatrixError>;

impl MatrixError {
    /// Returns true for [`MatrixError::OutOfBounds`]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, MatrixError::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = MatrixError::OutOfBounds { row: 5, col: 1, rows: 2, cols: 2 };
        assert_eq!(err.to_string(), "Index (5, 1) out of bounds for 2x2 matrix");
        assert!(err.is_out_of_bounds());

        let err = MatrixError::from(FormatError::MissingHeader("cols"));
        assert_eq!(err.to_string(), "Error reading file: missing `cols=` header");
        assert!(!err.is_out_of_bounds());
    }
}
