//! Coordinate-keyed sparse matrix storage

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use num_traits::{PrimInt, Signed};

use crate::error::{MatrixError, Result};

/// Integer types that can be stored in a [`SparseMatrix`]
pub trait Element: PrimInt + Signed + Hash + Default + FromStr + fmt::Display + fmt::Debug {}

impl<T> Element for T where T: PrimInt + Signed + Hash + Default + FromStr + fmt::Display + fmt::Debug {}

/// A sparse matrix storing only its non-zero entries, keyed by (row, col)
///
/// Two invariants hold at all times:
/// - no stored value is zero (writing a zero removes the entry)
/// - every stored coordinate lies inside `rows × cols`
///
/// Absent coordinates read as zero.
#[derive(Clone, PartialEq, Eq)]
pub struct SparseMatrix<T> {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), T>,
}

/// Matrix of `i64` values, the element type used by the command-line tool
pub type IntMatrix = SparseMatrix<i64>;

impl<T: Element> SparseMatrix<T> {
    /// Creates an empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Creates an empty matrix from signed dimensions
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Validation`] if either dimension is negative.
    pub fn try_new(rows: i64, cols: i64) -> Result<Self> {
        let rows = usize::try_from(rows)
            .map_err(|_| MatrixError::Validation(format!("rows must be non-negative, got {}", rows)))?;
        let cols = usize::try_from(cols)
            .map_err(|_| MatrixError::Validation(format!("cols must be non-negative, got {}", cols)))?;
        Ok(Self::new(rows, cols))
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            matrix.entries.insert((i, i), T::one());
        }
        matrix
    }

    /// Builds a matrix from (row, col, value) triples
    ///
    /// Zero values are elided and later triples overwrite earlier ones at the
    /// same coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] for the first triple outside the
    /// dimensions.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in entries {
            matrix.set_element(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Dimensions formatted as `"<rows>x<cols>"`
    pub fn shape_string(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }

    /// Returns the number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Returns the value at (row, col), or zero if nothing is stored there
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] if the coordinate lies outside
    /// the matrix.
    pub fn get_element(&self, row: usize, col: usize) -> Result<T> {
        self.check_bounds(row, col)?;
        Ok(self.entries.get(&(row, col)).copied().unwrap_or_else(T::zero))
    }

    /// Stores `value` at (row, col); a zero removes any existing entry
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] if the coordinate lies outside
    /// the matrix. The matrix is left unchanged in that case.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_bounds(row, col)?;
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    /// Iterates over stored entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.entries.iter().map(|(&(row, col), &value)| (row, col, value))
    }

    /// Returns the stored entries sorted by ascending (row, col)
    pub fn sorted_entries(&self) -> Vec<(usize, usize, T)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(row, col, _)| (row, col));
        entries
    }
}

impl<T: Element> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.rows, self.cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_entries = 8;
        let entries = self.sorted_entries();
        if !entries.is_empty() {
            write!(f, "  entries: ")?;
            for &(row, col, value) in entries.iter().take(max_entries) {
                write!(f, "({}, {}, {:?}) ", row, col, value)?;
            }
            if entries.len() > max_entries {
                write!(f, "... ({} more)", entries.len() - max_entries)?;
            }
            writeln!(f)?;
        }

        write!(f, "}}")
    }
}
