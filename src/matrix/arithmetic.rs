//! Elementwise and product arithmetic on sparse matrices
//!
//! Every operation allocates a fresh result and leaves its inputs untouched.
//! Results are written through [`SparseMatrix::set_element`], so entries that
//! sum to zero never survive into the output.

use std::collections::HashMap;

use num_traits::NumCast;

use crate::error::{MatrixError, Result};
use crate::matrix::sparse::{Element, SparseMatrix};

/// Non-zero entries grouped by row: row -> [(col, value)]
pub type RowIndex<T> = HashMap<usize, Vec<(usize, T)>>;

fn dimension_mismatch<T: Element>(op: &'static str, a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> MatrixError {
    MatrixError::DimensionMismatch {
        op,
        lhs_rows: a.rows(),
        lhs_cols: a.cols(),
        rhs_rows: b.rows(),
        rhs_cols: b.cols(),
    }
}

/// Shared body of add/subtract: copy `a`, then fold each entry of `b` in with `combine`
fn elementwise<T, F>(op: &'static str, a: &SparseMatrix<T>, b: &SparseMatrix<T>, combine: F) -> Result<SparseMatrix<T>>
where
    T: Element,
    F: Fn(T, T) -> Option<T>,
{
    if a.shape() != b.shape() {
        return Err(dimension_mismatch(op, a, b));
    }
    tracing::debug!(op, shape = %a.shape_string(), lhs_nnz = a.nnz(), rhs_nnz = b.nnz(), "elementwise");

    let mut result = a.clone();
    for (row, col, value) in b.iter() {
        let current = result.get_element(row, col)?;
        let combined = combine(current, value).ok_or(MatrixError::Overflow { row, col })?;
        result.set_element(row, col, combined)?;
    }
    Ok(result)
}

/// Computes A + B
///
/// # Errors
///
/// [`MatrixError::DimensionMismatch`] unless both operands have the same
/// shape; [`MatrixError::Overflow`] if a sum does not fit in `T`.
pub fn add<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    elementwise("addition", a, b, |x, y| x.checked_add(&y))
}

/// Computes A − B
///
/// # Errors
///
/// Same conditions as [`add`].
pub fn subtract<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    elementwise("subtraction", a, b, |x, y| x.checked_sub(&y))
}

/// Groups the non-zero entries of a matrix by row, each row sorted by column
pub fn group_by_row<T: Element>(matrix: &SparseMatrix<T>) -> RowIndex<T> {
    let mut index: RowIndex<T> = HashMap::new();
    for (row, col, value) in matrix.sorted_entries() {
        index.entry(row).or_default().push((col, value));
    }
    index
}

/// Computes A × B
///
/// B's entries are grouped by row once; each non-zero (i, k, a) of A then
/// only visits row k of B, so rows and columns without entries cost nothing.
/// Each output cell is accumulated in `i128` and narrowed back to `T` once
/// complete, so only a final value outside `T` is an overflow.
///
/// # Errors
///
/// [`MatrixError::DimensionMismatch`] unless `a.cols() == b.rows()`;
/// [`MatrixError::Overflow`] if a result entry does not fit in `T`.
pub fn multiply<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    if a.cols() != b.rows() {
        return Err(dimension_mismatch("multiplication", a, b));
    }
    tracing::debug!(
        lhs = %a.shape_string(),
        rhs = %b.shape_string(),
        lhs_nnz = a.nnz(),
        rhs_nnz = b.nnz(),
        "multiply"
    );

    let b_rows = group_by_row(b);
    let mut sums: HashMap<(usize, usize), i128> = HashMap::new();

    for (i, k, a_val) in a.sorted_entries() {
        let Some(b_row) = b_rows.get(&k) else {
            continue;
        };
        for &(j, b_val) in b_row {
            let overflow = || MatrixError::Overflow { row: i, col: j };
            let product = a_val
                .to_i128()
                .zip(b_val.to_i128())
                .and_then(|(x, y)| x.checked_mul(y))
                .ok_or_else(overflow)?;
            let cell = sums.entry((i, j)).or_insert(0);
            *cell = cell.checked_add(product).ok_or_else(overflow)?;
        }
    }

    let mut cells: Vec<_> = sums.into_iter().collect();
    cells.sort_unstable_by_key(|&(coord, _)| coord);

    let mut result = SparseMatrix::<T>::new(a.rows(), b.cols());
    for ((i, j), sum) in cells {
        let value = <T as NumCast>::from(sum).ok_or(MatrixError::Overflow { row: i, col: j })?;
        result.set_element(i, j, value)?;
    }

    Ok(result)
}

impl<T: Element> SparseMatrix<T> {
    /// See [`add`]
    pub fn add(&self, other: &Self) -> Result<Self> {
        add(self, other)
    }

    /// See [`subtract`]
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        subtract(self, other)
    }

    /// See [`multiply`]
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        multiply(self, other)
    }
}
