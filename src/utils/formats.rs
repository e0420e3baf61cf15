//! Utilities for converting between our matrix format and external libraries

use ndarray::Array2;
use sprs::CsMat;

use crate::error::Result;
use crate::matrix::sparse::{Element, SparseMatrix};
use crate::utils::exclusive_scan;

/// Converts to sprs CsMat in CSR format
pub fn to_sprs<T: Element>(matrix: &SparseMatrix<T>) -> CsMat<T> {
    let entries = matrix.sorted_entries();

    let mut row_counts = vec![0; matrix.rows()];
    let mut col_idx = Vec::with_capacity(entries.len());
    let mut values = Vec::with_capacity(entries.len());
    for &(row, col, value) in &entries {
        row_counts[row] += 1;
        col_idx.push(col);
        values.push(value);
    }
    let row_ptr = exclusive_scan(&row_counts);

    CsMat::new((matrix.rows(), matrix.cols()), row_ptr, col_idx, values)
}

/// Converts a sprs matrix (CSR or CSC) to our format
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs<T: Element>(matrix: &CsMat<T>) -> Result<SparseMatrix<T>> {
    let (rows, cols) = matrix.shape();
    SparseMatrix::from_entries(rows, cols, matrix.iter().map(|(&value, (row, col))| (row, col, value)))
}

/// Expands to a dense ndarray
pub fn to_dense<T: Element>(matrix: &SparseMatrix<T>) -> Array2<T> {
    let mut dense = Array2::zeros((matrix.rows(), matrix.cols()));
    for (row, col, value) in matrix.iter() {
        dense[[row, col]] = value;
    }
    dense
}

/// Builds a sparse matrix from the non-zero cells of a dense ndarray
pub fn from_dense<T: Element>(dense: &Array2<T>) -> Result<SparseMatrix<T>> {
    let (rows, cols) = dense.dim();
    SparseMatrix::from_entries(rows, cols, dense.indexed_iter().map(|((row, col), &value)| (row, col, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample() -> SparseMatrix<i64> {
        //    [1 2 0]
        //    [0 0 0]
        //    [4 0 5]
        SparseMatrix::from_entries(3, 3, vec![(0, 0, 1), (0, 1, 2), (2, 0, 4), (2, 2, 5)]).unwrap()
    }

    #[test]
    fn test_to_sprs_structure() {
        let csr = to_sprs(&sample());

        assert!(csr.is_csr());
        assert_eq!(csr.shape(), (3, 3));
        assert_eq!(csr.nnz(), 4);
        assert_eq!(csr.indptr().as_slice().unwrap(), &[0, 2, 2, 4]);
        assert_eq!(csr.indices(), &[0, 1, 0, 2]);
        assert_eq!(csr.data(), &[1, 2, 4, 5]);
    }

    #[test]
    fn test_sprs_roundtrip() {
        let original = sample();
        let roundtrip = from_sprs(&to_sprs(&original)).unwrap();
        assert_eq!(roundtrip, original);

        // CSC storage converts the same way
        let csc = to_sprs(&original).to_csc();
        assert_eq!(from_sprs(&csc).unwrap(), original);
    }

    #[test]
    fn test_to_dense() {
        let dense = to_dense(&sample());
        assert_eq!(dense, array![[1, 2, 0], [0, 0, 0], [4, 0, 5]]);
    }

    #[test]
    fn test_from_dense_skips_zeros() {
        let dense = array![[0i64, -3], [0, 0], [7, 0]];
        let matrix = from_dense(&dense).unwrap();

        assert_eq!(matrix.shape(), (3, 2));
        assert_eq!(matrix.sorted_entries(), vec![(0, 1, -3), (2, 0, 7)]);
    }

    #[test]
    fn test_sprs_multiply_matches() {
        let a = sample();
        let product = &to_sprs(&a) * &to_sprs(&a);
        let ours = a.multiply(&a).unwrap();

        assert_eq!(from_sprs(&product).unwrap(), ours);
    }
}
