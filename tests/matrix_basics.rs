//! Basic tests for matrix construction and element access

use sparsemat::{IntMatrix, MatrixError, SparseMatrix};

#[test]
fn test_matrix_creation() {
    let matrix = IntMatrix::new(3, 5);

    assert_eq!(matrix.rows(), 3);
    assert_eq!(matrix.cols(), 5);
    assert_eq!(matrix.nnz(), 0);

    for row in 0..3 {
        for col in 0..5 {
            assert_eq!(matrix.get_element(row, col).unwrap(), 0);
        }
    }
}

#[test]
fn test_empty_dimensions() {
    let matrix = IntMatrix::new(0, 0);
    assert!(matrix.get_element(0, 0).unwrap_err().is_out_of_bounds());
    assert_eq!(matrix.to_string(), "rows=0\ncols=0\n");
}

#[test]
fn test_set_then_get() {
    let mut matrix = IntMatrix::new(4, 4);
    let values = [(0, 0, 1), (0, 3, -2), (3, 0, 30), (2, 2, i64::MAX), (1, 2, i64::MIN)];

    for &(row, col, value) in &values {
        matrix.set_element(row, col, value).unwrap();
    }
    for &(row, col, value) in &values {
        assert_eq!(matrix.get_element(row, col).unwrap(), value);
    }
    assert_eq!(matrix.nnz(), values.len());
}

#[test]
fn test_zero_elision() {
    let mut matrix = IntMatrix::new(2, 2);
    matrix.set_element(0, 1, 8).unwrap();
    matrix.set_element(1, 0, 9).unwrap();
    assert_eq!(matrix.nnz(), 2);

    matrix.set_element(0, 1, 0).unwrap();
    assert_eq!(matrix.get_element(0, 1).unwrap(), 0);
    assert_eq!(matrix.nnz(), 1);
    assert_eq!(matrix.to_string(), "rows=2\ncols=2\n(1, 0, 9)\n");
}

#[test]
fn test_bounds_enforced() {
    let mut matrix = IntMatrix::new(3, 2);

    for &(row, col) in &[(3, 0), (0, 2), (3, 2), (usize::MAX, 0), (0, usize::MAX)] {
        match matrix.get_element(row, col) {
            Err(MatrixError::OutOfBounds { rows: 3, cols: 2, .. }) => {}
            other => panic!("get ({}, {}) returned {:?}", row, col, other),
        }
        assert!(matrix.set_element(row, col, 1).unwrap_err().is_out_of_bounds());
    }
    assert!(matrix.is_empty());
}

#[test]
fn test_negative_dimensions_rejected() {
    assert!(matches!(IntMatrix::try_new(-2, 2), Err(MatrixError::Validation(_))));
    assert_eq!(IntMatrix::try_new(2, 7).unwrap().shape(), (2, 7));
}

#[test]
fn test_equality_ignores_insertion_order() {
    let a = SparseMatrix::from_entries(2, 2, vec![(0, 0, 1i32), (1, 1, 2)]).unwrap();
    let b = SparseMatrix::from_entries(2, 2, vec![(1, 1, 2i32), (0, 0, 1)]).unwrap();
    assert_eq!(a, b);

    let c = SparseMatrix::from_entries(2, 3, vec![(0, 0, 1i32), (1, 1, 2)]).unwrap();
    assert_ne!(a, c);
}
