//! # sparsemat: sparse integer matrices
//!
//! A coordinate-keyed sparse matrix over signed integers, with addition,
//! subtraction and multiplication, and a small line-oriented text format
//! for reading and writing matrices.
//!
//! ## Storage
//!
//! Only non-zero entries are stored, keyed by `(row, col)`. Writing a zero
//! removes the entry, and every stored coordinate lies inside the declared
//! dimensions.
//!
//! ## Arithmetic
//!
//! - **add / subtract**: operands must share a shape; entries that cancel
//!   are not stored
//! - **multiply**: the right operand's entries are grouped by row once, so
//!   each non-zero of the left operand only touches the row it pairs with
//!
//! ## Usage
//!
//! ```
//! use sparsemat::{IntMatrix, multiply};
//!
//! let a: IntMatrix = "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n".parse().unwrap();
//! let b = IntMatrix::identity(2);
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c, a);
//! assert_eq!(c.to_string(), "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n");
//! ```

pub mod error;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use error::{FormatError, MatrixError, Result};
pub use matrix::{add, group_by_row, multiply, subtract, RowIndex};
pub use matrix::{Element, IntMatrix, SparseMatrix};
pub use matrix::{Operation, ParseOperationError, RunConfig, DEFAULT_RESULTS_DIR};
pub use utils::{from_dense, from_sprs, to_dense, to_sprs};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
