// Matrix storage, arithmetic and run configuration

pub mod arithmetic;
pub mod config;
pub mod sparse;

pub use arithmetic::{add, group_by_row, multiply, subtract, RowIndex};
pub use config::{Operation, ParseOperationError, RunConfig, DEFAULT_RESULTS_DIR};
pub use sparse::{Element, IntMatrix, SparseMatrix};
