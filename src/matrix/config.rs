//! Operation selection and run configuration for the command-line front end

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::error::{MatrixError, Result};
use crate::matrix::arithmetic::{add, multiply, subtract};
use crate::matrix::sparse::{Element, IntMatrix, SparseMatrix};

/// Directory results are written to when no explicit output is given
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// The arithmetic operation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

#[derive(Debug, Clone, Error)]
#[error("Invalid operation \"{0}\". Valid operations are: add, subtract, or multiply")]
pub struct ParseOperationError(String);

impl Operation {
    /// All operations, in menu order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Lowercase name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// File name used for this operation's result in the results directory
    pub fn default_output_file(&self) -> &'static str {
        match self {
            Operation::Add => "addition_result.txt",
            Operation::Subtract => "subtraction_result.txt",
            Operation::Multiply => "multiplication_result.txt",
        }
    }

    /// Runs the operation on two matrices
    pub fn apply<T: Element>(&self, a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Accepts the operation name (any case) or its menu number
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "1" => Ok(Operation::Add),
            "subtract" | "2" => Ok(Operation::Subtract),
            "multiply" | "3" => Ok(Operation::Multiply),
            _ => Err(ParseOperationError(s.to_string())),
        }
    }
}

/// One invocation: an operation, two input files and where to put the result
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub operation: Operation,
    pub lhs: PathBuf,
    pub rhs: PathBuf,
    /// Explicit output path; overrides `results_dir`
    pub output: Option<PathBuf>,
    pub results_dir: PathBuf,
}

impl RunConfig {
    pub fn new(operation: Operation, lhs: impl Into<PathBuf>, rhs: impl Into<PathBuf>) -> Self {
        Self {
            operation,
            lhs: lhs.into(),
            rhs: rhs.into(),
            output: None,
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
        }
    }

    /// Where the result will be written
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self.results_dir.join(self.operation.default_output_file()),
        }
    }

    /// Loads both inputs, applies the operation and saves the result
    ///
    /// The output's parent directory is created if needed. Returns the path
    /// the result was written to.
    pub fn execute(&self) -> Result<PathBuf> {
        let a = IntMatrix::load(&self.lhs)?;
        let b = IntMatrix::load(&self.rhs)?;
        tracing::info!(
            "Performing operation: {} {} {}",
            a.shape_string(),
            self.operation,
            b.shape_string()
        );

        let result = self.operation.apply(&a, &b)?;

        let output = self.output_path();
        ensure_parent_dir(&output)?;
        result.save(&output)?;
        tracing::info!(nnz = result.nnz(), shape = %result.shape_string(), "result saved");
        Ok(output)
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir).map_err(|source| MatrixError::Io {
            path: dir.to_path_buf(),
            source,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operation() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("Subtract".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!(" MULTIPLY ".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!("2".parse::<Operation>().unwrap(), Operation::Subtract);

        let err = "divide".parse::<Operation>().unwrap_err();
        assert!(err.to_string().contains("\"divide\""));
        assert!("4".parse::<Operation>().is_err());
    }

    #[test]
    fn test_name_roundtrip() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_output_path() {
        let mut config = RunConfig::new(Operation::Multiply, "a.txt", "b.txt");
        assert_eq!(config.output_path(), PathBuf::from("results/multiplication_result.txt"));

        config.results_dir = PathBuf::from("out");
        config.operation = Operation::Add;
        assert_eq!(config.output_path(), PathBuf::from("out/addition_result.txt"));

        config.output = Some(PathBuf::from("custom.txt"));
        assert_eq!(config.output_path(), PathBuf::from("custom.txt"));
    }

    #[test]
    fn test_apply_dispatch() {
        let a = IntMatrix::from_entries(2, 2, vec![(0, 0, 2), (1, 0, 1)]).unwrap();
        let b = IntMatrix::identity(2);

        assert_eq!(Operation::Add.apply(&a, &b).unwrap().sorted_entries(), vec![(0, 0, 3), (1, 0, 1), (1, 1, 1)]);
        assert_eq!(Operation::Subtract.apply(&a, &b).unwrap().sorted_entries(), vec![(0, 0, 1), (1, 0, 1), (1, 1, -1)]);
        assert_eq!(Operation::Multiply.apply(&a, &b).unwrap(), a);
    }
}
