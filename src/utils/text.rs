//! Line-oriented text format for sparse matrices
//!
//! ```text
//! rows=<rows>
//! cols=<cols>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Lines are trimmed and blank lines ignored on read. A structurally broken
//! file fails the whole load, while an entry whose coordinates fall outside
//! the declared dimensions is skipped.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::num::{IntErrorKind, ParseIntError};
use std::path::Path;
use std::str::FromStr;

use crate::error::{FormatError, MatrixError, Result};
use crate::matrix::sparse::{Element, SparseMatrix};

/// Parses `<name>=<integer>` from a header line
fn parse_header(line_no: usize, line: &str, name: &'static str) -> std::result::Result<usize, FormatError> {
    let header_error = || FormatError::Header {
        line: line_no,
        expected: name,
        found: line.to_string(),
    };

    let value: i64 = line
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or_else(header_error)?
        .trim()
        .parse()
        .map_err(|_| header_error())?;

    usize::try_from(value).map_err(|_| FormatError::NegativeDimension {
        line: line_no,
        found: line.to_string(),
    })
}

/// Parses one coordinate field
///
/// `Ok(None)` is a well-formed integer that cannot index any matrix
/// (negative, or beyond the integer range).
fn parse_coordinate(field: &str) -> std::result::Result<Option<usize>, ParseIntError> {
    match field.parse::<i64>() {
        Ok(value) => Ok(usize::try_from(value).ok()),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Parses `(<row>, <col>, <value>)` from an entry line
fn parse_entry<T: Element>(
    line_no: usize,
    line: &str,
) -> std::result::Result<(Option<usize>, Option<usize>, T), FormatError> {
    let entry_error = || FormatError::Entry {
        line: line_no,
        found: line.to_string(),
    };

    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(entry_error)?;

    let fields: Vec<&str> = inner.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(entry_error());
    }

    let row = parse_coordinate(fields[0]).map_err(|_| entry_error())?;
    let col = parse_coordinate(fields[1]).map_err(|_| entry_error())?;
    let value: T = fields[2].parse().map_err(|_| entry_error())?;
    Ok((row, col, value))
}

impl<T: Element> SparseMatrix<T> {
    /// Reads a matrix in text format from a buffered reader
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Format`] if reading fails, a header is missing
    /// or malformed, or an entry line is malformed. Entries outside the
    /// declared dimensions are skipped, not reported.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines().enumerate().filter_map(|(i, line)| match line {
            Ok(line) => {
                let trimmed = line.trim();
                (!trimmed.is_empty()).then(|| Ok((i + 1, trimmed.to_string())))
            }
            Err(e) => Some(Err(FormatError::Read(e))),
        });

        let (line_no, line) = lines.next().ok_or(FormatError::MissingHeader("rows"))??;
        let rows = parse_header(line_no, &line, "rows")?;
        let (line_no, line) = lines.next().ok_or(FormatError::MissingHeader("cols"))??;
        let cols = parse_header(line_no, &line, "cols")?;

        let mut matrix = Self::new(rows, cols);
        let mut skipped = 0usize;

        for line in lines {
            let (line_no, line) = line?;
            let (row, col, value) = parse_entry::<T>(line_no, &line)?;

            let (Some(row), Some(col)) = (row, col) else {
                tracing::debug!(line = line_no, entry = %line, "skipping out-of-bounds entry");
                skipped += 1;
                continue;
            };

            match matrix.set_element(row, col, value) {
                Ok(()) => {}
                Err(e) if e.is_out_of_bounds() => {
                    tracing::debug!(line = line_no, row, col, rows, cols, "skipping out-of-bounds entry");
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        if skipped > 0 {
            tracing::debug!(skipped, shape = %matrix.shape_string(), "loaded with skipped entries");
        }
        Ok(matrix)
    }

    /// Loads a matrix from a text file
    ///
    /// # Errors
    ///
    /// Any failure, including a missing or unreadable file, is reported as
    /// [`MatrixError::Format`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| FormatError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read_from(BufReader::new(file))
    }

    /// Writes the matrix in text format, entries sorted by (row, col)
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()
    }

    /// Saves the matrix to a text file, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Io`] if the file cannot be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let io_error = |source| MatrixError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(io_error)?;
        self.write_to(BufWriter::new(file)).map_err(io_error)
    }
}

impl<T: Element> FromStr for SparseMatrix<T> {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        Self::read_from(s.as_bytes())
    }
}

impl<T: Element> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows={}", self.rows())?;
        writeln!(f, "cols={}", self.cols())?;
        for (row, col, value) in self.sorted_entries() {
            writeln!(f, "({}, {}, {})", row, col, value)?;
        }
        Ok(())
    }
}
