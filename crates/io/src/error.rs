//! Error types for dfc-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the dfc-io crate.
///
/// Covers missing files, CSV-level failures, and per-row parse problems
/// encountered when reading forecast or inventory tables. Malformed rows
/// reject the whole read; nothing is silently coerced.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a required column is not present in a file's header.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a date field cannot be parsed.
    #[error("line {line}: invalid date '{value}' (expected format {format})")]
    InvalidDate {
        /// 1-based line number in the file, counting the header.
        line: usize,
        /// The offending field value.
        value: String,
        /// The date format the reader expected.
        format: String,
    },

    /// Returned when a quantity field cannot be parsed as a number.
    #[error("line {line}: invalid quantity '{value}' in column '{column}'")]
    InvalidQuantity {
        /// 1-based line number in the file, counting the header.
        line: usize,
        /// The offending field value.
        value: String,
        /// Name of the column being parsed.
        column: String,
    },

    /// Returned when a row has fewer fields than the header.
    #[error("line {line}: missing field for column '{column}'")]
    MissingField {
        /// 1-based line number in the file, counting the header.
        line: usize,
        /// Name of the column whose field is absent.
        column: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}
