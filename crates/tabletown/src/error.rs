//! Error types for table rendering.
//!
//! Every failure is raised before any output is produced: a render call either
//! returns the complete table or one of these errors.

use thiserror::Error;

/// Errors that can occur when building or rendering a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// A data row does not have the same number of cells as the header.
    #[error("column counts do not match: header has {expected} columns, row {row} has {found}")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The header is empty, so the table has no columns to draw.
    #[error("table has no columns: at least one header is required")]
    NoColumns,

    /// No border theme is registered under the requested name.
    #[error("unknown border theme: '{0}' (expected standard, solid or double)")]
    UnknownBorderTheme(String),

    /// No alignment is known under the requested name.
    #[error("unknown alignment: '{0}' (expected left, center, centre or right)")]
    UnknownAlignment(String),

    /// Render options could not be parsed.
    #[error("invalid render options: {0}")]
    Config(String),

    /// CSV input could not be read.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<serde_yaml::Error> for TableError {
    fn from(err: serde_yaml::Error) -> Self {
        TableError::Config(err.to_string())
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
