//! # Tabletown - Bordered Text Tables
//!
//! `tabletown` renders column headers and rows as a bordered, aligned block of
//! text for terminals and plain-text output. Cells may span several lines and
//! contain tabs, wide Unicode characters (CJK, emoji), or ANSI escape codes;
//! widths are measured the way a terminal displays them.
//!
//! ## Core Concepts
//!
//! - [`Table`]: headers, rows, border theme and alignments; renders to a `String`
//! - [`BorderStyle`]: one of three fixed themes (`standard`, `solid`, `double`)
//! - [`Align`]: per-column alignment (left, center, right)
//! - [`TableSource`]: the accepted input shapes, normalized to [`TableData`]
//! - [`RenderOptions`]: serializable render settings, loadable from YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use tabletown::{Table, BorderStyle};
//!
//! let output = Table::new(["artist", "title", "date"])
//!     .rows([
//!         ["Bratmobile", "Pottymouth", "1993"],
//!         ["Coltrane, John", "Giant Steps", "1959"],
//!     ])
//!     .render()
//!     .unwrap();
//!
//! assert_eq!(output, "\
//! +----------------+-------------+------+
//! | artist         | title       | date |
//! +----------------+-------------+------+
//! | Bratmobile     | Pottymouth  | 1993 |
//! | Coltrane, John | Giant Steps | 1959 |
//! +----------------+-------------+------+");
//! ```
//!
//! ## Multi-line Cells
//!
//! A cell containing line breaks makes its row taller; the other cells of the
//! row get blank continuation lines.
//!
//! ```rust
//! use tabletown::{Cell, Table};
//!
//! let output = Table::new([Cell::from("artist"), Cell::from("title"), Cell::from(19)])
//!     .row([Cell::from("Bratmobile\n(Olympia, WA)"), Cell::from("Pottymouth"), Cell::from(93)])
//!     .render()
//!     .unwrap();
//!
//! assert!(output.contains("| (Olympia, WA) |            |    |"));
//! ```
//!
//! ## Errors
//!
//! Rendering fails with [`TableError::ColumnCountMismatch`] when a row's length
//! differs from the header's, and with [`TableError::NoColumns`] when the
//! header is empty. No partial output is produced.

pub mod error;
pub mod options;
pub mod source;
pub mod tabular;

pub use error::{Result, TableError};
pub use options::RenderOptions;
pub use source::{QueryResult, Record, RecordCollection, Serialized, TableData, TableSource};
pub use tabular::{
    display_width, expand_tabs, expand_tabs_line, pad_cell_line, render, Align, BorderChars,
    BorderStyle, Cell, DividerChars, Layout, LineType, Table, DEFAULT_TAB_STOP,
};
