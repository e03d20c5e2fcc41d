//! Unicode-aware bordered tables for terminal and plain-text output.
//!
//! This module lays out headers and rows whose cells may span several lines,
//! contain tabs, wide Unicode characters, or ANSI escape codes, and draws them
//! with one of three border themes.
//!
//! ## Pipeline
//!
//! 1. Validate that every row has as many cells as the header
//! 2. Expand tabs in every cell ([`expand_tabs`])
//! 3. Measure column widths and row heights ([`Layout::compute`])
//! 4. Emit dividers and padded cell lines ([`Table::render`])
//!
//! ## Border Themes
//!
//! | Theme | Top | Inner | Bottom | Bar |
//! |-------|-----|-------|--------|-----|
//! | [`BorderStyle::Standard`] | `+-+` | `+-+` | `+-+` | `\|` |
//! | [`BorderStyle::Solid`] | `┌─┬┐` | `├─┼┤` | `└─┴┘` | `│` |
//! | [`BorderStyle::Double`] | `╔═╦╗` | `╠═╬╣` | `╚═╩╝` | `║` |
//!
//! ## Utility Functions
//!
//! ```rust
//! use tabletown::tabular::{display_width, expand_tabs};
//!
//! assert_eq!(display_width("\x1b[32mok\x1b[0m"), 2);
//! assert_eq!(expand_tabs("a\tb", 8), "a       b");
//! ```

mod decorator;
mod layout;
mod types;
mod util;

pub use decorator::{render, Table};
pub use layout::Layout;
pub use types::{Align, BorderChars, BorderStyle, Cell, DividerChars, LineType};
pub use util::{display_width, expand_tabs, expand_tabs_line, pad_cell_line, DEFAULT_TAB_STOP};
