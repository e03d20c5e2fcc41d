//! Table decorator: borders, header block, and aligned data rows.
//!
//! Rendering is a single pass: validate column counts, expand tabs, measure,
//! then emit. Nothing is produced if validation fails.
//!
//! # Example
//!
//! ```rust
//! use tabletown::{Align, BorderStyle, Table};
//!
//! let table = Table::new(["artist", "title", "date"])
//!     .rows([
//!         ["Bratmobile", "Pottymouth", "1993"],
//!         ["Coltrane, John", "Giant Steps", "1959"],
//!     ])
//!     .border(BorderStyle::Solid)
//!     .align([Align::Left, Align::Left, Align::Right]);
//!
//! let output = table.render().unwrap();
//! assert_eq!(output.lines().next(), Some("┌────────────────┬─────────────┬──────┐"));
//! ```

use std::fmt::Display;

use super::layout::Layout;
use super::types::{Align, BorderChars, BorderStyle, LineType};
use super::util::{expand_tabs, pad_cell_line, DEFAULT_TAB_STOP};
use crate::error::{Result, TableError};
use crate::options::RenderOptions;
use crate::source::TableData;

/// A table of headers and rows with border and alignment settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    border: BorderStyle,
    alignments: Vec<Align>,
    tab_stop: usize,
}

impl Table {
    /// Create a table with the given column headers and no rows.
    ///
    /// The number of headers fixes the column count.
    pub fn new<I, T>(headers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        Table {
            headers: headers.into_iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            border: BorderStyle::default(),
            alignments: Vec::new(),
            tab_stop: DEFAULT_TAB_STOP,
        }
    }

    /// Create a table from normalized input.
    pub fn from_data(data: TableData) -> Self {
        Table::new(data.headers).rows(data.rows)
    }

    /// Append data rows.
    pub fn rows<R, I, T>(mut self, rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        T: Display,
    {
        self.rows.extend(
            rows.into_iter()
                .map(|row| row.into_iter().map(|c| c.to_string()).collect()),
        );
        self
    }

    /// Append a single data row.
    pub fn row<I, T>(self, row: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        self.rows([row])
    }

    /// Set the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Set per-column alignments, by column position.
    ///
    /// Columns without an entry are left-aligned; extra entries are ignored.
    pub fn align<I: IntoIterator<Item = Align>>(mut self, alignments: I) -> Self {
        self.alignments = alignments.into_iter().collect();
        self
    }

    /// Set the tab stop interval used to expand tabs in cells (default 8).
    pub fn tab_stop(mut self, tab_stop: usize) -> Self {
        self.tab_stop = tab_stop;
        self
    }

    /// Apply border, alignments and tab stop from render options.
    pub fn options(self, options: &RenderOptions) -> Self {
        self.border(options.border)
            .align(options.align.iter().copied())
            .tab_stop(options.tab_stop)
    }

    /// Get the border style.
    pub fn get_border(&self) -> BorderStyle {
        self.border
    }

    /// Get the number of columns.
    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of data rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Alignment of a column, left when unspecified.
    fn alignment(&self, col: usize) -> Align {
        self.alignments.get(col).copied().unwrap_or_default()
    }

    /// Check that there is at least one column and that every row has as many
    /// cells as there are headers.
    pub fn validate(&self) -> Result<()> {
        let expected = self.headers.len();
        if expected == 0 {
            return Err(TableError::NoColumns);
        }
        match self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            Some((row, cells)) => Err(TableError::ColumnCountMismatch {
                row,
                expected,
                found: cells.len(),
            }),
            None => Ok(()),
        }
    }

    /// Validate, expand tabs, and measure the table.
    pub fn layout(&self) -> Result<Layout> {
        self.validate()?;
        let (headers, rows) = self.expanded();
        Ok(Layout::compute(&headers, &rows))
    }

    fn expanded(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let headers = self
            .headers
            .iter()
            .map(|h| expand_tabs(h, self.tab_stop))
            .collect();
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(|c| expand_tabs(c, self.tab_stop)).collect())
            .collect();
        (headers, rows)
    }

    /// Render the complete table.
    ///
    /// Produces the top border, the header block, the inner divider, every
    /// data row, and the bottom border, joined with `\n` and without a
    /// trailing line break.
    pub fn render(&self) -> Result<String> {
        self.validate()?;

        let (headers, rows) = self.expanded();
        let layout = Layout::compute(&headers, &rows);
        tracing::debug!(
            columns = layout.num_columns(),
            rows = rows.len(),
            header_height = layout.header_height,
            border = %self.border,
            "computed table layout"
        );

        let chars = self.border.chars();
        let mut output = Vec::with_capacity(rows.len() + layout.header_height + 3);

        output.push(divider(&layout.column_widths, chars, LineType::Top));
        self.push_block(&mut output, &headers, layout.header_height, &layout, chars);
        output.push(divider(&layout.column_widths, chars, LineType::Inner));
        for (row, height) in rows.iter().zip(&layout.row_heights) {
            self.push_block(&mut output, row, *height, &layout, chars);
        }
        output.push(divider(&layout.column_widths, chars, LineType::Bottom));

        Ok(output.join("\n"))
    }

    /// Emit `height` lines for one row, padding cells that run out of lines.
    fn push_block(
        &self,
        output: &mut Vec<String>,
        cells: &[String],
        height: usize,
        layout: &Layout,
        chars: &BorderChars,
    ) {
        let cell_lines: Vec<Vec<&str>> = cells.iter().map(|c| c.split('\n').collect()).collect();

        for line in 0..height {
            let mut text = String::new();
            text.push(chars.bar);
            for (col, (lines, &width)) in cell_lines.iter().zip(&layout.column_widths).enumerate() {
                let content = lines.get(line).copied().unwrap_or("");
                text.push_str(&pad_cell_line(content, width, self.alignment(col), chars.bar));
            }
            output.push(text);
        }
    }
}

/// Build a horizontal divider: `width + 2` separators per column, joined by
/// the position's join glyph and closed by its edge glyphs.
fn divider(widths: &[usize], chars: &BorderChars, line_type: LineType) -> String {
    let glyphs = chars.divider(line_type);
    let join = glyphs.join.to_string();
    let segments: Vec<String> = widths
        .iter()
        .map(|&w| std::iter::repeat_n(chars.separator, w + 2).collect())
        .collect();

    format!("{}{}{}", glyphs.left, segments.join(join.as_str()), glyphs.right)
}

/// Render headers and rows in one call.
///
/// Missing alignments default to [`Align::Left`].
///
/// # Example
///
/// ```rust
/// use tabletown::{render, BorderStyle};
///
/// let output = render(&["id", "name"], &[vec!["1", "Alice"]], BorderStyle::Standard, &[]).unwrap();
/// assert_eq!(
///     output,
///     "+----+-------+\n| id | name  |\n+----+-------+\n| 1  | Alice |\n+----+-------+"
/// );
/// ```
pub fn render<H: Display, C: Display>(
    headers: &[H],
    rows: &[Vec<C>],
    border: BorderStyle,
    alignments: &[Align],
) -> Result<String> {
    Table::new(headers)
        .rows(rows)
        .border(border)
        .align(alignments.iter().copied())
        .render()
}
