//! Column width and row height calculation.
//!
//! Cells may span several lines. A column is as wide as the widest single line
//! found in it (header included); a row is as tall as its tallest cell.

use super::util::display_width;

/// Measured geometry of a table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    /// Display width of every column, excluding the one-space gutters.
    pub column_widths: Vec<usize>,
    /// Number of output lines of every data row.
    pub row_heights: Vec<usize>,
    /// Number of output lines of the header.
    pub header_height: usize,
}

impl Layout {
    /// Measures headers and rows.
    ///
    /// Content is expected to be tab-expanded already. Cells missing from a
    /// short row are treated as empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabletown::Layout;
    ///
    /// let headers = vec!["artist", "title"];
    /// let rows = vec![vec!["Bratmobile\n(Olympia, WA)", "Pottymouth"]];
    /// let layout = Layout::compute(&headers, &rows);
    ///
    /// assert_eq!(layout.column_widths, vec![13, 10]);
    /// assert_eq!(layout.row_heights, vec![2]);
    /// assert_eq!(layout.header_height, 1);
    /// ```
    pub fn compute<S: AsRef<str>>(headers: &[S], rows: &[Vec<S>]) -> Self {
        let column_widths = (0..headers.len())
            .map(|col| {
                let header_width = widest_line(headers[col].as_ref());
                rows.iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| widest_line(cell.as_ref()))
                    .fold(header_width, isize::max)
                    .max(0) as usize
            })
            .collect();

        let row_heights = rows.iter().map(|row| tallest_cell(row)).collect();

        Layout {
            column_widths,
            row_heights,
            header_height: tallest_cell(headers),
        }
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.column_widths.len()
    }

    /// Display width of every full output line.
    ///
    /// Each column takes its width plus two gutter spaces and one bar; one more
    /// bar opens the line.
    pub fn line_width(&self) -> usize {
        self.column_widths.iter().map(|w| w + 3).sum::<usize>() + 1
    }
}

/// Line count of a cell. Text without a line break is one line, even when empty.
fn line_count(cell: &str) -> usize {
    cell.split('\n').count()
}

fn widest_line(cell: &str) -> isize {
    cell.split('\n').map(display_width).max().unwrap_or(0)
}

fn tallest_cell<S: AsRef<str>>(cells: &[S]) -> usize {
    cells
        .iter()
        .map(|cell| line_count(cell.as_ref()))
        .max()
        .unwrap_or(1)
}
