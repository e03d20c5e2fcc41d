//! Utility functions for ANSI-aware text measurement, tab expansion, and padding.
//!
//! Width measurement ignores ANSI escape sequences and a few terminal control
//! characters, counts wide code points (CJK, emoji) as two columns, and lets
//! each backspace cancel one column.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::UnicodeWidthChar;

use super::types::Align;

/// Default tab stop interval in columns.
pub const DEFAULT_TAB_STOP: usize = 8;

/// Escape sequences introduced by `ESC [`, `ESC (` or `ESC )`.
///
/// Slightly broader than SGR color codes so charset selection and cursor
/// sequences are also treated as zero width.
static ESCAPE_SEQUENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b[\[()][;?0-9]*[0-9A-Za-z]").expect("escape sequence pattern is valid")
});

/// ^C, ^Z and ^? are dropped before measuring.
fn is_stripped_control(c: char) -> bool {
    matches!(c, '\x03' | '\x1a' | '\x7f')
}

/// Returns the display width of a single line of text.
///
/// - ANSI escape sequences count as zero columns
/// - ETX, SUB and DEL are removed before measuring
/// - Wide code points count as two columns, other control characters as zero
/// - Every backspace (`\x08`) in the line subtracts one column
///
/// A backspace takes no column of its own and erases one column of the text
/// before it, so `"abc\x08"` measures 2. This differs from measurers that
/// give control characters width 1 before subtracting, where the same line
/// measures 3. The result can be negative for degenerate input such as a
/// lone `"\x08"`.
///
/// # Example
///
/// ```rust
/// use tabletown::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("i am \x1b[1mbold\x1b[0m"), 9);
/// assert_eq!(display_width("日本"), 4);
/// assert_eq!(display_width("ab\x08"), 1);
/// ```
pub fn display_width(line: &str) -> isize {
    let backspaces = line.chars().filter(|&c| c == '\x08').count() as isize;

    let visible = ESCAPE_SEQUENCE.replace_all(line, "");
    let width: usize = visible
        .chars()
        .filter(|&c| !is_stripped_control(c))
        .map(|c| c.width().unwrap_or(0))
        .sum();

    width as isize - backspaces
}

/// Expands tab characters in a single line to spaces.
///
/// Each tab advances to the next multiple of `tab_stop`; a tab that starts on
/// a boundary inserts a full `tab_stop` of spaces. The current column counts
/// code points, not visible width: wide code points count as two and every
/// other code point, escape and control characters included, as one. A
/// `tab_stop` of zero removes tabs.
///
/// # Example
///
/// ```rust
/// use tabletown::expand_tabs_line;
///
/// assert_eq!(expand_tabs_line("some\ttest", 8), "some    test");
/// assert_eq!(expand_tabs_line("\tx", 4), "    x");
/// ```
pub fn expand_tabs_line(line: &str, tab_stop: usize) -> String {
    let mut expanded = String::with_capacity(line.len());
    let mut column = 0;

    for c in line.chars() {
        if c != '\t' {
            expanded.push(c);
            column += c.width().unwrap_or(1);
            continue;
        }
        if tab_stop == 0 {
            continue;
        }
        let spaces = tab_stop - (column % tab_stop);
        expanded.push_str(&" ".repeat(spaces));
        column += spaces;
    }

    expanded
}

/// Expands tab characters in multi-line text, one line at a time.
///
/// Line breaks are preserved; the column resets at the start of every line.
///
/// # Example
///
/// ```rust
/// use tabletown::expand_tabs;
///
/// assert_eq!(expand_tabs("a\tb\nsecond\tline", 8), "a       b\nsecond  line");
/// ```
pub fn expand_tabs(text: &str, tab_stop: usize) -> String {
    text.split('\n')
        .map(|line| expand_tabs_line(line, tab_stop))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pads one line of one cell to `width` and closes it with `bar`.
///
/// The result is the cell interior (`width + 2` columns: the padded text plus
/// one space of gutter on each side) followed by the vertical bar glyph.
/// Centered text puts the odd leftover space on the right.
///
/// # Example
///
/// ```rust
/// use tabletown::{pad_cell_line, Align};
///
/// assert_eq!(pad_cell_line("ab", 5, Align::Left, '|'), " ab    |");
/// assert_eq!(pad_cell_line("ab", 5, Align::Right, '|'), "    ab |");
/// assert_eq!(pad_cell_line("ab", 5, Align::Center, '|'), "  ab   |");
/// ```
pub fn pad_cell_line(text: &str, width: usize, align: Align, bar: char) -> String {
    let fill = (width as isize - display_width(text)).max(0) as usize;

    let (left, right) = match align {
        Align::Left => (0, fill),
        Align::Right => (fill, 0),
        Align::Center => (fill / 2, fill - fill / 2),
    };

    format!(
        " {}{}{} {}",
        " ".repeat(left),
        text,
        " ".repeat(right),
        bar
    )
}
