//! Core types for table rendering: alignment, border themes, and cell values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Center text (pad on both sides, odd space on the right).
    #[serde(alias = "centre")]
    Center,
    /// Right-align text (pad on the left).
    Right,
}

impl FromStr for Align {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Align::Left),
            "center" | "centre" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            _ => Err(TableError::UnknownAlignment(s.to_string())),
        }
    }
}

/// Border theme for table decoration.
///
/// The glyphs for each theme are compiled-in constants; there is no way to
/// register or modify a theme at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// ASCII borders: +, -, |
    #[default]
    Standard,
    /// Single-line box-drawing: ┌, ─, ┬, ┐, │, ├, ┼, ┤, └, ┴, ┘
    Solid,
    /// Double-line box-drawing: ╔, ═, ╦, ╗, ║, ╠, ╬, ╣, ╚, ╩, ╝
    Double,
}

impl BorderStyle {
    /// All registered themes.
    pub const ALL: [BorderStyle; 3] = [BorderStyle::Standard, BorderStyle::Solid, BorderStyle::Double];

    /// The registry name of this theme.
    pub fn name(&self) -> &'static str {
        match self {
            BorderStyle::Standard => "standard",
            BorderStyle::Solid => "solid",
            BorderStyle::Double => "double",
        }
    }

    /// Get the glyph set for this border style.
    pub fn chars(&self) -> &'static BorderChars {
        match self {
            BorderStyle::Standard => &STANDARD,
            BorderStyle::Solid => &SOLID,
            BorderStyle::Double => &DOUBLE,
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderStyle {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        BorderStyle::ALL
            .into_iter()
            .find(|style| style.name() == name)
            .ok_or_else(|| TableError::UnknownBorderTheme(s.to_string()))
    }
}

/// Glyphs for one divider position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DividerChars {
    pub left: char,
    pub join: char,
    pub right: char,
}

/// Glyph set of a border theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderChars {
    /// Vertical bar between and around cells.
    pub bar: char,
    /// Horizontal rule character of divider lines.
    pub separator: char,
    pub top: DividerChars,
    pub inner: DividerChars,
    pub bottom: DividerChars,
}

impl BorderChars {
    /// Glyphs for the given divider position.
    pub fn divider(&self, line_type: LineType) -> &DividerChars {
        match line_type {
            LineType::Top => &self.top,
            LineType::Inner => &self.inner,
            LineType::Bottom => &self.bottom,
        }
    }
}

static STANDARD: BorderChars = BorderChars {
    bar: '|',
    separator: '-',
    top: DividerChars {
        left: '+',
        join: '+',
        right: '+',
    },
    inner: DividerChars {
        left: '+',
        join: '+',
        right: '+',
    },
    bottom: DividerChars {
        left: '+',
        join: '+',
        right: '+',
    },
};

static SOLID: BorderChars = BorderChars {
    bar: '│',
    separator: '─',
    top: DividerChars {
        left: '┌',
        join: '┬',
        right: '┐',
    },
    inner: DividerChars {
        left: '├',
        join: '┼',
        right: '┤',
    },
    bottom: DividerChars {
        left: '└',
        join: '┴',
        right: '┘',
    },
};

static DOUBLE: BorderChars = BorderChars {
    bar: '║',
    separator: '═',
    top: DividerChars {
        left: '╔',
        join: '╦',
        right: '╗',
    },
    inner: DividerChars {
        left: '╠',
        join: '╬',
        right: '╣',
    },
    bottom: DividerChars {
        left: '╚',
        join: '╩',
        right: '╝',
    },
};

/// Position of a horizontal divider line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineType {
    Top,
    /// Between the header and the data rows.
    Inner,
    Bottom,
}

/// A scalar cell value.
///
/// Every cell is turned into text before layout; numbers are rendered with
/// their plain `Display` form and no other formatting.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Int(n) => write!(f, "{}", n),
            Cell::Float(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&String> for Cell {
    fn from(s: &String) -> Self {
        Cell::Text(s.clone())
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

impl From<i32> for Cell {
    fn from(n: i32) -> Self {
        Cell::Int(n.into())
    }
}

impl From<u32> for Cell {
    fn from(n: u32) -> Self {
        Cell::Int(n.into())
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Int(n)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Float(n)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
