//! Render options that can be loaded from configuration files.
//!
//! ```yaml
//! border: solid
//! align: [left, right, centre]
//! tab_stop: 4
//! ```
//!
//! Every field is optional. Unknown border names or alignments are rejected
//! when the options are loaded, not when a table is rendered.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tabular::{Align, BorderStyle, DEFAULT_TAB_STOP};

/// Border, alignment and tab settings for rendering a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Border theme.
    pub border: BorderStyle,
    /// Alignment per column position; missing entries are left-aligned.
    pub align: Vec<Align>,
    /// Tab stop interval used when expanding tabs in cells.
    pub tab_stop: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            border: BorderStyle::default(),
            align: Vec::new(),
            tab_stop: DEFAULT_TAB_STOP,
        }
    }
}

impl RenderOptions {
    /// Parse options from YAML.
    ///
    /// An empty document gives the defaults.
    ///
    /// ```rust
    /// use tabletown::{Align, BorderStyle, RenderOptions};
    ///
    /// let options = RenderOptions::from_yaml("border: double\nalign: [right]").unwrap();
    /// assert_eq!(options.border, BorderStyle::Double);
    /// assert_eq!(options.align, vec![Align::Right]);
    /// assert_eq!(options.tab_stop, 8);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(RenderOptions::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}
