//! Argument definitions.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tabletown::{Align, BorderStyle};

/// Render JSON, YAML or CSV data as a bordered text table.
#[derive(Debug, Parser)]
#[command(name = "tabletown")]
#[command(version)]
#[command(about = "Render JSON, YAML or CSV data as a bordered text table")]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a data file (or stdin) as a table
    Render(RenderArgs),

    /// Print the display width of a piece of text
    Width {
        /// Text to measure
        text: String,
    },

    /// Expand tab characters to spaces
    ExpandTabs {
        /// Text to expand
        text: String,

        /// Tab stop interval (0 removes tabs)
        #[arg(short, long, default_value_t = tabletown::DEFAULT_TAB_STOP)]
        tab_stop: usize,
    },
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Input file; stdin when omitted or `-`
    pub file: Option<PathBuf>,

    /// Input format; guessed from the file extension, JSON otherwise
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,

    /// Border theme: standard, solid or double
    #[arg(short, long)]
    pub border: Option<BorderStyle>,

    /// Column alignments in column order, e.g. `left,right,center`
    #[arg(short, long, value_delimiter = ',')]
    pub align: Vec<Align>,

    /// YAML file with render options; flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tab stop interval used when expanding tabs in cells
    #[arg(short, long)]
    pub tab_stop: Option<usize>,
}

impl RenderArgs {
    /// Path of the input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.file.as_deref().filter(|path| *path != Path::new("-"))
    }

    /// The explicit format, else the one implied by the file extension.
    pub fn input_format(&self) -> InputFormat {
        self.format
            .or_else(|| self.input_path().and_then(InputFormat::from_path))
            .unwrap_or_default()
    }
}

/// Supported input formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// An array of objects, or an object with `headers` and `rows`
    #[default]
    Json,
    /// The same shapes as JSON, written in YAML
    Yaml,
    /// Comma-separated values; the first record is the header
    Csv,
}

impl InputFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(InputFormat::Json),
            "yaml" | "yml" => Some(InputFormat::Yaml),
            "csv" => Some(InputFormat::Csv),
            _ => None,
        }
    }
}
