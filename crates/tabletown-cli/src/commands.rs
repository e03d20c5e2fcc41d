//! Subcommand execution.

use std::fs;
use std::io::{Read, Write};

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use tabletown::{display_width, expand_tabs, RenderOptions, Table, TableData, TableSource};
use tracing::debug;

use crate::cli::{Cli, Commands, InputFormat, RenderArgs};

/// Execute a parsed command, reading input from `stdin` when no file is
/// given and writing results to `out`.
pub fn run<R: Read, W: Write>(cli: Cli, stdin: R, out: &mut W) -> Result<()> {
    match cli.command {
        Commands::Render(args) => {
            let output = render(&args, stdin)?;
            writeln!(out, "{output}")?;
        }
        Commands::Width { text } => {
            writeln!(out, "{}", display_width(&text))?;
        }
        Commands::ExpandTabs { text, tab_stop } => {
            writeln!(out, "{}", expand_tabs(&text, tab_stop))?;
        }
    }
    Ok(())
}

/// Load options, read and normalize the input, and render it.
pub fn render<R: Read>(args: &RenderArgs, stdin: R) -> Result<String> {
    let options = load_options(args)?;
    let input = read_input(args, stdin)?;
    let format = args.input_format();
    debug!(?format, bytes = input.len(), "read table input");

    let data = parse_input(&input, format)?;
    let output = Table::from_data(data).options(&options).render()?;
    Ok(output)
}

/// Options from `--config`, overridden by any flags given.
pub fn load_options(args: &RenderArgs) -> Result<RenderOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let yaml = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            RenderOptions::from_yaml(&yaml)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => RenderOptions::default(),
    };

    if let Some(border) = args.border {
        options.border = border;
    }
    if !args.align.is_empty() {
        options.align = args.align.clone();
    }
    if let Some(tab_stop) = args.tab_stop {
        options.tab_stop = tab_stop;
    }
    Ok(options)
}

fn read_input<R: Read>(args: &RenderArgs, mut stdin: R) -> Result<String> {
    match args.input_path() {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            stdin
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Parse input text into table data.
pub fn parse_input(input: &str, format: InputFormat) -> Result<TableData> {
    let value: Value = match format {
        InputFormat::Csv => {
            return TableData::from_csv(input.as_bytes()).context("failed to parse CSV input");
        }
        InputFormat::Json => serde_json::from_str(input).context("failed to parse JSON input")?,
        InputFormat::Yaml => serde_yaml::from_str(input).context("failed to parse YAML input")?,
    };

    TableSource::from_value(value)
        .and_then(TableSource::normalize)
        .ok_or_else(|| {
            anyhow!(
                "unsupported input: expected a non-empty array of objects, \
                 or an object with 'headers' and 'rows' arrays"
            )
        })
}
