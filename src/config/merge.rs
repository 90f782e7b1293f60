//! CLI override merging

use crate::domain::{Config, OutputFormat};
use std::path::PathBuf;

/// Values supplied on the command line. `None` (or an empty input list)
/// leaves the plan-file value in place.
///
/// This is a flat field-wise overlay for settings, not the document merge
/// engine; the two are deliberately unrelated.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub inputs: Vec<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub output_filename: Option<String>,
    pub format: Option<OutputFormat>,
    pub pretty: Option<bool>,
    pub encoding: Option<String>,
}

/// Apply CLI overrides on top of the plan-file config.
///
/// Positional inputs on the CLI replace the plan's input list wholesale:
/// the list order is merge precedence, and partially splicing two ordered
/// lists would be surprising.
pub fn merge_cli_with_config(file: Config, cli: CliOverrides) -> Config {
    let mut merged = file;

    if !cli.inputs.is_empty() {
        merged.inputs = cli.inputs;
    }
    if let Some(output_dir) = cli.output_dir {
        merged.output_dir = output_dir;
    }
    if let Some(output_filename) = cli.output_filename {
        merged.output_filename = output_filename;
    }
    if let Some(format) = cli.format {
        merged.format = format;
    }
    if let Some(pretty) = cli.pretty {
        merged.pretty = pretty;
    }
    if let Some(encoding) = cli.encoding {
        merged.encoding = Some(encoding);
    }

    merged
}
