//! Merge command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::OutputFormat;
use crate::error::MergeError;
use crate::load::load_document;
use crate::merge::merge_documents;
use crate::write::render;

/// Fallback when neither the CLI, the plan file, nor the project
/// environment names an output encoding.
const DEFAULT_ENCODING: &str = "UTF-8";

/// Ambient default encoding supplied by the invoking build system.
const PROJECT_ENCODING_VAR: &str = "DOC_MERGE_PROJECT_ENCODING";

#[derive(Args)]
pub struct MergeArgs {
    /// Input documents to merge, in precedence order (later wins)
    #[arg(value_name = "FILES")]
    pub inputs: Vec<PathBuf>,

    /// Path to a merge-plan file (doc-merge.toml or .doc-merge.yaml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory for the output file
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output base filename; the extension is derived from the format
    #[arg(short = 'n', long, value_name = "NAME")]
    pub output_filename: Option<String>,

    /// Output format: 'json' or 'yaml'
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Write compact single-line JSON (YAML output is always block style)
    #[arg(long)]
    pub compact: bool,

    /// Character encoding for the output file
    #[arg(short = 'e', long, value_name = "CHARSET", env = "DOC_MERGE_ENCODING")]
    pub encoding: Option<String>,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let file_config = load_config(&cwd, args.config.as_deref())?;

    let cli_overrides = CliOverrides {
        inputs: args.inputs,
        output_dir: args.output_dir,
        output_filename: args.output_filename,
        format: args.format,
        pretty: if args.compact { Some(false) } else { None },
        encoding: args.encoding,
    };

    let merged_config = merge_cli_with_config(file_config, cli_overrides);
    if merged_config.inputs.is_empty() {
        return Err(MergeError::InvalidConfig(
            "no input files given; pass FILES or set 'inputs' in the merge plan".to_string(),
        )
        .into());
    }

    // Strictly sequential: list order is merge precedence order, and the
    // first loader error aborts before anything is written.
    let mut documents = Vec::with_capacity(merged_config.inputs.len());
    for path in &merged_config.inputs {
        info!("Reading {}", path.display());
        documents.push(load_document(path)?);
    }

    let merged = merge_documents(&documents)?;

    let encoding = resolve_encoding(merged_config.encoding.as_deref());
    info!("Using '{}' encoding to write output", encoding);
    let bytes = render(&merged, merged_config.format, merged_config.pretty, &encoding)?;

    fs::create_dir_all(&merged_config.output_dir).with_context(|| {
        format!("failed to create output directory {}", merged_config.output_dir.display())
    })?;

    let output_path = merged_config.output_path();
    info!("Writing {}", output_path.display());
    fs::write(&output_path, bytes)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    println!("Merged {} document(s) into {}", documents.len(), output_path.display());

    Ok(())
}

/// Resolve the output encoding: explicit value, else the invoking build
/// system's project default, else UTF-8.
fn resolve_encoding(explicit: Option<&str>) -> String {
    if let Some(encoding) = explicit {
        if !encoding.trim().is_empty() {
            return encoding.to_string();
        }
    }

    match std::env::var(PROJECT_ENCODING_VAR) {
        Ok(project) if !project.trim().is_empty() => project,
        _ => DEFAULT_ENCODING.to_string(),
    }
}
