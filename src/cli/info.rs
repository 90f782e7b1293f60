//! Info command implementation

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use std::path::PathBuf;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::load::{detect_format, load_document};

#[derive(Args)]
pub struct InfoArgs {
    /// Input documents to inspect, in merge order
    #[arg(value_name = "FILES")]
    pub inputs: Vec<PathBuf>,

    /// Path to a merge-plan file (doc-merge.toml or .doc-merge.yaml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: InfoArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let file_config = load_config(&cwd, args.config.as_deref())?;
    let cli_overrides = CliOverrides { inputs: args.inputs, ..Default::default() };
    let merged_config = merge_cli_with_config(file_config, cli_overrides);

    if merged_config.inputs.is_empty() {
        anyhow::bail!("no input files given; pass FILES or set 'inputs' in the merge plan");
    }

    println!("Merge plan:");
    println!("  Documents:     {}", merged_config.inputs.len());
    println!("  Output format: {}", merged_config.format);
    println!("  Pretty print:  {}", merged_config.pretty);
    println!("  Output file:   {}", merged_config.output_path().display());
    println!();

    println!("Inputs (in precedence order, later wins):");
    let mut problems = 0usize;
    for (position, path) in merged_config.inputs.iter().enumerate() {
        let format = detect_format(path);
        match load_document(path) {
            Ok(doc) => {
                println!(
                    "  {}. {} [{}] {}",
                    position + 1,
                    path.display(),
                    format.as_str(),
                    describe_top_level(&doc)
                );
            }
            Err(err) => {
                problems += 1;
                println!("  {}. {} [{}] ERROR: {}", position + 1, path.display(), format.as_str(), err);
            }
        }
    }

    if problems > 0 {
        anyhow::bail!("{problems} of {} input(s) failed to load", merged_config.inputs.len());
    }

    Ok(())
}

fn describe_top_level(doc: &Value) -> String {
    match doc {
        Value::Object(map) => format!("object with {} key(s)", map.len()),
        Value::Array(items) => format!("array with {} element(s)", items.len()),
        Value::String(_) => "string".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Null => "null".to_string(),
    }
}
