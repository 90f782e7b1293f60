//! doc-merge: Deterministic deep-merge of JSON and YAML documents
//!
//! This tool reads an ordered list of JSON/YAML documents, folds them
//! left-to-right through a recursive deep merge, and writes the result in a
//! chosen format and character encoding. Built as a step for build pipelines.

use anyhow::Result;

mod cli;
mod config;
mod domain;
mod error;
mod load;
mod merge;
mod utils;
mod write;

fn main() -> Result<()> {
    cli::run()
}
