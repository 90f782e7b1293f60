//! Error taxonomy for the load/merge/write pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the pipeline.
///
/// All of these are deterministic input problems, so nothing is retried.
/// Each variant carries the offending path or label; the CLI reports the
/// chain and aborts.
#[derive(Debug, Error)]
pub enum MergeError {
    /// Input path missing or unreadable.
    #[error("input file not found or unreadable: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input content is not valid for its detected grammar.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Empty input list or an otherwise unusable merge plan.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The requested output charset label is not recognized.
    #[error("unrecognized output encoding '{label}'")]
    Encoding { label: String },

    /// The merged tree could not be serialized in the target format.
    #[error("failed to serialize merged document as {format}: {source}")]
    Serialization {
        format: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
