//! Merge-plan configuration types.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Serialization format for the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[serde(alias = "JSON")]
    Json,
    #[serde(alias = "YAML", alias = "yml")]
    Yaml,
}

impl OutputFormat {
    /// Extension appended to the output base filename.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("unknown output format '{other}' (expected 'json' or 'yaml')")),
        }
    }
}

/// Resolved merge plan.
///
/// Built from the plan file and CLI overrides with CLI > file > defaults
/// precedence (see `config::merge`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ordered input documents; later entries win merge conflicts.
    pub inputs: Vec<PathBuf>,

    /// Directory the output file is written into (created if missing).
    pub output_dir: PathBuf,

    /// Output base filename; the extension comes from `format`.
    pub output_filename: String,

    pub format: OutputFormat,

    /// Multi-line indented output. Only meaningful for JSON; YAML output is
    /// always block style.
    pub pretty: bool,

    /// Output charset label. `None` falls back to the project default
    /// encoding, then UTF-8.
    pub encoding: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output_dir: PathBuf::from("out"),
            output_filename: "merged".to_string(),
            format: OutputFormat::Json,
            pretty: true,
            encoding: None,
        }
    }
}

impl Config {
    /// Full path of the file the pipeline will write.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.{}", self.output_filename, self.format.extension()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_path_appends_format_extension() {
        let config = Config { format: OutputFormat::Yaml, ..Config::default() };
        assert_eq!(config.output_path(), PathBuf::from("out/merged.yaml"));
    }

    #[test]
    fn test_default_plan_is_pretty_json() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.pretty);
        assert!(config.encoding.is_none());
    }
}
