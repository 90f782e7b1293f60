//! Document loading with format auto-detection.

use crate::error::MergeError;
use crate::utils::read_input;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Input grammar, detected from the filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Detect the grammar from the path's extension.
///
/// Case-insensitive `yaml`/`yml` selects YAML; any other extension,
/// including none at all, is treated as JSON. Pure string matching, no
/// filesystem access.
pub fn detect_format(path: &Path) -> DocumentFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
            DocumentFormat::Yaml
        }
        _ => DocumentFormat::Json,
    }
}

/// Load one document into an in-memory tree.
///
/// A parse failure yields no tree at all; partially-parsed state is never
/// exposed to the caller.
pub fn load_document(path: &Path) -> Result<Value, MergeError> {
    let format = detect_format(path);
    debug!("reading {} as {}", path.display(), format.as_str());
    let content = read_input(path)?;
    parse_document(&content, format)
        .map_err(|source| MergeError::Parse { path: path.to_path_buf(), source })
}

fn parse_document(
    content: &str,
    format: DocumentFormat,
) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        // YAML trees the JSON model cannot hold (non-string mapping keys,
        // non-finite floats) fail here and surface as parse errors.
        DocumentFormat::Yaml => Ok(serde_yaml::from_str(content)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_detect_format_by_extension() {
        assert_eq!(detect_format(&PathBuf::from("a.yaml")), DocumentFormat::Yaml);
        assert_eq!(detect_format(&PathBuf::from("a.yml")), DocumentFormat::Yaml);
        assert_eq!(detect_format(&PathBuf::from("a.YAML")), DocumentFormat::Yaml);
        assert_eq!(detect_format(&PathBuf::from("a.Yml")), DocumentFormat::Yaml);
        assert_eq!(detect_format(&PathBuf::from("a.json")), DocumentFormat::Json);
        assert_eq!(detect_format(&PathBuf::from("a.txt")), DocumentFormat::Json);
        assert_eq!(detect_format(&PathBuf::from("no_extension")), DocumentFormat::Json);
        assert_eq!(detect_format(&PathBuf::from("dir.yaml/file")), DocumentFormat::Json);
    }

    #[test]
    fn test_load_json_document() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("doc.json");
        fs::write(&path, r#"{"name": "svc", "port": 8080}"#).expect("write");

        let doc = load_document(&path).expect("load");
        assert_eq!(doc, json!({"name": "svc", "port": 8080}));
    }

    #[test]
    fn test_load_yaml_document() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("doc.yaml");
        fs::write(&path, "name: svc\nport: 8080\ntags:\n  - a\n  - b\n").expect("write");

        let doc = load_document(&path).expect("load");
        assert_eq!(doc, json!({"name": "svc", "port": 8080, "tags": ["a", "b"]}));
    }

    #[test]
    fn test_unknown_extension_parses_as_json() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("doc.conf");
        fs::write(&path, r#"{"a": 1}"#).expect("write");

        assert_eq!(load_document(&path).expect("load"), json!({"a": 1}));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let tmp = TempDir::new().expect("tmp");
        let err = load_document(&tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, MergeError::NotFound { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.json");
        fs::write(&path, "{ not json").expect("write");

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, MergeError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.yaml");
        fs::write(&path, "key: [unclosed\n").expect("write");

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, MergeError::Parse { .. }));
    }

    #[test]
    fn test_yaml_non_string_keys_are_parse_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("keys.yaml");
        fs::write(&path, "1: one\n2: two\n").expect("write");

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, MergeError::Parse { .. }));
    }

    #[test]
    fn test_utf8_bom_input_parses() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bom.json");
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice(br#"{"a": 1}"#);
        fs::write(&path, bytes).expect("write");

        assert_eq!(load_document(&path).expect("load"), json!({"a": 1}));
    }
}
