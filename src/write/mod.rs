//! Serialization of the merged tree to output bytes.

use crate::domain::OutputFormat;
use crate::error::MergeError;
use crate::utils::encode_output;
use serde_json::Value;

/// Serialize a tree to text in the target format.
///
/// Object keys are emitted in tree insertion order, so the writer preserves
/// whatever order the merge produced. YAML output is always block style:
/// YAML has no meaningful compact form, and the `pretty` flag only affects
/// JSON. This asymmetry is deliberate.
pub fn serialize(node: &Value, format: OutputFormat, pretty: bool) -> Result<String, MergeError> {
    match format {
        OutputFormat::Json => {
            let text = if pretty {
                serde_json::to_string_pretty(node)
            } else {
                serde_json::to_string(node)
            };
            text.map_err(|source| MergeError::Serialization {
                format: "JSON",
                source: Box::new(source),
            })
        }
        OutputFormat::Yaml => serde_yaml::to_string(node)
            .map_err(|source| MergeError::Serialization { format: "YAML", source: Box::new(source) }),
    }
}

/// Serialize and encode a tree into the bytes written to disk.
pub fn render(
    node: &Value,
    format: OutputFormat,
    pretty: bool,
    encoding: &str,
) -> Result<Vec<u8>, MergeError> {
    let text = serialize(node, format, pretty)?;
    encode_output(&text, encoding)
}
