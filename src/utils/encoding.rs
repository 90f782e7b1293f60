//! Input decoding and output encoding.
//!
//! Input documents are decoded with BOM detection, a strict UTF-8 fast
//! path, and a chardetng fallback, so files saved by other build tools
//! parse without manual transcoding. Output text is encoded by charset
//! label through encoding_rs.

use crate::error::MergeError;
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::path::Path;
use tracing::warn;

/// Read a document file into a string.
///
/// Strategy:
/// 1. BOM markers first (UTF-8, UTF-16 LE/BE) - most reliable
/// 2. strict UTF-8 (fast path for most files)
/// 3. chardetng detection with replacement decoding
pub fn read_input(path: &Path) -> Result<String, MergeError> {
    let bytes = std::fs::read(path)
        .map_err(|source| MergeError::NotFound { path: path.to_path_buf(), source })?;
    Ok(decode_input(&bytes, path))
}

fn decode_input(bytes: &[u8], path: &Path) -> String {
    // decode() honors the BOM and strips it from the output.
    if bytes.starts_with(&[0xef, 0xbb, 0xbf]) {
        return UTF_8.decode(bytes).0.into_owned();
    }
    if bytes.starts_with(&[0xff, 0xfe]) {
        return UTF_16LE.decode(bytes).0.into_owned();
    }
    if bytes.starts_with(&[0xfe, 0xff]) {
        return UTF_16BE.decode(bytes).0.into_owned();
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!("replaced undecodable bytes while reading {} as {}", path.display(), encoding.name());
    }
    text.into_owned()
}

/// Encode serialized output text by charset label.
///
/// Unknown labels are an error. Characters the charset cannot represent are
/// replaced rather than failing the run. Per the Encoding Standard, UTF-16
/// labels have no encoder and fall back to UTF-8 output.
pub fn encode_output(text: &str, label: &str) -> Result<Vec<u8>, MergeError> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| MergeError::Encoding { label: label.to_string() })?;

    let (bytes, actual, had_errors) = encoding.encode(text);
    if actual != encoding {
        warn!("'{}' has no encoder; writing {} instead", encoding.name(), actual.name());
    }
    if had_errors {
        warn!("replaced characters not representable in {}", actual.name());
    }
    Ok(bytes.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_plain_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("{\"emoji\": \"🚀\"}".as_bytes()).unwrap();
        file.flush().unwrap();

        let content = read_input(file.path()).unwrap();
        assert_eq!(content, "{\"emoji\": \"🚀\"}");
    }

    #[test]
    fn test_read_strips_utf8_bom() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xef, 0xbb, 0xbf]).unwrap();
        file.write_all(b"{}").unwrap();
        file.flush().unwrap();

        assert_eq!(read_input(file.path()).unwrap(), "{}");
    }

    #[test]
    fn test_read_utf16le_with_bom() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe]).unwrap();
        for unit in "{\"a\": 1}".encode_utf16() {
            file.write_all(&unit.to_le_bytes()).unwrap();
        }
        file.flush().unwrap();

        assert_eq!(read_input(file.path()).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn test_read_latin1_fallback() {
        let mut file = NamedTempFile::new().unwrap();
        // "caf\xe9" is not valid UTF-8; chardetng should land on a
        // windows-1252-compatible decoding where 0xe9 is 'é'.
        file.write_all(b"caf\xe9 caf\xe9 caf\xe9").unwrap();
        file.flush().unwrap();

        let content = read_input(file.path()).unwrap();
        assert!(content.contains('é'), "got: {content}");
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let err = read_input(std::path::Path::new("/nonexistent/doc.json")).unwrap_err();
        assert!(matches!(err, MergeError::NotFound { .. }));
    }

    #[test]
    fn test_encode_utf8_roundtrip() {
        let bytes = encode_output("café", "UTF-8").unwrap();
        assert_eq!(bytes, "café".as_bytes());
    }

    #[test]
    fn test_encode_windows_1252() {
        let bytes = encode_output("café", "windows-1252").unwrap();
        assert_eq!(bytes, b"caf\xe9");
    }

    #[test]
    fn test_encode_label_is_case_insensitive() {
        assert!(encode_output("x", "Utf-8").is_ok());
        assert!(encode_output("x", "ISO-8859-1").is_ok());
    }

    #[test]
    fn test_encode_unknown_label_fails() {
        let err = encode_output("x", "not-a-charset").unwrap_err();
        assert!(matches!(err, MergeError::Encoding { .. }));
        assert!(err.to_string().contains("not-a-charset"));
    }

    #[test]
    fn test_utf16_label_falls_back_to_utf8_bytes() {
        let bytes = encode_output("ab", "UTF-16LE").unwrap();
        assert_eq!(bytes, b"ab");
    }

    #[test]
    fn test_unmappable_characters_are_replaced() {
        // '🚀' does not exist in windows-1252; it becomes an HTML-style
        // numeric reference rather than aborting.
        let bytes = encode_output("🚀", "windows-1252").unwrap();
        assert!(!bytes.is_empty());
    }
}
