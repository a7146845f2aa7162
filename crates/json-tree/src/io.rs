//! File-backed convenience wrappers around [`crate::parser`] and
//! [`crate::serializer`]. Kept separate from the core value model so the rest
//! of the crate has no dependency on `std::fs`.

use std::path::Path;

use crate::error::Error;
use crate::parser;
use crate::serializer;
use crate::value::Value;

fn io_err(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Reads `path` and parses its contents as strict JSON.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or any parse error from
/// [`crate::parser::parse`] otherwise.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Value, Error> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read json file");
    parser::parse(&text)
}

/// Like [`parse_file`], but tolerates `/* */` and `//` comments.
///
/// # Errors
///
/// Same as [`parse_file`].
pub fn parse_file_with_comments(path: impl AsRef<Path>) -> Result<Value, Error> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    parser::parse_with_comments(&text)
}

/// Serializes `value` and writes it to `path`, overwriting any existing file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written, or
/// [`Error::NonFiniteNumber`] if `value` contains a non-finite number.
pub fn serialize_to_file(value: &Value, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let text = serializer::to_string(value)?;
    std::fs::write(path, text).map_err(|e| io_err(path, e))?;
    tracing::debug!(path = %path.display(), "wrote json file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_a_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("value.json");

        let mut value = Value::object();
        value.add("a", 1.0).unwrap();

        serialize_to_file(&value, &path).unwrap();
        let loaded = parse_file(&path).unwrap();
        assert_eq!(loaded, value);
    }

    #[test]
    fn parse_file_with_comments_tolerates_trailing_comment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("value.jsonc");
        std::fs::write(&path, "{\n  \"a\": 1 // note\n}").unwrap();

        let loaded = parse_file_with_comments(&path).unwrap();
        assert_eq!(loaded.get("a").unwrap().as_f64(), 1.0);
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = parse_file("/nonexistent/path/does-not-exist.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
