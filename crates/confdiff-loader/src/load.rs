//! File reading and format dispatch.

use std::fs;
use std::path::Path;

use confdiff_diff::Document;
use serde_json::Value;
use tracing::debug;

use crate::error::{LoaderError, LoaderResult};

/// A supported input serialization format, selected by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Select the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> LoaderResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(LoaderError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Parse raw document text in the given format.
///
/// The top level must be a mapping; anything else is rejected here, before
/// the diff ever sees it.
pub fn parse(raw: &str, format: InputFormat) -> LoaderResult<Document> {
    let value: Value = match format {
        InputFormat::Json => serde_json::from_str(raw)?,
        InputFormat::Toml => toml::from_str(raw)?,
    };
    match value {
        Value::Object(map) => Ok(map),
        other => Err(LoaderError::NotAMapping {
            found: type_name(&other),
        }),
    }
}

/// Read and parse a document file, picking the format from its extension.
pub fn load(path: &Path) -> LoaderResult<Document> {
    let format = InputFormat::from_path(path)?;
    let raw = fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse(&raw, format)?;
    debug!(path = %path.display(), ?format, keys = document.len(), "document loaded");
    Ok(document)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            InputFormat::from_path(Path::new("a/before.json")).unwrap(),
            InputFormat::Json
        );
        assert_eq!(
            InputFormat::from_path(Path::new("after.TOML")).unwrap(),
            InputFormat::Toml
        );
    }

    #[test]
    fn unknown_extension_rejected() {
        let err = InputFormat::from_path(Path::new("config.yaml")).unwrap_err();
        assert!(matches!(err, LoaderError::UnsupportedFormat { .. }));
    }

    #[test]
    fn parse_json_document() {
        let doc = parse(r#"{"host": "localhost", "port": 8080}"#, InputFormat::Json).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc["port"], json!(8080));
    }

    #[test]
    fn parse_toml_document() {
        let raw = "title = \"demo\"\n\n[server]\nhost = \"localhost\"\n";
        let doc = parse(raw, InputFormat::Toml).unwrap();
        assert_eq!(doc["title"], json!("demo"));
        assert_eq!(doc["server"]["host"], json!("localhost"));
    }

    #[test]
    fn top_level_array_is_not_a_mapping() {
        let err = parse("[1, 2, 3]", InputFormat::Json).unwrap_err();
        match err {
            LoaderError::NotAMapping { found } => assert_eq!(found, "array"),
            other => panic!("expected NotAMapping, got {:?}", other),
        }
    }

    #[test]
    fn top_level_scalar_is_not_a_mapping() {
        let err = parse("42", InputFormat::Json).unwrap_err();
        assert!(matches!(err, LoaderError::NotAMapping { found: "number" }));
    }

    #[test]
    fn invalid_json_reported() {
        let err = parse("{not json", InputFormat::Json).unwrap_err();
        assert!(matches!(err, LoaderError::Json(_)));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("before.json");
        fs::write(&path, r#"{"a": 1, "b": {"c": 2}}"#).unwrap();

        let doc = load(&path).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc["b"]["c"], json!(2));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load(Path::new("/nonexistent/before.json")).unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
    }
}
