//! Error types for document loading.

use std::path::PathBuf;

/// Errors that can occur while loading a document.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not map to a supported format.
    #[error("unsupported input format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// The content is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The content is not valid TOML.
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The document's top level is not a mapping.
    #[error("top-level value must be a mapping, got {found}")]
    NotAMapping { found: &'static str },
}

/// Convenience alias for loader results.
pub type LoaderResult<T> = Result<T, LoaderError>;
