//! Error types for ymanifest-fs

use std::path::PathBuf;

/// Result type for ymanifest-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ymanifest-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the error came from reading the file rather than decoding it.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
