//! Error types for ymanifest-core

use std::path::PathBuf;

/// Result type for ymanifest-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or querying a manifest
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input file missing or unreadable
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed structured content
    #[error("Failed to decode {format} content of {path}: {message}")]
    Decode {
        path: PathBuf,
        format: String,
        message: String,
    },

    /// Query token outside `version`, `addons`, `extensions`
    #[error("Unknown query: {query}")]
    UnknownQuery { query: String },

    /// Failed to serialize the manifest
    #[error("Failed to serialize manifest: {0}")]
    Serialize(String),

    /// Other filesystem layer errors (e.g. unsupported descriptor format)
    #[error(transparent)]
    Fs(ymanifest_fs::Error),
}

impl From<ymanifest_fs::Error> for Error {
    fn from(err: ymanifest_fs::Error) -> Self {
        match err {
            ymanifest_fs::Error::Io { path, source } => Error::FileRead { path, source },
            ymanifest_fs::Error::ConfigParse {
                path,
                format,
                message,
            } => Error::Decode {
                path,
                format,
                message,
            },
            other => Error::Fs(other),
        }
    }
}
