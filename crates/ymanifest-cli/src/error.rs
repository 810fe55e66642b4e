//! Error types for ymanifest-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that stop the CLI.
///
/// Load, decode and validation problems are reported as warnings and never
/// reach this type; only failures to write output do.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
