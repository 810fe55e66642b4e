//! File access for the commerce manifest tool
//!
//! Provides read-only text loading and a format-agnostic decoder that picks
//! JSON, YAML, TOML or XML from the file extension.

pub mod error;
pub mod io;
pub mod store;

pub use error::{Error, Result};
pub use store::{ConfigFormat, ConfigStore};
