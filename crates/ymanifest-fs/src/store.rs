//! Format-agnostic configuration loading

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Result, io};

/// Serialization format of a descriptor file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
    Xml,
}

impl ConfigFormat {
    /// Detect the format from a file extension (case-insensitive).
    ///
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    /// - `.toml` -> TOML
    /// - `.xml` -> XML
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        match extension.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "xml" => Ok(Self::Xml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Json => write!(f, "JSON"),
            ConfigFormat::Yaml => write!(f, "YAML"),
            ConfigFormat::Toml => write!(f, "TOML"),
            ConfigFormat::Xml => write!(f, "XML"),
        }
    }
}

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and handles
/// deserialization transparently. Read-only: descriptors are never written.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    /// Create a new ConfigStore.
    pub fn new() -> Self {
        Self
    }

    /// Load and decode a descriptor file, picking the format from its extension.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let format = ConfigFormat::from_path(path)?;
        let content = io::read_text(path)?;
        self.decode(&content, format, path)
    }

    /// Decode already-read content in the given format.
    ///
    /// `origin` is only used to label errors.
    pub fn decode<T: DeserializeOwned>(
        &self,
        content: &str,
        format: ConfigFormat,
        origin: &Path,
    ) -> Result<T> {
        let parse_error = |message: String| Error::ConfigParse {
            path: origin.to_path_buf(),
            format: format.to_string(),
            message,
        };

        match format {
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
            ConfigFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
            ConfigFormat::Xml => {
                quick_xml::de::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
        }
    }
}
