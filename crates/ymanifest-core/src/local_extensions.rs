//! Locally-installed extensions from `localextensions.xml`.
//!
//! Only the `name` attribute of each `<extension>` element under
//! `<hybrisconfig><extensions>` is read. `<path>` entries, `dir` attributes,
//! namespaces and comments are ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};
use ymanifest_fs::{ConfigFormat, ConfigStore};

use crate::error::Result;
use crate::outcome::Outcome;

/// An extension installed in the local platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalExtension {
    pub name: String,
}

impl LocalExtension {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Deserialize)]
struct HybrisConfig {
    #[serde(default)]
    extensions: ExtensionsElement,
}

#[derive(Debug, Default, Deserialize)]
struct ExtensionsElement {
    #[serde(rename = "extension", default)]
    entries: Vec<ExtensionElement>,
}

#[derive(Debug, Deserialize)]
struct ExtensionElement {
    #[serde(rename = "@name", default)]
    name: String,
}

impl HybrisConfig {
    /// Declared names in document order. Elements without a name
    /// (directory-only declarations) contribute nothing.
    fn into_extensions(self) -> Vec<LocalExtension> {
        self.extensions
            .entries
            .into_iter()
            .filter(|e| !e.name.is_empty())
            .map(|e| LocalExtension::new(e.name))
            .collect()
    }
}

/// Parse a local-extensions document.
pub fn parse_local_extensions(content: &str) -> Result<Vec<LocalExtension>> {
    let config: HybrisConfig = ConfigStore::new().decode(
        content,
        ConfigFormat::Xml,
        Path::new("<localextensions>"),
    )?;
    Ok(config.into_extensions())
}

/// Read and parse a local-extensions document from disk.
pub fn read_local_extensions(path: &Path) -> Result<Vec<LocalExtension>> {
    let config: HybrisConfig = ConfigStore::new().load(path)?;
    Ok(config.into_extensions())
}

/// Load local extensions without ever failing.
///
/// A read or parse error yields an empty list paired with the error, so
/// reconciliation falls back to the manifest's own extensions.
pub fn load_local_extensions(path: &Path) -> Outcome<Vec<LocalExtension>> {
    let outcome = Outcome::or_default(read_local_extensions(path));
    match outcome.error() {
        Some(err) => tracing::warn!("Local extensions contribute nothing: {}", err),
        None => tracing::debug!(
            "Loaded {} local extensions from {}",
            outcome.value().len(),
            path.display()
        ),
    }
    outcome
}
