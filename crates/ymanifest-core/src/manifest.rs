//! Deployment manifest model.
//!
//! The manifest describes a commerce-platform build: suite version,
//! extensions, storefront addons, properties, aspects and test selections.
//! Keys are the camelCase names used by the cloud `manifest.json`:
//!
//! ```json
//! {
//!   "commerceSuiteVersion": "2211.15",
//!   "extensions": ["modeltacceleratorservices"],
//!   "useConfig": {
//!     "extensions": { "location": "hybris/config/localextensions.xml" }
//!   },
//!   "storefrontAddons": [
//!     { "addon": "smarteditaddon", "storefront": "yacceleratorstorefront" }
//!   ],
//!   "properties": [
//!     { "key": "mail.smtp.server", "value": "smtp.example.com", "persona": "production" }
//!   ]
//! }
//! ```
//!
//! Unknown keys are ignored and missing keys take zero values, so a
//! manifest written for a newer platform release still loads. When a value
//! has the wrong type, [`load_manifest`] keeps every other entry and leaves
//! that one at its zero value.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ymanifest_fs::{ConfigFormat, ConfigStore};

use crate::error::{Error, Result};
use crate::outcome::Outcome;
use crate::persona::{InvalidPersonaError, Persona};

/// Root deployment descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Manifest {
    /// Suite version, either a bare release ("2211") or release plus patch ("2211.15").
    pub commerce_suite_version: String,
    pub use_cloud_extension_pack: bool,
    pub enable_image_processing_service: bool,
    /// Extension names declared by the manifest, duplicates allowed.
    pub extensions: Vec<String>,
    pub extension_packs: Vec<ExtensionPack>,
    pub troubleshooting_mode_enabled: bool,
    pub disable_image_reuse: bool,
    pub use_config: Config,
    pub storefront_addons: Vec<Addon>,
    pub properties: Vec<Property>,
    pub aspects: Vec<Aspect>,
    pub tests: Test,
    pub web_tests: Test,
}

/// A named, versioned add-on module reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionPack {
    pub name: String,
    pub version: String,
    pub artifact: String,
}

/// Locations of external configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extensions: ExtensionsConfig,
    pub properties: Vec<PropertyFile>,
    pub solr: Location,
    pub languages: Location,
}

/// Where the local-extensions descriptor lives, and what to leave out of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionsConfig {
    pub location: String,
    pub exclude: Vec<String>,
}

/// A per-environment property file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyFile {
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect: Option<String>,
    pub persona: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub location: String,
}

/// Binds one or more storefront addons to one or more storefronts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Addon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addon: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storefront: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub storefronts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<String>,
}

impl Addon {
    /// Bind a single addon to a single storefront.
    pub fn new(addon: impl Into<String>, storefront: impl Into<String>) -> Self {
        Self {
            addon: Some(addon.into()),
            storefront: Some(storefront.into()),
            ..Self::default()
        }
    }

    /// Addon names, the single `addon` first.
    pub fn addon_names(&self) -> impl Iterator<Item = &str> {
        self.addon
            .as_deref()
            .into_iter()
            .chain(self.addons.iter().map(String::as_str))
    }

    /// Storefront names, the single `storefront` first.
    pub fn storefront_names(&self) -> impl Iterator<Item = &str> {
        self.storefront
            .as_deref()
            .into_iter()
            .chain(self.storefronts.iter().map(String::as_str))
    }

    /// Template the addon is installed from. Not part of query output.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }
}

impl fmt::Display for Addon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let addons: Vec<&str> = self.addon_names().collect();
        let storefronts: Vec<&str> = self.storefront_names().collect();
        write!(f, "{}", addons.join(","))?;
        if !storefronts.is_empty() {
            write!(f, " -> {}", storefronts.join(","))?;
        }
        Ok(())
    }
}

/// A configuration property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    pub key: String,
    pub value: String,
    /// Raw persona label; see [`Property::persona`].
    pub persona: String,
    /// Marks the value for redaction. Preserved, not enforced.
    pub secret: bool,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<String>, persona: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            persona: persona.into(),
            secret: false,
        }
    }

    /// Parse the persona label.
    pub fn persona(&self) -> std::result::Result<Persona, InvalidPersonaError> {
        self.persona.parse()
    }
}

/// A logical application facet with its own properties and webapps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aspect {
    pub name: String,
    pub properties: Vec<Property>,
    pub webapps: Vec<Webapp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Webapp {
    pub name: String,
    pub context_path: String,
}

/// Test selection filter. The four lists are independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Test {
    pub extensions: Vec<String>,
    pub annotations: Vec<String>,
    pub packages: Vec<String>,
    pub excluded_packages: Vec<String>,
}

impl Manifest {
    /// Parse a manifest from JSON content.
    pub fn from_json(content: &str) -> Result<Self> {
        let manifest = ConfigStore::new().decode(
            content,
            ConfigFormat::Json,
            Path::new("<manifest>"),
        )?;
        Ok(manifest)
    }

    /// Read and parse a manifest, picking the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let manifest = ConfigStore::new().load(path)?;
        Ok(manifest)
    }

    /// Serialize the manifest back to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialize(e.to_string()))
    }

    pub fn version(&self) -> &str {
        &self.commerce_suite_version
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn storefront_addons(&self) -> &[Addon] {
        &self.storefront_addons
    }

    /// The configured local-extensions location, exactly as written.
    ///
    /// A relative location resolves against the working directory. Returns
    /// `None` when no location is configured.
    pub fn local_extensions_path(&self) -> Option<&Path> {
        let location = &self.use_config.extensions.location;
        if location.is_empty() {
            return None;
        }
        Some(Path::new(location))
    }

    /// Decode an already-parsed document, keeping whatever fits the model.
    ///
    /// An entry whose value has the wrong type is left at its zero value and
    /// the other entries still load. Nested objects are kept entry by entry;
    /// a list with a bad element is dropped whole. The outcome is degraded
    /// with a `Decode` error naming the first mismatch.
    pub fn from_document(document: Value, format: ConfigFormat, origin: &Path) -> Outcome<Self> {
        let error = match Manifest::deserialize(&document) {
            Ok(manifest) => return Outcome::Complete(manifest),
            Err(e) => Error::Decode {
                path: origin.to_path_buf(),
                format: format.to_string(),
                message: e.to_string(),
            },
        };

        let mut kept = Value::Object(Map::new());
        if let Value::Object(entries) = document {
            keep_decodable(&mut kept, &mut Vec::new(), entries);
        }
        Outcome::Degraded {
            value: Manifest::deserialize(&kept).unwrap_or_default(),
            error,
        }
    }
}

/// Copy `entries` into `kept` under `path`, skipping any entry that would
/// stop `kept` from decoding as a [`Manifest`].
fn keep_decodable(kept: &mut Value, path: &mut Vec<String>, entries: Map<String, Value>) {
    for (key, value) in entries {
        path.push(key);
        match value {
            Value::Object(inner) => {
                set_at(kept, path, Value::Object(Map::new()));
                if decodes(kept) {
                    keep_decodable(kept, path, inner);
                } else {
                    remove_at(kept, path);
                }
            }
            value => {
                set_at(kept, path, value);
                if !decodes(kept) {
                    remove_at(kept, path);
                }
            }
        }
        path.pop();
    }
}

fn decodes(document: &Value) -> bool {
    Manifest::deserialize(document).is_ok()
}

fn object_at<'v>(document: &'v mut Value, path: &[String]) -> Option<&'v mut Map<String, Value>> {
    let mut current = document;
    for key in path {
        current = current.get_mut(key)?;
    }
    current.as_object_mut()
}

fn set_at(document: &mut Value, path: &[String], value: Value) {
    if let Some((key, parents)) = path.split_last() {
        if let Some(object) = object_at(document, parents) {
            object.insert(key.clone(), value);
        }
    }
}

fn remove_at(document: &mut Value, path: &[String]) {
    if let Some((key, parents)) = path.split_last() {
        if let Some(object) = object_at(document, parents) {
            object.remove(key);
        }
    }
}

/// Load a manifest without ever failing.
///
/// A read or syntax error yields an empty manifest paired with the error. A
/// document that parses but has mistyped values yields everything that did
/// decode, paired with the `Decode` error.
pub fn load_manifest(path: &Path) -> Outcome<Manifest> {
    let document = ConfigFormat::from_path(path).and_then(|format| {
        ConfigStore::new()
            .load::<Value>(path)
            .map(|document| (format, document))
    });
    let outcome = match document {
        Ok((format, document)) => Manifest::from_document(document, format, path),
        Err(e) => Outcome::Degraded {
            value: Manifest::default(),
            error: e.into(),
        },
    };
    match outcome.error() {
        Some(err) => tracing::warn!("Continuing with a partial manifest: {}", err),
        None => tracing::debug!("Loaded manifest from {}", path.display()),
    }
    outcome
}
