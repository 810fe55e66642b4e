//! Core logic for the commerce manifest tool.
//!
//! This crate owns the deployment manifest model, the local-extensions
//! descriptor, persona validation, extension reconciliation and the query
//! dispatcher that answers `version`, `addons` and `extensions`.
//!
//! Loading is best effort: every load step returns an [`Outcome`] that always
//! carries a usable value, paired with the error when a fallback was used.

pub mod error;
pub mod local_extensions;
pub mod manifest;
pub mod outcome;
pub mod persona;
pub mod query;
pub mod reconcile;
pub mod validation;

/// Conventional location of the manifest descriptor, relative to the working directory.
pub const DEFAULT_MANIFEST_PATH: &str = "test-resources/manifest.json";

pub use error::{Error, Result};
pub use local_extensions::{
    LocalExtension, load_local_extensions, parse_local_extensions, read_local_extensions,
};
pub use manifest::{
    Addon, Aspect, Config, ExtensionPack, ExtensionsConfig, Location, Manifest, Property,
    PropertyFile, Test, Webapp, load_manifest,
};
pub use outcome::Outcome;
pub use persona::{InvalidPersonaError, Persona};
pub use query::{Dispatcher, LATEST_SUFFIX, Query, QueryOutput, version_tag};
pub use reconcile::{ExtensionSet, reconcile};
pub use validation::{PersonaOwner, PersonaViolation, validate_personas};
