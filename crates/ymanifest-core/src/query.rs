//! Query dispatch over a loaded manifest.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;
use crate::local_extensions::load_local_extensions;
use crate::manifest::{Addon, Manifest};
use crate::outcome::Outcome;
use crate::reconcile::{ExtensionSet, reconcile};

/// Suffix for a bare release version when `latest` is requested.
pub const LATEST_SUFFIX: &str = ":latest";

/// A view of the manifest that can be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    /// The commerce suite version.
    Version,
    /// The storefront addon bindings.
    Addons,
    /// Manifest and local extensions merged into one set.
    Extensions,
}

impl Query {
    pub fn as_str(&self) -> &'static str {
        match self {
            Query::Version => "version",
            Query::Addons => "addons",
            Query::Extensions => "extensions",
        }
    }
}

impl FromStr for Query {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "version" => Ok(Query::Version),
            "addons" => Ok(Query::Addons),
            "extensions" => Ok(Query::Extensions),
            _ => Err(Error::UnknownQuery {
                query: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a query, rendered as plain text by `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutput {
    Version(String),
    Addons(Vec<Addon>),
    Extensions(ExtensionSet),
}

impl fmt::Display for QueryOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutput::Version(version) => f.write_str(version),
            QueryOutput::Addons(addons) => {
                for (i, addon) in addons.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{addon}")?;
                }
                Ok(())
            }
            QueryOutput::Extensions(set) => write!(f, "{set}"),
        }
    }
}

/// Tag a version for image lookup.
///
/// With `latest` set, a bare release such as `2211` becomes `2211:latest`.
/// A version that already names a patch (`2211.15`) is returned unchanged.
pub fn version_tag(version: &str, latest: bool) -> String {
    if latest && !version.contains('.') {
        format!("{version}{LATEST_SUFFIX}")
    } else {
        version.to_string()
    }
}

/// Answers queries against one loaded manifest.
pub struct Dispatcher<'a> {
    manifest: &'a Manifest,
    base_dir: Option<PathBuf>,
    latest: bool,
}

impl<'a> Dispatcher<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self {
            manifest,
            base_dir: None,
            latest: false,
        }
    }

    /// Resolve a relative local-extensions location against `dir` instead
    /// of the working directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Append `:latest` to a bare release version.
    pub fn with_latest(mut self, latest: bool) -> Self {
        self.latest = latest;
        self
    }

    /// Run a query.
    ///
    /// Only `extensions` touches the disk: the local-extensions descriptor is
    /// read on demand, and a failed read degrades the outcome to the
    /// manifest's own extensions.
    pub fn run(&self, query: Query) -> Outcome<QueryOutput> {
        tracing::debug!("Dispatching query '{}'", query);
        match query {
            Query::Version => Outcome::Complete(QueryOutput::Version(version_tag(
                self.manifest.version(),
                self.latest,
            ))),
            Query::Addons => {
                Outcome::Complete(QueryOutput::Addons(self.manifest.storefront_addons().to_vec()))
            }
            Query::Extensions => {
                let local = match self.local_extensions_path() {
                    Some(path) => load_local_extensions(&path),
                    None => {
                        tracing::debug!("No local extensions location configured");
                        Outcome::Complete(Vec::new())
                    }
                };
                local.map(|local| {
                    QueryOutput::Extensions(reconcile(self.manifest.extensions(), &local))
                })
            }
        }
    }

    fn local_extensions_path(&self) -> Option<PathBuf> {
        let location = self.manifest.local_extensions_path()?;
        Some(match &self.base_dir {
            Some(dir) => dir.join(location),
            None => location.to_path_buf(),
        })
    }
}
