//! Extension reconciliation.
//!
//! Merges the manifest's declared extensions with the locally-installed
//! ones into a single set of names.

use std::fmt;

use indexmap::IndexSet;

use crate::local_extensions::LocalExtension;

/// A set of extension names.
///
/// Iteration order is an implementation detail and not part of the
/// contract; equality ignores it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    names: IndexSet<String>,
}

impl ExtensionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name. Returns `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for ExtensionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

/// Space-separated names.
impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for name in &self.names {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

/// Union of local and manifest extension names, duplicates collapsed.
pub fn reconcile(manifest_extensions: &[String], local: &[LocalExtension]) -> ExtensionSet {
    let mut set = ExtensionSet::new();
    set.extend(local.iter().map(|e| e.name.as_str()));
    set.extend(manifest_extensions.iter().map(String::as_str));
    tracing::debug!(
        "Reconciled {} manifest and {} local extension(s) into {}",
        manifest_extensions.len(),
        local.len(),
        set.len()
    );
    set
}
