//! [`TestProject`] builder for on-disk descriptor layouts.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{SAMPLE_LOCAL_EXTENSIONS_XML, SAMPLE_MANIFEST_JSON};

/// Relative path of the manifest inside a project.
pub const MANIFEST_RELATIVE_PATH: &str = "test-resources/manifest.json";

/// A temporary project directory holding a manifest and, optionally, a
/// local-extensions descriptor.
///
/// # Example
///
/// ```rust,no_run
/// use ymanifest_test_utils::TestProject;
///
/// let project = TestProject::sample();
/// assert!(project.manifest_path().exists());
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// A project with the sample manifest and sample local extensions.
    pub fn sample() -> Self {
        let project = Self::new();
        project.write_manifest(SAMPLE_MANIFEST_JSON);
        project.write_local_extensions("localextensions.xml", SAMPLE_LOCAL_EXTENSIONS_XML);
        project
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path the manifest is (or would be) written to.
    pub fn manifest_path(&self) -> PathBuf {
        self.root().join(MANIFEST_RELATIVE_PATH)
    }

    /// Write `content` as the project manifest.
    pub fn write_manifest(&self, content: &str) -> PathBuf {
        let path = self.manifest_path();
        write_file(&path, content);
        path
    }

    /// Write a local-extensions descriptor at `location` relative to the
    /// project root, where queries run from.
    pub fn write_local_extensions(&self, location: &str, content: &str) -> PathBuf {
        let path = self.root().join(location);
        write_file(&path, content);
        path
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("failed to create {}: {e}", parent.display()));
    }
    fs::write(path, content).unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
}
