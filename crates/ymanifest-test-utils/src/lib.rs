//! Shared test utilities for the ymanifest workspace.
//!
//! This crate provides standardised descriptor fixtures so the crate test
//! suites do not each carry their own copy. It is a dev-dependency only,
//! never published.
//!
//! # Modules
//!
//! - [`fixtures`] — sample manifest and local-extensions documents
//! - [`project`] — [`TestProject`] builder for on-disk descriptor layouts

pub mod fixtures;
pub mod project;

pub use fixtures::{SAMPLE_LOCAL_EXTENSIONS_XML, SAMPLE_MANIFEST_JSON, local_extensions_xml};
pub use project::TestProject;
