//! Command implementations for ymanifest-cli

pub mod query;

pub use query::run_query;
