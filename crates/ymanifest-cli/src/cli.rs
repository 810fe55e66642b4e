//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use ymanifest_core::DEFAULT_MANIFEST_PATH;

/// Query a commerce deployment manifest
#[derive(Parser, Debug)]
#[command(name = "ymanifest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Add ':latest' tag, if patch version is missing
    #[arg(long)]
    pub latest: bool,

    /// Path to the manifest descriptor
    #[arg(long, env = "YMANIFEST_MANIFEST", default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest: PathBuf,

    /// What to show: version, addons or extensions (case-insensitive)
    pub query: Option<String>,
}
