//! Commerce manifest query CLI
//!
//! Reads a deployment manifest and prints the requested view of it.

mod cli;
mod commands;
mod error;
mod report;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            report::warning(format!("failed to set tracing subscriber: {e}"));
        }
        tracing::debug!("Verbose mode enabled");
    }

    match cli.query {
        Some(query) => {
            let stdout = std::io::stdout();
            commands::run_query(&cli.manifest, &query, cli.latest, &mut stdout.lock())
        }
        None => {
            // No query provided - show usage hint
            println!("Please specify what to do: version, addons or extensions");
            println!();
            println!("Run {} for details.", "ymanifest --help".cyan());
            Ok(())
        }
    }
}
