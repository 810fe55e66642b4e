//! The query command: load, validate, dispatch, print.

use std::io::Write;
use std::path::Path;

use ymanifest_core::{Dispatcher, Query, QueryOutput, load_manifest, validate_personas};

use crate::error::Result;
use crate::report;

/// Answer `token` against the manifest at `manifest_path`, writing to `out`.
///
/// Load failures and persona violations are reported on stderr and the
/// query still runs on whatever was loaded. An unrecognized token prints
/// nothing and succeeds. The version is printed without a trailing newline
/// so scripts can use it as a tag directly.
pub fn run_query(
    manifest_path: &Path,
    token: &str,
    latest: bool,
    out: &mut impl Write,
) -> Result<()> {
    let manifest = load_manifest(manifest_path).recover(report::load_failure);

    for violation in validate_personas(&manifest) {
        report::persona_violation(&violation);
    }

    let query: Query = match token.parse() {
        Ok(query) => query,
        Err(e) => {
            tracing::debug!("{}; nothing to do", e);
            return Ok(());
        }
    };

    let output = Dispatcher::new(&manifest)
        .with_latest(latest)
        .run(query)
        .recover(report::load_failure);

    match &output {
        QueryOutput::Version(_) => write!(out, "{output}")?,
        _ => writeln!(out, "{output}")?,
    }
    out.flush()?;
    Ok(())
}
