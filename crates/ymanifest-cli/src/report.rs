//! Diagnostics printed to stderr.
//!
//! Stdout carries only query output so it can be captured by scripts.

use colored::Colorize;
use ymanifest_core::{Error, PersonaViolation};

pub fn warning(message: impl std::fmt::Display) {
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}

/// A load step fell back to defaults for whatever it could not read.
pub fn load_failure(error: &Error) {
    warning(format!("{error}; continuing with what was loaded"));
}

pub fn persona_violation(violation: &PersonaViolation) {
    warning(violation);
}
