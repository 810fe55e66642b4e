//! Best-effort results for load steps.
//!
//! Malformed or missing input never aborts a run. Each load step returns an
//! [`Outcome`] that always holds a usable value; when the step had to fall
//! back, the error that caused it travels alongside so the caller decides
//! how to report it before continuing.

use crate::error::{Error, Result};

/// A value plus, when a fallback was used, the error that forced it.
#[must_use = "a degraded outcome carries an error that should be reported"]
#[derive(Debug)]
pub enum Outcome<T> {
    /// The step succeeded.
    Complete(T),
    /// The step failed; `value` is the fallback.
    Degraded { value: T, error: Error },
}

impl<T> Outcome<T> {
    /// Convert a strict result, using `fallback` when it failed.
    pub fn from_result(result: Result<T>, fallback: impl FnOnce() -> T) -> Self {
        match result {
            Ok(value) => Outcome::Complete(value),
            Err(error) => Outcome::Degraded {
                value: fallback(),
                error,
            },
        }
    }

    /// Convert a strict result, falling back to `T::default()`.
    pub fn or_default(result: Result<T>) -> Self
    where
        T: Default,
    {
        Self::from_result(result, T::default)
    }

    /// The carried value, complete or fallback.
    pub fn value(&self) -> &T {
        match self {
            Outcome::Complete(value) | Outcome::Degraded { value, .. } => value,
        }
    }

    /// The error that forced a fallback, if any.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Outcome::Complete(_) => None,
            Outcome::Degraded { error, .. } => Some(error),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }

    pub fn into_parts(self) -> (T, Option<Error>) {
        match self {
            Outcome::Complete(value) => (value, None),
            Outcome::Degraded { value, error } => (value, Some(error)),
        }
    }

    /// Transform the value, keeping any error.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Complete(value) => Outcome::Complete(f(value)),
            Outcome::Degraded { value, error } => Outcome::Degraded {
                value: f(value),
                error,
            },
        }
    }

    /// Hand the error (if any) to `report` and continue with the value.
    pub fn recover(self, report: impl FnOnce(&Error)) -> T {
        let (value, error) = self.into_parts();
        if let Some(error) = error {
            report(&error);
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> Error {
        Error::Decode {
            path: "manifest.json".into(),
            format: "JSON".into(),
            message: "expected value".into(),
        }
    }

    #[test]
    fn test_ok_result_is_complete() {
        let outcome = Outcome::or_default(Ok(vec!["core".to_string()]));
        assert!(!outcome.is_degraded());
        assert!(outcome.error().is_none());
        assert_eq!(outcome.value(), &vec!["core".to_string()]);
    }

    #[test]
    fn test_err_result_falls_back_to_default() {
        let outcome: Outcome<Vec<String>> = Outcome::or_default(Err(decode_error()));
        assert!(outcome.is_degraded());
        assert!(outcome.value().is_empty());
        assert!(matches!(outcome.error(), Some(Error::Decode { .. })));
    }

    #[test]
    fn test_map_keeps_error() {
        let outcome = Outcome::from_result(Err(decode_error()), || 2).map(|n| n * 10);
        let (value, error) = outcome.into_parts();
        assert_eq!(value, 20);
        assert!(error.is_some());
    }

    #[test]
    fn test_recover_reports_once_and_returns_value() {
        let mut reported = Vec::new();
        let value = Outcome::from_result(Err(decode_error()), || "fallback")
            .recover(|e| reported.push(e.to_string()));

        assert_eq!(value, "fallback");
        assert_eq!(reported.len(), 1);
        assert!(reported[0].contains("manifest.json"));
    }

    #[test]
    fn test_recover_complete_reports_nothing() {
        let mut called = false;
        let value = Outcome::Complete(7).recover(|_| called = true);
        assert_eq!(value, 7);
        assert!(!called);
    }
}
