//! Deployment-environment labels attached to configuration values.

use std::fmt;
use std::str::FromStr;

/// Environment a property value applies to.
///
/// Descriptors carry the label as a plain string; [`Persona::from_str`]
/// is the only way to obtain a `Persona`, so an unrecognized label can
/// never exist as a value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Persona {
    /// Empty label: the value applies to every environment.
    #[default]
    All,
    Development,
    Staging,
    Production,
}

impl Persona {
    /// Every recognized persona.
    pub const ALL: [Persona; 4] = [
        Persona::All,
        Persona::Development,
        Persona::Staging,
        Persona::Production,
    ];

    /// The label as written in the descriptor.
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::All => "",
            Persona::Development => "development",
            Persona::Staging => "staging",
            Persona::Production => "production",
        }
    }

    /// Check a raw label without keeping the parsed value.
    pub fn validate(label: &str) -> Result<(), InvalidPersonaError> {
        label.parse::<Persona>().map(|_| ())
    }
}

/// A persona label outside the recognized set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid persona type: {value}")]
pub struct InvalidPersonaError {
    /// The offending label, verbatim.
    pub value: String,
}

impl FromStr for Persona {
    type Err = InvalidPersonaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Persona::All),
            "development" => Ok(Persona::Development),
            "staging" => Ok(Persona::Staging),
            "production" => Ok(Persona::Production),
            _ => Err(InvalidPersonaError {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
