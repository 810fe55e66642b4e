//! Persona validation over a whole manifest.
//!
//! Every invalid label is collected; one bad property never hides the
//! next, and the manifest stays usable whatever the result.

use std::fmt;

use crate::manifest::{Manifest, Property};
use crate::persona::{InvalidPersonaError, Persona};

/// Where an invalid persona label was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonaOwner {
    /// A top-level property.
    Property { key: String },
    /// A property nested in an aspect.
    AspectProperty { aspect: String, key: String },
    /// A `useConfig.properties` property-file entry.
    PropertyFile { location: String },
}

/// One invalid persona label and its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaViolation {
    pub owner: PersonaOwner,
    pub error: InvalidPersonaError,
}

impl fmt::Display for PersonaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.owner {
            PersonaOwner::Property { key } => write!(f, "Error in property [{key}]")?,
            PersonaOwner::AspectProperty { aspect, key } => {
                write!(f, "Error in aspect '{aspect}' property [{key}]")?
            }
            PersonaOwner::PropertyFile { location } => {
                write!(f, "Error in property file '{location}'")?
            }
        }
        write!(f, ": {}", self.error)
    }
}

/// Check every persona label in the manifest, collecting all violations.
///
/// Covers top-level properties, properties inside each aspect, and the
/// property-file entries of `useConfig`.
pub fn validate_personas(manifest: &Manifest) -> Vec<PersonaViolation> {
    let mut violations = Vec::new();

    for property in &manifest.properties {
        check_property(property, &mut violations, |key| PersonaOwner::Property { key });
    }

    for aspect in &manifest.aspects {
        for property in &aspect.properties {
            check_property(property, &mut violations, |key| {
                PersonaOwner::AspectProperty {
                    aspect: aspect.name.clone(),
                    key,
                }
            });
        }
    }

    for file in &manifest.use_config.properties {
        if let Err(error) = Persona::validate(&file.persona) {
            violations.push(PersonaViolation {
                owner: PersonaOwner::PropertyFile {
                    location: file.location.clone(),
                },
                error,
            });
        }
    }

    tracing::debug!("Persona validation found {} violation(s)", violations.len());
    violations
}

fn check_property(
    property: &Property,
    violations: &mut Vec<PersonaViolation>,
    owner: impl FnOnce(String) -> PersonaOwner,
) {
    if let Err(error) = property.persona() {
        violations.push(PersonaViolation {
            owner: owner(property.key.clone()),
            error,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{Aspect, PropertyFile};
    use pretty_assertions::assert_eq;
    use ymanifest_test_utils::SAMPLE_MANIFEST_JSON;

    #[test]
    fn test_sample_manifest_is_valid() {
        let manifest = Manifest::from_json(SAMPLE_MANIFEST_JSON).unwrap();
        assert!(validate_personas(&manifest).is_empty());
    }

    #[test]
    fn test_single_invalid_property_reported_once() {
        let manifest = Manifest {
            properties: vec![
                Property::new("db.url", "jdbc:hsqldb", "qa"),
                Property::new("cache.size", "100", "staging"),
            ],
            ..Manifest::default()
        };

        let violations = validate_personas(&manifest);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].owner,
            PersonaOwner::Property {
                key: "db.url".into()
            }
        );
        assert_eq!(violations[0].error.value, "qa");
        assert_eq!(
            violations[0].to_string(),
            "Error in property [db.url]: Invalid persona type: qa"
        );
    }

    #[test]
    fn test_collects_every_violation() {
        let manifest = Manifest {
            properties: vec![
                Property::new("a", "1", "qa"),
                Property::new("b", "2", ""),
                Property::new("c", "3", "PRODUCTION"),
            ],
            aspects: vec![Aspect {
                name: "hac".into(),
                properties: vec![
                    Property::new("d", "4", "test"),
                    Property::new("e", "5", "development"),
                ],
                webapps: Vec::new(),
            }],
            ..Manifest::default()
        };

        let messages: Vec<String> = validate_personas(&manifest)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            messages,
            [
                "Error in property [a]: Invalid persona type: qa",
                "Error in property [c]: Invalid persona type: PRODUCTION",
                "Error in aspect 'hac' property [d]: Invalid persona type: test",
            ]
        );
    }

    #[test]
    fn test_property_file_persona_checked() {
        let mut manifest = Manifest::default();
        manifest.use_config.properties = vec![
            PropertyFile {
                location: "config/ok.properties".into(),
                aspect: None,
                persona: "production".into(),
            },
            PropertyFile {
                location: "config/bad.properties".into(),
                aspect: Some("api".into()),
                persona: "uat".into(),
            },
        ];

        let violations = validate_personas(&manifest);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "Error in property file 'config/bad.properties': Invalid persona type: uat"
        );
    }
}
