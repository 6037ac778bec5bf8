use std::path::Component;

use crate::domain::{
    entities::{GeneratedFile, Template},
    error::DomainError,
};

/// Variables every built-in template may reference.
pub const KNOWN_VARIABLES: [&str; 4] = ["PACKAGE", "BASE_PATH", "ADMIN_PATH", "AUTH_PATH"];

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_template(template: &Template) -> Result<(), DomainError> {
        if let Some(unknown) = template
            .variables()
            .into_iter()
            .find(|v| !KNOWN_VARIABLES.contains(v))
        {
            return Err(DomainError::UnknownVariable {
                template: template.artifact().to_string(),
                variable: unknown.to_string(),
            });
        }
        Ok(())
    }

    pub fn validate_generated_file(file: &GeneratedFile) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidTemplate {
            template: file.artifact.to_string(),
            reason: format!("{reason}: {}", file.path.display()),
        };

        if file.is_empty() {
            return Err(invalid("rendered content is empty"));
        }
        if !file
            .path
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(invalid("target must stay inside the project root"));
        }
        Ok(())
    }
}
