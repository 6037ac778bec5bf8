// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid route path '{value}': {reason}")]
    InvalidRoutePath { value: String, reason: &'static str },

    #[error("Invalid source directory '{0}': expected 'src' or '.'")]
    InvalidSourceDir(String),

    #[error("Invalid template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    // ========================================================================
    // Rendering Errors
    // ========================================================================
    #[error("Template '{template}' references unknown variable '{variable}'")]
    UnknownVariable { template: String, variable: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidRoutePath { value, .. } => vec![
                format!("'{value}' cannot be used as a route"),
                "Use plain segments such as 'blog' or 'auth/signin'".into(),
            ],
            Self::InvalidSourceDir(_) => vec!["Pass --srcDir=src or --srcDir=.".into()],
            Self::InvalidTemplate { template, .. } | Self::UnknownVariable { template, .. } => {
                vec![
                    format!("Built-in template '{template}' is corrupted"),
                    "Please report this issue".into(),
                ]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRoutePath { .. } | Self::InvalidSourceDir(_) => ErrorCategory::Validation,
            Self::InvalidTemplate { .. } | Self::UnknownVariable { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
