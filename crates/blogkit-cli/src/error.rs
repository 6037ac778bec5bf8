//! Error handling for the blogkit CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use blogkit_core::error::BlogkitError;

pub use blogkit_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// The first non-flag token is not a known command.
    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `blogkit-core`.
    #[error("Scaffolding failed: {0}")]
    Core(#[from] BlogkitError),

    // ── System errors ──────────────────────────────────────────────────────
    /// Writing to the terminal or reading the working directory failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownCommand { .. } => vec![
                "Available commands: scaffold, help".into(),
                "Example: blogkit scaffold --basePath=blog".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check .blogkit.toml in the project root".into(),
                "Check the file passed with --config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownCommand { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  1   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    ///
    /// Code 2 is left to clap's own argument errors.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 1,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad command or invalid input.
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use blogkit_core::application::ApplicationError;

    use super::*;

    fn fs_error() -> CliError {
        BlogkitError::from(ApplicationError::FilesystemError {
            path: PathBuf::from("/p/src/middleware.ts"),
            reason: "Failed to write file: denied".into(),
        })
        .into()
    }

    #[test]
    fn unknown_command_message_names_the_command() {
        let err = CliError::UnknownCommand {
            command: "frobnicate".into(),
        };
        assert_eq!(err.to_string(), "Unknown command: frobnicate");
        assert!(err.suggestions().iter().any(|s| s.contains("scaffold")));
    }

    #[test]
    fn exit_codes() {
        let unknown = CliError::UnknownCommand {
            command: "x".into(),
        };
        let config = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        let io = CliError::from(io::Error::other("e"));

        assert_eq!(unknown.exit_code(), 1);
        assert_eq!(config.exit_code(), 4);
        assert_eq!(io.exit_code(), 1);
        assert_eq!(fs_error().exit_code(), 1);
    }

    #[test]
    fn core_errors_carry_core_suggestions() {
        let err = fs_error();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.suggestions().iter().any(|s| s.contains("middleware.ts")));
    }

    #[test]
    fn format_plain_contains_error_header() {
        let s = fs_error().format_plain(false);
        assert!(s.contains("Error: Scaffolding failed"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::ConfigError {
            message: "bad file".into(),
            source: Some(Box::new(io::Error::other("parse failure"))),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: parse failure"));
        assert!(!s.contains("--verbose"));
    }
}
