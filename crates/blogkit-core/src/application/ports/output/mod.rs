//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `blogkit-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Artifact, RenderContext, Template};
use crate::error::BlogkitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `blogkit_adapters::filesystem::LocalFilesystem` (production)
/// - `blogkit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> BlogkitResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> BlogkitResult<()>;

    /// Check if any entry (file or directory) exists at path.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for template lookup.
///
/// Implemented by:
/// - `blogkit_adapters::template_store::InMemoryStore` (built-in templates)
pub trait TemplateStore: Send + Sync {
    /// Get the template that generates `artifact`.
    fn get(&self, artifact: Artifact) -> BlogkitResult<Template>;

    /// List all registered templates.
    fn list(&self) -> BlogkitResult<Vec<Template>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `blogkit_adapters::renderer::SimpleRenderer` (slot substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Render a template into file content.
    fn render(&self, template: &Template, context: &RenderContext) -> BlogkitResult<String>;
}
