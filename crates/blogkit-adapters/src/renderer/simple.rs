//! Slot-substitution renderer.

use blogkit_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{DomainValidator as validator, RenderContext, Template},
    error::{BlogkitError, BlogkitResult},
};
use tracing::{instrument, trace};

/// Renderer that fills each slot from the [`RenderContext`], applying the
/// slot's escape mode.
#[derive(Debug, Clone, Copy)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(artifact = %template.artifact()))]
    fn render(&self, template: &Template, context: &RenderContext) -> BlogkitResult<String> {
        validator::validate_template(template).map_err(BlogkitError::Domain)?;

        let content = context
            .render(template)
            .map_err(|e| ApplicationError::RenderingFailed {
                reason: e.to_string(),
            })?;

        trace!(bytes = content.len(), "template rendered");
        Ok(content)
    }
}
