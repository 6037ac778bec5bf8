//! Application ports (traits) for external dependencies.
//!
//! Ports define interfaces that the application needs from the outside
//! world. Adapters in `blogkit-adapters` implement these.
//!
//! - `Filesystem`: probing and writing the consuming project
//! - `TemplateStore`: lookup of the template for each artifact
//! - `TemplateRenderer`: turning a template into file content

pub mod output;

pub use output::{Filesystem, TemplateRenderer, TemplateStore};
