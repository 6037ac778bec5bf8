pub mod config;
pub mod generated_file;
pub mod template;

pub use crate::domain::DomainError;
pub use config::{ScaffoldConfig, ScaffoldConfigBuilder};
pub use generated_file::{FileOutcome, GeneratedFile, ScaffoldReport, WriteStatus};
pub use template::{Escape, RenderContext, Segment, Template};
