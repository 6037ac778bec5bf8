// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for blogkit.
//!
//! This module contains pure business logic with no I/O. Filesystem access
//! and template storage are reached through ports defined in the
//! application layer.
//!
//! - **No I/O**: path computation and rendering only
//! - **Validated value objects**: `RoutePath` and `SourceDir` cannot hold
//!   an unnormalized value
//! - **Immutable configuration**: `ScaffoldConfig` is built once and read after

pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    config::{
        DEFAULT_ADMIN_PATH, DEFAULT_AUTH_PATH, DEFAULT_BASE_PATH, DEFAULT_PACKAGE,
        ScaffoldConfig, ScaffoldConfigBuilder,
    },
    generated_file::{FileOutcome, GeneratedFile, ScaffoldReport, WriteStatus},
    template::{Escape, RenderContext, Segment, Template},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Artifact, RoutePath, SourceDir};

pub use validation::{DomainValidator, KNOWN_VARIABLES};
