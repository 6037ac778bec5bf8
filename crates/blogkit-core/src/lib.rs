//! blogkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the blogkit
//! scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          blogkit-cli (CLI)              │
//! │   flag parsing, dispatch, reporting     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, LayoutDetector)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Store, Filesystem, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   blogkit-adapters (Infrastructure)     │
//! │ (InMemoryStore, LocalFilesystem, etc)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blogkit_core::{
//!     application::ScaffoldService,
//!     domain::{RoutePath, ScaffoldConfig},
//! };
//!
//! let service = ScaffoldService::new(store, renderer, filesystem);
//!
//! let config = ScaffoldConfig::builder()
//!     .base_path(RoutePath::parse("/posts/")?)
//!     .source_dir_or_else(|| service.detect_layout("./".as_ref()))
//!     .build();
//!
//! let report = service.scaffold(&config, "./")?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        LayoutDetector, ScaffoldService,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        Artifact, FileOutcome, RenderContext, RoutePath, ScaffoldConfig, ScaffoldReport,
        SourceDir, Template, WriteStatus,
    };
    pub use crate::error::{BlogkitError, BlogkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
