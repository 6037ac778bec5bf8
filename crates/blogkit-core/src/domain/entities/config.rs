//! Scaffold configuration.
//!
//! A [`ScaffoldConfig`] is built once per invocation and consumed by the
//! scaffold service. Every path-like field is a [`RoutePath`], so it is
//! already normalized by the time it reaches a template or a `join`.

use std::path::PathBuf;

use crate::domain::value_objects::{Artifact, RoutePath, SourceDir};

/// Package the generated files import the blog kit modules from.
pub const DEFAULT_PACKAGE: &str = "zemenay-blog-kit";
pub const DEFAULT_BASE_PATH: &str = "blog";
pub const DEFAULT_ADMIN_PATH: &str = "admin";
pub const DEFAULT_AUTH_PATH: &str = "auth/signin";

/// Directory holding the route tree, relative to the source root.
const APP_DIR: &str = "app";
/// Catch-all segment the blog route forwards to the blog module.
const SLUG_SEGMENT: &str = "[[...slug]]";

/// Fully resolved configuration for one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    source_dir: SourceDir,
    base_path: RoutePath,
    admin_path: RoutePath,
    auth_path: RoutePath,
    force: bool,
    package: String,
}

impl ScaffoldConfig {
    pub fn builder() -> ScaffoldConfigBuilder {
        ScaffoldConfigBuilder::default()
    }

    pub fn source_dir(&self) -> SourceDir {
        self.source_dir
    }

    pub fn base_path(&self) -> &RoutePath {
        &self.base_path
    }

    pub fn admin_path(&self) -> &RoutePath {
        &self.admin_path
    }

    pub fn auth_path(&self) -> &RoutePath {
        &self.auth_path
    }

    pub fn force(&self) -> bool {
        self.force
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Where `artifact` lands, relative to the project root.
    pub fn target_path(&self, artifact: Artifact) -> PathBuf {
        let root = self.source_dir.as_path();
        let app = root.join(APP_DIR);
        let dir = match artifact {
            Artifact::BlogPage => app.join(self.base_path.to_path()).join(SLUG_SEGMENT),
            Artifact::AdminPage => app.join(self.admin_path.to_path()),
            Artifact::SignInPage => app.join(self.auth_path.to_path()),
            Artifact::Middleware => root.to_path_buf(),
        };
        dir.join(artifact.file_name())
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`ScaffoldConfig`].
///
/// Unset fields fall back to the built-in defaults. `source_dir` is left
/// optional so callers can tell "explicitly requested" apart from "detect it".
#[derive(Debug, Clone, Default)]
pub struct ScaffoldConfigBuilder {
    source_dir: Option<SourceDir>,
    base_path: Option<RoutePath>,
    admin_path: Option<RoutePath>,
    auth_path: Option<RoutePath>,
    force: bool,
    package: Option<String>,
}

impl ScaffoldConfigBuilder {
    pub fn source_dir(mut self, dir: SourceDir) -> Self {
        self.source_dir = Some(dir);
        self
    }

    /// Fill `source_dir` only if it has not been set explicitly.
    pub fn source_dir_or_else(mut self, detect: impl FnOnce() -> SourceDir) -> Self {
        if self.source_dir.is_none() {
            self.source_dir = Some(detect());
        }
        self
    }

    pub fn has_source_dir(&self) -> bool {
        self.source_dir.is_some()
    }

    pub fn base_path(mut self, path: RoutePath) -> Self {
        self.base_path = Some(path);
        self
    }

    pub fn admin_path(mut self, path: RoutePath) -> Self {
        self.admin_path = Some(path);
        self
    }

    pub fn auth_path(mut self, path: RoutePath) -> Self {
        self.auth_path = Some(path);
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn build(self) -> ScaffoldConfig {
        ScaffoldConfig {
            source_dir: self.source_dir.unwrap_or_default(),
            base_path: self.base_path.unwrap_or_else(|| default_route(DEFAULT_BASE_PATH)),
            admin_path: self
                .admin_path
                .unwrap_or_else(|| default_route(DEFAULT_ADMIN_PATH)),
            auth_path: self.auth_path.unwrap_or_else(|| default_route(DEFAULT_AUTH_PATH)),
            force: self.force,
            package: self.package.unwrap_or_else(|| DEFAULT_PACKAGE.to_string()),
        }
    }
}

/// Built-in defaults are literals that always satisfy the `RoutePath` invariant.
fn default_route(raw: &'static str) -> RoutePath {
    RoutePath::parse(raw).unwrap_or_else(|e| unreachable!("built-in route '{raw}': {e}"))
}
