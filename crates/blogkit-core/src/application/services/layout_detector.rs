//! Source-directory convention detection.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{application::ports::Filesystem, domain::SourceDir};

/// Decides whether a project keeps its route tree under `src/` or at the root.
pub struct LayoutDetector<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> LayoutDetector<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Probe `project_root`:
    ///
    /// 1. `src/app` is a directory → [`SourceDir::Src`]
    /// 2. `app` is a directory → [`SourceDir::Root`]
    /// 3. neither → [`SourceDir::Src`], created fresh by the scaffold
    #[instrument(skip_all, fields(root = %project_root.display()))]
    pub fn detect(&self, project_root: &Path) -> SourceDir {
        let detected = if self.filesystem.is_dir(&project_root.join("src").join("app")) {
            SourceDir::Src
        } else if self.filesystem.is_dir(&project_root.join("app")) {
            SourceDir::Root
        } else {
            debug!("no app directory found, defaulting to src");
            SourceDir::Src
        };

        debug!(source_dir = %detected, "layout detected");
        detected
    }
}
