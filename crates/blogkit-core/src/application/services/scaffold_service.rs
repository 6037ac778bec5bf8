//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Look up the template for every artifact
//! 2. Render each template with the configuration's variables
//! 3. Write each file under the overwrite policy
//!
//! Files are independent: a skipped or failed file never undoes the ones
//! written before it.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Filesystem, TemplateRenderer, TemplateStore},
        services::LayoutDetector,
    },
    domain::{
        Artifact, DomainValidator as validator, FileOutcome, GeneratedFile, RenderContext,
        ScaffoldConfig, ScaffoldReport, SourceDir, WriteStatus,
    },
    error::BlogkitResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use blogkit_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Detect the source-directory convention of `project_root`.
    pub fn detect_layout(&self, project_root: &Path) -> SourceDir {
        LayoutDetector::new(self.filesystem.as_ref()).detect(project_root)
    }

    /// Render every artifact without touching the filesystem.
    ///
    /// Paths in the result are relative to the project root.
    pub fn render_all(&self, config: &ScaffoldConfig) -> BlogkitResult<Vec<GeneratedFile>> {
        let context = RenderContext::from_config(config);

        Artifact::ALL
            .into_iter()
            .map(|artifact| -> BlogkitResult<GeneratedFile> {
                let template = self.store.get(artifact)?;
                validator::validate_template(&template)?;

                let content = self.renderer.render(&template, &context)?;
                let file = GeneratedFile::new(artifact, config.target_path(artifact), content);
                validator::validate_generated_file(&file)?;

                debug!(artifact = %artifact, bytes = file.size(), "rendered");
                Ok(file)
            })
            .collect()
    }

    /// Scaffold every artifact into `project_root`.
    pub fn scaffold(
        &self,
        config: &ScaffoldConfig,
        project_root: impl AsRef<Path>,
    ) -> BlogkitResult<ScaffoldReport> {
        self.scaffold_with(config, project_root, |_| {})
    }

    /// Scaffold every artifact, calling `on_file` as soon as each one is settled.
    ///
    /// `on_file` sees outcomes in write order. On a filesystem error the run
    /// stops; files already written stay on disk.
    #[instrument(
        skip_all,
        fields(
            root = %project_root.as_ref().display(),
            source_dir = %config.source_dir(),
            force = config.force()
        )
    )]
    pub fn scaffold_with<F>(
        &self,
        config: &ScaffoldConfig,
        project_root: impl AsRef<Path>,
        mut on_file: F,
    ) -> BlogkitResult<ScaffoldReport>
    where
        F: FnMut(&FileOutcome),
    {
        let project_root = project_root.as_ref();
        let files = self.render_all(config)?;

        let mut report = ScaffoldReport::default();
        for file in files {
            let path = project_root.join(&file.path);
            let status = self.write(&path, &file.content, config.force())?;

            let outcome = FileOutcome {
                artifact: file.artifact,
                path,
                status,
            };
            on_file(&outcome);
            report.push(outcome);
        }

        info!(
            written = report.written_count(),
            skipped = report.skipped_count(),
            "Scaffold completed"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write one file unless it exists and `force` is off.
    fn write(&self, path: &Path, content: &str, force: bool) -> BlogkitResult<WriteStatus> {
        let existed = self.filesystem.exists(path);
        if existed && !force {
            info!(path = %path.display(), "Skipping existing file");
            return Ok(WriteStatus::Skipped);
        }

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)?;

        info!(path = %path.display(), replaced = existed, "Wrote file");
        Ok(WriteStatus::Written)
    }
}
