use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::Artifact;

/// A rendered file ready for materialization.
///
/// `path` is relative to the project root. It contains no business logic,
/// only data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub artifact: Artifact,
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(artifact: Artifact, path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            artifact,
            path: path.into(),
            content,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// What happened to one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteStatus {
    Written,
    /// A file already existed and overwriting was not requested.
    Skipped,
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written => f.write_str("written"),
            Self::Skipped => f.write_str("skipped"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub artifact: Artifact,
    /// Absolute (project root joined) path of the target file.
    pub path: PathBuf,
    pub status: WriteStatus,
}

/// Result of one scaffold run, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub files: Vec<FileOutcome>,
}

impl ScaffoldReport {
    pub fn push(&mut self, outcome: FileOutcome) {
        self.files.push(outcome);
    }

    pub fn written_count(&self) -> usize {
        self.count(WriteStatus::Written)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(WriteStatus::Skipped)
    }

    pub fn is_noop(&self) -> bool {
        self.written_count() == 0
    }

    fn count(&self, status: WriteStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }
}
