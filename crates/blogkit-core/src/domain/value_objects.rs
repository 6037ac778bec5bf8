//! Domain value objects: SourceDir, RoutePath, Artifact.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity. Each one
//! enforces its invariant at construction, so nothing downstream has to
//! re-check a path segment before joining or interpolating it.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Characters treated as path separators when normalizing user input.
const SEPARATORS: [char; 2] = ['/', '\\'];

// ── SourceDir ────────────────────────────────────────────────────────────────

/// Which root the generated tree nests under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SourceDir {
    /// `<project>/src/app/...` and `<project>/src/middleware.ts`.
    #[default]
    #[serde(rename = "src")]
    Src,
    /// `<project>/app/...` and `<project>/middleware.ts`.
    #[serde(rename = ".")]
    Root,
}

impl SourceDir {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Src => "src",
            Self::Root => ".",
        }
    }

    /// Path prefix relative to the project root. Empty for [`SourceDir::Root`].
    pub fn as_path(&self) -> &Path {
        match self {
            Self::Src => Path::new("src"),
            Self::Root => Path::new(""),
        }
    }
}

impl fmt::Display for SourceDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceDir {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_matches(SEPARATORS) {
            "src" => Ok(Self::Src),
            "." => Ok(Self::Root),
            _ => Err(DomainError::InvalidSourceDir(s.to_string())),
        }
    }
}

// ── RoutePath ────────────────────────────────────────────────────────────────

/// A normalized URL/route path such as `blog` or `auth/signin`.
///
/// Invariants:
/// - no leading or trailing separator
/// - no empty segments (`blog//posts` collapses to `blog/posts`)
/// - no `.` or `..` segments
/// - never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoutePath(String);

impl RoutePath {
    /// Normalize and validate a user-supplied route path.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let segments: Vec<&str> = raw
            .split(SEPARATORS)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if segments.is_empty() {
            return Err(DomainError::InvalidRoutePath {
                value: raw.to_string(),
                reason: "path is empty after normalization",
            });
        }

        if segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(DomainError::InvalidRoutePath {
                value: raw.to_string(),
                reason: "relative segments ('.' and '..') are not allowed",
            });
        }

        Ok(Self(segments.join("/")))
    }

    /// The normalized form, segments joined with `/`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Platform path built segment by segment.
    pub fn to_path(&self) -> PathBuf {
        self.0.split('/').collect()
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RoutePath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── Artifact ─────────────────────────────────────────────────────────────────

/// Identity of one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Artifact {
    BlogPage,
    AdminPage,
    #[serde(rename = "signin-page")]
    SignInPage,
    Middleware,
}

impl Artifact {
    /// Every artifact, in write order.
    pub const ALL: [Artifact; 4] = [
        Self::BlogPage,
        Self::AdminPage,
        Self::SignInPage,
        Self::Middleware,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BlogPage => "blog-page",
            Self::AdminPage => "admin-page",
            Self::SignInPage => "signin-page",
            Self::Middleware => "middleware",
        }
    }

    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::BlogPage | Self::AdminPage | Self::SignInPage => "page.tsx",
            Self::Middleware => "middleware.ts",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Artifact {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| DomainError::InvalidTemplate {
                template: s.to_string(),
                reason: "no such artifact".into(),
            })
    }
}
