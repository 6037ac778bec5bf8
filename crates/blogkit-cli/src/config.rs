//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the resulting
//! [`ScaffoldConfig`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. Scaffold flags (applied by the `scaffold` command, not here)
//! 2. `BLOGKIT_*` environment variables, `__` between nested keys
//!    (`BLOGKIT_DEFAULTS__ADMIN_PATH=dashboard`)
//! 3. The file passed with `--config` (must exist)
//! 4. `.blogkit.toml` in the project root
//! 5. `config.toml` in the platform config directory
//! 6. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use blogkit_core::domain::{RoutePath, ScaffoldConfig, ScaffoldConfigBuilder};

/// File name of the per-project configuration.
pub const LOCAL_CONFIG_FILE: &str = ".blogkit.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Package the generated files import from.
    pub package: Option<String>,
    /// Route defaults used when a scaffold flag is absent.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub base_path: Option<String>,
    pub admin_path: Option<String>,
    pub auth_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration for a project rooted at `project_root`.
    ///
    /// `explicit` is the path passed with `--config`; unlike the global and
    /// local files it is an error for it to be missing.
    pub fn load(explicit: Option<&Path>, project_root: &Path) -> anyhow::Result<Self> {
        Self::load_from(Self::config_path(), project_root, explicit)
    }

    /// [`Self::load`] with the global file location supplied by the caller.
    pub fn load_from(
        global: Option<PathBuf>,
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        if let Some(global) = global {
            debug!(path = %global.display(), "global config candidate");
            builder = builder.add_source(
                File::from(global)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        let local = project_root.join(LOCAL_CONFIG_FILE);
        builder = builder.add_source(
            File::from(local)
                .format(FileFormat::Toml)
                .required(false),
        );

        if let Some(explicit) = explicit {
            if !explicit.is_file() {
                anyhow::bail!("config file not found: {}", explicit.display());
            }
            builder = builder.add_source(File::from(explicit).format(FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("BLOGKIT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "blogkit", "blogkit")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// A scaffold builder seeded from the configured defaults.
    ///
    /// Routes from configuration go through the same normalization as flags;
    /// a value that normalizes to nothing is an error here, since it was
    /// written on purpose.
    pub fn scaffold_builder(&self) -> anyhow::Result<ScaffoldConfigBuilder> {
        let mut builder = ScaffoldConfig::builder();

        if let Some(package) = &self.package {
            if package.trim().is_empty() {
                anyhow::bail!("package must not be empty");
            }
            builder = builder.package(package.trim());
        }
        if let Some(path) = configured_route("defaults.base_path", &self.defaults.base_path)? {
            builder = builder.base_path(path);
        }
        if let Some(path) = configured_route("defaults.admin_path", &self.defaults.admin_path)? {
            builder = builder.admin_path(path);
        }
        if let Some(path) = configured_route("defaults.auth_path", &self.defaults.auth_path)? {
            builder = builder.auth_path(path);
        }

        Ok(builder)
    }
}

fn configured_route(key: &str, value: &Option<String>) -> anyhow::Result<Option<RoutePath>> {
    value
        .as_deref()
        .map(|raw| RoutePath::parse(raw).with_context(|| format!("invalid {key}")))
        .transpose()
}
