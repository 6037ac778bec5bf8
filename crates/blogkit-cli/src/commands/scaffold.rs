//! Implementation of the `blogkit scaffold` command.
//!
//! Responsibility: merge configured defaults with the scaffold flags, call
//! the core scaffold service and display results. No business logic lives
//! here.

use std::path::Path;

use tracing::{debug, info, instrument};

use blogkit_adapters::{InMemoryStore, LocalFilesystem, SimpleRenderer};
use blogkit_core::{
    application::ScaffoldService,
    domain::{FileOutcome, ScaffoldConfig, SourceDir, WriteStatus},
};

use crate::{
    cli::{OutputFormat, ScaffoldFlags},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Printed after a human-readable scaffold.
pub const NEXT_STEPS: [&str; 3] = [
    "- Ensure NEXT_PUBLIC_SUPABASE_URL and NEXT_PUBLIC_SUPABASE_ANON_KEY are set in your .env.local",
    "- Install peer deps if missing: next, react, react-dom, @supabase/supabase-js, @supabase/auth-helpers-nextjs",
    "- Add your Supabase schema and RLS (see README)",
];

/// Execute the `blogkit scaffold` command.
///
/// 1. Seed the configuration from `AppConfig`, then apply the flags
/// 2. Detect the source directory unless `--srcDir` was given
/// 3. Write the four artifacts, reporting each as it settles
/// 4. Print next-steps guidance (or the JSON report)
#[instrument(skip_all, fields(root = %project_root.display()))]
pub fn execute(
    flags: ScaffoldFlags,
    config: &AppConfig,
    output: &OutputManager,
    project_root: &Path,
) -> CliResult<()> {
    let store = Box::new(InMemoryStore::with_builtin()?);
    let renderer = Box::new(SimpleRenderer::new());
    let filesystem = Box::new(LocalFilesystem::new());
    let service = ScaffoldService::new(store, renderer, filesystem);

    let scaffold_config = resolve_config(flags, config, || service.detect_layout(project_root))?;
    debug!(
        source_dir = %scaffold_config.source_dir(),
        base_path = %scaffold_config.base_path(),
        admin_path = %scaffold_config.admin_path(),
        auth_path = %scaffold_config.auth_path(),
        force = scaffold_config.force(),
        "Scaffold configuration resolved"
    );

    let json = output.format() == OutputFormat::Json;
    let mut display_error = None;
    let report = service.scaffold_with(&scaffold_config, project_root, |outcome| {
        if json || display_error.is_some() {
            return;
        }
        if let Err(e) = report_file(output, project_root, outcome) {
            display_error = Some(e);
        }
    })?;
    if let Some(e) = display_error {
        return Err(e.into());
    }

    info!(
        written = report.written_count(),
        skipped = report.skipped_count(),
        "Scaffold finished"
    );

    if json {
        output.json(&report)?;
        return Ok(());
    }

    output.print("")?;
    output.header("Scaffold complete. Next steps:")?;
    for line in NEXT_STEPS {
        output.print(line)?;
    }
    Ok(())
}

/// Merge configured defaults, scaffold flags and layout detection.
///
/// Flags win over configuration; `detect` only runs when `--srcDir` is absent.
pub fn resolve_config(
    flags: ScaffoldFlags,
    config: &AppConfig,
    detect: impl FnOnce() -> SourceDir,
) -> CliResult<ScaffoldConfig> {
    let mut builder = config
        .scaffold_builder()
        .map_err(|e| CliError::ConfigError {
            message: format!("{e:#}"),
            source: Some(e.into()),
        })?;

    if let Some(dir) = flags.src_dir {
        builder = builder.source_dir(dir);
    }
    if let Some(path) = flags.base_path {
        builder = builder.base_path(path);
    }
    if let Some(path) = flags.admin_path {
        builder = builder.admin_path(path);
    }
    if let Some(path) = flags.auth_path {
        builder = builder.auth_path(path);
    }

    Ok(builder.force(flags.force).source_dir_or_else(detect).build())
}

fn report_file(
    output: &OutputManager,
    project_root: &Path,
    outcome: &FileOutcome,
) -> std::io::Result<()> {
    let shown = outcome
        .path
        .strip_prefix(project_root)
        .unwrap_or(&outcome.path)
        .display();

    match outcome.status {
        WriteStatus::Written => output.success(&format!("Wrote {shown}")),
        WriteStatus::Skipped => output.warning(&format!(
            "Skipping existing file: {shown} (use --force to overwrite)"
        )),
    }
}

#[cfg(test)]
mod tests {
    use blogkit_core::domain::RoutePath;

    use super::*;
    use crate::config::Defaults;

    fn route(raw: &str) -> RoutePath {
        RoutePath::parse(raw).unwrap()
    }

    #[test]
    fn flags_override_configured_defaults() {
        let config = AppConfig {
            defaults: Defaults {
                base_path: Some("news".into()),
                admin_path: Some("staff".into()),
                ..Defaults::default()
            },
            ..AppConfig::default()
        };
        let flags = ScaffoldFlags {
            admin_path: Some(route("dashboard")),
            ..ScaffoldFlags::default()
        };

        let resolved = resolve_config(flags, &config, || SourceDir::Src).unwrap();

        assert_eq!(resolved.base_path().as_str(), "news");
        assert_eq!(resolved.admin_path().as_str(), "dashboard");
        assert_eq!(resolved.auth_path().as_str(), "auth/signin");
    }

    #[test]
    fn explicit_src_dir_skips_detection() {
        let flags = ScaffoldFlags {
            src_dir: Some(SourceDir::Root),
            ..ScaffoldFlags::default()
        };
        let resolved = resolve_config(flags, &AppConfig::default(), || {
            panic!("detection must not run")
        })
        .unwrap();

        assert_eq!(resolved.source_dir(), SourceDir::Root);
    }

    #[test]
    fn detection_fills_in_source_dir() {
        let resolved =
            resolve_config(ScaffoldFlags::default(), &AppConfig::default(), || SourceDir::Root)
                .unwrap();
        assert_eq!(resolved.source_dir(), SourceDir::Root);
        assert!(!resolved.force());
    }

    #[test]
    fn bad_configured_route_is_a_config_error() {
        let config = AppConfig {
            defaults: Defaults {
                auth_path: Some("..".into()),
                ..Defaults::default()
            },
            ..AppConfig::default()
        };

        let err =
            resolve_config(ScaffoldFlags::default(), &config, || SourceDir::Src).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn guidance_mentions_supabase_setup() {
        let text = NEXT_STEPS.join("\n");
        assert!(text.contains("NEXT_PUBLIC_SUPABASE_URL"));
        assert!(text.contains("NEXT_PUBLIC_SUPABASE_ANON_KEY"));
        assert!(text.contains("@supabase/auth-helpers-nextjs"));
        assert!(text.contains("RLS"));
    }
}
