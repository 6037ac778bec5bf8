//! # blogkit CLI
//!
//! Scaffolds the zemenay blog kit routes into a Next.js app router project.
//!
//! ## Startup sequence
//!
//! 1. Parse global arguments (clap handles `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Resolve the [`Action`] from the remaining tokens.
//! 4. Load configuration (files + env + defaults) when scaffolding.
//! 5. Build the [`OutputManager`].
//! 6. Run the action, translating any [`CliError`] into a user-facing
//!    message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! |  0   | Success or help                          |
//! |  1   | Unknown command, internal / system error |
//! |  2   | Malformed global flags                   |
//! |  4   | Configuration error                      |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Action, Cli, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --version lands here too, as a non-error "error".
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        rest = ?cli.rest,
        "CLI started"
    );

    let project_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => return handle_error(CliError::from(e), &cli.global, None),
    };

    // ── 3. Resolve the action ─────────────────────────────────────────────
    let action = Action::resolve(&cli.tokens());

    // ── 4. Load configuration (scaffold only) ─────────────────────────────
    let config = match &action {
        Action::Scaffold(_) => {
            match AppConfig::load(cli.global.config.as_deref(), &project_root) {
                Ok(cfg) => cfg,
                Err(e) => {
                    let err = CliError::ConfigError {
                        message: format!("{e:#}"),
                        source: Some(e.into()),
                    };
                    return handle_error(err, &cli.global, None);
                }
            }
        }
        Action::Help | Action::Unknown(_) => AppConfig::default(),
    };

    // ── 5. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 6. Dispatch + error handling ──────────────────────────────────────
    match run(action, &config, &output, &project_root) {
        Ok(()) => {
            info!("blogkit completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, &cli.global, Some(&output)),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(
    action: Action,
    config: &AppConfig,
    output: &OutputManager,
    project_root: &std::path::Path,
) -> CliResult<()> {
    match action {
        Action::Help => commands::help::execute(output),
        Action::Scaffold(flags) => {
            commands::scaffold::execute(flags, config, output, project_root)
        }
        Action::Unknown(command) => Err(CliError::UnknownCommand { command }),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// An unknown command is followed by the help text on stdout.
fn handle_error(err: CliError, global: &GlobalArgs, output: Option<&OutputManager>) -> ExitCode {
    err.log();

    let verbose = global.verbose > 0;
    let color = output.is_none_or(OutputManager::supports_color) && !global.no_color;
    let msg = if color && std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    if let (CliError::UnknownCommand { .. }, Some(output)) = (&err, output) {
        let _ = commands::help::execute(output);
    }

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
