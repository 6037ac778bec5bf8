//! CLI argument definitions using the clap derive API.
//!
//! clap owns the global flags, `--version` and help rendering. The command
//! word and the scaffold flags are collected verbatim into [`Cli::rest`] and
//! interpreted by [`Action::resolve`] and [`flags::ScaffoldFlags`], which
//! never reject input.

use std::ffi::OsString;

use clap::{CommandFactory, Parser};

pub mod flags;
pub mod global;
pub use flags::ScaffoldFlags;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "blogkit",
    bin_name = "blogkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold blog, admin and sign-in routes into a Next.js app",
    long_about = "blogkit writes the blog page, admin page, sign-in page and \
                  admin-guard middleware for the zemenay blog kit into a \
                  Next.js app router project. Existing files are kept unless \
                  --force is given.",
    override_usage = "blogkit [OPTIONS] <COMMAND> [FLAGS...]",
    after_help = "COMMANDS:\n\
        \x20 scaffold  Create blog, admin, sign-in pages and admin middleware\n\
        \x20 help      Print this help\n\
        \n\
        SCAFFOLD FLAGS:\n\
        \x20 --srcDir=<src|.>       Source root (default: detected)\n\
        \x20 --basePath=<path>      Blog route (default: blog)\n\
        \x20 --adminPath=<path>     Admin route (default: admin)\n\
        \x20 --authPath=<path>      Sign-in route (default: auth/signin)\n\
        \x20 -f, --force            Overwrite existing files\n\
        \x20 -h, --help             Print this help\n\
        \n\
        EXAMPLES:\n\
        \x20 blogkit scaffold\n\
        \x20 blogkit scaffold --basePath=blog --adminPath=blog-admin\n\
        \x20 blogkit -v scaffold --srcDir=. --force",
    disable_help_flag = true,
)]
pub struct Cli {
    /// Flags that must precede the command.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Command word followed by its flags.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..,
        hide = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub rest: Vec<OsString>,
}

impl Cli {
    /// The trailing tokens as text. Invalid UTF-8 is replaced, never rejected.
    pub fn tokens(&self) -> Vec<String> {
        self.rest
            .iter()
            .map(|t| t.to_string_lossy().into_owned())
            .collect()
    }

    /// Full help text as printed by `blogkit help`.
    pub fn help_text() -> String {
        Self::command().render_long_help().to_string()
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// What a single invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print help and exit 0.
    Help,
    /// Run the scaffold with the given flags.
    Scaffold(ScaffoldFlags),
    /// Report an unknown command, print help and exit 1.
    Unknown(String),
}

impl Action {
    /// Interpret the trailing tokens.
    ///
    /// The command is the first token that is not a flag. A help flag
    /// anywhere wins over every command, including unknown ones.
    pub fn resolve(rest: &[String]) -> Self {
        let flags = ScaffoldFlags::parse(rest);
        if flags.help {
            return Self::Help;
        }

        match rest.iter().find(|t| !t.starts_with('-')).map(String::as_str) {
            None | Some("help") => Self::Help,
            Some("scaffold") => Self::Scaffold(flags),
            Some(other) => Self::Unknown(other.to_string()),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use blogkit_core::domain::RoutePath;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("blogkit").chain(args.iter().copied())).unwrap()
    }

    fn action(args: &[&str]) -> Action {
        Action::resolve(&cli(args).tokens())
    }

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_command_is_help() {
        assert_eq!(action(&[]), Action::Help);
        assert_eq!(action(&["--force"]), Action::Help);
    }

    #[test]
    fn help_word_and_flags() {
        assert_eq!(action(&["help"]), Action::Help);
        assert_eq!(action(&["--help"]), Action::Help);
        assert_eq!(action(&["scaffold", "-h"]), Action::Help);
        assert_eq!(action(&["frobnicate", "--help"]), Action::Help);
    }

    #[test]
    fn scaffold_collects_its_flags() {
        let Action::Scaffold(flags) = action(&["scaffold", "--adminPath=/dashboard/", "-f"]) else {
            panic!("expected scaffold");
        };
        assert_eq!(flags.admin_path, Some(RoutePath::parse("dashboard").unwrap()));
        assert!(flags.force);
    }

    #[test]
    fn flags_before_the_command_word_still_count() {
        let Action::Scaffold(flags) = action(&["--basePath=news", "scaffold"]) else {
            panic!("expected scaffold");
        };
        assert_eq!(flags.base_path, Some(RoutePath::parse("news").unwrap()));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            action(&["frobnicate", "--force"]),
            Action::Unknown("frobnicate".into())
        );
    }

    #[test]
    fn global_flags_are_parsed_by_clap() {
        let parsed = cli(&["-vv", "--output-format", "json", "scaffold", "-v"]);
        assert_eq!(parsed.global.verbose, 2);
        assert_eq!(parsed.global.output_format, OutputFormat::Json);
        assert_eq!(parsed.tokens(), vec!["scaffold", "-v"]);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["blogkit", "--quiet", "--verbose", "scaffold"]);
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_tokens_are_kept_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let parsed = Cli::try_parse_from([
            OsStr::new("blogkit"),
            OsStr::new("scaffold"),
            OsStr::from_bytes(b"--x\xff"),
        ])
        .unwrap();
        assert_eq!(parsed.rest.len(), 2);
        assert!(matches!(
            Action::resolve(&parsed.tokens()),
            Action::Scaffold(_)
        ));
    }

    #[test]
    fn help_text_lists_commands_and_flags() {
        let help = Cli::help_text();
        assert!(help.contains("scaffold"));
        assert!(help.contains("--adminPath"));
        assert!(help.contains("--force"));
    }
}
