//! Lenient parser for the scaffold flags.
//!
//! Grammar: each token is a bare flag (`--force`, `-f`) or `--key=value`,
//! split at the first `=`. Nothing here is ever fatal: unknown flags, stray
//! words and unusable values are logged at DEBUG and dropped, so the
//! scaffold falls back to its defaults.

use blogkit_core::domain::{RoutePath, SourceDir};
use tracing::debug;

/// Flags recognised after the `scaffold` command word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldFlags {
    pub src_dir: Option<SourceDir>,
    pub base_path: Option<RoutePath>,
    pub admin_path: Option<RoutePath>,
    pub auth_path: Option<RoutePath>,
    pub force: bool,
    pub help: bool,
}

impl ScaffoldFlags {
    /// Parse every token; later occurrences of a flag override earlier ones.
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = Self::default();
        for token in tokens {
            flags.apply(token.as_ref());
        }
        flags
    }

    fn apply(&mut self, token: &str) {
        if !token.starts_with('-') {
            debug!(token, "ignoring positional argument");
            return;
        }

        let (key, value) = match token.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (token, None),
        };

        match key {
            "--srcDir" => self.src_dir = source_dir(key, value).or(self.src_dir),
            "--basePath" => self.base_path = route(key, value).or(self.base_path.take()),
            "--adminPath" => self.admin_path = route(key, value).or(self.admin_path.take()),
            "--authPath" => self.auth_path = route(key, value).or(self.auth_path.take()),
            "--force" | "-f" => self.force = true,
            "--help" | "-h" => self.help = true,
            _ => debug!(flag = key, "ignoring unrecognized flag"),
        }
    }
}

/// A value is usable when present, non-empty and not the literal `true`
/// (what a bare flag would have implied).
fn usable<'a>(key: &str, value: Option<&'a str>) -> Option<&'a str> {
    match value {
        Some(v) if !v.is_empty() && v != "true" => Some(v),
        _ => {
            debug!(flag = key, "ignoring flag without a usable value");
            None
        }
    }
}

fn source_dir(key: &str, value: Option<&str>) -> Option<SourceDir> {
    let value = usable(key, value)?;
    match value.parse() {
        Ok(dir) => Some(dir),
        Err(e) => {
            debug!(flag = key, error = %e, "ignoring source directory");
            None
        }
    }
}

fn route(key: &str, value: Option<&str>) -> Option<RoutePath> {
    let value = usable(key, value)?;
    match RoutePath::parse(value) {
        Ok(path) => Some(path),
        Err(e) => {
            debug!(flag = key, error = %e, "ignoring route");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: &[&str]) -> ScaffoldFlags {
        ScaffoldFlags::parse(tokens)
    }

    fn route(raw: &str) -> Option<RoutePath> {
        Some(RoutePath::parse(raw).unwrap())
    }

    #[test]
    fn empty_input_gives_defaults() {
        assert_eq!(parse(&[]), ScaffoldFlags::default());
    }

    #[test]
    fn value_flags_are_normalized() {
        let flags = parse(&[
            "--basePath=/posts/",
            "--adminPath=dashboard",
            "--authPath=/auth/login/",
        ]);
        assert_eq!(flags.base_path, route("posts"));
        assert_eq!(flags.admin_path, route("dashboard"));
        assert_eq!(flags.auth_path, route("auth/login"));
    }

    #[test]
    fn value_splits_at_first_equals() {
        let flags = parse(&["--basePath=a=b"]);
        assert_eq!(flags.base_path, route("a=b"));
    }

    #[test]
    fn missing_empty_and_true_values_are_ignored() {
        let flags = parse(&[
            "--basePath",
            "--adminPath=",
            "--authPath=true",
            "--srcDir=true",
        ]);
        assert_eq!(flags, ScaffoldFlags::default());
    }

    #[test]
    fn unusable_route_keeps_previous_value() {
        let flags = parse(&["--basePath=news", "--basePath=/", "--adminPath=../etc"]);
        assert_eq!(flags.base_path, route("news"));
        assert_eq!(flags.admin_path, None);
    }

    #[test]
    fn src_dir_accepts_both_conventions() {
        assert_eq!(parse(&["--srcDir=src"]).src_dir, Some(SourceDir::Src));
        assert_eq!(parse(&["--srcDir=./"]).src_dir, Some(SourceDir::Root));
        assert_eq!(parse(&["--srcDir=lib"]).src_dir, None);
        assert_eq!(parse(&["--srcDir=.", "--srcDir=lib"]).src_dir, Some(SourceDir::Root));
    }

    #[test]
    fn force_short_and_long() {
        assert!(parse(&["-f"]).force);
        assert!(parse(&["--force"]).force);
        assert!(parse(&["--force=no"]).force);
        assert!(!parse(&["--forced"]).force);
    }

    #[test]
    fn help_is_detected_anywhere() {
        assert!(parse(&["--basePath=x", "-h"]).help);
        assert!(parse(&["--help"]).help);
    }

    #[test]
    fn unknown_flags_and_words_are_ignored() {
        let flags = parse(&["scaffold", "--frobnicate", "--BasePath=x", "extra"]);
        assert_eq!(flags, ScaffoldFlags::default());
    }
}
