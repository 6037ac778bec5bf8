//! Integration tests for the blogkit binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const FILES_UNDER_SRC: [&str; 4] = [
    "src/app/blog/[[...slug]]/page.tsx",
    "src/app/admin/page.tsx",
    "src/app/auth/signin/page.tsx",
    "src/middleware.ts",
];

/// A blogkit command running in `dir`, isolated from the user's config.
fn blogkit(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("blogkit");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

fn project() -> TempDir {
    TempDir::new().unwrap()
}

fn read(dir: &TempDir, relative: &str) -> String {
    fs::read_to_string(dir.path().join(relative)).unwrap()
}

// ── help & dispatch ───────────────────────────────────────────────────────────

#[test]
fn test_no_command_prints_help() {
    let dir = project();
    blogkit(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("scaffold"))
        .stdout(predicate::str::contains("--adminPath"));
}

#[test]
fn test_help_forms() {
    let dir = project();
    for args in [&["help"][..], &["--help"], &["-h"], &["scaffold", "--help"]] {
        blogkit(dir.path())
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains("--basePath"));
    }
    assert!(!dir.path().join("src").exists());
}

#[test]
fn test_version_flag() {
    let dir = project();
    blogkit(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_command() {
    let dir = project();
    blogkit(dir.path())
        .arg("frobnicate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown command: frobnicate"))
        .stdout(predicate::str::contains("scaffold"));
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn test_help_ignores_broken_config() {
    let dir = project();
    fs::write(dir.path().join(".blogkit.toml"), "package = [\n").unwrap();

    for args in [&["help"][..], &[], &["--config", "missing.toml", "help"]] {
        blogkit(dir.path())
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains("--basePath"));
    }
}

#[test]
fn test_unknown_command_ignores_broken_config() {
    let dir = project();
    fs::write(dir.path().join(".blogkit.toml"), "package = [\n").unwrap();

    blogkit(dir.path())
        .arg("frobnicate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown command: frobnicate"))
        .stderr(predicate::str::contains("Configuration error").not())
        .stdout(predicate::str::contains("scaffold"));
}

#[test]
fn test_malformed_global_flag_is_exit_2() {
    let dir = project();
    blogkit(dir.path())
        .args(["--output-format", "yaml", "scaffold"])
        .assert()
        .code(2);
}

// ── scaffold ──────────────────────────────────────────────────────────────────

#[test]
fn test_scaffold_empty_project() {
    let dir = project();
    blogkit(dir.path())
        .arg("scaffold")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote").count(4))
        .stdout(predicate::str::contains("NEXT_PUBLIC_SUPABASE_URL"))
        .stdout(predicate::str::contains("NEXT_PUBLIC_SUPABASE_ANON_KEY"));

    for file in FILES_UNDER_SRC {
        assert!(!read(&dir, file).is_empty(), "{file}");
    }
    assert!(read(&dir, "src/middleware.ts").contains("matcher: ['/admin', '/admin/:path*']"));
}

#[test]
fn test_scaffold_is_idempotent() {
    let dir = project();
    blogkit(dir.path()).arg("scaffold").assert().success();

    fs::write(dir.path().join("src/app/admin/page.tsx"), "// edited").unwrap();

    blogkit(dir.path())
        .arg("scaffold")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping existing file").count(4))
        .stdout(predicate::str::contains("use --force to overwrite"))
        .stdout(predicate::str::contains("Wrote").not());

    assert_eq!(read(&dir, "src/app/admin/page.tsx"), "// edited");
}

#[test]
fn test_force_overwrites() {
    let dir = project();
    blogkit(dir.path()).arg("scaffold").assert().success();
    fs::write(dir.path().join("src/app/admin/page.tsx"), "// edited").unwrap();

    blogkit(dir.path())
        .args(["scaffold", "-f"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote").count(4));

    assert!(read(&dir, "src/app/admin/page.tsx").contains("BlogAdmin"));
}

#[test]
fn test_path_normalization() {
    let dir = project();
    blogkit(dir.path())
        .args(["scaffold", "--basePath=/blog/", "--authPath=//login/"])
        .assert()
        .success();

    assert!(dir.path().join("src/app/blog/[[...slug]]/page.tsx").is_file());
    assert!(dir.path().join("src/app/login/page.tsx").is_file());
    assert!(read(&dir, "src/middleware.ts").contains("new URL('/login', req.url)"));
}

#[test]
fn test_root_app_layout_is_detected() {
    let dir = project();
    fs::create_dir(dir.path().join("app")).unwrap();

    blogkit(dir.path()).arg("scaffold").assert().success();

    assert!(dir.path().join("app/admin/page.tsx").is_file());
    assert!(dir.path().join("middleware.ts").is_file());
    assert!(!dir.path().join("src").exists());
}

#[test]
fn test_explicit_src_dir_wins_over_detection() {
    let dir = project();
    fs::create_dir(dir.path().join("app")).unwrap();

    blogkit(dir.path())
        .args(["scaffold", "--srcDir=src"])
        .assert()
        .success();

    assert!(dir.path().join("src/middleware.ts").is_file());
    assert!(!dir.path().join("middleware.ts").exists());
}

#[test]
fn test_end_to_end_dashboard_scenario() {
    let dir = project();
    fs::create_dir_all(dir.path().join("src/app")).unwrap();

    blogkit(dir.path())
        .args(["scaffold", "--basePath=posts", "--adminPath=dashboard"])
        .assert()
        .success();

    let expected = [
        "src/app/posts/[[...slug]]/page.tsx",
        "src/app/dashboard/page.tsx",
        "src/app/auth/signin/page.tsx",
        "src/middleware.ts",
    ];
    for file in expected {
        assert!(!read(&dir, file).is_empty(), "{file}");
    }

    let signin = read(&dir, "src/app/auth/signin/page.tsx");
    assert!(signin.contains("window.location.href = '/dashboard';"));

    let middleware = read(&dir, "src/middleware.ts");
    assert!(middleware.contains("matcher: ['/dashboard', '/dashboard/:path*']"));
}

#[test]
fn test_quote_in_route_is_escaped() {
    let dir = project();
    blogkit(dir.path())
        .args(["scaffold", "--adminPath=it's"])
        .assert()
        .success();

    let middleware = read(&dir, "src/middleware.ts");
    assert!(middleware.contains(r"'/it\'s'"));
    assert!(!middleware.contains("'/it's'"));
}

#[test]
fn test_unknown_and_empty_flags_are_ignored() {
    let dir = project();
    blogkit(dir.path())
        .args(["scaffold", "--frobnicate", "--basePath=", "--adminPath=true"])
        .assert()
        .success();

    for file in FILES_UNDER_SRC {
        assert!(dir.path().join(file).is_file(), "{file}");
    }
}

#[cfg(unix)]
#[test]
fn test_non_utf8_flag_is_ignored() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = project();
    blogkit(dir.path())
        .arg("scaffold")
        .arg(OsStr::from_bytes(b"--x\xff"))
        .assert()
        .success();

    for file in FILES_UNDER_SRC {
        assert!(dir.path().join(file).is_file(), "{file}");
    }
}

#[test]
fn test_filesystem_failure_is_exit_1() {
    let dir = project();
    fs::create_dir_all(dir.path().join("src/app")).unwrap();
    fs::write(dir.path().join("src/app/blog"), "not a directory").unwrap();

    blogkit(dir.path())
        .arg("scaffold")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Filesystem error"));

    assert!(!dir.path().join("src/app/admin/page.tsx").exists());
}

// ── global flags & config ─────────────────────────────────────────────────────

#[test]
fn test_quiet_flag() {
    let dir = project();
    blogkit(dir.path())
        .args(["-q", "scaffold"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(dir.path().join("src/middleware.ts").is_file());
}

#[test]
fn test_verbose_flag_logs_writes() {
    let dir = project();
    blogkit(dir.path())
        .args(["-v", "scaffold"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"));
}

#[test]
fn test_json_report() {
    let dir = project();
    let assert = blogkit(dir.path())
        .args(["--output-format", "json", "scaffold"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let files = report["files"].as_array().unwrap();
    assert_eq!(files.len(), 4);
    assert_eq!(files[0]["artifact"], "blog-page");
    assert_eq!(files[3]["status"], "written");
}

#[test]
fn test_local_config_supplies_defaults() {
    let dir = project();
    fs::write(
        dir.path().join(".blogkit.toml"),
        "package = \"@acme/blog\"\n[defaults]\nadmin_path = \"staff\"\n",
    )
    .unwrap();

    blogkit(dir.path()).arg("scaffold").assert().success();

    assert!(read(&dir, "src/app/staff/page.tsx").contains("from '@acme/blog'"));
}

#[test]
fn test_flags_beat_config() {
    let dir = project();
    fs::write(
        dir.path().join(".blogkit.toml"),
        "[defaults]\nadmin_path = \"staff\"\n",
    )
    .unwrap();

    blogkit(dir.path())
        .args(["scaffold", "--adminPath=dashboard"])
        .assert()
        .success();

    assert!(dir.path().join("src/app/dashboard/page.tsx").is_file());
    assert!(!dir.path().join("src/app/staff").exists());
}

#[test]
fn test_env_overrides_config_file() {
    let dir = project();
    fs::write(
        dir.path().join(".blogkit.toml"),
        "[defaults]\nbase_path = \"news\"\n",
    )
    .unwrap();

    blogkit(dir.path())
        .env("BLOGKIT_DEFAULTS__BASE_PATH", "journal")
        .arg("scaffold")
        .assert()
        .success();

    assert!(dir.path().join("src/app/journal/[[...slug]]/page.tsx").is_file());
    assert!(!dir.path().join("src/app/news").exists());
}

#[test]
fn test_missing_config_file_is_exit_4() {
    let dir = project();
    blogkit(dir.path())
        .args(["--config", "missing.toml", "scaffold"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("missing.toml"));
    assert!(!dir.path().join("src").exists());
}
