// tests/cli_exit.rs - Exit code and argument tests
use clap::Parser;
use covdedup_core::cli::Cli;
use covdedup_core::profile::OutputFormat;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/testdata").join(name)
}

fn run_covdedup(dir: &Path, args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_covdedup"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to execute covdedup")
}

fn temp() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn test_exit_0_merged() {
    let d = temp();
    let input = fixture("cover_1.out");
    let out = run_covdedup(d.path(), &[input.as_os_str()]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("mode: set\n"));
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn test_exit_99_no_inputs() {
    let d = temp();
    let out = run_covdedup(d.path(), &[]);
    assert_eq!(out.status.code(), Some(99));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("usage: covdedup"));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_exit_1_missing_file() {
    let d = temp();
    let out = run_covdedup(d.path(), &["notfound.out".as_ref()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("notfound.out"));
}

#[test]
fn test_exit_1_bad_config() {
    let d = temp();
    std::fs::write(d.path().join("covdedup.toml"), "format = 3\n").unwrap();
    let input = fixture("cover_1.out");
    let out = run_covdedup(d.path(), &[input.as_os_str()]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_config_file_applies() {
    let d = temp();
    std::fs::write(d.path().join("covdedup.toml"), "format = \"json\"\n").unwrap();
    let input = fixture("cover_1.out");
    let out = run_covdedup(d.path(), &[input.as_os_str()]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).trim_start().starts_with('['));
}

#[test]
fn test_default_ignore_file_in_working_dir() {
    let d = temp();
    std::fs::write(d.path().join(".covignore"), "alt.go\nmocks/\n").unwrap();
    let input = fixture("cover_multi.out");
    let out = run_covdedup(d.path(), &[input.as_os_str()]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("alt.go"));
    assert!(stdout.contains("main.go"));
}

#[test]
fn test_args_parse() {
    let cli = Cli::try_parse_from([
        "covdedup", "-", "a.out", "-e", "ignore", "--format", "json", "-v",
    ])
    .unwrap();
    assert_eq!(cli.inputs, [PathBuf::from("-"), PathBuf::from("a.out")]);
    assert_eq!(cli.exclude, Some(PathBuf::from("ignore")));
    assert_eq!(cli.format, Some(OutputFormat::Json));
    assert!(cli.verbose);
}

#[test]
fn test_args_defaults() {
    let cli = Cli::try_parse_from(["covdedup"]).unwrap();
    assert!(cli.inputs.is_empty());
    assert_eq!(cli.exclude, None);
    assert_eq!(cli.format, None);
    assert!(!cli.verbose);
}

#[test]
fn test_args_reject_unknown_format() {
    assert!(Cli::try_parse_from(["covdedup", "--format", "xml", "a.out"]).is_err());
}
