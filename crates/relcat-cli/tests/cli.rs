//! End-to-end runs of the `relcat` binary against a temporary index file.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const INDEX: &str = r#"[
    {
        "version": "6.1.0",
        "archname": "w32",
        "edition": {
            "installer": { "url": "https://example.org/octave-6.1.0-w32-installer.exe", "size": 1536 }
        }
    },
    {
        "version": "6.1.0",
        "archname": "w64",
        "edition": {
            "installer": { "url": "https://example.org/octave-6.1.0-w64-installer.exe", "size": 1073741824 },
            "portable": { "url": "https://example.org/octave-6.1.0-w64.7z" },
            "scientific": { "sha256": "ff" }
        }
    },
    { "version": "5.2.0", "archname": "w64" },
    { "version": "5.2.0", "archname": "w64-64" },
    { "version": "4.4", "archname": "w32" }
]"#;

/// Test context holding a temporary release index
struct TestContext {
    index: NamedTempFile,
}

impl TestContext {
    fn new() -> Self {
        let mut index = NamedTempFile::new().expect("failed to create temp index");
        index
            .write_all(INDEX.as_bytes())
            .expect("failed to write temp index");
        Self { index }
    }

    fn relcat_cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_relcat"));
        cmd.env("RELCAT_SOURCE", self.index.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RELCAT_PACKAGE");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.relcat_cmd()
            .args(args)
            .output()
            .expect("failed to run relcat")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn lines(output: &Output) -> Vec<String> {
    stdout(output).lines().map(str::to_string).collect()
}

#[test]
fn test_help_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_relcat"))
        .arg("--help")
        .output()
        .expect("failed to run relcat");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn test_majors() {
    let ctx = TestContext::new();
    let output = ctx.run(&["majors"]);
    assert!(output.status.success());
    assert_eq!(lines(&output), vec!["4", "5", "6"]);
}

#[test]
fn test_majors_filtered_by_bits() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--bits", "64", "majors"]);
    assert!(output.status.success());
    assert_eq!(lines(&output), vec!["5", "6"]);

    // Out-of-domain widths mean "all"
    let output = ctx.run(&["--bits", "16", "majors"]);
    assert_eq!(lines(&output), vec!["4", "5", "6"]);
}

#[test]
fn test_minors_patches_builds() {
    let ctx = TestContext::new();
    assert_eq!(lines(&ctx.run(&["minors", "4"])), vec!["4"]);
    assert_eq!(lines(&ctx.run(&["patches", "6", "1"])), vec!["0"]);
    assert_eq!(lines(&ctx.run(&["builds", "6", "1", "0"])), vec!["0"]);
}

#[test]
fn test_archs_ignore_bits() {
    let ctx = TestContext::new();
    let all = lines(&ctx.run(&["archs"]));
    assert_eq!(all, vec!["w32", "w64", "w64-64"]);
    assert_eq!(lines(&ctx.run(&["--bits", "32", "archs"])), all);
}

#[test]
fn test_latest_json() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--json", "latest"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["version"], "6.1.0");
    assert_eq!(value["archname"], "w64");
    assert_eq!(value["sortable"]["bits"], 64);

    let links = value["links"].as_array().unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["filename"], "octave-6.1.0-64bit-installer");
    assert_eq!(links[0]["readable_size"], "1.0 GB");
    assert_eq!(links[1]["filename"], "octave-6.1.0-64bit-portable");
}

#[test]
fn test_latest_text_uses_package_name() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--package", "mytool", "--bits", "32", "latest"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("6.1.0"));
    assert!(text.contains("mytool-6.1.0-64bit-installer"));
    assert!(text.contains("1.5 KB"));
}

#[test]
fn test_releases_json() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--json", "releases", "5"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let archs: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["archname"].as_str().unwrap())
        .collect();
    assert_eq!(archs, vec!["w64", "w64-64"]);
}

#[test]
fn test_missing_source_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_relcat"))
        .env_remove("RELCAT_SOURCE")
        .arg("majors")
        .output()
        .expect("failed to run relcat");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("RELCAT_SOURCE"));
}

#[test]
fn test_invalid_index_fails() {
    let mut bad = NamedTempFile::new().unwrap();
    bad.write_all(b"not json").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_relcat"))
        .env("RELCAT_SOURCE", bad.path())
        .arg("majors")
        .output()
        .expect("failed to run relcat");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid release index"));
}
