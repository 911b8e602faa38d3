// Shared helpers for driving the binaries in a scratch directory
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// A temporary working directory holding the input files for one test.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn with_input(name: &str, content: &str) -> Self {
        let workspace = Self::new();
        workspace.write(name, content);
        workspace
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.join(name), content).unwrap();
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.join(name)).unwrap()
    }

    /// Run `exe` with `args`, using this workspace as the working directory.
    pub fn run(&self, exe: &str, args: &[&str]) -> ToolOutput {
        let output = Command::new(exe)
            .args(args)
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .env_remove("LINESTATS_OUTPUT_DIR")
            .env("NO_COLOR", "1")
            .output()
            .unwrap();
        ToolOutput::from(output)
    }
}

#[derive(Debug)]
pub struct ToolOutput {
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for ToolOutput {
    fn from(output: Output) -> Self {
        Self {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Report lines without the trailing elapsed-time footer.
pub fn body_lines(report: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = report.lines().collect();
    let footer = lines.pop().unwrap_or_default();
    assert!(
        footer.starts_with("Elapsed Time: ") && footer.ends_with(" seconds"),
        "unexpected footer: {footer:?}"
    );
    lines
}

/// Numeric value of a `KEY: value` statistics line.
pub fn numeric_field(report: &str, key: &str) -> f64 {
    let prefix = format!("{key}: ");
    report
        .lines()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .unwrap_or_else(|| panic!("no {key} line in {report:?}"))
        .parse()
        .unwrap()
}
