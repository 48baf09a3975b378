//! Shared helpers for driving the `swt` binary.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use assert_cmd::Command;

pub use serde_json::{json, Value};

/// Path to the `swt` binary.
///
/// The binary lives in another workspace member, so cargo does not set
/// `CARGO_BIN_EXE_swt` for this test target. It sits next to the `deps`
/// directory holding this test executable, and is built once on demand.
fn swt_bin() -> &'static Path {
    static BIN: OnceLock<PathBuf> = OnceLock::new();
    BIN.get_or_init(|| {
        if let Some(path) = option_env!("CARGO_BIN_EXE_swt") {
            return PathBuf::from(path);
        }
        let exe = std::env::current_exe().unwrap();
        let profile_dir = exe.parent().and_then(Path::parent).unwrap();
        let bin = profile_dir.join(format!("swt{}", std::env::consts::EXE_SUFFIX));
        let mut build = std::process::Command::new(env!("CARGO"));
        build.args(["build", "--quiet", "-p", "swt", "--bin", "swt"]);
        if profile_dir.file_name().is_some_and(|name| name == "release") {
            build.arg("--release");
        }
        let status = build.status().unwrap();
        assert!(status.success(), "building swt failed");
        assert!(bin.exists(), "swt binary not found at {}", bin.display());
        bin
    })
}

/// `swt` with a quiet, colorless environment.
pub fn cli() -> Cli {
    let mut cmd = Command::new(swt_bin());
    cmd.env("NO_COLOR", "1").env_remove("SWT_LOG").env_remove("SWT_LOG_DIR").env_remove("SWT_KV_CLI");
    Cli { cmd }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn arg(mut self, arg: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.arg(arg);
        self
    }

    /// Run, expecting exit code 0.
    pub fn passes(mut self) -> Outcome {
        let output = self.cmd.output().unwrap();
        let outcome = Outcome::from(output);
        assert_eq!(outcome.code, Some(0), "expected success\nstderr: {}", outcome.stderr);
        outcome
    }

    /// Run, expecting the given non-zero exit code.
    pub fn fails_with(mut self, code: i32) -> Outcome {
        let output = self.cmd.output().unwrap();
        let outcome = Outcome::from(output);
        assert_eq!(outcome.code, Some(code), "stdout: {}\nstderr: {}", outcome.stdout, outcome.stderr);
        outcome
    }
}

pub struct Outcome {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Outcome {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Outcome {
    pub fn stdout_has(self, text: &str) -> Self {
        assert!(self.stdout.contains(text), "stdout lacks {text:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, text: &str) -> Self {
        assert!(self.stderr.contains(text), "stderr lacks {text:?}:\n{}", self.stderr);
        self
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}

/// Scratch directory for parameter and log files.
pub struct Scratch {
    dir: tempfile::TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str, text: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, text).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).unwrap()
    }
}
