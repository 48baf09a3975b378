// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log file writing and the structured results handed back to the caller.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::record::ExecutionLog;
use crate::verdict::StatusLabel;

/// How a log file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogMode {
    Overwrite,
    Append,
}

/// `{dir}/{name}.log`
pub fn log_file_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.log"))
}

/// Write every record as `key`, `value`, blank line, in insertion order.
///
/// Absent values are written as `None`. Nothing is synced; a failure part
/// way through leaves a partial file.
pub fn write_log(path: &Path, log: &ExecutionLog, mode: LogMode) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        LogMode::Overwrite => options.write(true).truncate(true),
        LogMode::Append => options.append(true),
    };
    let mut out = BufWriter::new(options.open(path)?);
    for record in log {
        writeln!(out, "{}", record.key)?;
        writeln!(out, "{}", record.value.as_deref().unwrap_or("None"))?;
        writeln!(out)?;
    }
    out.flush()
}

/// Result of a recorded verification run.
#[derive(Debug, Clone, Serialize)]
pub struct TestReport {
    pub hash_dict: ExecutionLog,
    /// Unset when the log file was deliberately not written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<PathBuf>,
    pub status: StatusLabel,
    pub changed: bool,
}

/// Result of a provisioning task that keeps no execution log.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskReport {
    pub msg: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stdout_lines: Vec<String>,
    /// Only set by tasks that assert something.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passed: Option<bool>,
    pub changed: bool,
}

impl TaskReport {
    pub fn msg(msg: impl Into<String>) -> Self {
        Self { msg: msg.into(), changed: true, ..Self::default() }
    }
}

/// Anything a module run can hand back to the orchestrator.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RunOutcome {
    Test(TestReport),
    /// Keys that a dry run would have produced.
    DryRun { cmds: Vec<String> },
    Task(TaskReport),
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
