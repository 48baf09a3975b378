// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Captured output of one subprocess.

use std::time::Duration;

/// Record of a single command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// The command name (argv\[0\]).
    pub program: String,
    /// Full arguments (argv\[1..\]).
    pub args: Vec<String>,
    /// Exit code returned by the process, or -1 when killed by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    /// Wall-clock duration.
    pub duration: Duration,
}

impl CommandOutput {
    /// Stdout without trailing whitespace, else stderr, else `None`.
    ///
    /// The exit code is not consulted.
    pub fn captured(&self) -> Option<String> {
        let stdout = self.stdout.trim_end();
        if !stdout.is_empty() {
            return Some(stdout.to_string());
        }
        let stderr = self.stderr.trim_end();
        if !stderr.is_empty() {
            return Some(stderr.to_string());
        }
        None
    }
}

#[cfg(test)]
#[path = "../exec_tests/result.rs"]
mod tests;
