// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use super::CommandOutput;

fn output(stdout: &str, stderr: &str) -> CommandOutput {
    CommandOutput {
        program: "cmd".to_string(),
        args: Vec::new(),
        exit_code: 0,
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
        duration: Duration::ZERO,
    }
}

#[yare::parameterized(
    stdout_only = { "out\n", "", Some("out") },
    stderr_only = { "", "err\n", Some("err") },
    both_prefers_stdout = { "out", "err", Some("out") },
    whitespace_stdout_falls_back = { " \n\n", "err  ", Some("err") },
    both_empty = { "", "", None },
    both_whitespace = { "\n", "\t\n", None },
    leading_space_kept = { "  indented\n", "", Some("  indented") },
)]
fn captured(stdout: &str, stderr: &str, expected: Option<&str>) {
    assert_eq!(output(stdout, stderr).captured().as_deref(), expected);
}
