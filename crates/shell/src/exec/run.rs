// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::process::Stdio;
use std::time::Instant;

use super::error::ExecError;
use super::result::CommandOutput;

pub(super) async fn execute_line(line: &str) -> Result<CommandOutput, ExecError> {
    let mut argv = crate::lexer::split(line)?.into_iter().map(expand_home);
    let Some(program) = argv.next() else {
        return Err(ExecError::EmptyCommand);
    };
    let args: Vec<String> = argv.collect();

    let cmd_span = tracing::info_span!(
        "shell.cmd",
        cmd = %program,
        args = ?args,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    let mut process = tokio::process::Command::new(&program);
    process.args(&args);
    process.stdin(Stdio::null());
    process.stdout(Stdio::piped());
    process.stderr(Stdio::piped());

    let start = Instant::now();
    let output = process
        .output()
        .await
        .map_err(|source| ExecError::SpawnFailed { command: program.clone(), source })?;

    let duration = start.elapsed();
    let exit_code = output.status.code().unwrap_or(-1);

    cmd_span.record("exit_code", exit_code);
    cmd_span.record("duration_ms", duration.as_millis() as u64);

    Ok(CommandOutput {
        program,
        args,
        exit_code,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        duration,
    })
}

/// `~` or a leading `~/` becomes `$HOME`. Other words pass through.
pub(super) fn expand_home(word: String) -> String {
    let Some(rest) = word.strip_prefix('~').filter(|rest| rest.is_empty() || rest.starts_with('/')) else {
        return word;
    };
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => format!("{home}{rest}"),
        _ => word,
    }
}
