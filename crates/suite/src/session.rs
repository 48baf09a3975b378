// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution recorder: runs commands, keys each result by switch, timestamp
//! and command text, and accumulates the verdict for one module run.

use std::path::PathBuf;
use std::time::Duration;

use swt_adapters::CommandRunner;
use swt_core::report::{log_file_path, write_log};
use swt_core::{
    record_key, ExecutionLog, LogMode, RunOutcome, TestReport, Verdict, RESULT_DETAIL_KEY,
    RESULT_STATUS_KEY,
};
use swt_shell::{truncate_utf8, STORED_OUTPUT_LIMIT};

use crate::suppress::SuppressPolicy;

/// Command whose output keys every record.
pub const TIMESTAMP_COMMAND: &str = "date +%Y%m%d%T";

/// Where and how a finished run writes its log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    pub dir: PathBuf,
    pub name: String,
    pub mode: LogMode,
}

impl LogTarget {
    pub fn path(&self) -> PathBuf {
        log_file_path(&self.dir, &self.name)
    }
}

pub struct Session<R: CommandRunner> {
    runner: R,
    switch_name: String,
    policy: SuppressPolicy,
    log: ExecutionLog,
    verdict: Verdict,
}

impl<R: CommandRunner> Session<R> {
    pub fn new(runner: R, switch_name: impl Into<String>, policy: SuppressPolicy) -> Self {
        Self {
            runner,
            switch_name: switch_name.into(),
            policy,
            log: ExecutionLog::new(),
            verdict: Verdict::new(),
        }
    }

    pub fn switch_name(&self) -> &str {
        &self.switch_name
    }

    pub fn is_dry_run(&self) -> bool {
        self.policy.is_dry_run()
    }

    /// Run `cmd` (unless suppressed) and record it.
    ///
    /// The timestamp lookup always runs, even for suppressed commands. The
    /// stored value is truncated to 512 bytes; the returned one is not.
    pub async fn exec(&mut self, cmd: &str) -> Option<String> {
        self.exec_labeled(cmd, cmd).await
    }

    /// Run `cmd` but record it under `label`.
    pub async fn exec_labeled(&mut self, cmd: &str, label: &str) -> Option<String> {
        let out = if self.policy.suppresses(cmd) {
            tracing::debug!(%cmd, "suppressed");
            None
        } else {
            self.runner.run(cmd).await
        };

        let timestamp = self.runner.run(TIMESTAMP_COMMAND).await;
        let key = record_key(&self.switch_name, timestamp.as_deref(), label);
        let stored = out.as_deref().map(|text| {
            let (kept, truncated) = truncate_utf8(text, STORED_OUTPUT_LIMIT);
            if truncated {
                tracing::debug!(%cmd, len = text.len(), "stored output truncated");
            }
            kept.to_string()
        });
        self.log.push(key, stored);
        out
    }

    /// Run `cmd` without recording it. Skipped entirely in dry-run mode.
    pub async fn run_unrecorded(&self, cmd: &str) -> Option<String> {
        if self.is_dry_run() {
            return None;
        }
        self.runner.run(cmd).await
    }

    /// Fixed delay. A dry run records `pause for N secs` instead.
    pub async fn wait(&mut self, duration: Duration) {
        if self.is_dry_run() {
            self.exec(&format!("pause for {} secs", duration.as_secs())).await;
            return;
        }
        tracing::debug!(secs = duration.as_secs(), "waiting");
        tokio::time::sleep(duration).await;
    }

    pub async fn wait_secs(&mut self, secs: u64) {
        self.wait(Duration::from_secs(secs)).await;
    }

    pub fn fail(&mut self, line: impl AsRef<str>) {
        tracing::info!(switch = %self.switch_name, detail = line.as_ref(), "assertion failed");
        self.verdict.fail(line);
    }

    pub fn fail_inline(&mut self, text: impl AsRef<str>) {
        tracing::info!(switch = %self.switch_name, detail = text.as_ref(), "assertion failed");
        self.verdict.fail_inline(text);
    }

    pub fn note(&mut self, text: impl AsRef<str>) {
        self.verdict.note(text);
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    pub fn log(&self) -> &ExecutionLog {
        &self.log
    }

    /// Append the reserved status and detail records, write the log file
    /// (if any) and hand back the result.
    ///
    /// A dry run returns the recorded keys instead and writes nothing.
    pub fn finish(mut self, target: Option<&LogTarget>) -> std::io::Result<RunOutcome> {
        if self.is_dry_run() {
            let cmds = self.log.keys().map(str::to_string).collect();
            return Ok(RunOutcome::DryRun { cmds });
        }

        let status = self.verdict.status();
        self.log.push(RESULT_STATUS_KEY, Some(status.to_string()));
        self.log.push(RESULT_DETAIL_KEY, Some(self.verdict.narrative().to_string()));

        let log_file_path = match target {
            Some(target) => {
                let path = target.path();
                write_log(&path, &self.log, target.mode)?;
                Some(path)
            }
            None => None,
        };

        tracing::info!(switch = %self.switch_name, %status, records = self.log.len(), "run finished");
        Ok(RunOutcome::Test(TestReport {
            hash_dict: self.log,
            log_file_path,
            status,
            changed: false,
        }))
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
