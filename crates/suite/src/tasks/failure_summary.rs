// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::{CommandRunner, KvClient};
use swt_core::{TaskReport, RESULT_DETAIL_KEY};

use crate::verifier::Task;

const FAILED: &str = "Failed";

/// Collect the stored failure detail for every failed test in a summary
/// report.
///
/// Report lines look like `bgp_auth_1234: Failed`; the token before the
/// colon is the results-store hash of that run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FailureSummary {
    #[serde(default)]
    pub summary_report_file: String,
}

fn report_hash(line: &str) -> Option<&str> {
    let token = line.split_whitespace().next()?;
    let end = token.char_indices().last().map(|(i, _)| i)?;
    Some(&token[..end])
}

/// Split the gathered text into lines, with a blank entry before every
/// failure header but the first.
fn summary_lines(summary: &str) -> Vec<String> {
    let lines: Vec<&str> = summary.lines().filter(|l| !l.is_empty()).collect();
    let mut out = Vec::with_capacity(lines.len());
    for line in &lines {
        if line.contains(FAILED) && Some(line) != lines.first() {
            out.push("\n".to_string());
        }
        out.push(line.to_string());
    }
    out
}

#[async_trait]
impl Task for FailureSummary {
    const NAME: &'static str = "failure-summary";
    const SUMMARY: &'static str = "Gather failure details of a test run from the results store";

    async fn execute<R: CommandRunner>(&self, _switch_name: &str, runner: &R) -> TaskReport {
        let kv = KvClient::from_env(runner.clone());
        let mut summary = String::new();
        for line in self.summary_report_file.lines().filter(|l| l.contains(FAILED)) {
            let Some(hash) = report_hash(line) else {
                continue;
            };
            let detail = kv.hget_raw(hash, RESULT_DETAIL_KEY).await;
            let detail = match detail.as_deref() {
                Some(text) if !text.trim().is_empty() => text,
                _ => "None",
            };
            summary.push_str(line);
            summary.push('\n');
            summary.push_str(detail);
            summary.push('\n');
        }

        let stdout_lines = summary_lines(&summary);
        tracing::info!(failures = stdout_lines.iter().filter(|l| l.contains(FAILED)).count(), "failure summary");
        TaskReport { stdout_lines, ..TaskReport::default() }
    }
}

#[cfg(test)]
#[path = "failure_summary_tests.rs"]
mod tests;
