// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for verifier tests.

use swt_adapters::FakeRunner;
use swt_core::{RunOutcome, TaskReport, TestReport};

use crate::session::Session;
use crate::verifier::{CommonParams, Task, Verifier};

/// Run a verifier's script against a fake and return the finished session.
pub(crate) async fn run<V: Verifier>(verifier: &V, runner: &FakeRunner, switch: &str) -> Session<FakeRunner> {
    let mut session = Session::new(runner.clone(), switch, verifier.suppress_policy());
    verifier.verify(&mut session).await;
    session
}

pub(crate) async fn run_task<T: Task>(task: &T, runner: &FakeRunner, switch: &str) -> TaskReport {
    task.execute(switch, runner).await
}

pub(crate) fn common(switch: &str, log_dir: &std::path::Path) -> CommonParams {
    CommonParams {
        switch_name: switch.to_string(),
        hash_name: "test".to_string(),
        log_dir_path: Some(log_dir.to_path_buf()),
        dry_run: false,
    }
}

pub(crate) fn expect_report(outcome: RunOutcome) -> TestReport {
    match outcome {
        RunOutcome::Test(report) => report,
        other => panic!("expected a test report, got {other:?}"),
    }
}

/// Narrative split into lines, blank ones dropped.
pub(crate) fn lines<R: swt_adapters::CommandRunner>(session: &Session<R>) -> Vec<String> {
    session.verdict().narrative().lines().filter(|l| !l.is_empty()).map(str::to_string).collect()
}

/// Commands recorded in the log, without the switch and timestamp prefix.
pub(crate) fn recorded<R: swt_adapters::CommandRunner>(session: &Session<R>) -> Vec<String> {
    session.log().keys().map(|k| k.splitn(3, ' ').nth(2).unwrap_or_default().to_string()).collect()
}

/// Deserialize verifier parameters from JSON.
pub(crate) fn params<T: serde::de::DeserializeOwned>(json: serde_json::Value) -> T {
    serde_json::from_value(json).unwrap()
}
