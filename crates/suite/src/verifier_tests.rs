// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use swt_adapters::FakeRunner;
use swt_core::StatusLabel;

use super::*;
use crate::test_helpers::{common, expect_report};

struct StatusCheck {
    writes_log: bool,
}

#[async_trait]
impl Verifier for StatusCheck {
    const NAME: &'static str = "status-check";
    const SUMMARY: &'static str = "goes status answers";

    fn log_mode(&self) -> LogMode {
        LogMode::Overwrite
    }

    fn writes_log(&self) -> bool {
        self.writes_log
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        if session.exec("goes status").await.is_none() {
            session.fail("goes status gave no output");
        }
    }
}

struct Restart;

#[async_trait]
impl Task for Restart {
    const NAME: &'static str = "restart";
    const SUMMARY: &'static str = "restart goes";

    async fn execute<R: CommandRunner>(&self, _switch_name: &str, runner: &R) -> TaskReport {
        runner.run("goes restart").await;
        TaskReport::msg("restarted")
    }
}

#[tokio::test]
async fn verifier_writes_log_named_after_hash() {
    let dir = tempfile::tempdir().unwrap();
    let runner = FakeRunner::new();
    runner.respond("goes status", "ok");

    let outcome = run_verifier(&StatusCheck { writes_log: true }, &common("invader1", dir.path()), runner)
        .await
        .unwrap();

    let report = expect_report(outcome);
    let path = dir.path().join("test.log");
    assert_eq!(report.log_file_path.as_deref(), Some(path.as_path()));
    assert_eq!(report.status, StatusLabel::Passed);
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.starts_with("invader1 2026101800:00:00 goes status\nok\n\n"));
    assert!(text.ends_with("result.status\nPassed\n\nresult.detail\n\n\n"));
}

#[tokio::test]
async fn empty_hash_name_falls_back_to_module_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut params = common("invader1", dir.path());
    params.hash_name.clear();

    let outcome = run_verifier(&StatusCheck { writes_log: true }, &params, FakeRunner::new()).await.unwrap();

    let report = expect_report(outcome);
    assert_eq!(report.status, StatusLabel::Failed);
    assert!(dir.path().join("status-check.log").exists());
}

#[tokio::test]
async fn missing_log_dir_is_an_error() {
    let mut params = common("invader1", std::path::Path::new("/unused"));
    params.log_dir_path = None;
    if swt_core::env::log_dir().is_some() {
        return;
    }

    let result = run_verifier(&StatusCheck { writes_log: true }, &params, FakeRunner::new()).await;

    assert!(matches!(result, Err(SuiteError::MissingLogDir)));
}

#[tokio::test]
async fn dry_run_lists_keys_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let runner = FakeRunner::new();
    let mut params = common("invader1", dir.path());
    params.dry_run = true;

    let outcome = run_verifier(&StatusCheck { writes_log: true }, &params, runner.clone()).await.unwrap();

    let RunOutcome::DryRun { cmds } = outcome else { panic!("expected a dry run, got {outcome:?}") };
    assert_eq!(cmds, ["invader1 2026101800:00:00 goes status"]);
    assert_eq!(runner.commands(), Vec::<String>::new());
    assert!(!dir.path().join("test.log").exists());
}

#[tokio::test]
async fn verifier_without_log_reports_no_path() {
    let dir = tempfile::tempdir().unwrap();

    let outcome =
        run_verifier(&StatusCheck { writes_log: false }, &common("invader1", dir.path()), FakeRunner::new())
            .await
            .unwrap();

    assert_eq!(expect_report(outcome).log_file_path, None);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn task_runs_its_commands() {
    let dir = tempfile::tempdir().unwrap();
    let runner = FakeRunner::new();

    let outcome = run_task(&Restart, &common("invader1", dir.path()), runner.clone()).await;

    let RunOutcome::Task(report) = outcome else { panic!("expected a task report, got {outcome:?}") };
    assert_eq!(report.msg, "restarted");
    assert_eq!(runner.commands(), ["goes restart"]);
}

#[tokio::test]
async fn task_dry_run_only_plans() {
    let dir = tempfile::tempdir().unwrap();
    let runner = FakeRunner::new();
    let mut params = common("invader1", dir.path());
    params.dry_run = true;

    let outcome = run_task(&Restart, &params, runner.clone()).await;

    let RunOutcome::DryRun { cmds } = outcome else { panic!("expected a dry run, got {outcome:?}") };
    assert_eq!(cmds, ["goes restart"]);
    assert!(runner.calls().is_empty());
}
