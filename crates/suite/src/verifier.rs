// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The verifier and task traits and the drivers that run them.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{LogMode, RunOutcome, TaskReport};
use tracing::Instrument;

use crate::error::SuiteError;
use crate::session::{LogTarget, Session};
use crate::suppress::SuppressPolicy;

/// Parameters every module accepts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommonParams {
    #[serde(default)]
    pub switch_name: String,
    /// Log file stem and results-store hash.
    #[serde(default)]
    pub hash_name: String,
    #[serde(default)]
    pub log_dir_path: Option<PathBuf>,
    #[serde(default, alias = "dry_run_mode")]
    pub dry_run: bool,
}

/// A recorded test: a fixed command script with assertions.
#[async_trait]
pub trait Verifier: Send + Sync {
    /// Registry name.
    const NAME: &'static str;
    /// One-line description for listings.
    const SUMMARY: &'static str;

    fn log_mode(&self) -> LogMode;

    fn suppress_policy(&self) -> SuppressPolicy {
        SuppressPolicy::none()
    }

    fn writes_log(&self) -> bool {
        true
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>);
}

/// A provisioning step. Runs commands without recording them.
#[async_trait]
pub trait Task: Send + Sync {
    const NAME: &'static str;
    const SUMMARY: &'static str;

    async fn execute<R: CommandRunner>(&self, switch_name: &str, runner: &R) -> TaskReport;
}

pub async fn run_verifier<V: Verifier, R: CommandRunner>(
    verifier: &V,
    common: &CommonParams,
    runner: R,
) -> Result<RunOutcome, SuiteError> {
    let policy = verifier.suppress_policy().dry_run(common.dry_run);
    let target = if verifier.writes_log() && !policy.is_dry_run() {
        Some(log_target(common, V::NAME, verifier.log_mode())?)
    } else {
        None
    };

    let span = tracing::info_span!("verify", module = V::NAME, switch = %common.switch_name);
    let mut session = Session::new(runner, common.switch_name.as_str(), policy);
    verifier.verify(&mut session).instrument(span).await;
    Ok(session.finish(target.as_ref())?)
}

/// Runs a task, or in dry-run mode lists the commands it would issue.
pub async fn run_task<T: Task, R: CommandRunner>(
    task: &T,
    common: &CommonParams,
    runner: R,
) -> RunOutcome {
    let span = tracing::info_span!("task", module = T::NAME, switch = %common.switch_name);
    if common.dry_run {
        let planner = PlanningRunner::default();
        task.execute(&common.switch_name, &planner).instrument(span).await;
        return RunOutcome::DryRun { cmds: planner.planned() };
    }
    let report = task.execute(&common.switch_name, &runner).instrument(span).await;
    RunOutcome::Task(report)
}

/// Collects command lines instead of running them. Every command answers
/// `None`.
#[derive(Clone, Default)]
struct PlanningRunner {
    planned: Arc<Mutex<Vec<String>>>,
}

impl PlanningRunner {
    fn planned(&self) -> Vec<String> {
        self.planned.lock().clone()
    }
}

#[async_trait]
impl CommandRunner for PlanningRunner {
    async fn run(&self, line: &str) -> Option<String> {
        self.planned.lock().push(line.to_string());
        None
    }
}

fn log_target(common: &CommonParams, module: &str, mode: LogMode) -> Result<LogTarget, SuiteError> {
    let dir = common
        .log_dir_path
        .clone()
        .or_else(swt_core::env::log_dir)
        .ok_or(SuiteError::MissingLogDir)?;
    let name = if common.hash_name.is_empty() { module.to_string() } else { common.hash_name.clone() };
    Ok(LogTarget { dir, name, mode })
}

#[cfg(test)]
#[path = "verifier_tests.rs"]
mod tests;
