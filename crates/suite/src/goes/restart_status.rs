// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{lenient_u64, LogMode};

use crate::checks::goes_status_ok;
use crate::session::Session;
use crate::verifier::Verifier;

/// `goes restart` repeatedly; status must be healthy after every restart.
#[derive(Debug, Clone, Deserialize)]
pub struct RestartStatus {
    #[serde(default = "one", deserialize_with = "lenient_u64")]
    pub restart_count: u64,
}

fn one() -> u64 {
    1
}

#[async_trait]
impl Verifier for RestartStatus {
    const NAME: &'static str = "goes-restart-status";
    const SUMMARY: &'static str = "goes status stays healthy across restarts";

    fn log_mode(&self) -> LogMode {
        LogMode::Overwrite
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        for attempt in 1..=self.restart_count {
            session.exec("goes restart").await;
            if !goes_status_ok(session).await {
                session.fail(format!("On switch {switch} goes status is not ok after restarting it for {attempt} times"));
            }
        }
    }
}

#[cfg(test)]
#[path = "restart_status_tests.rs"]
mod tests;
