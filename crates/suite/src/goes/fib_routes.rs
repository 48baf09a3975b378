// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::LogMode;

use crate::session::Session;
use crate::verifier::Verifier;

/// Minimum number of routes both the kernel and the vnet FIB must hold.
pub const MIN_ROUTES: usize = 1550;

/// The kernel routing table and the hardware FIB are both fully populated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FibRoutes {
    /// Accepted for compatibility; the threshold is fixed.
    #[serde(default)]
    pub routes_count: Option<serde_json::Value>,
}

#[async_trait]
impl Verifier for FibRoutes {
    const NAME: &'static str = "fib-routes";
    const SUMMARY: &'static str = "Kernel and vnet FIB hold the full route table";

    fn log_mode(&self) -> LogMode {
        LogMode::Overwrite
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        let kernel = session.exec("ip route show").await.map_or(0, |o| o.lines().count());
        let fib = session.exec("goes vnet show ip fib").await.map_or(0, |o| o.lines().count());
        tracing::debug!(kernel, fib, "route counts");
        if kernel < MIN_ROUTES || fib < MIN_ROUTES {
            session.fail_inline(format!("On switch {switch} there are less than {MIN_ROUTES} routes available"));
        }
    }
}

#[cfg(test)]
#[path = "fib_routes_tests.rs"]
mod tests;
