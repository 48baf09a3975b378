// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::LogMode;

use crate::checks::{add_loopback, check_bgp_neighbors, restart_routing, GOES_STATUS_CMD};
use crate::session::Session;
use crate::suppress::SuppressPolicy;
use crate::verifier::Verifier;

/// Peering over loopback addresses on `dummy0`.
#[derive(Debug, Clone, Deserialize)]
pub struct Loopback {
    #[serde(default)]
    pub config_file: String,
    #[serde(default = "super::default_package")]
    pub package_name: String,
}

#[async_trait]
impl Verifier for Loopback {
    const NAME: &'static str = "bgp-peering-loopback";
    const SUMMARY: &'static str = "BGP neighbors reach Established when peering over loopbacks";

    fn log_mode(&self) -> LogMode {
        LogMode::Overwrite
    }

    fn suppress_policy(&self) -> SuppressPolicy {
        SuppressPolicy::none().skip_containing("dummy").skip_containing("restart")
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        add_loopback(session).await;
        restart_routing(session, &self.package_name).await;
        check_bgp_neighbors(session, &self.config_file).await;
        session.exec(GOES_STATUS_CMD).await;
    }
}

#[cfg(test)]
#[path = "loopback_tests.rs"]
mod tests;
