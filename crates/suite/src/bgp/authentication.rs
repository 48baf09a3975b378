// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::LogMode;

use crate::checks::{check_bgp_neighbors, GOES_STATUS_CMD, RUNNING_CONFIG_CMD};
use crate::session::Session;
use crate::suppress::SuppressPolicy;
use crate::verifier::Verifier;

/// Peers configured with passwords still reach Established.
#[derive(Debug, Clone, Deserialize)]
pub struct Authentication {
    #[serde(default)]
    pub config_file: String,
    #[serde(default = "super::default_package")]
    pub package_name: String,
}

#[async_trait]
impl Verifier for Authentication {
    const NAME: &'static str = "bgp-authentication";
    const SUMMARY: &'static str = "BGP neighbors with authentication reach Established";

    fn log_mode(&self) -> LogMode {
        LogMode::Overwrite
    }

    fn suppress_policy(&self) -> SuppressPolicy {
        SuppressPolicy::none().skip_containing_all(&["service", "restart"])
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let package = self.package_name.as_str();
        session.exec(RUNNING_CONFIG_CMD).await;
        session.exec(&format!("service {package} restart")).await;
        // Only the dry-run listing shows the settle time.
        if session.is_dry_run() {
            session.wait_secs(35).await;
        }
        session.exec(&format!("service {package} status")).await;
        check_bgp_neighbors(session, &self.config_file).await;
        session.exec(GOES_STATUS_CMD).await;
    }
}

#[cfg(test)]
#[path = "authentication_tests.rs"]
mod tests;
