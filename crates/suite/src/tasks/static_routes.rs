// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::borrow::Cow;

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{config_lines, TaskReport};

use super::run_lines;
use crate::verifier::Task;

/// Add the static routes listed one command per line, or delete them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticRoutes {
    #[serde(default)]
    pub config_file: String,
    /// Swap `add` for `del` in every line.
    #[serde(default)]
    pub delete: bool,
}

#[async_trait]
impl Task for StaticRoutes {
    const NAME: &'static str = "static-routes";
    const SUMMARY: &'static str = "Add or delete static routes from a command list";

    async fn execute<R: CommandRunner>(&self, switch_name: &str, runner: &R) -> TaskReport {
        let lines = config_lines(&self.config_file).map(|line| {
            if self.delete {
                Cow::Owned(line.replace("add", "del"))
            } else {
                Cow::Borrowed(line)
            }
        }).collect::<Vec<_>>();
        run_lines(switch_name, runner, lines).await
    }
}

/// Apply interface address and MTU updates, one command per line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEthIpMtu {
    #[serde(default)]
    pub config_file: String,
}

#[async_trait]
impl Task for UpdateEthIpMtu {
    const NAME: &'static str = "update-eth-ip-mtu";
    const SUMMARY: &'static str = "Update interface addresses and MTU from a command list";

    async fn execute<R: CommandRunner>(&self, switch_name: &str, runner: &R) -> TaskReport {
        run_lines(switch_name, runner, config_lines(&self.config_file).map(Cow::Borrowed).collect::<Vec<_>>()).await
    }
}

#[cfg(test)]
#[path = "static_routes_tests.rs"]
mod tests;
