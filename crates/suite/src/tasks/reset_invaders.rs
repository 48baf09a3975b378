// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{CsvList, TaskReport, Topology};

use super::aborted;
use crate::verifier::Task;

const PORT_COUNT: u32 = 32;

/// Reload the vnet driver and bring every front-panel port back to
/// 100G with its default fabric address.
#[derive(Debug, Clone, Deserialize)]
pub struct ResetInvaders {
    #[serde(flatten)]
    pub topology: Topology,
    #[serde(default)]
    pub leaf_eth_ips_last_octet: CsvList,
    #[serde(default)]
    pub spine_eth_ips_last_octet: CsvList,
    #[serde(default)]
    pub platina_redis_channel: String,
}

#[async_trait]
impl Task for ResetInvaders {
    const NAME: &'static str = "reset-invaders";
    const SUMMARY: &'static str = "Recreate all ports at 100G with default addresses";

    async fn execute<R: CommandRunner>(&self, switch_name: &str, runner: &R) -> TaskReport {
        let Some(octet) =
            self.topology.role_value(switch_name, &self.spine_eth_ips_last_octet, &self.leaf_eth_ips_last_octet)
        else {
            return aborted(format!("On switch {switch_name} no interface address is configured for this switch"));
        };
        let channel = self.platina_redis_channel.as_str();

        runner.run("goes stop").await;
        runner.run(&format!("rmmod {channel}")).await;
        runner.run(&format!("modprobe {channel}")).await;
        for eth in 1..=PORT_COUNT {
            runner.run(&format!("ip link add eth-{eth}-1 type {channel}")).await;
            runner.run(&format!("ip link set eth-{eth}-1 up")).await;
            runner.run(&format!("ethtool -s eth-{eth}-1 speed 100000 autoneg off")).await;
            runner.run(&format!("ifconfig eth-{eth}-1 10.0.{eth}.{octet}/24")).await;
        }
        runner.run("goes start").await;
        tracing::info!(switch = %switch_name, ports = PORT_COUNT, "invader reset");

        TaskReport::msg("Reset all invaders")
    }
}

#[cfg(test)]
#[path = "reset_invaders_tests.rs"]
mod tests;
