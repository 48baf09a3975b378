// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Link health between invaders.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{CsvList, TaskReport, Topology};

use crate::verifier::Task;

const PACKET_LOSS: &str = "100% packet loss";
const PING_GAP: Duration = Duration::from_secs(1);

/// Every listed port has link; leaves with all links up can also reach the
/// spines over each odd-numbered port. Nothing is recorded.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyLinks {
    #[serde(flatten)]
    pub topology: Topology,
    #[serde(default)]
    pub eth_list: CsvList,
    #[serde(default)]
    pub platina_redis_channel: String,
}

impl VerifyLinks {
    /// Spine last octets for the low and high port ranges.
    fn spine_octets(&self, switch: &str) -> (&'static str, &'static str) {
        match self.topology.leaf_index(switch) {
            Some(0) => ("31", "32"),
            _ => ("32", "31"),
        }
    }

    /// Every spine address a leaf pings, low ports first.
    fn ping_targets(&self, switch: &str) -> Vec<String> {
        let (low, high) = self.spine_octets(switch);
        let low = (1..16).step_by(2).map(|eth| format!("10.0.{eth}.{low}"));
        let high = (17..32).step_by(2).map(|eth| format!("10.0.{eth}.{high}"));
        low.chain(high).collect()
    }
}

#[async_trait]
impl Task for VerifyLinks {
    const NAME: &'static str = "verify-links";
    const SUMMARY: &'static str = "Check port links are up and leaves can ping the spines";

    async fn execute<R: CommandRunner>(&self, switch: &str, runner: &R) -> TaskReport {
        let channel = self.platina_redis_channel.as_str();
        let mut msg = String::new();
        let mut passed = true;

        for eth in self.eth_list.iter() {
            let out = runner.run(&format!("goes hget {channel} vnet.eth-{eth}-1.link")).await;
            if !out.is_some_and(|status| status.contains("true")) {
                passed = false;
                msg.push_str(&format!("On switch {switch} port link is not up for eth-{eth}-1 interface\n"));
            }
        }

        if passed && self.topology.is_leaf(switch) {
            for ip in self.ping_targets(switch) {
                let out = runner.run(&format!("ping -c 3 {ip}")).await;
                if out.as_deref().map_or(true, |text| text.contains(PACKET_LOSS)) {
                    passed = false;
                    msg.push_str(&format!(
                        "On switch {switch} unable to ping interface ip {ip}\nPing Out:\n{}\n",
                        out.as_deref().unwrap_or("None")
                    ));
                }
                tokio::time::sleep(PING_GAP).await;
            }
        }

        if passed {
            msg = "Links b/w invaders are UP\n".to_string();
        } else {
            tracing::info!(%switch, "links not healthy");
        }
        TaskReport { msg, passed: Some(passed), ..TaskReport::default() }
    }
}

#[cfg(test)]
#[path = "verify_links_tests.rs"]
mod tests;
