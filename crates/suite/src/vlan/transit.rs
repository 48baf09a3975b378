// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{config_lines, switch_id, CsvList, LogMode};

use super::{add_vlan, check_tagged_capture, check_vlan_address, isolate_odd_ports};
use crate::checks::GOES_STATUS_CMD;
use crate::session::Session;
use crate::verifier::Verifier;

/// Tagged traffic from the first leaf crosses the transit switches to the
/// second leaf.
#[derive(Debug, Clone, Deserialize)]
pub struct Transit {
    #[serde(default)]
    pub leaf_list: CsvList,
    #[serde(default)]
    pub config_file: String,
    /// Ping targets' third octets: entries 3 and 4 for the first leaf,
    /// entries 1 and 2 for the others.
    #[serde(default)]
    pub eth_list: CsvList,
}

impl Transit {
    /// Third octet of every `network ... area` address.
    fn vlan_ports(&self) -> Vec<String> {
        config_lines(&self.config_file)
            .filter(|l| l.contains("network") && l.contains("area"))
            .filter_map(|l| l.split_whitespace().nth(1))
            .filter_map(|ip| ip.split('.').nth(2))
            .map(str::to_string)
            .collect()
    }
}

#[async_trait]
impl Verifier for Transit {
    const NAME: &'static str = "vlan-transit";
    const SUMMARY: &'static str = "Tagged traffic across transit switches";

    fn log_mode(&self) -> LogMode {
        LogMode::Append
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        let id = switch_id(&switch).to_string();
        let leaf_index = self.leaf_list.position(&switch);
        let eths = self.vlan_ports();

        if leaf_index.is_some() {
            isolate_odd_ports(session).await;
        }
        for eth in &eths {
            add_vlan(session, eth, 1, eth).await;
            session.exec(&format!("ifconfig eth-{eth}-1.1 192.168.{eth}.{id}/24")).await;
        }
        for eth in &eths {
            check_vlan_address(session, &format!("eth-{eth}-1.1"), &format!("192.168.{eth}.{id}")).await;
        }

        session.exec("service quagga restart").await;
        session.wait_secs(35).await;

        if leaf_index == Some(0) {
            let Some(neighbor) = self.leaf_list.without(&switch).first().map(|n| switch_id(n).to_string()) else {
                session.fail(format!("On switch {switch} there is no other leaf to ping"));
                session.exec(GOES_STATUS_CMD).await;
                return;
            };
            for (i, eth) in eths.iter().enumerate() {
                match self.eth_list.get(i + 2) {
                    Some(target) => {
                        session.exec(&format!("ping -c 20 -I 192.168.{eth}.{id} 192.168.{target}.{neighbor}")).await;
                    }
                    None => session.fail(format!("On switch {switch} no ping target is configured for eth-{eth}-1")),
                }
            }
        } else {
            for eth in &eths {
                check_tagged_capture(session, &format!("tcpdump -c 15 -net -i eth-{eth}-1"), eth, eth).await;
            }
        }

        session.exec(GOES_STATUS_CMD).await;
    }
}

#[cfg(test)]
#[path = "transit_tests.rs"]
mod tests;
