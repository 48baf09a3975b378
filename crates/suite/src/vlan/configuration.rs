// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{switch_id, CsvList, LogMode};

use super::{add_vlan, check_tagged_capture, check_vlan_address, isolate_odd_ports};
use crate::checks::GOES_STATUS_CMD;
use crate::session::Session;
use crate::verifier::Verifier;

const SUBPORTS: u32 = 4;

/// Tagged sub-interfaces on the leaf carry traffic the spines see tagged.
///
/// With `multiple_vlan` each port gets four sub-interfaces with VLAN ids
/// `eth + 1 ..= eth + 4`; otherwise one sub-interface whose id is the port
/// number. `lldp` replaces the ping/capture exchange with a passive capture
/// on every port.
#[derive(Debug, Clone, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub spine_list: CsvList,
    #[serde(default)]
    pub leaf_switch: String,
    #[serde(default)]
    pub eth_list: CsvList,
    #[serde(default)]
    pub arping: bool,
    #[serde(default)]
    pub lldp: bool,
    #[serde(default)]
    pub multiple_vlan: bool,
}

impl Configuration {
    /// `(subport, vlan id)` pairs configured on `eth`.
    fn vlans(&self, eth: &str) -> Vec<(u32, String)> {
        if !self.multiple_vlan {
            return vec![(1, eth.to_string())];
        }
        let base: u32 = eth.parse().unwrap_or_default();
        (1..=SUBPORTS).map(|sub| (sub, (base + sub).to_string())).collect()
    }

    async fn configure<R: CommandRunner>(&self, session: &mut Session<R>, id: &str) {
        for eth in &self.eth_list {
            for (sub, vlan_id) in self.vlans(eth) {
                add_vlan(session, eth, sub, &vlan_id).await;
                session.exec(&format!("ifconfig eth-{eth}-1.{sub} 192.168.{vlan_id}.{id}/24")).await;
            }
        }
        for eth in &self.eth_list {
            for (sub, vlan_id) in self.vlans(eth) {
                check_vlan_address(session, &format!("eth-{eth}-1.{sub}"), &format!("192.168.{vlan_id}.{id}")).await;
            }
        }
    }

    async fn send_from_leaf<R: CommandRunner>(&self, session: &mut Session<R>) {
        for (i, eth) in self.eth_list.iter().enumerate() {
            let Some(spine) = self.spine_list.get(i) else {
                continue;
            };
            let peer = switch_id(spine);
            if self.arping {
                session.exec(&format!("arping -C 15 -I eth-{eth}-1.1 192.168.{eth}.{peer}")).await;
            } else if !self.multiple_vlan {
                session.exec(&format!("ping -c 15 192.168.{eth}.{peer}")).await;
            } else {
                for (_, vlan_id) in self.vlans(eth) {
                    session.exec(&format!("ping -c 10 192.168.{vlan_id}.{peer}")).await;
                }
            }
        }
    }

    async fn capture_on_spine<R: CommandRunner>(&self, session: &mut Session<R>, switch: &str) {
        let Some(eth) = self.spine_list.position(switch).and_then(|i| self.eth_list.get(i)) else {
            return;
        };
        let filter = if self.arping { "arp" } else { "icmp" };
        let cmd = format!("tcpdump -c 15 -net -i eth-{eth}-1 {filter}");
        for (_, vlan_id) in self.vlans(eth) {
            check_tagged_capture(session, &cmd, eth, &vlan_id).await;
        }
    }
}

#[async_trait]
impl Verifier for Configuration {
    const NAME: &'static str = "vlan-configuration";
    const SUMMARY: &'static str = "VLAN sub-interfaces and tagged traffic between leaf and spines";

    fn log_mode(&self) -> LogMode {
        LogMode::Append
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        let id = switch_id(&switch).to_string();
        let is_leaf = switch == self.leaf_switch;

        if is_leaf {
            isolate_odd_ports(session).await;
        }
        self.configure(session, &id).await;

        if self.lldp {
            for eth in &self.eth_list {
                let cmd = format!("tcpdump -c 7 -G 10 -net -i eth-{eth}-1 not proto ospf and not arp -vvv");
                check_tagged_capture(session, &cmd, eth, eth).await;
            }
        } else if is_leaf {
            self.send_from_leaf(session).await;
        } else {
            self.capture_on_spine(session, &switch).await;
        }

        session.exec(GOES_STATUS_CMD).await;
    }
}

#[cfg(test)]
#[path = "configuration_tests.rs"]
mod tests;
