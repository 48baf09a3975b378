// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{loopback_ip, CsvList, LogMode};

use crate::checks::{add_loopback, check_bgp_neighbors, restart_routing, set_interfaces, GOES_STATUS_CMD};
use crate::session::Session;
use crate::suppress::SuppressPolicy;
use crate::verifier::Verifier;

/// Peering survives a leaf taking some of its uplinks down and back up.
#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceDown {
    #[serde(default)]
    pub config_file: String,
    #[serde(default)]
    pub leaf_list: CsvList,
    #[serde(default)]
    pub eth_list: CsvList,
    #[serde(default)]
    pub check_ping: bool,
    #[serde(default = "super::default_package")]
    pub package_name: String,
}

impl InterfaceDown {
    async fn check<R: CommandRunner>(&self, session: &mut Session<R>, ping: Option<(&str, &str)>) {
        check_bgp_neighbors(session, &self.config_file).await;
        if let Some((self_ip, neighbor_ip)) = ping {
            let switch = session.switch_name().to_string();
            let out = session.exec(&format!("ping -w 3 -c 3 -I {self_ip} {neighbor_ip}")).await;
            if !out.is_some_and(|o| o.contains("3 received")) {
                session.fail(format!("From switch {switch} neighbor ip {neighbor_ip} is not getting pinged"));
            }
        }
    }
}

#[async_trait]
impl Verifier for InterfaceDown {
    const NAME: &'static str = "bgp-peering-if-down";
    const SUMMARY: &'static str = "BGP peering and loopback reachability across interface down/up";

    fn log_mode(&self) -> LogMode {
        LogMode::Overwrite
    }

    fn suppress_policy(&self) -> SuppressPolicy {
        SuppressPolicy::none().skip_containing("dummy").skip_containing("restart")
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        let is_leaf = self.leaf_list.contains(&switch);
        let self_ip = loopback_ip(&switch);
        let neighbor_ip = self.leaf_list.without(&switch).first().map(|leaf| loopback_ip(leaf));
        let ping = match &neighbor_ip {
            Some(neighbor) if self.check_ping && is_leaf => Some((self_ip.as_str(), neighbor.as_str())),
            _ => None,
        };
        let eths = || self.eth_list.iter().map(String::as_str);

        add_loopback(session).await;
        restart_routing(session, &self.package_name).await;
        self.check(session, ping).await;

        session.wait_secs(3).await;
        if is_leaf {
            set_interfaces(session, eths(), "down").await;
        }
        session.wait_secs(5).await;
        self.check(session, ping).await;

        if is_leaf {
            set_interfaces(session, eths(), "up").await;
        }
        session.wait_secs(5).await;
        self.check(session, ping).await;

        session.exec(GOES_STATUS_CMD).await;
    }
}

#[cfg(test)]
#[path = "interface_down_tests.rs"]
mod tests;
