// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{loopback_ip, switch_id, CsvList, LogMode};

use super::Network;
use crate::checks::{add_loopback, RUNNING_CONFIG_CMD, GOES_STATUS_CMD};
use crate::session::Session;
use crate::verifier::Verifier;

/// Leaves learn each other's loopbacks over OSPF and can ping across.
#[derive(Debug, Clone, Deserialize)]
pub struct Traffic {
    #[serde(default)]
    pub config_file: String,
    #[serde(default)]
    pub leaf_list: CsvList,
    #[serde(default = "crate::bgp::default_package")]
    pub package_name: String,
}

#[async_trait]
impl Verifier for Traffic {
    const NAME: &'static str = "ospf-traffic";
    const SUMMARY: &'static str = "OSPF loopback routes and leaf-to-leaf ping";

    fn log_mode(&self) -> LogMode {
        LogMode::Overwrite
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        let id = switch_id(&switch).to_string();

        session.exec(RUNNING_CONFIG_CMD).await;
        for network in Network::from_config(&self.config_file) {
            if network.third_octet() == id {
                add_loopback(session).await;
            } else {
                session.exec(&network.ifconfig(&id)).await;
            }
        }

        session.exec(&format!("service {} restart", self.package_name)).await;
        session.wait_secs(60).await;
        session.exec(&format!("service {} status", self.package_name)).await;

        if self.leaf_list.contains(&switch) {
            let cmd = "vtysh -c 'sh ip route ospf'";
            match session.exec(cmd).await {
                Some(routes) => {
                    for route in self.leaf_list.iter().map(|leaf| loopback_ip(leaf)) {
                        if !routes.contains(&route) {
                            session.fail(format!(
                                "On switch {switch} ospf route {route} is not present in the output of command {cmd}"
                            ));
                        }
                    }
                }
                None => session.fail_inline(format!(
                    "On switch {switch} ospf route cannot be verified since output of command {cmd} is None"
                )),
            }

            if let Some(neighbor) = self.leaf_list.without(&switch).first() {
                let ping = format!("ping -w 3 -c 3 -I {} {}", loopback_ip(&switch), loopback_ip(neighbor));
                let out = session.exec(&ping).await;
                if !out.is_some_and(|o| o.contains("3 received")) {
                    session.fail(format!("From switch {switch}, {neighbor} is not getting pinged"));
                }
            }
        }

        session.exec(GOES_STATUS_CMD).await;
    }
}

#[cfg(test)]
#[path = "traffic_tests.rs"]
mod tests;
