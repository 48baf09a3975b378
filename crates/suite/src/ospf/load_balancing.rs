// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{loopback_ip, switch_id, LogMode, Topology};

use super::Network;
use crate::checks::{add_loopback, RUNNING_CONFIG_CMD, GOES_STATUS_CMD};
use crate::session::Session;
use crate::suppress::SuppressPolicy;
use crate::verifier::Verifier;

/// Equal-cost routes to a peer's loopback go out every configured uplink.
#[derive(Debug, Clone, Deserialize)]
pub struct LoadBalancing {
    #[serde(default)]
    pub config_file: String,
    #[serde(flatten)]
    pub topology: Topology,
    #[serde(default = "crate::bgp::default_package")]
    pub package_name: String,
}

#[async_trait]
impl Verifier for LoadBalancing {
    const NAME: &'static str = "ospf-load-balancing";
    const SUMMARY: &'static str = "OSPF equal-cost routes over every uplink";

    fn log_mode(&self) -> LogMode {
        LogMode::Overwrite
    }

    fn suppress_policy(&self) -> SuppressPolicy {
        SuppressPolicy::none().skip_containing("dummy0")
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        let id = switch_id(&switch).to_string();

        add_loopback(session).await;
        session.exec(RUNNING_CONFIG_CMD).await;

        let mut uplinks = Vec::new();
        for network in Network::from_config(&self.config_file) {
            if network.third_octet() == id {
                continue;
            }
            session.exec(&network.ifconfig(&id)).await;
            uplinks.push(network.interface());
        }

        session.exec(&format!("service {} restart", self.package_name)).await;
        session.wait_secs(60).await;
        session.exec(&format!("service {} status", self.package_name)).await;

        let peers = if self.topology.is_leaf(&switch) {
            self.topology.other_leaves(&switch)
        } else {
            self.topology.spine_list.without(&switch)
        };
        match peers.last() {
            Some(peer) => {
                let cmd = format!("vtysh -c 'sh ip route {}'", loopback_ip(peer));
                match session.exec(&cmd).await {
                    Some(routes) => {
                        for uplink in &uplinks {
                            if !routes.contains(uplink.as_str()) {
                                session.fail(format!(
                                    "On switch {switch} output of command {cmd} did not show correct routes"
                                ));
                            }
                        }
                    }
                    None => session.fail_inline(format!(
                        "On switch {switch} result cannot be verified since output of command {cmd} is None"
                    )),
                }
            }
            None => session.fail(format!("On switch {switch} no peer switch is available to check routes")),
        }

        session.exec(GOES_STATUS_CMD).await;
    }
}

#[cfg(test)]
#[path = "load_balancing_tests.rs"]
mod tests;
