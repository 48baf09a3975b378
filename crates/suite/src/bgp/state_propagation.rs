// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{loopback_ip, CsvList, LogMode};

use crate::checks::{add_loopback, restart_routing, set_interfaces, GOES_STATUS_CMD};
use crate::session::Session;
use crate::suppress::SuppressPolicy;
use crate::verifier::Verifier;

const ROUTE_CMD: &str = "vtysh -c 'sh ip route'";

/// One switch withdraws its loopback route by downing its links; every other
/// switch must see the route go away and come back.
#[derive(Debug, Clone, Deserialize)]
pub struct StatePropagation {
    #[serde(default)]
    pub propagate_switch: String,
    #[serde(default)]
    pub eth_list: CsvList,
    #[serde(default = "super::default_package")]
    pub package_name: String,
}

impl StatePropagation {
    async fn check_route<R: CommandRunner>(&self, session: &mut Session<R>, expect_present: bool) {
        let switch = session.switch_name().to_string();
        let cmd = ROUTE_CMD;
        let Some(out) = session.exec(cmd).await else {
            session.fail_inline(format!(
                "On switch {switch} bgp routes cannot be verified because output of command {cmd} is None"
            ));
            return;
        };
        let route = format!("B>* {}", loopback_ip(&self.propagate_switch));
        match (expect_present, out.contains(&route)) {
            (true, false) => session.fail(format!(
                "On Switch {switch} bgp route {route} is not present in the output of command {cmd}"
            )),
            (false, true) => session.fail(format!(
                "On Switch {switch} bgp route {route} is present in the output of command {cmd} even after shutting down this route"
            )),
            _ => {}
        }
    }
}

#[async_trait]
impl Verifier for StatePropagation {
    const NAME: &'static str = "bgp-state-propagation";
    const SUMMARY: &'static str = "BGP route withdrawal and re-advertisement propagate to peers";

    fn log_mode(&self) -> LogMode {
        LogMode::Append
    }

    fn suppress_policy(&self) -> SuppressPolicy {
        SuppressPolicy::none().skip_containing("dummy").skip_containing("restart")
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let propagating = session.switch_name() == self.propagate_switch;
        let eths = || self.eth_list.iter().map(String::as_str);

        if propagating {
            add_loopback(session).await;
        }
        restart_routing(session, &self.package_name).await;

        if propagating {
            set_interfaces(session, eths(), "down").await;
        } else {
            self.check_route(session, true).await;
        }
        session.wait_secs(200).await;

        if propagating {
            set_interfaces(session, eths(), "up").await;
        } else {
            self.check_route(session, false).await;
        }
        session.wait_secs(60).await;

        if !propagating {
            self.check_route(session, true).await;
        }
        session.exec(GOES_STATUS_CMD).await;
    }
}

#[cfg(test)]
#[path = "state_propagation_tests.rs"]
mod tests;
