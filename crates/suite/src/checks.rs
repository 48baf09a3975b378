// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command sequences and assertions shared by several verifiers.

use swt_adapters::CommandRunner;
use swt_core::{config_lines, loopback_ip};

use crate::session::Session;

pub(crate) const BGP_NEIGHBORS_CMD: &str = "vtysh -c 'sh ip bgp neighbors'";
pub(crate) const RUNNING_CONFIG_CMD: &str = "vtysh -c 'sh running-config'";
pub(crate) const GOES_STATUS_CMD: &str = "goes status";

/// Show the running config, restart the routing daemon and show its status.
pub(crate) async fn restart_routing<R: CommandRunner>(session: &mut Session<R>, package: &str) {
    session.exec(RUNNING_CONFIG_CMD).await;
    session.exec(&format!("service {package} restart")).await;
    session.exec(&format!("service {package} status")).await;
}

/// Create `dummy0` and give it the switch's `/32` loopback address.
pub(crate) async fn add_loopback<R: CommandRunner>(session: &mut Session<R>) {
    let ip = loopback_ip(session.switch_name());
    session.exec("ip link add dummy0 type dummy").await;
    session.exec(&format!("ifconfig dummy0 {ip} netmask 255.255.255.255")).await;
}

pub(crate) async fn set_interfaces<R: CommandRunner>(
    session: &mut Session<R>,
    eths: impl IntoIterator<Item = &str>,
    state: &str,
) {
    for eth in eths {
        session.exec(&format!("ifconfig eth-{eth}-1 {state}")).await;
    }
}

/// Every `neighbor <ip> remote-as <as>` line of the config must show up in
/// the neighbor table, and exactly that many sessions must be Established.
pub(crate) async fn check_bgp_neighbors<R: CommandRunner>(session: &mut Session<R>, config_file: &str) {
    let switch = session.switch_name().to_string();
    let cmd = BGP_NEIGHBORS_CMD;
    let Some(out) = session.exec(cmd).await else {
        session.fail_inline(format!(
            "On switch {switch} bgp neighbor relationship cannot be verified because output of command {cmd} is None"
        ));
        return;
    };

    let mut neighbor_count = 0;
    for line in config_lines(config_file) {
        if !(line.contains("neighbor") && line.contains("remote-as")) {
            continue;
        }
        neighbor_count += 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        let neighbor_ip = fields.get(1).copied().unwrap_or_default();
        let remote_as = fields.get(3).copied().unwrap_or_default();
        if !out.contains(neighbor_ip) || !out.contains(remote_as) {
            session.fail(format!(
                "On switch {switch} bgp neighbor {neighbor_ip} is not present in the output of command {cmd}"
            ));
        }
    }

    if out.matches("BGP state = Established").count() != neighbor_count {
        session.fail(format!(
            "On switch {switch} bgp state of all/some neighbors are not Established in the output of command {cmd}"
        ));
    }
}

/// Record `goes status` and require the daemons, redis and vnet checks to
/// be present and none of them `not ok`.
pub(crate) async fn goes_status_ok<R: CommandRunner>(session: &mut Session<R>) -> bool {
    let out = session.exec(GOES_STATUS_CMD).await.unwrap_or_default().to_lowercase();
    !out.contains("not ok")
        && ["check daemons", "check redis", "check vnet"].iter().all(|c| out.contains(c))
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
