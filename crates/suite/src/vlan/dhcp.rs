// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{switch_id, LogMode};

use super::{add_vlan, check_vlan_address, isolate_odd_ports, TAG_MARKER};
use crate::checks::GOES_STATUS_CMD;
use crate::session::Session;
use crate::verifier::Verifier;

const DHCP_MARKER: &str = "bootp/dhcp";

/// The leaf serves DHCP on a tagged sub-interface; the client obtains a
/// lease first untagged, then on the VLAN.
#[derive(Debug, Clone, Deserialize)]
pub struct Dhcp {
    #[serde(default)]
    pub leaf_switch: String,
    #[serde(default)]
    pub eth: String,
}

impl Dhcp {
    /// Capture on the server side; `tagged` also requires 802.1Q frames for
    /// the VLAN.
    async fn capture<R: CommandRunner>(&self, session: &mut Session<R>, tagged: bool) {
        let switch = session.switch_name().to_string();
        let eth = &self.eth;
        let cmd = format!("tcpdump -c 7 -G 10 -net -i eth-{eth}-1 not arp and not icmp");
        let Some(out) = session.exec(&cmd).await else {
            session.fail(format!("On switch {switch} failed to capture tcpdump output"));
            return;
        };
        let out = out.to_lowercase();
        let seen = if tagged {
            out.contains(DHCP_MARKER)
                && out.contains(&TAG_MARKER.to_lowercase())
                && out.contains(&format!("vlan {eth}"))
        } else {
            out.contains(DHCP_MARKER)
        };
        if !seen {
            let kind = if tagged { "tagged" } else { "untagged" };
            session.fail(format!(
                "On switch {switch} there are no dhcp packets and {kind} packets captured in tcpdump for eth-{eth}-1"
            ));
        }
    }

    /// Request a lease on `iface` and require an address under `prefix`.
    async fn lease<R: CommandRunner>(&self, session: &mut Session<R>, iface: &str, prefix: &str, secs: u64) {
        let switch = session.switch_name().to_string();
        session.exec(&format!("dhclient {iface}")).await;
        session.wait_secs(secs).await;
        match session.exec(&format!("ifconfig {iface}")).await {
            Some(out) if out.contains(prefix) => {}
            Some(_) => session.fail(format!("On switch {switch} failed to assign an ip from dhcp server for {iface}")),
            None => session.fail(format!("On switch {switch} failed to fetch an ip from dhcp server for {iface}")),
        }
    }
}

#[async_trait]
impl Verifier for Dhcp {
    const NAME: &'static str = "vlan-dhcp";
    const SUMMARY: &'static str = "DHCP leases over untagged and tagged interfaces";

    fn log_mode(&self) -> LogMode {
        LogMode::Append
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        let is_server = switch == self.leaf_switch;
        let eth = self.eth.as_str();

        if is_server {
            isolate_odd_ports(session).await;
        }
        add_vlan(session, eth, 1, eth).await;
        if is_server {
            let address = format!("192.168.50.{}", switch_id(&switch));
            session.exec(&format!("ifconfig eth-{eth}-1.1 {address}/24")).await;
            check_vlan_address(session, &format!("eth-{eth}-1.1"), &address).await;
            session.exec("service isc-dhcp-server restart").await;
        }
        session.wait_secs(5).await;

        if is_server {
            self.capture(session, false).await;
            self.capture(session, true).await;
        } else {
            self.lease(session, &format!("eth-{eth}-1"), "192.168.5", 5).await;
            self.lease(session, &format!("eth-{eth}-1.1"), "192.168.50", 120).await;
        }

        session.exec(GOES_STATUS_CMD).await;
    }
}

#[cfg(test)]
#[path = "dhcp_tests.rs"]
mod tests;
