// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! VLAN sub-interface, tagged-traffic and DHCP-over-VLAN verifiers.

mod configuration;
mod dhcp;
mod transit;

pub use configuration::Configuration;
pub use dhcp::Dhcp;
pub use transit::Transit;

use swt_adapters::CommandRunner;

use crate::session::Session;

pub(crate) const TAG_MARKER: &str = "802.1Q (0x8100)";

/// Take every even-numbered front-panel port down so traffic leaves on the
/// odd ports under test.
pub(crate) async fn isolate_odd_ports<R: CommandRunner>(session: &mut Session<R>) {
    for port in (2..=32).step_by(2) {
        session.exec(&format!("ifconfig eth-{port}-1 down")).await;
    }
}

/// `ip link add` a tagged sub-interface `eth-{eth}-1.{sub}`.
pub(crate) async fn add_vlan<R: CommandRunner>(session: &mut Session<R>, eth: &str, sub: u32, vlan_id: &str) {
    session.exec(&format!("ip link add link eth-{eth}-1 name eth-{eth}-1.{sub} type vlan id {vlan_id}")).await;
}

/// Ask `ifconfig` for the sub-interface and require `address` in it.
/// `None` output is not a failure.
pub(crate) async fn check_vlan_address<R: CommandRunner>(session: &mut Session<R>, iface: &str, address: &str) {
    let switch = session.switch_name().to_string();
    if let Some(out) = session.exec(&format!("ifconfig {iface}")).await {
        if !out.contains(address) {
            session.fail(format!("On switch {switch} failed to configure vlan on interface {iface}"));
        }
    }
}

/// Run a capture on `eth-{eth}-1` and require tagged frames for `vlan_id`.
pub(crate) async fn check_tagged_capture<R: CommandRunner>(
    session: &mut Session<R>,
    cmd: &str,
    eth: &str,
    vlan_id: &str,
) {
    let switch = session.switch_name().to_string();
    match session.exec(cmd).await {
        Some(out) => {
            if !out.contains(TAG_MARKER) || !out.contains(&format!("vlan {vlan_id}")) {
                session.fail(format!(
                    "On switch {switch} there are no vlan tagged packets captured in tcpdump for eth-{eth}-1"
                ));
            }
        }
        None => session.fail(format!("On switch {switch} failed to capture tcpdump output")),
    }
}
