// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::json;
use swt_adapters::FakeRunner;

use super::*;
use crate::test_helpers::{lines, params, recorded, run};

fn verifier() -> Dhcp {
    params(json!({ "leaf_switch": "invader29", "eth": "5" }))
}

#[tokio::test(start_paused = true)]
async fn server_sees_untagged_then_tagged_dhcp() {
    let runner = FakeRunner::new();
    runner.respond("ifconfig eth-5-1.1", "inet 192.168.50.29");
    runner.respond_seq(
        "tcpdump",
        [Some("IP 0.0.0.0.68 > 255.255.255.255.67: BOOTP/DHCP, Request"), Some("802.1Q (0x8100), vlan 5, BOOTP/DHCP")],
    );

    let session = run(&verifier(), &runner, "invader29").await;

    assert!(session.verdict().passed(), "{}", session.verdict().narrative());
    assert_eq!(runner.count("tcpdump"), 2);
    assert!(recorded(&session).contains(&"service isc-dhcp-server restart".to_string()));
}

#[tokio::test(start_paused = true)]
async fn server_without_tagged_capture_fails() {
    let runner = FakeRunner::new();
    runner.respond("tcpdump", "BOOTP/DHCP, Request");

    let session = run(&verifier(), &runner, "invader29").await;

    assert_eq!(
        lines(&session),
        vec!["On switch invader29 there are no dhcp packets and tagged packets captured in tcpdump for eth-5-1"]
    );
}

#[tokio::test(start_paused = true)]
async fn client_gets_both_leases() {
    let runner = FakeRunner::new();
    runner.respond("ifconfig eth-5-1.1", "inet 192.168.50.100").respond("ifconfig eth-5-1", "inet 192.168.5.100");

    let session = run(&verifier(), &runner, "invader30").await;

    assert!(session.verdict().passed(), "{}", session.verdict().narrative());
    let cmds = recorded(&session);
    assert_eq!(cmds[0], "ip link add link eth-5-1 name eth-5-1.1 type vlan id 5");
    assert!(cmds.contains(&"dhclient eth-5-1.1".to_string()));
    assert_eq!(runner.count("isc-dhcp-server"), 0);
}

#[tokio::test(start_paused = true)]
async fn client_without_lease_fails() {
    let runner = FakeRunner::new();
    runner.respond("ifconfig eth-5-1", "inet 169.254.3.3");

    let session = run(&verifier(), &runner, "invader30").await;

    assert_eq!(
        lines(&session),
        vec![
            "On switch invader30 failed to assign an ip from dhcp server for eth-5-1",
            "On switch invader30 failed to assign an ip from dhcp server for eth-5-1.1",
        ]
    );
}
