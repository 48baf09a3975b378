// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::json;
use swt_adapters::FakeRunner;

use super::*;
use crate::test_helpers::{lines, params, recorded, run};

const CONFIG: &str = "router ospf\n network 192.168.29.1/32 area 0.0.0.0\n network 10.0.3.0/24 area 0.0.0.0\n network 10.0.19.0/24 area 0.0.0.0";

fn verifier() -> LoadBalancing {
    params(json!({
        "config_file": CONFIG,
        "leaf_list": ["invader29", "invader30"],
        "spine_list": ["invader31", "invader32"],
    }))
}

#[tokio::test(start_paused = true)]
async fn uplinks_are_addressed_and_routes_checked_on_peer_loopback() {
    let runner = FakeRunner::new();
    runner.respond("sh ip route", "O>* 192.168.30.1/32 via 10.0.3.30, eth-3-1\n  * via 10.0.19.30, eth-19-1");

    let session = run(&verifier(), &runner, "invader29").await;

    assert!(session.verdict().passed(), "{}", session.verdict().narrative());
    let cmds = recorded(&session);
    assert!(cmds.contains(&"ifconfig eth-3-1 10.0.3.29 netmask 255.255.255.0".to_string()));
    assert!(cmds.contains(&"ifconfig eth-19-1 10.0.19.29 netmask 255.255.255.0".to_string()));
    assert!(cmds.contains(&"vtysh -c 'sh ip route 192.168.30.1'".to_string()));
    assert_eq!(runner.count("dummy0"), 0);
    assert_eq!(runner.count("service quagga restart"), 1);
}

#[tokio::test(start_paused = true)]
async fn missing_uplink_fails_per_route() {
    let runner = FakeRunner::new();
    runner.respond("sh ip route", "O>* 192.168.32.1/32 via 10.0.3.32, eth-3-1\n  * via 10.0.29.32, eth-29-1");

    let session = run(&verifier(), &runner, "invader31").await;

    assert_eq!(
        lines(&session),
        vec!["On switch invader31 output of command vtysh -c 'sh ip route 192.168.32.1' did not show correct routes"]
    );
}

#[tokio::test(start_paused = true)]
async fn switch_without_peer_fails() {
    let runner = FakeRunner::new();
    let verifier: LoadBalancing = params(json!({ "config_file": CONFIG, "leaf_list": "invader29" }));

    let session = run(&verifier, &runner, "invader29").await;

    assert!(!session.verdict().passed());
    assert_eq!(runner.count("sh ip route"), 0);
}
