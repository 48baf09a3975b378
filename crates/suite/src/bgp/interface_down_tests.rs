// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::json;
use swt_adapters::FakeRunner;

use super::*;
use crate::test_helpers::{lines, params, recorded, run};

const NEIGHBORS: &str = "BGP neighbor is 10.0.1.32, remote AS 65243\nBGP state = Established";

fn verifier(check_ping: bool) -> InterfaceDown {
    params(json!({
        "config_file": "neighbor 10.0.1.32 remote-as 65243",
        "leaf_list": ["invader29", "invader30"],
        "eth_list": "1,3",
        "check_ping": check_ping,
        "package_name": "quagga",
    }))
}

#[tokio::test(start_paused = true)]
async fn leaf_takes_interfaces_down_then_up_and_checks_three_times() {
    let runner = FakeRunner::new();
    runner.respond("sh ip bgp neighbors", NEIGHBORS);
    runner.respond("ping", "3 packets transmitted, 3 received, 0% packet loss");

    let session = run(&verifier(true), &runner, "invader29").await;

    assert!(session.verdict().passed(), "{}", session.verdict().narrative());
    assert_eq!(runner.count("sh ip bgp neighbors"), 3);
    assert_eq!(runner.count("ping -w 3 -c 3 -I 192.168.29.1 192.168.30.1"), 3);
    let cmds = recorded(&session);
    let down = cmds.iter().position(|c| c == "ifconfig eth-1-1 down").unwrap();
    let up = cmds.iter().position(|c| c == "ifconfig eth-3-1 up").unwrap();
    assert!(down < up);
    assert_eq!(cmds.last().map(String::as_str), Some("goes status"));
}

#[tokio::test(start_paused = true)]
async fn spine_only_checks_neighbors() {
    let runner = FakeRunner::new();
    runner.respond("sh ip bgp neighbors", NEIGHBORS);

    let session = run(&verifier(true), &runner, "invader1").await;

    assert!(session.verdict().passed());
    assert_eq!(runner.count("ifconfig eth-"), 0);
    assert_eq!(runner.count("ping"), 0);
}

#[tokio::test(start_paused = true)]
async fn lost_ping_after_interfaces_go_down_fails_once() {
    let runner = FakeRunner::new();
    runner.respond("sh ip bgp neighbors", NEIGHBORS);
    runner.respond_seq("ping", [Some("3 received"), Some("0 received"), Some("3 received")]);

    let session = run(&verifier(true), &runner, "invader29").await;

    assert_eq!(lines(&session), vec!["From switch invader29 neighbor ip 192.168.30.1 is not getting pinged"]);
}
