// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::json;
use swt_adapters::FakeRunner;

use super::*;
use crate::test_helpers::{params, run_task};

fn task() -> VerifyLinks {
    params(json!({
        "eth_list": "1,3",
        "leaf_list": ["invader1", "invader2"],
        "spine_list": ["invader31", "invader32"],
        "platina_redis_channel": "platina-mk1",
    }))
}

#[tokio::test]
async fn down_link_is_named_once() {
    let runner = FakeRunner::new();
    runner.respond("eth-1-1.link", "true").respond("eth-3-1.link", "false");

    let report = run_task(&task(), &runner, "invader31").await;

    assert_eq!(report.passed, Some(false));
    assert_eq!(report.msg, "On switch invader31 port link is not up for eth-3-1 interface\n");
    assert!(!report.changed);
    assert_eq!(runner.count("ping"), 0);
}

#[tokio::test]
async fn leaf_with_down_link_skips_pings() {
    let runner = FakeRunner::new();
    runner.respond_none(".link");

    let report = run_task(&task(), &runner, "invader1").await;

    assert_eq!(report.msg.lines().count(), 2);
    assert_eq!(runner.count("ping"), 0);
}

#[tokio::test(start_paused = true)]
async fn first_leaf_pings_both_spines() {
    let runner = FakeRunner::new();
    runner
        .respond(".link", "true")
        .respond("10.0.5.31", "3 packets transmitted, 0 received, 100% packet loss")
        .respond("ping", "3 packets transmitted, 3 received, 0% packet loss");

    let report = run_task(&task(), &runner, "invader1").await;

    assert_eq!(report.passed, Some(false));
    assert_eq!(
        report.msg,
        "On switch invader1 unable to ping interface ip 10.0.5.31\n\
         Ping Out:\n\
         3 packets transmitted, 0 received, 100% packet loss\n"
    );
    let cmds = runner.commands();
    assert_eq!(runner.count("ping -c 3"), 16);
    assert!(cmds.contains(&"ping -c 3 10.0.1.31".to_string()));
    assert!(cmds.contains(&"ping -c 3 10.0.31.32".to_string()));
}

#[tokio::test(start_paused = true)]
async fn other_leaves_swap_spine_octets() {
    let runner = FakeRunner::new();
    runner.respond(".link", "true").respond("ping", "0% packet loss");

    let report = run_task(&task(), &runner, "invader2").await;

    assert_eq!(report.passed, Some(true));
    assert_eq!(report.msg, "Links b/w invaders are UP\n");
    let cmds = runner.commands();
    assert!(cmds.contains(&"ping -c 3 10.0.15.32".to_string()));
    assert!(cmds.contains(&"ping -c 3 10.0.17.31".to_string()));
}

#[tokio::test]
async fn spine_only_checks_links() {
    let runner = FakeRunner::new();
    runner.respond(".link", "true");

    let report = run_task(&task(), &runner, "invader32").await;

    assert_eq!(
        runner.commands(),
        vec!["goes hget platina-mk1 vnet.eth-1-1.link", "goes hget platina-mk1 vnet.eth-3-1.link"]
    );
    assert_eq!(report.msg, "Links b/w invaders are UP\n");
}
