// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use swt_adapters::FakeRunner;

use super::*;
use crate::suppress::SuppressPolicy;
use crate::test_helpers::lines;

#[yare::parameterized(
    autoneg_on = { "100g", "on", "autoneg" },
    autoneg_off = { "100g", "off", "100g" },
    autoneg_unset = { "25g", "", "25g" },
)]
fn speed_reported_by_vnet(speed: &str, autoneg: &str, expected: &str) {
    assert_eq!(reported_speed(speed, autoneg), expected);
}

#[tokio::test]
async fn checks_run_field_by_field() {
    let runner = FakeRunner::new();
    runner
        .respond(".link", "true")
        .respond("eth-1-3.media", "fiber")
        .respond(".media", "copper")
        .respond(".fec", "cl91")
        .respond(".speed", "100g");
    let mut session = Session::new(runner.clone(), "invader29", SuppressPolicy::none());
    let expect = PortExpectation { channel: "platina", media: "copper", fec: "cl91", speed: "100g" };

    expect.check(&mut session, &["1", "5"], &["1", "3"]).await;

    assert_eq!(lines(&session), vec!["On switch invader29 interface media is not set to copper for the interface eth-1-3"]);
    let cmds = runner.commands();
    assert_eq!(cmds[0], "goes hget platina vnet.eth-1-1.link");
    assert_eq!(cmds[4], "goes hget platina vnet.eth-1-1.media");
    assert_eq!(cmds.len(), 16);
}

#[tokio::test]
async fn missing_output_fails_the_check() {
    let runner = FakeRunner::new();
    let mut session = Session::new(runner, "invader29", SuppressPolicy::none());

    assert!(!output_matches(&mut session, "goes hget platina vnet.eth-1-1.link", |_| true).await);
}
