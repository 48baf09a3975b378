// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::json;
use swt_adapters::FakeRunner;

use super::*;
use crate::test_helpers::{lines, params, recorded, run};

fn verifier(remote: bool) -> InvalidInput {
    params(json!({ "switch_ip": "172.17.2.29", "remote_access": remote, "platina_redis_channel": "platina" }))
}

#[tokio::test]
async fn refused_writes_pass() {
    let runner = FakeRunner::new();
    runner.respond("hset platina", "(error) ERROR can't set vnet.ready");

    let session = run(&verifier(false), &runner, "invader29").await;

    assert!(session.verdict().passed(), "{}", session.verdict().narrative());
    assert_eq!(
        recorded(&session),
        vec!["hset platina vnet.ready false", "hset platina vnet.packet-generator.admin false"]
    );
    assert_eq!(runner.count("redis-cli hset platina vnet.ready false"), 1);
}

#[tokio::test]
async fn accepted_write_fails() {
    let runner = FakeRunner::new();
    runner.respond("vnet.ready", "(integer) 0").respond("packet-generator", "ERROR can't set");

    let session = run(&verifier(true), &runner, "invader29").await;

    assert_eq!(
        lines(&session),
        vec!["On switch invader29 command redis-cli -h 172.17.2.29 -p 6379 hset platina vnet.ready false should not have executed"]
    );
}

#[yare::parameterized(
    local = { false, true },
    remote = { true, false },
)]
fn remote_runs_keep_no_log(remote: bool, writes: bool) {
    assert_eq!(verifier(remote).writes_log(), writes);
}
