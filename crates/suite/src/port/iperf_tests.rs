// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::json;
use swt_adapters::FakeRunner;

use super::*;
use crate::test_helpers::{lines, params, recorded, run};

const IPERF_OK: &str = "[  3]  0.0- 2.0 sec  2.19 GBytes  9.40 Gbits/sec";

fn verifier() -> IperfTraffic {
    params(json!({ "eth_list": "1,5", "eth_ips_last_octet": "31,32" }))
}

#[yare::parameterized(
    zero = { "vnet.eth-1-1.port-rx-crc-error-packets: 0", false },
    ten = { "vnet.eth-1-1.port-rx-crc-error-packets: 10", true },
    other_port = { "vnet.eth-1-2.port-rx-crc-error-packets: 7", false },
    unparsable = { "vnet.eth-1-1.port-rx-crc-error-packets: n/a", false },
)]
fn crc_counter(dump: &str, expected: bool) {
    assert_eq!(has_crc_errors(dump, "1", "1"), expected);
}

#[tokio::test]
async fn iperf_to_each_peer_is_recorded() {
    let runner = FakeRunner::new();
    runner.respond("iperf", IPERF_OK).respond("goes hget platina-mk1 eth-", "vnet.eth-1-1.port-rx-crc-error-packets: 0");

    let session = run(&verifier(), &runner, "invader29").await;

    assert!(session.verdict().passed(), "{}", session.verdict().narrative());
    assert_eq!(
        recorded(&session),
        vec!["iperf -c 10.1.1.31 -t 2 -P 1", "iperf -c 10.5.1.32 -t 2 -P 1", "goes status"]
    );
    assert_eq!(runner.count("goes hget platina-mk1 eth-"), 2);
}

#[tokio::test]
async fn failed_iperf_and_crc_errors_are_reported() {
    let runner = FakeRunner::new();
    runner
        .respond("10.1.1.31", "connect failed: Connection refused")
        .respond("iperf", IPERF_OK)
        .respond("eth-5-1", "vnet.eth-5-1.port-rx-crc-error-packets: 3");

    let session = run(&verifier(), &runner, "invader29").await;

    assert_eq!(
        lines(&session),
        vec![
            "On switch invader29 iperf traffic cannot be verified for eth-1-1 using command iperf -c 10.1.1.31 -t 2 -P 1",
            "On switch invader29 crc error count is not 0 for interface eth-5-1 ",
        ]
    );
}
