// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::json;
use swt_adapters::FakeRunner;

use super::*;
use crate::test_helpers::{params, recorded, run};

fn verifier() -> DockerOspf {
    params(json!({
        "container": "R1",
        "config_file": "router ospf\n network 192.168.1.0/24 area 0.0.0.0\n network 10.1.0.0/24 area 0.0.0.0",
    }))
}

#[tokio::test]
async fn commands_run_inside_the_container() {
    let runner = FakeRunner::new();
    runner
        .respond("show ip route ospf", "O>* 192.168.1.0/24\nO   10.1.0.0/24")
        .respond("show ip ospf neighbor", "10.1.0.2 Full/DR");

    let session = run(&verifier(), &runner, "invader29").await;

    assert!(session.verdict().passed(), "{}", session.verdict().narrative());
    assert_eq!(recorded(&session)[0], "docker exec -i R1 vtysh -c 'sh running-config'");
}

#[tokio::test]
async fn missing_route_and_neighbor_error_run_together() {
    let runner = FakeRunner::new();
    runner
        .respond("show ip route ospf", "O>* 192.168.1.0/24")
        .respond("show ip ospf neighbor", "% error: daemon not running");

    let session = run(&verifier(), &runner, "invader29").await;

    assert!(!session.verdict().passed());
    assert_eq!(
        session.verdict().narrative(),
        "On switch invader29 ospf route 10.1.0.0/24 is not showing up in the output of command \
         docker exec -i R1 vtysh -c 'show ip route ospf' On Switch invader29 ospf neighbors cannot \
         be verified since output of command docker exec -i R1 vtysh -c 'show ip ospf neighbor' is None"
    );
}
