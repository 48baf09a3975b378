// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use swt_adapters::FakeRunner;

use super::*;
use crate::test_helpers::{recorded, run};

fn routes(n: usize) -> String {
    (0..n).map(|i| format!("10.{}.{}.0/24 via 10.0.1.32", i / 256, i % 256)).collect::<Vec<_>>().join("\n")
}

async fn passes_with(kernel: usize, fib: usize) -> bool {
    let runner = FakeRunner::new();
    runner.respond("ip route show", &routes(kernel)).respond("show ip fib", &routes(fib));

    let session = run(&FibRoutes::default(), &runner, "invader29").await;

    assert_eq!(recorded(&session), vec!["ip route show", "goes vnet show ip fib"]);
    session.verdict().passed()
}

#[tokio::test]
async fn full_tables_pass() {
    assert!(passes_with(1550, 1600).await);
}

#[tokio::test]
async fn short_kernel_table_fails() {
    assert!(!passes_with(1549, 1600).await);
}

#[tokio::test]
async fn short_fib_fails() {
    assert!(!passes_with(1600, 10).await);
}

#[tokio::test]
async fn missing_output_counts_as_no_routes() {
    let runner = FakeRunner::new();

    let session = run(&FibRoutes::default(), &runner, "invader29").await;

    assert_eq!(session.verdict().narrative(), "On switch invader29 there are less than 1550 routes available");
}
