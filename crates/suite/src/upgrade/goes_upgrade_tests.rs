// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::json;
use swt_adapters::FakeRunner;

use super::*;
use crate::test_helpers::{params, recorded, run};

const STATUS_OK: &str = "Check daemons - OK\nCheck Redis - OK\nCheck vnet - OK";

#[yare::parameterized(
    plain = { "Coreboot\n  Version: 4.8-platina-0.9\n", Some("4.8-platina-0.9") },
    lowercase = { "version: v2", Some("v2") },
    absent = { "no coreboot", None },
)]
fn version_line(out: &str, expected: Option<&str>) {
    assert_eq!(coreboot_version(out), expected);
}

#[tokio::test]
async fn installer_runs_between_status_checks() {
    let runner = FakeRunner::new();
    runner
        .respond("goes status", STATUS_OK)
        .respond_seq("goes upgrade -r", [Some("Version: 1.0"), Some("Version: 1.1")])
        .respond("goes-installer", "installed");
    let verifier: GoesUpgrade = params(json!({ "installer_dir": "/root/", "installer_name": "goes-installer" }));

    let session = run(&verifier, &runner, "invader29").await;

    assert!(session.verdict().passed());
    assert_eq!(
        recorded(&session),
        vec!["goes status", "goes upgrade -r", "/root/./goes-installer", "goes status", "goes upgrade -r"]
    );
    assert_eq!(session.verdict().narrative(), "On switch invader29, upgraded core boot version from 1.0 to 1.1");
}

#[tokio::test]
async fn coreboot_flashes_bios_and_reports_failure() {
    let runner = FakeRunner::new();
    runner.respond("goes status", STATUS_OK).respond("flashrom", "Error: exit status 1");
    let verifier: GoesUpgrade =
        params(json!({ "installer_dir": "/root/", "installer_name": "coreboot.rom", "coreboot": true }));

    let session = run(&verifier, &runner, "invader29").await;

    assert!(!session.verdict().passed());
    assert!(recorded(&session).contains(&format!("{FLASHROM} -w /root/./coreboot.rom -A -V")));
    assert_eq!(
        session.verdict().narrative(),
        "On switch invader29 goes upgrade failed\nOn switch invader29, upgraded core boot version from None to None"
    );
}
