// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serial_test::serial;
use swt_core::TaskReport;

use super::*;

const MODULES: [ModuleInfo; 2] = [
    ModuleInfo { name: "fib-routes", summary: "FIB holds enough routes", recorded: true },
    ModuleInfo { name: "static-routes", summary: "Add static routes", recorded: false },
];

#[test]
#[serial]
fn text_list_pads_names_and_marks_tasks() {
    std::env::set_var("NO_COLOR", "1");

    let text = format_module_list(&MODULES, OutputFormat::Text).unwrap();

    assert_eq!(text, "fib-routes     FIB holds enough routes\nstatic-routes  Add static routes (task)\n");
}

#[test]
fn json_list_has_every_field() {
    let text = format_module_list(&MODULES, OutputFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value[1]["name"], "static-routes");
    assert_eq!(value[1]["recorded"], false);
    assert_eq!(value[0]["summary"], "FIB holds enough routes");
}

#[test]
fn empty_list_prints_nothing() {
    assert_eq!(format_module_list(&[], OutputFormat::Text).unwrap(), "");
}

#[test]
fn task_outcome_is_flat_json() {
    let outcome = RunOutcome::Task(TaskReport::msg("Reset all invaders"));

    let value: serde_json::Value = serde_json::from_str(&format_outcome(&outcome).unwrap()).unwrap();

    assert_eq!(value, serde_json::json!({ "msg": "Reset all invaders", "changed": true }));
}
