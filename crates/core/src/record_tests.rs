// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use proptest::prelude::*;

use super::*;

#[yare::parameterized(
    with_timestamp = { "invader29", Some("2026101812:00:01"), "goes status", "invader29 2026101812:00:01 goes status" },
    without_timestamp = { "invader29", None, "goes status", "invader29 None goes status" },
    quoted_command = { "inv1", Some("t"), "vtysh -c 'sh ip route'", "inv1 t vtysh -c 'sh ip route'" },
)]
fn key_format(switch: &str, ts: Option<&str>, cmd: &str, expected: &str) {
    assert_eq!(record_key(switch, ts, cmd), expected);
}

#[test]
fn serializes_in_insertion_order_with_null_for_absent() {
    let mut log = ExecutionLog::new();
    log.push("zeta", Some("1".to_string()));
    log.push("alpha", None);
    log.push(RESULT_STATUS_KEY, Some("Passed".to_string()));

    let json = serde_json::to_string(&log).unwrap();
    assert_eq!(json, r#"{"zeta":"1","alpha":null,"result.status":"Passed"}"#);
}

#[test]
fn duplicate_keys_are_kept_and_get_returns_latest() {
    let mut log = ExecutionLog::new();
    log.push("k", Some("first".to_string()));
    log.push("k", Some("second".to_string()));

    assert_eq!(log.len(), 2);
    assert_eq!(log.get("k").and_then(|r| r.value.as_deref()), Some("second"));
    assert_eq!(log.get("missing"), None);
}

proptest! {
    #[test]
    fn iteration_preserves_push_order(keys in prop::collection::vec("[a-z]{1,6}", 0..20)) {
        let mut log = ExecutionLog::new();
        for key in &keys {
            log.push(key.clone(), None);
        }
        let seen: Vec<&str> = log.keys().collect();
        let expected: Vec<&str> = keys.iter().map(String::as_str).collect();
        prop_assert_eq!(seen, expected);
    }
}
