// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[derive(Debug, Deserialize)]
struct Holder {
    list: CsvList,
}

#[yare::parameterized(
    csv = { r#"{"list": "1,3,5"}"#, &["1", "3", "5"] },
    csv_with_spaces = { r#"{"list": " 1, 3 ,"}"#, &["1", "3"] },
    empty_string = { r#"{"list": ""}"#, &[] },
    array = { r#"{"list": ["invader1", "invader2"]}"#, &["invader1", "invader2"] },
    numeric_array = { r#"{"list": [1, "3", 17]}"#, &["1", "3", "17"] },
)]
fn csv_list_accepts_both_forms(json: &str, expected: &[&str]) {
    let holder: Holder = serde_json::from_str(json).unwrap();
    assert_eq!(holder.list, CsvList::new(expected.iter().copied()));
}

#[yare::parameterized(
    two_digit = { "invader29", "29" },
    short = { "x", "x" },
    empty = { "", "" },
    unicode = { "swé1", "é1" },
)]
fn switch_id_is_last_two_chars(name: &str, expected: &str) {
    assert_eq!(switch_id(name), expected);
}

#[test]
fn loopback_uses_switch_id() {
    assert_eq!(loopback_ip("invader31"), "192.168.31.1");
}

#[test]
fn list_lookup_helpers() {
    let list = CsvList::parse("invader1,invader2,invader3");
    assert_eq!(list.position("invader2"), Some(1));
    assert_eq!(list.without("invader2"), vec!["invader1", "invader3"]);
    assert!(!list.contains("invader9"));
}

#[test]
fn role_value_prefers_spine_position() {
    let topology = Topology {
        leaf_list: CsvList::parse("leaf1,leaf2"),
        spine_list: CsvList::parse("spine1,spine2"),
    };
    let spine = CsvList::parse("1,2");
    let leaf = CsvList::parse("3,4");
    assert_eq!(topology.role_value("spine2", &spine, &leaf), Some("2"));
    assert_eq!(topology.role_value("leaf1", &spine, &leaf), Some("3"));
    assert_eq!(topology.role_value("other", &spine, &leaf), None);
    assert!(topology.is_leaf("leaf2"));
    assert!(topology.is_spine("spine1"));
    assert_eq!(topology.leaf_index("leaf2"), Some(1));
    assert_eq!(topology.spine_index("leaf2"), None);
    assert_eq!(topology.other_leaves("leaf1"), vec!["leaf2"]);
}

#[yare::parameterized(
    single = { false, false, &["1"] },
    quad = { true, false, &["1", "2", "3", "4"] },
    two_lane = { true, true, &["1", "3"] },
    lane_flag_ignored_without_subports = { false, true, &["1"] },
)]
fn subports(is_subports: bool, lane2: bool, expected: &[&str]) {
    assert_eq!(Subports::from_flags(is_subports, lane2).ports(), expected);
}

#[test]
fn config_lines_skip_blanks_and_trim() {
    let text = "router bgp 65200\n\n  neighbor 10.0.1.32 remote-as 65243  \n";
    let lines: Vec<&str> = config_lines(text).collect();
    assert_eq!(lines, vec!["router bgp 65200", "neighbor 10.0.1.32 remote-as 65243"]);
}

#[derive(Debug, Deserialize)]
struct Timer {
    #[serde(deserialize_with = "lenient_u64")]
    secs: u64,
}

#[yare::parameterized(
    number = { r#"{"secs": 10}"#, 10 },
    text = { r#"{"secs": "40"}"#, 40 },
    padded_text = { r#"{"secs": " 7 "}"#, 7 },
)]
fn lenient_numbers(json: &str, expected: u64) {
    let timer: Timer = serde_json::from_str(json).unwrap();
    assert_eq!(timer.secs, expected);
}

#[test]
fn lenient_number_rejects_garbage() {
    assert!(serde_json::from_str::<Timer>(r#"{"secs": "ten"}"#).is_err());
}
