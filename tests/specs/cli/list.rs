//! `swt list`

use crate::prelude::*;

#[test]
fn text_list_names_verifiers_and_tasks() {
    cli()
        .args(&["list"])
        .passes()
        .stdout_has("bgp-authentication")
        .stdout_has("verify-links")
        .stdout_has("failure-summary")
        .stdout_has("(task)");
}

#[test]
fn json_list_is_an_array_of_modules() {
    let out = cli().args(&["list", "--format", "json"]).passes();

    let modules = out.json();
    let names: Vec<&str> = modules.as_array().unwrap().iter().filter_map(|m| m["name"].as_str()).collect();
    assert!(names.contains(&"ospf-intervals"));
    assert!(names.contains(&"reset-invaders"));
}

#[test]
fn text_and_json_lists_agree() {
    let text = cli().args(&["list"]).passes().stdout;
    let json = cli().args(&["list", "--format", "json"]).passes().json();

    let from_text: Vec<String> =
        text.lines().filter_map(|l| l.split_whitespace().next()).map(str::to_string).collect();
    let from_json: Vec<String> =
        json.as_array().unwrap().iter().filter_map(|m| m["name"].as_str()).map(str::to_string).collect();
    similar_asserts::assert_eq!(from_text, from_json);
}
