//! `swt run`

use crate::prelude::*;

#[test]
fn dry_run_lists_recorded_keys_without_running() {
    let out = cli()
        .args(&["run", "bgp-authentication", "--dry-run", "--switch-name", "invader29"])
        .args(&["--params-json", r#"{"config_file": "neighbor 10.0.1.31 remote-as 65200"}"#])
        .passes();

    let result = out.json();
    let cmds = result["cmds"].as_array().unwrap();
    assert!(!cmds.is_empty());
    assert!(cmds.iter().all(|c| c.as_str().unwrap().starts_with("invader29 ")));
    assert!(cmds.iter().any(|c| c.as_str().unwrap().ends_with("pause for 35 secs")));
}

#[test]
fn task_dry_run_prints_planned_commands() {
    let params = json!({
        "leaf_list": ["invader1"],
        "leaf_eth_ips_last_octet": "1",
        "platina_redis_channel": "platina-mk1",
    });

    let out = cli()
        .args(&["run", "reset-invaders", "--dry-run", "--switch-name", "invader1"])
        .arg("--params-json")
        .arg(params.to_string())
        .passes();

    let cmds = out.json()["cmds"].clone();
    assert_eq!(cmds[0], "goes stop");
    assert_eq!(cmds.as_array().unwrap().last().unwrap(), "goes start");
}

#[test]
fn toml_params_and_log_dir_flag() {
    let scratch = Scratch::new();
    let params = scratch.file("fib.toml", "hash_name = \"fib_check\"\nswitch_name = \"invader1\"\n");

    let out = cli()
        .args(&["run", "fib-routes", "--params"])
        .arg(&params)
        .arg("--log-dir")
        .arg(scratch.path())
        .passes();

    let result = out.json();
    assert!(result["status"] == "Passed" || result["status"] == "Failed");
    assert_eq!(result["changed"], false);
    let log = scratch.read("fib_check.log");
    assert!(log.starts_with("invader1 "));
    assert!(log.contains("\nresult.status\n"));
}

#[test]
fn failed_verdict_still_exits_zero() {
    let scratch = Scratch::new();

    // A test host has far fewer routes than a switch.
    let out = cli()
        .args(&["run", "fib-routes", "--switch-name", "invader1", "--log-dir"])
        .arg(scratch.path())
        .passes();

    let result = out.json();
    assert_eq!(result["status"], "Failed");
    assert!(result["hash_dict"]["result.detail"].as_str().unwrap().contains("less than 1550 routes"));
    assert!(scratch.read("fib-routes.log").contains("\nresult.status\nFailed\n"));
}

#[test]
fn unknown_module_exits_with_usage_code() {
    cli().args(&["run", "bgp-nonsense"]).fails_with(2).stderr_has("unknown module: bgp-nonsense");
}

#[test]
fn malformed_params_fail() {
    cli()
        .args(&["run", "goes-restart-status", "--params-json", r#"{"restart_count": "many"}"#])
        .fails_with(1)
        .stderr_has("goes-restart-status");
}

#[test]
fn missing_log_dir_fails() {
    cli().args(&["run", "fib-routes", "--switch-name", "invader1"]).fails_with(1).stderr_has("no log directory");
}
