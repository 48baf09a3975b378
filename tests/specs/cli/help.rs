//! Help and version output.

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("run").stdout_has("list");
}

#[test]
fn run_help_lists_parameter_flags() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--params")
        .stdout_has("--params-json")
        .stdout_has("--dry-run");
}

#[test]
fn version_shows_package_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn no_subcommand_is_a_usage_error() {
    cli().fails_with(2).stderr_has("Usage:");
}
