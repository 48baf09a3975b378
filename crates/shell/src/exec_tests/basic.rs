// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for stream capture and argument passing.

use super::executor;

#[tokio::test]
async fn stdout_is_captured_and_trimmed() {
    let output = executor().run("echo hello").await.unwrap();
    assert_eq!(output.program, "echo");
    assert_eq!(output.args, vec!["hello"]);
    assert_eq!(output.exit_code, 0);
    assert_eq!(output.stdout, "hello\n");
    assert_eq!(output.captured().as_deref(), Some("hello"));
}

#[tokio::test]
async fn quoted_argument_reaches_process_as_one_word() {
    let output = executor().run("printf '%s|' 'a b' c").await.unwrap();
    assert_eq!(output.captured().as_deref(), Some("a b|c|"));
}

#[tokio::test]
async fn stderr_is_used_when_stdout_is_empty() {
    let output = executor().run("sh -c 'echo oops >&2; exit 3'").await.unwrap();
    assert_eq!(output.exit_code, 3);
    assert_eq!(output.captured().as_deref(), Some("oops"));
}

#[tokio::test]
async fn silent_failure_is_indistinguishable_from_silent_success() {
    let failed = executor().run("false").await.unwrap();
    let succeeded = executor().run("true").await.unwrap();
    assert_ne!(failed.exit_code, succeeded.exit_code);
    assert_eq!(failed.captured(), None);
    assert_eq!(succeeded.captured(), None);
}

#[tokio::test]
async fn metacharacters_are_passed_literally() {
    let output = executor().run("echo a | b > c").await.unwrap();
    assert_eq!(output.captured().as_deref(), Some("a | b > c"));
}

#[yare::parameterized(
    bare = { "~", "" },
    script = { "~/./docker_move.sh", "/./docker_move.sh" },
)]
fn home_prefix_is_expanded(word: &str, suffix: &str) {
    let Ok(home) = std::env::var("HOME") else { return };
    if home.is_empty() {
        return;
    }
    assert_eq!(crate::exec::run::expand_home(word.to_string()), format!("{home}{suffix}"));
}

#[yare::parameterized(
    other_user = { "~root/bin" },
    inner = { "a~/b" },
    plain = { "goes" },
)]
fn other_words_are_untouched(word: &str) {
    assert_eq!(crate::exec::run::expand_home(word.to_string()), word);
}
