// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for lexing and spawn failures.

use super::executor;
use crate::exec::ExecError;
use crate::LexerError;

#[tokio::test]
async fn spawn_failed_command_not_found() {
    let err = executor().run("nonexistent_command_xyz_12345 --flag").await.unwrap_err();
    match err {
        ExecError::SpawnFailed { command, source } => {
            assert_eq!(command, "nonexistent_command_xyz_12345");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected SpawnFailed, got: {other:?}"),
    }
}

#[yare::parameterized(
    empty = { "" },
    blank = { "   \t" },
)]
fn empty_command_line(line: &str) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let err = rt.block_on(executor().run(line)).unwrap_err();
    assert!(matches!(err, ExecError::EmptyCommand), "got: {err:?}");
}

#[tokio::test]
async fn lexer_error_is_propagated() {
    let err = executor().run("vtysh -c 'sh ip").await.unwrap_err();
    assert!(matches!(err, ExecError::Lex(LexerError::UnterminatedSingleQuote { .. })));
}
