// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error types.

use crate::LexerError;

/// Errors that prevent a command line from producing any output.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The command line could not be split into words.
    #[error(transparent)]
    Lex(#[from] LexerError),

    /// The command line contained no words.
    #[error("empty command line")]
    EmptyCommand,

    /// Command not found or could not be spawned.
    #[error("failed to spawn `{command}`: {source}")]
    SpawnFailed { command: String, source: std::io::Error },
}
