// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! swt-shell: command-line splitting and subprocess execution for switch tests.
//!
//! Command lines are split the way a POSIX shell would split words, but nothing
//! is interpreted: no expansion, no pipes, no redirection. The resulting argv
//! is spawned directly.

mod error;
pub mod exec;
mod lexer;
mod span;
mod text;
mod token;

pub use error::LexerError;
pub use exec::{CommandOutput, ExecError, Executor};
pub use lexer::{split, Lexer};
pub use span::{context_snippet, Span};
pub use text::{truncate_utf8, STORED_OUTPUT_LIMIT};
pub use token::Token;
