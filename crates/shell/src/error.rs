// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the command-line lexer.

use crate::span::{context_snippet, Span};
use thiserror::Error;

/// Errors that can occur while splitting a command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// Unterminated single quote.
    #[error("unterminated single quote at position {}", span.start)]
    UnterminatedSingleQuote {
        /// Source location span for the error.
        span: Span,
    },

    /// Unterminated double quote.
    #[error("unterminated double quote at position {}", span.start)]
    UnterminatedDoubleQuote {
        /// Source location span for the error.
        span: Span,
    },

    /// Backslash at end of input with nothing to escape.
    #[error("trailing backslash at position {}", span.start)]
    TrailingBackslash {
        /// Source location span for the error.
        span: Span,
    },
}

impl LexerError {
    /// Returns the source span associated with this error.
    pub fn span(&self) -> Span {
        match self {
            LexerError::UnterminatedSingleQuote { span }
            | LexerError::UnterminatedDoubleQuote { span }
            | LexerError::TrailingBackslash { span } => *span,
        }
    }

    /// Error message followed by the offending command line with carets.
    pub fn context(&self, input: &str) -> String {
        format!("{}\n{}", self, context_snippet(input, self.span()))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
