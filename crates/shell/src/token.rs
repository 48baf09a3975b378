// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token type produced by the command-line lexer.

use std::fmt;

use crate::span::Span;

/// One argv word with the quotes and escapes already removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    /// Covers the raw text of the word, quotes included.
    pub span: Span,
}

impl Token {
    pub fn new(word: impl Into<String>, span: Span) -> Self {
        Self { word: word.into(), span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
