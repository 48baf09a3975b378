// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for command lines.

/// A byte-offset range in the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The spanned text, or `""` when the span does not fit `source`.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Show the command line with carets under the span.
///
/// ```text
/// vtysh -c 'sh ip route
///          ^^^^^^^^^^^^
/// ```
pub fn context_snippet(input: &str, span: Span) -> String {
    let start = span.start.min(input.len());
    let caret_pos = input.get(..start).map(|s| s.chars().count()).unwrap_or(0);
    let caret_len = span.slice(input).chars().count().max(1);
    format!("{}\n{}{}", input, " ".repeat(caret_pos), "^".repeat(caret_len))
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
