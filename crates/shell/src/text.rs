// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte-budget truncation for captured output.

/// Byte budget for command output stored in an execution log.
pub const STORED_OUTPUT_LIMIT: usize = 512;

/// Truncate to at most `limit` bytes without splitting a UTF-8 character.
///
/// Returns the kept prefix and whether anything was dropped.
pub fn truncate_utf8(text: &str, limit: usize) -> (&str, bool) {
    if text.len() <= limit {
        return (text, false);
    }
    let mut end = limit;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    (&text[..end], true)
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
