// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote handling (single and double quoted fragments).
//!
//! Both functions append the unquoted content to `word` and return the byte
//! offset just past the closing quote.

use super::{Lexer, LexerError};
use crate::span::Span;

impl Lexer<'_> {
    pub(super) fn lex_single_quote(
        &mut self,
        start: usize,
        word: &mut String,
    ) -> Result<usize, LexerError> {
        self.chars.next();
        let mut last_pos = start + 1;
        while let Some((pos, ch)) = self.chars.next() {
            if ch == '\'' {
                return Ok(pos + 1);
            }
            word.push(ch);
            last_pos = pos + ch.len_utf8();
        }
        Err(LexerError::UnterminatedSingleQuote { span: Span::new(start, last_pos) })
    }

    /// Backslash only escapes `"` and `\`; before anything else it is kept.
    pub(super) fn lex_double_quote(
        &mut self,
        start: usize,
        word: &mut String,
    ) -> Result<usize, LexerError> {
        self.chars.next();
        let mut last_pos = start + 1;
        while let Some((pos, ch)) = self.chars.next() {
            last_pos = pos + ch.len_utf8();
            match ch {
                '"' => return Ok(pos + 1),
                '\\' => match self.peek_char() {
                    Some(esc @ ('"' | '\\')) => {
                        word.push(esc);
                        self.chars.next();
                        last_pos += 1;
                    }
                    _ => word.push('\\'),
                },
                _ => word.push(ch),
            }
        }
        Err(LexerError::UnterminatedDoubleQuote { span: Span::new(start, last_pos) })
    }
}
