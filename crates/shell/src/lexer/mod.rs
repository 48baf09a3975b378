// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer that splits a command line into argv words.

mod quotes;

use crate::span::Span;
use crate::token::Token;

pub use crate::error::LexerError;

/// Split a command line into argv words.
pub fn split(input: &str) -> Result<Vec<String>, LexerError> {
    Ok(Lexer::tokenize(input)?.into_iter().map(|t| t.word).collect())
}

/// Command-line lexer with POSIX word-splitting rules.
///
/// Words are separated by unquoted whitespace. Quoted and unquoted fragments
/// that touch are joined into one word. Characters that a shell would treat
/// as operators (`|`, `>`, `#`, `$`) are ordinary word characters here.
pub struct Lexer<'a> {
    /// Peekable iterator over character indices.
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    input_len: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { chars: input.char_indices().peekable(), input_len: input.len() }
    }

    /// Peek at the next character without consuming it.
    #[inline]
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Tokenize the entire input and return a vector of tokens.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::with_capacity(input.len() / 4 + 1);

        while let Some(token) = lexer.next_token()? {
            tokens.push(token);
        }

        Ok(tokens)
    }

    /// Get the next token, or None if at end of input.
    fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        self.skip_whitespace();

        let Some(&(pos, _)) = self.chars.peek() else {
            return Ok(None);
        };

        self.lex_word(pos).map(Some)
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(Self::is_whitespace) {
            self.chars.next();
        }
    }

    /// Lex one word, joining adjacent quoted and unquoted fragments.
    fn lex_word(&mut self, start: usize) -> Result<Token, LexerError> {
        let mut word = String::new();
        let mut end = start;

        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                _ if Self::is_whitespace(ch) => break,
                '\'' => end = self.lex_single_quote(pos, &mut word)?,
                '"' => end = self.lex_double_quote(pos, &mut word)?,
                '\\' => {
                    self.chars.next();
                    let Some((esc_pos, esc_ch)) = self.chars.next() else {
                        return Err(LexerError::TrailingBackslash {
                            span: Span::new(pos, self.input_len),
                        });
                    };
                    word.push(esc_ch);
                    end = esc_pos + esc_ch.len_utf8();
                }
                _ => {
                    word.push(ch);
                    end = pos + ch.len_utf8();
                    self.chars.next();
                }
            }
        }

        Ok(Token::new(word, Span::new(start, end)))
    }

    #[inline]
    fn is_whitespace(ch: char) -> bool {
        matches!(ch, ' ' | '\t' | '\n' | '\r')
    }
}

#[cfg(test)]
#[path = "../lexer_tests/mod.rs"]
mod tests;
