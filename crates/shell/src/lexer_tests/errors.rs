// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer error cases and their spans.

use crate::lexer::{Lexer, LexerError};
use crate::span::Span;

split_error_tests! {
    unterminated_single: "vtysh -c 'sh ip" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_single_empty: "'" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_double: r#"echo "abc"# => LexerError::UnterminatedDoubleQuote { .. },
    unterminated_double_after_escape: r#"echo "abc\""# => LexerError::UnterminatedDoubleQuote { .. },
    trailing_backslash: r"echo \" => LexerError::TrailingBackslash { .. },
}

#[yare::parameterized(
    single_quote = { "vtysh -c 'sh ip", Span::new(9, 15) },
    double_quote = { r#"x "ab"#, Span::new(2, 5) },
    backslash = { r"ab \", Span::new(3, 4) },
)]
fn error_span(input: &str, expected: Span) {
    let err = Lexer::tokenize(input).unwrap_err();
    assert_eq!(err.span(), expected);
}
