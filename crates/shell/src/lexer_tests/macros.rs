// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test macros for lexer tests.

/// Generate splitting success tests.
///
/// ```ignore
/// split_tests! {
///     two_words: "goes status" => ["goes", "status"],
/// }
/// ```
macro_rules! split_tests {
    ($($name:ident: $input:expr => [$($word:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let words = split($input).expect(concat!("failed to split: ", $input));
                let expected: Vec<String> = vec![$($word.to_string()),*];
                assert_eq!(words, expected, "input: {:?}", $input);
            }
        )*
    };
}

/// Generate splitting error tests.
///
/// ```ignore
/// split_error_tests! {
///     unterminated_sq: "'" => LexerError::UnterminatedSingleQuote { .. },
/// }
/// ```
macro_rules! split_error_tests {
    ($($name:ident: $input:expr => $error:pat),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let result = Lexer::tokenize($input);
                assert!(
                    matches!(result, Err($error)),
                    "expected error {:?} for input {:?}, got {:?}",
                    stringify!($error), $input, result
                );
            }
        )*
    };
}

/// Generate span accuracy tests.
///
/// ```ignore
/// span_tests! {
///     two_words: "goes status" => [(0, 4), (5, 11)],
/// }
/// ```
macro_rules! span_tests {
    ($($name:ident: $input:expr => [$(($start:expr, $end:expr)),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let tokens = Lexer::tokenize($input).expect(concat!("failed to tokenize: ", $input));
                let expected: Vec<(usize, usize)> = vec![$(($start, $end)),*];
                let actual: Vec<_> = tokens.iter().map(|t| (t.span.start, t.span.end)).collect();
                assert_eq!(actual, expected, "input: {:?}", $input);
            }
        )*
    };
}
