// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single quotes, double quotes, and word concatenation.

use crate::lexer::{split, Lexer};

split_tests! {
    single_quote_basic: "vtysh -c 'sh ip bgp neighbors'" => ["vtysh", "-c", "sh ip bgp neighbors"],
    single_quote_empty: "echo ''" => ["echo", ""],
    single_quote_preserves_backslash: r"echo 'a\nb'" => ["echo", r"a\nb"],
    single_quote_preserves_double: r#"echo 'say "hi"'"# => ["echo", r#"say "hi""#],
    single_quote_concat: "cmd'arg'more" => ["cmdargmore"],
    single_quote_escape_idiom: r"echo 'it'\''s'" => ["echo", "it's"],

    double_quote_basic: r#"redis-cli hset h "k 1" "v 2""# => ["redis-cli", "hset", "h", "k 1", "v 2"],
    double_quote_empty: r#"echo """# => ["echo", ""],
    double_quote_escaped_quote: r#"echo "a\"b""# => ["echo", r#"a"b"#],
    double_quote_escaped_backslash: r#"echo "a\\b""# => ["echo", r"a\b"],
    double_quote_keeps_other_escapes: r#"echo "a\nb\$c""# => ["echo", r"a\nb\$c"],
    double_quote_preserves_single: r#"echo "it's""# => ["echo", "it's"],
    mixed_quotes_concat: r#"a"b"'c'd"# => ["abcd"],
}

span_tests! {
    span_single_quoted: "'a b' c" => [(0, 5), (6, 7)],
    span_double_quoted: r#"x "a b""# => [(0, 1), (2, 7)],
    span_concat: r#"a'b'"c""# => [(0, 7)],
}
