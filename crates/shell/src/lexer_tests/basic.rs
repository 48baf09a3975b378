// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unquoted words, whitespace handling, and spans.

use crate::lexer::{split, Lexer};

split_tests! {
    empty_input: "" => [],
    only_whitespace: " \t \n" => [],
    single_word: "ip" => ["ip"],
    two_words: "goes status" => ["goes", "status"],
    collapses_runs_of_spaces: "ping   -c  3   10.0.1.31" => ["ping", "-c", "3", "10.0.1.31"],
    tabs_and_newlines_split: "ip\tlink\nshow" => ["ip", "link", "show"],
    leading_and_trailing_space: "  goes status  " => ["goes", "status"],
    date_format_kept: "date +%Y%m%d%T" => ["date", "+%Y%m%d%T"],
    redirect_is_a_word: "ip link add dummy1 type dummy 2> /dev/null" => [
        "ip", "link", "add", "dummy1", "type", "dummy", "2>", "/dev/null",
    ],
    pipe_is_a_word: "a | b" => ["a", "|", "b"],
    hash_is_a_word: "echo #x" => ["echo", "#x"],
    dollar_is_literal: "echo $HOME" => ["echo", "$HOME"],
    backslash_escapes_space: r"touch a\ b" => ["touch", "a b"],
    backslash_escapes_backslash: r"echo a\\b" => ["echo", r"a\b"],
    backslash_escapes_quote: r"echo \'x" => ["echo", "'x"],
    tilde_not_expanded: "~/./docker_move.sh up" => ["~/./docker_move.sh", "up"],
    unicode_word: "echo héllo" => ["echo", "héllo"],
}

span_tests! {
    span_single_word: "goes" => [(0, 4)],
    span_two_words: "goes status" => [(0, 4), (5, 11)],
    span_with_leading_space: "  ip" => [(2, 4)],
    span_escaped: r"a\ b c" => [(0, 4), (5, 6)],
    span_unicode: "é x" => [(0, 2), (3, 4)],
}
