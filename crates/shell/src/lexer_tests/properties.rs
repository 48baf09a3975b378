// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property tests for word splitting.

use proptest::prelude::*;

use crate::lexer::split;

fn plain_word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./:+%=-]{1,12}"
}

proptest! {
    #[test]
    fn plain_words_round_trip(words in prop::collection::vec(plain_word(), 0..8)) {
        let line = words.join(" ");
        prop_assert_eq!(split(&line).unwrap(), words);
    }

    #[test]
    fn single_quoting_preserves_any_text(text in "[^']{0,24}") {
        let line = format!("echo '{}'", text);
        prop_assert_eq!(split(&line).unwrap(), vec!["echo".to_string(), text]);
    }

    #[test]
    fn never_panics(line in "\\PC{0,40}") {
        let _ = split(&line);
    }
}
