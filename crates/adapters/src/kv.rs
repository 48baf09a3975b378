// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client for the results key-value store, driven through its CLI.

use crate::runner::CommandRunner;

/// Issues `hset`/`hget` through a key-value CLI such as `redis-cli -p 9090`.
#[derive(Clone)]
pub struct KvClient<R: CommandRunner> {
    runner: R,
    prefix: String,
}

impl<R: CommandRunner> KvClient<R> {
    pub fn new(runner: R, prefix: impl Into<String>) -> Self {
        Self { runner, prefix: prefix.into() }
    }

    /// Client using the prefix from `SWT_KV_CLI`.
    pub fn from_env(runner: R) -> Self {
        Self::new(runner, swt_core::env::kv_cli())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `hset {hash} "{key}" "{value}"`
    pub async fn hset(&self, hash: &str, key: &str, value: &str) -> Option<String> {
        let line = format!("{} hset {} {} {}", self.prefix, hash, quote(key), quote(value));
        tracing::debug!(%hash, %key, "kv hset");
        self.runner.run(&line).await
    }

    /// `--raw hget {hash} {field}`
    pub async fn hget_raw(&self, hash: &str, field: &str) -> Option<String> {
        let line = format!("{} --raw hget {} {}", self.prefix, hash, field);
        self.runner.run(&line).await
    }
}

/// Double-quote for the command-line lexer, escaping `"` and `\`.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

#[cfg(test)]
#[path = "kv_tests.rs"]
mod tests;
