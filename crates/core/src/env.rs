// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::path::PathBuf;

/// Default key-value CLI prefix for the results store.
pub const DEFAULT_KV_CLI: &str = "redis-cli -p 9090";

/// Log directory used when a run does not name one: `SWT_LOG_DIR`.
pub fn log_dir() -> Option<PathBuf> {
    std::env::var("SWT_LOG_DIR").ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Key-value CLI prefix for the results store: `SWT_KV_CLI` > `redis-cli -p 9090`.
pub fn kv_cli() -> String {
    std::env::var("SWT_KV_CLI")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_KV_CLI.to_string())
}

/// Tracing filter directive: `SWT_LOG` > `warn`.
pub fn log_filter() -> String {
    std::env::var("SWT_LOG").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| "warn".to_string())
}
