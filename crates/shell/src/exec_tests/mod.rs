// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the subprocess executor.

use super::*;

mod basic;
mod errors;

/// Create a default executor for tests.
pub(crate) fn executor() -> Executor {
    Executor::new()
}
