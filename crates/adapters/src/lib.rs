// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! swt-adapters: the process boundary of the switch test suite.

pub mod kv;
pub mod runner;

pub use kv::KvClient;
pub use runner::{CommandRunner, ProcessRunner};

#[cfg(any(test, feature = "test-support"))]
pub use runner::FakeRunner;
