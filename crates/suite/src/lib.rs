// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! swt-suite: switch verifiers, provisioning tasks and the session that
//! records their commands.

pub mod bgp;
pub mod checks;
pub mod error;
pub mod goes;
pub mod ospf;
pub mod port;
pub mod redis;
pub mod registry;
pub mod session;
pub mod suppress;
pub mod tasks;
pub mod upgrade;
pub mod verifier;
pub mod vlan;

#[cfg(test)]
mod test_helpers;

pub use error::SuiteError;
pub use registry::{modules, run_module, ModuleInfo};
pub use session::{LogTarget, Session};
pub use suppress::SuppressPolicy;
pub use verifier::{run_task, run_verifier, CommonParams, Task, Verifier};
