// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checks against the switch and BMC redis servers.

mod bmc;
mod invalid_input;

pub use bmc::BmcRedis;
pub use invalid_input::InvalidInput;
