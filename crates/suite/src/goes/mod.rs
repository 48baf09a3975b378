// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Regression checks against the goes daemon itself.

mod fib_routes;
mod interface_speed;
mod interfaces_on_stop;
mod restart_status;

pub use fib_routes::FibRoutes;
pub use interface_speed::InterfaceSpeed;
pub use interfaces_on_stop::InterfacesOnStop;
pub use restart_status::RestartStatus;
