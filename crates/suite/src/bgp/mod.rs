// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! BGP peering verifiers.

mod authentication;
mod interface_down;
mod loopback;
mod state_propagation;

pub use authentication::Authentication;
pub use interface_down::InterfaceDown;
pub use loopback::Loopback;
pub use state_propagation::StatePropagation;

pub(crate) fn default_package() -> String {
    "quagga".to_string()
}
