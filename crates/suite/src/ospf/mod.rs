// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! OSPF adjacency, timer, route and traffic verifiers.

mod docker;
mod intervals;
mod load_balancing;
mod traffic;

pub use docker::DockerOspf;
pub use intervals::Intervals;
pub use load_balancing::LoadBalancing;
pub use traffic::Traffic;

use swt_core::config_lines;

const NETMASK: &str = "netmask 255.255.255.0";

/// A `network a.b.c.d/len area ...` statement from the routing config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Network {
    octets: Vec<String>,
}

impl Network {
    /// Parse every line starting with `network`.
    pub(crate) fn from_config(config: &str) -> Vec<Network> {
        config_lines(config)
            .filter(|line| line.starts_with("network"))
            .filter_map(|line| line.split_whitespace().nth(1))
            .map(|addr| {
                let addr = addr.split('/').next().unwrap_or(addr);
                Network { octets: addr.split('.').map(str::to_string).collect() }
            })
            .collect()
    }

    pub(crate) fn third_octet(&self) -> &str {
        self.octets.get(2).map(String::as_str).unwrap_or_default()
    }

    /// The interface facing this network, `eth-{third octet}-1`.
    pub(crate) fn interface(&self) -> String {
        format!("eth-{}-1", self.third_octet())
    }

    /// The network address with the host octet replaced by `host`.
    pub(crate) fn host_address(&self, host: &str) -> String {
        let mut octets = self.octets.clone();
        if let Some(last) = octets.get_mut(3) {
            *last = host.to_string();
        }
        octets.join(".")
    }

    /// `ifconfig eth-X-1 a.b.X.{host} netmask 255.255.255.0`
    pub(crate) fn ifconfig(&self, host: &str) -> String {
        format!("ifconfig {} {} {}", self.interface(), self.host_address(host), NETMASK)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
