// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Port provisioning: fec/media/speed settings, links and traffic.

mod iperf;
mod links;
mod master_set_configs;
mod set_configs;
mod single;

pub use iperf::IperfTraffic;
pub use links::Links;
pub use master_set_configs::MasterSetConfigs;
pub use set_configs::SetConfigs;
pub use single::SingleProvision;

use swt_adapters::CommandRunner;

use crate::session::Session;

/// `goes hget <channel> vnet.eth-<eth>-<port>.<field>`
pub(crate) fn vnet_hget(channel: &str, eth: &str, port: &str, field: &str) -> String {
    format!("goes hget {channel} vnet.eth-{eth}-{port}.{field}")
}

/// Record `cmd` and report whether its output satisfies `ok`. `None`
/// output never does.
pub(crate) async fn output_matches<R: CommandRunner>(
    session: &mut Session<R>,
    cmd: &str,
    ok: impl FnOnce(&str) -> bool + Send,
) -> bool {
    session.exec(cmd).await.is_some_and(|out| ok(&out))
}

/// Expected vnet state of a set of provisioned ports.
pub(crate) struct PortExpectation<'a> {
    pub channel: &'a str,
    pub media: &'a str,
    pub fec: &'a str,
    pub speed: &'a str,
}

impl PortExpectation<'_> {
    /// Check link, then media, then fec, then speed across all `ports` of
    /// every `eth`, one field at a time.
    pub(crate) async fn check<R: CommandRunner>(&self, session: &mut Session<R>, eths: &[&str], ports: &[&str]) {
        let switch = session.switch_name().to_string();
        let pairs: Vec<(&str, &str)> =
            eths.iter().flat_map(|eth| ports.iter().map(move |port| (*eth, *port))).collect();

        for &(eth, port) in &pairs {
            if !output_matches(session, &vnet_hget(self.channel, eth, port, "link"), |o| o.contains("true")).await {
                session.fail(format!("On switch {switch} port link is not up for the interface eth-{eth}-{port}"));
            }
        }
        for &(eth, port) in &pairs {
            let media = self.media;
            if !output_matches(session, &vnet_hget(self.channel, eth, port, "media"), |o| o.contains(media)).await {
                session.fail(format!(
                    "On switch {switch} interface media is not set to {media} for the interface eth-{eth}-{port}"
                ));
            }
        }
        for &(eth, port) in &pairs {
            let fec = self.fec;
            if !output_matches(session, &vnet_hget(self.channel, eth, port, "fec"), |o| o.contains(fec)).await {
                session.fail(format!("On switch {switch} fec is not set to {fec} for the interface eth-{eth}-{port}"));
            }
        }
        for &(eth, port) in &pairs {
            let speed = self.speed;
            if !output_matches(session, &vnet_hget(self.channel, eth, port, "speed"), |o| o.contains(speed)).await {
                session.fail(format!(
                    "On switch {switch} speed of the interface is not set to {speed} for the interface eth-{eth}-{port}"
                ));
            }
        }
    }
}

/// The speed a port reports: `autoneg` when autonegotiation is on.
pub(crate) fn reported_speed<'a>(speed: &'a str, autoneg: &str) -> &'a str {
    if autoneg == "on" {
        "autoneg"
    } else {
        speed
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
