// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{CsvList, LogMode};

use super::{output_matches, vnet_hget};
use crate::checks::GOES_STATUS_CMD;
use crate::session::Session;
use crate::verifier::Verifier;

/// Settings and links of ports provisioned for a given speed class.
///
/// 100g/40g/50g/auto ports use subport 1 (and 3 with `two_lanes`) and are
/// only addressed when split. 25g/10g/auto10g ports are broken out into
/// four addressed subports.
#[derive(Debug, Clone, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub eth_list: CsvList,
    #[serde(default)]
    pub speed: String,
    #[serde(default)]
    pub media: String,
    #[serde(default)]
    pub fec: String,
    #[serde(default)]
    pub platina_redis_channel: String,
    #[serde(default)]
    pub leaf_server: String,
    #[serde(default)]
    pub two_lanes: bool,
}

const SINGLE: &[&str] = &["1"];
const TWO_LANE: &[&str] = &["1", "3"];
const BREAKOUT: &[&str] = &["1", "2", "3", "4"];

/// Ports to check and whether they get addresses, by speed class.
fn layout(speed: &str, two_lanes: bool) -> Option<(&'static [&'static str], bool)> {
    match speed {
        "100g" | "auto" | "40g" | "50g" if two_lanes => Some((TWO_LANE, true)),
        "100g" | "auto" | "40g" | "50g" => Some((SINGLE, false)),
        "10g" | "auto10g" | "25g" => Some((BREAKOUT, true)),
        _ => None,
    }
}

impl Links {
    fn expected_speed(&self) -> &str {
        match self.speed.as_str() {
            "auto" | "auto10g" => "autoneg",
            other => other,
        }
    }

    async fn check_settings<R: CommandRunner>(&self, session: &mut Session<R>, eth: &str, port: &str) {
        let switch = session.switch_name().to_string();
        let channel = self.platina_redis_channel.as_str();

        let media = self.media.as_str();
        if !output_matches(session, &vnet_hget(channel, eth, port, "media"), |o| o.contains(media)).await {
            session.fail(format!(
                "On switch {switch} interface media is not set to copper for the interface eth-{eth}-{port}"
            ));
        }
        // Reported value must be a substring of the expected one.
        let speed = self.expected_speed();
        if !output_matches(session, &vnet_hget(channel, eth, port, "speed"), |o| speed.contains(o.trim())).await {
            session.fail(format!(
                "On switch {switch} speed of the interface is not set to {speed} for the interface eth-{eth}-{port}"
            ));
        }
        let fec = self.fec.as_str();
        if !output_matches(session, &vnet_hget(channel, eth, port, "fec"), |o| o.contains(fec)).await {
            session.fail(format!("On switch {switch} fec is not set to {fec} for the interface eth-{eth}-{port}"));
        }
    }
}

#[async_trait]
impl Verifier for Links {
    const NAME: &'static str = "port-links";
    const SUMMARY: &'static str = "Port settings and link state for a speed class";

    fn log_mode(&self) -> LogMode {
        LogMode::Append
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        if let Some((ports, addressed)) = layout(&self.speed, self.two_lanes) {
            let host = if switch == self.leaf_server { "1" } else { "2" };
            let pairs: Vec<(&str, &str)> =
                self.eth_list.iter().flat_map(|eth| ports.iter().map(move |port| (eth.as_str(), *port))).collect();

            for &(eth, port) in &pairs {
                self.check_settings(session, eth, port).await;
            }
            if addressed {
                for (subnet, &(eth, port)) in (1..).zip(&pairs) {
                    session.exec(&format!("ifconfig eth-{eth}-{port} 192.168.{subnet}.{host} netmask 255.255.255.0")).await;
                }
            }
            for &(eth, port) in &pairs {
                session.exec(&format!("ifconfig eth-{eth}-{port} up")).await;
            }
            session.wait_secs(20).await;

            let channel = self.platina_redis_channel.as_str();
            for &(eth, port) in &pairs {
                if !output_matches(session, &vnet_hget(channel, eth, port, "link"), |o| o.contains("true")).await {
                    session.fail(format!("On switch {switch} port link is not up for the interface eth-{eth}-{port}"));
                }
            }
        }

        session.exec(GOES_STATUS_CMD).await;
    }
}

#[cfg(test)]
#[path = "links_tests.rs"]
mod tests;
