// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::LogMode;

use super::{output_matches, vnet_hget};
use crate::checks::GOES_STATUS_CMD;
use crate::session::Session;
use crate::verifier::Verifier;

/// A single 100g port: either its link, or the installed optic and its
/// fec and speed settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SingleProvision {
    #[serde(default)]
    pub eth: String,
    #[serde(default)]
    pub speed: String,
    #[serde(default)]
    pub media: String,
    #[serde(default)]
    pub fec: String,
    #[serde(default)]
    pub platina_redis_channel: String,
    #[serde(default)]
    pub verify_links: bool,
}

impl SingleProvision {
    /// Compliance line the QSFP reports for the expected optic.
    fn compliance(&self) -> String {
        let optic = if self.media == "CWDM4" { "100G CWDM4".to_string() } else { format!("100GBASE-{}", self.media) };
        format!("port-{}.qsfp.compliance: extended {optic}", self.eth)
    }
}

#[async_trait]
impl Verifier for SingleProvision {
    const NAME: &'static str = "port-single-provision";
    const SUMMARY: &'static str = "Link or optic/fec/speed of one 100g port";

    fn log_mode(&self) -> LogMode {
        LogMode::Append
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        let channel = self.platina_redis_channel.as_str();
        let eth = self.eth.as_str();

        session.wait_secs(5).await;
        if self.speed == "100g" {
            if self.verify_links {
                if !output_matches(session, &vnet_hget(channel, eth, "1", "link"), |o| o.contains("true")).await {
                    session.fail(format!("On switch {switch} port link is not up for eth-{eth}-1 interface"));
                }
            } else {
                let compliance = self.compliance();
                let cmd = format!("goes hget {channel} qsfp.compliance");
                if !output_matches(session, &cmd, |o| o.contains(&compliance)).await {
                    session.fail(format!("On switch {switch} eth-{eth}-1 interface does not have correct optic installed"));
                }
                let fec = self.fec.as_str();
                if !output_matches(session, &vnet_hget(channel, eth, "1", "fec"), |o| o.contains(fec)).await {
                    session.fail(format!("On switch {switch} fec is not set to {fec} for eth-{eth}-1 interface"));
                }
                let speed = self.speed.as_str();
                if !output_matches(session, &vnet_hget(channel, eth, "1", "speed"), |o| o.contains(speed)).await {
                    session.fail(format!(
                        "On switch {switch} speed of the interface is not set to {speed} for the eth-{eth}-1 interface"
                    ));
                }
                session.exec(&format!("ifconfig eth-{eth}-1 up")).await;
            }
        }

        session.exec(GOES_STATUS_CMD).await;
    }
}

#[cfg(test)]
#[path = "single_tests.rs"]
mod tests;
