// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{config_lines, LogMode, Subports};

use super::{reported_speed, PortExpectation};
use crate::checks::GOES_STATUS_CMD;
use crate::session::Session;
use crate::verifier::Verifier;

/// Push fec and media settings through the vnet store and check every
/// port picks them up.
#[derive(Debug, Clone, Deserialize)]
pub struct SetConfigs {
    /// One port per line; the port number is the second field.
    #[serde(default)]
    pub config_file: String,
    #[serde(default)]
    pub speed: String,
    #[serde(default)]
    pub media: String,
    #[serde(default)]
    pub fec: String,
    #[serde(default)]
    pub autoneg: String,
    #[serde(default)]
    pub platina_redis_channel: String,
    #[serde(default)]
    pub is_subports: bool,
    #[serde(default)]
    pub is_lane2_count2: bool,
}

#[async_trait]
impl Verifier for SetConfigs {
    const NAME: &'static str = "port-set-configs";
    const SUMMARY: &'static str = "Apply fec/media per port and check link, media, fec and speed";

    fn log_mode(&self) -> LogMode {
        LogMode::Append
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let channel = self.platina_redis_channel.as_str();
        let eths: Vec<&str> = config_lines(&self.config_file).filter_map(|l| l.split_whitespace().nth(1)).collect();
        let ports = Subports::from_flags(self.is_subports, self.is_lane2_count2).ports();

        for eth in &eths {
            for port in ports {
                session.exec(&format!("goes hset {channel} vnet.eth-{eth}-{port}.fec {}", self.fec)).await;
                session.exec(&format!("goes hset {channel} vnet.eth-{eth}-{port}.media {}", self.media)).await;
            }
        }
        session.wait_secs(10).await;

        let expect = PortExpectation {
            channel,
            media: &self.media,
            fec: &self.fec,
            speed: reported_speed(&self.speed, &self.autoneg),
        };
        expect.check(session, &eths, ports).await;

        session.exec(GOES_STATUS_CMD).await;
    }
}

#[cfg(test)]
#[path = "set_configs_tests.rs"]
mod tests;
