// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{CsvList, LogMode, Subports, Topology};

use super::{reported_speed, PortExpectation};
use crate::checks::GOES_STATUS_CMD;
use crate::session::Session;
use crate::verifier::Verifier;

/// Rebuild the vnet ports from scratch with the requested speed and fec,
/// then check they come up that way.
#[derive(Debug, Clone, Deserialize)]
pub struct MasterSetConfigs {
    #[serde(flatten)]
    pub topology: Topology,
    #[serde(default)]
    pub eth_list: CsvList,
    #[serde(default)]
    pub speed: String,
    #[serde(default)]
    pub media: String,
    #[serde(default)]
    pub fec: String,
    #[serde(default)]
    pub autoneg: String,
    #[serde(default)]
    pub leaf_eth_ips_last_octet: CsvList,
    #[serde(default)]
    pub spine_eth_ips_last_octet: CsvList,
    #[serde(default)]
    pub platina_redis_channel: String,
    #[serde(default)]
    pub is_subports: bool,
    #[serde(default)]
    pub is_lane2_count2: bool,
}

impl MasterSetConfigs {
    /// `100g` -> `100000`, the Mb/s value ethtool wants.
    fn ethtool_speed(&self) -> String {
        let mut gigabits = self.speed.clone();
        gigabits.pop();
        format!("{gigabits}000")
    }
}

#[async_trait]
impl Verifier for MasterSetConfigs {
    const NAME: &'static str = "port-master-set-configs";
    const SUMMARY: &'static str = "Recreate vnet ports with speed/fec and check the result";

    fn log_mode(&self) -> LogMode {
        LogMode::Append
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        let channel = self.platina_redis_channel.as_str();
        let eths: Vec<&str> = self.eth_list.iter().map(String::as_str).collect();
        let ports = Subports::from_flags(self.is_subports, self.is_lane2_count2).ports();

        let Some(octet) =
            self.topology.role_value(&switch, &self.spine_eth_ips_last_octet, &self.leaf_eth_ips_last_octet)
        else {
            session.fail(format!("On switch {switch} no interface address is configured for this switch"));
            session.exec(GOES_STATUS_CMD).await;
            return;
        };

        session.exec("goes stop").await;
        session.exec("rmmod platina-mk1").await;
        session.exec("modprobe platina-mk1").await;
        let speed = self.ethtool_speed();
        for eth in &eths {
            for port in ports {
                let iface = format!("eth-{eth}-{port}");
                session.run_unrecorded(&format!("ip link add {iface} type {channel}")).await;
                session.run_unrecorded(&format!("ip link set {iface} up")).await;
                session.run_unrecorded(&format!("ethtool -s {iface} speed {speed} autoneg {}", self.autoneg)).await;
                session.run_unrecorded(&format!("ifconfig {iface} 10.{eth}.{port}.{octet}/24")).await;
            }
        }
        session.exec("goes start").await;

        for eth in &eths {
            for port in ports {
                session.wait_secs(1).await;
                session.run_unrecorded(&format!("goes hset {channel} vnet.eth-{eth}-{port}.fec {}", self.fec)).await;
            }
        }

        let expect = PortExpectation {
            channel,
            media: &self.media,
            fec: &self.fec,
            speed: reported_speed(&self.speed, &self.autoneg),
        };
        expect.check(session, &eths, ports).await;
        session.wait_secs(40).await;

        session.exec(GOES_STATUS_CMD).await;
    }
}

#[cfg(test)]
#[path = "master_set_configs_tests.rs"]
mod tests;
