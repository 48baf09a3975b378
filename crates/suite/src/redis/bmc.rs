// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::LogMode;

use crate::session::Session;
use crate::verifier::Verifier;

const FIELDS: [&str; 5] = ["temp", "status", "fan_tray", "psu", "vmon"];

/// The BMC's redis answers hardware-monitor reads over its IPv6 link-local
/// address.
#[derive(Debug, Clone, Deserialize)]
pub struct BmcRedis {
    #[serde(default)]
    pub bmc_redis_ip: String,
    #[serde(default)]
    pub platina_redis_channel: String,
}

/// EUI-64 link-local address for a MAC: `ff:fe` spliced into the middle and
/// the universal/local bit of the first octet flipped.
pub(crate) fn link_local_ipv6(mac: &str) -> Option<String> {
    let mut parts: Vec<String> = mac.trim().split(':').map(str::to_string).collect();
    if parts.len() != 6 {
        return None;
    }
    let first = u8::from_str_radix(&parts[0], 16).ok()? ^ 0x02;
    parts[0] = format!("{first:x}");
    parts.insert(3, "ff".to_string());
    parts.insert(4, "fe".to_string());
    let groups: Vec<String> = parts.chunks(2).map(|pair| pair.concat()).collect();
    Some(format!("fe80::{}", groups.join(":")))
}

impl BmcRedis {
    fn cli(&self) -> String {
        format!("redis-cli -h {} ", self.bmc_redis_ip)
    }
}

#[async_trait]
impl Verifier for BmcRedis {
    const NAME: &'static str = "bmc-redis";
    const SUMMARY: &'static str = "BMC redis hget of hardware monitor fields";

    fn log_mode(&self) -> LogMode {
        LogMode::Overwrite
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        let channel = &self.platina_redis_channel;

        let mac_cmd = format!("{}hget {channel} eeprom.BaseEthernetAddress", self.cli());
        let mac = session.run_unrecorded(&mac_cmd).await;
        let Some(ipv6) = mac.as_deref().and_then(link_local_ipv6) else {
            session.fail(format!("On switch {switch} base ethernet address cannot be read using command {mac_cmd}"));
            return;
        };

        for field in FIELDS {
            let cmd = format!("hget {channel} {field} {ipv6}%eth0 ");
            let cli = format!("{}{cmd}", self.cli());
            match session.exec_labeled(&cli, &cmd).await {
                None => session.fail(format!("On switch {switch} output of command {cli} is None")),
                Some(out) if out.to_lowercase().contains("error") => {
                    session.fail(format!("On switch {switch} output of command {cli} has errors"));
                }
                Some(_) => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "bmc_tests.rs"]
mod tests;
