// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{CsvList, LogMode, Subports};

use super::output_matches;
use crate::checks::GOES_STATUS_CMD;
use crate::session::Session;
use crate::verifier::Verifier;

const REPORT_MARKERS: [&str; 4] = ["Transfer", "Bandwidth", "Bytes", "bits/sec"];

/// Short iperf runs to each peer port, then no CRC errors on any port.
#[derive(Debug, Clone, Deserialize)]
pub struct IperfTraffic {
    #[serde(default)]
    pub eth_list: CsvList,
    /// Peer host octet per entry of `eth_list`.
    #[serde(default)]
    pub eth_ips_last_octet: CsvList,
    #[serde(default)]
    pub is_subports: bool,
    #[serde(default)]
    pub is_lane2_count2: bool,
}

/// Non-zero receive CRC error counter for `eth-{eth}-{port}` in a
/// `goes hget` dump.
fn has_crc_errors(dump: &str, eth: &str, port: &str) -> bool {
    let counter = format!("vnet.eth-{eth}-{port}.port-rx-crc-error-packet");
    dump.lines()
        .filter(|line| line.contains(&counter))
        .filter_map(|line| line.rsplit(':').next()?.trim().parse::<u64>().ok())
        .any(|count| count != 0)
}

#[async_trait]
impl Verifier for IperfTraffic {
    const NAME: &'static str = "port-iperf-traffic";
    const SUMMARY: &'static str = "iperf traffic per port and zero CRC errors";

    fn log_mode(&self) -> LogMode {
        LogMode::Append
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        let ports = Subports::from_flags(self.is_subports, self.is_lane2_count2).ports();

        for (i, eth) in self.eth_list.iter().enumerate() {
            let octet = self.eth_ips_last_octet.get(i).unwrap_or_default();
            for port in ports {
                let cmd = format!("iperf -c 10.{eth}.{port}.{octet} -t 2 -P 1");
                if !output_matches(session, &cmd, |o| REPORT_MARKERS.iter().any(|m| o.contains(m))).await {
                    session.fail(format!(
                        "On switch {switch} iperf traffic cannot be verified for eth-{eth}-{port} using command {cmd}"
                    ));
                }
            }
        }

        for eth in &self.eth_list {
            for port in ports {
                let dump = session.run_unrecorded(&format!("goes hget platina-mk1 eth-{eth}-{port}")).await;
                if dump.is_some_and(|d| has_crc_errors(&d, eth, port)) {
                    session.fail(format!("On switch {switch} crc error count is not 0 for interface eth-{eth}-{port} "));
                }
            }
        }

        session.exec(GOES_STATUS_CMD).await;
    }
}

#[cfg(test)]
#[path = "iperf_tests.rs"]
mod tests;
