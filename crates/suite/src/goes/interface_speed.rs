// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{config_lines, LogMode};

use crate::session::Session;
use crate::verifier::Verifier;

/// Speeds set by the goes start script are what redis reports.
#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceSpeed {
    /// Start script; lines like `hset platina vnet.eth-1-1.speed 100g`.
    #[serde(default)]
    pub start_file: String,
    #[serde(default)]
    pub platina_redis_channel: String,
}

impl InterfaceSpeed {
    /// `(interface field, speed)` for every speed line of the start script.
    fn expected(&self) -> Vec<(&str, &str)> {
        let channel_prefix = format!("{} ", self.platina_redis_channel);
        config_lines(&self.start_file)
            .filter(|line| line.contains("speed"))
            .filter_map(|line| {
                let speed = line.split_once("speed ")?.1;
                let field = line.split_once(channel_prefix.as_str())?.1.split_whitespace().next()?;
                Some((field, if speed == "auto" { "autoneg" } else { speed }))
            })
            .collect()
    }
}

#[async_trait]
impl Verifier for InterfaceSpeed {
    const NAME: &'static str = "interface-speed";
    const SUMMARY: &'static str = "Redis speeds match the goes start script";

    fn log_mode(&self) -> LogMode {
        LogMode::Overwrite
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        let reported = session
            .exec(&format!("goes hget {} speed", self.platina_redis_channel))
            .await
            .unwrap_or_default();
        for (field, speed) in self.expected() {
            if !reported.contains(&format!("{field}: {speed}")) {
                session.fail(format!("On switch {switch} {field} in redis is not set to {speed}"));
            }
        }
    }
}

#[cfg(test)]
#[path = "interface_speed_tests.rs"]
mod tests;
