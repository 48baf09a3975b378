// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::LogMode;

use crate::session::Session;
use crate::verifier::Verifier;

/// Read-only fields and the value each write attempt uses.
const READ_ONLY: [(&str, &str); 2] = [("vnet.ready", "false"), ("vnet.packet-generator.admin", "false")];

/// Writes to read-only redis fields are refused.
#[derive(Debug, Clone, Deserialize)]
pub struct InvalidInput {
    #[serde(default)]
    pub switch_ip: String,
    /// Talk to the switch's redis over the network. Remote runs keep no
    /// log file.
    #[serde(default)]
    pub remote_access: bool,
    #[serde(default)]
    pub platina_redis_channel: String,
}

impl InvalidInput {
    fn cli(&self) -> String {
        if self.remote_access {
            format!("redis-cli -h {} -p 6379 ", self.switch_ip)
        } else {
            "redis-cli ".to_string()
        }
    }
}

#[async_trait]
impl Verifier for InvalidInput {
    const NAME: &'static str = "redis-invalid-input";
    const SUMMARY: &'static str = "Redis refuses writes to read-only fields";

    fn log_mode(&self) -> LogMode {
        LogMode::Overwrite
    }

    fn writes_log(&self) -> bool {
        !self.remote_access
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        for (field, value) in READ_ONLY {
            let cmd = format!("hset {} {field} {value}", self.platina_redis_channel);
            let cli = format!("{}{cmd}", self.cli());
            match session.exec_labeled(&cli, &cmd).await {
                None => session.fail(format!("On switch {switch} output of command {cli} is None")),
                Some(out) if !out.to_lowercase().contains("error can't set") => {
                    session.fail(format!("On switch {switch} command {cli} should not have executed"));
                }
                Some(_) => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "invalid_input_tests.rs"]
mod tests;
