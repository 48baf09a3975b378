// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{config_lines, LogMode};

use crate::checks::GOES_STATUS_CMD;
use crate::session::Session;
use crate::verifier::Verifier;

/// OSPF inside a routing container: every configured network is routed
/// and the neighbor table can be read.
#[derive(Debug, Clone, Deserialize)]
pub struct DockerOspf {
    #[serde(default)]
    pub container: String,
    #[serde(default)]
    pub config_file: String,
}

#[async_trait]
impl Verifier for DockerOspf {
    const NAME: &'static str = "docker-ospf";
    const SUMMARY: &'static str = "OSPF routes and neighbors inside a routing container";

    fn log_mode(&self) -> LogMode {
        LogMode::Overwrite
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        let cli = format!("docker exec -i {} ", self.container);

        session.exec(&format!("{cli}vtysh -c 'sh running-config'")).await;

        let cmd = format!("{cli}vtysh -c 'show ip route ospf'");
        match session.exec(&cmd).await {
            Some(routes) => {
                let expected = config_lines(&self.config_file)
                    .filter(|l| l.contains("network") && l.contains("area"))
                    .filter_map(|l| l.split_whitespace().nth(1));
                for route in expected {
                    if !routes.contains(route) {
                        session.fail_inline(format!(
                            "On switch {switch} ospf route {route} is not showing up in the output of command {cmd} "
                        ));
                    }
                }
            }
            None => session.fail_inline(format!(
                "On switch {switch} ospf routes cannot be verified since output of command {cmd} is None"
            )),
        }

        let cmd = format!("{cli}vtysh -c 'show ip ospf neighbor'");
        let readable = session.exec(&cmd).await.is_some_and(|o| !o.contains("error"));
        if !readable {
            session.fail_inline(format!(
                "On Switch {switch} ospf neighbors cannot be verified since output of command {cmd} is None"
            ));
        }

        session.exec(GOES_STATUS_CMD).await;
    }
}

#[cfg(test)]
#[path = "docker_tests.rs"]
mod tests;
