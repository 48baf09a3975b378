// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Moving front-panel interfaces in and out of routing containers.

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{switch_id, TaskReport};

use super::aborted;
use crate::verifier::Task;

const DOCKER_MOVE: &str = "~/./docker_move.sh";
const DONE: &str = "Module executed successfully";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkState {
    Up,
    #[default]
    Down,
}

/// Container description, one `key value` pair per line.
///
/// A line is classified by the first key it mentions, checked in field
/// order.
#[derive(Debug, Default, PartialEq, Eq)]
struct ContainerConfig<'a> {
    name: Option<&'a str>,
    interfaces: Vec<&'a str>,
    vlan_ids: Vec<&'a str>,
    second_octets: Vec<&'a str>,
    third_octet: Option<&'a str>,
    subport: Option<&'a str>,
}

impl<'a> ContainerConfig<'a> {
    fn parse(text: &'a str) -> Self {
        let mut config = Self::default();
        for line in text.lines() {
            let Some(value) = line.split_whitespace().nth(1) else {
                continue;
            };
            if line.contains("container_name") {
                config.name = Some(value);
            } else if line.contains("interface") {
                config.interfaces.push(value);
            } else if line.contains("vlan_id") {
                config.vlan_ids.push(value);
            } else if line.contains("Second_Octet") {
                config.second_octets.push(value);
            } else if line.contains("Third_Octet") {
                config.third_octet = Some(value);
            } else if line.contains("subport") {
                config.subport = Some(value);
            }
        }
        config
    }

    fn subport(&self) -> &'a str {
        self.subport.unwrap_or("1")
    }

    /// Container name and its numeric id, `R12` -> `("R12", "12", 12)`.
    fn container(&self) -> Result<(&'a str, &'a str, u32), String> {
        let name = self.name.ok_or("container config has no container_name")?;
        let id = name.get(1..).unwrap_or_default();
        let dummy = id.parse().map_err(|_| format!("container name {name} does not end in a number"))?;
        Ok((name, id, dummy))
    }
}

/// Move a container's dummy loopback and its ports in (`up`) or back out
/// (`down`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DockerUpdown {
    #[serde(default)]
    pub config_file: String,
    #[serde(default)]
    pub state: LinkState,
}

#[async_trait]
impl Task for DockerUpdown {
    const NAME: &'static str = "docker-updown";
    const SUMMARY: &'static str = "Move container interfaces up or down";

    async fn execute<R: CommandRunner>(&self, _switch_name: &str, runner: &R) -> TaskReport {
        let config = ContainerConfig::parse(&self.config_file);
        let (name, id, dummy) = match config.container() {
            Ok(container) => container,
            Err(msg) => return aborted(msg),
        };
        let sub = config.subport();

        match self.state {
            LinkState::Up => {
                runner.run(&format!("ip link add dummy{dummy} type dummy 2> /dev/null")).await;
                runner.run(&format!("{DOCKER_MOVE} up {name} dummy{dummy} 192.168.{id}.1/32")).await;
                for eth in &config.interfaces {
                    runner.run(&format!("{DOCKER_MOVE} up {name} eth-{eth}-{sub} 10.{eth}.{sub}.32/24")).await;
                }
            }
            LinkState::Down => {
                for eth in &config.interfaces {
                    runner.run(&format!("{DOCKER_MOVE} down {name} eth-{eth}-{sub}")).await;
                }
                runner.run(&format!("{DOCKER_MOVE} down {name} dummy{dummy}")).await;
            }
        }
        TaskReport::msg(DONE)
    }
}

/// Like [`DockerUpdown`], but each port goes in as a tagged vlan
/// subinterface.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DockerUpdownVlan {
    #[serde(default)]
    pub config_file: String,
    #[serde(default)]
    pub state: LinkState,
}

#[async_trait]
impl Task for DockerUpdownVlan {
    const NAME: &'static str = "docker-updown-vlan";
    const SUMMARY: &'static str = "Move container vlan subinterfaces up or down";

    async fn execute<R: CommandRunner>(&self, switch_name: &str, runner: &R) -> TaskReport {
        let config = ContainerConfig::parse(&self.config_file);
        let (name, _, dummy) = match config.container() {
            Ok(container) => container,
            Err(msg) => return aborted(msg),
        };
        let sub = config.subport();
        let ports = config.interfaces.len();
        if config.vlan_ids.len() < ports || (self.state == LinkState::Up && config.second_octets.len() < ports) {
            return aborted(format!("container {name} config does not give a vlan id and octet for every interface"));
        }

        match self.state {
            LinkState::Up => {
                let last_digit = dummy % 10;
                let dummy_octet = dummy / 10;
                let third = config.third_octet.unwrap_or("0");
                let host = switch_id(switch_name);
                runner.run(&format!("ip link add dummy{dummy} type dummy 2> /dev/null")).await;
                runner
                    .run(&format!("{DOCKER_MOVE} up {name} dummy{dummy} 192.168.{dummy_octet}.{last_digit}/32"))
                    .await;
                for ((eth, vlan), second) in config.interfaces.iter().zip(&config.vlan_ids).zip(&config.second_octets) {
                    runner.run(&format!("ip link add link eth-{eth}-1 name eth-{eth}-1.{vlan} type vlan id {vlan}")).await;
                    runner.run(&format!("ip link set up eth-{eth}-1.{vlan}")).await;
                    runner
                        .run(&format!(
                            "{DOCKER_MOVE} up {name} eth-{eth}-{sub}.{vlan} {eth}.{second}.{third}.{host}/24"
                        ))
                        .await;
                }
            }
            LinkState::Down => {
                for (eth, vlan) in config.interfaces.iter().zip(&config.vlan_ids) {
                    runner.run(&format!("{DOCKER_MOVE} down {name} eth-{eth}-{sub}.{vlan}")).await;
                    runner.run(&format!("ip link set down eth-{eth}-1.{vlan}")).await;
                    runner.run(&format!("ip link del eth-{eth}-1.{vlan}")).await;
                }
                runner.run(&format!("{DOCKER_MOVE} down {name} dummy{dummy}")).await;
            }
        }
        TaskReport::msg(DONE)
    }
}

#[cfg(test)]
#[path = "docker_updown_tests.rs"]
mod tests;
