// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Name-to-module dispatch.

use serde::de::DeserializeOwned;
use swt_adapters::CommandRunner;
use swt_core::RunOutcome;

use crate::error::SuiteError;
use crate::verifier::{run_task, run_verifier, CommonParams, Task, Verifier};
use crate::{bgp, goes, ospf, port, redis, tasks, upgrade, vlan};

/// Listing entry for a registered module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleInfo {
    pub name: &'static str,
    pub summary: &'static str,
    /// Tasks keep no execution log.
    pub recorded: bool,
}

fn parse<T: DeserializeOwned>(module: &'static str, params: &serde_json::Value) -> Result<T, SuiteError> {
    serde_json::from_value(params.clone()).map_err(|source| SuiteError::Params { module, source })
}

/// Generate [`modules`] and [`run_module`] from the verifier and task lists.
macro_rules! registry {
    (verifiers: [$($verifier:ty),+ $(,)?], tasks: [$($task:ty),+ $(,)?] $(,)?) => {
        /// Every registered module, verifiers first.
        pub fn modules() -> Vec<ModuleInfo> {
            vec![
                $( ModuleInfo {
                    name: <$verifier as Verifier>::NAME,
                    summary: <$verifier as Verifier>::SUMMARY,
                    recorded: true,
                }, )+
                $( ModuleInfo {
                    name: <$task as Task>::NAME,
                    summary: <$task as Task>::SUMMARY,
                    recorded: false,
                }, )+
            ]
        }

        /// Run the module called `name` with a flat parameter object.
        pub async fn run_module<R: CommandRunner>(
            name: &str,
            params: &serde_json::Value,
            runner: R,
        ) -> Result<RunOutcome, SuiteError> {
            let common: CommonParams = parse("common", params)?;
            $(
                if name == <$verifier as Verifier>::NAME {
                    let verifier: $verifier = parse(<$verifier as Verifier>::NAME, params)?;
                    return run_verifier(&verifier, &common, runner).await;
                }
            )+
            $(
                if name == <$task as Task>::NAME {
                    let task: $task = parse(<$task as Task>::NAME, params)?;
                    return Ok(run_task(&task, &common, runner).await);
                }
            )+
            Err(SuiteError::UnknownModule(name.to_string()))
        }
    };
}

registry! {
    verifiers: [
        bgp::Authentication,
        bgp::Loopback,
        bgp::InterfaceDown,
        bgp::StatePropagation,
        ospf::Intervals,
        ospf::LoadBalancing,
        ospf::Traffic,
        ospf::DockerOspf,
        vlan::Configuration,
        vlan::Transit,
        vlan::Dhcp,
        port::SetConfigs,
        port::MasterSetConfigs,
        port::Links,
        port::SingleProvision,
        port::IperfTraffic,
        upgrade::GoesUpgrade,
        upgrade::UpgradeDowngrade,
        goes::RestartStatus,
        goes::FibRoutes,
        goes::InterfaceSpeed,
        goes::InterfacesOnStop,
        redis::BmcRedis,
        redis::InvalidInput,
    ],
    tasks: [
        tasks::StaticRoutes,
        tasks::UpdateEthIpMtu,
        tasks::ResetInvaders,
        tasks::DockerUpdown,
        tasks::DockerUpdownVlan,
        tasks::StoreGoesDetails,
        tasks::FailureSummary,
        tasks::VerifyLinks,
    ],
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
