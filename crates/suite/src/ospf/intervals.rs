// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::{lenient_u64, CsvList, LogMode};

use crate::checks::{restart_routing, set_interfaces, GOES_STATUS_CMD};
use crate::session::Session;
use crate::suppress::SuppressPolicy;
use crate::verifier::Verifier;

const NEIGHBORS_CMD: &str = "vtysh -c 'sh ip ospf neighbor'";

/// Configured hello/dead timers are in effect, and adjacencies drop and
/// recover within them when an interface flaps.
#[derive(Debug, Clone, Deserialize)]
pub struct Intervals {
    #[serde(default)]
    pub interval_switch: String,
    #[serde(default)]
    pub eth_list: CsvList,
    #[serde(deserialize_with = "lenient_u64")]
    pub hello_timer: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub dead_timer: u64,
    #[serde(default = "crate::bgp::default_package")]
    pub package_name: String,
}

#[derive(Clone, Copy)]
enum Expect {
    Present,
    AbsentAfterDown,
    PresentAfterUp,
}

/// Read the neighbor table and check `eth` against `expect`. `None` output
/// fails once for the whole table.
async fn check_neighbors<R: CommandRunner>(session: &mut Session<R>, eths: &[&str], expect: Expect) {
    let switch = session.switch_name().to_string();
    let Some(table) = session.exec(NEIGHBORS_CMD).await else {
        session.fail(format!(
            "On switch {switch} ospf neighbors cannot be verified since output of command {NEIGHBORS_CMD} is None"
        ));
        return;
    };
    for eth in eths {
        let shown = table.contains(&format!("eth-{eth}-1"));
        let problem = match expect {
            Expect::Present if !shown => "ospf neighbor is not showing up for eth-{eth}-1 interface",
            Expect::AbsentAfterDown if shown => {
                "ospf neighbor is showing up for eth-{eth}-1 interface even after bringing down this interface"
            }
            Expect::PresentAfterUp if !shown => {
                "ospf neighbor is not showing up for eth-{eth}-1 interface even after bringing up this interface"
            }
            _ => continue,
        };
        session.fail(format!("On switch {switch} {}", problem.replace("{eth}", eth)));
    }
}

#[async_trait]
impl Verifier for Intervals {
    const NAME: &'static str = "ospf-intervals";
    const SUMMARY: &'static str = "OSPF hello/dead timers and adjacency recovery after a flap";

    fn log_mode(&self) -> LogMode {
        LogMode::Overwrite
    }

    fn suppress_policy(&self) -> SuppressPolicy {
        SuppressPolicy::none().skip_containing_all(&["service", "restart"])
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();
        let eths: Vec<&str> = self.eth_list.iter().map(String::as_str).collect();

        restart_routing(session, &self.package_name).await;
        set_interfaces(session, eths.clone(), "up").await;
        check_neighbors(session, &eths, Expect::Present).await;

        if switch == self.interval_switch {
            for eth in &eths {
                let cmd = format!("vtysh -c 'sh ip ospf interface eth-{eth}-1'");
                match session.exec(&cmd).await {
                    Some(out) => {
                        if !out.contains(&format!("Hello {}", self.hello_timer)) {
                            session.fail(format!(
                                "On switch {switch} hello timer interval is not configured for eth-{eth}-1 interface"
                            ));
                        }
                        if !out.contains(&format!("Dead {}", self.dead_timer)) {
                            session.fail(format!(
                                "On switch {switch} dead timer interval is not configured for eth-{eth}-1 interface"
                            ));
                        }
                    }
                    None => session.fail(format!(
                        "On switch {switch} hello and deadtime intervals cannot be verified since output of command {cmd} is None"
                    )),
                }

                set_interfaces(session, [*eth], "down").await;
                session.wait_secs(self.dead_timer).await;
                check_neighbors(session, &[*eth], Expect::AbsentAfterDown).await;

                set_interfaces(session, [*eth], "up").await;
                session.wait_secs(self.hello_timer + 2).await;
                check_neighbors(session, &[*eth], Expect::PresentAfterUp).await;
            }
        }

        session.exec(GOES_STATUS_CMD).await;
    }
}

#[cfg(test)]
#[path = "intervals_tests.rs"]
mod tests;
