// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::LogMode;

use crate::session::Session;
use crate::verifier::Verifier;

const LINK_CMD: &str = "ip link show";

/// Front-panel netdevs disappear when goes stops and return when it starts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterfacesOnStop {}

fn front_panel() -> impl Iterator<Item = String> {
    (1..=17).map(|i| format!("eth-{i}-1"))
}

#[async_trait]
impl Verifier for InterfacesOnStop {
    const NAME: &'static str = "interfaces-on-goes-stop";
    const SUMMARY: &'static str = "Linux interfaces follow goes stop/start";

    fn log_mode(&self) -> LogMode {
        LogMode::Overwrite
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();

        session.exec("goes stop").await;
        let links = session.exec(LINK_CMD).await.unwrap_or_default();
        if front_panel().any(|eth| links.contains(&eth)) {
            session.fail_inline(format!(
                "On switch {switch} linux interfaces are showing up in output of command {LINK_CMD} even after stopping goes"
            ));
        }

        session.exec("goes start").await;
        let links = session.exec(LINK_CMD).await.unwrap_or_default();
        if !front_panel().all(|eth| links.contains(&eth)) {
            session.fail_inline(format!(
                "On switch {switch} linux interfaces are not showing up in output of command {LINK_CMD} even after starting goes"
            ));
        }
    }
}

#[cfg(test)]
#[path = "interfaces_on_stop_tests.rs"]
mod tests;
