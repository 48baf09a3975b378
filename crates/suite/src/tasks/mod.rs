// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Provisioning tasks. They change switch state, or check it, but keep no
//! execution log.

mod docker_updown;
mod failure_summary;
mod reset_invaders;
mod static_routes;
mod store_goes_details;
mod verify_links;

pub use docker_updown::{DockerUpdown, DockerUpdownVlan, LinkState};
pub use failure_summary::FailureSummary;
pub use reset_invaders::ResetInvaders;
pub use static_routes::{StaticRoutes, UpdateEthIpMtu};
pub use store_goes_details::StoreGoesDetails;
pub use verify_links::VerifyLinks;

use swt_adapters::CommandRunner;
use swt_core::TaskReport;

/// Report for a task that could not start.
fn aborted(msg: impl Into<String>) -> TaskReport {
    let msg = msg.into();
    tracing::warn!(%msg, "task aborted");
    TaskReport { msg, passed: Some(false), ..TaskReport::default() }
}

/// Run each line in order, reporting every one as executed.
async fn run_lines<'a, R, I>(switch: &str, runner: &R, lines: I) -> TaskReport
where
    R: CommandRunner,
    I: IntoIterator<Item = std::borrow::Cow<'a, str>>,
{
    let mut msg = String::new();
    for line in lines {
        runner.run(&line).await;
        msg.push_str(&format!("On switch {switch}, executed '{line}'"));
    }
    TaskReport::msg(msg)
}
