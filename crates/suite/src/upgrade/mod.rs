// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! goes firmware upgrade and downgrade verifiers.

mod goes_upgrade;
mod upgrade_downgrade;

pub use goes_upgrade::GoesUpgrade;
pub use upgrade_downgrade::UpgradeDowngrade;

use swt_adapters::CommandRunner;

use crate::checks::GOES_STATUS_CMD;
use crate::session::Session;

/// Record `goes status` and fail if it is missing or reports `not ok`.
pub(crate) async fn require_status_ok<R: CommandRunner>(session: &mut Session<R>) {
    let switch = session.switch_name().to_string();
    let healthy = session.exec(GOES_STATUS_CMD).await.is_some_and(|o| !o.to_lowercase().contains("not ok"));
    if !healthy {
        session.fail(format!("On switch {switch} goes status is not ok"));
    }
}

/// Installer output that signals a failed install.
pub(crate) fn installer_failed(out: &str) -> bool {
    out.contains("timeout") || out.contains("exit status 1")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
