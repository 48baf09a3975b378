// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::LogMode;

use super::{installer_failed, require_status_ok};
use crate::session::Session;
use crate::verifier::Verifier;

const FLASHROM: &str =
    "/usr/local/sbin/flashrom -p internal -l /usr/local/share/flashrom/layouts/platina-mk1.xml -i bios";

/// Install a goes build (or flash coreboot) and keep the daemon healthy.
#[derive(Debug, Clone, Deserialize)]
pub struct GoesUpgrade {
    /// Prefix of the installer path, including any trailing separator.
    #[serde(default)]
    pub installer_dir: String,
    #[serde(default)]
    pub installer_name: String,
    #[serde(default)]
    pub coreboot: bool,
}

/// The value following `version:` in `goes upgrade -r` output.
pub(crate) fn coreboot_version(out: &str) -> Option<&str> {
    out.lines()
        .map(str::trim)
        .find(|line| line.to_lowercase().contains("version:"))
        .and_then(|line| line.split_whitespace().nth(1))
}

impl GoesUpgrade {
    fn install_cmd(&self) -> String {
        let installer = format!("{}./{}", self.installer_dir, self.installer_name);
        if self.coreboot {
            format!("{FLASHROM} -w {installer} -A -V")
        } else {
            installer
        }
    }
}

async fn read_version<R: CommandRunner>(session: &mut Session<R>) -> String {
    let out = session.exec("goes upgrade -r").await.unwrap_or_default();
    coreboot_version(&out).unwrap_or("None").to_string()
}

#[async_trait]
impl Verifier for GoesUpgrade {
    const NAME: &'static str = "goes-upgrade";
    const SUMMARY: &'static str = "Install goes or coreboot and check status before and after";

    fn log_mode(&self) -> LogMode {
        LogMode::Append
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let switch = session.switch_name().to_string();

        require_status_ok(session).await;
        let before = read_version(session).await;

        if session.exec(&self.install_cmd()).await.is_some_and(|o| installer_failed(&o)) {
            session.fail(format!("On switch {switch} goes upgrade failed"));
        }

        require_status_ok(session).await;
        let after = read_version(session).await;
        session.note(format!("On switch {switch}, upgraded core boot version from {before} to {after}"));
    }
}

#[cfg(test)]
#[path = "goes_upgrade_tests.rs"]
mod tests;
