// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::CommandRunner;
use swt_core::LogMode;

use super::{installer_failed, require_status_ok};
use crate::session::Session;
use crate::verifier::Verifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Upgrade,
    Downgrade,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Upgrade => "upgrade",
            Direction::Downgrade => "downgrade",
        })
    }
}

/// Alternate between two goes builds several times, checking the package
/// versions after each install.
///
/// A switch already on the upgrade build starts with a downgrade and runs
/// six installs; otherwise five, starting with an upgrade.
#[derive(Debug, Clone, Deserialize)]
pub struct UpgradeDowngrade {
    #[serde(default)]
    pub installer_dir: String,
    #[serde(default)]
    pub upgrade_installer_name: String,
    #[serde(default)]
    pub downgrade_installer_name: String,
    /// `goes hget <ch> packages` lines expected after an upgrade.
    #[serde(default)]
    pub upgrade_version: String,
    #[serde(default)]
    pub downgrade_version: String,
    #[serde(default)]
    pub platina_redis_channel: String,
}

impl UpgradeDowngrade {
    fn plan(&self, packages: &str) -> Vec<Direction> {
        let mut lines: Vec<&str> = self.upgrade_version.lines().collect();
        // The last line is left out when deciding which build is running.
        lines.pop();
        let on_upgrade = lines.iter().any(|v| packages.contains(v.trim()));
        if on_upgrade {
            [Direction::Downgrade, Direction::Upgrade].repeat(3)
        } else {
            let mut plan = [Direction::Upgrade, Direction::Downgrade].repeat(2);
            plan.push(Direction::Upgrade);
            plan
        }
    }

    async fn packages<R: CommandRunner>(&self, session: &mut Session<R>) -> String {
        session
            .exec(&format!("goes hget {} packages", self.platina_redis_channel))
            .await
            .unwrap_or_default()
    }

    async fn install<R: CommandRunner>(&self, session: &mut Session<R>, direction: Direction) {
        let switch = session.switch_name().to_string();
        let (installer, expected) = match direction {
            Direction::Upgrade => (&self.upgrade_installer_name, &self.upgrade_version),
            Direction::Downgrade => (&self.downgrade_installer_name, &self.downgrade_version),
        };

        require_status_ok(session).await;
        let cmd = format!("{}./{installer}", self.installer_dir);
        if session.exec(&cmd).await.is_some_and(|o| installer_failed(&o)) {
            session.fail(format!("On switch {switch} goes {direction} failed"));
        }

        let packages = self.packages(session).await;
        for version in expected.lines() {
            if !packages.contains(version.trim()) {
                session.fail(format!(
                    "On switch {switch}goes versions are not matching with given {direction} versions after {direction}"
                ));
            }
        }
        require_status_ok(session).await;
    }
}

#[async_trait]
impl Verifier for UpgradeDowngrade {
    const NAME: &'static str = "goes-upgrade-downgrade";
    const SUMMARY: &'static str = "Alternate goes upgrades and downgrades";

    fn log_mode(&self) -> LogMode {
        LogMode::Overwrite
    }

    async fn verify<R: CommandRunner>(&self, session: &mut Session<R>) {
        let packages = self.packages(session).await;
        for direction in self.plan(&packages) {
            self.install(session, direction).await;
        }
    }
}

#[cfg(test)]
#[path = "upgrade_downgrade_tests.rs"]
mod tests;
