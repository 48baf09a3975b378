// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use serde::Deserialize;
use swt_adapters::{CommandRunner, KvClient};
use swt_core::TaskReport;

use crate::verifier::Task;

/// Components reported by `goes version` and `goes tag`, in output order.
const COMPONENTS: [&str; 3] = ["go", "fe1", "firmware-fe1a"];

/// Save the switch's goes version and tag details in the results store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreGoesDetails {
    #[serde(default)]
    pub hash_name: String,
    /// `goes version` output, `component: sha1` per line.
    #[serde(default)]
    pub version_details: String,
    /// `goes tag` output, `component: tag` per line.
    #[serde(default)]
    pub tag_details: String,
}

/// Values of `key: value` lines. Lines without the separator are dropped.
fn values(text: &str) -> Vec<&str> {
    text.lines().filter_map(|line| line.split_once(": ")).map(|(_, value)| value).collect()
}

impl StoreGoesDetails {
    /// Stores nothing unless all three components are present.
    async fn store<R: CommandRunner>(&self, kv: &KvClient<R>, switch: &str, kind: &str, text: &str) {
        let values = values(text);
        if values.len() != COMPONENTS.len() {
            tracing::warn!(%switch, kind, found = values.len(), "unexpected goes details, not stored");
            return;
        }
        for (component, value) in COMPONENTS.iter().zip(values) {
            kv.hset(&self.hash_name, &format!("{switch}.version.{component}.{kind}"), value).await;
        }
    }
}

#[async_trait]
impl Task for StoreGoesDetails {
    const NAME: &'static str = "store-goes-details";
    const SUMMARY: &'static str = "Store goes version and tag details in the results store";

    async fn execute<R: CommandRunner>(&self, switch_name: &str, runner: &R) -> TaskReport {
        let kv = KvClient::from_env(runner.clone());
        self.store(&kv, switch_name, "sha1", &self.version_details).await;
        self.store(&kv, switch_name, "tag", &self.tag_details).await;
        TaskReport::msg(format!("Stored the test result in hash: {}", self.hash_name))
    }
}

#[cfg(test)]
#[path = "store_goes_details_tests.rs"]
mod tests;
