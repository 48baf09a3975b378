// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution records and the insertion-ordered log that holds them.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Reserved key holding `Passed` or `Failed`.
pub const RESULT_STATUS_KEY: &str = "result.status";
/// Reserved key holding the failure narrative.
pub const RESULT_DETAIL_KEY: &str = "result.detail";

/// Build the `"{switch} {timestamp} {command}"` record key.
///
/// A missing timestamp renders as `None`, the same as a missing value in
/// the log file.
pub fn record_key(switch: &str, timestamp: Option<&str>, command: &str) -> String {
    format!("{} {} {}", switch, timestamp.unwrap_or("None"), command)
}

/// One logged command and its (possibly truncated) output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRecord {
    pub key: String,
    pub value: Option<String>,
}

impl ExecutionRecord {
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self { key: key.into(), value }
    }
}

/// Append-only list of records in call order.
///
/// Duplicate keys are kept as separate entries. Serializes as a JSON object
/// whose members appear in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionLog {
    records: Vec<ExecutionRecord>,
}

impl ExecutionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: Option<String>) {
        self.records.push(ExecutionRecord::new(key, value));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionRecord> {
        self.records.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.key.as_str())
    }

    /// Most recent record stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ExecutionRecord> {
        self.records.iter().rev().find(|r| r.key == key)
    }

    pub fn last(&self) -> Option<&ExecutionRecord> {
        self.records.last()
    }
}

impl<'a> IntoIterator for &'a ExecutionLog {
    type Item = &'a ExecutionRecord;
    type IntoIter = std::slice::Iter<'a, ExecutionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Serialize for ExecutionLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.key, &record.value)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
