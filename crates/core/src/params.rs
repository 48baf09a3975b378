// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers for the flat parameter sets modules receive.

use serde::{Deserialize, Deserializer};

/// A list parameter, given either as `"1,3,5"` or as `["1", 3, "5"]`.
///
/// Entries are trimmed and empty entries dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvList(Vec<String>);

impl CsvList {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }

    pub fn parse(text: &str) -> Self {
        Self::new(text.split(',').map(str::trim).filter(|s| !s.is_empty()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.iter().any(|s| s == item)
    }

    pub fn position(&self, item: &str) -> Option<usize> {
        self.0.iter().position(|s| s == item)
    }

    /// Entries other than `item`, in order.
    pub fn without(&self, item: &str) -> Vec<&str> {
        self.0.iter().map(String::as_str).filter(|s| *s != item).collect()
    }
}

impl<'a> IntoIterator for &'a CsvList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListItem {
    Text(String),
    Number(i64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawList {
    Csv(String),
    Items(Vec<ListItem>),
}

impl<'de> Deserialize<'de> for CsvList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawList::deserialize(deserializer)? {
            RawList::Csv(text) => CsvList::parse(&text),
            RawList::Items(items) => CsvList::new(
                items
                    .into_iter()
                    .map(|item| match item {
                        ListItem::Text(s) => s.trim().to_string(),
                        ListItem::Number(n) => n.to_string(),
                    })
                    .filter(|s| !s.is_empty()),
            ),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(u64),
    Text(String),
}

/// Deserialize a count or duration given either as `5` or as `"5"`.
pub fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Number(n) => Ok(n),
        RawNumber::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Last two characters of a switch name, e.g. `29` for `invader29`.
///
/// Used as the third octet of per-switch loopback addresses.
pub fn switch_id(name: &str) -> &str {
    let start = name.char_indices().rev().nth(1).map(|(i, _)| i).unwrap_or(0);
    &name[start..]
}

/// `192.168.{id}.1`, the dummy loopback address of a switch.
pub fn loopback_ip(name: &str) -> String {
    format!("192.168.{}.1", switch_id(name))
}

/// Leaf and spine membership of the fabric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub leaf_list: CsvList,
    #[serde(default)]
    pub spine_list: CsvList,
}

impl Topology {
    pub fn is_leaf(&self, switch: &str) -> bool {
        self.leaf_list.contains(switch)
    }

    pub fn is_spine(&self, switch: &str) -> bool {
        self.spine_list.contains(switch)
    }

    pub fn leaf_index(&self, switch: &str) -> Option<usize> {
        self.leaf_list.position(switch)
    }

    pub fn spine_index(&self, switch: &str) -> Option<usize> {
        self.spine_list.position(switch)
    }

    /// Every leaf except `switch`, in list order.
    pub fn other_leaves(&self, switch: &str) -> Vec<&str> {
        self.leaf_list.without(switch)
    }

    /// Pick the entry of a per-role list (spine first) matching the switch's
    /// position in its role list.
    pub fn role_value<'a>(&self, switch: &str, spine: &'a CsvList, leaf: &'a CsvList) -> Option<&'a str> {
        match self.spine_list.position(switch) {
            Some(i) => spine.get(i),
            None => self.leaf_list.position(switch).and_then(|i| leaf.get(i)),
        }
    }
}

/// Subport numbers used on a breakout-capable port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subports {
    /// `1`
    Single,
    /// `1,3`
    TwoLane,
    /// `1..=4`
    Quad,
}

impl Subports {
    /// `is_lane2_count2` only matters on a port split into subports.
    pub fn from_flags(is_subports: bool, is_lane2_count2: bool) -> Self {
        match (is_subports, is_lane2_count2) {
            (false, _) => Subports::Single,
            (true, false) => Subports::Quad,
            (true, true) => Subports::TwoLane,
        }
    }

    pub fn ports(&self) -> &'static [&'static str] {
        match self {
            Subports::Single => &["1"],
            Subports::TwoLane => &["1", "3"],
            Subports::Quad => &["1", "2", "3", "4"],
        }
    }
}

/// Non-blank lines of a configuration text blob, trimmed.
pub fn config_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
