// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Which commands are recorded without being run.

/// Commands matching a rule are logged with an absent result and never
/// executed. Dry-run mode suppresses everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuppressPolicy {
    /// A command is suppressed when it contains every part of any rule.
    rules: Vec<Vec<String>>,
    dry_run: bool,
}

impl SuppressPolicy {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn skip_containing(self, part: &str) -> Self {
        self.skip_containing_all(&[part])
    }

    pub fn skip_containing_all(mut self, parts: &[&str]) -> Self {
        self.rules.push(parts.iter().map(|p| p.to_string()).collect());
        self
    }

    pub fn dry_run(mut self, on: bool) -> Self {
        self.dry_run |= on;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn suppresses(&self, cmd: &str) -> bool {
        self.dry_run || self.rules.iter().any(|rule| rule.iter().all(|p| cmd.contains(p.as_str())))
    }
}

#[cfg(test)]
#[path = "suppress_tests.rs"]
mod tests;
