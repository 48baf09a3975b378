// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pass/fail verdict with an accumulated failure narrative.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusLabel {
    Passed,
    Failed,
}

impl StatusLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Passed => "Passed",
            StatusLabel::Failed => "Failed",
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Starts passed. Any failure flips it for good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    passed: bool,
    narrative: String,
}

impl Default for Verdict {
    fn default() -> Self {
        Self { passed: true, narrative: String::new() }
    }
}

impl Verdict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed assertion as one narrative line.
    pub fn fail(&mut self, line: impl AsRef<str>) {
        self.narrative.push_str(line.as_ref());
        self.narrative.push('\n');
        self.passed = false;
    }

    /// Record a failed assertion without a line break.
    ///
    /// The next narrative entry runs on from this one.
    pub fn fail_inline(&mut self, text: impl AsRef<str>) {
        self.narrative.push_str(text.as_ref());
        self.passed = false;
    }

    /// Append informational text without affecting the verdict.
    pub fn note(&mut self, text: impl AsRef<str>) {
        self.narrative.push_str(text.as_ref());
    }

    /// Fold a sub-check's verdict into this one.
    pub fn absorb(&mut self, other: Verdict) {
        self.passed &= other.passed;
        self.narrative.push_str(&other.narrative);
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    pub fn status(&self) -> StatusLabel {
        if self.passed {
            StatusLabel::Passed
        } else {
            StatusLabel::Failed
        }
    }
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
