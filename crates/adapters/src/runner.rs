// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use swt_shell::{ExecError, Executor};

/// Runs one command line and returns what it printed.
#[async_trait]
pub trait CommandRunner: Clone + Send + Sync + 'static {
    /// Stdout with trailing whitespace stripped if non-empty, else stderr,
    /// else `None`. Exit status is ignored.
    async fn run(&self, line: &str) -> Option<String>;
}

/// Runs commands as real subprocesses on the local switch.
///
/// A command that cannot be split or spawned yields its error text, the same
/// way a shell would print the failure on stderr.
#[derive(Clone, Debug, Default)]
pub struct ProcessRunner {
    executor: Executor,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, line: &str) -> Option<String> {
        match self.executor.run(line).await {
            Ok(output) => {
                tracing::debug!(cmd = %line, exit_code = output.exit_code, "command finished");
                output.captured()
            }
            Err(ExecError::Lex(e)) => {
                tracing::warn!(cmd = %line, error = %e, "command line could not be split");
                Some(e.context(line))
            }
            Err(e) => {
                tracing::warn!(cmd = %line, error = %e, "command could not run");
                Some(e.to_string())
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::CommandRunner;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::Arc;

    struct Rule {
        pattern: String,
        /// Popped front to back; the last response repeats.
        responses: VecDeque<Option<String>>,
    }

    #[derive(Default)]
    struct FakeRunnerState {
        rules: Vec<Rule>,
        calls: Vec<String>,
        ticks: u32,
    }

    /// Scripted runner for testing.
    ///
    /// A command gets the response of the first registered pattern it
    /// contains, or `None` when nothing matches. `date` commands return a
    /// timestamp that advances one second per call.
    #[derive(Clone, Default)]
    pub struct FakeRunner {
        inner: Arc<Mutex<FakeRunnerState>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(&self, pattern: &str, output: &str) -> &Self {
            self.respond_seq(pattern, [Some(output)])
        }

        pub fn respond_none(&self, pattern: &str) -> &Self {
            self.respond_seq(pattern, [None])
        }

        /// Successive responses for repeated matches of the same pattern.
        pub fn respond_seq<'a>(
            &self,
            pattern: &str,
            outputs: impl IntoIterator<Item = Option<&'a str>>,
        ) -> &Self {
            let responses = outputs.into_iter().map(|o| o.map(str::to_string)).collect();
            self.inner.lock().rules.push(Rule { pattern: pattern.to_string(), responses });
            self
        }

        /// Every command line run so far, `date` calls included.
        pub fn calls(&self) -> Vec<String> {
            self.inner.lock().calls.clone()
        }

        /// Command lines run so far, excluding timestamp lookups.
        pub fn commands(&self) -> Vec<String> {
            self.inner.lock().calls.iter().filter(|c| !c.starts_with("date ")).cloned().collect()
        }

        pub fn count(&self, pattern: &str) -> usize {
            self.inner.lock().calls.iter().filter(|c| c.contains(pattern)).count()
        }
    }

    #[async_trait]
    impl CommandRunner for FakeRunner {
        async fn run(&self, line: &str) -> Option<String> {
            let mut state = self.inner.lock();
            state.calls.push(line.to_string());

            if line.starts_with("date ") {
                let t = state.ticks;
                state.ticks += 1;
                return Some(format!("20261018{:02}:{:02}:{:02}", t / 3600 % 24, t / 60 % 60, t % 60));
            }

            let rule = state.rules.iter_mut().find(|r| line.contains(r.pattern.as_str()))?;
            if rule.responses.len() > 1 {
                rule.responses.pop_front().flatten()
            } else {
                rule.responses.front().cloned().flatten()
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeRunner;

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
