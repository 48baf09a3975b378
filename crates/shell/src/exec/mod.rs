// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution of split command lines.

mod error;
mod result;
mod run;

pub use error::ExecError;
pub use result::CommandOutput;

/// Runs command lines as direct subprocesses, one at a time.
///
/// ```ignore
/// let output = Executor::new().run("goes status").await?;
/// println!("{:?}", output.captured());
/// ```
/// Processes inherit the caller's working directory and environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Executor;

impl Executor {
    pub fn new() -> Self {
        Self
    }

    /// Split `line` and run it to completion, capturing both streams.
    ///
    /// The exit status is recorded but never turned into an error.
    pub async fn run(&self, line: &str) -> Result<CommandOutput, ExecError> {
        run::execute_line(line).await
    }
}

#[cfg(test)]
#[path = "../exec_tests/mod.rs"]
mod tests;
