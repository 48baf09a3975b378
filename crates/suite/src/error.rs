// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors that stop a module before or after its command script.
///
/// Failed assertions are never errors; they end up in the verdict.
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("unknown module: {0}")]
    UnknownModule(String),

    #[error("invalid parameters for {module}: {source}")]
    Params {
        module: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("no log directory: pass log_dir_path or set SWT_LOG_DIR")]
    MissingLogDir,

    #[error("failed to write log file: {0}")]
    Io(#[from] std::io::Error),
}
