// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use swt_adapters::ProcessRunner;
use swt_suite::SuiteError;

use crate::exit_error::ExitError;
use crate::params::{self, Overrides};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Module name (see `swt list`)
    pub module: String,

    /// Parameter file, TOML if it ends in `.toml`, JSON otherwise
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Inline JSON parameters, applied over the file
    #[arg(long, value_name = "JSON")]
    pub params_json: Option<String>,

    /// Switch under test
    #[arg(long)]
    pub switch_name: Option<String>,

    /// Directory for the execution log
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// List the commands that would run without running them
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn handle(args: RunArgs) -> Result<()> {
    let loaded = params::load(args.params.as_deref(), args.params_json.as_deref())?;
    let overrides = Overrides { switch_name: args.switch_name, log_dir: args.log_dir, dry_run: args.dry_run };
    let params = Value::Object(params::apply(loaded, overrides));

    tracing::info!(module = %args.module, "running module");
    let outcome = match swt_suite::run_module(&args.module, &params, ProcessRunner::new()).await {
        Err(SuiteError::UnknownModule(name)) => {
            return Err(ExitError::new(2, format!("unknown module: {name} (see `swt list`)")).into());
        }
        result => result.with_context(|| format!("{} did not complete", args.module))?,
    };

    println!("{}", crate::output::format_outcome(&outcome)?);
    Ok(())
}
