// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;
use clap::Args;

use crate::output::{format_module_list, OutputFormat};

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub fn handle(args: ListArgs) -> Result<()> {
    print!("{}", format_module_list(&swt_suite::modules(), args.format)?);
    Ok(())
}
