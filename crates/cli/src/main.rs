// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! swt: run switch verifiers and provisioning tasks.

mod color;
mod commands;
mod exit_error;
mod output;
mod params;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::exit_error::ExitError;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_GIT_HASH"), ")");

#[derive(Parser)]
#[command(name = "swt", version = VERSION, styles = color::styles())]
#[command(about = "Run switch verifiers and provisioning tasks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one module and print its result as JSON
    Run(commands::run::RunArgs),
    /// List the available modules
    List(commands::list::ListArgs),
}

/// Diagnostics go to stderr; stdout carries only the result.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(swt_core::env::log_filter()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => commands::run::handle(args).await,
        Commands::List(args) => commands::list::handle(args),
    };

    if let Err(e) = result {
        if let Some(exit) = e.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("error: {}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
