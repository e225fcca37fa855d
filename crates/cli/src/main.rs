// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use helpers::telemetry::setup_tracing;
use std::io;
use tracing::info;

mod arithmetic;
mod calculus;
mod cli;
mod compare;
mod config;
mod division;
pub mod helpers;

fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    setup_tracing(cli.log_level(), config.log_filter.as_deref())?;
    info!(?config, "configuration loaded");

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    cli.execute(&config, stdin, &mut stdout)
}

pub fn main() {
    // Execute the cli
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
