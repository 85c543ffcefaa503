// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! reporter - ship pipeline step logs and lifecycle events to a collector

mod commands;
mod output;
mod settings;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{logs, run, step};
use output::PrintReporter;
use settings::{CollectorArgs, Settings};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reporter",
    version,
    about = "Ship pipeline step logs and run events to a collector"
)]
struct Cli {
    /// TOML config file with [collector] and [logs] tables
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(flatten)]
    collector: CollectorArgs,

    /// Print what would be sent as JSON lines instead of contacting the collector
    #[arg(long, global = true)]
    dry_run: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ship stdin as a step's log chunks
    Logs(logs::LogsArgs),
    /// Report run lifecycle events
    Run(run::RunArgs),
    /// Report step lifecycle events
    Step(step::StepArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let settings = Settings::load(cli.config.as_deref(), cli.collector)?;

    match cli.command {
        Commands::Logs(args) => {
            let config = args.log_config(&settings.logs)?;
            let target = args.target()?;
            if cli.dry_run {
                logs::ship_stdin_dry_run(target, &config).await
            } else {
                logs::ship_stdin_to_collector(target, &config, &settings.collector()?).await
            }
        }
        Commands::Run(args) => {
            if cli.dry_run {
                run::handle(args.command, &PrintReporter).await
            } else {
                run::handle(args.command, &settings.reporting_service()?).await
            }
        }
        Commands::Step(args) => {
            if cli.dry_run {
                step::handle(args.command, &PrintReporter).await
            } else {
                step::handle(args.command, &settings.reporting_service()?).await
            }
        }
    }
}

fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
