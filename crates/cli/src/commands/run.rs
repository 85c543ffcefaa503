// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reporter run` - run lifecycle events

use super::ResultArg;
use anyhow::Result;
use clap::{Args, Subcommand};
use reporter_core::{ReportingService, RunFinished, RunStarted};

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(subcommand)]
    pub command: RunCommand,
}

#[derive(Subcommand, Debug)]
pub enum RunCommand {
    /// Report that a run started
    Started {
        #[arg(long = "run", value_name = "RUN_ID")]
        run_id: String,
    },
    /// Report that a run finished
    Finished {
        #[arg(long = "run", value_name = "RUN_ID")]
        run_id: String,

        #[arg(long, value_enum)]
        result: ResultArg,
    },
}

pub async fn handle<R: ReportingService>(command: RunCommand, reporter: &R) -> Result<()> {
    match command {
        RunCommand::Started { run_id } => {
            require_run_id(&run_id)?;
            reporter
                .run_started(RunStarted {
                    run_id: run_id.into(),
                })
                .await?;
        }
        RunCommand::Finished { run_id, result } => {
            require_run_id(&run_id)?;
            reporter
                .run_finished(RunFinished {
                    run_id: run_id.into(),
                    result: result.into(),
                })
                .await?;
        }
    }
    Ok(())
}

pub(crate) fn require_run_id(run_id: &str) -> Result<()> {
    if run_id.is_empty() {
        anyhow::bail!("--run cannot be empty");
    }
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
