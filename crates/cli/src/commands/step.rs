// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reporter step` - step lifecycle events

use super::run::require_run_id;
use super::ResultArg;
use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use reporter_core::{
    NewStep, ReportingService, RunStepFinished, RunStepStarted, RunStepsAdded, StepPhase,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct StepArgs {
    #[command(subcommand)]
    pub command: StepCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PhaseArg {
    Main,
    Final,
}

impl From<PhaseArg> for StepPhase {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::Main => StepPhase::MainSteps,
            PhaseArg::Final => StepPhase::FinalSteps,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum StepCommand {
    /// Announce a step before anything else is reported about it
    Added {
        #[arg(long = "run", value_name = "RUN_ID")]
        run_id: String,

        #[arg(long = "step", value_name = "STEP_SAFE_ID")]
        step_safe_id: String,

        /// Step name; defaults to the step id
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        display_name: Option<String>,

        #[arg(long, value_enum)]
        phase: Option<PhaseArg>,
    },
    /// Report that a step started
    Started {
        #[arg(long = "run", value_name = "RUN_ID")]
        run_id: String,

        #[arg(long = "step", value_name = "STEP_SAFE_ID")]
        step_safe_id: String,
    },
    /// Report that a step finished
    Finished {
        #[arg(long = "run", value_name = "RUN_ID")]
        run_id: String,

        #[arg(long = "step", value_name = "STEP_SAFE_ID")]
        step_safe_id: String,

        #[arg(long, value_enum)]
        result: ResultArg,

        #[arg(long)]
        message: Option<String>,

        #[arg(long)]
        artifact_url: Option<String>,

        #[arg(long)]
        package_url: Option<String>,

        /// Step duration in milliseconds
        #[arg(long, value_name = "MS")]
        duration_ms: Option<u64>,

        /// Pipeline definition to attach to the report
        #[arg(long, value_name = "FILE")]
        yaml_file: Option<PathBuf>,
    },
}

pub async fn handle<R: ReportingService>(command: StepCommand, reporter: &R) -> Result<()> {
    match command {
        StepCommand::Added {
            run_id,
            step_safe_id,
            name,
            display_name,
            phase,
        } => {
            require_ids(&run_id, &step_safe_id)?;
            let name = name.unwrap_or_else(|| step_safe_id.clone());
            let mut step = NewStep::new(step_safe_id, name);
            if let Some(display_name) = display_name {
                step = step.with_display_name(display_name);
            }
            if let Some(phase) = phase {
                step = step.with_phase(phase.into());
            }
            reporter
                .run_steps_added(RunStepsAdded {
                    run_id: run_id.into(),
                    steps: vec![step],
                })
                .await?;
        }
        StepCommand::Started {
            run_id,
            step_safe_id,
        } => {
            require_ids(&run_id, &step_safe_id)?;
            reporter
                .run_step_started(RunStepStarted {
                    run_id: run_id.into(),
                    step_safe_id: step_safe_id.into(),
                })
                .await?;
        }
        StepCommand::Finished {
            run_id,
            step_safe_id,
            result,
            message,
            artifact_url,
            package_url,
            duration_ms,
            yaml_file,
        } => {
            require_ids(&run_id, &step_safe_id)?;
            let mut event = RunStepFinished::new(run_id, step_safe_id, result.into());
            if let Some(message) = message {
                event = event.with_message(message);
            }
            if let Some(url) = artifact_url {
                event = event.with_artifact_url(url);
            }
            if let Some(url) = package_url {
                event = event.with_package_url(url);
            }
            if let Some(duration_ms) = duration_ms {
                event = event.with_duration_ms(duration_ms);
            }
            if let Some(path) = yaml_file {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                event = event.with_yaml_contents(contents);
            }
            reporter.run_step_finished(event).await?;
        }
    }
    Ok(())
}

fn require_ids(run_id: &str, step_safe_id: &str) -> Result<()> {
    require_run_id(run_id)?;
    if step_safe_id.is_empty() {
        anyhow::bail!("--step cannot be empty");
    }
    Ok(())
}

#[cfg(test)]
#[path = "step_tests.rs"]
mod tests;
