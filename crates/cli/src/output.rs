// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dry-run output for lifecycle events

use async_trait::async_trait;
use reporter_core::{
    ReportError, ReportingService, RunFinished, RunStarted, RunStepFinished, RunStepLogs,
    RunStepStarted, RunStepsAdded,
};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Printed<'a, T> {
    endpoint: &'a str,
    payload: &'a T,
}

/// Prints each event as `{"endpoint": ..., "payload": ...}` on stdout
#[derive(Clone, Copy, Debug, Default)]
pub struct PrintReporter;

impl PrintReporter {
    fn print<T: Serialize>(&self, endpoint: &str, payload: &T) -> Result<(), ReportError> {
        let line = serde_json::to_string(&Printed { endpoint, payload })?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}").map_err(|e| ReportError::Transport(e.to_string()))
    }
}

#[async_trait]
impl ReportingService for PrintReporter {
    async fn run_started(&self, event: RunStarted) -> Result<(), ReportError> {
        self.print("runstarted", &event)
    }

    async fn run_finished(&self, event: RunFinished) -> Result<(), ReportError> {
        self.print("runfinished", &event)
    }

    async fn run_steps_added(&self, event: RunStepsAdded) -> Result<(), ReportError> {
        self.print("runstepsadded", &event)
    }

    async fn run_step_started(&self, event: RunStepStarted) -> Result<(), ReportError> {
        self.print("runstepstarted", &event)
    }

    async fn run_step_finished(&self, event: RunStepFinished) -> Result<(), ReportError> {
        self.print("runstepfinished", &event)
    }

    async fn run_step_logs(&self, event: RunStepLogs) -> Result<(), ReportError> {
        self.print("runsteplogs", &event)
    }
}
