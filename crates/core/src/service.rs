// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reporting service trait for run lifecycle events

use crate::event::{
    RunFinished, RunStarted, RunStepFinished, RunStepLogs, RunStepStarted, RunStepsAdded,
};
use async_trait::async_trait;
use thiserror::Error;

/// Errors from reporting operations
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid collector configuration: {0}")]
    InvalidConfig(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("collector returned invalid status code: {0}")]
    Status(u16),
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Adapter for delivering run events to a remote collector
#[async_trait]
pub trait ReportingService: Clone + Send + Sync + 'static {
    async fn run_started(&self, event: RunStarted) -> Result<(), ReportError>;

    async fn run_finished(&self, event: RunFinished) -> Result<(), ReportError>;

    /// Announce steps; must happen before anything is reported about them
    async fn run_steps_added(&self, event: RunStepsAdded) -> Result<(), ReportError>;

    async fn run_step_started(&self, event: RunStepStarted) -> Result<(), ReportError>;

    async fn run_step_finished(&self, event: RunStepFinished) -> Result<(), ReportError>;

    async fn run_step_logs(&self, event: RunStepLogs) -> Result<(), ReportError>;
}
