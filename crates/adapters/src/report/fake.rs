// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake reporting service for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use async_trait::async_trait;
use reporter_core::{
    ReportError, ReportingService, RunFinished, RunStarted, RunStepFinished, RunStepLogs,
    RunStepStarted, RunStepsAdded,
};
use std::sync::{Arc, Mutex};

/// Recorded reporting call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportCall {
    RunStarted(RunStarted),
    RunFinished(RunFinished),
    RunStepsAdded(RunStepsAdded),
    RunStepStarted(RunStepStarted),
    RunStepFinished(RunStepFinished),
    RunStepLogs(RunStepLogs),
}

#[derive(Default)]
struct FakeState {
    calls: Vec<ReportCall>,
    reject_status: Option<u16>,
}

/// Fake reporting service that records every call
#[derive(Clone, Default)]
pub struct FakeReportingService {
    inner: Arc<Mutex<FakeState>>,
}

impl FakeReportingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every later call with this status, or accept again with `None`
    pub fn reject_with(&self, status: Option<u16>) {
        self.state().reject_status = status;
    }

    /// Get all recorded calls, including rejected ones
    pub fn calls(&self) -> Vec<ReportCall> {
        self.state().calls.clone()
    }

    /// Logs events in call order
    pub fn logs(&self) -> Vec<RunStepLogs> {
        self.state()
            .calls
            .iter()
            .filter_map(|call| match call {
                ReportCall::RunStepLogs(event) => Some(event.clone()),
                _ => None,
            })
            .collect()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: ReportCall) -> Result<(), ReportError> {
        let mut state = self.state();
        state.calls.push(call);
        match state.reject_status {
            Some(status) => Err(ReportError::Status(status)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ReportingService for FakeReportingService {
    async fn run_started(&self, event: RunStarted) -> Result<(), ReportError> {
        self.record(ReportCall::RunStarted(event))
    }

    async fn run_finished(&self, event: RunFinished) -> Result<(), ReportError> {
        self.record(ReportCall::RunFinished(event))
    }

    async fn run_steps_added(&self, event: RunStepsAdded) -> Result<(), ReportError> {
        self.record(ReportCall::RunStepsAdded(event))
    }

    async fn run_step_started(&self, event: RunStepStarted) -> Result<(), ReportError> {
        self.record(ReportCall::RunStepStarted(event))
    }

    async fn run_step_finished(&self, event: RunStepFinished) -> Result<(), ReportError> {
        self.record(ReportCall::RunStepFinished(event))
    }

    async fn run_step_logs(&self, event: RunStepLogs) -> Result<(), ReportError> {
        self.record(ReportCall::RunStepLogs(event))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
