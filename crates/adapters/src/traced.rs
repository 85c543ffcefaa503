// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use async_trait::async_trait;
use reporter_core::{
    ChunkSink, LogChunk, ReportError, ReportingService, RunFinished, RunStarted, RunStepFinished,
    RunStepLogs, RunStepStarted, RunStepsAdded, SinkError,
};
use std::future::Future;
use std::time::Instant;
use tracing::Instrument;

/// Wrapper that adds tracing to any ChunkSink
#[derive(Clone)]
pub struct TracedChunkSink<S> {
    inner: S,
}

impl<S> TracedChunkSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: ChunkSink> ChunkSink for TracedChunkSink<S> {
    async fn deliver(&self, chunk: LogChunk) -> Result<(), SinkError> {
        let span = tracing::info_span!(
            "sink.deliver",
            log_target = %chunk.target(),
            chunk = chunk.number(),
        );

        async move {
            let bytes = chunk.len();
            tracing::debug!(bytes, "delivering");

            // Precondition: numbering starts at 1
            if chunk.number() == 0 {
                tracing::error!("chunk number zero");
                return Err(SinkError::Other("chunk numbers start at 1".to_string()));
            }

            let start = Instant::now();
            let result = self.inner.deliver(chunk).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(()) => tracing::debug!(bytes, elapsed_ms, "chunk delivered"),
                Err(e) => tracing::error!(bytes, elapsed_ms, error = %e, "delivery failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any ReportingService
#[derive(Clone)]
pub struct TracedReportingService<R> {
    inner: R,
}

impl<R> TracedReportingService<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

async fn timed<F>(operation: &'static str, call: F) -> Result<(), ReportError>
where
    F: Future<Output = Result<(), ReportError>>,
{
    let start = Instant::now();
    let result = call.await;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(()) => tracing::info!(elapsed_ms, "{operation} reported"),
        Err(e) => tracing::error!(elapsed_ms, error = %e, "{operation} failed"),
    }
    result
}

#[async_trait]
impl<R: ReportingService> ReportingService for TracedReportingService<R> {
    async fn run_started(&self, event: RunStarted) -> Result<(), ReportError> {
        let span = tracing::info_span!("report.run_started", run_id = %event.run_id);
        timed("run started", self.inner.run_started(event))
            .instrument(span)
            .await
    }

    async fn run_finished(&self, event: RunFinished) -> Result<(), ReportError> {
        let span = tracing::info_span!(
            "report.run_finished",
            run_id = %event.run_id,
            result = ?event.result,
        );
        timed("run finished", self.inner.run_finished(event))
            .instrument(span)
            .await
    }

    async fn run_steps_added(&self, event: RunStepsAdded) -> Result<(), ReportError> {
        let span = tracing::info_span!(
            "report.run_steps_added",
            run_id = %event.run_id,
            steps = event.steps.len(),
        );
        timed("steps added", self.inner.run_steps_added(event))
            .instrument(span)
            .await
    }

    async fn run_step_started(&self, event: RunStepStarted) -> Result<(), ReportError> {
        let span = tracing::info_span!(
            "report.run_step_started",
            run_id = %event.run_id,
            step = %event.step_safe_id,
        );
        timed("step started", self.inner.run_step_started(event))
            .instrument(span)
            .await
    }

    async fn run_step_finished(&self, event: RunStepFinished) -> Result<(), ReportError> {
        let span = tracing::info_span!(
            "report.run_step_finished",
            run_id = %event.run_id,
            step = %event.step_safe_id,
            result = ?event.result,
        );
        timed("step finished", self.inner.run_step_finished(event))
            .instrument(span)
            .await
    }

    async fn run_step_logs(&self, event: RunStepLogs) -> Result<(), ReportError> {
        // Chunks are frequent; keep them out of info output
        let span = tracing::debug_span!(
            "report.run_step_logs",
            run_id = %event.run_id,
            step = %event.step_safe_id,
            stream = %event.stream,
            chunk = event.chunk,
        );
        let bytes = event.logs.len();
        let result = self.inner.run_step_logs(event).instrument(span).await;
        if let Err(e) = &result {
            tracing::warn!(bytes, error = %e, "logs not reported");
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
