// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chunk sink capability that log writers deliver through

use crate::event::RunStepLogs;
use crate::logs::LogChunk;
use crate::service::{ReportError, ReportingService};
use async_trait::async_trait;
use thiserror::Error;

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeChunkSink;

/// Errors from chunk delivery
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("chunk rejected with status {status}")]
    Rejected { status: u16 },
    #[error("delivery failed: {0}")]
    Other(String),
}

impl From<ReportError> for SinkError {
    fn from(e: ReportError) -> Self {
        match e {
            ReportError::Transport(msg) => SinkError::Transport(msg),
            ReportError::Status(status) => SinkError::Rejected { status },
            other => SinkError::Other(other.to_string()),
        }
    }
}

/// Destination for numbered log chunks.
///
/// One sink is shared by every writer, so implementations must tolerate
/// concurrent deliveries from different writers.
#[async_trait]
pub trait ChunkSink: Clone + Send + Sync + 'static {
    /// Deliver one chunk
    async fn deliver(&self, chunk: LogChunk) -> Result<(), SinkError>;
}

/// Delivers chunks as `RunStepLogs` events through a reporting service
#[derive(Clone)]
pub struct ServiceSink<R> {
    service: R,
}

impl<R> ServiceSink<R> {
    pub fn new(service: R) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &R {
        &self.service
    }
}

#[async_trait]
impl<R: ReportingService> ChunkSink for ServiceSink<R> {
    async fn deliver(&self, chunk: LogChunk) -> Result<(), SinkError> {
        self.service
            .run_step_logs(RunStepLogs::from(chunk))
            .await
            .map_err(SinkError::from)
    }
}

impl From<LogChunk> for RunStepLogs {
    fn from(chunk: LogChunk) -> Self {
        let number = chunk.number();
        let (target, payload) = chunk.into_parts();
        RunStepLogs {
            run_id: target.run_id,
            step_safe_id: target.step_safe_id,
            logs: payload,
            stream: target.stream,
            chunk: number,
        }
    }
}

#[cfg(test)]
#[path = "service_sink_tests.rs"]
mod tests;
