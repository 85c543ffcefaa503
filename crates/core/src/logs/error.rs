// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for log writers

use crate::id::StepTarget;
use crate::sink::SinkError;
use thiserror::Error;

/// Errors from log writer operations
#[derive(Debug, Error)]
pub enum LogError {
    #[error("run id is required")]
    MissingRunId,
    #[error("flush interval must be greater than zero")]
    ZeroFlushInterval,
    #[error("no tokio runtime available to drive the flush scheduler")]
    NoRuntime,
    #[error("log writer for {0} is closed")]
    Closed(StepTarget),
    #[error("failed to deliver chunk {chunk} for {target}: {source}")]
    Delivery {
        target: StepTarget,
        chunk: u64,
        #[source]
        source: SinkError,
    },
}

impl LogError {
    /// Chunk number of a failed delivery
    pub fn failed_chunk(&self) -> Option<u64> {
        match self {
            LogError::Delivery { chunk, .. } => Some(*chunk),
            _ => None,
        }
    }
}
