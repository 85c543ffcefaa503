// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-step registry of log writers for one run

use crate::config::LogConfig;
use crate::event::StepLogLine;
use crate::id::{RunId, StepSafeId, StepTarget, Stream};
use crate::logs::{LogError, LogWriter};
use crate::sink::ChunkSink;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

type WriterKey = (StepSafeId, Stream);

struct RegistryState<S: ChunkSink> {
    writers: BTreeMap<WriterKey, Arc<LogWriter<S>>>,
    closed: bool,
}

/// Lazily creates one writer per step and stream, and closes them together
pub struct LogRegistry<S: ChunkSink> {
    run_id: RunId,
    sink: S,
    config: LogConfig,
    state: Mutex<RegistryState<S>>,
}

impl<S: ChunkSink> LogRegistry<S> {
    pub fn new(run_id: impl Into<RunId>, sink: S, config: LogConfig) -> Result<Self, LogError> {
        let run_id = run_id.into();
        if run_id.is_empty() {
            return Err(LogError::MissingRunId);
        }
        Ok(Self {
            run_id,
            sink,
            config,
            state: Mutex::new(RegistryState {
                writers: BTreeMap::new(),
                closed: false,
            }),
        })
    }

    /// Writer for a step's stream, created on first use
    pub async fn writer(
        &self,
        step_safe_id: &StepSafeId,
        stream: &Stream,
    ) -> Result<Arc<LogWriter<S>>, LogError> {
        let mut state = self.state.lock().await;
        let target = StepTarget {
            run_id: self.run_id.clone(),
            step_safe_id: step_safe_id.clone(),
            stream: stream.clone(),
        };
        if state.closed {
            return Err(LogError::Closed(target));
        }

        let key = (step_safe_id.clone(), stream.clone());
        if let Some(writer) = state.writers.get(&key) {
            return Ok(Arc::clone(writer));
        }

        let writer = Arc::new(LogWriter::new(target, self.sink.clone(), &self.config)?);
        state.writers.insert(key, Arc::clone(&writer));
        Ok(writer)
    }

    /// Append a line to its step's log, adding a trailing newline if missing
    pub async fn record(&self, line: &StepLogLine) -> Result<usize, LogError> {
        let writer = self.writer(line.step_safe_id(), line.stream()).await?;
        let message = line.message();
        if message.ends_with('\n') {
            writer.write(message.as_bytes()).await
        } else {
            let mut bytes = Vec::with_capacity(message.len() + 1);
            bytes.extend_from_slice(message.as_bytes());
            bytes.push(b'\n');
            writer.write(&bytes).await
        }
    }

    /// Close every writer, returning the first error.
    ///
    /// All writers are closed even when one fails. The registry accepts no
    /// new writers afterwards.
    pub async fn close_all(&self) -> Result<(), LogError> {
        let writers = {
            let mut state = self.state.lock().await;
            state.closed = true;
            std::mem::take(&mut state.writers)
        };

        let mut first_error = None;
        for (_, writer) in writers {
            if let Err(e) = writer.close().await {
                tracing::warn!(
                    log_target = %writer.target(),
                    error = %e,
                    "failed to close log writer"
                );
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Number of open writers
    pub async fn len(&self) -> usize {
        self.state.lock().await.writers.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.writers.is_empty()
    }

    pub fn run_id(&self) -> &RunId {
        &self.run_id
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
