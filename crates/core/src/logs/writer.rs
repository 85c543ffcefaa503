// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log writer: buffer, sequencer, and flush scheduler behind one surface

use super::buffer::LogBuffer;
use super::error::LogError;
use super::scheduler::FlushScheduler;
use crate::config::LogConfig;
use crate::id::StepTarget;
use crate::sink::ChunkSink;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex as StdMutex, Weak};
use tokio::sync::Mutex;

/// Lifecycle of a writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriterState {
    /// Scheduler active, writes and flushes accepted
    Running,
    /// Scheduler being cancelled, final flush pending
    Closing,
    Closed,
}

struct Guarded<S> {
    buffer: LogBuffer<S>,
    state: WriterState,
}

impl<S: ChunkSink> Guarded<S> {
    fn ensure_running(&self) -> Result<(), LogError> {
        match self.state {
            WriterState::Running => Ok(()),
            WriterState::Closing | WriterState::Closed => {
                Err(LogError::Closed(self.buffer.target().clone()))
            }
        }
    }
}

/// Ships everything written to it as numbered chunks.
///
/// Buffers writes and flushes every flush interval from a background task.
/// [`close`](Self::close) stops that task and flushes whatever is left; it
/// is the owner's responsibility to call it.
pub struct LogWriter<S: ChunkSink> {
    target: StepTarget,
    inner: Arc<Mutex<Guarded<S>>>,
    scheduler: StdMutex<Option<FlushScheduler>>,
}

impl<S: ChunkSink> LogWriter<S> {
    /// Create a writer and start its flush scheduler.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(target: StepTarget, sink: S, config: &LogConfig) -> Result<Self, LogError> {
        target.validate()?;
        if config.flush_interval.is_zero() {
            return Err(LogError::ZeroFlushInterval);
        }
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| LogError::NoRuntime)?;

        let inner = Arc::new(Mutex::new(Guarded {
            buffer: LogBuffer::new(target.clone(), sink, config.max_chunk_size),
            state: WriterState::Running,
        }));

        let weak = Arc::downgrade(&inner);
        let scheduler = FlushScheduler::start(&runtime, config.flush_interval, move || {
            scheduled_flush(weak.clone())
        });

        tracing::debug!(
            log_target = %target,
            max_chunk_size = config.max_chunk_size.get(),
            flush_interval_ms = config.flush_interval.as_millis() as u64,
            "log writer started"
        );

        Ok(Self {
            target,
            inner,
            scheduler: StdMutex::new(Some(scheduler)),
        })
    }

    /// Buffer `bytes`, shipping full chunks as the threshold is crossed.
    ///
    /// The input is always accepted in full; a delivery error for a chunk cut
    /// during this call is still returned.
    pub async fn write(&self, bytes: &[u8]) -> Result<usize, LogError> {
        let mut guard = self.inner.lock().await;
        guard.ensure_running()?;
        guard.buffer.write(bytes).await
    }

    /// Ship whatever is buffered now
    pub async fn flush(&self) -> Result<(), LogError> {
        let mut guard = self.inner.lock().await;
        guard.ensure_running()?;
        guard.buffer.flush().await
    }

    /// Stop the scheduler, then flush the remainder.
    ///
    /// Only the first call does anything; later calls return `Ok(())`.
    pub async fn close(&self) -> Result<(), LogError> {
        {
            let mut guard = self.inner.lock().await;
            if guard.state != WriterState::Running {
                return Ok(());
            }
            guard.state = WriterState::Closing;
        }

        let scheduler = self
            .scheduler
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(mut scheduler) = scheduler {
            scheduler.stop().await;
        }

        let mut guard = self.inner.lock().await;
        let result = guard.buffer.flush().await;
        guard.state = WriterState::Closed;

        tracing::debug!(
            log_target = %self.target,
            chunks = guard.buffer.chunks_issued(),
            ok = result.is_ok(),
            "log writer closed"
        );
        result
    }

    /// Change the chunk threshold for subsequent writes and flushes
    pub async fn set_max_chunk_size(&self, max_chunk_size: NonZeroUsize) {
        self.inner
            .lock()
            .await
            .buffer
            .set_max_chunk_size(max_chunk_size);
    }

    pub async fn max_chunk_size(&self) -> NonZeroUsize {
        self.inner.lock().await.buffer.max_chunk_size()
    }

    /// Bytes waiting for the next chunk
    pub async fn buffered_len(&self) -> usize {
        self.inner.lock().await.buffer.len()
    }

    /// Chunks numbered so far, delivered or not
    pub async fn chunks_issued(&self) -> u64 {
        self.inner.lock().await.buffer.chunks_issued()
    }

    pub async fn is_closed(&self) -> bool {
        self.inner.lock().await.state == WriterState::Closed
    }

    pub fn target(&self) -> &StepTarget {
        &self.target
    }
}

impl<S: ChunkSink> Drop for LogWriter<S> {
    fn drop(&mut self) {
        // Dropping the scheduler cancels its task
        let scheduler = self
            .scheduler
            .get_mut()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if scheduler.is_none() {
            return;
        }
        drop(scheduler);

        if let Ok(guard) = self.inner.try_lock() {
            if guard.state == WriterState::Running && !guard.buffer.is_empty() {
                tracing::warn!(
                    log_target = %self.target,
                    discarded = guard.buffer.len(),
                    "log writer dropped without close"
                );
            }
        }
    }
}

async fn scheduled_flush<S: ChunkSink>(inner: Weak<Mutex<Guarded<S>>>) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let mut guard = inner.lock().await;
    if guard.state != WriterState::Running {
        return;
    }
    // No caller to report to; log and carry on
    if let Err(e) = guard.buffer.flush().await {
        tracing::warn!(error = %e, "scheduled flush failed");
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
