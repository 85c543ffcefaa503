// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte accumulator that cuts and ships chunks

use super::chunk::{ChunkSequencer, LogChunk};
use super::error::LogError;
use crate::id::StepTarget;
use crate::sink::ChunkSink;
use std::num::NonZeroUsize;

/// Buffered bytes of one stream plus the sink they are shipped to.
///
/// Not synchronized; [`LogWriter`](super::LogWriter) serializes access.
pub struct LogBuffer<S> {
    target: StepTarget,
    sink: S,
    buffer: Vec<u8>,
    max_chunk_size: NonZeroUsize,
    sequencer: ChunkSequencer,
}

impl<S: ChunkSink> LogBuffer<S> {
    pub fn new(target: StepTarget, sink: S, max_chunk_size: NonZeroUsize) -> Self {
        Self {
            target,
            sink,
            buffer: Vec::new(),
            max_chunk_size,
            sequencer: ChunkSequencer::new(),
        }
    }

    /// Append `bytes`, then ship full chunks while more than
    /// `max_chunk_size` bytes are buffered.
    ///
    /// All input is always buffered. Every full chunk is attempted even if
    /// an earlier one fails; the first failure is returned.
    pub async fn write(&mut self, bytes: &[u8]) -> Result<usize, LogError> {
        self.buffer.extend_from_slice(bytes);

        let max = self.max_chunk_size.get();
        let mut taken = 0;
        let mut pieces = Vec::new();
        while self.buffer.len() - taken > max {
            pieces.push(self.buffer[taken..taken + max].to_vec());
            taken += max;
        }
        // Extracted bytes leave the buffer before delivery starts
        self.buffer.drain(..taken);

        self.ship_all(pieces).await?;
        Ok(bytes.len())
    }

    /// Ship everything buffered. No-op when the buffer is empty.
    pub async fn flush(&mut self) -> Result<(), LogError> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let remaining = std::mem::take(&mut self.buffer);
        let max = self.max_chunk_size.get();
        // More than one piece only if the maximum shrank after buffering
        let pieces = if remaining.len() <= max {
            vec![remaining]
        } else {
            remaining.chunks(max).map(<[u8]>::to_vec).collect()
        };

        self.ship_all(pieces).await
    }

    async fn ship_all(&mut self, pieces: Vec<Vec<u8>>) -> Result<(), LogError> {
        let mut first_error = None;
        for payload in pieces {
            if let Err(e) = self.ship(payload).await {
                if first_error.is_none() {
                    first_error = Some(e);
                } else {
                    tracing::warn!(error = %e, "additional chunk delivery failure");
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    async fn ship(&mut self, payload: Vec<u8>) -> Result<(), LogError> {
        let number = self.sequencer.advance();
        let len = payload.len();
        let chunk = LogChunk::new(self.target.clone(), number, payload);

        match self.sink.deliver(chunk).await {
            Ok(()) => {
                tracing::trace!(
                    log_target = %self.target,
                    chunk = number,
                    len,
                    "chunk delivered"
                );
                Ok(())
            }
            Err(source) => {
                tracing::debug!(
                    log_target = %self.target,
                    chunk = number,
                    len,
                    error = %source,
                    "chunk delivery failed"
                );
                Err(LogError::Delivery {
                    target: self.target.clone(),
                    chunk: number,
                    source,
                })
            }
        }
    }

    pub fn set_max_chunk_size(&mut self, max_chunk_size: NonZeroUsize) {
        self.max_chunk_size = max_chunk_size;
    }

    pub fn max_chunk_size(&self) -> NonZeroUsize {
        self.max_chunk_size
    }

    /// Bytes waiting for the next chunk
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Chunks numbered so far, delivered or not
    pub fn chunks_issued(&self) -> u64 {
        self.sequencer.issued()
    }

    pub fn target(&self) -> &StepTarget {
        &self.target
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
