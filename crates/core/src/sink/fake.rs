// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake chunk sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ChunkSink, SinkError};
use crate::logs::LogChunk;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct FakeSinkState {
    delivered: Vec<LogChunk>,
    attempts: Vec<u64>,
    failing: HashSet<u64>,
    fail_all: bool,
    delay: Option<Duration>,
}

/// Fake sink that records chunks and fails on demand
#[derive(Clone, Default)]
pub struct FakeChunkSink {
    state: Arc<Mutex<FakeSinkState>>,
}

impl FakeChunkSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail delivery of the chunk with this number
    pub fn fail_chunk(&self, number: u64) {
        self.lock().failing.insert(number);
    }

    /// Fail every delivery
    pub fn fail_all(&self, fail: bool) {
        self.lock().fail_all = fail;
    }

    /// Sleep this long inside every delivery
    pub fn set_delay(&self, delay: Duration) {
        self.lock().delay = Some(delay);
    }

    /// Successfully delivered chunks, in delivery order
    pub fn chunks(&self) -> Vec<LogChunk> {
        self.lock().delivered.clone()
    }

    /// Chunk numbers of every delivery attempt, in order
    pub fn attempts(&self) -> Vec<u64> {
        self.lock().attempts.clone()
    }

    /// Numbers of successfully delivered chunks
    pub fn numbers(&self) -> Vec<u64> {
        self.lock().delivered.iter().map(LogChunk::number).collect()
    }

    /// Concatenated payloads of delivered chunks
    pub fn payload(&self) -> Vec<u8> {
        self.lock()
            .delivered
            .iter()
            .flat_map(|c| c.payload().iter().copied())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeSinkState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ChunkSink for FakeChunkSink {
    async fn deliver(&self, chunk: LogChunk) -> Result<(), SinkError> {
        let delay = {
            let mut state = self.lock();
            state.attempts.push(chunk.number());
            state.delay
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.lock();
        if state.fail_all || state.failing.contains(&chunk.number()) {
            return Err(SinkError::Rejected { status: 500 });
        }
        state.delivered.push(chunk);
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
