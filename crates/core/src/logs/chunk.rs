// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log chunks and their numbering

use crate::id::{RunId, StepSafeId, StepTarget, Stream};

/// One numbered, size-bounded piece of a step's log output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogChunk {
    target: StepTarget,
    number: u64,
    payload: Vec<u8>,
}

impl LogChunk {
    pub fn new(target: StepTarget, number: u64, payload: Vec<u8>) -> Self {
        Self {
            target,
            number,
            payload,
        }
    }

    pub fn target(&self) -> &StepTarget {
        &self.target
    }

    pub fn run_id(&self) -> &RunId {
        &self.target.run_id
    }

    pub fn step_safe_id(&self) -> &StepSafeId {
        &self.target.step_safe_id
    }

    pub fn stream(&self) -> &Stream {
        &self.target.stream
    }

    /// Chunk number, starting at 1
    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    pub fn into_parts(self) -> (StepTarget, Vec<u8>) {
        (self.target, self.payload)
    }
}

/// Hands out chunk numbers 1, 2, 3, ... for one writer
#[derive(Debug)]
pub struct ChunkSequencer {
    next: u64,
}

impl ChunkSequencer {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Return the next chunk number and advance
    pub fn advance(&mut self) -> u64 {
        let number = self.next;
        self.next += 1;
        number
    }

    /// The number the next chunk will get
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// How many numbers have been handed out
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for ChunkSequencer {
    fn default() -> Self {
        Self::new()
    }
}
