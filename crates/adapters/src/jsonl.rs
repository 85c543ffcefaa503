// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chunk sink that prints one JSON object per chunk

use async_trait::async_trait;
use reporter_core::{ChunkSink, LogChunk, RunStepLogs, SinkError};
use serde::Serialize;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Line written for each chunk: the wire event plus a readable copy of the payload
#[derive(Serialize)]
struct ChunkLine<'a> {
    #[serde(flatten)]
    event: &'a RunStepLogs,
    text: String,
}

/// Writes each delivered chunk as a JSON line, for dry runs and debugging
pub struct JsonLinesSink<W> {
    out: Arc<Mutex<W>>,
}

impl<W> Clone for JsonLinesSink<W> {
    fn clone(&self) -> Self {
        Self {
            out: Arc::clone(&self.out),
        }
    }
}

impl<W: Write + Send + 'static> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Arc::new(Mutex::new(out)),
        }
    }
}

#[async_trait]
impl<W: Write + Send + 'static> ChunkSink for JsonLinesSink<W> {
    async fn deliver(&self, chunk: LogChunk) -> Result<(), SinkError> {
        let event = RunStepLogs::from(chunk);
        let line = ChunkLine {
            text: String::from_utf8_lossy(&event.logs).into_owned(),
            event: &event,
        };
        let mut encoded =
            serde_json::to_vec(&line).map_err(|e| SinkError::Other(e.to_string()))?;
        encoded.push(b'\n');

        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        out.write_all(&encoded)
            .and_then(|()| out.flush())
            .map_err(|e| SinkError::Transport(e.to_string()))
    }
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
