// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chunked, asynchronous log shipping.
//!
//! A [`LogWriter`] accepts bytes from a step's output, coalesces them into
//! numbered chunks of at most `max_chunk_size` bytes, and delivers them to a
//! [`ChunkSink`](crate::sink::ChunkSink):
//!
//! - synchronously from `write` whenever the buffer grows past the maximum,
//! - from a background [`FlushScheduler`] every flush interval,
//! - and once more from `close`.
//!
//! Chunk numbers start at 1 and never skip or repeat for one writer. All
//! buffer mutation and every delivery happen under one per-writer lock, so
//! chunks reach the sink in number order. Failed deliveries are reported to
//! the caller and not retried.

mod buffer;
mod chunk;
mod error;
mod scheduler;
mod writer;

pub use buffer::LogBuffer;
pub use chunk::{ChunkSequencer, LogChunk};
pub use error::LogError;
pub use scheduler::FlushScheduler;
pub use writer::LogWriter;
