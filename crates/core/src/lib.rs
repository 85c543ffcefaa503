// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! reporter-core: Core library for the pipeline run reporter
//!
//! This crate provides:
//! - Typed run/step lifecycle events and the `ReportingService` capability
//! - The `ChunkSink` capability that log chunks are delivered through
//! - The chunked, asynchronous log-shipping writer and its per-step registry
//! - TOML configuration

pub mod config;
pub mod event;
pub mod id;
pub mod logs;
pub mod registry;
pub mod service;
pub mod sink;

// Re-exports
pub use config::{CollectorConfig, ConfigError, LogConfig, ReporterConfig};
pub use event::{
    EventError, NewStep, Outcome, RunFinished, RunStarted, RunStepFinished, RunStepLogs,
    RunStepStarted, RunStepsAdded, StepLogLine, StepPhase,
};
pub use id::{RunId, StepSafeId, StepTarget, Stream};
pub use logs::{ChunkSequencer, FlushScheduler, LogBuffer, LogChunk, LogError, LogWriter};
pub use registry::LogRegistry;
pub use service::{ReportError, ReportingService};
pub use sink::{ChunkSink, ServiceSink, SinkError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use sink::FakeChunkSink;
