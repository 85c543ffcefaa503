// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O

pub mod jsonl;
pub mod report;
pub mod traced;

pub use jsonl::JsonLinesSink;
pub use report::{HttpReportingClient, TOKEN_QUERY_PARAM};
pub use traced::{TracedChunkSink, TracedReportingService};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use report::{FakeReportingService, ReportCall};
#[cfg(any(test, feature = "test-support"))]
pub use reporter_core::FakeChunkSink;
