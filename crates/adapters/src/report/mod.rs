// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reporting service adapters

mod http;

pub use http::{HttpReportingClient, TOKEN_QUERY_PARAM};

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeReportingService, ReportCall};
