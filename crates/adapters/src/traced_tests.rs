// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::report::{FakeReportingService, ReportCall};
use reporter_core::{FakeChunkSink, Outcome, StepTarget, Stream};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn new() -> Self {
        Self::default()
    }

    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a test with captured tracing output
fn with_tracing<F, Fut>(f: F) -> (String, Fut::Output)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future,
{
    let logs = CapturedLogs::new();
    let logs_clone = logs.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs_clone)
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f())
    });

    (logs.contents(), result)
}

// =============================================================================
// Precondition validation tests
// =============================================================================

#[tokio::test]
async fn traced_sink_rejects_chunk_zero() {
    let fake = FakeChunkSink::new();
    let traced = TracedChunkSink::new(fake.clone());

    let chunk = LogChunk::new(
        StepTarget::new("run-1", "build", Stream::Stdout),
        0,
        b"x".to_vec(),
    );
    let err = traced.deliver(chunk).await.unwrap_err();

    assert!(
        err.to_string().contains("chunk numbers start at 1"),
        "Expected numbering error, got: {}",
        err
    );
    assert!(fake.attempts().is_empty());
}

// =============================================================================
// Tracing output verification tests
// =============================================================================

#[test]
fn traced_sink_logs_delivery() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeChunkSink::new();
        let traced = TracedChunkSink::new(fake);
        let chunk = LogChunk::new(
            StepTarget::new("run-1", "build", Stream::Stdout),
            1,
            b"hello".to_vec(),
        );
        traced.deliver(chunk).await
    });

    assert!(result.is_ok(), "deliver should succeed: {:?}", result);
    assert!(
        logs.contains("sink.deliver"),
        "Should log span name. Logs:\n{}",
        logs
    );
    assert!(
        logs.contains("run-1/build/stdout"),
        "Should log target. Logs:\n{}",
        logs
    );
    assert!(
        logs.contains("chunk delivered"),
        "Should log completion. Logs:\n{}",
        logs
    );
    assert!(
        logs.contains("elapsed_ms"),
        "Should log timing. Logs:\n{}",
        logs
    );
}

#[test]
fn traced_sink_logs_delivery_failure() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeChunkSink::new();
        fake.fail_all(true);
        let traced = TracedChunkSink::new(fake);
        let chunk = LogChunk::new(
            StepTarget::new("run-1", "build", Stream::Stderr),
            7,
            b"boom".to_vec(),
        );
        traced.deliver(chunk).await
    });

    assert!(result.is_err());
    assert!(
        logs.contains("delivery failed"),
        "Should log failure. Logs:\n{}",
        logs
    );
    assert!(logs.contains("chunk=7"), "Should log chunk number. Logs:\n{}", logs);
}

#[test]
fn traced_service_logs_lifecycle_events() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeReportingService::new();
        let traced = TracedReportingService::new(fake.clone());

        traced
            .run_started(RunStarted {
                run_id: "run-42".into(),
            })
            .await?;
        traced
            .run_step_finished(RunStepFinished::new("run-42", "deploy", Outcome::Passed))
            .await?;
        Ok::<_, ReportError>(fake.calls())
    });

    let calls = result.unwrap();
    assert!(matches!(calls[0], ReportCall::RunStarted(_)));
    assert!(matches!(calls[1], ReportCall::RunStepFinished(_)));

    assert!(
        logs.contains("report.run_started"),
        "Should log span name. Logs:\n{}",
        logs
    );
    assert!(logs.contains("run-42"), "Should log run id. Logs:\n{}", logs);
    assert!(
        logs.contains("step finished reported"),
        "Should log completion. Logs:\n{}",
        logs
    );
    assert!(logs.contains("deploy"), "Should log step. Logs:\n{}", logs);
}

#[test]
fn traced_service_logs_rejection() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeReportingService::new();
        fake.reject_with(Some(500));
        let traced = TracedReportingService::new(fake);

        traced
            .run_step_logs(RunStepLogs {
                run_id: "run-1".into(),
                step_safe_id: "build".into(),
                logs: b"data".to_vec(),
                stream: Stream::Stdout,
                chunk: 3,
            })
            .await
    });

    assert!(matches!(result, Err(ReportError::Status(500))));
    assert!(
        logs.contains("logs not reported"),
        "Should log rejection. Logs:\n{}",
        logs
    );
    assert!(logs.contains("500"), "Should log status. Logs:\n{}", logs);
}
