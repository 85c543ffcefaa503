// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reporter logs` - ship stdin as chunked step logs

use anyhow::{Context, Result};
use clap::Args;
use reporter_adapters::{
    HttpReportingClient, JsonLinesSink, TracedChunkSink, TracedReportingService,
};
use reporter_core::{
    ChunkSink, CollectorConfig, LogConfig, LogError, LogWriter, ServiceSink, StepTarget,
};
use std::num::NonZeroUsize;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Bytes requested from the input per read
const READ_BLOCK: usize = 8 * 1024;

#[derive(Args, Debug)]
pub struct LogsArgs {
    /// Run the step belongs to
    #[arg(long = "run", value_name = "RUN_ID")]
    pub run_id: String,

    /// Step whose output this is
    #[arg(long = "step", value_name = "STEP_SAFE_ID")]
    pub step_safe_id: String,

    /// Stream the output is attributed to
    #[arg(long, default_value = "stdout")]
    pub stream: String,

    /// Ship a chunk as soon as this many bytes are buffered
    #[arg(long, value_name = "BYTES")]
    pub max_chunk_size: Option<NonZeroUsize>,

    /// Ship whatever is buffered this often, e.g. "3s" or "500ms"
    #[arg(long, value_name = "DURATION", value_parser = humantime::parse_duration)]
    pub flush_interval: Option<Duration>,
}

impl LogsArgs {
    pub fn target(&self) -> Result<StepTarget> {
        if self.step_safe_id.is_empty() {
            anyhow::bail!("--step cannot be empty");
        }
        if self.stream.is_empty() {
            anyhow::bail!("--stream cannot be empty");
        }
        let target = StepTarget::new(
            self.run_id.as_str(),
            self.step_safe_id.as_str(),
            self.stream.as_str(),
        );
        target.validate().context("--run cannot be empty")?;
        Ok(target)
    }

    /// Config file settings with command line overrides applied
    pub fn log_config(&self, base: &LogConfig) -> Result<LogConfig> {
        let mut config = base.clone();
        if let Some(size) = self.max_chunk_size {
            config = config.with_max_chunk_size(size);
        }
        if let Some(interval) = self.flush_interval {
            config = config.with_flush_interval(interval);
        }
        config.validate()?;
        Ok(config)
    }
}

pub async fn ship_stdin_dry_run(target: StepTarget, config: &LogConfig) -> Result<()> {
    let sink = TracedChunkSink::new(JsonLinesSink::new(std::io::stdout()));
    ship(tokio::io::stdin(), target, sink, config).await?;
    Ok(())
}

pub async fn ship_stdin_to_collector(
    target: StepTarget,
    config: &LogConfig,
    collector: &CollectorConfig,
) -> Result<()> {
    let client = TracedReportingService::new(HttpReportingClient::new(collector)?);
    let sink = TracedChunkSink::new(ServiceSink::new(client));
    ship(tokio::io::stdin(), target, sink, config).await?;
    Ok(())
}

/// Copy `input` into a log writer until EOF, then close it.
///
/// Delivery failures do not stop the copy; the first one is returned after
/// the writer is closed. Returns the number of bytes read.
pub async fn ship<R, S>(
    mut input: R,
    target: StepTarget,
    sink: S,
    config: &LogConfig,
) -> Result<u64>
where
    R: AsyncRead + Unpin,
    S: ChunkSink,
{
    let writer = LogWriter::new(target, sink, config)?;
    let mut first_error: Option<LogError> = None;
    let mut total = 0u64;
    let mut block = vec![0u8; READ_BLOCK];

    loop {
        let n = match input.read(&mut block).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                // Ship what we have before giving up on the input
                tracing::error!(error = %e, "failed to read input");
                if let Err(close_err) = writer.close().await {
                    tracing::warn!(error = %close_err, "failed to close log writer");
                }
                return Err(e).context("reading input");
            }
        };
        total += n as u64;

        if let Err(e) = writer.write(&block[..n]).await {
            tracing::warn!(error = %e, "log chunk not delivered");
            first_error.get_or_insert(e);
        }
    }

    if let Err(e) = writer.close().await {
        first_error.get_or_insert(e);
    }
    tracing::debug!(
        bytes = total,
        chunks = writer.chunks_issued().await,
        "input shipped"
    );

    match first_error {
        Some(e) => Err(e).context("some log chunks were not delivered"),
        None => Ok(total),
    }
}

#[cfg(test)]
#[path = "logs_tests.rs"]
mod tests;
