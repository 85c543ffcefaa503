// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collector and log settings merged from flags, environment, and config file

use anyhow::{Context, Result};
use clap::Args;
use reporter_adapters::{HttpReportingClient, TracedReportingService};
use reporter_core::{CollectorConfig, LogConfig, ReporterConfig};
use std::path::Path;

#[derive(Args, Debug, Default)]
pub struct CollectorArgs {
    /// Collector base URI
    #[arg(long, global = true, env = "REPORTER_COLLECTOR_URL", value_name = "URL")]
    pub collector: Option<String>,

    /// Collector token
    #[arg(long, global = true, env = "REPORTER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// Effective settings for one invocation
#[derive(Debug)]
pub struct Settings {
    file: ReporterConfig,
    args: CollectorArgs,
    pub logs: LogConfig,
}

impl Settings {
    pub fn load(config_path: Option<&Path>, args: CollectorArgs) -> Result<Self> {
        let file = match config_path {
            Some(path) => ReporterConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ReporterConfig::default(),
        };
        Ok(Self::from_parts(file, args))
    }

    pub fn from_parts(file: ReporterConfig, args: CollectorArgs) -> Self {
        let logs = file.logs.clone();
        Self { file, args, logs }
    }

    /// Flags and environment win over the config file, field by field
    pub fn collector(&self) -> Result<CollectorConfig> {
        let from_file = self.file.collector.as_ref();

        let base_uri = self
            .args
            .collector
            .clone()
            .or_else(|| from_file.map(|c| c.base_uri.clone()))
            .filter(|s| !s.is_empty())
            .context("no collector configured; pass --collector or set REPORTER_COLLECTOR_URL")?;
        let token = self
            .args
            .token
            .clone()
            .or_else(|| from_file.map(|c| c.token.clone()))
            .filter(|s| !s.is_empty())
            .context("no collector token; pass --token or set REPORTER_TOKEN")?;

        let mut config = CollectorConfig::new(base_uri, token);
        if let Some(file) = from_file {
            config = config.with_timeout(file.timeout);
        }
        Ok(config)
    }

    pub fn reporting_service(&self) -> Result<TracedReportingService<HttpReportingClient>> {
        let client = HttpReportingClient::new(&self.collector()?)?;
        Ok(TracedReportingService::new(client))
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
