// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP client for the remote collector

use async_trait::async_trait;
use reporter_core::{
    CollectorConfig, ReportError, ReportingService, RunFinished, RunStarted, RunStepFinished,
    RunStepLogs, RunStepStarted, RunStepsAdded,
};
use serde::Serialize;
use ureq::Agent;

/// Query parameter carrying the collector token
pub const TOKEN_QUERY_PARAM: &str = "wercker_token";

/// Posts each event as JSON to `<base>/<endpoint>?wercker_token=<token>`.
///
/// Requests run on the blocking pool; concurrent calls are independent.
#[derive(Clone)]
pub struct HttpReportingClient {
    base_url: String,
    token: String,
    agent: Agent,
}

impl HttpReportingClient {
    pub fn new(config: &CollectorConfig) -> Result<Self, ReportError> {
        config
            .validate()
            .map_err(|e| ReportError::InvalidConfig(e.to_string()))?;

        let agent = Agent::new_with_config(
            Agent::config_builder()
                .timeout_global(Some(config.timeout))
                .build(),
        );

        Ok(Self {
            base_url: config.base_url(),
            token: config.token.clone(),
            agent,
        })
    }

    /// Full URL for an endpoint, without the token
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<T: Serialize>(&self, path: &str, payload: &T) -> Result<(), ReportError> {
        let body = serde_json::to_vec(payload)?;
        let agent = self.agent.clone();
        let url = self.endpoint(path);
        let token = self.token.clone();

        tokio::task::spawn_blocking(move || post_blocking(&agent, &url, &token, &body))
            .await
            .map_err(|e| ReportError::Transport(format!("request task failed: {e}")))?
    }
}

fn post_blocking(agent: &Agent, url: &str, token: &str, body: &[u8]) -> Result<(), ReportError> {
    let result = agent
        .post(url)
        .query(TOKEN_QUERY_PARAM, token)
        .content_type("application/json")
        .send(body);

    match result {
        Ok(response) => {
            let status = response.status().as_u16();
            if (200..300).contains(&status) {
                Ok(())
            } else {
                Err(ReportError::Status(status))
            }
        }
        Err(ureq::Error::StatusCode(code)) => Err(ReportError::Status(code)),
        Err(e) => Err(ReportError::Transport(e.to_string())),
    }
}

#[async_trait]
impl ReportingService for HttpReportingClient {
    async fn run_started(&self, event: RunStarted) -> Result<(), ReportError> {
        self.post_json("runstarted", &event).await
    }

    async fn run_finished(&self, event: RunFinished) -> Result<(), ReportError> {
        self.post_json("runfinished", &event).await
    }

    async fn run_steps_added(&self, event: RunStepsAdded) -> Result<(), ReportError> {
        self.post_json("runstepsadded", &event).await
    }

    async fn run_step_started(&self, event: RunStepStarted) -> Result<(), ReportError> {
        self.post_json("runstepstarted", &event).await
    }

    async fn run_step_finished(&self, event: RunStepFinished) -> Result<(), ReportError> {
        self.post_json("runstepfinished", &event).await
    }

    async fn run_step_logs(&self, event: RunStepLogs) -> Result<(), ReportError> {
        self.post_json("runsteplogs", &event).await
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
