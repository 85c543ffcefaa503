// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed run and step lifecycle events.
//!
//! Field names serialize in the collector's camelCase wire format. Optional
//! fields are omitted when absent.

use crate::id::{RunId, StepSafeId, Stream};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("required field is empty: {0}")]
    MissingField(&'static str),
}

/// Result of a run or a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    pub fn from_success(success: bool) -> Self {
        if success {
            Outcome::Passed
        } else {
            Outcome::Failed
        }
    }
}

/// Which part of the pipeline a step belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepPhase {
    MainSteps,
    FinalSteps,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStarted {
    pub run_id: RunId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunFinished {
    pub run_id: RunId,
    pub result: Outcome,
}

/// A step announced before anything is reported about it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStep {
    pub step_safe_id: StepSafeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<StepPhase>,
}

impl NewStep {
    pub fn new(step_safe_id: impl Into<StepSafeId>, name: impl Into<String>) -> Self {
        Self {
            step_safe_id: step_safe_id.into(),
            name: name.into(),
            display_name: None,
            phase: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_phase(mut self, phase: StepPhase) -> Self {
        self.phase = Some(phase);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStepsAdded {
    pub run_id: RunId,
    pub steps: Vec<NewStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStepStarted {
    pub run_id: RunId,
    pub step_safe_id: StepSafeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStepFinished {
    pub run_id: RunId,
    pub step_safe_id: StepSafeId,
    pub result: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        rename = "werckerYamlContents",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub yaml_contents: Option<String>,
    /// Step duration in milliseconds
    #[serde(rename = "duration", default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl RunStepFinished {
    pub fn new(run_id: impl Into<RunId>, step_safe_id: impl Into<StepSafeId>, result: Outcome) -> Self {
        Self {
            run_id: run_id.into(),
            step_safe_id: step_safe_id.into(),
            result,
            artifact_url: None,
            package_url: None,
            message: None,
            yaml_contents: None,
            duration_ms: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_artifact_url(mut self, url: impl Into<String>) -> Self {
        self.artifact_url = Some(url.into());
        self
    }

    pub fn with_package_url(mut self, url: impl Into<String>) -> Self {
        self.package_url = Some(url.into());
        self
    }

    pub fn with_yaml_contents(mut self, contents: impl Into<String>) -> Self {
        self.yaml_contents = Some(contents.into());
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// One numbered log chunk as sent to the collector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStepLogs {
    pub run_id: RunId,
    pub step_safe_id: StepSafeId,
    #[serde(with = "base64_bytes")]
    pub logs: Vec<u8>,
    pub stream: Stream,
    pub chunk: u64,
}

/// A log line a producer wants reported for a step.
///
/// Required fields are checked once, in [`StepLogLine::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLogLine {
    step_safe_id: StepSafeId,
    stream: Stream,
    message: String,
}

impl StepLogLine {
    pub fn new(
        step_safe_id: impl Into<StepSafeId>,
        stream: impl Into<Stream>,
        message: impl Into<String>,
    ) -> Result<Self, EventError> {
        let step_safe_id = step_safe_id.into();
        if step_safe_id.as_str().is_empty() {
            return Err(EventError::MissingField("stepSafeId"));
        }
        let stream = stream.into();
        if stream.as_str().is_empty() {
            return Err(EventError::MissingField("stream"));
        }
        Ok(Self {
            step_safe_id,
            stream,
            message: message.into(),
        })
    }

    pub fn step_safe_id(&self) -> &StepSafeId {
        &self.step_safe_id
    }

    pub fn stream(&self) -> &Stream {
        &self.stream
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Byte payloads travel as standard base64 strings
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
