// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identifiers for runs, steps, and output streams

use crate::logs::LogError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one pipeline execution
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub String);

impl RunId {
    pub fn new(id: impl Into<String>) -> Self {
        RunId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RunId {
    fn from(s: String) -> Self {
        RunId(s)
    }
}

impl From<&str> for RunId {
    fn from(s: &str) -> Self {
        RunId(s.to_string())
    }
}

/// Stable identifier of a step within a run.
///
/// Stable enough to key the per-step writer registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepSafeId(pub String);

impl StepSafeId {
    pub fn new(id: impl Into<String>) -> Self {
        StepSafeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepSafeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for StepSafeId {
    fn from(s: String) -> Self {
        StepSafeId(s)
    }
}

impl From<&str> for StepSafeId {
    fn from(s: &str) -> Self {
        StepSafeId(s.to_string())
    }
}

/// Named channel of output within one step
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stream {
    Stdout,
    Stderr,
    Named(String),
}

impl Stream {
    pub fn as_str(&self) -> &str {
        match self {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
            Stream::Named(name) => name,
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Stream {
    fn from(s: &str) -> Self {
        match s {
            "stdout" => Stream::Stdout,
            "stderr" => Stream::Stderr,
            other => Stream::Named(other.to_string()),
        }
    }
}

impl From<String> for Stream {
    fn from(s: String) -> Self {
        Stream::from(s.as_str())
    }
}

impl Serialize for Stream {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Stream {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Stream::from(s))
    }
}

/// Where a log writer's chunks are attributed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepTarget {
    pub run_id: RunId,
    pub step_safe_id: StepSafeId,
    pub stream: Stream,
}

impl StepTarget {
    pub fn new(
        run_id: impl Into<RunId>,
        step_safe_id: impl Into<StepSafeId>,
        stream: impl Into<Stream>,
    ) -> Self {
        Self {
            run_id: run_id.into(),
            step_safe_id: step_safe_id.into(),
            stream: stream.into(),
        }
    }

    /// Chunks cannot be attributed without a run id
    pub fn validate(&self) -> Result<(), LogError> {
        if self.run_id.is_empty() {
            return Err(LogError::MissingRunId);
        }
        Ok(())
    }
}

impl fmt::Display for StepTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.run_id, self.step_safe_id, self.stream)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
