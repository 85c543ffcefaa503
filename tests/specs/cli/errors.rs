//! Argument and configuration error specs

use crate::prelude::*;

#[test]
fn no_command_fails() {
    let temp = Project::empty();
    temp.reporter().fails().stderr_has("Usage");
}

#[test]
fn logs_requires_run() {
    let temp = Project::empty();

    temp.reporter()
        .args(["logs", "--step", "build", "--dry-run"])
        .stdin("hello\n")
        .fails()
        .stderr_has("--run");
}

#[test]
fn logs_rejects_empty_run_id() {
    let temp = Project::empty();

    temp.reporter()
        .args(["logs", "--run", "", "--step", "build", "--dry-run"])
        .stdin("hello\n")
        .fails()
        .stderr_has("--run cannot be empty");
}

#[test]
fn logs_rejects_zero_chunk_size() {
    let temp = Project::empty();

    temp.reporter()
        .args(["logs", "--run", "r", "--step", "s", "--max-chunk-size", "0"])
        .args(["--dry-run"])
        .fails()
        .stderr_has("--max-chunk-size");
}

#[test]
fn events_need_a_collector() {
    let temp = Project::empty();

    temp.reporter()
        .args(["run", "started", "--run", "run-1"])
        .fails()
        .stderr_has("no collector configured");
}

#[test]
fn events_need_a_token() {
    let temp = Project::empty();

    temp.reporter()
        .args(["run", "started", "--run", "run-1"])
        .env("REPORTER_COLLECTOR_URL", "collector:8080")
        .fails()
        .stderr_has("no collector token");
}

#[test]
fn invalid_config_file_fails() {
    let temp = Project::empty();
    temp.file("reporter.toml", "[logs]\nflush_interval = \"0s\"\n");

    temp.reporter()
        .args(["--config", "reporter.toml", "run", "started", "--run", "r"])
        .args(["--dry-run"])
        .fails()
        .stderr_has("loading config reporter.toml");
}
