//! `reporter logs` against a collector

use crate::prelude::*;

#[test]
fn unreachable_collector_fails_after_reading_input() {
    let temp = Project::empty();

    temp.reporter()
        .args(["logs", "--run", "run-1", "--step", "build"])
        .args(["--collector", &unreachable_collector(), "--token", "t"])
        .stdin("lost output\n")
        .fails()
        .stderr_has("some log chunks were not delivered");
}

#[test]
fn collector_from_environment() {
    let temp = Project::empty();

    temp.reporter()
        .args(["logs", "--run", "run-1", "--step", "build"])
        .env("REPORTER_COLLECTOR_URL", unreachable_collector())
        .env("REPORTER_TOKEN", "t")
        .stdin("lost output\n")
        .fails()
        .stderr_has("some log chunks were not delivered")
        .stderr_lacks("no collector configured");
}

#[test]
fn logs_need_a_collector_without_dry_run() {
    let temp = Project::empty();

    temp.reporter()
        .args(["logs", "--run", "run-1", "--step", "build"])
        .stdin("hello\n")
        .fails()
        .stderr_has("no collector configured");
}
