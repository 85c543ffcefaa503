//! Lifecycle event specs
//!
//! With `--dry-run`, each event is printed with the endpoint it would be
//! posted to.

use crate::prelude::*;

#[test]
fn run_started_prints_event() {
    let temp = Project::empty();

    temp.reporter()
        .args(["run", "started", "--run", "run-1", "--dry-run"])
        .passes()
        .stdout_eq("{\"endpoint\":\"runstarted\",\"payload\":{\"runId\":\"run-1\"}}\n");
}

#[test]
fn run_finished_prints_result() {
    let temp = Project::empty();

    let run = temp
        .reporter()
        .args(["run", "finished", "--run", "run-1", "--result", "failed"])
        .args(["--dry-run"])
        .passes();

    let lines = run.json_lines();
    assert_eq!(lines[0]["endpoint"], "runfinished");
    assert_eq!(lines[0]["payload"]["result"], "failed");
}

#[test]
fn step_added_prints_new_step() {
    let temp = Project::empty();

    let run = temp
        .reporter()
        .args(["step", "added", "--run", "run-1", "--step", "build"])
        .args(["--display-name", "Build", "--phase", "main", "--dry-run"])
        .passes();

    let payload = &run.json_lines()[0]["payload"];
    assert_eq!(payload["steps"][0]["stepSafeId"], "build");
    assert_eq!(payload["steps"][0]["name"], "build");
    assert_eq!(payload["steps"][0]["displayName"], "Build");
    assert_eq!(payload["steps"][0]["phase"], "mainSteps");
}

#[test]
fn step_finished_omits_absent_fields() {
    let temp = Project::empty();
    temp.file("wercker.yml", "box: rust\n");

    let run = temp
        .reporter()
        .args(["step", "finished", "--run", "run-1", "--step", "test"])
        .args(["--result", "passed", "--duration-ms", "1500"])
        .args(["--yaml-file", "wercker.yml", "--dry-run"])
        .passes();

    let line = &run.json_lines()[0];
    assert_eq!(line["endpoint"], "runstepfinished");
    let payload = line["payload"].as_object().unwrap();
    assert_eq!(payload["result"], "passed");
    assert_eq!(payload["duration"], 1500);
    assert_eq!(payload["werckerYamlContents"], "box: rust\n");
    assert!(!payload.contains_key("message"));
    assert!(!payload.contains_key("artifactUrl"));
}

#[test]
fn unreachable_collector_fails() {
    let temp = Project::empty();

    temp.reporter()
        .args(["step", "started", "--run", "run-1", "--step", "build"])
        .args(["--collector", &unreachable_collector(), "--token", "t"])
        .fails()
        .stderr_has("transport error");
}
