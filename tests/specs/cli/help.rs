//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let temp = Project::empty();

    temp.reporter()
        .args(["--help"])
        .passes()
        .stdout_has("logs")
        .stdout_has("run")
        .stdout_has("step");
}

#[test]
fn logs_help_lists_chunking_options() {
    let temp = Project::empty();

    temp.reporter()
        .args(["logs", "--help"])
        .passes()
        .stdout_has("--max-chunk-size")
        .stdout_has("--flush-interval")
        .stdout_has("--stream");
}

#[test]
fn step_finished_help_lists_result_values() {
    let temp = Project::empty();

    temp.reporter()
        .args(["step", "finished", "--help"])
        .passes()
        .stdout_has("passed")
        .stdout_has("failed");
}
