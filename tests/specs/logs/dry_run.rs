//! `reporter logs --dry-run` specs
//!
//! Chunks are printed as JSON lines instead of being sent.

use crate::prelude::*;

fn chunk_numbers(lines: &[serde_json::Value]) -> Vec<u64> {
    lines.iter().map(|l| l["chunk"].as_u64().unwrap()).collect()
}

fn text(lines: &[serde_json::Value]) -> String {
    lines.iter().map(|l| l["text"].as_str().unwrap()).collect()
}

#[test]
fn short_input_becomes_one_chunk() {
    let temp = Project::empty();

    let run = temp
        .reporter()
        .args(["logs", "--run", "run-1", "--step", "build", "--dry-run"])
        .stdin("compiling\nfinished\n")
        .passes();

    let lines = run.json_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["runId"], "run-1");
    assert_eq!(lines[0]["stepSafeId"], "build");
    assert_eq!(lines[0]["stream"], "stdout");
    assert_eq!(lines[0]["chunk"], 1);
    assert_eq!(lines[0]["logs"], "Y29tcGlsaW5nCmZpbmlzaGVkCg==");
    assert_eq!(lines[0]["text"], "compiling\nfinished\n");
}

#[test]
fn large_input_is_split_at_max_chunk_size() {
    let temp = Project::empty();
    let input = "x".repeat(250);

    let run = temp
        .reporter()
        .args(["logs", "--run", "run-1", "--step", "build", "--dry-run"])
        .args(["--max-chunk-size", "100"])
        .stdin(input.clone())
        .passes();

    let lines = run.json_lines();
    assert_eq!(chunk_numbers(&lines), vec![1, 2, 3]);
    for line in &lines[..2] {
        assert_eq!(line["text"].as_str().unwrap().len(), 100);
    }
    assert_eq!(text(&lines), input);
}

#[test]
fn empty_input_prints_nothing() {
    let temp = Project::empty();

    temp.reporter()
        .args(["logs", "--run", "run-1", "--step", "build", "--dry-run"])
        .stdin("")
        .passes()
        .stdout_eq("");
}

#[test]
fn stream_is_attributed() {
    let temp = Project::empty();

    let run = temp
        .reporter()
        .args(["logs", "--run", "run-1", "--step", "deploy", "--dry-run"])
        .args(["--stream", "stderr"])
        .stdin("oops\n")
        .passes();

    assert_eq!(run.json_lines()[0]["stream"], "stderr");
}

#[test]
fn config_file_sets_chunk_size() {
    let temp = Project::empty();
    temp.file("reporter.toml", "[logs]\nmax_chunk_size = 10\n");

    let run = temp
        .reporter()
        .args(["--config", "reporter.toml"])
        .args(["logs", "--run", "run-1", "--step", "build", "--dry-run"])
        .stdin("0123456789abcdefghij!")
        .passes();

    let lines = run.json_lines();
    assert_eq!(chunk_numbers(&lines), vec![1, 2, 3]);
    assert_eq!(lines[2]["text"], "!");
}

#[test]
fn dry_run_needs_no_collector() {
    let temp = Project::empty();

    temp.reporter()
        .args(["logs", "--run", "run-1", "--step", "build", "--dry-run"])
        .stdin("hello\n")
        .passes()
        .stderr_lacks("collector");
}
