//! End-to-end scenarios from the design's testable-properties section,
//! run in-process against [`linepipe_cli::run`] rather than by spawning a
//! subprocess, since the driver is generic over any `Read`/`Write`.

use linepipe_cli::{run, EXIT_CONFIG_ERROR, EXIT_OK};
use linepipe_core::OutputSink;
use linepipe_stages::StageRegistry;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn run_scenario(cli_args: &[&str], input: &str) -> (i32, String) {
    let registry = StageRegistry::with_builtin_stages();
    let output: OutputSink = Arc::new(Mutex::new(Vec::new()));
    let mut usage = Vec::new();
    let code = run(
        &args(cli_args),
        Cursor::new(input.as_bytes()),
        Arc::clone(&output),
        &registry,
        &mut usage,
    );
    let produced = String::from_utf8(output.lock().unwrap().clone()).unwrap();
    (code, produced)
}

#[test]
fn scenario_1_uppercaser_then_logger() {
    let (code, output) = run_scenario(&["10", "uppercaser", "logger"], "hello\n<END>\n");
    assert_eq!(code, EXIT_OK);
    assert_eq!(output, "[logger] HELLO\nPipeline shutdown complete\n");
}

#[test]
fn scenario_2_rotator_then_logger() {
    let (code, output) = run_scenario(&["10", "rotator", "logger"], "hello\n<END>\n");
    assert_eq!(code, EXIT_OK);
    assert_eq!(output, "[logger] ohell\nPipeline shutdown complete\n");
}

#[test]
fn scenario_3_flipper_then_logger() {
    let (code, output) = run_scenario(&["10", "flipper", "logger"], "hello\n<END>\n");
    assert_eq!(code, EXIT_OK);
    assert_eq!(output, "[logger] olleh\nPipeline shutdown complete\n");
}

#[test]
fn scenario_4_expander_then_logger() {
    let (code, output) = run_scenario(&["10", "expander", "logger"], "abc\n<END>\n");
    assert_eq!(code, EXIT_OK);
    assert_eq!(output, "[logger] a b c\nPipeline shutdown complete\n");
}

#[test]
fn scenario_5_small_queue_blocks_and_resumes_without_loss() {
    let (code, output) = run_scenario(&["2", "logger"], "a\nb\nc\n<END>\n");
    assert_eq!(code, EXIT_OK);
    assert_eq!(
        output,
        "[logger] a\n[logger] b\n[logger] c\nPipeline shutdown complete\n"
    );
}

#[test]
fn scenario_6_repeated_stage_has_independent_state() {
    let (code, output) = run_scenario(
        &["10", "rotator", "rotator", "rotator", "logger"],
        "hello\n<END>\n",
    );
    assert_eq!(code, EXIT_OK);
    assert_eq!(output, "[logger] llohe\nPipeline shutdown complete\n");
}

#[test]
fn scenario_7_negative_queue_size_is_a_config_error() {
    let (code, _output) = run_scenario(&["-5", "logger"], "hello\n<END>\n");
    assert_eq!(code, EXIT_CONFIG_ERROR);
}

#[test]
fn scenario_8a_missing_stage_list_is_a_config_error() {
    let (code, _output) = run_scenario(&["10"], "hello\n<END>\n");
    assert_eq!(code, EXIT_CONFIG_ERROR);
}

#[test]
fn scenario_8b_eof_without_sentinel_synthesizes_one_and_exits_cleanly() {
    let (code, output) = run_scenario(&["10", "logger"], "hello\n");
    assert_eq!(code, EXIT_OK);
    assert_eq!(output, "[logger] hello\nPipeline shutdown complete\n");
}

#[test]
fn unknown_stage_name_is_a_config_error() {
    let (code, _output) = run_scenario(&["10", "not-a-real-stage"], "hello\n<END>\n");
    assert_eq!(code, EXIT_CONFIG_ERROR);
}
