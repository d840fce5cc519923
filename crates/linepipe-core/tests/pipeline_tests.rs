use linepipe_core::{OutputSink, Pipeline, StageSpec, Transform};
use std::io::Cursor;
use std::sync::{Arc, Mutex};

struct Reverse;
impl Transform for Reverse {
    fn apply(&mut self, input: &str) -> Option<String> {
        Some(input.chars().rev().collect())
    }
}

struct Prefix(&'static str);
impl Transform for Prefix {
    fn apply(&mut self, input: &str) -> Option<String> {
        Some(format!("{}{}", self.0, input))
    }
}

fn collect_output(output: &OutputSink) -> String {
    String::from_utf8(output.lock().unwrap().clone()).unwrap()
}

fn buffer() -> OutputSink {
    Arc::new(Mutex::new(Vec::new()))
}

#[test]
fn single_stage_round_trip() {
    let output = buffer();
    let pipeline = Pipeline::build(
        vec![StageSpec {
            name: "prefix".into(),
            queue_size: 4,
            transform: Box::new(Prefix("[logger] ")),
        }],
        Arc::clone(&output),
    )
    .unwrap();

    pipeline.run(Cursor::new(b"hello\n<END>\n" as &[u8]));

    assert_eq!(
        collect_output(&output),
        "[logger] hello\nPipeline shutdown complete\n"
    );
}

#[test]
fn double_reverse_is_identity() {
    let output = buffer();
    let pipeline = Pipeline::build(
        vec![
            StageSpec {
                name: "flipper".into(),
                queue_size: 4,
                transform: Box::new(Reverse),
            },
            StageSpec {
                name: "flipper".into(),
                queue_size: 4,
                transform: Box::new(Reverse),
            },
        ],
        Arc::clone(&output),
    )
    .unwrap();

    pipeline.run(Cursor::new(b"hello\nworld\n<END>\n" as &[u8]));

    assert_eq!(
        collect_output(&output),
        "hello\nworld\nPipeline shutdown complete\n"
    );
}

#[test]
fn missing_sentinel_is_synthesized_on_eof() {
    let output = buffer();
    let pipeline = Pipeline::build(
        vec![StageSpec {
            name: "prefix".into(),
            queue_size: 4,
            transform: Box::new(Prefix("> ")),
        }],
        Arc::clone(&output),
    )
    .unwrap();

    // No trailing <END> line: the driver must synthesize one on EOF.
    pipeline.run(Cursor::new(b"only line\n" as &[u8]));

    assert_eq!(
        collect_output(&output),
        "> only line\nPipeline shutdown complete\n"
    );
}

#[test]
fn small_queue_does_not_drop_items() {
    let output = buffer();
    let pipeline = Pipeline::build(
        vec![StageSpec {
            name: "prefix".into(),
            queue_size: 2,
            transform: Box::new(Prefix("")),
        }],
        Arc::clone(&output),
    )
    .unwrap();

    pipeline.run(Cursor::new(b"a\nb\nc\nd\ne\n<END>\n" as &[u8]));

    assert_eq!(
        collect_output(&output),
        "a\nb\nc\nd\ne\nPipeline shutdown complete\n"
    );
}

#[test]
fn multi_stage_chain_preserves_order() {
    let output = buffer();
    let pipeline = Pipeline::build(
        vec![
            StageSpec {
                name: "flipper".into(),
                queue_size: 4,
                transform: Box::new(Reverse),
            },
            StageSpec {
                name: "prefix".into(),
                queue_size: 4,
                transform: Box::new(Prefix(">> ")),
            },
        ],
        Arc::clone(&output),
    )
    .unwrap();

    pipeline.run(Cursor::new(b"abc\ndef\n<END>\n" as &[u8]));

    assert_eq!(
        collect_output(&output),
        ">> cba\n>> fed\nPipeline shutdown complete\n"
    );
    assert_eq!(pipeline.stage_names(), vec!["flipper", "prefix"]);
}
