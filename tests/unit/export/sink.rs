use super::*;
use crate::sampling::sampler::{ProgressSampler, SamplerOpts};
use crate::schedule::builtin::circular;

fn circular_samples(count: usize) -> (AnimationSchedule, Vec<ProgressSample>) {
    let schedule = circular().unwrap();
    let samples = ProgressSampler::new(SamplerOpts::default())
        .unwrap()
        .sample(&schedule, count)
        .unwrap();
    (schedule, samples)
}

#[test]
fn in_memory_sink_sees_begin_samples_end() {
    let (schedule, samples) = circular_samples(5);
    let mut sink = InMemorySink::new();
    export_samples(&mut sink, &schedule, &samples).unwrap();

    let cfg = sink.config().unwrap();
    assert_eq!(cfg.schedule, "circular");
    assert_eq!(cfg.total, 1.8);
    assert_eq!(cfg.roles.len(), 2);
    assert_eq!(sink.samples(), samples.as_slice());
    assert!(sink.is_finished());
}

#[test]
fn csv_has_header_and_one_row_per_sample() {
    let (schedule, samples) = circular_samples(3);
    let mut sink = CsvSink::new(Vec::new());
    export_samples(&mut sink, &schedule, &samples).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "time,end,start");
    assert_eq!(lines[1], "0,0,0");
    assert_eq!(lines[3], "1.8,1,1");
}

#[test]
fn csv_leaves_missing_roles_empty() {
    let (schedule, mut samples) = circular_samples(1);
    samples[0].values.truncate(1);
    let mut sink = CsvSink::new(Vec::new());
    export_samples(&mut sink, &schedule, &samples).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(text.lines().nth(1), Some("0,0,"));
}

#[test]
fn json_document_carries_config_and_samples() {
    let (schedule, samples) = circular_samples(4);
    let mut sink = JsonSink::new(Vec::new());
    export_samples(&mut sink, &schedule, &samples).unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();

    assert_eq!(doc["schedule"], "circular");
    assert_eq!(doc["total"], 1.8);
    assert_eq!(doc["roles"], serde_json::json!(["end", "start"]));
    let rows = doc["samples"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3]["values"][0]["role"], "end");
    assert_eq!(rows[3]["values"][0]["value"], 1.0);
}

#[test]
fn json_sink_requires_begin() {
    let mut sink = JsonSink::new(Vec::new());
    let err = sink.end().unwrap_err();
    assert!(matches!(err, StrokeError::Evaluation(_)));
}
