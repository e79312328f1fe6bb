use std::sync::{Arc, Mutex};
use stream_samples::domain::ports::Sink;
use stream_samples::{
    EvenFilterPipeline, LengthGroupPipeline, Result, SortPipeline, StreamEngine,
    UpperCasePipeline,
};

#[derive(Clone)]
struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

#[test]
fn test_end_to_end_even_filter() {
    let sink = MemorySink::new();
    let mut engine = StreamEngine::new(EvenFilterPipeline, sink.clone());

    let line = engine.run().unwrap();

    assert_eq!(line, "[2,4,6,8,10]");
    assert_eq!(sink.lines(), vec!["[2,4,6,8,10]".to_string()]);
}

#[test]
fn test_end_to_end_sort() {
    let sink = MemorySink::new();
    let mut engine = StreamEngine::new(SortPipeline, sink.clone());

    let line = engine.run().unwrap();

    assert_eq!(line, "[1,2,3,4,7]");
    assert_eq!(sink.lines(), vec!["[1,2,3,4,7]".to_string()]);
}

#[test]
fn test_end_to_end_upper_case() {
    let sink = MemorySink::new();
    let mut engine = StreamEngine::new(UpperCasePipeline, sink.clone());

    let line = engine.run().unwrap();

    assert_eq!(line, r#"["APPLE","BANANA","KIWI"]"#);
    assert_eq!(sink.lines(), vec![r#"["APPLE","BANANA","KIWI"]"#.to_string()]);
}

#[test]
fn test_end_to_end_length_group() {
    let sink = MemorySink::new();
    let mut engine = StreamEngine::new(LengthGroupPipeline, sink.clone());

    let line = engine.run().unwrap();

    assert_eq!(line, r#"{"4":["kiwi","pear","plum"],"5":["apple","grape"]}"#);
    assert_eq!(
        sink.lines(),
        vec![r#"{"4":["kiwi","pear","plum"],"5":["apple","grape"]}"#.to_string()]
    );
}

#[test]
fn test_each_example_writes_exactly_one_line() {
    let sink = MemorySink::new();

    StreamEngine::new(EvenFilterPipeline, sink.clone())
        .run()
        .unwrap();
    StreamEngine::new(SortPipeline, sink.clone()).run().unwrap();
    StreamEngine::new(UpperCasePipeline, sink.clone())
        .run()
        .unwrap();
    StreamEngine::new(LengthGroupPipeline, sink.clone())
        .run()
        .unwrap();

    assert_eq!(sink.lines().len(), 4);
}

#[test]
fn test_rendered_lines_parse_back_as_json() {
    let sink = MemorySink::new();
    let line = StreamEngine::new(LengthGroupPipeline, sink).run().unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();

    assert_eq!(parsed["4"], serde_json::json!(["kiwi", "pear", "plum"]));
    assert_eq!(parsed["5"], serde_json::json!(["apple", "grape"]));
}
