//! Library-level export properties: order, counts, round-trips, idempotence.

use std::path::Path;

use serde::Serialize;
use serde_json::{json, Value};

use task_export::adapters::live::LiveFileSystem;
use task_export::adapters::memory::{MemoryConsole, MemoryFileSystem};
use task_export::context::ServiceContext;
use task_export::export::{Exporter, DEFAULT_OUTPUT};
use task_export::ports::TaskParent;
use task_export::record::{attributes_of, AttributeMap, Attributes};
use task_export::source::ParentDocument;
use task_export::ExportError;

#[derive(Serialize)]
struct Task {
    id: u64,
    title: String,
    estimate: Option<f64>,
    tags: Vec<String>,
}

impl Attributes for Task {
    fn attributes(&self) -> Result<AttributeMap, ExportError> {
        attributes_of(self)
    }
}

struct Project {
    tasks: Vec<Task>,
}

impl TaskParent for Project {
    type Task = Task;

    fn tasks(&self) -> Result<&[Task], ExportError> {
        Ok(&self.tasks)
    }
}

fn project(n: u64) -> Project {
    Project {
        tasks: (0..n)
            .map(|i| Task {
                id: i,
                title: format!("task {i}"),
                estimate: if i % 2 == 0 { Some(1.5) } else { None },
                tags: vec!["backend".to_string()],
            })
            .collect(),
    }
}

fn export_to_memory<P: TaskParent>(parent: &P) -> (String, Vec<String>) {
    let fs = MemoryFileSystem::new();
    let console = MemoryConsole::new();
    let ctx = ServiceContext::with_ports(fs.clone(), console.clone());
    Exporter::new(&ctx, Path::new(DEFAULT_OUTPUT)).export(parent).unwrap();
    (fs.get(Path::new(DEFAULT_OUTPUT)).unwrap(), console.lines())
}

#[test]
fn output_has_one_entry_per_task_in_order() {
    for n in [0, 1, 5, 40] {
        let (written, lines) = export_to_memory(&project(n));
        let parsed: Vec<Value> = serde_json::from_str(&written).unwrap();

        assert_eq!(parsed.len(), usize::try_from(n).unwrap());
        for (i, entry) in parsed.iter().enumerate() {
            assert_eq!(entry["id"], json!(i));
        }
        assert_eq!(lines, vec!["Tasks have been exported to file.json".to_string()]);
    }
}

#[test]
fn entries_mirror_record_attributes_exactly() {
    let (written, _) = export_to_memory(&project(2));
    let parsed: Vec<Value> = serde_json::from_str(&written).unwrap();

    assert_eq!(
        parsed[0],
        json!({"id": 0, "title": "task 0", "estimate": 1.5, "tags": ["backend"]})
    );
    let keys: Vec<&String> = parsed[1].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["id", "title", "estimate", "tags"]);
    assert_eq!(parsed[1]["estimate"], Value::Null);
}

#[test]
fn reserializing_output_reproduces_it_byte_for_byte() {
    let parent = ParentDocument::from_value(json!({
        "tasks": [
            {"name": "Write spec", "id": 1, "meta": {"done": false, "points": [3, 5]}},
            {"id": 2, "name": "Ünïcode ✓", "assignee": null}
        ]
    }));

    let (written, _) = export_to_memory(&parent);
    let reparsed: Value = serde_json::from_str(&written).unwrap();

    assert_eq!(serde_json::to_string_pretty(&reparsed).unwrap(), written);
}

#[test]
fn repeated_exports_are_byte_identical() {
    let dir = std::env::temp_dir().join("task_export_idempotence");
    std::fs::create_dir_all(&dir).unwrap();
    let output = dir.join("file.json");
    let ctx = ServiceContext::with_ports(LiveFileSystem, MemoryConsole::new());
    let parent = project(3);

    Exporter::new(&ctx, &output).export(&parent).unwrap();
    let first = std::fs::read(&output).unwrap();
    Exporter::new(&ctx, &output).export(&parent).unwrap();
    let second = std::fs::read(&output).unwrap();

    assert_eq!(first, second);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn existing_file_is_fully_overwritten() {
    let fs = MemoryFileSystem::new();
    fs.insert(DEFAULT_OUTPUT, "x".repeat(4096));
    let ctx = ServiceContext::with_ports(fs.clone(), MemoryConsole::new());

    Exporter::new(&ctx, Path::new(DEFAULT_OUTPUT)).export(&project(0)).unwrap();

    assert_eq!(fs.get(Path::new(DEFAULT_OUTPUT)).as_deref(), Some("[]"));
}

#[test]
fn unwritable_output_leaves_console_silent() {
    let fs = MemoryFileSystem::new();
    let console = MemoryConsole::new();
    let ctx = ServiceContext::with_ports(fs.read_only(), console.clone());

    let result = Exporter::new(&ctx, Path::new(DEFAULT_OUTPUT)).export(&project(1));

    assert!(matches!(result, Err(ExportError::Write { .. })));
    assert!(console.lines().is_empty());
}

#[test]
fn infinite_estimate_fails_export_without_output() {
    let fs = MemoryFileSystem::new();
    let console = MemoryConsole::new();
    let ctx = ServiceContext::with_ports(fs.clone(), console.clone());
    let mut parent = project(2);
    parent.tasks[1].estimate = Some(f64::INFINITY);

    let result = Exporter::new(&ctx, Path::new(DEFAULT_OUTPUT)).export(&parent);

    assert!(matches!(result, Err(ExportError::Serialize(_))));
    assert!(fs.get(Path::new(DEFAULT_OUTPUT)).is_none());
    assert!(console.lines().is_empty());
}

#[test]
fn big_integers_and_float_spelling_are_exported_verbatim() {
    let fs = MemoryFileSystem::new();
    fs.insert(
        "op.json",
        r#"{"tasks": [{"id": 123456789012345678901234567890, "ratio": 1.0, "tiny": -0.000001}]}"#,
    );
    let ctx = ServiceContext::with_ports(fs.clone(), MemoryConsole::new());
    let parent = ParentDocument::load(ctx.fs.as_ref(), Path::new("op.json")).unwrap();

    Exporter::new(&ctx, Path::new(DEFAULT_OUTPUT)).export(&parent).unwrap();

    let written = fs.get(Path::new(DEFAULT_OUTPUT)).unwrap();
    assert_eq!(
        written,
        "[\n  {\n    \"id\": 123456789012345678901234567890,\n    \"ratio\": 1.0,\n    \
         \"tiny\": -0.000001\n  }\n]"
    );
    let reparsed: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(serde_json::to_string_pretty(&reparsed).unwrap(), written);
}
