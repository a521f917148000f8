//! `task-export export` command.

use tracing::debug;

use crate::config::ExportConfig;
use crate::context::ServiceContext;
use crate::export::Exporter;
use crate::source::ParentDocument;

/// Execute the `export` command against the given context.
///
/// Loads the parent document at `config.source` and exports its tasks to
/// `config.output`.
///
/// # Errors
///
/// Returns an error string if loading or exporting fails.
pub fn run_with_context(ctx: &ServiceContext, config: &ExportConfig) -> Result<(), String> {
    debug!(source = %config.source.display(), "loading parent document");
    let parent =
        ParentDocument::load(ctx.fs.as_ref(), &config.source).map_err(|e| e.to_string())?;
    let summary = Exporter::new(ctx, &config.output).export(&parent).map_err(|e| e.to_string())?;
    debug!(tasks = summary.task_count, bytes = summary.bytes, "export summary");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::adapters::memory::{MemoryConsole, MemoryFileSystem};

    fn config() -> ExportConfig {
        ExportConfig { source: PathBuf::from("op.yaml"), output: PathBuf::from("file.json") }
    }

    #[test]
    fn exports_yaml_parent() {
        let fs = MemoryFileSystem::new();
        let console = MemoryConsole::new();
        fs.insert("op.yaml", "tasks:\n  - id: 1\n    name: Write spec\n");
        let ctx = ServiceContext::with_ports(fs.clone(), console.clone());

        run_with_context(&ctx, &config()).unwrap();

        let written = fs.get(Path::new("file.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, serde_json::json!([{"id": 1, "name": "Write spec"}]));
        assert_eq!(console.lines(), vec!["Tasks have been exported to file.json".to_string()]);
    }

    #[test]
    fn yaml_nan_aborts_export() {
        let fs = MemoryFileSystem::new();
        let console = MemoryConsole::new();
        fs.insert("op.yaml", "tasks:\n  - id: 1\n    est: .nan\n");
        let ctx = ServiceContext::with_ports(fs.clone(), console.clone());

        let err = run_with_context(&ctx, &config()).unwrap_err();

        assert!(err.contains("Failed to parse op.yaml"));
        assert!(fs.get(Path::new("file.json")).is_none());
        assert!(console.lines().is_empty());
    }

    #[test]
    fn missing_source_is_reported() {
        let ctx = ServiceContext::with_ports(MemoryFileSystem::new(), MemoryConsole::new());

        let err = run_with_context(&ctx, &config()).unwrap_err();

        assert!(err.contains("Failed to read op.yaml"));
    }
}
