//! Task export: parent tasks to a pretty-printed JSON file.
//!
//! The export is a single straight-line pass:
//!
//! 1. read the parent's `tasks` association,
//! 2. extract each record's attribute mapping in order,
//! 3. render the mappings as an indented JSON array,
//! 4. create or truncate the output file with that text,
//! 5. print the completion notice.
//!
//! Any failure aborts the pass before the notice is printed.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::context::ServiceContext;
use crate::error::ExportError;
use crate::ports::tasks::TaskParent;
use crate::record::{AttributeMap, Attributes};

/// Output path used when none is configured.
pub const DEFAULT_OUTPUT: &str = "file.json";

/// Outcome of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of task records written.
    pub task_count: usize,
    /// File the export document was written to.
    pub output: PathBuf,
    /// Size of the written document in bytes.
    pub bytes: usize,
}

/// Writes a parent's tasks to a JSON file through the service context's ports.
pub struct Exporter<'a> {
    ctx: &'a ServiceContext,
    output: PathBuf,
}

impl<'a> Exporter<'a> {
    /// Creates an exporter writing to `output`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, output: &Path) -> Self {
        Self { ctx, output: output.to_path_buf() }
    }

    /// Exports every task of `parent` and prints the completion notice.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent has no usable `tasks` association, a
    /// task has no attribute mapping, serialization fails, or the output
    /// file cannot be written. No notice is printed in any of these cases.
    pub fn export<P: TaskParent>(&self, parent: &P) -> Result<ExportSummary, ExportError> {
        let tasks = parent.tasks()?;
        debug!(count = tasks.len(), "collected tasks");

        let document = collect_attributes(tasks)?;
        let json = render(&document)?;
        debug!(bytes = json.len(), output = %self.output.display(), "rendered export document");

        self.ctx.fs.write(&self.output, &json).map_err(|e| ExportError::Write {
            path: self.output.clone(),
            message: e.to_string(),
        })?;

        self.ctx.console.print_line(&notice(&self.output));
        info!(tasks = document.len(), output = %self.output.display(), "export finished");

        Ok(ExportSummary {
            task_count: document.len(),
            output: self.output.clone(),
            bytes: json.len(),
        })
    }
}

/// Extracts the attribute mapping of each task, preserving order.
///
/// # Errors
///
/// Returns the first extraction failure, tagged with the record's index.
pub fn collect_attributes<T: Attributes>(tasks: &[T]) -> Result<Vec<AttributeMap>, ExportError> {
    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| {
            task.attributes().map_err(|err| match err {
                ExportError::NotAnObject { found, .. } => ExportError::NotAnObject { index, found },
                other => other,
            })
        })
        .collect()
}

/// Renders the export document as two-space indented JSON.
///
/// An empty document renders as `[]`. No trailing newline is added.
///
/// # Errors
///
/// Returns an error if a value cannot be serialized.
pub fn render(document: &[AttributeMap]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Completion line printed after a successful export.
#[must_use]
pub fn notice(output: &Path) -> String {
    format!("Tasks have been exported to {}", output.display())
}
