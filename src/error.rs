//! Error type shared by every stage of an export.

use std::path::PathBuf;

/// Failure raised while loading a parent, extracting attributes, or writing output.
///
/// None of these are recovered from; they abort the export and propagate to
/// the caller.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The parent source could not be read.
    #[error("Failed to read {}: {message}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O message.
        message: String,
    },

    /// The parent source was read but is not valid JSON or YAML.
    #[error("Failed to parse {}: {message}", path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The parent has no usable association with the given name.
    #[error("Parent has no usable `{association}` association")]
    MissingAssociation {
        /// Association name (always `tasks` for exports).
        association: String,
    },

    /// A task record did not produce a field mapping.
    #[error("Task at index {index} has no attribute mapping (found {found})")]
    NotAnObject {
        /// Position of the record in the collection.
        index: usize,
        /// JSON kind that was found instead of an object.
        found: &'static str,
    },

    /// The export document could not be serialized.
    #[error("Failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file could not be written.
    #[error("Failed to write {}: {message}", path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O message.
        message: String,
    },
}
