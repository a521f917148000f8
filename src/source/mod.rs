//! Parent documents loaded from JSON or YAML files.
//!
//! A parent document is a mapping with a `tasks` sequence:
//!
//! ```yaml
//! name: Release 1.0
//! tasks:
//!   - id: 1
//!     name: Write spec
//!   - id: 2
//!     name: Review spec
//! ```
//!
//! Keys other than `tasks` belong to the parent and are not exported.

use std::path::Path;

use serde_json::Value;

use crate::error::ExportError;
use crate::ports::filesystem::FileSystem;
use crate::ports::tasks::TaskParent;
use crate::record::ensure_finite;

/// Name of the association the exporter reads.
pub const TASKS_ASSOCIATION: &str = "tasks";

/// Serialization format of a parent document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON text.
    Json,
    /// YAML text.
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a file extension; anything but `.yaml`/`.yml` is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// A parent object parsed from a document, owning its task records.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentDocument {
    tasks: Option<Vec<Value>>,
}

impl ParentDocument {
    /// Reads and parses a parent document through the filesystem port.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Read`] if the file cannot be read and
    /// [`ExportError::Parse`] if it is not valid for its format.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self, ExportError> {
        let contents = fs.read_to_string(path).map_err(|e| ExportError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&contents, DocumentFormat::from_path(path))
            .map_err(|message| ExportError::Parse { path: path.to_path_buf(), message })
    }

    /// Parses a parent document from text.
    ///
    /// A document without a `tasks` sequence still parses; the missing
    /// association surfaces when [`TaskParent::tasks`] is called.
    ///
    /// # Errors
    ///
    /// Returns the parser's message when the text is malformed, or when a
    /// YAML document holds a NaN or infinite number.
    pub fn parse(contents: &str, format: DocumentFormat) -> Result<Self, String> {
        let value: Value = match format {
            DocumentFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string())?,
            DocumentFormat::Yaml => {
                // YAML can spell `.nan` and `.inf`; JSON values would turn them into null.
                let yaml: serde_yaml::Value =
                    serde_yaml::from_str(contents).map_err(|e| e.to_string())?;
                ensure_finite(&yaml).map_err(|e| e.to_string())?;
                serde_yaml::from_value(yaml).map_err(|e| e.to_string())?
            }
        };
        Ok(Self::from_value(value))
    }

    /// Wraps an already-parsed parent value.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let tasks = match value {
            Value::Object(mut map) => match map.remove(TASKS_ASSOCIATION) {
                Some(Value::Array(tasks)) => Some(tasks),
                _ => None,
            },
            _ => None,
        };
        Self { tasks }
    }
}

impl TaskParent for ParentDocument {
    type Task = Value;

    fn tasks(&self) -> Result<&[Value], ExportError> {
        self.tasks.as_deref().ok_or_else(|| ExportError::MissingAssociation {
            association: TASKS_ASSOCIATION.to_string(),
        })
    }
}
