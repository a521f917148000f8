//! Task records and their attribute mappings.
//!
//! A task record is anything that can hand back an ordered field name to
//! value mapping. Typed records implement [`Attributes`] through
//! [`attributes_of`]; loosely typed records arrive as JSON values.

mod finite;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ExportError;

pub use finite::ensure_finite;

/// Ordered field name to value mapping for one task record.
pub type AttributeMap = Map<String, Value>;

/// A record that can produce its full attribute mapping.
pub trait Attributes {
    /// Returns every field of the record, in the record's own field order.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NotAnObject`] when the record does not
    /// serialize to a field mapping, or [`ExportError::Serialize`] when a
    /// field value cannot be represented as JSON.
    fn attributes(&self) -> Result<AttributeMap, ExportError>;
}

impl Attributes for AttributeMap {
    fn attributes(&self) -> Result<AttributeMap, ExportError> {
        Ok(self.clone())
    }
}

impl Attributes for Value {
    fn attributes(&self) -> Result<AttributeMap, ExportError> {
        match self {
            Value::Object(map) => Ok(map.clone()),
            other => Err(ExportError::NotAnObject { index: 0, found: json_kind(other) }),
        }
    }
}

/// Extracts the attribute mapping of any serializable record.
///
/// Struct fields keep their declaration order.
///
/// # Errors
///
/// Returns [`ExportError::Serialize`] if the record fails to serialize or
/// holds a NaN or infinite float, and [`ExportError::NotAnObject`] if it
/// does not serialize to a JSON object.
pub fn attributes_of<T: Serialize + ?Sized>(record: &T) -> Result<AttributeMap, ExportError> {
    ensure_finite(record)?;
    serde_json::to_value(record)?.attributes()
}

/// Short name of a JSON value's kind, for error messages.
#[must_use]
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
