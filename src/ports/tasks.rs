//! Task parent port: the object that owns a `tasks` association.

use crate::error::ExportError;
use crate::record::Attributes;

/// An already-loaded parent object exposing an ordered `tasks` association.
///
/// The exporter only borrows the tasks; it never mutates the parent.
pub trait TaskParent {
    /// Record type held by the association.
    type Task: Attributes;

    /// Returns the tasks in association order.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MissingAssociation`] when the parent has no
    /// usable `tasks` association.
    fn tasks(&self) -> Result<&[Self::Task], ExportError>;
}
