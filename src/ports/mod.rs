//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the exporter and the outside
//! world (filesystem, console, the parent object that owns the tasks).
//! Implementations live in `src/adapters/`.

pub mod console;
pub mod filesystem;
pub mod tasks;

pub use console::Console;
pub use filesystem::FileSystem;
pub use tasks::TaskParent;
