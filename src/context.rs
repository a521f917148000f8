//! Service context bundling all port trait objects.

use crate::adapters::live::{LiveConsole, LiveFileSystem};
use crate::ports::console::Console;
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects an export needs.
///
/// Constructors wire up different adapter implementations (live or
/// in-memory).
pub struct ServiceContext {
    /// Filesystem for reading the parent and writing the export.
    pub fs: Box<dyn FileSystem>,
    /// Console for the completion notice.
    pub console: Box<dyn Console>,
}

impl ServiceContext {
    /// Creates a live context backed by the real disk and stdout.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem), console: Box::new(LiveConsole) }
    }

    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn with_ports(fs: impl FileSystem + 'static, console: impl Console + 'static) -> Self {
        Self { fs: Box::new(fs), console: Box::new(console) }
    }
}
