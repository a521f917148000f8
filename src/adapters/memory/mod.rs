//! In-memory adapters for tests and embedding.

pub mod console;
pub mod filesystem;

pub use console::MemoryConsole;
pub use filesystem::MemoryFileSystem;
