//! Live adapters for real external interactions.

pub mod console;
pub mod filesystem;

pub use console::LiveConsole;
pub use filesystem::LiveFileSystem;
