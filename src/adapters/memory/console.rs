//! Console adapter that captures lines instead of printing them.

use std::sync::{Arc, Mutex};

use crate::ports::console::Console;

/// Captures printed lines in memory.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// service context owns another.
#[derive(Clone, Default)]
pub struct MemoryConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryConsole {
    /// Creates an empty console.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every line printed so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }
}

impl Console for MemoryConsole {
    fn print_line(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}
