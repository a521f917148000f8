//! Live console writing to standard output.

use crate::ports::console::Console;

/// Live console that prints each line to stdout.
pub struct LiveConsole;

impl Console for LiveConsole {
    fn print_line(&self, line: &str) {
        println!("{line}");
    }
}
