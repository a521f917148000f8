//! Console port for user-facing output.

/// Emits human-readable lines to the user.
///
/// Kept separate from logging: the console carries only the completion
/// notice, while diagnostics go through `tracing` on stderr.
pub trait Console: Send + Sync {
    /// Writes one line of output.
    fn print_line(&self, line: &str);
}
