//! Command dispatch and handlers.

pub mod export;

use crate::cli::Command;
use crate::config::ExportConfig;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler using live adapters.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Export { source, output } => {
            let config = ExportConfig::resolve(source.clone(), output.clone());
            export::run_with_context(ctx, &config)
        }
    }
}
