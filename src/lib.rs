//! Core library entry for the `task-export` CLI.
//!
//! Exports the `tasks` association of a parent object to a pretty-printed
//! JSON file. The library side is usable without the CLI: implement
//! [`ports::TaskParent`] for your parent type and hand it to
//! [`export::Exporter`].

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod export;
pub mod logging;
pub mod ports;
pub mod record;
pub mod source;

use clap::Parser;

pub use error::ExportError;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
