//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `task-export`.
#[derive(Debug, Parser)]
#[command(name = "task-export", version, about = "Export a parent's tasks to JSON")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write every task of a parent document to a pretty-printed JSON file.
    Export {
        /// Parent document (JSON or YAML) holding a `tasks` sequence.
        #[arg(long, short)]
        source: Option<PathBuf>,
        /// Output file, created or overwritten.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
