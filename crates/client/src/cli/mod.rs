//! CLI command definitions.

pub mod notes;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the QuickNotes API.
#[derive(Debug, Parser)]
#[command(name = "quicknotes-client")]
#[command(about = "CLI client for the QuickNotes API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "QUICKNOTES_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Bearer token (see `quicknotes token`).
    #[arg(long, env = "QUICKNOTES_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Note management.
    Notes(notes::NotesCommand),
}
