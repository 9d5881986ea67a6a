//! CLI definition for todo-cli.
//!
//! The functional interface is the interactive numbered menu; the flags here
//! only tune where the data file and diagnostics go.

use clap::Parser;
use std::path::PathBuf;

/// Interactive task list manager with JSON file persistence
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the JSON data file (overrides config)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2")]
    pub log: String,
}
