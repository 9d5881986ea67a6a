//! Todo CLI
//!
//! Interactive task list manager: loads the persisted list, then drives the
//! numbered-menu shell until the user exits or interrupts.

use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use todo_cli::cli::Cli;
use todo_cli::config::Config;
use todo_cli::format;
use todo_cli::paths;
use todo_cli::shell::Shell;
use todo_cli::storage::JsonStorage;
use todo_cli::store::TaskStore;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option. Diagnostics never go to
    // stdout by default so they cannot corrupt the menu.
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    let config = Config::load(cli.config.as_deref())?;
    let data_file = paths::resolve_data_file(cli.file.as_deref(), &config);
    info!(path = %data_file.display(), "Using data file");

    let storage = JsonStorage::new(data_file);
    let store = match TaskStore::load(storage.clone()) {
        Ok(store) => {
            info!(tasks = store.len(), "Todo list ready");
            store
        }
        Err(e) => {
            // Keep running with an empty list; memory is authoritative for
            // the rest of the session.
            warn!(error = %format!("{:#}", e), "Failed to load todo list");
            println!("An error occurred while loading: {:#}", e);
            TaskStore::new(storage)
        }
    };

    println!("{}", format::BANNER);
    Shell::new(store).run().await
}
