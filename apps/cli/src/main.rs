//! # Tome CLI
//!
//! Terminal entry point for the sales ledger. Opens (or creates) the
//! SQLite database next to the binary, runs embedded migrations, then
//! hands stdin/stdout to the interactive shell.
//!
//! Logging goes to stderr and stays out of the way of the prompts;
//! default level is `warn`, override with `RUST_LOG`.

mod error;
mod render;
mod shell;

use std::io;

use tracing_subscriber::EnvFilter;

use shell::Shell;
use tome_db::{Database, DbConfig};

/// Database file created in the working directory on first run.
const DB_FILE: &str = "tome.db";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let db = match Database::new(DbConfig::new(DB_FILE)).await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("=> Database connection error: {err}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(db.clone(), stdin.lock(), io::stdout());

    if let Err(err) = shell.run().await {
        eprintln!("=> Fatal error: {err}");
        db.close().await;
        std::process::exit(1);
    }

    db.close().await;
}
