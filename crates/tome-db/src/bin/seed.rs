//! # Seed Data Generator
//!
//! Populates the database with demo members and books for development.
//! The ledger itself never creates members or books, so a fresh database
//! needs this once before any sale can be recorded.
//!
//! ## Usage
//! ```bash
//! # Seed the default database (./tome.db)
//! cargo run -p tome-db --bin seed
//!
//! # Specify database path
//! cargo run -p tome-db --bin seed -- --db ./data/tome.db
//! ```
//!
//! Seeding is idempotent in the cheap way: if any members already exist
//! the run is skipped entirely.

use std::env;

use tome_core::{Book, Member, Money};
use tome_db::{Database, DbConfig, DbResult};

/// Demo members: (id, name)
const MEMBERS: &[(&str, &str)] = &[
    ("M001", "Alice Chen"),
    ("M002", "Bob Lin"),
    ("M003", "Carol Wang"),
    ("M004", "David Wu"),
];

/// Demo books: (id, title, price, stock)
const BOOKS: &[(&str, &str, i64, i64)] = &[
    ("B1", "The Rust Programming Language", 100, 10),
    ("B2", "Programming Pearls", 450, 8),
    ("B3", "The Pragmatic Programmer", 520, 12),
    ("B4", "Structure and Interpretation of Computer Programs", 680, 5),
    ("B5", "Designing Data-Intensive Applications", 890, 7),
    ("B6", "Clean Code", 480, 15),
];

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Seed failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> DbResult<()> {
    let db_path = parse_db_path().unwrap_or_else(|| "tome.db".to_string());

    println!("Seeding database at {db_path}");
    let db = Database::new(DbConfig::new(&db_path)).await?;

    if db.members().count().await? > 0 {
        println!("Database already seeded, nothing to do");
        return Ok(());
    }

    for (id, name) in MEMBERS {
        db.members()
            .insert(&Member {
                id: id.to_string(),
                name: name.to_string(),
            })
            .await?;
    }
    println!("Inserted {} members", MEMBERS.len());

    for (id, title, price, stock) in BOOKS {
        db.books()
            .insert(&Book {
                id: id.to_string(),
                title: title.to_string(),
                price: Money::from_units(*price),
                stock: *stock,
            })
            .await?;
    }
    println!("Inserted {} books", BOOKS.len());

    db.close().await;
    println!("Done");
    Ok(())
}

/// Parses `--db <path>` from the command line.
fn parse_db_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|a| a == "--db")
        .and_then(|i| args.get(i + 1))
        .cloned()
}
