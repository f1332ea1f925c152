//! # Repository Module
//!
//! Database repository implementations for the Tome ledger.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Shell handler                                                         │
//! │       │                                                                 │
//! │       │  db.sales().create(date, member_id, book_id, qty, discount)    │
//! │       ▼                                                                 │
//! │  SaleRepository                                                        │
//! │  ├── create(...)        one transaction: insert + stock decrement      │
//! │  ├── report()                                                          │
//! │  ├── update_discount()  one transaction: recompute + update            │
//! │  └── delete()           one transaction: restore stock + delete row    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place                                        │
//! │  • Multi-statement changes are never observable half-applied           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`member::MemberRepository`] - Member lookups
//! - [`book::BookRepository`] - Book lookups and stock adjustments
//! - [`sale::SaleRepository`] - Sale transactions, report, listings

pub mod book;
pub mod member;
pub mod sale;
