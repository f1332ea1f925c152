//! # Domain Types
//!
//! Core domain types used throughout the Tome ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Member      │   │      Book       │   │      Sale       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (business)  │   │  id (business)  │   │  id (rowid)     │       │
//! │  │  name           │   │  title          │   │  date           │       │
//! │  │                 │   │  price (Money)  │   │  member_id (FK) │       │
//! │  │                 │   │  stock          │   │  book_id (FK)   │       │
//! │  └─────────────────┘   └─────────────────┘   │  quantity       │       │
//! │                                              │  discount       │       │
//! │  Read models:                                │  total          │       │
//! │  SaleSummary, SaleReportRow                  └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Members and books carry operator-assigned business ids (`M001`, `B1`).
//! Sales use the database's autoincrement rowid, assigned on insert.
//!
//! ## Sale Dates
//! A sale date is a `String`, not a calendar type. The ledger's date rule
//! (see [`crate::validation::validate_sale_date`]) accepts day 1-31 for any
//! month, which a real calendar type could not represent.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Member
// =============================================================================

/// A registered store member. Immutable within the ledger's scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Member {
    /// Business identifier (e.g. `M001`).
    pub id: String,

    /// Display name shown in listings and reports.
    pub name: String,
}

// =============================================================================
// Book
// =============================================================================

/// A book available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Book {
    /// Business identifier (e.g. `B1`).
    pub id: String,

    /// Title shown in reports.
    pub title: String,

    /// Unit price in whole currency units.
    pub price: Money,

    /// Remaining purchasable quantity. Never negative: sale creation
    /// decrements it behind an atomic guard, sale deletion restores it.
    pub stock: i64,
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale linking one member and one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    /// Autoincrement identifier, assigned by the database on insert.
    pub id: i64,

    /// Sale date as validated `YYYY-MM-DD` text.
    pub date: String,

    /// Member the sale was recorded against.
    pub member_id: String,

    /// Book that was sold.
    pub book_id: String,

    /// Number of copies sold. Always positive.
    pub quantity: i64,

    /// Flat discount subtracted from the gross amount.
    pub discount: Money,

    /// price × quantity − discount, computed at record time.
    /// May be negative when the discount exceeds the gross amount.
    pub total: Money,
}

// =============================================================================
// Read Models
// =============================================================================

/// One line of the update/delete selection menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleSummary {
    /// Sale identifier.
    pub id: i64,

    /// Sale date.
    pub date: String,

    /// Member name resolved through the member table.
    pub member_name: String,
}

/// One fully joined row of the sale report.
///
/// `unit_price` is the book's current price; `total` is the amount stored
/// when the sale was recorded or last updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleReportRow {
    /// Sale identifier.
    pub id: i64,

    /// Sale date.
    pub date: String,

    /// Member name resolved through the member table.
    pub member_name: String,

    /// Book title resolved through the book table.
    pub book_title: String,

    /// The book's unit price.
    pub unit_price: Money,

    /// Number of copies sold.
    pub quantity: i64,

    /// Flat discount applied.
    pub discount: Money,

    /// Stored sale total.
    pub total: Money,
}
