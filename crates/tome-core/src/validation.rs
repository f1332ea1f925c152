//! # Validation Module
//!
//! Input validation for the Tome ledger.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell prompts (apps/cli)                                     │
//! │  └── THIS MODULE: format and range rules, shared by every prompt       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Repository transactions (tome-db)                            │
//! │  └── Atomic stock guard re-checked inside the transaction              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── CHECK constraints (stock >= 0, quantity > 0)                      │
//! │  └── Foreign key constraints                                           │
//! │                                                                         │
//! │  Defense in depth: each layer catches a different failure mode         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every interactive entry point parses through these functions so the
//! rules cannot drift between handlers.

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Date Validator
// =============================================================================

/// Validates a sale date string as `YYYY-MM-DD`.
///
/// ## Rules
/// - Exactly 10 bytes with exactly two hyphens
/// - All three tokens parse as integers
/// - Month in [1, 12], day in [1, 31]
///
/// Day ranges are NOT checked against month length or leap years, so
/// `2024-02-31` passes. Known laxness, kept deliberately.
///
/// ## Example
/// ```rust
/// use tome_core::validation::validate_sale_date;
///
/// assert!(validate_sale_date("2024-01-15").is_ok());
/// assert!(validate_sale_date("2024-13-01").is_err());
/// assert!(validate_sale_date("2024/01/01").is_err());
/// ```
pub fn validate_sale_date(date: &str) -> ValidationResult<()> {
    if date.len() != 10 || date.bytes().filter(|&b| b == b'-').count() != 2 {
        return Err(ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        });
    }

    let mut tokens = date.split('-').map(|t| t.parse::<i64>());
    let (year, month, day) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(Ok(y)), Some(Ok(m)), Some(Ok(d))) => (y, m, d),
        _ => {
            return Err(ValidationError::InvalidFormat {
                field: "date".to_string(),
                reason: "expected YYYY-MM-DD".to_string(),
            })
        }
    };
    let _ = year; // any integer year is accepted

    if !(1..=12).contains(&month) {
        return Err(ValidationError::OutOfRange {
            field: "month".to_string(),
            min: 1,
            max: 12,
        });
    }
    if !(1..=31).contains(&day) {
        return Err(ValidationError::OutOfRange {
            field: "day".to_string(),
            min: 1,
            max: 31,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a purchase quantity from raw prompt input.
///
/// ## Rules
/// - Must parse as an integer
/// - Must be positive (> 0)
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let qty: i64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be an integer".to_string(),
        })?;

    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(qty)
}

/// Parses a flat discount amount from raw prompt input.
///
/// ## Rules
/// - Must parse as an integer
/// - Must be non-negative (zero means no discount)
pub fn parse_discount(input: &str) -> ValidationResult<Money> {
    let amount: i64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "discount".to_string(),
            reason: "must be an integer".to_string(),
        })?;

    if amount < 0 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(Money::from_units(amount))
}

/// Parses a 1-based selection from a listing of `len` entries.
///
/// ## Returns
/// - `Ok(None)` when the input is empty (operator cancelled)
/// - `Ok(Some(index))` with a zero-based index into the listing
///
/// ## Example
/// ```rust
/// use tome_core::validation::parse_selection;
///
/// assert_eq!(parse_selection("", 3).unwrap(), None);
/// assert_eq!(parse_selection("2", 3).unwrap(), Some(1));
/// assert!(parse_selection("4", 3).is_err());
/// ```
pub fn parse_selection(input: &str, len: usize) -> ValidationResult<Option<usize>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let choice: usize = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "selection".to_string(),
        reason: "must be a number from the list".to_string(),
    })?;

    if choice < 1 || choice > len {
        return Err(ValidationError::OutOfRange {
            field: "selection".to_string(),
            min: 1,
            max: len as i64,
        });
    }

    Ok(Some(choice - 1))
}

// =============================================================================
// Unit Tests
// =============================================================================
