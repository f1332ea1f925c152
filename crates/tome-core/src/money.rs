//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer units                                            │
//! │    Every price, discount, and total in the ledger is an i64 in whole    │
//! │    currency units. Arithmetic is exact; only Display formats.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tome_core::money::Money;
//!
//! let price = Money::from_units(100);
//! let gross = price * 3;
//! assert_eq!(gross.units(), 300);
//! assert_eq!(format!("{}", Money::from_units(1250)), "1,250");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: A sale total may go negative when the discount
///   exceeds the gross amount. The ledger stores that result as-is.
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Transparent sqlx Type**: Maps directly to INTEGER columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use tome_core::money::Money;
    ///
    /// let unit_price = Money::from_units(100);
    /// assert_eq!(unit_price.multiply_quantity(3).units(), 300);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Computes a sale total: unit price × quantity − flat discount.
///
/// ## Contract
/// The discount is a flat amount, not a percentage. The result may be
/// negative when the discount exceeds the gross amount; no check is made
/// against this and the negative total is stored verbatim.
///
/// ## Example
/// ```rust
/// use tome_core::money::{sale_total, Money};
///
/// let total = sale_total(Money::from_units(100), 3, Money::from_units(50));
/// assert_eq!(total.units(), 250);
/// ```
#[inline]
pub fn sale_total(unit_price: Money, quantity: i64, discount: Money) -> Money {
    unit_price.multiply_quantity(quantity) - discount
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display with thousands separators, matching the report format
/// (`1250` renders as `1,250`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}", sign, grouped)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(1099);
        assert_eq!(money.units(), 1099);
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(format!("{}", Money::from_units(0)), "0");
        assert_eq!(format!("{}", Money::from_units(250)), "250");
        assert_eq!(format!("{}", Money::from_units(1250)), "1,250");
        assert_eq!(format!("{}", Money::from_units(1234567)), "1,234,567");
        assert_eq!(format!("{}", Money::from_units(-1250)), "-1,250");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(1000);
        let b = Money::from_units(500);

        assert_eq!((a + b).units(), 1500);
        assert_eq!((a - b).units(), 500);
        let result: Money = a * 3;
        assert_eq!(result.units(), 3000);
    }

    #[test]
    fn test_sale_total() {
        // The canonical ledger scenario: price 100, qty 3, discount 50
        let total = sale_total(Money::from_units(100), 3, Money::from_units(50));
        assert_eq!(total.units(), 250);
    }

    #[test]
    fn test_sale_total_may_go_negative() {
        // Discount exceeding gross is stored as-is, no clamping
        let total = sale_total(Money::from_units(100), 1, Money::from_units(150));
        assert_eq!(total.units(), -50);
        assert!(total.is_negative());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert_eq!(Money::default(), zero);

        assert_eq!(Money::from_units(-100).abs().units(), 100);
    }
}
