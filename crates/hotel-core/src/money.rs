//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts.
//!
//! ## Whole Rupees Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu prices, subtotals, discounts and totals are all whole rupees.     │
//! │                                                                         │
//! │    Biryani: Rs. 100  × 10  = Rs. 1000                                  │
//! │    Discount:                - Rs. 200                                   │
//! │    Payable:                   Rs. 800                                   │
//! │                                                                         │
//! │  No paise, no floats, no rounding.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hotel_core::money::Money;
//!
//! let price = Money::from_rupees(100);
//! let subtotal = price.checked_multiply_quantity(10).unwrap();
//! assert_eq!(subtotal.to_string(), "Rs. 1000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::CURRENCY_PREFIX;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole rupees.
///
/// ## Design Decisions
/// - **i64 (signed)**: a discount can be subtracted without special cases
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serialized transparently**: `{"subtotal": 1000}`, not `{"subtotal": [1000]}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees)
    }

    /// Returns the value in whole rupees.
    #[inline]
    pub const fn rupees(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// Returns `None` when the product does not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use hotel_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(50);
    /// assert_eq!(unit_price.checked_multiply_quantity(3), Some(Money::from_rupees(150)));
    /// assert_eq!(Money::from_rupees(i64::MAX).checked_multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: u32) -> Option<Self> {
        match self.0.checked_mul(qty as i64) {
            Some(total) => Some(Money(total)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `Rs. <amount>`, the form used on screen and on the receipt.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-{} {}", CURRENCY_PREFIX, self.0.unsigned_abs())
        } else {
            write!(f, "{} {}", CURRENCY_PREFIX, self.0)
        }
    }
}

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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
