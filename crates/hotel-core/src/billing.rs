//! # Billing Calculator
//!
//! Subtotal, flat discount and final total for one order.
//!
//! ## The Discount Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal = unit_price × quantity                                       │
//! │                                                                         │
//! │  subtotal >  999  →  discount = 200, final = subtotal - 200            │
//! │  subtotal <= 999  →  discount = 0,   final = subtotal                  │
//! │                                                                         │
//! │  Boundary:  999 → pays 999                                             │
//! │            1000 → pays 800                                             │
//! │                                                                         │
//! │  A cheaper basket can cost more than a dearer one near the boundary.   │
//! │  That is the house rule and it is kept as-is.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hotel_core::billing::{calculate_bill, DiscountPolicy};
//! use hotel_core::menu::MenuStore;
//! use hotel_core::types::Order;
//!
//! let menu = MenuStore::standard();
//! let order = Order::new("biryani", 10).unwrap();
//! let bill = calculate_bill(&menu, &order, &DiscountPolicy::standard()).unwrap();
//!
//! assert_eq!(bill.subtotal().rupees(), 1000);
//! assert_eq!(bill.discount().rupees(), 200);
//! assert_eq!(bill.final_total().rupees(), 800);
//! ```

use serde::Serialize;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::menu::MenuStore;
use crate::types::{capitalize, BillResult, Order};
use crate::validation::ValidationResult;
use crate::{DISCOUNT_AMOUNT, DISCOUNT_THRESHOLD};

// =============================================================================
// Discount Policy
// =============================================================================

/// A flat amount taken off any subtotal strictly above a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscountPolicy {
    threshold: Money,
    amount: Money,
}

impl DiscountPolicy {
    /// Creates a policy.
    ///
    /// ## Rules
    /// - Threshold and amount must be non-negative
    /// - Amount must not exceed the threshold, so a discounted total never
    ///   goes below zero
    pub fn new(threshold: Money, amount: Money) -> ValidationResult<Self> {
        if threshold.rupees() < 0 || amount.rupees() < 0 || amount > threshold {
            return Err(ValidationError::OutOfRange {
                field: "discount amount".to_string(),
                min: 0,
                max: threshold.rupees().max(0),
            });
        }

        Ok(DiscountPolicy { threshold, amount })
    }

    /// Rs. 200 off bills above Rs. 999.
    pub const fn standard() -> Self {
        DiscountPolicy {
            threshold: Money::from_rupees(DISCOUNT_THRESHOLD),
            amount: Money::from_rupees(DISCOUNT_AMOUNT),
        }
    }

    pub fn threshold(&self) -> Money {
        self.threshold
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Discount earned by a subtotal.
    pub fn discount_for(&self, subtotal: Money) -> Money {
        if subtotal > self.threshold {
            self.amount
        } else {
            Money::zero()
        }
    }

    /// Bills a subtotal under this policy.
    pub fn apply(&self, subtotal: Money) -> BillResult {
        BillResult::new(subtotal, self.discount_for(subtotal))
    }
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        DiscountPolicy::standard()
    }
}

// =============================================================================
// Calculation
// =============================================================================

/// Bills one order against a menu.
///
/// ## Errors
/// - [`CoreError::ItemNotFound`] if the order's item is not on `menu`
///   (intake never produces such an order)
/// - [`CoreError::AmountOverflow`] if price × quantity does not fit in an `i64`
pub fn calculate_bill(
    menu: &MenuStore,
    order: &Order,
    policy: &DiscountPolicy,
) -> CoreResult<BillResult> {
    let unit_price = menu
        .price_of(order.item())
        .ok_or_else(|| CoreError::ItemNotFound(order.item().to_string()))?;

    let subtotal = unit_price
        .checked_multiply_quantity(order.quantity())
        .ok_or(CoreError::AmountOverflow {
            unit_price: unit_price.rupees(),
            quantity: order.quantity(),
        })?;

    Ok(policy.apply(subtotal))
}

/// Lines announcing the bill to the customer.
///
/// The first line is blank; the offer lines appear only when discounted:
/// ```text
///
/// Subtotal for 10 x Biryani: Rs. 1000
/// --- Special Offer Applied ---
/// Reducing Rs. 200 for bills above Rs. 999.
/// Final payable bill: Rs. 800
/// ```
pub fn narration(order: &Order, bill: &BillResult, policy: &DiscountPolicy) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!(
            "Subtotal for {} x {}: {}",
            order.quantity(),
            capitalize(order.item()),
            bill.subtotal()
        ),
    ];

    if bill.is_discounted() {
        lines.push("--- Special Offer Applied ---".to_string());
        lines.push(format!(
            "Reducing {} for bills above {}.",
            bill.discount(),
            policy.threshold()
        ));
        lines.push(format!("Final payable bill: {}", bill.final_total()));
    }

    lines
}

// =============================================================================
// Unit Tests
// =============================================================================
