//! # Domain Types
//!
//! Core domain types used throughout Hotel Billing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   MenuEntry     │   │     Order       │   │   BillResult    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (lower)   │──►│  item           │──►│  subtotal       │       │
//! │  │  unit_price     │   │  quantity (>0)  │   │  discount       │       │
//! │  └─────────────────┘   └─────────────────┘   │  final_total    │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All three are immutable once built. Names are stored normalized
//! (trimmed, lowercase) and capitalized only for presentation.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Presentation Helpers
// =============================================================================

/// Upper-cases the first character and lower-cases the rest.
///
/// ## Example
/// ```rust
/// use hotel_core::types::capitalize;
///
/// assert_eq!(capitalize("whiterice"), "Whiterice");
/// assert_eq!(capitalize("bIRYANI"), "Biryani");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

// =============================================================================
// Menu Entry
// =============================================================================

/// A purchasable item and its unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Normalized (trimmed, lowercase) item name.
    pub name: String,

    /// Price of a single unit.
    pub unit_price: Money,
}

impl MenuEntry {
    /// Name as shown to the customer ("Biryani").
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }
}

// =============================================================================
// Order
// =============================================================================

/// One validated order: a menu item and a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    item: String,
    quantity: u32,
}

impl Order {
    /// Creates an order, rejecting a zero quantity.
    ///
    /// The item is taken as-is; resolving it against the menu is the
    /// caller's job (see [`crate::menu::MenuStore::lookup`]).
    pub fn new(item: impl Into<String>, quantity: u32) -> Result<Self, ValidationError> {
        if quantity == 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            });
        }

        Ok(Order {
            item: item.into(),
            quantity,
        })
    }

    /// Normalized item name.
    pub fn item(&self) -> &str {
        &self.item
    }

    /// Number of units ordered (always > 0).
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

// =============================================================================
// Bill Result
// =============================================================================

/// Outcome of billing one order.
///
/// ## Invariant
/// `final_total == subtotal - discount` and `discount >= 0`.
/// Built only by the billing calculator, which derives `final_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BillResult {
    subtotal: Money,
    discount: Money,
    final_total: Money,
}

impl BillResult {
    pub(crate) fn new(subtotal: Money, discount: Money) -> Self {
        BillResult {
            subtotal,
            discount,
            final_total: subtotal - discount,
        }
    }

    /// Unit price × quantity, before discount.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Discount applied (zero when under the threshold).
    pub fn discount(&self) -> Money {
        self.discount
    }

    /// Amount payable.
    pub fn final_total(&self) -> Money {
        self.final_total
    }

    /// Whether the special offer kicked in.
    pub fn is_discounted(&self) -> bool {
        !self.discount.is_zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
