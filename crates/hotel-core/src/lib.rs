//! # hotel-core: Pure Business Logic for Hotel Billing
//!
//! Everything that can be decided without touching the terminal, the
//! clock or the file system lives here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Hotel Billing Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    hotel-cli (terminal app)                     │   │
//! │  │   Display ──► Order Intake ──► Billing ──► Receipt Writer       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hotel-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  menu    │ │ billing  │ │ receipt  │ │ validation/types │  │   │
//! │  │   │MenuStore │ │ Discount │ │ render() │ │ Order, BillResult│  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • PURE FUNCTIONS                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Whole-rupee `Money` type
//! - [`types`] - `MenuEntry`, `Order`, `BillResult`
//! - [`menu`] - The immutable `MenuStore`
//! - [`billing`] - Subtotal and flat-discount calculation
//! - [`receipt`] - Receipt text rendering
//! - [`validation`] - Normalization and quantity parsing
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use hotel_core::billing::{calculate_bill, DiscountPolicy};
//! use hotel_core::menu::MenuStore;
//! use hotel_core::types::Order;
//!
//! let menu = MenuStore::standard();
//! let order = Order::new("parota", 1).unwrap();
//! let bill = calculate_bill(&menu, &order, &DiscountPolicy::standard()).unwrap();
//!
//! assert_eq!(bill.final_total().to_string(), "Rs. 50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod error;
pub mod menu;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use billing::{calculate_bill, DiscountPolicy};
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::MenuStore;
pub use money::Money;
pub use receipt::Receipt;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Prefix put in front of every amount shown to the customer.
pub const CURRENCY_PREFIX: &str = "Rs.";

/// Subtotals strictly above this earn the flat discount.
pub const DISCOUNT_THRESHOLD: i64 = 999;

/// Flat discount in rupees.
pub const DISCOUNT_AMOUNT: i64 = 200;

/// The house menu, in display order.
///
/// ## Invariant
/// Names are already normalized and unique, prices positive
/// (checked by `menu::tests::test_standard_table_passes_validation`).
pub const STANDARD_MENU: &[(&str, i64)] = &[
    ("biryani", 100),
    ("chapathi", 50),
    ("parota", 50),
    ("ragimudda", 30),
    ("whiterice", 60),
];
