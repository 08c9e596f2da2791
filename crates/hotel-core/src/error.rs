//! # Error Types
//!
//! Domain-specific error types for hotel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hotel-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  hotel-cli errors (app crate)                                          │
//! │  ├── ReceiptError     - Receipt file could not be written              │
//! │  └── AppError         - Terminal closed / terminal I/O failure         │
//! │                                                                         │
//! │  Flow: ValidationError → message + re-prompt (never fatal)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, field, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Item is not on the menu.
    ///
    /// ## When This Occurs
    /// - Billing an order whose item was never resolved against this menu
    #[error("Item not found on menu: {0}")]
    ItemNotFound(String),

    /// Monetary arithmetic left the representable range.
    ///
    /// ## When This Occurs
    /// - A custom menu with an absurd unit price multiplied by a huge quantity
    #[error("Amount overflow computing {unit_price} x {quantity}")]
    AmountOverflow { unit_price: i64, quantity: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Order intake turns every one of these into a message and a re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a quantity that is not an integer).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Duplicate value (e.g. two menu entries normalizing to one name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// The requested item is not on the menu.
    #[error("'{0}' is not on the menu")]
    NotOnMenu(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
