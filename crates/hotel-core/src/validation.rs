//! # Validation Module
//!
//! Turns raw terminal lines into validated values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Happens                           │
//! │                                                                         │
//! │  Terminal line ("  Biryani \n")                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  normalize_name() → "biryani"                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MenuStore::lookup() ── miss → NotOnMenu → message + re-prompt         │
//! │                                                                         │
//! │  Terminal line ("-3")                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_quantity() ── Err → message + re-prompt                         │
//! │                                                                         │
//! │  Nothing here ever ends the session.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hotel_core::validation::{normalize_name, parse_quantity};
//!
//! assert_eq!(normalize_name("  Biryani "), "biryani");
//! assert_eq!(parse_quantity("5"), Ok(5));
//! assert!(parse_quantity("abc").is_err());
//! ```

use std::num::IntErrorKind;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// The only answer that asks for a receipt.
pub const CONFIRMATION_WORD: &str = "yes";

// =============================================================================
// String Validators
// =============================================================================

/// Trims surrounding whitespace and lower-cases.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validates a menu item name for inclusion in a menu.
///
/// ## Rules
/// - Must not be empty after trimming
///
/// ## Returns
/// The normalized name.
pub fn validate_item_name(raw: &str) -> ValidationResult<String> {
    let name = normalize_name(raw);

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "item name".to_string(),
        });
    }

    Ok(name)
}

/// Whether a yes/no answer is exactly "yes" once normalized.
///
/// "y", "Yes please" and the like do not count.
pub fn is_confirmation(raw: &str) -> bool {
    normalize_name(raw) == CONFIRMATION_WORD
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a quantity typed by the customer.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must be an integer ("abc", "2.5" are rejected as format errors)
/// - Must be positive ("0", "-3" are rejected)
/// - Must fit in a `u32`
///
/// ## User Workflow
/// ```text
/// "How many 'Biryani' you want?: "
///      │
///      ├── "abc" → InvalidFormat  → "Sorry, please enter a valid positive number..."
///      ├── "-3"  → MustBePositive → "Quantity must be a positive number."
///      └── "5"   → Ok(5)
/// ```
pub fn parse_quantity(raw: &str) -> ValidationResult<u32> {
    let value: i64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => quantity_out_of_range(),
        IntErrorKind::NegOverflow => ValidationError::MustBePositive {
            field: "quantity".to_string(),
        },
        _ => ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        },
    })?;

    if value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    u32::try_from(value).map_err(|_| quantity_out_of_range())
}

fn quantity_out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 1,
        max: i64::from(u32::MAX),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Biryani"), "biryani");
        assert_eq!(normalize_name("  WHITERICE\t"), "whiterice");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_validate_item_name() {
        assert_eq!(validate_item_name(" Parota ").unwrap(), "parota");
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("  ").is_err());
    }

    #[test]
    fn test_parse_quantity_accepts_positive() {
        assert_eq!(parse_quantity("5"), Ok(5));
        assert_eq!(parse_quantity(" 12 "), Ok(12));
        assert_eq!(parse_quantity("+3"), Ok(3));
        assert_eq!(parse_quantity("4294967295"), Ok(u32::MAX));
    }

    #[test]
    fn test_parse_quantity_rejects_non_positive() {
        for raw in ["0", "-3", "-0", "-99999999999999999999999"] {
            assert!(
                matches!(parse_quantity(raw), Err(ValidationError::MustBePositive { .. })),
                "{raw} should be rejected as non-positive"
            );
        }
    }

    #[test]
    fn test_parse_quantity_rejects_garbage() {
        for raw in ["abc", "", "2.5", "5 plates", "five"] {
            assert!(
                matches!(parse_quantity(raw), Err(ValidationError::InvalidFormat { .. })),
                "{raw} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn test_parse_quantity_rejects_too_large() {
        assert!(matches!(
            parse_quantity("4294967296"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_quantity("99999999999999999999999"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_is_confirmation() {
        assert!(is_confirmation("yes"));
        assert!(is_confirmation("  YES \n"));
        assert!(!is_confirmation("y"));
        assert!(!is_confirmation("no"));
        assert!(!is_confirmation("yes please"));
        assert!(!is_confirmation(""));
    }
}
