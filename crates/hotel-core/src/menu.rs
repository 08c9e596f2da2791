//! # Menu Store
//!
//! The fixed table of purchasable items, built once at startup and read
//! by reference for the rest of the session.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  biryani    │  Rs. 100       │
//! │  chapathi   │  Rs. 50        │
//! │  parota     │  Rs. 50        │
//! │  ragimudda  │  Rs. 30        │
//! │  whiterice  │  Rs. 60        │
//! └──────────────────────────────┘
//!      lookup("  Biryani ") → Some(biryani, Rs. 100)
//!      lookup("dosa")       → None
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::MenuEntry;
use crate::validation::{normalize_name, validate_item_name, ValidationResult};
use crate::STANDARD_MENU;

/// Immutable name → price table.
///
/// ## Invariants
/// - Names are normalized and unique
/// - Every price is positive
/// - Entries keep the order they were given in (that is the display order)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuStore {
    entries: Vec<MenuEntry>,
}

impl MenuStore {
    /// Builds a store from `(name, price)` pairs, validating every entry.
    ///
    /// ## Example
    /// ```rust
    /// use hotel_core::menu::MenuStore;
    ///
    /// let menu = MenuStore::new([("Dosa", 40), ("idli", 20)]).unwrap();
    /// assert!(menu.lookup("dosa").is_some());
    ///
    /// assert!(MenuStore::new([("dosa", 40), (" DOSA ", 45)]).is_err());
    /// ```
    pub fn new<'a, I>(table: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for (raw_name, price) in table {
            let name = validate_item_name(raw_name)?;

            if price <= 0 {
                return Err(ValidationError::MustBePositive {
                    field: format!("price of {name}"),
                });
            }

            if !seen.insert(name.clone()) {
                return Err(ValidationError::Duplicate {
                    field: "menu item".to_string(),
                    value: name,
                });
            }

            entries.push(MenuEntry {
                name,
                unit_price: Money::from_rupees(price),
            });
        }

        Ok(MenuStore { entries })
    }

    /// The house menu.
    pub fn standard() -> Self {
        MenuStore {
            entries: STANDARD_MENU
                .iter()
                .map(|&(name, price)| MenuEntry {
                    name: name.to_string(),
                    unit_price: Money::from_rupees(price),
                })
                .collect(),
        }
    }

    /// Finds an entry by name, normalizing the query first.
    pub fn lookup(&self, name: &str) -> Option<&MenuEntry> {
        let name = normalize_name(name);
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Like [`lookup`](Self::lookup) but reports a miss as a validation error.
    pub fn resolve(&self, name: &str) -> ValidationResult<&MenuEntry> {
        self.lookup(name)
            .ok_or_else(|| ValidationError::NotOnMenu(normalize_name(name)))
    }

    /// Unit price for an item, if it is on the menu.
    pub fn price_of(&self, name: &str) -> Option<Money> {
        self.lookup(name).map(|entry| entry.unit_price)
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Length (in characters) of the longest item name; drives column alignment.
    pub fn longest_name_len(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.name.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        MenuStore::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
