//! # Application Configuration
//!
//! Built once in `main` and passed by reference to every stage.
//!
//! ## Thread Safety
//! Read-only after construction; nothing mutates it, so no locking.

use std::path::{Path, PathBuf};

use hotel_core::{DiscountPolicy, MenuStore};

/// Where the receipt goes unless told otherwise.
pub const DEFAULT_RECEIPT_PATH: &str = "bill.txt";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Items on sale.
    pub menu: MenuStore,

    /// Flat discount rule.
    pub discount: DiscountPolicy,

    /// Receipt file, relative to the working directory. Overwritten each run.
    pub receipt_path: PathBuf,
}

impl Default for AppConfig {
    /// The house setup: standard menu, Rs. 200 off above Rs. 999, `bill.txt`.
    fn default() -> Self {
        AppConfig {
            menu: MenuStore::standard(),
            discount: DiscountPolicy::standard(),
            receipt_path: PathBuf::from(DEFAULT_RECEIPT_PATH),
        }
    }
}

impl AppConfig {
    /// Same configuration with the receipt written somewhere else.
    pub fn with_receipt_path(mut self, path: impl AsRef<Path>) -> Self {
        self.receipt_path = path.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.menu.len(), 5);
        assert_eq!(config.discount, DiscountPolicy::standard());
        assert_eq!(config.receipt_path, PathBuf::from("bill.txt"));
    }

    #[test]
    fn test_with_receipt_path() {
        let config = AppConfig::default().with_receipt_path("/tmp/other.txt");
        assert_eq!(config.receipt_path, PathBuf::from("/tmp/other.txt"));
        assert_eq!(config.menu, MenuStore::standard());
    }
}
