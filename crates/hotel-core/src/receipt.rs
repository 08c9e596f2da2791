//! # Receipt Rendering
//!
//! Builds the text of `bill.txt`. Writing it to disk is the app's job;
//! this module only produces the string.
//!
//! ## Layout
//! ```text
//! ---------------- HOTEL RECEIPT ----------------
//! Date/Time: 2024-05-01 19:30:00
//! -----------------------------------------------
//! Item Ordered: Biryani
//! Quantity: 10
//! Price per Unit: Rs. 100
//! -----------------------------------------------
//! Initial Total: Rs. 1000
//! Discount Applied: - Rs. 200
//! FINAL PAYABLE AMOUNT: Rs. 800
//! ---------------- Thank You! -------------------
//! ```

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::money::Money;
use crate::types::{capitalize, BillResult, Order};

const HEADER_RULE: &str = "---------------- HOTEL RECEIPT ----------------";
const SECTION_RULE: &str = "-----------------------------------------------";
const FOOTER_RULE: &str = "---------------- Thank You! -------------------";

/// Timestamp format on the receipt.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Snapshot of one billed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub issued_at: NaiveDateTime,
    pub order: Order,
    pub unit_price: Money,
    pub bill: BillResult,
}

impl Receipt {
    pub fn new(issued_at: NaiveDateTime, order: Order, unit_price: Money, bill: BillResult) -> Self {
        Receipt {
            issued_at,
            order,
            unit_price,
            bill,
        }
    }

    /// Full receipt text, newline-terminated.
    pub fn render(&self) -> String {
        let lines = [
            HEADER_RULE.to_string(),
            format!("Date/Time: {}", self.issued_at.format(TIMESTAMP_FORMAT)),
            SECTION_RULE.to_string(),
            format!("Item Ordered: {}", capitalize(self.order.item())),
            format!("Quantity: {}", self.order.quantity()),
            format!("Price per Unit: {}", self.unit_price),
            SECTION_RULE.to_string(),
            format!("Initial Total: {}", self.bill.subtotal()),
            format!("Discount Applied: - {}", self.bill.discount()),
            format!("FINAL PAYABLE AMOUNT: {}", self.bill.final_total()),
            FOOTER_RULE.to_string(),
        ];

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
