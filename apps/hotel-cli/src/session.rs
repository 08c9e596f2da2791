//! # Billing Session
//!
//! One customer, one order, start to finish.
//!
//! ```text
//! show_menu ──► take_order ──► calculate_bill ──► offer_receipt
//!  (display)     (intake)       (hotel-core)      (receipt_writer)
//! ```

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDateTime};
use hotel_core::billing::narration;
use hotel_core::{calculate_bill, BillResult, CoreError, Order};
use tracing::{debug, info_span};

use crate::config::AppConfig;
use crate::display::show_menu;
use crate::error::AppResult;
use crate::intake::take_order;
use crate::receipt_writer::{offer_receipt, ReceiptRequest, ReceiptStatus};
use crate::terminal::Terminal;

/// Result of a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub order: Order,
    pub bill: BillResult,
    pub receipt: ReceiptStatus,
}

/// Drives the four stages against a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Session<'a> {
    config: &'a AppConfig,
    clock: fn() -> NaiveDateTime,
}

/// Wall-clock local time, as printed on receipts.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl<'a> Session<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Session {
            config,
            clock: local_now,
        }
    }

    /// Replaces the receipt clock.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        terminal: &mut Terminal<R, W>,
    ) -> AppResult<SessionOutcome> {
        let _span = info_span!("session").entered();
        let config = self.config;

        show_menu(terminal, &config.menu)?;

        let order = take_order(terminal, &config.menu)?;

        let bill = calculate_bill(&config.menu, &order, &config.discount)?;
        debug!(
            subtotal = bill.subtotal().rupees(),
            discount = bill.discount().rupees(),
            final_total = bill.final_total().rupees(),
            "bill calculated"
        );
        terminal.say_all(narration(&order, &bill, &config.discount))?;

        let unit_price = config
            .menu
            .price_of(order.item())
            .ok_or_else(|| CoreError::ItemNotFound(order.item().to_string()))?;
        let request = ReceiptRequest {
            order: &order,
            unit_price,
            bill: &bill,
        };
        let receipt = offer_receipt(terminal, &config.receipt_path, request, self.clock)?;

        Ok(SessionOutcome {
            order,
            bill,
            receipt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use chrono::NaiveDate;
    use hotel_core::Money;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(8, 5, 9)
            .unwrap()
    }

    fn run_session(input: &str, receipt_path: &Path) -> (AppResult<SessionOutcome>, String) {
        let config = AppConfig::default().with_receipt_path(receipt_path);
        let mut terminal = Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = Session::new(&config).with_clock(fixed_time).run(&mut terminal);
        let (_, output) = terminal.into_parts();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_biryani_ten_with_receipt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bill.txt");

        let (outcome, output) = run_session("Biryani\n10\nyes\n", &path);
        let outcome = outcome.unwrap();

        assert_eq!(outcome.order, Order::new("biryani", 10).unwrap());
        assert_eq!(outcome.bill.subtotal(), Money::from_rupees(1000));
        assert_eq!(outcome.bill.discount(), Money::from_rupees(200));
        assert_eq!(outcome.bill.final_total(), Money::from_rupees(800));
        assert_eq!(outcome.receipt, ReceiptStatus::Written(path.clone()));

        assert!(output.starts_with("\n--- Welcome to Our Hotel ---\n"));
        assert!(output.contains(
            "\nSubtotal for 10 x Biryani: Rs. 1000\n\
             --- Special Offer Applied ---\n\
             Reducing Rs. 200 for bills above Rs. 999.\n\
             Final payable bill: Rs. 800\n"
        ));

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Date/Time: 2025-01-02 08:05:09\n"));
        assert!(text.contains("FINAL PAYABLE AMOUNT: Rs. 800"));
    }

    #[test]
    fn test_parota_one_declined() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bill.txt");

        let (outcome, output) = run_session("parota\n1\nno\n", &path);
        let outcome = outcome.unwrap();

        assert_eq!(outcome.bill.subtotal(), Money::from_rupees(50));
        assert_eq!(outcome.bill.discount(), Money::zero());
        assert_eq!(outcome.bill.final_total(), Money::from_rupees(50));
        assert_eq!(outcome.receipt, ReceiptStatus::Declined);

        assert!(output.contains("Subtotal for 1 x Parota: Rs. 50\n"));
        assert!(!output.contains("Special Offer"));
        assert!(output.ends_with("\nThanks for visiting!!\n"));
        assert!(!path.exists());
    }

    #[test]
    fn test_full_transcript_with_retries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bill.txt");

        let (outcome, output) = run_session("dosa\nragimudda\nabc\n0\n3\nno\n", &path);
        assert_eq!(outcome.unwrap().bill.final_total(), Money::from_rupees(90));

        let expected = concat!(
            "\n",
            "--- Welcome to Our Hotel ---\n",
            "Available Menu Items:\n",
            "  Biryani   : Rs. 100\n",
            "  Chapathi  : Rs. 50\n",
            "  Parota    : Rs. 50\n",
            "  Ragimudda : Rs. 30\n",
            "  Whiterice : Rs. 60\n",
            "----------------------------\n",
            "Enter your order item: ",
            "Sorry, 'Dosa' is not available. Please choose from the menu.\n",
            "Enter your order item: ",
            "'Ragimudda' order is received successfully.\n",
            "How many 'Ragimudda' you want?: ",
            "Sorry, please enter a valid positive number for the quantity.\n",
            "How many 'Ragimudda' you want?: ",
            "Quantity must be a positive number.\n",
            "How many 'Ragimudda' you want?: ",
            "\n",
            "Subtotal for 3 x Ragimudda: Rs. 90\n",
            "Do you want to generate a bill receipt? (yes/no): ",
            "\n",
            "Thanks for visiting!!\n",
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_receipt_failure_still_completes() {
        let dir = tempfile::tempdir().unwrap();

        let (outcome, output) = run_session("whiterice\n20\nyes\n", dir.path());
        let outcome = outcome.unwrap();

        assert_eq!(outcome.bill.final_total(), Money::from_rupees(1000));
        assert!(matches!(outcome.receipt, ReceiptStatus::Failed(_)));
        assert!(output.contains("Error: Could not write the bill to"));
    }

    #[test]
    fn test_input_closed_mid_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bill.txt");

        let (outcome, _) = run_session("biryani\n2\n", &path);
        assert!(matches!(outcome, Err(AppError::InputClosed { .. })));
        assert!(!path.exists());
    }
}
