//! # Receipt Writer
//!
//! Asks whether the customer wants a receipt and, on an exact "yes",
//! overwrites the receipt file.
//!
//! ## Flow
//! ```text
//! "Do you want to generate a bill receipt? (yes/no): "
//!      │
//!      ├── "yes" ──► now() ──► write_receipt()
//!      │                          │
//!      │                          ├── Ok  → "Receipt generated successfully in 'bill.txt'!."
//!      │                          └── Err → "Error: Could not write the bill to 'bill.txt'."
//!      │                                    (logged, session still ends normally)
//!      │
//!      └── anything else ──► "Thanks for visiting!!"  (file untouched)
//! ```

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use hotel_core::validation::is_confirmation;
use hotel_core::{BillResult, Money, Order, Receipt};
use tracing::{info, warn};

use crate::error::{AppResult, ReceiptError};
use crate::terminal::Terminal;

const CONFIRM_PROMPT: &str = "Do you want to generate a bill receipt? (yes/no): ";

/// What happened at the receipt step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiptStatus {
    /// Receipt written to this path.
    Written(PathBuf),
    /// Customer asked for a receipt but the file could not be written.
    Failed(PathBuf),
    /// Customer did not answer "yes".
    Declined,
}

/// Everything the receipt needs except the time it is issued.
#[derive(Debug, Clone, Copy)]
pub struct ReceiptRequest<'a> {
    pub order: &'a Order,
    pub unit_price: Money,
    pub bill: &'a BillResult,
}

/// Creates (or truncates) `path` and writes the rendered receipt.
///
/// The file handle is dropped before returning on every path.
pub fn write_receipt(path: &Path, receipt: &Receipt) -> Result<(), ReceiptError> {
    let file = File::create(path).map_err(|source| ReceiptError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(receipt.render().as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| ReceiptError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Runs the receipt step of a session.
///
/// `now` is only called when a receipt is actually requested.
pub fn offer_receipt<R, W, C>(
    terminal: &mut Terminal<R, W>,
    path: &Path,
    request: ReceiptRequest<'_>,
    now: C,
) -> AppResult<ReceiptStatus>
where
    R: BufRead,
    W: Write,
    C: FnOnce() -> NaiveDateTime,
{
    let answer = terminal.ask(CONFIRM_PROMPT)?;

    if !is_confirmation(&answer) {
        terminal.say("")?;
        terminal.say("Thanks for visiting!!")?;
        return Ok(ReceiptStatus::Declined);
    }

    let receipt = Receipt::new(
        now(),
        request.order.clone(),
        request.unit_price,
        *request.bill,
    );

    match write_receipt(path, &receipt) {
        Ok(()) => {
            info!(path = %path.display(), "receipt written");
            terminal.say("")?;
            terminal.say(format_args!(
                "Receipt generated successfully in '{}'!.",
                path.display()
            ))?;
            Ok(ReceiptStatus::Written(path.to_path_buf()))
        }
        Err(err) => {
            warn!(error = %err, "receipt not written");
            terminal.say(format_args!(
                "Error: Could not write the bill to '{}'.",
                path.display()
            ))?;
            Ok(ReceiptStatus::Failed(path.to_path_buf()))
        }
    }
}
