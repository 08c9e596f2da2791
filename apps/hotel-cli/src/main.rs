//! # Hotel Billing Entry Point
//!
//! Shows the menu, takes one order, prints the bill and optionally
//! writes `bill.txt`. The setup lives in `lib.rs` for testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    hotel_cli::run()
}
