//! # Hotel Billing Terminal App
//!
//! Library half of the `hotel-billing` binary. `main.rs` only calls
//! [`run`]; everything else lives here so it can be driven from tests.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr)
//! 2. Build `AppConfig` (standard menu, Rs. 200 off above Rs. 999, `bill.txt`)
//! 3. Lock stdin/stdout into a `Terminal`
//! 4. Run one `Session`
//!
//! ## Module Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  session ─┬─► display         menu listing                              │
//! │           ├─► intake          item + quantity retry loops               │
//! │           ├─► hotel-core      calculate_bill / narration                │
//! │           └─► receipt_writer  yes/no + bill.txt                         │
//! │                                                                         │
//! │  terminal  prompt/answer over BufRead + Write                          │
//! │  config    AppConfig                                                    │
//! │  error     ReceiptError, AppError                                       │
//! │  logging   tracing-subscriber setup                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod intake;
pub mod logging;
pub mod receipt_writer;
pub mod session;
pub mod terminal;

use std::io;
use std::process::ExitCode;

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::session::Session;
use crate::terminal::Terminal;

pub use crate::session::SessionOutcome;

/// Runs one billing session on the process terminal.
///
/// ## Exit Codes
/// - `0` - the session completed, whatever happened at the receipt step
/// - `1` - stdin closed or the terminal failed before the session completed
pub fn run() -> ExitCode {
    logging::init_tracing();

    let config = AppConfig::default();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock());

    match Session::new(&config).run(&mut terminal) {
        Ok(outcome) => {
            info!(receipt = ?outcome.receipt, "session complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(error = %err, "session aborted");
            if let AppError::InputClosed { .. } = err {
                eprintln!("\nInput closed before the order was complete.");
            } else {
                eprintln!("\nError: {err}");
            }
            ExitCode::FAILURE
        }
    }
}
