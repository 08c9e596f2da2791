//! # Application Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    What Happens To Each Failure                         │
//! │                                                                         │
//! │  ValidationError (bad item / bad quantity)                             │
//! │       └──► message + re-prompt, never reaches this module              │
//! │                                                                         │
//! │  ReceiptError (bill.txt unwritable)                                    │
//! │       └──► logged, "Error: Could not write..." shown, session goes on  │
//! │                                                                         │
//! │  AppError (stdin closed, stdout broken)                                │
//! │       └──► session stops, reported on stderr                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use hotel_core::CoreError;
use thiserror::Error;

/// Receipt file failures.
///
/// Always caught by the receipt writer; never ends the session.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The file could not be created or truncated.
    ///
    /// ## When This Occurs
    /// - Permission denied on the working directory
    /// - The path names a directory
    #[error("cannot create receipt file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was opened but writing or flushing failed.
    ///
    /// ## When This Occurs
    /// - Disk full
    #[error("cannot write receipt file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Session-level failures.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard input reached end-of-file while a question was pending.
    #[error("input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// A domain rule failed after intake (e.g. amount overflow).
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
