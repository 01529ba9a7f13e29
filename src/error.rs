//! Error types for the ledger engine.
//!
//! The `Display` text of each business variant is the exact line shown to the
//! user when that rejection happens.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur during engine operation.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Failed to read from or write to the console
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input text is not a decimal number
    #[error("Invalid amount.")]
    InvalidAmount,

    /// Parsed amount is zero or negative
    #[error("Amount must be positive.")]
    NonPositive,

    /// Debit amount exceeds the current balance
    #[error("Insufficient funds for this debit.")]
    InsufficientFunds,

    /// Operation name matches none of the known operations
    #[error("Invalid operation.")]
    InvalidOperation,
}

impl EngineError {
    /// Returns `true` for errors that are reported to the user and recovered
    /// locally rather than aborting the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, EngineError::Io(_))
    }
}
