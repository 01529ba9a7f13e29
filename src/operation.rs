//! Operation names accepted by the engine dispatcher.

use crate::error::EngineError;
use std::fmt;
use std::str::FromStr;

/// The operations the engine can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Show the current balance.
    Total,

    /// Add a user-supplied amount to the balance.
    Credit,

    /// Subtract a user-supplied amount if funds are sufficient.
    Debit,
}

impl Operation {
    /// Canonical upper-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Total => "TOTAL",
            Operation::Credit => "CREDIT",
            Operation::Debit => "DEBIT",
        }
    }
}

impl FromStr for Operation {
    type Err = EngineError;

    /// Matches case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TOTAL" => Ok(Operation::Total),
            "CREDIT" => Ok(Operation::Credit),
            "DEBIT" => Ok(Operation::Debit),
            _ => Err(EngineError::InvalidOperation),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
