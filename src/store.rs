//! In-memory balance storage.

use crate::decimal::Decimal2;
use rust_decimal::Decimal;

/// Holds the single tracked balance.
///
/// The store applies no business rules: it accepts any value, including a
/// negative one. Positivity and sufficiency are enforced by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceStore {
    balance: Decimal2,
}

impl BalanceStore {
    /// Balance a fresh store starts with, in minor units (1000.00).
    pub const DEFAULT_BALANCE_MINOR_UNITS: i64 = 100_000;

    /// Creates a store holding `initial`, rounded to 2 decimal places.
    pub fn new(initial: Decimal) -> Self {
        BalanceStore {
            balance: Decimal2::new(initial),
        }
    }

    /// Returns the current balance exactly as stored.
    pub fn read(&self) -> Decimal2 {
        self.balance
    }

    /// Rounds `value` half-even to 2 decimal places and replaces the balance.
    pub fn write(&mut self, value: impl Into<Decimal2>) {
        self.balance = value.into();
    }
}

impl Default for BalanceStore {
    fn default() -> Self {
        BalanceStore {
            balance: Decimal2::from_minor_units(Self::DEFAULT_BALANCE_MINOR_UNITS),
        }
    }
}
