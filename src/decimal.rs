//! Fixed-point decimal type with 2 decimal places precision.
//!
//! Uses `rust_decimal` internally and rounds half-even (banker's rounding)
//! whenever a value is constructed, so every `Decimal2` in the program carries
//! exactly two fractional digits.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// A decimal type that maintains exactly 2 decimal places of precision.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use account_ledger::Decimal2;
///
/// let amount = Decimal2::from_str("10.125").unwrap();
/// assert_eq!(amount.to_string(), "10.12");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimal2(Decimal);

impl Decimal2 {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Decimal2(Decimal::ZERO);

    /// Creates a new `Decimal2` from a `Decimal`, rounding half-even to 2 places.
    ///
    /// A result that rounds to zero is stored as positive zero, so `-0.001`
    /// becomes `0.00` rather than `-0.00`.
    pub fn new(value: Decimal) -> Self {
        let mut rounded = value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(Self::SCALE);
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        Decimal2(rounded)
    }

    /// Creates a value from an integer count of minor units (cents).
    pub fn from_minor_units(units: i64) -> Self {
        Decimal2::new(Decimal::new(units, Self::SCALE))
    }

    /// Returns the underlying `Decimal`.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if this value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Adds `rhs`, returning `None` if the result exceeds the decimal range.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Decimal2::new)
    }

    /// Subtracts `rhs`, returning `None` if the result exceeds the decimal range.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Decimal2::new)
    }
}

impl From<Decimal> for Decimal2 {
    fn from(value: Decimal) -> Self {
        Decimal2::new(value)
    }
}

impl FromStr for Decimal2 {
    type Err = rust_decimal::Error;

    /// Parses plain (`12.50`) or scientific (`1.25e1`) notation.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = match Decimal::from_str(trimmed) {
            Ok(d) => d,
            Err(e) if trimmed.contains(['e', 'E']) => {
                Decimal::from_scientific(trimmed).map_err(|_| e)?
            }
            Err(e) => return Err(e),
        };
        Ok(Decimal2::new(decimal))
    }
}

impl fmt::Display for Decimal2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_from_str_normalizes_scale() {
        let d = Decimal2::from_str("1").unwrap();
        assert_eq!(d.to_string(), "1.00");

        let d = Decimal2::from_str("1.5").unwrap();
        assert_eq!(d.to_string(), "1.50");

        let d = Decimal2::from_str("  2.25  ").unwrap();
        assert_eq!(d.to_string(), "2.25");
    }

    #[test]
    fn test_rounds_half_even() {
        assert_eq!(Decimal2::new(dec("0.125")).to_string(), "0.12");
        assert_eq!(Decimal2::new(dec("0.135")).to_string(), "0.14");
        assert_eq!(Decimal2::new(dec("2.675")).to_string(), "2.68");
        assert_eq!(Decimal2::new(dec("-0.125")).to_string(), "-0.12");
    }

    #[test]
    fn test_rounds_non_midpoint_to_nearest() {
        assert_eq!(Decimal2::new(dec("1.999")).to_string(), "2.00");
        assert_eq!(Decimal2::new(dec("1.994")).to_string(), "1.99");
        assert_eq!(Decimal2::new(dec("1.1251")).to_string(), "1.13");
    }

    #[test]
    fn test_negative_zero_displays_as_zero() {
        let d = Decimal2::new(dec("-0.001"));
        assert!(d.is_zero());
        assert!(!d.is_negative());
        assert_eq!(d.to_string(), "0.00");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(Decimal2::from_str("1e2").unwrap().to_string(), "100.00");
        assert_eq!(Decimal2::from_str("2.5E-1").unwrap().to_string(), "0.25");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(Decimal2::from_str("").is_err());
        assert!(Decimal2::from_str("abc").is_err());
        assert!(Decimal2::from_str("1.2.3").is_err());
        assert!(Decimal2::from_str("e5").is_err());
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Decimal2::from_str("1.50").unwrap();
        let b = Decimal2::from_str("2.25").unwrap();

        assert_eq!(a.checked_add(b).unwrap().to_string(), "3.75");
        assert_eq!(b.checked_sub(a).unwrap().to_string(), "0.75");
        assert!(Decimal2::new(Decimal::MAX).checked_add(a).is_none());
    }

    #[test]
    fn test_from_minor_units() {
        assert_eq!(Decimal2::from_minor_units(100_000).to_string(), "1000.00");
        assert_eq!(Decimal2::from_minor_units(1).to_string(), "0.01");
    }
}
