//! Validated monetary amounts supplied by the user.

use crate::decimal::Decimal2;
use crate::error::{EngineError, Result};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// An amount accepted for a credit or debit.
///
/// The parsed value was strictly positive before being rounded to two decimal
/// places. Input such as `0.001` therefore passes validation and rounds to
/// `0.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal2);

impl Amount {
    /// Parses raw user input into an amount.
    ///
    /// Surrounding whitespace is ignored. Text that is not a decimal number
    /// yields [`EngineError::InvalidAmount`]; zero or negative values yield
    /// [`EngineError::NonPositive`].
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let parsed = parse_decimal(trimmed);

        match parsed {
            Some(value) if value > Decimal::ZERO => return Ok(Amount(Decimal2::new(value))),
            Some(value) if value < Decimal::ZERO => return Err(EngineError::NonPositive),
            _ => {}
        }

        // Zero, or text outside what `Decimal` can hold: judge the literal as typed.
        match Literal::scan(trimmed) {
            Some(literal) if literal.is_positive() && literal.rounds_to_zero() => {
                Ok(Amount(Decimal2::ZERO))
            }
            Some(literal) if !literal.is_positive() => Err(EngineError::NonPositive),
            _ if parsed.is_some() => Err(EngineError::NonPositive),
            _ => Err(EngineError::InvalidAmount),
        }
    }

    /// Returns the rounded value.
    pub fn value(&self) -> Decimal2 {
        self.0
    }
}

/// Parses without rounding so positivity is judged on the value as typed.
fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

/// Sign and magnitude of a decimal literal, read from its text alone.
///
/// `Decimal` keeps at most 28 fractional digits, so `0.000...01` beyond that
/// parses as zero and `1e-30` fails to parse at all, although both are positive.
struct Literal {
    negative: bool,
    nonzero: bool,
    /// Power of ten of the leading nonzero digit.
    adjusted_exponent: i64,
}

impl Literal {
    /// Scans `[+-]digits[.digits][(e|E)[+-]digits]` with at least one mantissa digit.
    fn scan(s: &str) -> Option<Self> {
        let (negative, rest) = split_sign(s);
        let (mantissa, exponent) = match rest.find(['e', 'E']) {
            Some(i) => (&rest[..i], Some(&rest[i + 1..])),
            None => (rest, None),
        };
        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !all_digits(int_part) || !all_digits(frac_part) {
            return None;
        }

        let exponent = match exponent {
            Some(e) => parse_exponent(e)?,
            None => 0,
        };

        let leading = match int_part.bytes().position(|b| b != b'0') {
            Some(i) => (int_part.len() - 1 - i) as i64,
            None => match frac_part.bytes().position(|b| b != b'0') {
                Some(j) => -(j as i64) - 1,
                None => {
                    return Some(Literal {
                        negative,
                        nonzero: false,
                        adjusted_exponent: 0,
                    })
                }
            },
        };

        Some(Literal {
            negative,
            nonzero: true,
            adjusted_exponent: leading.saturating_add(exponent),
        })
    }

    fn is_positive(&self) -> bool {
        self.nonzero && !self.negative
    }

    /// Below 0.001, which always rounds to `0.00`.
    fn rounds_to_zero(&self) -> bool {
        self.adjusted_exponent < -3
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_exponent(s: &str) -> Option<i64> {
    let (negative, digits) = split_sign(s);
    if digits.is_empty() || !all_digits(digits) {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

impl FromStr for Amount {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Amount::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Amount::parse("50.00").unwrap().to_string(), "50.00");
        assert_eq!(Amount::parse("  7.5 \n").unwrap().to_string(), "7.50");
        assert_eq!(Amount::parse("3").unwrap().to_string(), "3.00");
    }

    #[test]
    fn test_parse_rounds_half_even() {
        assert_eq!(Amount::parse("0.125").unwrap().to_string(), "0.12");
        assert_eq!(Amount::parse("0.375").unwrap().to_string(), "0.38");
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for raw in ["", "   ", "abc", "12abc", "1.2.3", "NaN", "Infinity"] {
            assert!(
                matches!(Amount::parse(raw), Err(EngineError::InvalidAmount)),
                "expected InvalidAmount for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        for raw in ["0", "0.00", "-1", "-0.01", "-0"] {
            assert!(
                matches!(Amount::parse(raw), Err(EngineError::NonPositive)),
                "expected NonPositive for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_positivity_checked_before_rounding() {
        let tiny = Amount::parse("0.001").unwrap();
        assert!(tiny.value().is_zero());
    }

    #[test]
    fn test_positive_below_decimal_precision_rounds_to_zero() {
        for raw in ["0.00000000000000000000000000001", "1e-30", "+2.5E-40"] {
            let amount = Amount::parse(raw).unwrap();
            assert!(amount.value().is_zero(), "{} should round to zero", raw);
        }
    }

    #[test]
    fn test_out_of_range_keeps_sign_classification() {
        assert!(matches!(Amount::parse("-1e-30"), Err(EngineError::NonPositive)));
        assert!(matches!(Amount::parse("-1e40"), Err(EngineError::NonPositive)));
        assert!(matches!(Amount::parse("0e-99"), Err(EngineError::NonPositive)));
        assert!(matches!(Amount::parse("1e40"), Err(EngineError::InvalidAmount)));
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(Amount::parse("1e3").unwrap().to_string(), "1000.00");
        assert!(matches!(Amount::parse("-1e3"), Err(EngineError::NonPositive)));
    }
}
