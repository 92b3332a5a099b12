//! Numeric representation selection.

use core::fmt;
use core::str::FromStr;

pub use rust_decimal::Decimal;

/// A parsed JSON number.
///
/// The representation is selected from the source literal and never
/// loses precision against it. The three tiers are a deliberate
/// precision/size trade-off: a literal with a fractional part, or one
/// longer than 18 characters, is held as a scale-preserving [`Decimal`];
/// everything else lands in the smallest integer width that fits.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    /// Fits a 32-bit signed integer.
    Int(i32),
    /// Fits a 64-bit signed integer but not 32 bits.
    Long(i64),
    /// Carries a fractional part or exceeds the 64-bit-safe digit
    /// length.
    Decimal(Decimal),
}

impl Number {
    /// Selects a representation for a numeric literal.
    ///
    /// Literals containing `.`, or longer than 18 characters, parse as
    /// [`Number::Decimal`]. From ten characters up, a 32-bit parse is
    /// attempted first and only overflow falls back to 64 bits. Shorter
    /// literals parse directly as 32-bit.
    ///
    /// Returns `None` when the literal does not parse in its tier; the
    /// tokenizer's tentative classification admits text like a bare `+`.
    #[must_use]
    pub fn from_literal(literal: &str) -> Option<Self> {
        if literal.contains('.') || literal.len() > 18 {
            return Decimal::from_str(literal).ok().map(Self::Decimal);
        }
        if literal.len() >= 10 {
            if let Ok(small) = literal.parse::<i32>() {
                return Some(Self::Int(small));
            }
            return literal.parse::<i64>().ok().map(Self::Long);
        }
        literal.parse::<i32>().ok().map(Self::Int)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::Int(n)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Long(n)
    }
}

impl From<Decimal> for Number {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl fmt::Display for Number {
    /// Culture-invariant decimal text: `.` as the decimal point, no
    /// grouping separators, scale preserved for decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => fmt::Display::fmt(n, f),
            Number::Long(n) => fmt::Display::fmt(n, f),
            Number::Decimal(d) => fmt::Display::fmt(d, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{Decimal, Number};
    use core::str::FromStr;

    #[test]
    fn short_literal_is_int() {
        assert_eq!(Number::from_literal("42"), Some(Number::Int(42)));
        assert_eq!(Number::from_literal("-7"), Some(Number::Int(-7)));
        assert_eq!(Number::from_literal("+7"), Some(Number::Int(7)));
    }

    #[test]
    fn ten_digits_fitting_32_bits_stay_int() {
        assert_eq!(
            Number::from_literal("1234567890"),
            Some(Number::Int(1_234_567_890))
        );
    }

    #[test]
    fn eleven_digits_promote_to_long() {
        assert_eq!(
            Number::from_literal("99999999999"),
            Some(Number::Long(99_999_999_999))
        );
    }

    #[test]
    fn twenty_one_digits_promote_to_decimal() {
        assert_eq!(
            Number::from_literal("123456789012345678901"),
            Some(Number::Decimal(
                Decimal::from_str("123456789012345678901").unwrap()
            ))
        );
    }

    #[test]
    fn fractional_literal_is_decimal() {
        assert_eq!(
            Number::from_literal("3.14"),
            Some(Number::Decimal(Decimal::from_str("3.14").unwrap()))
        );
    }

    #[test]
    fn decimal_scale_survives_display() {
        let n = Number::from_literal("1.50").unwrap();
        assert_eq!(n.to_string(), "1.50");
    }

    #[test]
    fn sign_without_digits_is_rejected() {
        assert_eq!(Number::from_literal("+"), None);
        assert_eq!(Number::from_literal("-"), None);
    }
}
