// ============================================================================
// Rounding
// Rounding modes and the integer division primitive every formatter uses
// ============================================================================

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding mode applied when digits are dropped.
///
/// Modes are symmetric around zero: a negative value rounds exactly like its
/// positive counterpart and keeps its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rounding {
    /// Truncate toward zero
    #[default]
    Down,
    /// Round to nearest, ties away from zero
    HalfUp,
    /// Round away from zero whenever anything is dropped
    Up,
}

impl Rounding {
    /// Returns a human-readable description of the rounding mode.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Down => "round towards zero",
            Self::HalfUp => "round to nearest, ties away from zero",
            Self::Up => "round away from zero",
        }
    }
}

/// Integer division with an explicit rounding mode.
///
/// Returns `None` if `denominator` is zero.
///
/// ```
/// use currency_fractions::numeric::{div_round, Rounding};
/// use num_bigint::BigInt;
///
/// let q = div_round(&BigInt::from(-7), &BigInt::from(2), Rounding::HalfUp);
/// assert_eq!(q, Some(BigInt::from(-4)));
/// ```
#[must_use]
pub fn div_round(numerator: &BigInt, denominator: &BigInt, rounding: Rounding) -> Option<BigInt> {
    if denominator.is_zero() {
        return None;
    }

    // BigInt's `/` and `%` truncate toward zero, so the remainder carries the
    // numerator's sign.
    let (quotient, remainder) = numerator.div_rem(denominator);
    if remainder.is_zero() {
        return Some(quotient);
    }

    let away_from_zero = match rounding {
        Rounding::Down => false,
        Rounding::Up => true,
        Rounding::HalfUp => remainder.abs() * 2u32 >= denominator.abs(),
    };

    if !away_from_zero {
        return Some(quotient);
    }

    let negative = numerator.is_negative() != denominator.is_negative();
    if negative {
        Some(quotient - BigInt::one())
    } else {
        Some(quotient + BigInt::one())
    }
}
