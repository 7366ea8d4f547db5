// ============================================================================
// Percentage
// Fractions of one, rendered scaled by 100
// ============================================================================

use crate::numeric::{FormatOptions, Fraction, NumericResult, Numberish, Rounding};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Internal precision of every percentage arithmetic result
pub const PERCENTAGE_DECIMALS: u32 = 18;

/// Significant digits used when a caller has no preference
pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 5;

/// Fractional places used by `Display`
pub const DEFAULT_FIXED_PLACES: u32 = 2;

/// A fraction of one: `0.0154` is 1.54%.
///
/// Arithmetic results land back at 18 fractional digits, truncating toward
/// zero.
///
/// # Example
/// ```
/// use currency_fractions::domain::Percentage;
///
/// let fee = Percentage::new(3, 1000).unwrap();
/// assert_eq!(fee.to_string(), "0.30%");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Percentage {
    raw_amount: Fraction,
}

impl Percentage {
    /// `numerator / denominator` at 18 fractional digits.
    ///
    /// # Errors
    /// `InvalidInput` or `DivisionByZero`.
    pub fn new<N: Numberish, D: Numberish>(numerator: N, denominator: D) -> NumericResult<Self> {
        Self::with_decimals(numerator, denominator, PERCENTAGE_DECIMALS)
    }

    /// A percentage whose value (as a fraction of one) is `value`.
    ///
    /// # Errors
    /// `InvalidInput` if the literal is malformed.
    pub fn from_value<N: Numberish>(value: N) -> NumericResult<Self> {
        Self::new(value, 1u8)
    }

    /// `numerator / denominator` at an explicit internal precision.
    ///
    /// # Errors
    /// `InvalidInput` or `DivisionByZero`.
    pub fn with_decimals<N: Numberish, D: Numberish>(
        numerator: N,
        denominator: D,
        decimals: u32,
    ) -> NumericResult<Self> {
        Ok(Self {
            raw_amount: Fraction::divide(numerator, denominator, decimals)?,
        })
    }

    fn normalized(raw_amount: Fraction) -> Self {
        Self {
            raw_amount: raw_amount.rescale(PERCENTAGE_DECIMALS),
        }
    }

    /// Value as a fraction of one.
    pub fn raw_amount(&self) -> &Fraction {
        &self.raw_amount
    }

    // ========================================================================
    // Arithmetic with other percentages
    // ========================================================================

    /// Sum of two percentages.
    pub fn add(&self, other: &Percentage) -> Percentage {
        Self::normalized(self.raw_amount.add(&other.raw_amount))
    }

    /// Difference of two percentages.
    pub fn subtract(&self, other: &Percentage) -> Percentage {
        Self::normalized(self.raw_amount.subtract(&other.raw_amount))
    }

    /// Product of two percentages: 10% of 50% is 5%.
    pub fn multiply(&self, other: &Percentage) -> Percentage {
        Self::normalized(self.raw_amount.multiply(&other.raw_amount))
    }

    /// Quotient of two percentages.
    ///
    /// # Errors
    /// `DivisionByZero` if `other` is zero.
    pub fn divide(&self, other: &Percentage) -> NumericResult<Percentage> {
        let quotient = self
            .raw_amount
            .checked_div_with_decimals(&other.raw_amount, PERCENTAGE_DECIMALS)?;
        Ok(Self::normalized(quotient))
    }

    // ========================================================================
    // Arithmetic with plain literals
    // ========================================================================

    /// Add a plain value: `1%.add_literal("0.01")` is 2%.
    pub fn add_literal<N: Numberish>(&self, other: N) -> NumericResult<Percentage> {
        Ok(Self::normalized(self.raw_amount.add(&other.to_fraction()?)))
    }

    /// Subtract a plain value.
    pub fn subtract_literal<N: Numberish>(&self, other: N) -> NumericResult<Percentage> {
        Ok(Self::normalized(self.raw_amount.subtract(&other.to_fraction()?)))
    }

    /// Scale by a plain factor.
    pub fn multiply_literal<N: Numberish>(&self, other: N) -> NumericResult<Percentage> {
        Ok(Self::normalized(self.raw_amount.multiply(&other.to_fraction()?)))
    }

    /// Divide by a plain value. Fails with `DivisionByZero` on zero.
    pub fn divide_literal<N: Numberish>(&self, other: N) -> NumericResult<Percentage> {
        let quotient = self
            .raw_amount
            .checked_div_with_decimals(&other.to_fraction()?, PERCENTAGE_DECIMALS)?;
        Ok(Self::normalized(quotient))
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Value ×100 at `digits` significant digits.
    ///
    /// # Errors
    /// `InvalidArgument` if `digits` is zero.
    pub fn to_significant(&self, digits: u32, rounding: Rounding) -> NumericResult<String> {
        self.raw_amount.shift(2)?.to_significant(digits, rounding)
    }

    /// Value ×100 with exactly `places` fractional digits.
    ///
    /// # Errors
    /// `InvalidArgument` if the options fail validation.
    pub fn to_fixed(&self, places: u32, options: &FormatOptions) -> NumericResult<String> {
        self.raw_amount.shift(2)?.to_fixed(places, options)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .to_fixed(DEFAULT_FIXED_PLACES, &FormatOptions::percentage())
            .map_err(|_| fmt::Error)?;
        write!(f, "{}%", rendered)
    }
}
