// ============================================================================
// Currency Amount
// A fraction bound to a currency at the currency's native scale
// ============================================================================

use super::currency::Currency;
use crate::numeric::{
    pow10, FormatOptions, Fraction, NumericError, NumericResult, Numberish, Rounding,
};
use num_bigint::BigInt;
use num_traits::One;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest mantissa an amount may carry at its currency scale.
static MAX_UINT256: LazyLock<BigInt> = LazyLock::new(|| (BigInt::one() << 256usize) - 1);

/// Significant digits used when a caller has no preference.
pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 6;

/// An amount of a currency.
///
/// The raw amount always sits at exactly `currency.decimals()` fractional
/// digits and its mantissa never exceeds 2^256 - 1. Every constructor and
/// every arithmetic result goes through the same check.
///
/// # Example
/// ```
/// use currency_fractions::domain::{Amount, Currency, Token, TokenAddress};
///
/// let usdc = Currency::from(Token::new(1, TokenAddress::from_bytes([1; 20]), 6));
/// let amount = Amount::from_raw(usdc, "12.5").unwrap();
/// assert_eq!(amount.to_exact(), "12.500000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "AmountRepr"))]
pub struct Amount {
    currency: Currency,
    raw_amount: Fraction,
}

impl Amount {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Amount of `currency` from a literal, truncated to the currency scale.
    ///
    /// # Errors
    /// - `InvalidInput` if the literal is malformed
    /// - `Overflow` if the mantissa exceeds 2^256 - 1
    pub fn from_raw<N: Numberish>(currency: Currency, raw_amount: N) -> NumericResult<Self> {
        Self::from_fraction(currency, raw_amount, 1u8)
    }

    /// Amount of `numerator / denominator` units of `currency`.
    ///
    /// # Errors
    /// - `InvalidInput` if a literal is malformed
    /// - `DivisionByZero` if the denominator is zero
    /// - `Overflow` if the mantissa exceeds 2^256 - 1
    pub fn from_fraction<N: Numberish, D: Numberish>(
        currency: Currency,
        numerator: N,
        denominator: D,
    ) -> NumericResult<Self> {
        let decimals = u32::from(currency.decimals());
        let raw_amount = Fraction::divide(numerator, denominator, decimals)?;
        Self::checked(currency, raw_amount)
    }

    /// Bind an already scaled fraction, enforcing the bound.
    fn checked(currency: Currency, raw_amount: Fraction) -> NumericResult<Self> {
        if raw_amount.mantissa() > &*MAX_UINT256 {
            tracing::debug!(
                "Amount overflow: {} {} exceeds uint256",
                raw_amount,
                currency
            );
            return Err(NumericError::Overflow);
        }
        Ok(Self {
            currency,
            raw_amount,
        })
    }

    /// The largest mantissa an amount may hold: 2^256 - 1.
    pub fn max_uint256() -> &'static BigInt {
        &MAX_UINT256
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Currency the amount is denominated in.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Value at exactly `currency.decimals()` fractional digits.
    pub fn raw_amount(&self) -> &Fraction {
        &self.raw_amount
    }

    /// `10^currency.decimals()`
    pub fn decimal_scale(&self) -> BigInt {
        pow10(u32::from(self.currency.decimals()))
    }

    /// Check if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.raw_amount.is_zero()
    }

    fn ensure_same_currency(&self, other: &Amount) -> NumericResult<()> {
        if self.currency.equals(&other.currency) {
            Ok(())
        } else {
            tracing::debug!(
                "Currency mismatch: {} vs {}",
                self.currency,
                other.currency
            );
            Err(NumericError::CurrencyMismatch)
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Sum of two amounts of the same currency.
    ///
    /// # Errors
    /// `CurrencyMismatch` or `Overflow`.
    pub fn add(&self, other: &Amount) -> NumericResult<Amount> {
        self.ensure_same_currency(other)?;
        Self::checked(self.currency.clone(), self.raw_amount.add(&other.raw_amount))
    }

    /// Difference of two amounts of the same currency. May go negative.
    ///
    /// # Errors
    /// `CurrencyMismatch` or `Overflow`.
    pub fn subtract(&self, other: &Amount) -> NumericResult<Amount> {
        self.ensure_same_currency(other)?;
        Self::checked(
            self.currency.clone(),
            self.raw_amount.subtract(&other.raw_amount),
        )
    }

    /// Scale by a literal factor, truncating back to the currency scale.
    ///
    /// # Errors
    /// `InvalidInput` or `Overflow`.
    pub fn multiply<N: Numberish>(&self, factor: N) -> NumericResult<Amount> {
        let factor = factor.to_fraction()?;
        Self::from_raw(self.currency.clone(), self.raw_amount.multiply(&factor))
    }

    /// Divide by a literal, truncating at the currency scale.
    ///
    /// # Errors
    /// `InvalidInput`, `DivisionByZero` or `Overflow`.
    pub fn divide<N: Numberish>(&self, divisor: N) -> NumericResult<Amount> {
        let divisor = divisor.to_fraction()?;
        let decimals = u32::from(self.currency.decimals());
        let quotient = self.raw_amount.checked_div_with_decimals(&divisor, decimals)?;
        Self::checked(self.currency.clone(), quotient)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Value ordering between amounts of the same currency.
    ///
    /// # Errors
    /// `CurrencyMismatch` if the currencies differ.
    pub fn compare(&self, other: &Amount) -> NumericResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.raw_amount.cmp(&other.raw_amount))
    }

    /// Same value. Fails with `CurrencyMismatch` across currencies.
    pub fn equal_to(&self, other: &Amount) -> NumericResult<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    /// Strictly smaller. Fails with `CurrencyMismatch` across currencies.
    pub fn less_than(&self, other: &Amount) -> NumericResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Strictly larger. Fails with `CurrencyMismatch` across currencies.
    pub fn greater_than(&self, other: &Amount) -> NumericResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Smaller or equal. Fails with `CurrencyMismatch` across currencies.
    pub fn less_than_or_equal(&self, other: &Amount) -> NumericResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// Larger or equal. Fails with `CurrencyMismatch` across currencies.
    pub fn greater_than_or_equal(&self, other: &Amount) -> NumericResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Round to `digits` significant digits. Callers without a preference
    /// pass [`DEFAULT_SIGNIFICANT_DIGITS`] and [`Rounding::Down`].
    ///
    /// # Errors
    /// `InvalidArgument` if `digits` is zero.
    pub fn to_significant(&self, digits: u32, rounding: Rounding) -> NumericResult<String> {
        self.raw_amount.to_significant(digits, rounding)
    }

    /// Render with exactly `places` fractional digits.
    ///
    /// # Errors
    /// - `ExcessPrecision` if `places` exceeds the currency decimals
    /// - `InvalidArgument` if the options fail validation
    pub fn to_fixed(&self, places: u32, options: &FormatOptions) -> NumericResult<String> {
        let max = u32::from(self.currency.decimals());
        if places > max {
            tracing::debug!("Excess precision: {} places requested, {} allowed", places, max);
            return Err(NumericError::ExcessPrecision {
                requested: places,
                max,
            });
        }
        self.raw_amount.to_fixed(places, options)
    }

    /// Exact value at the currency's full scale: no rounding, no trimming.
    pub fn to_exact(&self) -> String {
        self.raw_amount.to_string()
    }

    /// Token form of this amount. Native amounts are relabeled against the
    /// wrapped token at the same scale.
    pub fn wrapped(&self) -> Amount {
        match &self.currency {
            Currency::Token(_) => self.clone(),
            Currency::Native(native) => Amount {
                currency: Currency::Token(native.wrapped()),
                raw_amount: self.raw_amount.clone(),
            },
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_exact())
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct AmountRepr {
    currency: Currency,
    raw_amount: Fraction,
}

#[cfg(feature = "serde")]
impl TryFrom<AmountRepr> for Amount {
    type Error = NumericError;

    fn try_from(repr: AmountRepr) -> Result<Self, Self::Error> {
        Amount::from_raw(repr.currency, repr.raw_amount)
    }
}
