// ============================================================================
// Price
// Exchange ratio between a base and a quote currency
// ============================================================================

use super::amount::Amount;
use super::currency::Currency;
use crate::numeric::{
    pow10, FormatOptions, Fraction, NumericError, NumericResult, Numberish, Rounding,
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Significant digits used by `Display`
pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 6;

/// Quote units per base unit.
///
/// `raw_price` is the ratio of human-scale amounts. `scalar` is
/// `10^base.decimals / 10^quote.decimals`, computed exactly from the two
/// currencies and never supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "PriceRepr"))]
pub struct Price {
    base_currency: Currency,
    quote_currency: Currency,
    raw_price: Fraction,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    scalar: Fraction,
}

fn decimal_scalar(base: &Currency, quote: &Currency) -> Fraction {
    let base_decimals = u32::from(base.decimals());
    let quote_decimals = u32::from(quote.decimals());
    if base_decimals >= quote_decimals {
        Fraction::new(pow10(base_decimals - quote_decimals), 0)
    } else {
        Fraction::new(1u8, quote_decimals - base_decimals)
    }
}

impl Price {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Price from an already computed ratio.
    pub fn new(base_currency: Currency, quote_currency: Currency, raw_price: Fraction) -> Self {
        let scalar = decimal_scalar(&base_currency, &quote_currency);
        tracing::trace!(
            "Price created: {} {}/{}",
            raw_price,
            quote_currency,
            base_currency
        );
        Self {
            base_currency,
            quote_currency,
            raw_price,
            scalar,
        }
    }

    /// `numerator / denominator` at the larger of the two currency scales.
    ///
    /// # Errors
    /// `InvalidInput` or `DivisionByZero`.
    pub fn from_ratio<D: Numberish, N: Numberish>(
        base_currency: Currency,
        quote_currency: Currency,
        denominator: D,
        numerator: N,
    ) -> NumericResult<Self> {
        let decimals = u32::from(base_currency.decimals().max(quote_currency.decimals()));
        let raw_price = Fraction::divide(numerator, denominator, decimals)?;
        Ok(Self::new(base_currency, quote_currency, raw_price))
    }

    /// The price implied by exchanging `base_amount` for `quote_amount`.
    ///
    /// # Errors
    /// `DivisionByZero` if `base_amount` is zero.
    pub fn from_amounts(base_amount: &Amount, quote_amount: &Amount) -> NumericResult<Self> {
        Self::from_ratio(
            base_amount.currency().clone(),
            quote_amount.currency().clone(),
            base_amount.raw_amount(),
            quote_amount.raw_amount(),
        )
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Currency being priced (the denominator).
    pub fn base_currency(&self) -> &Currency {
        &self.base_currency
    }

    /// Currency the price is expressed in (the numerator).
    pub fn quote_currency(&self) -> &Currency {
        &self.quote_currency
    }

    /// Ratio of human-scale quote amount to base amount.
    pub fn raw_price(&self) -> &Fraction {
        &self.raw_price
    }

    /// `10^base.decimals / 10^quote.decimals`
    pub fn scalar(&self) -> &Fraction {
        &self.scalar
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Swap base and quote. The reciprocal keeps the scale of `raw_price`
    /// and truncates toward zero.
    ///
    /// # Errors
    /// `DivisionByZero` for a zero price.
    pub fn invert(&self) -> NumericResult<Price> {
        let inverted =
            Fraction::one().checked_div_with_decimals(&self.raw_price, self.raw_price.decimals())?;
        Ok(Self::new(
            self.quote_currency.clone(),
            self.base_currency.clone(),
            inverted,
        ))
    }

    /// Chain `A→B` with `B→C` into `A→C`.
    ///
    /// # Errors
    /// `CurrencyChain` if this quote currency is not the other's base.
    pub fn multiply(&self, other: &Price) -> NumericResult<Price> {
        if !self.quote_currency.equals(&other.base_currency) {
            tracing::debug!(
                "Price chain broken: {} then {}",
                self.quote_currency,
                other.base_currency
            );
            return Err(NumericError::CurrencyChain);
        }
        Ok(Self::new(
            self.base_currency.clone(),
            other.quote_currency.clone(),
            self.raw_price.multiply(&other.raw_price),
        ))
    }

    /// Amount of quote currency worth `amount` of base currency.
    ///
    /// # Errors
    /// `CurrencyMismatch` if `amount` is not in the base currency, `Overflow`
    /// if the result exceeds the amount bound.
    pub fn quote(&self, amount: &Amount) -> NumericResult<Amount> {
        if !amount.currency().equals(&self.base_currency) {
            tracing::debug!(
                "Quote currency mismatch: {} vs base {}",
                amount.currency(),
                self.base_currency
            );
            return Err(NumericError::CurrencyMismatch);
        }
        Amount::from_raw(
            self.quote_currency.clone(),
            amount.raw_amount().multiply(&self.raw_price),
        )
    }

    /// `raw_price × scalar`, without loss.
    ///
    /// # Errors
    /// `InvalidArgument` if the combined scale does not fit in `u32`.
    pub fn adjusted_for_decimals(&self) -> NumericResult<Fraction> {
        let decimals = self
            .raw_price
            .decimals()
            .checked_add(self.scalar.decimals())
            .ok_or(NumericError::InvalidArgument("decimal scale out of range"))?;
        Ok(Fraction::new(
            self.raw_price.mantissa() * self.scalar.mantissa(),
            decimals,
        ))
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Round to `digits` significant digits, shift by the decimal difference
    /// of the two currencies, then round again.
    ///
    /// # Errors
    /// `InvalidArgument` if `digits` is zero or the shifted scale does not
    /// fit in `u32`.
    pub fn to_significant(&self, digits: u32, rounding: Rounding) -> NumericResult<String> {
        let difference =
            i32::from(self.base_currency.decimals()) - i32::from(self.quote_currency.decimals());
        let rounded = self.raw_price.round_to_significant(digits, rounding)?;
        let shifted = rounded.shift(difference)?;
        let result = shifted.round_to_significant(digits, rounding)?;
        Ok(result.normalize().to_string())
    }

    /// Render `raw_price` with exactly `places` fractional digits.
    ///
    /// # Errors
    /// - `ExcessPrecision` if `places` exceeds the quote currency decimals
    /// - `InvalidArgument` if the options fail validation
    pub fn to_fixed(&self, places: u32, options: &FormatOptions) -> NumericResult<String> {
        let max = u32::from(self.quote_currency.decimals());
        if places > max {
            tracing::debug!("Excess precision: {} places requested, {} allowed", places, max);
            return Err(NumericError::ExcessPrecision {
                requested: places,
                max,
            });
        }
        self.raw_price.to_fixed(places, options)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .to_significant(DEFAULT_SIGNIFICANT_DIGITS, FormatOptions::price().rounding)
            .map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PriceRepr {
    base_currency: Currency,
    quote_currency: Currency,
    raw_price: Fraction,
}

#[cfg(feature = "serde")]
impl From<PriceRepr> for Price {
    fn from(repr: PriceRepr) -> Self {
        Price::new(repr.base_currency, repr.quote_currency, repr.raw_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::currency::{Token, TokenAddress};

    fn token(byte: u8, decimals: u8) -> Currency {
        Currency::from(Token::new(1, TokenAddress::from_bytes([byte; 20]), decimals))
    }

    fn frac(s: &str) -> Fraction {
        s.parse().unwrap()
    }

    #[test]
    fn test_scalar_is_exact() {
        let p = Price::new(token(1, 18), token(2, 6), frac("1"));
        assert_eq!(p.scalar(), &Fraction::new(pow10(12), 0));

        let q = Price::new(token(1, 6), token(2, 18), frac("1"));
        assert_eq!(q.scalar(), &frac("0.000000000001"));

        let same = Price::new(token(1, 8), token(2, 8), frac("1"));
        assert_eq!(same.scalar(), &Fraction::one());
    }

    #[test]
    fn test_from_ratio() {
        let p = Price::from_ratio(token(1, 6), token(2, 18), 2, 3).unwrap();
        assert_eq!(p.raw_price(), &frac("1.5"));
        assert_eq!(p.raw_price().decimals(), 18);
        assert_eq!(
            Price::from_ratio(token(1, 6), token(2, 18), 0, 3),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_from_amounts() {
        let base = Amount::from_raw(token(1, 6), 2).unwrap();
        let quote = Amount::from_raw(token(2, 18), 3).unwrap();
        let p = Price::from_amounts(&base, &quote).unwrap();
        assert_eq!(p.base_currency(), &token(1, 6));
        assert_eq!(p.quote_currency(), &token(2, 18));
        assert_eq!(p.raw_price(), &frac("1.5"));

        let zero = Amount::from_raw(token(1, 6), 0).unwrap();
        assert_eq!(
            Price::from_amounts(&zero, &quote),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_invert() {
        let p = Price::from_ratio(token(1, 18), token(2, 18), 2, 3).unwrap();
        let inv = p.invert().unwrap();
        assert_eq!(inv.base_currency(), &token(2, 18));
        assert_eq!(inv.quote_currency(), &token(1, 18));
        assert_eq!(inv.raw_price().to_string(), "0.666666666666666666");

        let four = Price::from_ratio(token(1, 18), token(2, 18), 1, 4).unwrap();
        assert_eq!(four.invert().unwrap().invert().unwrap().raw_price(), four.raw_price());
    }

    #[test]
    fn test_invert_zero() {
        let zero = Price::new(token(1, 18), token(2, 18), Fraction::zero());
        assert_eq!(zero.invert(), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_multiply_chain() {
        let ab = Price::from_ratio(token(1, 18), token(2, 18), 2, 3).unwrap();
        let bc = Price::from_ratio(token(2, 18), token(3, 18), 1, 2).unwrap();
        let ac = ab.multiply(&bc).unwrap();
        assert_eq!(ac.base_currency(), &token(1, 18));
        assert_eq!(ac.quote_currency(), &token(3, 18));
        assert_eq!(ac.raw_price(), &frac("3"));

        assert_eq!(ab.multiply(&ab), Err(NumericError::CurrencyChain));
    }

    #[test]
    fn test_quote() {
        let p = Price::from_ratio(token(1, 6), token(2, 18), 2, 3).unwrap();
        let base = Amount::from_raw(token(1, 6), 10).unwrap();
        let quoted = p.quote(&base).unwrap();
        assert_eq!(quoted.currency(), &token(2, 18));
        assert_eq!(quoted.to_exact(), "15.000000000000000000");

        let wrong = Amount::from_raw(token(2, 18), 10).unwrap();
        assert_eq!(p.quote(&wrong), Err(NumericError::CurrencyMismatch));
    }

    #[test]
    fn test_quote_overflow() {
        let p = Price::from_ratio(token(1, 0), token(2, 0), 1, 2).unwrap();
        let max = Amount::from_raw(token(1, 0), Amount::max_uint256()).unwrap();
        assert_eq!(p.quote(&max), Err(NumericError::Overflow));
    }

    #[test]
    fn test_adjusted_for_decimals() {
        let p = Price::new(token(1, 6), token(2, 18), frac("1.5"));
        assert_eq!(p.adjusted_for_decimals().unwrap(), frac("0.0000000000015"));

        let q = Price::new(token(1, 18), token(2, 6), frac("2.5"));
        assert_eq!(q.adjusted_for_decimals().unwrap(), frac("2500000000000"));
    }

    #[test]
    fn test_to_significant_same_decimals() {
        let p = Price::from_ratio(token(1, 18), token(2, 18), 3, 2).unwrap();
        assert_eq!(p.to_significant(6, Rounding::Down).unwrap(), "0.666666");
        assert_eq!(p.to_significant(6, Rounding::HalfUp).unwrap(), "0.666667");
        assert_eq!(p.to_string(), "0.666666");
        assert!(p.to_significant(0, Rounding::Down).is_err());
    }

    #[test]
    fn test_to_significant_shifts_by_decimal_difference() {
        let p = Price::new(token(1, 8), token(2, 6), frac("1.23456789"));
        // rounded to 1.23456, shifted by 10^2
        assert_eq!(p.to_significant(6, Rounding::Down).unwrap(), "123.456");

        let q = Price::new(token(1, 6), token(2, 8), frac("1.5"));
        assert_eq!(q.to_significant(6, Rounding::Down).unwrap(), "0.015");
    }

    #[test]
    fn test_extreme_scale_is_an_error() {
        let out_of_range = NumericError::InvalidArgument("decimal scale out of range");
        let p = Price::new(token(1, 6), token(2, 18), Fraction::new(15, u32::MAX));
        assert_eq!(p.to_significant(6, Rounding::Down), Err(out_of_range.clone()));
        assert_eq!(p.adjusted_for_decimals(), Err(out_of_range.clone()));
        assert_eq!(p.invert(), Err(out_of_range));
    }

    #[test]
    fn test_to_fixed() {
        let p = Price::new(token(1, 18), token(2, 6), frac("1.23456"));
        assert_eq!(p.to_fixed(2, &FormatOptions::price()).unwrap(), "1.23");
        assert_eq!(
            p.to_fixed(4, &FormatOptions::new(Rounding::HalfUp)).unwrap(),
            "1.2346"
        );
        assert_eq!(
            p.to_fixed(7, &FormatOptions::price()),
            Err(NumericError::ExcessPrecision {
                requested: 7,
                max: 6
            })
        );
    }
}
