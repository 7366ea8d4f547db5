// ============================================================================
// Numeric Literals
// Normalization of integer, string, float and decimal input into fractions
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fraction::Fraction;
use num_bigint::BigInt;
use num_traits::Zero;

/// Largest exponent magnitude accepted in scientific notation
pub(crate) const MAX_EXPONENT: i64 = 4096;

/// Anything that can be read as an exact decimal fraction.
///
/// Integers keep scale 0, decimal strings keep their literal scale
/// (`"1.50"` is `150 / 10^2`), floats go through their shortest round-trip
/// decimal representation.
pub trait Numberish {
    /// Normalize the literal into a [`Fraction`].
    ///
    /// # Errors
    /// Returns `InvalidInput` if the literal is not a finite decimal number.
    fn to_fraction(&self) -> NumericResult<Fraction>;
}

impl<T: Numberish + ?Sized> Numberish for &T {
    fn to_fraction(&self) -> NumericResult<Fraction> {
        (**self).to_fraction()
    }
}

impl Numberish for Fraction {
    fn to_fraction(&self) -> NumericResult<Fraction> {
        Ok(self.clone())
    }
}

impl Numberish for BigInt {
    fn to_fraction(&self) -> NumericResult<Fraction> {
        Ok(Fraction::new(self.clone(), 0))
    }
}

macro_rules! impl_numberish_for_int {
    ($($t:ty),*) => {
        $(
            impl Numberish for $t {
                fn to_fraction(&self) -> NumericResult<Fraction> {
                    Ok(Fraction::new(BigInt::from(*self), 0))
                }
            }
        )*
    };
}

impl_numberish_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Numberish for str {
    fn to_fraction(&self) -> NumericResult<Fraction> {
        parse_literal(self)
    }
}

impl Numberish for String {
    fn to_fraction(&self) -> NumericResult<Fraction> {
        parse_literal(self)
    }
}

impl Numberish for f64 {
    fn to_fraction(&self) -> NumericResult<Fraction> {
        if !self.is_finite() {
            return Err(NumericError::InvalidInput(self.to_string()));
        }
        // Display for f64 is the shortest round-trip form and never uses
        // exponent notation.
        parse_literal(&self.to_string())
    }
}

impl Numberish for f32 {
    fn to_fraction(&self) -> NumericResult<Fraction> {
        if !self.is_finite() {
            return Err(NumericError::InvalidInput(self.to_string()));
        }
        parse_literal(&self.to_string())
    }
}

impl Numberish for rust_decimal::Decimal {
    fn to_fraction(&self) -> NumericResult<Fraction> {
        Ok(Fraction::from_decimal(*self))
    }
}

/// Parse a decimal literal.
///
/// Accepted forms: `"42"`, `"-1.5"`, `"+.25"`, `"7."`, `"1.5e3"`, `"2E-4"`.
/// The empty string is zero. Surrounding whitespace is ignored. Exponents
/// beyond `MAX_EXPONENT` in either direction are rejected.
pub(crate) fn parse_literal(input: &str) -> NumericResult<Fraction> {
    let invalid = || NumericError::InvalidInput(input.to_string());

    let s = input.trim();
    if s.is_empty() {
        return Ok(Fraction::zero());
    }

    // Check for sign
    let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    };

    // Split off exponent
    let (s, exponent) = match s.find(['e', 'E']) {
        Some(pos) => {
            let exp: i64 = s[pos + 1..].parse().map_err(|_| invalid())?;
            if exp.unsigned_abs() > MAX_EXPONENT.unsigned_abs() {
                return Err(invalid());
            }
            (&s[..pos], exp)
        },
        None => (s, 0),
    };

    // A bare trailing point is dropped: "7." reads as "7"
    let s = s.strip_suffix('.').unwrap_or(s);

    let (int_str, frac_str) = match s.find('.') {
        Some(pos) => (&s[..pos], &s[pos + 1..]),
        None => (s, ""),
    };

    if int_str.is_empty() && frac_str.is_empty() {
        return Err(invalid());
    }
    if !int_str.bytes().all(|b| b.is_ascii_digit()) || !frac_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let digits = format!("{}{}", int_str, frac_str);
    let mut mantissa: BigInt = digits.parse().map_err(|_| invalid())?;
    if is_negative {
        mantissa = -mantissa;
    }

    let scale = i64::try_from(frac_str.len())
        .ok()
        .and_then(|len| len.checked_sub(exponent))
        .ok_or_else(invalid)?;
    if scale >= 0 {
        let decimals = u32::try_from(scale).map_err(|_| invalid())?;
        Ok(Fraction::new(mantissa, decimals))
    } else {
        let shift = u32::try_from(-scale).map_err(|_| invalid())?;
        if mantissa.is_zero() {
            return Ok(Fraction::zero());
        }
        Ok(Fraction::new(mantissa * BigInt::from(10u8).pow(shift), 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(f: &Fraction) -> (String, u32) {
        (f.mantissa().to_string(), f.decimals())
    }

    #[test]
    fn test_parse_integer_and_decimal() {
        assert_eq!(parts(&"1337".to_fraction().unwrap()), ("1337".into(), 0));
        assert_eq!(parts(&"1.337".to_fraction().unwrap()), ("1337".into(), 3));
        assert_eq!(parts(&"-0.001".to_fraction().unwrap()), ("-1".into(), 3));
        assert_eq!(parts(&"+.25".to_fraction().unwrap()), ("25".into(), 2));
    }

    #[test]
    fn test_parse_keeps_literal_scale() {
        assert_eq!(parts(&"1.50".to_fraction().unwrap()), ("150".into(), 2));
    }

    #[test]
    fn test_parse_edge_cases() {
        assert_eq!(parts(&"".to_fraction().unwrap()), ("0".into(), 0));
        assert_eq!(parts(&"7.".to_fraction().unwrap()), ("7".into(), 0));
        assert_eq!(parts(&"  42  ".to_fraction().unwrap()), ("42".into(), 0));
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(parts(&"1.5e3".to_fraction().unwrap()), ("1500".into(), 0));
        assert_eq!(parts(&"2E-4".to_fraction().unwrap()), ("2".into(), 4));
        assert_eq!(parts(&"1.25e1".to_fraction().unwrap()), ("125".into(), 1));
    }

    #[test]
    fn test_parse_exponent_bounds() {
        let at_bound = format!("1e{}", MAX_EXPONENT);
        assert_eq!(at_bound.to_fraction().unwrap().mantissa().to_string().len(), 4097);
        assert_eq!(
            parts(&format!("1e-{}", MAX_EXPONENT).to_fraction().unwrap()),
            ("1".into(), 4096)
        );

        for bad in [
            "1e4097",
            "1e-4097",
            "1e300000000",
            "1e-9223372036854775808",
            "1e9223372036854775807",
            "1e99999999999999999999",
        ] {
            assert_eq!(
                bad.to_fraction(),
                Err(NumericError::InvalidInput(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_invalid() {
        for bad in [".", "-", "abc", "1.2.3", "1e", "--1", "1_000", "0x10", "1 2"] {
            assert_eq!(
                bad.to_fraction(),
                Err(NumericError::InvalidInput(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_integers() {
        assert_eq!(parts(&100u64.to_fraction().unwrap()), ("100".into(), 0));
        assert_eq!(parts(&(-5i32).to_fraction().unwrap()), ("-5".into(), 0));
        assert_eq!(
            parts(&u128::MAX.to_fraction().unwrap()),
            (u128::MAX.to_string(), 0)
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(parts(&0.15f64.to_fraction().unwrap()), ("15".into(), 2));
        assert_eq!(parts(&2.0f64.to_fraction().unwrap()), ("2".into(), 0));
        assert_eq!(parts(&1e-7f64.to_fraction().unwrap()), ("1".into(), 7));
        assert!(f64::NAN.to_fraction().is_err());
        assert!(f64::INFINITY.to_fraction().is_err());
    }

    #[test]
    fn test_decimal() {
        let d = rust_decimal::Decimal::new(12345, 2);
        assert_eq!(parts(&d.to_fraction().unwrap()), ("12345".into(), 2));
    }

    #[test]
    fn test_references() {
        let owned = String::from("3.5");
        let by_ref: &String = &owned;
        assert_eq!(parts(&by_ref.to_fraction().unwrap()), ("35".into(), 1));
    }
}
