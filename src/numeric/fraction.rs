// ============================================================================
// Decimal Fraction
// Arbitrary-precision mantissa over a power-of-ten denominator
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::format::render_digits;
use super::literal::{parse_literal, Numberish};
use super::rounding::{div_round, Rounding};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

/// Exact decimal fraction `mantissa / 10^decimals`.
///
/// The mantissa is unbounded, so addition, subtraction and negation never
/// lose information. Division and multiplication land on a documented scale
/// and truncate toward zero beyond it; formatting rounds explicitly with a
/// [`Rounding`] mode.
///
/// Two fractions with different scales may be equal: `(15, 1)` and
/// `(150, 2)` both denote 1.5. Equality, ordering and hashing compare values,
/// while [`mantissa`](Self::mantissa) and [`decimals`](Self::decimals) expose
/// the exact pair.
///
/// # Example
/// ```
/// use currency_fractions::numeric::Fraction;
///
/// let price = Fraction::from_literal("2.5").unwrap();     // (25, 1)
/// let qty = Fraction::from_literal("4").unwrap();         // (4, 0)
/// let total = price.multiply(&qty);                       // (100, 1)
/// assert_eq!(total.to_string(), "10.0");
/// assert_eq!(total, Fraction::from_integer(10));
/// ```
#[derive(Clone)]
pub struct Fraction {
    mantissa: BigInt,
    decimals: u32,
}

/// Compute 10^n
pub(crate) fn pow10(n: u32) -> BigInt {
    BigInt::from(10u8).pow(n)
}

impl Fraction {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw mantissa and scale.
    #[inline]
    pub fn new(mantissa: impl Into<BigInt>, decimals: u32) -> Self {
        Self {
            mantissa: mantissa.into(),
            decimals,
        }
    }

    /// Zero at scale 0.
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    /// One at scale 0.
    pub fn one() -> Self {
        Self::new(1u8, 0)
    }

    /// Create from an integer value at scale 0.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self::new(value, 0)
    }

    /// Normalize any supported literal into a fraction.
    ///
    /// # Errors
    /// Returns `InvalidInput` for malformed literals.
    pub fn from_literal<N: Numberish>(literal: N) -> NumericResult<Self> {
        literal.to_fraction()
    }

    /// Compute `numerator / denominator` expressed at `decimals` fractional
    /// digits, truncating toward zero.
    ///
    /// # Errors
    /// - `InvalidInput` if either literal is malformed
    /// - `DivisionByZero` if the denominator is zero
    ///
    /// # Example
    /// ```
    /// use currency_fractions::numeric::Fraction;
    ///
    /// let third = Fraction::divide(1, 3, 4).unwrap();
    /// assert_eq!(third.to_string(), "0.3333");
    /// ```
    pub fn divide<N: Numberish, D: Numberish>(
        numerator: N,
        denominator: D,
        decimals: u32,
    ) -> NumericResult<Self> {
        let numerator = numerator.to_fraction()?;
        let denominator = denominator.to_fraction()?;
        numerator.checked_div_with_decimals(&denominator, decimals)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The integer numerator.
    #[inline]
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// Number of fractional digits the mantissa is scaled by.
    #[inline]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Decompose into `(mantissa, decimals)`.
    pub fn into_parts(self) -> (BigInt, u32) {
        (self.mantissa, self.decimals)
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    /// Check if value is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.mantissa.is_positive()
    }

    /// Sign of the value: -1, 0 or 1.
    pub fn signum(&self) -> i8 {
        match self.mantissa.sign() {
            num_bigint::Sign::Minus => -1,
            num_bigint::Sign::NoSign => 0,
            num_bigint::Sign::Plus => 1,
        }
    }

    /// Get absolute value at the same scale.
    pub fn abs(&self) -> Self {
        Self::new(self.mantissa.abs(), self.decimals)
    }

    // ========================================================================
    // Scaling
    // ========================================================================

    /// Re-express at `decimals` fractional digits.
    ///
    /// Growing the scale is exact; shrinking truncates toward zero.
    pub fn rescale(&self, decimals: u32) -> Self {
        match decimals.cmp(&self.decimals) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => {
                Self::new(&self.mantissa * pow10(decimals - self.decimals), decimals)
            },
            Ordering::Less => Self::new(
                &self.mantissa / pow10(self.decimals - decimals),
                decimals,
            ),
        }
    }

    /// Multiply by `10^exponent` without any loss.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the resulting scale does not fit in `u32`.
    pub fn shift(&self, exponent: i32) -> NumericResult<Self> {
        let magnitude = exponent.unsigned_abs();
        if exponent < 0 {
            let decimals = self
                .decimals
                .checked_add(magnitude)
                .ok_or(NumericError::InvalidArgument("decimal scale out of range"))?;
            return Ok(Self::new(self.mantissa.clone(), decimals));
        }
        if self.decimals >= magnitude {
            Ok(Self::new(self.mantissa.clone(), self.decimals - magnitude))
        } else {
            Ok(Self::new(&self.mantissa * pow10(magnitude - self.decimals), 0))
        }
    }

    /// Strip trailing fractional zeros: `(1500, 3)` becomes `(15, 1)`.
    pub fn normalize(&self) -> Self {
        if self.mantissa.is_zero() {
            return Self::zero();
        }
        let ten = BigInt::from(10u8);
        let mut mantissa = self.mantissa.clone();
        let mut decimals = self.decimals;
        while decimals > 0 && (&mantissa % &ten).is_zero() {
            mantissa /= &ten;
            decimals -= 1;
        }
        Self::new(mantissa, decimals)
    }

    /// Both mantissas at the larger of the two scales.
    fn aligned(&self, other: &Self) -> (BigInt, BigInt, u32) {
        let decimals = self.decimals.max(other.decimals);
        (
            self.rescale(decimals).mantissa,
            other.rescale(decimals).mantissa,
            decimals,
        )
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact addition at the larger scale.
    pub fn add(&self, rhs: &Self) -> Self {
        let (a, b, decimals) = self.aligned(rhs);
        Self::new(a + b, decimals)
    }

    /// Exact subtraction at the larger scale.
    pub fn subtract(&self, rhs: &Self) -> Self {
        let (a, b, decimals) = self.aligned(rhs);
        Self::new(a - b, decimals)
    }

    /// Multiplication at the larger scale.
    ///
    /// The full product carries `d1 + d2` digits; digits beyond
    /// `max(d1, d2)` are truncated toward zero.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let decimals = self.decimals.max(rhs.decimals);
        let excess = self.decimals.min(rhs.decimals);
        let product = &self.mantissa * &rhs.mantissa;
        Self::new(product / pow10(excess), decimals)
    }

    /// Division at the larger scale, truncating toward zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_div_with_decimals(rhs, self.decimals.max(rhs.decimals))
    }

    /// Division at an explicit scale, truncating toward zero.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `InvalidArgument` if `rhs.decimals() + decimals` does not fit in `u32`
    pub fn checked_div_with_decimals(&self, rhs: &Self, decimals: u32) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        // (m1 / 10^d1) / (m2 / 10^d2) at scale D is m1 * 10^(d2 + D) / (m2 * 10^d1)
        let up = rhs
            .decimals
            .checked_add(decimals)
            .ok_or(NumericError::InvalidArgument("decimal scale out of range"))?;
        let (numerator, denominator) = if up >= self.decimals {
            (&self.mantissa * pow10(up - self.decimals), rhs.mantissa.clone())
        } else {
            (self.mantissa.clone(), &rhs.mantissa * pow10(self.decimals - up))
        };
        Ok(Self::new(numerator / denominator, decimals))
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round to `places` fractional digits. The result has exactly that scale.
    pub fn round_to_places(&self, places: u32, rounding: Rounding) -> Self {
        if places >= self.decimals {
            return self.rescale(places);
        }
        let divisor = pow10(self.decimals - places);
        let mantissa = div_round(&self.mantissa, &divisor, rounding).unwrap_or_default();
        Self::new(mantissa, places)
    }

    /// Round to `digits` significant digits counted from the leading non-zero
    /// digit.
    ///
    /// Rounding may land left of the decimal point: `123456` at 4 digits is
    /// `123400` (or `123500` rounding up). Values that need no rounding are
    /// returned unchanged.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `digits` is zero.
    pub fn round_to_significant(&self, digits: u32, rounding: Rounding) -> NumericResult<Self> {
        if digits == 0 {
            return Err(NumericError::InvalidArgument(
                "significant digits must be positive",
            ));
        }
        if self.is_zero() {
            return Ok(self.clone());
        }

        let length = self.mantissa.magnitude().to_str_radix(10).len() as i64;
        // Fractional places that keep exactly `digits` significant digits
        let keep = i64::from(digits) - length + i64::from(self.decimals);

        if keep >= i64::from(self.decimals) {
            return Ok(self.clone());
        }
        if keep >= 0 {
            return Ok(self.round_to_places(keep as u32, rounding));
        }

        let zeros = u32::try_from(-keep).map_err(|_| {
            NumericError::InvalidArgument("significant digits out of range")
        })?;
        let divisor = pow10(self.decimals + zeros);
        let head = div_round(&self.mantissa, &divisor, rounding).unwrap_or_default();
        Ok(Self::new(head * pow10(zeros), 0))
    }

    // ========================================================================
    // Conversion from rust_decimal (for API boundaries)
    // ========================================================================

    /// Convert from rust_decimal::Decimal, keeping its scale.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        Self::new(d.mantissa(), d.scale())
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `Overflow` if the value needs more than 96 bits of mantissa or
    /// 28 fractional digits after trailing zeros are stripped.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let normalized = self.normalize();
        let mantissa = i128::try_from(&normalized.mantissa).map_err(|_| NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, normalized.decimals)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.decimals == other.decimals {
            return self.mantissa.cmp(&other.mantissa);
        }
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }
}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal values share one normalized form
        let normalized = self.normalize();
        normalized.mantissa.hash(state);
        normalized.decimals.hash(state);
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.mantissa, self.decimals)
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        Fraction::new(-&self.mantissa, self.decimals)
    }
}

// Operators borrow both sides so the inherent `add` keeps priority in method
// call syntax.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl $trait<&Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Self::Output {
                Fraction::$inherent(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, subtract);
impl_binary_op!(Mul, mul, multiply);

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fraction({}, mantissa={}, decimals={})",
            self, self.mantissa, self.decimals
        )
    }
}

/// Exact value at the fraction's own scale: `(1230, 4)` renders `0.1230`.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_digits(&self.mantissa, self.decimals, None))
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Fraction {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> (123, 0)
    /// - "123.456" -> (123456, 3)
    /// - "-0.001" -> (-1, 3)
    /// - "" -> (0, 0)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_literal(s)
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Fraction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fraction {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        parse_literal(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
