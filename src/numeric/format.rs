// ============================================================================
// Formatting
// Fixed-place and significant-digit rendering with explicit options
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fraction::Fraction;
use super::rounding::Rounding;
use num_bigint::BigInt;
use num_traits::Signed;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Format Options
// ============================================================================

/// Rendering configuration threaded through every formatting call.
///
/// Nothing about rounding is stored globally: two threads formatting the same
/// value with different options never observe each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// Rounding applied to the dropped digits
    pub rounding: Rounding,

    /// Optional: character inserted between groups of three integer digits.
    /// None means no grouping
    pub group_separator: Option<char>,
}

impl FormatOptions {
    /// Create options with the given rounding mode and no grouping
    pub const fn new(rounding: Rounding) -> Self {
        Self {
            rounding,
            group_separator: None,
        }
    }

    /// Builder method: Set rounding mode
    pub const fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Builder method: Set group separator
    pub const fn with_group_separator(mut self, separator: char) -> Self {
        self.group_separator = Some(separator);
        self
    }

    /// Validate the options
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the separator could be confused with the
    /// number itself (a digit, `-` or `.`).
    pub fn validate(&self) -> NumericResult<()> {
        if let Some(separator) = self.group_separator {
            if separator.is_ascii_digit() || separator == '-' || separator == '.' {
                return Err(NumericError::InvalidArgument(
                    "group separator must not be a digit, '-' or '.'",
                ));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Preset Options (Factory Methods)
// ============================================================================

impl FormatOptions {
    /// Amounts truncate: never display more than is held
    pub const fn amount() -> Self {
        Self::new(Rounding::Down)
    }

    /// Percentages round to the nearest display value
    pub const fn percentage() -> Self {
        Self::new(Rounding::HalfUp)
    }

    /// Prices truncate like amounts
    pub const fn price() -> Self {
        Self::new(Rounding::Down)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::amount()
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render `mantissa / 10^decimals` with exactly `decimals` fractional digits.
pub(crate) fn render_digits(mantissa: &BigInt, decimals: u32, separator: Option<char>) -> String {
    let digits = mantissa.magnitude().to_str_radix(10);
    let places = decimals as usize;

    let (int_part, frac_part) = if places == 0 {
        (digits, String::new())
    } else {
        let padded = format!("{:0>width$}", digits, width = places + 1);
        let split = padded.len() - places;
        (padded[..split].to_string(), padded[split..].to_string())
    };

    let mut out = String::with_capacity(int_part.len() + frac_part.len() + 2);
    if mantissa.is_negative() {
        out.push('-');
    }
    match separator {
        Some(sep) => out.push_str(&group_digits(&int_part, sep)),
        None => out.push_str(&int_part),
    }
    if places > 0 {
        out.push('.');
        out.push_str(&frac_part);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

impl Fraction {
    /// Render with exactly `places` fractional digits.
    ///
    /// The value is rounded with `options.rounding` first. Zero places omits
    /// the decimal point. A value that rounds to zero carries no sign.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the options fail validation.
    ///
    /// # Example
    /// ```
    /// use currency_fractions::numeric::{FormatOptions, Fraction, Rounding};
    ///
    /// let x: Fraction = "1234567.891".parse().unwrap();
    /// let opts = FormatOptions::new(Rounding::HalfUp).with_group_separator(',');
    /// assert_eq!(x.to_fixed(2, &opts).unwrap(), "1,234,567.89");
    /// ```
    pub fn to_fixed(&self, places: u32, options: &FormatOptions) -> NumericResult<String> {
        options.validate()?;
        let rounded = self.round_to_places(places, options.rounding);
        Ok(render_digits(
            rounded.mantissa(),
            rounded.decimals(),
            options.group_separator,
        ))
    }

    /// Render rounded to `digits` significant digits in plain notation,
    /// without trailing fractional zeros.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `digits` is zero.
    pub fn to_significant(&self, digits: u32, rounding: Rounding) -> NumericResult<String> {
        let rounded = self.round_to_significant(digits, rounding)?;
        Ok(rounded.normalize().to_string())
    }
}
