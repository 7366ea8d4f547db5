// ============================================================================
// Numeric Errors
// Error types for exact fraction arithmetic and currency-bound values
// ============================================================================

use std::fmt;

/// Errors that can occur during fraction arithmetic and the operations of the
/// currency-bound value types built on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Literal could not be interpreted as a decimal number
    InvalidInput(String),
    /// Amount mantissa exceeded 2^256 - 1 at its currency scale
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Operation requires both operands to share a currency
    CurrencyMismatch,
    /// Price composition requires quote currency == next base currency
    CurrencyChain,
    /// More fractional digits requested than the currency carries
    ExcessPrecision { requested: u32, max: u32 },
    /// Digit count argument is out of range
    InvalidArgument(&'static str),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput(literal) => {
                write!(f, "invalid input: {:?} is not a valid decimal number", literal)
            },
            NumericError::Overflow => {
                write!(f, "amount overflow: mantissa exceeds 2^256 - 1")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::CurrencyMismatch => {
                write!(f, "currency mismatch between operands")
            },
            NumericError::CurrencyChain => write!(
                f,
                "price chain broken: quote currency does not match next base currency"
            ),
            NumericError::ExcessPrecision { requested, max } => write!(
                f,
                "excess precision: {} decimal places requested, currency allows {}",
                requested, max
            ),
            NumericError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "amount overflow: mantissa exceeds 2^256 - 1"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::InvalidInput("1.2.3".to_string()).to_string(),
            "invalid input: \"1.2.3\" is not a valid decimal number"
        );
        assert_eq!(
            NumericError::ExcessPrecision {
                requested: 3,
                max: 0
            }
            .to_string(),
            "excess precision: 3 decimal places requested, currency allows 0"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::CurrencyMismatch, NumericError::CurrencyChain);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::CurrencyChain);
        assert!(err.to_string().contains("price chain"));
    }
}
