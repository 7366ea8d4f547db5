// ============================================================================
// Currency Fractions Library
// Exact decimal amounts, prices and percentages for ledger arithmetic
// ============================================================================

//! # Currency Fractions
//!
//! Exact fractional quantities for token accounting, where floating-point
//! error is unacceptable and amounts must fit in an unsigned 256-bit word.
//!
//! ## Features
//!
//! - **Arbitrary-precision fractions** (`mantissa / 10^decimals`) backed by `num-bigint`
//! - **Currency-bound amounts** with a 2^256 - 1 overflow bound on every result
//! - **Prices** that compose, invert and quote amounts
//! - **Percentages** rendered scaled by 100
//! - **Explicit rounding** (`Down`, `HalfUp`, `Up`) passed to every formatter
//!
//! ## Example
//!
//! ```rust
//! use currency_fractions::prelude::*;
//!
//! let weth = Currency::from(Token::new(1, TokenAddress::from_bytes([0xc0; 20]), 18));
//! let usdc = Currency::from(Token::new(1, TokenAddress::from_bytes([0xa0; 20]), 6));
//!
//! // 1 WETH buys 2500.5 USDC
//! let price = Price::from_ratio(weth.clone(), usdc.clone(), 1, "2500.5").unwrap();
//!
//! let balance = Amount::from_raw(weth, "0.25").unwrap();
//! let value = price.quote(&balance).unwrap();
//! assert_eq!(value.to_fixed(2, &FormatOptions::default()).unwrap(), "625.12");
//!
//! let fee = Percentage::new(3, 1000).unwrap();
//! assert_eq!(fee.to_string(), "0.30%");
//! ```

pub mod domain;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Amount, Currency, NativeCurrency, Percentage, Price, Token, TokenAddress,
    };
    pub use crate::numeric::{
        FormatOptions, Fraction, NumericError, NumericResult, Numberish, Rounding,
    };
}
