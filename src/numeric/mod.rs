// ============================================================================
// Numeric Module
// Exact decimal fractions for token amounts, prices and percentages
// ============================================================================
//
// This module provides:
// - Fraction: arbitrary-precision mantissa over a power-of-ten denominator
// - Numberish: normalization of literals into fractions
// - Rounding / div_round: explicit rounding on every lossy step
// - FormatOptions: rendering configuration passed to each formatter
// - NumericError: Error types for arithmetic and currency contracts
//
// Design principles:
// - No floating-point operations after literal normalization
// - All fallible arithmetic returns Result (no panics)
// - No process-wide rounding state

mod errors;
mod format;
mod fraction;
mod literal;
mod rounding;

pub use errors::{NumericError, NumericResult};
pub use format::FormatOptions;
pub use fraction::Fraction;
pub use literal::Numberish;
pub use rounding::{div_round, Rounding};

pub(crate) use fraction::pow10;
