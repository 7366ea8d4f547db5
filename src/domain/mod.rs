// ============================================================================
// Domain Models Module
// Currency identities and the value types bound to them
// ============================================================================

pub mod amount;
pub mod currency;
pub mod percentage;
pub mod price;

pub use amount::Amount;
pub use currency::{Currency, NativeCurrency, Token, TokenAddress};
pub use percentage::Percentage;
pub use price::Price;
