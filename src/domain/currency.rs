// ============================================================================
// Currency Identity
// Tokens, native chain currencies and the variant that unifies them
// ============================================================================

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Token Address
// ============================================================================

/// Opaque 20-byte contract address. Every byte pattern is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenAddress([u8; 20]);

impl TokenAddress {
    /// Creates an address from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 20] {
        self.0
    }

    /// The all-zero address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 20])
    }
}

/// Lowercase hex with a `0x` prefix. No checksum casing.
impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

// ============================================================================
// Token
// ============================================================================

/// A contract token on a given chain.
///
/// Identity is the pair (chain id, address). Decimals, symbol and name are
/// metadata and do not take part in equality or hashing.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    chain_id: u64,
    address: TokenAddress,
    decimals: u8,
    symbol: Option<String>,
    name: Option<String>,
}

impl Token {
    /// Create a token without symbol or name.
    pub fn new(chain_id: u64, address: TokenAddress, decimals: u8) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: None,
            name: None,
        }
    }

    /// Builder method: Set ticker symbol
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Builder method: Set display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Chain the token lives on.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Contract address.
    pub fn address(&self) -> TokenAddress {
        self.address
    }

    /// Fractional digits of the smallest unit.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Ticker symbol, if set.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Display name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Same chain and same address.
    pub fn equals(&self, other: &Token) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

// ============================================================================
// Native Currency
// ============================================================================

/// The gas currency of a chain (ETH on mainnet, for example).
///
/// Carries the address of its wrapped ERC-20 form; the wrapped token is
/// rebuilt on demand with the same decimals, symbol and name.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NativeCurrency {
    chain_id: u64,
    decimals: u8,
    symbol: Option<String>,
    name: Option<String>,
    wrapped_address: TokenAddress,
}

impl NativeCurrency {
    /// Native currency of `chain_id`, wrapped at `wrapped_address`.
    pub fn new(chain_id: u64, decimals: u8, wrapped_address: TokenAddress) -> Self {
        Self {
            chain_id,
            decimals,
            symbol: None,
            name: None,
            wrapped_address,
        }
    }

    /// Builder method: Set ticker symbol
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Builder method: Set display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Chain whose gas currency this is.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Fractional digits of the smallest unit.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Ticker symbol, if set.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Display name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The wrapped token: same chain, same decimals.
    pub fn wrapped(&self) -> Token {
        Token {
            chain_id: self.chain_id,
            address: self.wrapped_address,
            decimals: self.decimals,
            symbol: self.symbol.clone(),
            name: self.name.clone(),
        }
    }
}

// ============================================================================
// Currency
// ============================================================================

/// Either a native chain currency or a contract token.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Currency {
    Native(NativeCurrency),
    Token(Token),
}

impl Currency {
    /// Fractional digits of the smallest unit.
    pub fn decimals(&self) -> u8 {
        match self {
            Currency::Native(native) => native.decimals,
            Currency::Token(token) => token.decimals,
        }
    }

    /// Chain of either variant.
    pub fn chain_id(&self) -> u64 {
        match self {
            Currency::Native(native) => native.chain_id,
            Currency::Token(token) => token.chain_id,
        }
    }

    /// Ticker symbol of either variant, if set.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Currency::Native(native) => native.symbol(),
            Currency::Token(token) => token.symbol(),
        }
    }

    /// Check if this is a native chain currency.
    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native(_))
    }

    /// Check if this is a contract token.
    pub fn is_token(&self) -> bool {
        matches!(self, Currency::Token(_))
    }

    /// Identity comparison.
    ///
    /// Tokens match on chain and address. A native currency matches any other
    /// native currency on the same chain. Native and token never match, even
    /// when the token is the native's own wrapped form.
    pub fn equals(&self, other: &Currency) -> bool {
        match (self, other) {
            (Currency::Token(a), Currency::Token(b)) => a.equals(b),
            (Currency::Native(a), Currency::Native(b)) => a.chain_id == b.chain_id,
            _ => false,
        }
    }

    /// Token form of this currency: tokens map to themselves.
    pub fn wrapped(&self) -> Token {
        match self {
            Currency::Native(native) => native.wrapped(),
            Currency::Token(token) => token.clone(),
        }
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_native().hash(state);
        match self {
            Currency::Native(native) => native.chain_id.hash(state),
            Currency::Token(token) => token.hash(state),
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Currency::Token(token)
    }
}

impl From<NativeCurrency> for Currency {
    fn from(native: NativeCurrency) -> Self {
        Currency::Native(native)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.symbol(), self) {
            (Some(symbol), _) => f.write_str(symbol),
            (None, Currency::Native(native)) => write!(f, "native({})", native.chain_id),
            (None, Currency::Token(token)) => write!(f, "{}:{}", token.chain_id, token.address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> TokenAddress {
        TokenAddress::from_bytes([byte; 20])
    }

    fn eth() -> NativeCurrency {
        NativeCurrency::new(1, 18, addr(0xc0))
            .with_symbol("ETH")
            .with_name("Ether")
    }

    #[test]
    fn test_address_display() {
        let mut bytes = [0u8; 20];
        bytes[19] = 0xab;
        assert_eq!(
            TokenAddress::from_bytes(bytes).to_string(),
            "0x00000000000000000000000000000000000000ab"
        );
        assert_eq!(TokenAddress::zero().as_bytes(), [0u8; 20]);
    }

    #[test]
    fn test_token_identity_ignores_metadata() {
        let a = Token::new(1, addr(1), 6).with_symbol("USDC");
        let b = Token::new(1, addr(1), 6).with_symbol("USD Coin");
        let other_chain = Token::new(10, addr(1), 6);
        assert!(a.equals(&b));
        assert_eq!(a, b);
        assert!(!a.equals(&other_chain));
    }

    #[test]
    fn test_token_accessors() {
        let t = Token::new(137, addr(2), 8).with_symbol("WBTC").with_name("Wrapped BTC");
        assert_eq!(t.chain_id(), 137);
        assert_eq!(t.address(), addr(2));
        assert_eq!(t.decimals(), 8);
        assert_eq!(t.symbol(), Some("WBTC"));
        assert_eq!(t.name(), Some("Wrapped BTC"));
    }

    #[test]
    fn test_native_wrapped_keeps_decimals() {
        let native = eth();
        let wrapped = native.wrapped();
        assert_eq!(wrapped.decimals(), 18);
        assert_eq!(wrapped.chain_id(), 1);
        assert_eq!(wrapped.address(), addr(0xc0));
        assert_eq!(wrapped.symbol(), Some("ETH"));
    }

    #[test]
    fn test_currency_equals() {
        let native = Currency::from(eth());
        let other_native = Currency::from(NativeCurrency::new(1, 18, addr(0xee)));
        let l2_native = Currency::from(NativeCurrency::new(10, 18, addr(0xc0)));
        let weth = Currency::from(eth().wrapped());

        assert!(native.equals(&other_native));
        assert!(!native.equals(&l2_native));
        assert!(!native.equals(&weth));
        assert!(!weth.equals(&native));
        assert!(weth.equals(&Currency::Token(Token::new(1, addr(0xc0), 18))));
    }

    #[test]
    fn test_currency_variant_predicates() {
        let native = Currency::from(eth());
        let token = Currency::from(Token::new(1, addr(3), 6));
        assert!(native.is_native() && !native.is_token());
        assert!(token.is_token() && !token.is_native());
        assert_eq!(native.decimals(), 18);
        assert_eq!(token.decimals(), 6);
    }

    #[test]
    fn test_currency_wrapped() {
        let token = Token::new(1, addr(3), 6);
        assert_eq!(Currency::from(token.clone()).wrapped(), token);
        assert_eq!(Currency::from(eth()).wrapped(), eth().wrapped());
    }

    #[test]
    fn test_currency_hash_matches_equality() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Currency::from(eth()));
        assert!(set.contains(&Currency::from(NativeCurrency::new(1, 18, addr(0)))));
        assert!(!set.contains(&Currency::from(eth().wrapped())));
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::from(eth()).to_string(), "ETH");
        assert_eq!(
            Currency::from(NativeCurrency::new(5, 18, addr(0))).to_string(),
            "native(5)"
        );
        assert_eq!(
            Currency::from(Token::new(1, TokenAddress::zero(), 6)).to_string(),
            "1:0x0000000000000000000000000000000000000000"
        );
    }
}
