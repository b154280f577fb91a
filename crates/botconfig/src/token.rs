use crate::error::Error;

/// Canonical WETH address on Ethereum mainnet (lowercase).
pub const WRAPPED_NATIVE_ADDRESS: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";

/// Sentinel address the bot reads as "native asset".
pub const NATIVE_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

pub const NATIVE_SYMBOL: &str = "ETH";

/// Token metadata as fetched from the subgraph.
///
/// `address` is always lowercase. `decimals` is kept in its wire form
/// (the subgraph returns a `BigInt` string) and only parsed when a pair
/// descriptor is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub address: String,
    pub symbol: String,
    pub decimals: String,
}

impl TokenRecord {
    /// Create a record, validating and lowercasing the address.
    pub fn new(
        address: &str,
        symbol: impl Into<String>,
        decimals: impl Into<String>,
    ) -> Result<Self, Error> {
        Ok(Self {
            address: normalize_address(address)?,
            symbol: symbol.into(),
            decimals: decimals.into(),
        })
    }

    pub fn is_wrapped_native(&self) -> bool {
        self.address.eq_ignore_ascii_case(WRAPPED_NATIVE_ADDRESS)
    }

    /// Rewrite WETH to the native-asset sentinel; other tokens pass through.
    pub fn into_native(self) -> Self {
        if self.is_wrapped_native() {
            Self {
                address: NATIVE_ADDRESS.to_string(),
                symbol: NATIVE_SYMBOL.to_string(),
                decimals: self.decimals,
            }
        } else {
            self
        }
    }

    /// Parse the wire decimals into an integer.
    pub fn parse_decimals(&self) -> Result<u32, Error> {
        self.decimals
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::InvalidDecimals {
                address: self.address.clone(),
                value: self.decimals.clone(),
            })
    }
}

/// Two tokens tradable against each other, in the order they were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCandidate {
    pub token_a: TokenRecord,
    pub token_b: TokenRecord,
}

impl PairCandidate {
    pub fn new(token_a: TokenRecord, token_b: TokenRecord) -> Self {
        Self { token_a, token_b }
    }
}

/// Validate a `0x`-prefixed 20-byte hex address and return it lowercased.
pub fn normalize_address(address: &str) -> Result<String, Error> {
    let trimmed = address.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or_else(|| Error::InvalidAddress(address.to_string()))?;

    let bytes = hex::decode(digits).map_err(|_| Error::InvalidAddress(address.to_string()))?;
    if bytes.len() != 20 {
        return Err(Error::InvalidAddress(address.to_string()));
    }

    Ok(format!("0x{}", hex::encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_address_lowercases() {
        let addr = normalize_address("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2").unwrap();
        assert_eq!(addr, WRAPPED_NATIVE_ADDRESS);
    }

    #[test]
    fn test_normalize_address_rejects_malformed() {
        assert!(normalize_address("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2").is_err());
        assert!(normalize_address("0xabc").is_err());
        assert!(normalize_address("0xzz2aaa39b223fe8d0a0e5c4f27ead9083c756cc2").is_err());
    }

    #[test]
    fn test_weth_rewritten_to_native() {
        let weth = TokenRecord::new("0xC02AAA39B223FE8D0A0E5C4F27EAD9083C756CC2", "WETH", "18")
            .unwrap()
            .into_native();
        assert_eq!(weth.symbol, "ETH");
        assert_eq!(weth.address, NATIVE_ADDRESS);
        assert_eq!(weth.decimals, "18");
    }

    #[test]
    fn test_other_token_untouched() {
        let usdt = TokenRecord::new("0xdAC17F958D2ee523a2206206994597C13D831ec7", "USDT", "6")
            .unwrap();
        let same = usdt.clone().into_native();
        assert_eq!(same, usdt);
        assert_eq!(same.address, "0xdac17f958d2ee523a2206206994597c13d831ec7");
    }

    #[test]
    fn test_parse_decimals() {
        let token = TokenRecord::new(NATIVE_ADDRESS, "X", " 8 ").unwrap();
        assert_eq!(token.parse_decimals().unwrap(), 8);

        let bad = TokenRecord::new(NATIVE_ADDRESS, "X", "eighteen").unwrap();
        assert!(matches!(
            bad.parse_decimals(),
            Err(Error::InvalidDecimals { .. })
        ));

        let negative = TokenRecord::new(NATIVE_ADDRESS, "X", "-1").unwrap();
        assert!(negative.parse_decimals().is_err());
    }
}
