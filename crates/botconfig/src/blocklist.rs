use std::collections::HashSet;

use crate::error::FetchError;
use crate::types::graph::TokenList;

/// Set of token addresses excluded from the generated config.
///
/// Addresses are lowercased on insert and on lookup, so membership is
/// case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedSet {
    entries: HashSet<String>,
}

impl BlockedSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from a parsed token-list document.
    pub fn from_token_list(list: &TokenList) -> Self {
        list.tokens.iter().map(|t| t.address.as_str()).collect()
    }

    /// Parse a token-list JSON document (`{"tokens": [{"address": ...}]}`).
    pub fn from_json(json: &str) -> Result<Self, FetchError> {
        let list: TokenList =
            serde_json::from_str(json).map_err(|e| FetchError::Parse(e.to_string()))?;
        Ok(Self::from_token_list(&list))
    }

    pub fn contains(&self, address: &str) -> bool {
        self.entries.contains(&address.to_lowercase())
    }

    pub fn insert(&mut self, address: &str) {
        self.entries.insert(address.to_lowercase());
    }

    /// Add every entry of another set.
    pub fn merge(&mut self, other: &BlockedSet) {
        self.entries.extend(other.entries.iter().cloned());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for BlockedSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::empty();
        for address in iter {
            set.insert(address);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_case_insensitive() {
        let mut set = BlockedSet::empty();
        set.insert("0xdAC17F958D2ee523a2206206994597C13D831ec7");
        assert!(set.contains("0xdac17f958d2ee523a2206206994597c13d831ec7"));
        assert!(set.contains("0xDAC17F958D2EE523A2206206994597C13D831EC7"));
        assert!(!set.contains("0x0000000000000000000000000000000000000000"));
    }

    #[test]
    fn test_from_json_ignores_extra_fields() {
        let json = r#"{
            "name": "Unsupported Tokens",
            "timestamp": "2021-01-05T20:47:02.923Z",
            "tokens": [
                {
                    "chainId": 1,
                    "address": "0x4Dd9A0B8D3E7D4B2c4b0f2b9A6e3e0a1F2b3C4d5",
                    "name": "Some Token",
                    "symbol": "SOME",
                    "decimals": 18
                },
                { "address": "0xABCDEF0000000000000000000000000000000001" }
            ]
        }"#;

        let set = BlockedSet::from_json(json).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("0x4dd9a0b8d3e7d4b2c4b0f2b9a6e3e0a1f2b3c4d5"));
        assert!(set.contains("0xabcdef0000000000000000000000000000000001"));
    }

    #[test]
    fn test_from_json_missing_tokens_is_error() {
        assert!(BlockedSet::from_json(r#"{"name": "x"}"#).is_err());
        assert!(BlockedSet::from_json("not json").is_err());
    }

    #[test]
    fn test_merge() {
        let mut a: BlockedSet = ["0xAA"].into_iter().collect();
        let b: BlockedSet = ["0xaa", "0xBB"].into_iter().collect();
        a.merge(&b);
        assert_eq!(a.len(), 2);
        assert!(a.contains("0xbb"));
    }
}
