use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::token::{PairCandidate, TokenRecord};

/// GraphQL request body.
#[derive(Debug, Clone, Serialize)]
pub struct GraphRequest<'a> {
    pub query: &'a str,
    pub variables: FirstVariables,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FirstVariables {
    pub first: u32,
}

/// GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphResponse<T> {
    pub data: Option<T>,

    #[serde(default)]
    pub errors: Vec<GraphError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphError {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PairsData {
    pub pairs: Vec<GraphPair>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokensData {
    pub tokens: Vec<GraphToken>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphPair {
    pub id: String,
    pub token0: GraphToken,
    pub token1: GraphToken,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphToken {
    pub id: String,
    pub symbol: String,
    pub decimals: RawDecimals,
}

/// Decimals as they appear on the wire: the subgraph uses `BigInt`
/// strings, hand-written fixtures often use plain numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDecimals {
    Text(String),
    Number(serde_json::Number),
}

impl RawDecimals {
    pub fn as_text(&self) -> String {
        match self {
            RawDecimals::Text(s) => s.clone(),
            RawDecimals::Number(n) => n.to_string(),
        }
    }
}

impl GraphToken {
    pub fn to_record(&self) -> Result<TokenRecord, Error> {
        TokenRecord::new(&self.id, self.symbol.clone(), self.decimals.as_text())
    }
}

impl GraphPair {
    pub fn to_candidate(&self) -> Result<PairCandidate, Error> {
        Ok(PairCandidate::new(
            self.token0.to_record()?,
            self.token1.to_record()?,
        ))
    }
}

/// Token-list document served by the unsupported-tokens endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenList {
    pub tokens: Vec<TokenListEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenListEntry {
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_response_parse() {
        let json = r#"{
            "data": {
                "pairs": [
                    {
                        "id": "0x0d4a11d5eeaac28ec3f61d100daf4d40471f1852",
                        "token0": {
                            "id": "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
                            "symbol": "WETH",
                            "decimals": "18"
                        },
                        "token1": {
                            "id": "0xdac17f958d2ee523a2206206994597c13d831ec7",
                            "symbol": "USDT",
                            "decimals": 6
                        }
                    }
                ]
            }
        }"#;

        let response: GraphResponse<PairsData> = serde_json::from_str(json).unwrap();
        assert!(response.errors.is_empty());
        let pairs = response.data.unwrap().pairs;
        let candidate = pairs[0].to_candidate().unwrap();
        assert_eq!(candidate.token_a.address, "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
        assert_eq!(candidate.token_a.decimals, "18");
        assert_eq!(candidate.token_b.decimals, "6");
    }

    #[test]
    fn test_errors_envelope_parse() {
        let json = r#"{"errors": [{"message": "indexing_error"}]}"#;
        let response: GraphResponse<TokensData> = serde_json::from_str(json).unwrap();
        assert!(response.data.is_none());
        assert_eq!(response.errors[0].message, "indexing_error");
    }

    #[test]
    fn test_bad_token_address() {
        let token = GraphToken {
            id: "not-an-address".to_string(),
            symbol: "BAD".to_string(),
            decimals: RawDecimals::Text("18".to_string()),
        };
        assert!(matches!(token.to_record(), Err(Error::InvalidAddress(_))));
    }
}
