use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Exchange identifier the downstream bot uses to pick its Uniswap v2 adapter.
pub const UNISWAP_EXCHANGE: &str = "uniswap";

/// Top-level bot configuration file (`botconfig.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Whether the bot starts without its web interface.
    pub headless: bool,

    /// When set, trades are simulated and recorded instead of executed.
    #[serde(rename = "testingMode")]
    pub testing_mode: bool,

    pub environment: Environment,

    /// Whether the bot starts arbitrage immediately.
    pub active: bool,

    /// Tracked pairs, in the order they were produced.
    pub queries: Vec<PairDescriptor>,
}

/// A single tracked trading pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairDescriptor {
    pub name: String,

    pub exchange: String,

    #[serde(rename = "type")]
    pub kind: ExchangeType,

    #[serde(rename = "tokenA")]
    pub token_a: TokenEntry,

    #[serde(rename = "tokenB")]
    pub token_b: TokenEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEntry {
    pub name: String,
    pub address: String,
    pub decimals: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str("production"),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeType {
    #[default]
    Dex,
    Cex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_field_names() {
        let descriptor = PairDescriptor {
            name: "Uniswap ETH/USDT".to_string(),
            exchange: UNISWAP_EXCHANGE.to_string(),
            kind: ExchangeType::Dex,
            token_a: TokenEntry {
                name: "ETH".to_string(),
                address: "0x0000000000000000000000000000000000000000".to_string(),
                decimals: 18,
            },
            token_b: TokenEntry {
                name: "USDT".to_string(),
                address: "0xdac17f958d2ee523a2206206994597c13d831ec7".to_string(),
                decimals: 6,
            },
        };

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["type"], "dex");
        assert_eq!(value["exchange"], "uniswap");
        assert_eq!(value["tokenA"]["name"], "ETH");
        assert_eq!(value["tokenB"]["decimals"], 6);
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!("Production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(" development".parse::<Environment>().unwrap(), Environment::Development);
        assert!("staging".parse::<Environment>().is_err());
        assert_eq!(Environment::default().to_string(), "production");
    }
}
