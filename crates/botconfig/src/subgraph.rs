use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::blocklist::BlockedSet;
use crate::error::{Error, FetchError};
use crate::source::{BlocklistSource, PairSource};
use crate::token::{PairCandidate, TokenRecord};
use crate::types::graph::{FirstVariables, GraphRequest, GraphResponse, PairsData, TokensData};

pub const UNISWAP_V2_SUBGRAPH_URL: &str =
    "https://api.thegraph.com/subgraphs/name/uniswap/uniswap-v2";

pub const UNSUPPORTED_TOKENS_URL: &str = "https://unsupportedtokens.uniswap.org";

/// Top pairs by reserve value.
pub const PAIRS_QUERY: &str = r#"
query pairs($first: Int!) {
    pairs(first: $first, orderBy: reserveUSD, orderDirection: desc) {
        id
        token0 {
            id
            symbol
            decimals
        }
        token1 {
            id
            symbol
            decimals
        }
    }
}
"#;

/// Top tokens by traded volume.
pub const TOKENS_QUERY: &str = r#"
query tokens($first: Int!) {
    tokens(first: $first, orderBy: tradeVolumeUSD, orderDirection: desc) {
        id
        symbol
        decimals
    }
}
"#;

/// Uniswap v2 subgraph client.
pub struct SubgraphClient {
    client: Client,
    url: String,
}

impl SubgraphClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    async fn query<T: DeserializeOwned>(&self, query: &str, first: u32) -> Result<T, FetchError> {
        let request = GraphRequest {
            query,
            variables: FirstVariables { first },
        };

        debug!("POST {} (first={first})", self.url);
        let response = self.client.post(&self.url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        parse_graph_response(&body)
    }
}

#[async_trait]
impl PairSource for SubgraphClient {
    async fn fetch_pairs(&self, first: u32) -> Result<Vec<PairCandidate>, Error> {
        let data: PairsData = self.query(PAIRS_QUERY, first).await?;
        info!("fetched {} pairs from subgraph", data.pairs.len());
        data.pairs.iter().map(|p| p.to_candidate()).collect()
    }

    async fn fetch_tokens(&self, first: u32) -> Result<Vec<TokenRecord>, Error> {
        let data: TokensData = self.query(TOKENS_QUERY, first).await?;
        info!("fetched {} tokens from subgraph", data.tokens.len());
        data.tokens.iter().map(|t| t.to_record()).collect()
    }
}

/// Decode a GraphQL response body, rejecting error envelopes.
pub fn parse_graph_response<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    let response: GraphResponse<T> =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    if !response.errors.is_empty() {
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(FetchError::Graphql(messages.join("; ")));
    }

    response
        .data
        .ok_or_else(|| FetchError::Parse("response has no data".to_string()))
}

/// HTTP client for the unsupported-tokens list.
pub struct BlocklistClient {
    client: Client,
    url: String,
}

impl BlocklistClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl BlocklistSource for BlocklistClient {
    async fn fetch_blocklist(&self) -> Result<BlockedSet, FetchError> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        let blocked = BlockedSet::from_json(&body)?;
        info!("fetched {} unsupported tokens", blocked.len());
        Ok(blocked)
    }
}
