use async_trait::async_trait;
use tracing::warn;

use crate::blocklist::BlockedSet;
use crate::error::{Error, FetchError};
use crate::token::{PairCandidate, TokenRecord};

/// Trait for pair/token metadata providers (subgraph, fixtures, etc.).
#[async_trait]
pub trait PairSource: Send + Sync {
    /// Fetch up to `first` pairs, best first.
    async fn fetch_pairs(&self, first: u32) -> Result<Vec<PairCandidate>, Error>;

    /// Fetch up to `first` tokens, best first.
    async fn fetch_tokens(&self, first: u32) -> Result<Vec<TokenRecord>, Error>;
}

/// Trait for unsupported-token list providers.
#[async_trait]
pub trait BlocklistSource: Send + Sync {
    async fn fetch_blocklist(&self) -> Result<BlockedSet, FetchError>;
}

/// Fetch the blocklist, falling back to an empty set on failure.
pub async fn load_blocklist(source: &dyn BlocklistSource) -> BlockedSet {
    match source.fetch_blocklist().await {
        Ok(blocked) => blocked,
        Err(e) => {
            warn!("error while fetching unsupported tokens, continuing without blocklist: {e}");
            BlockedSet::empty()
        }
    }
}

/// In-memory pair source for testing and offline runs.
#[derive(Debug, Clone, Default)]
pub struct StaticPairSource {
    pairs: Vec<PairCandidate>,
    tokens: Vec<TokenRecord>,
}

impl StaticPairSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pair(&mut self, pair: PairCandidate) {
        self.pairs.push(pair);
    }

    pub fn add_token(&mut self, token: TokenRecord) {
        self.tokens.push(token);
    }
}

#[async_trait]
impl PairSource for StaticPairSource {
    async fn fetch_pairs(&self, first: u32) -> Result<Vec<PairCandidate>, Error> {
        Ok(self.pairs.iter().take(first as usize).cloned().collect())
    }

    async fn fetch_tokens(&self, first: u32) -> Result<Vec<TokenRecord>, Error> {
        Ok(self.tokens.iter().take(first as usize).cloned().collect())
    }
}

/// A blocklist source that always returns an empty set.
pub struct EmptyBlocklist;

#[async_trait]
impl BlocklistSource for EmptyBlocklist {
    async fn fetch_blocklist(&self) -> Result<BlockedSet, FetchError> {
        Ok(BlockedSet::empty())
    }
}

/// In-memory blocklist source.
#[derive(Debug, Clone, Default)]
pub struct StaticBlocklist {
    blocked: BlockedSet,
}

impl StaticBlocklist {
    pub fn new(blocked: BlockedSet) -> Self {
        Self { blocked }
    }
}

#[async_trait]
impl BlocklistSource for StaticBlocklist {
    async fn fetch_blocklist(&self) -> Result<BlockedSet, FetchError> {
        Ok(self.blocked.clone())
    }
}
