use tracing::debug;

use crate::blocklist::BlockedSet;
use crate::error::Error;
use crate::token::{PairCandidate, TokenRecord};
use crate::types::config::{
    BotConfig, Environment, ExchangeType, PairDescriptor, TokenEntry, UNISWAP_EXCHANGE,
};

/// Top-level flags written alongside the generated pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotConfigOptions {
    pub headless: bool,
    pub testing_mode: bool,
    pub environment: Environment,
    pub active: bool,
}

impl Default for BotConfigOptions {
    fn default() -> Self {
        Self {
            headless: true,
            testing_mode: true,
            environment: Environment::Production,
            active: true,
        }
    }
}

/// Build a bot config from candidate pairs with the default flags.
pub fn build(candidates: &[PairCandidate], blocked: &BlockedSet) -> Result<BotConfig, Error> {
    build_with(candidates, blocked, BotConfigOptions::default())
}

/// Build a bot config from candidate pairs.
///
/// Pairs touching a blocked token are dropped. WETH is rewritten to the
/// native-asset sentinel. Input order is preserved.
pub fn build_with(
    candidates: &[PairCandidate],
    blocked: &BlockedSet,
    options: BotConfigOptions,
) -> Result<BotConfig, Error> {
    let mut queries = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let PairCandidate { token_a, token_b } = candidate;

        if blocked.contains(&token_a.address) || blocked.contains(&token_b.address) {
            debug!(
                "skipping blocked pair {}/{}",
                token_a.symbol, token_b.symbol
            );
            continue;
        }

        queries.push(describe_pair(token_a.clone(), token_b.clone())?);
    }

    Ok(BotConfig {
        headless: options.headless,
        testing_mode: options.testing_mode,
        environment: options.environment,
        active: options.active,
        queries,
    })
}

/// Build a bot config from a flat token list by pairing every token with
/// every later one.
pub fn build_from_tokens(tokens: &[TokenRecord], blocked: &BlockedSet) -> Result<BotConfig, Error> {
    build(&all_pairs(tokens), blocked)
}

/// All unordered 2-combinations of `tokens`, in lexicographic order:
/// `[A, B, C]` yields `(A, B), (A, C), (B, C)`.
pub fn all_pairs(tokens: &[TokenRecord]) -> Vec<PairCandidate> {
    let mut pairs = Vec::new();
    for (i, token_a) in tokens.iter().enumerate() {
        for token_b in &tokens[i + 1..] {
            pairs.push(PairCandidate::new(token_a.clone(), token_b.clone()));
        }
    }
    pairs
}

fn describe_pair(token_a: TokenRecord, token_b: TokenRecord) -> Result<PairDescriptor, Error> {
    let token_a = entry(token_a.into_native())?;
    let token_b = entry(token_b.into_native())?;

    Ok(PairDescriptor {
        name: format!("Uniswap {}/{}", token_a.name, token_b.name),
        exchange: UNISWAP_EXCHANGE.to_string(),
        kind: ExchangeType::Dex,
        token_a,
        token_b,
    })
}

fn entry(token: TokenRecord) -> Result<TokenEntry, Error> {
    let decimals = token.parse_decimals()?;
    Ok(TokenEntry {
        name: token.symbol,
        address: token.address.to_lowercase(),
        decimals,
    })
}
