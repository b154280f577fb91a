pub mod blocklist;
pub mod builder;
pub mod error;
pub mod output;
pub mod settings;
pub mod source;
pub mod subgraph;
pub mod token;
pub mod types;

use error::Error;
use tracing::info;

// Re-exports for convenience
pub use blocklist::BlockedSet;
pub use builder::{all_pairs, build, build_from_tokens, build_with, BotConfigOptions};
pub use settings::{FetchMode, Settings};
pub use source::{load_blocklist, BlocklistSource, PairSource};
pub use subgraph::{BlocklistClient, SubgraphClient};
pub use token::{PairCandidate, TokenRecord};
pub use types::config::{BotConfig, Environment, PairDescriptor};

/// Fetch candidates and the blocklist, build the config and write it to
/// `settings.output`.
///
/// Nothing is written unless every step before the write succeeds.
pub async fn generate(
    settings: &Settings,
    pairs: &dyn PairSource,
    blocklist: &dyn BlocklistSource,
) -> Result<BotConfig, Error> {
    let candidates = match settings.mode {
        FetchMode::Pairs => pairs.fetch_pairs(settings.first).await?,
        FetchMode::Tokens => all_pairs(&pairs.fetch_tokens(settings.first).await?),
    };

    let blocked = if settings.require_blocklist {
        blocklist.fetch_blocklist().await?
    } else {
        load_blocklist(blocklist).await
    };

    let config = build_with(&candidates, &blocked, settings.options())?;
    info!(
        "built {} of {} candidate pairs ({} blocked tokens)",
        config.queries.len(),
        candidates.len(),
        blocked.len()
    );

    output::write(&config, &settings.output)?;
    info!("wrote {}", settings.output.display());
    Ok(config)
}

/// High-level convenience: run [`generate`] against the live endpoints
/// named in `settings`.
pub async fn run(settings: &Settings) -> Result<BotConfig, Error> {
    let subgraph = SubgraphClient::new(settings.subgraph_url.clone(), settings.timeout)?;
    let blocklist = BlocklistClient::new(settings.blocklist_url.clone(), settings.timeout)?;
    generate(settings, &subgraph, &blocklist).await
}
