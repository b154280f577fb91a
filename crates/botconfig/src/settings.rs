use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::builder::BotConfigOptions;
use crate::error::Error;
use crate::output::DEFAULT_OUTPUT_PATH;
use crate::subgraph::{UNISWAP_V2_SUBGRAPH_URL, UNSUPPORTED_TOKENS_URL};
use crate::types::config::Environment;

const ENV_PREFIX: &str = "BOTCONFIG_";

/// How pair candidates are obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchMode {
    /// Top pairs, taken as-is.
    #[default]
    Pairs,
    /// Top tokens, combined into every possible pair.
    Tokens,
}

impl FromStr for FetchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pairs" => Ok(FetchMode::Pairs),
            "tokens" => Ok(FetchMode::Tokens),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

/// Runtime settings, read from `BOTCONFIG_*` environment variables.
#[derive(Debug, Clone)]
pub struct Settings {
    pub subgraph_url: String,
    pub blocklist_url: String,
    /// Number of pairs (or tokens) requested from the subgraph.
    pub first: u32,
    pub mode: FetchMode,
    pub output: PathBuf,
    pub timeout: Duration,
    pub environment: Environment,
    /// Treat a blocklist fetch failure as fatal instead of continuing
    /// with an empty blocklist.
    pub require_blocklist: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            subgraph_url: UNISWAP_V2_SUBGRAPH_URL.to_string(),
            blocklist_url: UNSUPPORTED_TOKENS_URL.to_string(),
            first: 100,
            mode: FetchMode::Pairs,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            timeout: Duration::from_secs(30),
            environment: Environment::Production,
            require_blocklist: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup. Unset variables
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(&format!("{ENV_PREFIX}{name}")).filter(|v| !v.trim().is_empty())
        };
        let mut settings = Self::default();

        if let Some(url) = get("SUBGRAPH_URL") {
            settings.subgraph_url = url;
        }
        if let Some(url) = get("BLOCKLIST_URL") {
            settings.blocklist_url = url;
        }
        if let Some(first) = get("FIRST") {
            settings.first = parse_var("FIRST", &first)?;
        }
        if let Some(mode) = get("MODE") {
            settings.mode = mode.parse().map_err(Error::Settings)?;
        }
        if let Some(output) = get("OUTPUT") {
            settings.output = PathBuf::from(output);
        }
        if let Some(secs) = get("TIMEOUT_SECS") {
            settings.timeout = Duration::from_secs(parse_var("TIMEOUT_SECS", &secs)?);
        }
        if let Some(env) = get("ENVIRONMENT") {
            settings.environment = env.parse().map_err(Error::Settings)?;
        }
        if let Some(flag) = get("REQUIRE_BLOCKLIST") {
            settings.require_blocklist = parse_var("REQUIRE_BLOCKLIST", &flag)?;
        }

        Ok(settings)
    }

    pub fn options(&self) -> BotConfigOptions {
        BotConfigOptions {
            environment: self.environment,
            ..BotConfigOptions::default()
        }
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T, Error>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::Settings(format!("{ENV_PREFIX}{name}={value:?}: {e}")))
}
