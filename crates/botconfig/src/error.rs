use thiserror::Error;

/// Unified error type for the bot config generator.
#[derive(Debug, Error)]
pub enum Error {
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("invalid decimals for token {address}: {value:?}")]
    InvalidDecimals { address: String, value: String },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("settings error: {0}")]
    Settings(String),

    #[error("output error: {0}")]
    Output(#[from] OutputError),
}

/// Errors while talking to the subgraph or the blocklist endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("graphql error: {0}")]
    Graphql(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Errors while rendering or writing the config file.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
