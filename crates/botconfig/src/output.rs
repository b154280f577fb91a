use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::OutputError;
use crate::types::config::BotConfig;

pub const DEFAULT_OUTPUT_PATH: &str = "botconfig.json";

const INDENT: &[u8] = b"    ";

/// Render a config as JSON indented with four spaces.
pub fn to_json(config: &BotConfig) -> Result<String, OutputError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parse a config document.
pub fn from_json(json: &str) -> Result<BotConfig, OutputError> {
    Ok(serde_json::from_str(json)?)
}

/// Render the config and write it to `path`. The file is only touched
/// once rendering has succeeded.
pub fn write(config: &BotConfig, path: &Path) -> Result<(), OutputError> {
    let json = to_json(config)?;
    std::fs::write(path, json).map_err(|source| OutputError::Io {
        path: path.display().to_string(),
        source,
    })
}
