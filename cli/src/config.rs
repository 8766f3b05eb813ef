//! Command-line and environment configuration.

use clap::Parser;

pub const API_URL_VAR: &str = "COURSE_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("must be an http:// or https:// URL, got {0:?}")]
    InvalidUrl(String),
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "za-crud", about = "Terminal client for the course CRUD service")]
pub struct Cli {
    /// Server root; the client appends `/items/`.
    #[arg(long, env = "COURSE_API_URL", default_value = DEFAULT_API_URL, value_parser = parse_api_url)]
    pub api_url: String,
}

/// Accept only http(s) URLs and drop any trailing slash.
fn parse_api_url(raw: &str) -> Result<String, ConfigError> {
    let value = raw.trim();
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl(value.to_string()));
    }
    Ok(value.trim_end_matches('/').to_string())
}
