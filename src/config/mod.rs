//! Configuration management

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use url::Url;

const DEFAULT_CONFIG_FILE: &str = "market.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Externally reachable base URL of this server.
    /// Defaults to loopback on `port`.
    #[serde(default)]
    pub public_url: Option<String>,

    #[serde(default)]
    pub backend: BackendConfig,
}

fn default_port() -> u16 {
    3000
}

/// Where the auth backend lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub url: String,
    #[serde(default = "default_backend_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            timeout_secs: default_backend_timeout_secs(),
        }
    }
}

fn default_backend_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

fn default_backend_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Parsed backend base URL; only http(s) is accepted.
    pub fn backend_url(&self) -> Result<Url> {
        let url = Url::parse(&self.backend.url)
            .with_context(|| format!("invalid backend url: {}", self.backend.url))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => bail!("unsupported backend url scheme: {other}"),
        }
    }

    /// Base URL the server build uses to reach its own API.
    pub fn public_url(&self) -> String {
        match &self.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://127.0.0.1:{}", self.port),
        }
    }
}

fn config_path() -> PathBuf {
    std::env::var_os("MARKET_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

pub fn load_config() -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", 3000)?
        // Load from config file if it exists
        .add_source(::config::File::from(config_path()).required(false))
        // Override with environment variables (MARKET_PORT, MARKET_BACKEND__URL, etc.)
        .add_source(
            ::config::Environment::with_prefix("MARKET")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
