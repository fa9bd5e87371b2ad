// src/config.rs

use anyhow::{Context, Result};
use std::env;

/// Endpoint used when BIF_NODE_URL is not set; the public XingHuo test node.
pub const DEFAULT_NODE_URL: &str = "http://test.bifcore.bitfactory.cn";

// A struct to hold all configuration, loaded once at startup from the .env file.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the XingHuo/BIF node HTTP API
    pub node_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load variables from the .env file into the environment
        dotenvy::dotenv().ok();

        let node_url = env::var("BIF_NODE_URL").unwrap_or_else(|_| DEFAULT_NODE_URL.to_string());
        url::Url::parse(&node_url)
            .with_context(|| format!("BIF_NODE_URL is not a valid URL: {}", node_url))?;

        Ok(Config { node_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_node_url_parses() {
        assert!(url::Url::parse(DEFAULT_NODE_URL).is_ok());
    }
}
