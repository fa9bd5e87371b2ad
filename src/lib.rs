// src/lib.rs

use std::sync::Arc;

// Re-export modules
pub mod chain;
pub mod config;
pub mod mcp;
pub mod utils;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: config::Config,
    /// Chain client for querying the XingHuo node
    pub chain: Arc<dyn chain::ChainQuery>,
}
