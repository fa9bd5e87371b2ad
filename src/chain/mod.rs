//! Upstream chain access.
//!
//! The MCP dispatcher only depends on the [`ChainQuery`] trait; the concrete
//! [`client::BifClient`] talks HTTP to a XingHuo/BIF node. Tests substitute
//! their own implementation.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod client;

pub use client::BifClient;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("node request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("node returned error_code {code}: {desc}")]
    Node { code: i64, desc: String },
    #[error("malformed node response: missing '{0}'")]
    MalformedResponse(&'static str),
    #[error("invalid endpoint path: {0}")]
    InvalidEndpoint(&'static str),
}

/// Read-only queries against the chain node.
///
/// Results are opaque JSON passed through to the caller unmodified; the
/// server does not interpret block or transaction contents.
#[async_trait]
pub trait ChainQuery: Send + Sync {
    /// Current block height of the ledger.
    async fn block_number(&self) -> Result<u64, ChainError>;

    /// Header of the block at the given height.
    async fn block_header(&self, block_number: &str) -> Result<Value, ChainError>;

    /// Transactions contained in the block at the given height.
    async fn block_transactions(&self, block_number: &str) -> Result<Value, ChainError>;

    /// Transaction details for the given hash.
    async fn transaction_info(&self, hash: &str) -> Result<Value, ChainError>;
}
