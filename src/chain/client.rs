//! HTTP client for the XingHuo/BIF node API.
//!
//! A thin wrapper over the node's REST endpoints. Every response arrives as
//! `{"error_code": N, "result": {...}}`; anything past that envelope is
//! handed back to the caller as opaque JSON.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{ChainError, ChainQuery};
use async_trait::async_trait;

#[derive(Clone)]
pub struct BifClient {
    http: Client,
    base_url: Url,
}

impl BifClient {
    pub fn new(node_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(node_url)?;
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    /// Issue a GET against a node endpoint and unwrap the response envelope,
    /// returning the `result` field.
    async fn get(&self, path: &'static str, query: &[(&str, &str)]) -> Result<Value, ChainError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|_| ChainError::InvalidEndpoint(path))?;
        debug!("node request: {} {:?}", url, query);

        let body: Value = self
            .http
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let code = body
            .get("error_code")
            .and_then(|c| c.as_i64())
            .ok_or(ChainError::MalformedResponse("error_code"))?;
        if code != 0 {
            let desc = body
                .get("error_desc")
                .and_then(|d| d.as_str())
                .unwrap_or("")
                .to_string();
            return Err(ChainError::Node { code, desc });
        }

        body.get("result")
            .cloned()
            .ok_or(ChainError::MalformedResponse("result"))
    }
}

#[async_trait]
impl ChainQuery for BifClient {
    async fn block_number(&self) -> Result<u64, ChainError> {
        let result = self.get("getLedger", &[]).await?;
        // The node reports the height as header.seq, numeric or string
        // depending on node version.
        let seq = &result["header"]["seq"];
        seq.as_u64()
            .or_else(|| seq.as_str().and_then(|s| s.parse().ok()))
            .ok_or(ChainError::MalformedResponse("header.seq"))
    }

    async fn block_header(&self, block_number: &str) -> Result<Value, ChainError> {
        let result = self.get("getLedger", &[("seq", block_number)]).await?;
        result
            .get("header")
            .cloned()
            .ok_or(ChainError::MalformedResponse("header"))
    }

    async fn block_transactions(&self, block_number: &str) -> Result<Value, ChainError> {
        let result = self
            .get("getTransactionHistory", &[("ledger_seq", block_number)])
            .await?;
        result
            .get("transactions")
            .cloned()
            .ok_or(ChainError::MalformedResponse("transactions"))
    }

    async fn transaction_info(&self, hash: &str) -> Result<Value, ChainError> {
        let result = self
            .get("getTransactionHistory", &[("hash", hash)])
            .await?;
        // A hash query still comes back as a one-element transaction list.
        match result.get("transactions").and_then(|t| t.as_array()) {
            Some(txs) if !txs.is_empty() => Ok(txs[0].clone()),
            _ => Err(ChainError::MalformedResponse("transactions")),
        }
    }
}
