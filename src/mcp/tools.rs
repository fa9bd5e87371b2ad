//! Tool catalog for the XingHuo chain query server.
//!
//! The catalog is the single source of truth for both `tools/list` and
//! `tools/call`: each descriptor carries the `ToolKind` the dispatcher
//! executes, so a listed name is always dispatchable and vice versa.

use serde_json::{json, Value};

/// The four query operations this server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    BlockNumber,
    BlockHeader,
    BlockTransactions,
    TransactionInfo,
}

pub struct Tool {
    pub kind: ToolKind,
    pub name: &'static str,
    pub description: &'static str,
}

impl Tool {
    /// JSON Schema describing the tool's input, as advertised to clients.
    pub fn input_schema(&self) -> Value {
        match self.kind {
            ToolKind::BlockNumber => json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
            ToolKind::BlockHeader | ToolKind::BlockTransactions => json!({
                "type": "object",
                "properties": {
                    "blockNumber": {
                        "type": "string",
                        "description": "Block height to query"
                    }
                },
                "required": ["blockNumber"]
            }),
            ToolKind::TransactionInfo => json!({
                "type": "object",
                "properties": {
                    "hash": {
                        "type": "string",
                        "description": "Transaction hash to look up"
                    }
                },
                "required": ["hash"]
            }),
        }
    }
}

pub const CATALOG: &[Tool] = &[
    Tool {
        kind: ToolKind::BlockNumber,
        name: "get_block_number",
        description: "Get current block height",
    },
    Tool {
        kind: ToolKind::BlockHeader,
        name: "get_block_header",
        description: "Get the block header at a given height",
    },
    Tool {
        kind: ToolKind::BlockTransactions,
        name: "get_block_transactions",
        description: "List the transactions contained in a given block",
    },
    Tool {
        kind: ToolKind::TransactionInfo,
        name: "get_transaction_info",
        description: "Get transaction details by hash",
    },
];

/// Resolve a tool name to its kind. Lookup is exact and case-sensitive.
pub fn lookup(name: &str) -> Option<ToolKind> {
    CATALOG.iter().find(|t| t.name == name).map(|t| t.kind)
}

/// Render the catalog in the shape expected by `tools/list`.
pub fn list_json() -> Value {
    let tools: Vec<Value> = CATALOG
        .iter()
        .map(|t| {
            json!({
                "name": t.name,
                "description": t.description,
                "inputSchema": t.input_schema(),
            })
        })
        .collect();
    json!({ "tools": tools })
}
