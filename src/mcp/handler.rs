//! # MCP Handler Module
//!
//! Implements the Model Context Protocol request cycle for the XingHuo
//! chain query server: `initialize`, `tools/list`, and `tools/call`.
//!
//! ## Supported Tools
//!
//! - `get_block_number` - Current block height of the ledger
//! - `get_block_header` - Block header at a given height
//! - `get_block_transactions` - Transactions contained in a given block
//! - `get_transaction_info` - Transaction details by hash

use crate::{
    mcp::{
        protocol::{error_codes, Request, Response},
        tools::{self, ToolKind},
    },
    utils, AppState,
};
use serde_json::json;
use tracing::info;

pub const SERVER_NAME: &str = "xinghuo-mcp-server";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// This is the main dispatcher for all incoming MCP requests.
pub async fn handle_mcp_request(req: Request, state: AppState) -> Option<Response> {
    info!("Handling MCP request for method: {}", req.method);

    if req.is_notification() {
        return None;
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&req),
        "tools/list" => handle_tools_list(&req),
        "tools/call" => handle_tool_call(req, state).await,
        _ => Response::error(
            req.id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", req.method),
        ),
    };

    Some(response)
}

fn handle_initialize(req: &Request) -> Response {
    let server_info = json!({
        "name": SERVER_NAME,
        "version": SERVER_VERSION
    });
    let capabilities = json!({ "tools": { "listChanged": false } });
    let instructions =
        "Read-only XingHuo blockchain queries: block height, block headers, block transactions, and transaction details.";

    Response::success(
        req.id.clone(),
        json!({
            "serverInfo": server_info,
            "protocolVersion": "2025-06-18",
            "capabilities": capabilities,
            "instructions": instructions
        }),
    )
}

/// Handles the 'tools/list' request by returning the static tool catalog.
fn handle_tools_list(req: &Request) -> Response {
    Response::success(req.id.clone(), tools::list_json())
}

/// Handles a 'tools/call' request by resolving the tool name through the
/// catalog and invoking the matching chain query.
async fn handle_tool_call(req: Request, state: AppState) -> Response {
    let params = match req.params.as_ref() {
        Some(p) => p,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'params' object".into(),
            )
        }
    };

    let tool_name = match params.get("name").and_then(|n| n.as_str()) {
        Some(name) => name,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'name' field in params".into(),
            )
        }
    };

    let kind = match tools::lookup(tool_name) {
        Some(kind) => kind,
        None => {
            return Response::error(
                req.id.clone(),
                error_codes::METHOD_NOT_FOUND,
                format!("Unknown tool: {}", tool_name),
            )
        }
    };

    let empty_args = json!({});
    let args = params.get("arguments").unwrap_or(&empty_args);
    let req_id = &req.id;

    let res: Result<Response, Response> = (async {
        let upstream = |e: crate::chain::ChainError| {
            Response::error(req_id.clone(), error_codes::INTERNAL_ERROR, e.to_string())
        };

        let result = match kind {
            // Any supplied arguments are ignored; the height query takes none.
            ToolKind::BlockNumber => {
                let height = state.chain.block_number().await.map_err(upstream)?;
                json!({ "height": height.to_string() })
            }
            ToolKind::BlockHeader => {
                let block_number = utils::get_required_arg::<String>(args, "blockNumber", req_id)?;
                let header = state
                    .chain
                    .block_header(&block_number)
                    .await
                    .map_err(upstream)?;
                json!({ "header": header })
            }
            ToolKind::BlockTransactions => {
                let block_number = utils::get_required_arg::<String>(args, "blockNumber", req_id)?;
                let transactions = state
                    .chain
                    .block_transactions(&block_number)
                    .await
                    .map_err(upstream)?;
                json!({ "transactions": transactions })
            }
            ToolKind::TransactionInfo => {
                let hash = utils::get_required_arg::<String>(args, "hash", req_id)?;
                let transaction = state
                    .chain
                    .transaction_info(&hash)
                    .await
                    .map_err(upstream)?;
                json!({ "transaction": transaction })
            }
        };

        Ok(Response::success(req_id.clone(), result))
    })
    .await;

    res.unwrap_or_else(|err_resp| err_resp)
}
