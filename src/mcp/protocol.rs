// src/mcp/protocol.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
}

fn default_jsonrpc() -> String {
    "2.0".to_string()
}

impl Request {
    /// A request without an id is a notification and must not be answered.
    pub fn is_notification(&self) -> bool {
        self.id.is_null()
    }
}

impl Response {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(ErrorObject { code, message }),
        }
    }
}

// Standard JSON-RPC error codes
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_without_id_is_notification() {
        let req: Request =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"tools/list"}"#).unwrap();
        assert!(req.is_notification());
    }

    #[test]
    fn request_with_id_is_not_notification() {
        let req: Request =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":7,"method":"tools/list"}"#).unwrap();
        assert!(!req.is_notification());
        assert_eq!(req.id, json!(7));
    }

    #[test]
    fn success_response_omits_error_field() {
        let resp = Response::success(json!(1), json!({"ok": true}));
        let encoded = serde_json::to_value(&resp).unwrap();
        assert_eq!(encoded["result"]["ok"], json!(true));
        assert!(encoded.get("error").is_none());
    }

    #[test]
    fn error_response_carries_code_and_message() {
        let resp = Response::error(json!(2), error_codes::METHOD_NOT_FOUND, "nope".into());
        let encoded = serde_json::to_value(&resp).unwrap();
        assert!(encoded.get("result").is_none());
        assert_eq!(encoded["error"]["code"], json!(-32601));
        assert_eq!(encoded["error"]["message"], json!("nope"));
    }
}
