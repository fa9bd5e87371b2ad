//! HTTP-level tests for `BifClient` against a mock node.

use mockito::mock;
use serde_json::json;

use xinghuo_mcp_server::chain::{BifClient, ChainError, ChainQuery};

fn client() -> BifClient {
    BifClient::new(&mockito::server_url()).unwrap()
}

#[tokio::test]
async fn block_number_reads_header_seq() {
    let _m = mock("GET", "/getLedger")
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error_code": 0,
                "result": { "header": { "seq": 3523018, "hash": "ab12" } }
            })
            .to_string(),
        )
        .create();

    let height = client().block_number().await.unwrap();
    assert_eq!(height, 3523018);
}

#[tokio::test]
async fn block_number_accepts_string_seq() {
    let _m = mock("GET", "/getLedger")
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error_code": 0,
                "result": { "header": { "seq": "99" } }
            })
            .to_string(),
        )
        .create();

    assert_eq!(client().block_number().await.unwrap(), 99);
}

#[tokio::test]
async fn block_header_queries_by_seq() {
    let _m = mock("GET", "/getLedger?seq=100")
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error_code": 0,
                "result": { "header": { "seq": 100, "tx_count": 2 } }
            })
            .to_string(),
        )
        .create();

    let header = client().block_header("100").await.unwrap();
    assert_eq!(header["seq"], json!(100));
    assert_eq!(header["tx_count"], json!(2));
}

#[tokio::test]
async fn block_transactions_queries_by_ledger_seq() {
    let _m = mock("GET", "/getTransactionHistory?ledger_seq=42")
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error_code": 0,
                "result": {
                    "total_count": 1,
                    "transactions": [{ "hash": "tx-a" }]
                }
            })
            .to_string(),
        )
        .create();

    let txs = client().block_transactions("42").await.unwrap();
    assert_eq!(txs, json!([{ "hash": "tx-a" }]));
}

#[tokio::test]
async fn transaction_info_unwraps_the_single_entry() {
    let _m = mock("GET", "/getTransactionHistory?hash=0xbeef")
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error_code": 0,
                "result": {
                    "total_count": 1,
                    "transactions": [{ "hash": "0xbeef", "ledger_seq": 9 }]
                }
            })
            .to_string(),
        )
        .create();

    let tx = client().transaction_info("0xbeef").await.unwrap();
    assert_eq!(tx["hash"], json!("0xbeef"));
    assert_eq!(tx["ledger_seq"], json!(9));
}

#[tokio::test]
async fn nonzero_error_code_surfaces_as_node_error() {
    let _m = mock("GET", "/getLedger?seq=999999999")
        .with_header("content-type", "application/json")
        .with_body(
            json!({ "error_code": 4, "error_desc": "ledger not exist" }).to_string(),
        )
        .create();

    let err = client().block_header("999999999").await.unwrap_err();
    match err {
        ChainError::Node { code, desc } => {
            assert_eq!(code, 4);
            assert_eq!(desc, "ledger not exist");
        }
        other => panic!("expected node error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_envelope_is_a_malformed_response() {
    let _m = mock("GET", "/getTransactionHistory?hash=0xnone")
        .with_header("content-type", "application/json")
        .with_body(json!({ "error_code": 0, "result": {} }).to_string())
        .create();

    let err = client().transaction_info("0xnone").await.unwrap_err();
    assert!(matches!(err, ChainError::MalformedResponse(_)));
}
