//! End-to-end MCP message handling

use crate::common::{create_test_services, store_document};
use serde_json::{json, Value};
use vault_search::mcp::protocol::*;
use vault_search::mcp::McpServer;

async fn call(server: &McpServer, message: Value) -> JsonRpcResponse {
    server.handle_message(&message.to_string()).await
}

fn tool_text(response: &JsonRpcResponse) -> String {
    let result = response.result.as_ref().expect("tool call should succeed");
    result["content"][0]["text"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_initialize_handshake() {
    let (services, _temp) = create_test_services();
    let server = McpServer::new(services);

    let response = call(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "test", "version": "1.0"}
            }
        }),
    )
    .await;

    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "vault-search-mcp");
    assert_eq!(result["capabilities"]["tools"]["listChanged"], false);

    for method in ["initialized", "notifications/initialized"] {
        let response = call(&server, json!({"jsonrpc": "2.0", "method": method})).await;
        assert!(response.is_empty(), "{method} should not be answered");
    }
    assert!(server.handlers().is_initialized());
}

#[tokio::test]
async fn test_tools_list() {
    let (services, _temp) = create_test_services();
    let server = McpServer::new(services);

    let response = call(&server, json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})).await;

    let tools = response.result.unwrap()["tools"].clone();
    let names: Vec<&str> = tools
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "get_document",
            "get_server_info",
            "list_documents",
            "search_documents"
        ]
    );
}

#[tokio::test]
async fn test_search_documents_tool() {
    let (services, _temp) = create_test_services();
    store_document(
        &services,
        "Q3-report.txt",
        "Revenue grew 12% in Q3 driven by enterprise sales. Sales teams exceeded targets.",
    );
    let server = McpServer::new(services);

    let response = call(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {"name": "search_documents", "arguments": {"query": "sales revenue", "limit": 10}}
        }),
    )
    .await;

    let text = tool_text(&response);
    assert!(text.contains("Found 1 results"));
    assert!(text.contains("Q3-report.txt (score: 3)"));
}

#[tokio::test]
async fn test_get_document_unknown_id() {
    let (services, _temp) = create_test_services();
    let server = McpServer::new(services);

    let response = call(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "tools/call",
            "params": {"name": "get_document", "arguments": {"id": "nope"}}
        }),
    )
    .await;

    let error = response.error.unwrap();
    assert_eq!(error.code, DOCUMENT_NOT_FOUND);
    assert_eq!(response.id, Some(json!(4)));
}

#[tokio::test]
async fn test_get_and_list_documents_tools() {
    let (services, _temp) = create_test_services();
    let doc = store_document(&services, "plan.md", "Spring launch plan");
    let server = McpServer::new(services);

    let response = call(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "tools/call",
            "params": {"name": "get_document", "arguments": {"id": doc.id}}
        }),
    )
    .await;
    assert!(tool_text(&response).contains("Spring launch plan"));

    let response = call(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 6,
            "method": "tools/call",
            "params": {"name": "list_documents"}
        }),
    )
    .await;
    assert!(tool_text(&response).contains("plan.md"));
}

#[tokio::test]
async fn test_unknown_tool_and_method() {
    let (services, _temp) = create_test_services();
    let server = McpServer::new(services);

    let response = call(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": {"name": "index_repository", "arguments": {}}
        }),
    )
    .await;
    assert_eq!(response.error.unwrap().code, INVALID_PARAMS);

    let response = call(&server, json!({"jsonrpc": "2.0", "id": 8, "method": "resources/list"})).await;
    assert_eq!(response.error.unwrap().code, METHOD_NOT_FOUND);
}

#[tokio::test]
async fn test_tools_call_without_params() {
    let (services, _temp) = create_test_services();
    let server = McpServer::new(services);

    let response = call(&server, json!({"jsonrpc": "2.0", "id": 9, "method": "tools/call"})).await;
    assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
}

#[tokio::test]
async fn test_parse_error_has_null_id() {
    let (services, _temp) = create_test_services();
    let server = McpServer::new(services);

    let response = server.handle_message("{not json").await;

    assert!(response.id.is_none());
    assert_eq!(response.error.unwrap().code, PARSE_ERROR);
}

#[tokio::test]
async fn test_ping() {
    let (services, _temp) = create_test_services();
    let server = McpServer::new(services);

    let response = call(&server, json!({"jsonrpc": "2.0", "id": "p1", "method": "ping"})).await;
    assert_eq!(response.id, Some(json!("p1")));
    assert_eq!(response.result, Some(json!({})));
}
