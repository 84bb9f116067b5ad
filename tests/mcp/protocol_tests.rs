//! MCP protocol serialization tests

use serde_json::json;
use vault_search::mcp::protocol::*;

#[test]
fn test_parse_initialize_request() {
    let json = r#"{
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2024-11-05",
            "capabilities": {"tools": {}},
            "clientInfo": {"name": "test", "version": "1.0"}
        }
    }"#;

    let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.method, "initialize");
    assert_eq!(req.id, Some(json!(1)));

    let params: InitializeParams = serde_json::from_value(req.params.unwrap()).unwrap();
    assert_eq!(params.protocol_version.as_deref(), Some("2024-11-05"));
    assert_eq!(params.client_info.unwrap().name, "test");
}

#[test]
fn test_parse_notification_without_id() {
    let req: JsonRpcRequest =
        serde_json::from_str(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#).unwrap();
    assert!(req.id.is_none());
    assert!(req.params.is_none());
}

#[test]
fn test_tool_call_params_default_arguments() {
    let params: ToolCallParams = serde_json::from_value(json!({"name": "list_documents"})).unwrap();
    assert_eq!(params.name, "list_documents");
    assert!(params.arguments.is_null());
}

#[test]
fn test_success_response_omits_error() {
    let response = JsonRpcResponse::success(Some(json!(7)), json!({"ok": true}));
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["jsonrpc"], "2.0");
    assert_eq!(value["id"], 7);
    assert_eq!(value["result"]["ok"], true);
    assert!(value.get("error").is_none());
}

#[test]
fn test_error_response_shape() {
    let response = JsonRpcResponse::error(None, PARSE_ERROR, "bad json");
    let value = serde_json::to_value(&response).unwrap();

    assert!(value["id"].is_null());
    assert_eq!(value["error"]["code"], -32700);
    assert_eq!(value["error"]["message"], "bad json");
    assert!(value.get("result").is_none());
}

#[test]
fn test_tool_result_content_is_tagged() {
    let result = ToolResult {
        content: vec![ContentBlock::Text {
            text: "hello".to_string(),
        }],
    };
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value, json!({"content": [{"type": "text", "text": "hello"}]}));
}

#[test]
fn test_tool_schema_uses_camel_case() {
    let schema = ToolSchema {
        name: "t".to_string(),
        description: "d".to_string(),
        input_schema: json!({"type": "object"}),
    };
    let value = serde_json::to_value(&schema).unwrap();
    assert!(value.get("inputSchema").is_some());
}

#[test]
fn test_error_code_constants() {
    assert_eq!(INVALID_REQUEST, -32600);
    assert_eq!(METHOD_NOT_FOUND, -32601);
    assert_eq!(INVALID_PARAMS, -32602);
    assert_eq!(INTERNAL_ERROR, -32603);
    assert_eq!(DOCUMENT_NOT_FOUND, -32001);
    assert_eq!(SEARCH_FAILED, -32002);
}
