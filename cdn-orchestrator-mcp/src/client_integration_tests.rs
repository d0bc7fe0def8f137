use super::test_mocks::*;
use super::*;

use std::sync::Arc;

use rmcp::model::CallToolRequestParams;
use rmcp::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Spawn a MCP server and connect a client via in-memory duplex transport.
///
/// Returns `(client, server_handle)`. The client derefs to `Peer<RoleClient>`
/// so you can call `list_all_tools()`, `call_tool()`, `peer_info()`, etc.
async fn spawn_client_server(
    provider: Arc<MockCdnProvider>,
) -> (
    rmcp::service::RunningService<rmcp::RoleClient, ()>,
    tokio::task::JoinHandle<anyhow::Result<()>>,
) {
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let server = build_server(provider);

    let server_handle = tokio::spawn(async move {
        server.serve(server_transport).await?.waiting().await?;
        anyhow::Ok(())
    });

    let client = ().serve(client_transport).await.unwrap();
    (client, server_handle)
}

async fn spawn_default() -> (
    rmcp::service::RunningService<rmcp::RoleClient, ()>,
    tokio::task::JoinHandle<anyhow::Result<()>>,
) {
    spawn_client_server(Arc::new(MockCdnProvider::default())).await
}

fn call_params(name: &str, args: &serde_json::Value) -> CallToolRequestParams {
    CallToolRequestParams {
        meta: None,
        name: name.to_string().into(),
        arguments: args.as_object().cloned(),
        task: None,
    }
}

fn extract_text(result: &rmcp::model::CallToolResult) -> &str {
    result
        .content
        .first()
        .and_then(|c| c.raw.as_text())
        .map(|t| t.text.as_str())
        .expect("expected text content in result")
}

// ===========================================================================
// Scenario 1: initialize handshake
// ===========================================================================

#[tokio::test]
async fn client_connects_and_receives_server_info() -> anyhow::Result<()> {
    let (client, server_handle) = spawn_default().await;

    let server_info = client
        .peer_info()
        .expect("server info should be set after handshake");

    assert_eq!(server_info.protocol_version, ProtocolVersion::LATEST);
    assert!(
        server_info.capabilities.tools.is_some(),
        "server should advertise tool capability"
    );

    let instructions = server_info.instructions.as_deref().unwrap_or("");
    assert!(instructions.contains("setup_cdn_with_text"));

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

// ===========================================================================
// Scenario 2: tools/list
// ===========================================================================

const EXPECTED_TOOL_NAMES: &[&str] = &[
    "add_cdn_domain",
    "delete_cdn_domain",
    "modify_cdn_source",
    "set_cdn_source_port",
    "set_cdn_protocol",
    "set_cdn_cache",
    "set_cdn_https",
    "set_cdn_headers",
    "setup_cdn_with_text",
];

#[tokio::test]
async fn tools_list_returns_all_nine_tools() -> anyhow::Result<()> {
    let (client, server_handle) = spawn_default().await;

    let tools = client.list_all_tools().await?;

    assert_eq!(tools.len(), EXPECTED_TOOL_NAMES.len());

    let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
    for expected in EXPECTED_TOOL_NAMES {
        assert!(names.contains(expected), "missing tool: {expected}");
    }

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn each_tool_has_description_and_required_domain() -> anyhow::Result<()> {
    let (client, server_handle) = spawn_default().await;

    let tools = client.list_all_tools().await?;

    for tool in &tools {
        assert!(
            tool.description.is_some(),
            "tool '{}' missing description",
            tool.name
        );
        assert_eq!(
            tool.input_schema.get("type").and_then(|v| v.as_str()),
            Some("object"),
            "tool '{}' input_schema type must be 'object'",
            tool.name
        );

        let required = tool
            .input_schema
            .get("required")
            .and_then(|v| v.as_array())
            .expect("every tool has required fields");
        let key = if tool.name == "setup_cdn_with_text" {
            "text"
        } else {
            "domain_name"
        };
        assert!(
            required.iter().any(|v| v == key),
            "tool '{}' must require {key}",
            tool.name
        );
    }

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

// ===========================================================================
// Scenario 3: tools/call
// ===========================================================================

#[tokio::test]
async fn call_add_cdn_domain_with_mixed_sources() -> anyhow::Result<()> {
    let provider = Arc::new(MockCdnProvider::default());
    let (client, server_handle) = spawn_client_server(Arc::clone(&provider)).await;

    let result = client
        .call_tool(call_params(
            "add_cdn_domain",
            &serde_json::json!({
                "domain_name": "cdn.example.com",
                "sources": ["1.2.3.4:80", {"type": "domain", "content": "origin.example.com", "port": 8080}],
                "cdn_type": "video"
            }),
        ))
        .await?;

    assert_ne!(result.is_error, Some(true));
    assert!(extract_text(&result).contains("cdn.example.com"));

    let added = provider.added().await;
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].sources.len(), 2);
    assert_eq!(added[0].sources[1].port, 8080);

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn call_set_cdn_headers_with_list_of_strings() -> anyhow::Result<()> {
    let provider = Arc::new(MockCdnProvider::default());
    let (client, server_handle) = spawn_client_server(Arc::clone(&provider)).await;

    let result = client
        .call_tool(call_params(
            "set_cdn_headers",
            &serde_json::json!({
                "domain_name": "cdn.example.com",
                "headers": ["Content-Type: text/html", "X-Trace: a:b"]
            }),
        ))
        .await?;

    assert_ne!(result.is_error, Some(true));
    let batches = provider.batches().await;
    let args = &batches[0].functions[0].function_args;
    assert_eq!(args.len(), 4);
    assert_eq!(args[3].arg_value, "a:b");

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn call_setup_cdn_with_text_returns_summary() -> anyhow::Result<()> {
    let provider = Arc::new(MockCdnProvider::default());
    let (client, server_handle) = spawn_client_server(Arc::clone(&provider)).await;

    let result = client
        .call_tool(call_params(
            "setup_cdn_with_text",
            &serde_json::json!({
                "text": "帮我添加一个加速域名\n加速类型为 大文件下载\nmygslb04.xiangyuncdn.com\n源站类型，ipaddr\n源站的IP地址 211.131.56.91\n回源端口 81\n设置图片缓存1小时"
            }),
        ))
        .await?;

    assert_ne!(result.is_error, Some(true));
    assert!(extract_text(&result).contains("mygslb04.xiangyuncdn.com"));

    let added = provider.added().await;
    assert_eq!(added[0].sources[0].content, "211.131.56.91");
    assert_eq!(added[0].sources[0].port, 81);
    assert_eq!(provider.batches().await.len(), 1);

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

// ===========================================================================
// Scenario 4: error handling
// ===========================================================================

#[tokio::test]
async fn call_nonexistent_tool_returns_error() -> anyhow::Result<()> {
    let (client, server_handle) = spawn_default().await;

    let result = client
        .call_tool(call_params("nonexistent_tool", &serde_json::json!({})))
        .await;

    assert!(result.is_err(), "calling nonexistent tool should fail");
    let err = result.unwrap_err().to_string();
    assert!(
        err.contains("tool not found"),
        "error should mention 'tool not found', got: {err}"
    );

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn call_tool_with_missing_required_params_returns_error() -> anyhow::Result<()> {
    let (client, server_handle) = spawn_default().await;

    let result = client
        .call_tool(call_params(
            "add_cdn_domain",
            &serde_json::json!({"domain_name": "cdn.example.com"}),
        ))
        .await;

    assert!(result.is_err(), "missing sources should fail");

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn call_with_malformed_shorthand_returns_invalid_params() -> anyhow::Result<()> {
    let provider = Arc::new(MockCdnProvider::default());
    let (client, server_handle) = spawn_client_server(Arc::clone(&provider)).await;

    let result = client
        .call_tool(call_params(
            "add_cdn_domain",
            &serde_json::json!({"domain_name": "cdn.example.com", "sources": "1.2.3.4:http"}),
        ))
        .await;

    assert!(result.is_err(), "malformed origin should fail");
    let err = result.unwrap_err().to_string();
    assert!(err.contains("Invalid origin format"), "got: {err}");
    assert_eq!(provider.call_count().await, 0);

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn call_with_provider_failure_returns_provider_message() -> anyhow::Result<()> {
    let provider = Arc::new(MockCdnProvider::default());
    provider.set_error(Some(quota_exceeded())).await;
    let (client, server_handle) = spawn_client_server(Arc::clone(&provider)).await;

    let result = client
        .call_tool(call_params(
            "set_cdn_protocol",
            &serde_json::json!({"domain_name": "cdn.example.com", "protocol": "https"}),
        ))
        .await;

    assert!(result.is_err(), "provider failure should return error");
    let err = result.unwrap_err().to_string();
    assert!(err.contains("Quota exceeded"), "got: {err}");

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn call_setup_without_domain_is_flagged_not_failed() -> anyhow::Result<()> {
    let provider = Arc::new(MockCdnProvider::default());
    let (client, server_handle) = spawn_client_server(Arc::clone(&provider)).await;

    let result = client
        .call_tool(call_params(
            "setup_cdn_with_text",
            &serde_json::json!({"text": "设置图片缓存1小时"}),
        ))
        .await?;

    assert_eq!(result.is_error, Some(true));
    assert!(extract_text(&result).contains("accelerated domain"));
    assert_eq!(provider.call_count().await, 0);

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}
