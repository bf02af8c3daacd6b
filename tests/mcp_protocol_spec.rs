//! MCP protocol integration tests.
//!
//! These tests spawn the actual `thinkprompt-mcp` process and communicate via
//! JSON-RPC over stdio, testing the complete MCP protocol flow.
//!
//! The API URL points at a closed local port, so every call that reaches the
//! ThinkPrompt API fails fast with a connection error.
//!
//! The rmcp library uses line-delimited JSON (each message is one line):
//! ```
//! {"jsonrpc":"2.0","id":1,"method":"initialize",...}\n
//! {"jsonrpc":"2.0","id":1,"result":{...}}\n
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, Stdio};

const UNREACHABLE_API: &str = "http://127.0.0.1:9/api/v1";

/// JSON-RPC 2.0 request
#[derive(Debug, Serialize)]
struct JsonRpcRequest {
    jsonrpc: &'static str,
    id: u64,
    method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Value>,
}

/// JSON-RPC 2.0 response
#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: Option<u64>,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct JsonRpcError {
    code: i64,
    message: String,
    data: Option<Value>,
}

/// MCP test client that spawns and communicates with the server
struct McpTestClient {
    child: Child,
    request_id: u64,
    reader: BufReader<std::process::ChildStdout>,
}

impl McpTestClient {
    fn command() -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_thinkprompt-mcp"));
        command
            .env("THINKPROMPT_API_URL", UNREACHABLE_API)
            .env("RUST_LOG", "off");
        command
    }

    /// Spawn a new MCP server process talking to an unreachable API
    fn spawn() -> Self {
        let mut child = Self::command()
            .env("THINKPROMPT_API_KEY", "test-key")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to spawn thinkprompt-mcp");

        let stdout = child.stdout.take().expect("Failed to get stdout");
        let reader = BufReader::new(stdout);

        Self {
            child,
            request_id: 0,
            reader,
        }
    }

    /// Send a message as line-delimited JSON
    fn send_message(&mut self, content: &str) {
        let stdin = self.child.stdin.as_mut().expect("Failed to get stdin");
        writeln!(stdin, "{}", content).expect("Failed to write message");
        stdin.flush().expect("Failed to flush stdin");
    }

    /// Read a message as line-delimited JSON
    fn read_message(&mut self) -> String {
        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .expect("Failed to read line");
        line.trim().to_string()
    }

    /// Send a JSON-RPC request and get the response
    fn request(&mut self, method: &str, params: Option<Value>) -> JsonRpcResponse {
        self.request_id += 1;
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.request_id,
            method: method.to_string(),
            params,
        };

        let request_json = serde_json::to_string(&request).expect("Failed to serialize request");
        self.send_message(&request_json);

        let response_json = self.read_message();
        serde_json::from_str(&response_json).expect("Failed to parse response")
    }

    /// Send initialize request and initialized notification (required first messages)
    fn initialize(&mut self) -> JsonRpcResponse {
        let response = self.request(
            "initialize",
            Some(json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {
                    "name": "test-client",
                    "version": "1.0.0"
                }
            })),
        );

        let notification = json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized"
        });
        self.send_message(&notification.to_string());

        response
    }

    fn list_tools(&mut self) -> JsonRpcResponse {
        self.request("tools/list", None)
    }

    fn call_tool(&mut self, name: &str, arguments: Value) -> JsonRpcResponse {
        self.request(
            "tools/call",
            Some(json!({
                "name": name,
                "arguments": arguments
            })),
        )
    }

    /// Call a tool and return its single text block, asserting it failed
    fn call_tool_expecting_error(&mut self, name: &str, arguments: Value) -> String {
        let response = self.call_tool(name, arguments);
        assert!(
            response.error.is_none(),
            "Tool failures are results, not protocol errors"
        );

        let result = response.result.expect("Expected result");
        assert_eq!(result["isError"], true, "Expected isError: {}", result);
        result["content"][0]["text"]
            .as_str()
            .expect("Expected text content")
            .to_string()
    }
}

impl Drop for McpTestClient {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

// ============================================================
// Protocol Tests
// ============================================================

mod protocol {
    use super::*;

    #[test]
    fn initialize_returns_server_info() {
        let mut client = McpTestClient::spawn();
        let response = client.initialize();

        assert!(response.error.is_none(), "Expected success, got error");
        let result = response.result.expect("Expected result");

        assert_eq!(result["serverInfo"]["name"], "thinkprompt-mcp");
        assert!(result["capabilities"].get("tools").is_some());
        assert!(result["capabilities"].get("resources").is_some());
        assert!(result["instructions"]
            .as_str()
            .is_some_and(|s| s.contains("list_workspaces")));
    }

    #[test]
    fn tools_list_returns_all_tools() {
        let mut client = McpTestClient::spawn();
        client.initialize();

        let response = client.list_tools();
        assert!(response.error.is_none(), "Expected success, got error");

        let result = response.result.expect("Expected result");
        let tools = result["tools"].as_array().expect("Tools should be array");

        assert_eq!(tools.len(), 94, "Unexpected tool count");

        for tool in tools {
            let name = tool["name"].as_str().expect("Tool should have a name");
            assert!(
                tool["description"].as_str().is_some_and(|d| !d.is_empty()),
                "{} should have a description",
                name
            );
            assert_eq!(
                tool["inputSchema"]["type"], "object",
                "{} should have an object input schema",
                name
            );
        }
    }

    #[test]
    fn tool_names_cover_every_family() {
        let mut client = McpTestClient::spawn();
        client.initialize();

        let result = client.list_tools().result.expect("Expected result");
        let names: Vec<&str> = result["tools"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|t| t["name"].as_str())
            .collect();

        for expected in [
            "list_prompts",
            "switch_workspace",
            "get_project",
            "get_task",
            "execute_workflow",
            "start_test_session",
            "start_quality_analysis",
            "restore_document_version",
        ] {
            assert!(names.contains(&expected), "Missing tool {}", expected);
        }
    }

    #[test]
    fn get_task_schema_accepts_id_or_kuerzel() {
        let mut client = McpTestClient::spawn();
        client.initialize();

        let result = client.list_tools().result.expect("Expected result");
        let get_task = result["tools"]
            .as_array()
            .unwrap()
            .iter()
            .find(|t| t["name"] == "get_task")
            .expect("get_task should be listed");

        let properties = &get_task["inputSchema"]["properties"];
        assert!(properties.get("id").is_some());
        assert!(properties.get("kuerzel").is_some());
    }

    #[test]
    fn missing_api_key_exits_with_error() {
        let output = McpTestClient::command()
            .env_remove("THINKPROMPT_API_KEY")
            .stdin(Stdio::null())
            .output()
            .expect("Failed to run thinkprompt-mcp");

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("THINKPROMPT_API_KEY"), "stderr: {}", stderr);
        assert!(output.stdout.is_empty());
    }
}

// ============================================================
// Tool Call Tests
// ============================================================

mod tool_calls {
    use super::*;

    #[test]
    fn unknown_tool_returns_error_result() {
        let mut client = McpTestClient::spawn();
        client.initialize();

        let text = client.call_tool_expecting_error("archive_everything", json!({}));

        assert_eq!(text, "Error: Unknown tool: archive_everything");
    }

    #[test]
    fn invalid_uuid_returns_error_result() {
        let mut client = McpTestClient::spawn();
        client.initialize();

        let text = client.call_tool_expecting_error("get_prompt", json!({"id": "nope"}));

        assert!(text.starts_with("Error: Invalid UUID"), "got: {}", text);
    }

    #[test]
    fn missing_arguments_return_error_result() {
        let mut client = McpTestClient::spawn();
        client.initialize();

        let text = client.call_tool_expecting_error("create_prompt", json!({"title": "x"}));

        assert!(text.starts_with("Error: "), "got: {}", text);
    }

    #[test]
    fn get_task_without_identifiers_returns_error_result() {
        let mut client = McpTestClient::spawn();
        client.initialize();

        let text = client.call_tool_expecting_error("get_task", json!({}));

        assert_eq!(text, "Error: Either id or kuerzel must be provided");
    }

    #[test]
    fn unreachable_api_returns_error_result() {
        let mut client = McpTestClient::spawn();
        client.initialize();

        let text = client.call_tool_expecting_error("list_prompts", json!({}));

        assert!(
            text.starts_with("Error: HTTP request failed"),
            "got: {}",
            text
        );
    }

    #[test]
    fn server_keeps_serving_after_a_failed_call() {
        let mut client = McpTestClient::spawn();
        client.initialize();

        client.call_tool_expecting_error("list_projects", json!({}));
        let response = client.list_tools();

        assert!(response.error.is_none());
    }
}

// ============================================================
// Resource Tests
// ============================================================

mod resources {
    use super::*;

    #[test]
    fn catalog_is_empty_when_the_api_is_down() {
        let mut client = McpTestClient::spawn();
        client.initialize();

        let response = client.request("resources/list", None);

        assert!(response.error.is_none(), "Expected success, got error");
        let result = response.result.expect("Expected result");
        assert_eq!(result["resources"], json!([]));
    }

    #[test]
    fn reading_an_unknown_uri_is_a_protocol_error() {
        let mut client = McpTestClient::spawn();
        client.initialize();

        let response = client.request("resources/read", Some(json!({"uri": "feature://abc"})));

        let error = response.error.expect("Expected error");
        assert_eq!(error.message, "Unknown resource URI: feature://abc");
        assert!(response.result.is_none());
    }

    #[test]
    fn reading_a_known_uri_surfaces_api_failures() {
        let mut client = McpTestClient::spawn();
        client.initialize();

        let response = client.request(
            "resources/read",
            Some(json!({"uri": "prompt://0b6a4c1e-5d3f-4e2a-9c8b-7a6f5e4d3c2b"})),
        );

        let error = response.error.expect("Expected error");
        assert!(error.message.starts_with("HTTP request failed"));
    }
}
