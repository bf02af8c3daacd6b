//! MCP server exposing the ThinkPrompt API as tools and resources.
//!
//! Every tool decodes its arguments into a typed request, makes one API call and returns
//! the result as pretty-printed JSON text. Failures never escape a tool call: they come
//! back as an error result whose text starts with `Error: `.

pub mod resources;
mod tools;
mod types;

pub use tools::*;
pub use types::*;

use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRouter},
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, ListResourcesResult,
        ListToolsResult, PaginatedRequestParam, ReadResourceRequestParam, ReadResourceResult,
        ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};
use serde::Serialize;
use uuid::Uuid;

use crate::client::{ApiClient, ApiError};

#[derive(Clone)]
pub struct ThinkPromptServer {
    client: ApiClient,
    tool_router: ToolRouter<Self>,
}

impl ThinkPromptServer {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            tool_router: tools::router(),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// The advertised tool catalog.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tool_router.has_route(name)
    }

    fn parse_uuid(s: &str) -> Result<Uuid, McpError> {
        Uuid::parse_str(s)
            .map_err(|e| McpError::invalid_params(format!("Invalid UUID: {}", e), None))
    }

    fn parse_optional_uuid(s: Option<&str>) -> Result<Option<Uuid>, McpError> {
        s.map(Self::parse_uuid).transpose()
    }

    fn api_err(e: ApiError) -> McpError {
        McpError::internal_error(e.to_string(), None)
    }

    fn json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Success result for a call the API answered without a body.
    fn absent() -> Result<CallToolResult, McpError> {
        Self::json(&serde_json::Value::Null)
    }
}

/// Error result for a tool name that is not in the catalog.
pub fn unknown_tool(name: &str) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!(
        "Error: Unknown tool: {}",
        name
    ))])
}

/// Convert a failed tool call into an error result.
pub fn error_result(error: &McpError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {}", error.message))])
}

impl ServerHandler for ThinkPromptServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "thinkprompt-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            instructions: Some(INSTRUCTIONS.into()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let name = request.name.to_string();
        if !self.has_tool(&name) {
            tracing::warn!(tool = %name, "Unknown tool");
            return Ok(unknown_tool(&name));
        }

        tracing::debug!(tool = %name, "Calling tool");
        let call = ToolCallContext::new(self, request, context);
        match self.tool_router.call(call).await {
            Ok(result) => Ok(result),
            Err(e) => {
                tracing::warn!(tool = %name, error = %e.message, "Tool call failed");
                Ok(error_result(&e))
            }
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(
            self.resource_catalog().await,
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let contents = self.read_resource_contents(&request.uri).await?;
        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}

const INSTRUCTIONS: &str = r#"ThinkPrompt gives you access to prompts, templates, projects, features, tasks,
workflows, QA test sessions, code quality snapshots and documents.

WORKSPACES:
Every call is scoped to a workspace. Use list_workspaces to see the ones available and
switch_workspace to change the scope for all subsequent calls.

PROMPTS & TEMPLATES:
- list_prompts / get_prompt / get_prompt_variables to find a prompt and its {{variables}}
- list_templates / get_template for example prompts and style guides

PROJECT MANAGEMENT:
- Projects contain features (epics and stories) and tasks
- Tasks are addressed by UUID or by their code, e.g. get_task with kuerzel "TP-001"
- Setting a feature to ready_for_review checks for open tasks; pass force=true to skip

TESTING:
1. start_test_session - returns a session ID
2. record_metric / report_issue while you test
3. end_test_session - the server computes the summary

QUALITY:
1. start_quality_analysis - returns a snapshot ID
2. record_quality_metric / report_quality_issue / bulk_report_quality_issues
3. complete_quality_analysis - the server computes the scores

Prompts, templates, workflows, test sessions and test issues are also readable as
resources (prompt://, template://, workflow://, test://sessions/, test://issues/)."#;

pub async fn run_stdio_server(client: ApiClient) -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!("Starting MCP server via stdio");

    let service = ThinkPromptServer::new(client);
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> ThinkPromptServer {
        ThinkPromptServer::new(ApiClient::new("http://localhost:3000/api/v1", "key"))
    }

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .first()
            .and_then(|c| c.as_text())
            .map(|t| t.text.clone())
            .unwrap_or_default()
    }

    #[test]
    fn test_server_info() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, "thinkprompt-mcp");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.instructions.unwrap().contains("switch_workspace"));
    }

    #[test]
    fn test_unknown_tool_result() {
        let result = unknown_tool("make_coffee");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: Unknown tool: make_coffee");
    }

    #[test]
    fn test_error_result_prefixes_message() {
        let result = error_result(&McpError::invalid_params("Invalid UUID: bad", None));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: Invalid UUID: bad");
    }

    #[test]
    fn test_parse_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(ThinkPromptServer::parse_uuid(&id.to_string()).unwrap(), id);

        let err = ThinkPromptServer::parse_uuid("not-a-uuid").unwrap_err();
        assert!(err.message.starts_with("Invalid UUID"));
    }

    #[test]
    fn test_parse_optional_uuid() {
        assert_eq!(ThinkPromptServer::parse_optional_uuid(None).unwrap(), None);
        assert!(ThinkPromptServer::parse_optional_uuid(Some("nope")).is_err());
    }

    #[test]
    fn test_catalog_has_route_for_every_tool() {
        let server = server();
        let tools = server.tools();
        assert!(!tools.is_empty());
        for tool in &tools {
            assert!(server.has_tool(&tool.name));
        }
        assert!(!server.has_tool("make_coffee"));
    }
}
