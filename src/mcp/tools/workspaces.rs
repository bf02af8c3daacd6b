//! Workspace tools. These are the only tools that touch the client's workspace cache.

use rmcp::{
    handler::server::wrapper::Parameters, model::CallToolResult, schemars::JsonSchema, tool,
    tool_router, ErrorData as McpError,
};
use serde::Deserialize;

use crate::mcp::{MessageResponse, ThinkPromptServer, WorkspaceListResponse};

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwitchWorkspaceRequest {
    #[schemars(description = "The UUID of the workspace to switch to")]
    pub workspace_id: String,
}

#[tool_router(router = workspace_tools, vis = "pub(crate)")]
impl ThinkPromptServer {
    #[tool(
        description = "List all workspaces the user belongs to. Returns workspace names, roles, and which is the current default."
    )]
    pub async fn list_workspaces(&self) -> Result<CallToolResult, McpError> {
        let workspaces = self
            .client
            .list_workspaces()
            .await
            .map_err(Self::api_err)?;

        Self::json(&WorkspaceListResponse {
            current_workspace_id: self.client.current_workspace_id(),
            workspaces,
        })
    }

    #[tool(description = "Get the currently active workspace for this session.")]
    pub async fn get_current_workspace(&self) -> Result<CallToolResult, McpError> {
        let workspace = self
            .client
            .current_workspace()
            .await
            .map_err(Self::api_err)?;

        match workspace {
            Some(workspace) => Self::json(&workspace),
            None => Self::json(&MessageResponse {
                message: "No workspace selected or available".to_string(),
            }),
        }
    }

    #[tool(
        description = "Switch to a different workspace. All subsequent API calls will use this workspace context."
    )]
    pub async fn switch_workspace(
        &self,
        params: Parameters<SwitchWorkspaceRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.workspace_id)?;

        let result = self
            .client
            .switch_workspace(id)
            .await
            .map_err(Self::api_err)?;
        tracing::info!(workspace_id = %id, "Switched workspace");

        Self::json(&result)
    }
}
