//! Workflow tools.

use rmcp::{
    handler::server::wrapper::Parameters, model::CallToolResult, schemars::JsonSchema, tool,
    tool_router, ErrorData as McpError,
};
use serde::Deserialize;

use crate::mcp::{DeletedResponse, ThinkPromptServer};
use crate::models::*;

// ============================================================
// Request Types
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct WorkflowIdRequest {
    #[schemars(description = "The UUID of the workflow")]
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateWorkflowRequest {
    #[schemars(description = "The UUID of the workflow to update")]
    pub id: String,
    #[serde(flatten)]
    pub changes: UpdateWorkflowInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ExecuteWorkflowRequest {
    #[schemars(description = "The UUID of the workflow to execute")]
    pub id: String,
    #[serde(flatten)]
    pub input: ExecuteWorkflowInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowExecutionsRequest {
    #[schemars(description = "The UUID of the workflow")]
    pub workflow_id: String,
    #[serde(flatten)]
    pub page: PageParams,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllWorkflowExecutionsRequest {
    #[schemars(description = "Only show executions of this workflow")]
    pub workflow_id: Option<String>,
    #[serde(flatten)]
    pub page: PageParams,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowExecutionIdRequest {
    #[schemars(description = "The UUID of the execution")]
    pub execution_id: String,
}

#[tool_router(router = workflow_tools, vis = "pub(crate)")]
impl ThinkPromptServer {
    #[tool(
        description = "List all workflows. Workflows combine prompts, templates, and other resources into reusable automation sequences."
    )]
    pub async fn list_workflows(
        &self,
        params: Parameters<ListWorkflowsParams>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;

        let workflows = self
            .client
            .list_workflows(&req)
            .await
            .map_err(Self::api_err)?;

        Self::json(&workflows)
    }

    #[tool(
        description = "Get detailed information about a workflow, including its resources and execution steps."
    )]
    pub async fn get_workflow(
        &self,
        params: Parameters<WorkflowIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        let workflow = self.client.get_workflow(id).await.map_err(Self::api_err)?;

        Self::json(&workflow)
    }

    #[tool(
        description = "Create a new workflow that combines prompts, templates, tasks, and features into an automated sequence."
    )]
    pub async fn create_workflow(
        &self,
        params: Parameters<CreateWorkflowInput>,
    ) -> Result<CallToolResult, McpError> {
        let workflow = self
            .client
            .create_workflow(&params.0)
            .await
            .map_err(Self::api_err)?;

        Self::json(&workflow)
    }

    #[tool(
        description = "Update an existing workflow. Only include fields you want to change. Resources and steps, when given, replace the existing lists."
    )]
    pub async fn update_workflow(
        &self,
        params: Parameters<UpdateWorkflowRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.id)?;

        let workflow = self
            .client
            .update_workflow(id, &req.changes)
            .await
            .map_err(Self::api_err)?;

        Self::json(&workflow)
    }

    #[tool(description = "Delete a workflow (soft delete - marks as archived).")]
    pub async fn delete_workflow(
        &self,
        params: Parameters<WorkflowIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        self.client
            .delete_workflow(id)
            .await
            .map_err(Self::api_err)?;

        Self::json(&DeletedResponse::new("Workflow deleted"))
    }

    #[tool(
        description = "Validate a workflow - checks that all referenced resources exist and steps are properly configured."
    )]
    pub async fn validate_workflow(
        &self,
        params: Parameters<WorkflowIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        let result = self
            .client
            .validate_workflow(id)
            .await
            .map_err(Self::api_err)?;

        Self::json(&result)
    }

    #[tool(
        description = "Execute a workflow with optional input variables. Use dryRun=true to validate and plan without side effects."
    )]
    pub async fn execute_workflow(
        &self,
        params: Parameters<ExecuteWorkflowRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.id)?;

        let execution = self
            .client
            .execute_workflow(id, &req.input)
            .await
            .map_err(Self::api_err)?;

        Self::json(&execution)
    }

    #[tool(description = "Get execution history for a specific workflow.")]
    pub async fn get_workflow_executions(
        &self,
        params: Parameters<WorkflowExecutionsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let workflow_id = Self::parse_uuid(&req.workflow_id)?;

        let executions = self
            .client
            .get_workflow_executions(workflow_id, &req.page)
            .await
            .map_err(Self::api_err)?;

        Self::json(&executions)
    }

    #[tool(
        description = "List recent executions across all workflows, optionally filtered to one workflow."
    )]
    pub async fn list_all_workflow_executions(
        &self,
        params: Parameters<AllWorkflowExecutionsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let workflow_id = Self::parse_optional_uuid(req.workflow_id.as_deref())?;

        let executions = self
            .client
            .get_all_workflow_executions(workflow_id, &req.page)
            .await
            .map_err(Self::api_err)?;

        Self::json(&executions)
    }

    #[tool(
        description = "Get details of a specific workflow execution, including step-by-step results."
    )]
    pub async fn get_workflow_execution(
        &self,
        params: Parameters<WorkflowExecutionIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.execution_id)?;

        let execution = self
            .client
            .get_workflow_execution(id)
            .await
            .map_err(Self::api_err)?;

        Self::json(&execution)
    }
}
