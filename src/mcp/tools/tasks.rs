//! Task tools.

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
pub struct GetTaskRequest {
    #[schemars(description = "The UUID of the task")]
    pub id: Option<String>,
    #[schemars(description = "The task Kürzel (e.g., \"TP-001\"). Takes precedence over id.")]
    pub kuerzel: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TaskIdRequest {
    #[schemars(description = "The UUID of the task")]
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateTaskRequest {
    #[schemars(description = "The UUID of the task")]
    pub id: String,
    #[serde(flatten)]
    pub changes: UpdateTaskInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateTaskStatusRequest {
    #[schemars(description = "The UUID of the task")]
    pub id: String,
    #[schemars(description = "New status")]
    pub status: TaskStatus,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AiEditTaskRequest {
    #[schemars(description = "The UUID of the task")]
    pub id: String,
    #[serde(flatten)]
    pub edit: AiEditTaskInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTaskCommentRequest {
    #[schemars(description = "The UUID of the task")]
    pub task_id: String,
    #[schemars(description = "Comment content (markdown)")]
    pub content: String,
    #[schemars(description = "User IDs to mention")]
    pub mentioned_users: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTaskCommentsRequest {
    #[schemars(description = "The UUID of the task")]
    pub task_id: String,
    #[serde(flatten)]
    pub page: PageParams,
}

#[tool_router(router = task_tools, vis = "pub(crate)")]
impl ThinkPromptServer {
    #[tool(description = "List tasks with optional filters.")]
    pub async fn list_tasks(
        &self,
        params: Parameters<ListTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;

        let tasks = self.client.list_tasks(&req).await.map_err(Self::api_err)?;

        Self::json(&tasks)
    }

    #[tool(description = "Get detailed information about a task by ID or Kürzel.")]
    pub async fn get_task(
        &self,
        params: Parameters<GetTaskRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;

        let kuerzel = req.kuerzel.filter(|k| !k.is_empty());
        let id = req.id.filter(|id| !id.is_empty());

        let task = match (kuerzel, id) {
            (Some(kuerzel), _) => self.client.get_task_by_kuerzel(&kuerzel).await,
            (None, Some(id)) => self.client.get_task(Self::parse_uuid(&id)?).await,
            (None, None) => {
                return Err(McpError::invalid_params(
                    "Either id or kuerzel must be provided",
                    None,
                ))
            }
        }
        .map_err(Self::api_err)?;

        Self::json(&task)
    }

    #[tool(description = "Create a new task in a project.")]
    pub async fn create_task(
        &self,
        params: Parameters<CreateTaskInput>,
    ) -> Result<CallToolResult, McpError> {
        let task = self
            .client
            .create_task(&params.0)
            .await
            .map_err(Self::api_err)?;

        Self::json(&task)
    }

    #[tool(description = "Update an existing task.")]
    pub async fn update_task(
        &self,
        params: Parameters<UpdateTaskRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.id)?;

        let task = self
            .client
            .update_task(id, &req.changes)
            .await
            .map_err(Self::api_err)?;

        Self::json(&task)
    }

    #[tool(description = "Quick update of task status.")]
    pub async fn update_task_status(
        &self,
        params: Parameters<UpdateTaskStatusRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.id)?;

        let task = self
            .client
            .update_task_status(id, req.status)
            .await
            .map_err(Self::api_err)?;

        Self::json(&task)
    }

    #[tool(description = "Edit task content using AI. Provide a prompt describing the changes.")]
    pub async fn ai_edit_task(
        &self,
        params: Parameters<AiEditTaskRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.id)?;

        let result = self
            .client
            .ai_edit_task(id, &req.edit)
            .await
            .map_err(Self::api_err)?;

        Self::json(&result)
    }

    #[tool(description = "Delete a task (soft delete - marks as archived).")]
    pub async fn delete_task(
        &self,
        params: Parameters<TaskIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        self.client.delete_task(id).await.map_err(Self::api_err)?;

        Self::json(&DeletedResponse::new("Task deleted"))
    }

    #[tool(description = "Add a comment to a task.")]
    pub async fn add_task_comment(
        &self,
        params: Parameters<AddTaskCommentRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let task_id = Self::parse_uuid(&req.task_id)?;
        let comment = CreateCommentInput {
            content: req.content,
            mentioned_users: req.mentioned_users,
            created_by_source: Some(CommentSource::Mcp),
        };

        let result = self
            .client
            .add_task_comment(task_id, &comment)
            .await
            .map_err(Self::api_err)?;

        Self::json(&result)
    }

    #[tool(description = "List all comments on a task.")]
    pub async fn list_task_comments(
        &self,
        params: Parameters<ListTaskCommentsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let task_id = Self::parse_uuid(&req.task_id)?;

        let comments = self
            .client
            .list_task_comments(task_id, &req.page)
            .await
            .map_err(Self::api_err)?;

        Self::json(&comments)
    }

    #[tool(description = "Get the change history of a task.")]
    pub async fn get_task_history(
        &self,
        params: Parameters<TaskIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        let history = self
            .client
            .get_task_history(id)
            .await
            .map_err(Self::api_err)?;

        Self::json(&history)
    }
}
