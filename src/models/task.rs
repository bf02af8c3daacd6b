use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Assignee, CommentAuthor};

wire_enum! {
    pub enum TaskStatus {
        Open => "open",
        InProgress => "in_progress",
        Blocked => "blocked",
        Review => "review",
        Done => "done",
    }
}

wire_enum! {
    pub enum TaskPriority {
        Low => "low",
        Medium => "medium",
        High => "high",
        Urgent => "urgent",
    }
}

wire_enum! {
    pub enum TaskComplexity {
        Trivial => "trivial",
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

wire_enum! {
    pub enum AiProvider {
        OpenAi => "openai",
        Anthropic => "anthropic",
    }
}

/// A unit of work in a project, addressable by id or by its kürzel (e.g. `TP-001`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub project_id: Uuid,
    pub feature_id: Option<Uuid>,
    pub task_number: u32,
    pub kuerzel: String,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub status: TaskStatus,
    pub complexity: TaskComplexity,
    pub priority: TaskPriority,
    pub estimation_hours: Option<f64>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub is_archived: bool,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<Assignee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<TaskProjectRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<TaskFeatureRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskProjectRef {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskFeatureRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskInput {
    /// The UUID of the project
    pub project_id: Uuid,
    /// Optional feature/epic to assign to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_id: Option<Uuid>,
    /// Task title
    pub title: String,
    /// Short description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Full markdown content (DB structure, SQL, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Task status (default: open)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// Task complexity (default: medium)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<TaskComplexity>,
    /// Task priority (default: medium)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    /// Estimated hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimation_hours: Option<f64>,
    /// User IDs to assign
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<TaskComplexity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimation_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksParams {
    #[schemars(description = "Filter by project")]
    pub project_id: Option<Uuid>,
    #[schemars(description = "Filter by feature")]
    pub feature_id: Option<Uuid>,
    #[schemars(description = "Filter by status")]
    pub status: Option<TaskStatus>,
    #[schemars(description = "Filter by priority")]
    pub priority: Option<TaskPriority>,
    #[schemars(description = "Filter by complexity")]
    pub complexity: Option<TaskComplexity>,
    #[schemars(description = "Filter by assigned user")]
    pub assignee_id: Option<String>,
    #[schemars(description = "Search in title, description, kürzel")]
    pub search: Option<String>,
    #[schemars(description = "Page number")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page")]
    pub limit: Option<u32>,
    #[schemars(description = "Include archived tasks")]
    pub include_archived: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskComment {
    pub id: Uuid,
    pub task_id: Uuid,
    pub content: String,
    #[serde(default)]
    pub mentioned_users: Vec<String>,
    pub created_by: Option<String>,
    pub created_by_source: String,
    #[serde(default)]
    pub is_edited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_user: Option<CommentAuthor>,
}

/// One field change on a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskHistory {
    pub id: Uuid,
    pub task_id: Uuid,
    pub change_type: String,
    pub field_name: Option<String>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub changed_by: Option<String>,
    pub change_source: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /tasks/{id}/ai-edit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AiEditTaskInput {
    /// Instructions for AI to modify the task content
    pub prompt: String,
    /// AI provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<AiProvider>,
    /// Model to use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiEditTaskResult {
    pub task: Task,
    pub tokens_input: u64,
    pub tokens_output: u64,
    pub execution_time_ms: u64,
    pub provider: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTasksResponse {
    pub feature_id: Uuid,
    pub tasks_created: Vec<Task>,
    pub tokens_input: u64,
    pub tokens_output: u64,
    pub execution_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkGenerateTasksResponse {
    pub features_processed: u32,
    pub results: Vec<GenerateTasksResponse>,
    pub total_tasks_created: u32,
    pub total_tokens_input: u64,
    pub total_tokens_output: u64,
    pub total_execution_time_ms: u64,
}

/// Body of `PATCH /tasks/{id}/status`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TaskStatusBody {
    pub status: TaskStatus,
}
