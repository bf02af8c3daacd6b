use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{JsonObject, TagRef};

wire_enum! {
    pub enum WorkflowResourceType {
        Prompt => "prompt",
        Template => "template",
        Task => "task",
        Feature => "feature",
        Project => "project",
    }
}

wire_enum! {
    pub enum WorkflowActionType {
        ExecutePrompt => "execute_prompt",
        LoadTemplate => "load_template",
        CreateTask => "create_task",
        UpdateTaskStatus => "update_task_status",
        GenerateTasks => "generate_tasks",
        Custom => "custom",
    }
}

wire_enum! {
    pub enum WorkflowStatus {
        Draft => "draft",
        Active => "active",
        Deprecated => "deprecated",
    }
}

wire_enum! {
    pub enum ConditionType {
        Unconditional => "none",
        Simple => "simple",
        Ai => "ai",
    }
}

wire_enum! {
    /// What the executor does when a step fails.
    pub enum StepErrorPolicy {
        Fail => "fail",
        Skip => "skip",
        Continue => "continue",
    }
}

wire_enum! {
    pub enum WorkflowExecutionStatus {
        Pending => "pending",
        Running => "running",
        Completed => "completed",
        Failed => "failed",
        Cancelled => "cancelled",
    }
}

wire_enum! {
    pub enum WorkflowStepStatus {
        Pending => "pending",
        Running => "running",
        Completed => "completed",
        Failed => "failed",
        Skipped => "skipped",
    }
}

/// A typed reference from a workflow to another record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResource {
    pub id: Uuid,
    pub resource_type: WorkflowResourceType,
    pub resource_id: Uuid,
    pub alias: Option<String>,
    #[serde(default)]
    pub config: JsonObject,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub id: Uuid,
    pub step_number: u32,
    pub title: String,
    pub description: Option<String>,
    pub action_type: WorkflowActionType,
    #[serde(default)]
    pub action_config: JsonObject,
    pub condition: Option<String>,
    pub condition_type: Option<ConditionType>,
    pub timeout_ms: Option<u64>,
    pub on_error: StepErrorPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub custom_instructions: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub is_archived: bool,
    pub status: WorkflowStatus,
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub usage_count: u64,
    pub last_used_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resources: Vec<WorkflowResource>,
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagRef>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowExecutionStep {
    pub id: Uuid,
    pub step_id: Uuid,
    pub step_number: u32,
    pub step_title: String,
    pub status: WorkflowStepStatus,
    #[serde(default)]
    pub input_snapshot: JsonObject,
    pub output_result: Option<Value>,
    pub error_message: Option<String>,
    pub condition_result: Option<bool>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowExecution {
    pub id: Uuid,
    pub workflow_id: Uuid,
    pub workflow_title: String,
    pub status: WorkflowExecutionStatus,
    #[serde(default)]
    pub input_variables: JsonObject,
    #[serde(default)]
    pub context_snapshot: JsonObject,
    pub result: Option<Value>,
    pub error_message: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub executed_by: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub steps: Vec<WorkflowExecutionStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowValidationResult {
    pub is_valid: bool,
    #[serde(default)]
    pub missing_resources: Vec<MissingResource>,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingResource {
    pub resource_id: Uuid,
    pub resource_type: WorkflowResourceType,
    pub exists: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkflowResourceInput {
    /// Type of resource
    pub resource_type: WorkflowResourceType,
    /// UUID of the resource
    pub resource_id: Uuid,
    /// Alias for referencing in steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Resource-specific configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<JsonObject>,
    /// Display order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkflowStepInput {
    /// Step execution order
    pub step_number: u32,
    /// Step title
    pub title: String,
    /// Step description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Type of action to perform
    pub action_type: WorkflowActionType,
    /// Free-form configuration for the action (promptId, templateId, variables, ...).
    /// Passed to the API unchanged.
    pub action_config: JsonObject,
    /// Condition expression for step execution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Type of condition evaluation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<ConditionType>,
    /// Step timeout in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    /// Error handling strategy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_error: Option<StepErrorPolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkflowInput {
    /// Workflow title
    pub title: String,
    /// Workflow description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Custom instructions for AI execution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_instructions: Option<String>,
    /// Workflow category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Whether workflow is publicly visible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    /// Workflow status (default: draft)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkflowStatus>,
    /// Tag IDs to associate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<Uuid>>,
    /// Resources to include in the workflow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<CreateWorkflowResourceInput>>,
    /// Execution steps for the workflow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<CreateWorkflowStepInput>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkflowInput {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New custom instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_instructions: Option<String>,
    /// New category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New visibility setting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkflowStatus>,
    /// New tag IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<Uuid>>,
    /// New resources (replaces existing)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<CreateWorkflowResourceInput>>,
    /// New steps (replaces existing)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<CreateWorkflowStepInput>>,
}

/// Body of `POST /workflows/{id}/execute`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteWorkflowInput {
    /// Input variables for the run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<JsonObject>,
    /// Validate and plan without side effects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListWorkflowsParams {
    #[schemars(description = "Maximum number of workflows to return (default: 20)")]
    pub limit: Option<u32>,
    #[schemars(description = "Page number for pagination (default: 1)")]
    pub page: Option<u32>,
    #[schemars(description = "Search query to filter workflows")]
    pub search: Option<String>,
    #[schemars(description = "Filter by category")]
    pub category: Option<String>,
    #[schemars(description = "Filter by workflow status")]
    pub status: Option<WorkflowStatus>,
    #[schemars(description = "Include archived workflows")]
    pub include_archived: Option<bool>,
}
