use std::collections::HashMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Assignee, CommentAuthor};

/// Top-level container for features and tasks. `slug` prefixes task kürzel codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub tenant_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub task_counter: u32,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<Assignee>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProjectLink {
    /// Link kind, e.g. "design" or "wiki"
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatistics {
    pub project_id: Uuid,
    pub tasks: TaskStatistics,
    pub features: FeatureStatistics,
    pub progress_percentage: f64,
    pub blocked_count: u32,
    #[serde(default)]
    pub recent_activity: Vec<RecentActivityItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatistics {
    pub total: u32,
    #[serde(default)]
    pub by_status: HashMap<String, u32>,
    pub completed_last7_days: u32,
    pub completed_last30_days: u32,
    pub total_estimated_hours: f64,
    pub completed_estimated_hours: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStatistics {
    pub total: u32,
    #[serde(default)]
    pub by_status: HashMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivityItem {
    /// Either "task" or "feature".
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Uuid,
    pub title: String,
    pub action: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectInput {
    /// Project name
    pub name: String,
    /// Uppercase prefix for task numbering (e.g., "TP")
    pub slug: String,
    /// Project description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Links to design, wiki, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ProjectLink>>,
    /// User IDs to assign to the project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectInput {
    /// New project name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New task numbering prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Replacement link list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ProjectLink>>,
    /// Replacement assignee list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_ids: Option<Vec<String>>,
}

// ============================================================
// Features
// ============================================================

wire_enum! {
    /// Feature lifecycle. Moving to `ready_for_review` is checked remotely against open tasks.
    pub enum FeatureStatus {
        New => "new",
        Rfc => "rfc",
        Approved => "approved",
        Blocked => "blocked",
        ReadyForDev => "ready_for_dev",
        ReadyForReview => "ready_for_review",
        Done => "done",
    }
}

/// A capability within a project. `parent_id` forms the epic/story tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: Uuid,
    pub project_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub is_archived: bool,
    pub status: FeatureStatus,
    #[serde(default)]
    pub task_count: u32,
    #[serde(default)]
    pub comment_count: u32,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeatureInput {
    /// Feature name
    pub name: String,
    /// Feature description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parent feature ID for hierarchy (Epic > Story)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    /// Position among siblings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    /// Feature status (default: new)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FeatureStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeatureInput {
    /// New feature name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New feature description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New parent feature ID for hierarchy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    /// New position among siblings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FeatureStatus>,
}

/// Body of `PATCH /features/{id}/status`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct FeatureStatusBody {
    pub status: FeatureStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureComment {
    pub id: Uuid,
    pub feature_id: Uuid,
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

/// One field change on a feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureHistory {
    pub id: Uuid,
    pub feature_id: Uuid,
    pub change_type: String,
    pub field_name: Option<String>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub changed_by: Option<String>,
    pub change_source: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /projects/{id}/generate-features`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFeaturesInput {
    /// Document text content to analyze
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    /// Additional context for AI to consider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
    /// AI model to use (default: claude-3-5-sonnet-20241022)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFeaturesResponse {
    pub features_created: Vec<Feature>,
    pub tokens_input: u64,
    pub tokens_output: u64,
    pub execution_time_ms: u64,
}

#[derive(Debug, Clone, Default)]
pub struct FeatureListParams {
    pub include_archived: bool,
    /// Ask the server to omit descriptions and counts.
    pub compact: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FeatureChildrenParams {
    pub recursive: bool,
    pub include_archived: bool,
}
