use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Free-form JSON object carried through without interpretation.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// One page of a listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

/// Page selection shared by listings that accept nothing else.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct PageParams {
    #[schemars(description = "Page number (default: 1)")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page (default: 20)")]
    pub limit: Option<u32>,
}

/// A colour-coded label attachable to prompts, templates, workflows, features, tasks
/// and documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Tag reference embedded in other records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRef {
    pub id: Uuid,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagInput {
    /// Tag name
    pub name: String,
    /// Hex colour, e.g. "#3b82f6"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTagInput {
    /// New tag name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New hex colour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Body of the tag attach endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TagIdsBody<'a> {
    pub tag_ids: &'a [Uuid],
}

/// Minimal user reference embedded in projects and tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    pub user_id: String,
    pub email: String,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthor {
    pub email: String,
    pub full_name: Option<String>,
}

wire_enum! {
    /// Origin recorded on comments.
    pub enum CommentSource {
        User => "user",
        Mcp => "mcp",
        Ai => "ai",
    }
}

/// Body for adding a comment to a feature or task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentInput {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentioned_users: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_source: Option<CommentSource>,
}

/// Optional steering for the AI generation endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationInput {
    /// Additional context for AI to consider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
    /// AI model to use (default: claude-3-5-sonnet-20241022)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}
