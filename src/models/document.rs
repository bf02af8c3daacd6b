use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{JsonObject, TagRef};

/// A markdown document. Every update bumps `version` and keeps the previous text as a
/// [`DocumentVersion`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub tenant_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub folder_id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub frontmatter: JsonObject,
    pub version: u32,
    #[serde(default)]
    pub is_archived: bool,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<FolderRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderRef {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentVersion {
    pub id: Uuid,
    pub document_id: Uuid,
    pub version: u32,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub frontmatter: JsonObject,
    pub change_summary: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSearchResult {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub project_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<FolderRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagRef>,
    pub updated_at: DateTime<Utc>,
}

/// A node in the document folder tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFolder {
    pub id: Uuid,
    pub tenant_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub sort_order: i32,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DocumentFolder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFolderTree {
    pub folders: Vec<DocumentFolder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentInput {
    /// Document title
    pub title: String,
    /// Markdown content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// YAML-style frontmatter as a JSON object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontmatter: Option<JsonObject>,
    /// Folder UUID to place the document in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<Uuid>,
    /// Project UUID to scope the document to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    /// Tag IDs to attach
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentInput {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New markdown content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Replacement frontmatter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontmatter: Option<JsonObject>,
    /// Move to another folder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<Uuid>,
    /// Short note stored with the new version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_summary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsParams {
    #[schemars(description = "Filter by project UUID")]
    pub project_id: Option<Uuid>,
    #[schemars(description = "Filter by folder UUID")]
    pub folder_id: Option<Uuid>,
    #[schemars(description = "Search in title and content")]
    pub search: Option<String>,
    #[schemars(description = "Only documents carrying all of these tag IDs")]
    pub tag_ids: Option<Vec<Uuid>>,
    #[schemars(description = "Include archived documents")]
    pub include_archived: Option<bool>,
    #[schemars(description = "Page number (default: 1)")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page (default: 20)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchDocumentsParams {
    #[schemars(description = "Full-text search query")]
    pub query: String,
    #[schemars(description = "Restrict to a project UUID")]
    pub project_id: Option<Uuid>,
    #[schemars(description = "Restrict to a folder UUID")]
    pub folder_id: Option<Uuid>,
    #[schemars(description = "Maximum number of results")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentFolderInput {
    /// Folder name
    pub name: String,
    /// Parent folder UUID (omit for a top-level folder)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    /// Project UUID to scope the folder to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentFolderInput {
    /// New folder name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New parent folder UUID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentFoldersParams {
    #[schemars(description = "Filter by project UUID")]
    pub project_id: Option<Uuid>,
    #[schemars(description = "Only direct children of this folder")]
    pub parent_id: Option<Uuid>,
    #[schemars(description = "Include archived folders")]
    pub include_archived: Option<bool>,
}

/// New position of one folder among its siblings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FolderOrder {
    /// Folder UUID
    pub id: Uuid,
    /// New sort position
    pub sort_order: i32,
}

/// Body of `POST /document-folders/reorder`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReorderFoldersInput {
    /// Folders with their new sort positions
    pub items: Vec<FolderOrder>,
}
