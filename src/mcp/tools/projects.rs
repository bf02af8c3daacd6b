//! Project and feature tools.

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
#[serde(rename_all = "camelCase")]
pub struct ListProjectsRequest {
    #[schemars(description = "Include archived projects")]
    pub include_archived: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ProjectIdRequest {
    #[schemars(description = "The UUID of the project")]
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectScopeRequest {
    #[schemars(description = "The UUID of the project")]
    pub project_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateProjectRequest {
    #[schemars(description = "The UUID of the project to update")]
    pub id: String,
    #[serde(flatten)]
    pub changes: UpdateProjectInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListFeaturesRequest {
    #[schemars(description = "The UUID of the project")]
    pub project_id: String,
    #[schemars(description = "Include archived features")]
    pub include_archived: Option<bool>,
    #[schemars(description = "Return names and hierarchy only, without descriptions and counts")]
    pub compact: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListFeatureChildrenRequest {
    #[schemars(description = "The UUID of the parent feature")]
    pub parent_id: String,
    #[schemars(description = "Include all descendants recursively (default: false)")]
    pub recursive: Option<bool>,
    #[schemars(description = "Include archived features (default: false)")]
    pub include_archived: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchFeaturesRequest {
    #[schemars(description = "The UUID of the project")]
    pub project_id: String,
    #[schemars(description = "Search term to match against feature names")]
    pub q: String,
    #[schemars(description = "Include archived features (default: false)")]
    pub include_archived: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeatureRequest {
    #[schemars(description = "The UUID of the project")]
    pub project_id: String,
    #[serde(flatten)]
    pub feature: CreateFeatureInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateFeatureStatusRequest {
    #[schemars(description = "The UUID of the feature")]
    pub id: String,
    #[schemars(description = "New status")]
    pub status: FeatureStatus,
    #[schemars(
        description = "Force status update even if validation fails (e.g., open tasks exist for ready_for_review)"
    )]
    pub force: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateFeatureRequest {
    #[schemars(description = "The UUID of the feature to update")]
    pub id: String,
    #[serde(flatten)]
    pub changes: UpdateFeatureInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FeatureIdRequest {
    #[schemars(description = "The UUID of the feature")]
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFeatureCommentRequest {
    #[schemars(description = "The UUID of the feature")]
    pub feature_id: String,
    #[schemars(description = "Comment content (markdown)")]
    pub content: String,
    #[schemars(description = "User IDs to mention")]
    pub mentioned_users: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListFeatureCommentsRequest {
    #[schemars(description = "The UUID of the feature")]
    pub feature_id: String,
    #[serde(flatten)]
    pub page: PageParams,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTasksRequest {
    #[schemars(description = "The UUID of the feature")]
    pub feature_id: String,
    #[serde(flatten)]
    pub generation: GenerationInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTasksBulkRequest {
    #[schemars(description = "The UUID of the project")]
    pub project_id: String,
    #[serde(flatten)]
    pub generation: GenerationInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFeaturesRequest {
    #[schemars(description = "The UUID of the project")]
    pub project_id: String,
    #[schemars(description = "Document text content to analyze")]
    pub document: String,
    #[schemars(description = "Additional context for AI to consider")]
    pub additional_context: Option<String>,
    #[schemars(description = "AI model to use (default: claude-3-5-sonnet-20241022)")]
    pub model: Option<String>,
}

#[tool_router(router = project_tools, vis = "pub(crate)")]
impl ThinkPromptServer {
    // ============================================================
    // Project Tools
    // ============================================================

    #[tool(description = "List all projects in the current workspace.")]
    pub async fn list_projects(
        &self,
        params: Parameters<ListProjectsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let include_archived = params.0.include_archived.unwrap_or(false);

        let projects = self
            .client
            .list_projects(include_archived)
            .await
            .map_err(Self::api_err)?;

        Self::json(&projects)
    }

    #[tool(description = "Get detailed information about a project.")]
    pub async fn get_project(
        &self,
        params: Parameters<ProjectIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        let project = self.client.get_project(id).await.map_err(Self::api_err)?;

        Self::json(&project)
    }

    #[tool(
        description = "Get dashboard statistics for a project including task/feature counts, progress, velocity, and recent activity."
    )]
    pub async fn get_project_statistics(
        &self,
        params: Parameters<ProjectScopeRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.project_id)?;

        let statistics = self
            .client
            .get_project_statistics(id)
            .await
            .map_err(Self::api_err)?;

        Self::json(&statistics)
    }

    #[tool(
        description = "Create a new project. The slug is the uppercase prefix used for task codes (e.g., \"TP\" gives TP-001)."
    )]
    pub async fn create_project(
        &self,
        params: Parameters<CreateProjectInput>,
    ) -> Result<CallToolResult, McpError> {
        let project = self
            .client
            .create_project(&params.0)
            .await
            .map_err(Self::api_err)?;

        Self::json(&project)
    }

    #[tool(description = "Update a project. Only include fields you want to change.")]
    pub async fn update_project(
        &self,
        params: Parameters<UpdateProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.id)?;

        let project = self
            .client
            .update_project(id, &req.changes)
            .await
            .map_err(Self::api_err)?;

        Self::json(&project)
    }

    // ============================================================
    // Feature Tools
    // ============================================================

    #[tool(description = "List all features/epics in a project (hierarchical).")]
    pub async fn list_features(
        &self,
        params: Parameters<ListFeaturesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let project_id = Self::parse_uuid(&req.project_id)?;
        let filter = FeatureListParams {
            include_archived: req.include_archived.unwrap_or(false),
            compact: req.compact.unwrap_or(false),
        };

        let features = self
            .client
            .list_features(project_id, &filter)
            .await
            .map_err(Self::api_err)?;

        Self::json(&features)
    }

    #[tool(
        description = "List children/subfeatures of a feature. Use recursive=true to get all descendants."
    )]
    pub async fn list_feature_children(
        &self,
        params: Parameters<ListFeatureChildrenRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let parent_id = Self::parse_uuid(&req.parent_id)?;
        let filter = FeatureChildrenParams {
            recursive: req.recursive.unwrap_or(false),
            include_archived: req.include_archived.unwrap_or(false),
        };

        let children = self
            .client
            .get_feature_children(parent_id, &filter)
            .await
            .map_err(Self::api_err)?;

        Self::json(&children)
    }

    #[tool(description = "Search features by name within a project.")]
    pub async fn search_features(
        &self,
        params: Parameters<SearchFeaturesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let project_id = Self::parse_uuid(&req.project_id)?;

        let features = self
            .client
            .search_features(project_id, &req.q, req.include_archived.unwrap_or(false))
            .await
            .map_err(Self::api_err)?;

        Self::json(&features)
    }

    #[tool(
        description = "List the features of a project that are ready for development (status \"ready_for_dev\")."
    )]
    pub async fn list_ready_for_dev_features(
        &self,
        params: Parameters<ProjectScopeRequest>,
    ) -> Result<CallToolResult, McpError> {
        let project_id = Self::parse_uuid(&params.0.project_id)?;

        let features = self
            .client
            .list_ready_for_dev_features(project_id)
            .await
            .map_err(Self::api_err)?;

        Self::json(&features)
    }

    #[tool(description = "Create a new feature/epic in a project.")]
    pub async fn create_feature(
        &self,
        params: Parameters<CreateFeatureRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let project_id = Self::parse_uuid(&req.project_id)?;

        let feature = self
            .client
            .create_feature(project_id, &req.feature)
            .await
            .map_err(Self::api_err)?;

        Self::json(&feature)
    }

    #[tool(
        description = "Quick update of feature status. When setting to ready_for_review, validates that all tasks are done. Use force=true to skip validation."
    )]
    pub async fn update_feature_status(
        &self,
        params: Parameters<UpdateFeatureStatusRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.id)?;

        let feature = self
            .client
            .update_feature_status(id, req.status, req.force)
            .await
            .map_err(Self::api_err)?;

        Self::json(&feature)
    }

    #[tool(description = "Update a feature. Only include fields you want to change.")]
    pub async fn update_feature(
        &self,
        params: Parameters<UpdateFeatureRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.id)?;

        let feature = self
            .client
            .update_feature(id, &req.changes)
            .await
            .map_err(Self::api_err)?;

        Self::json(&feature)
    }

    #[tool(description = "Get the change history of a feature.")]
    pub async fn get_feature_history(
        &self,
        params: Parameters<FeatureIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        let history = self
            .client
            .get_feature_history(id)
            .await
            .map_err(Self::api_err)?;

        Self::json(&history)
    }

    #[tool(description = "Delete a feature (soft delete - marks as archived).")]
    pub async fn delete_feature(
        &self,
        params: Parameters<FeatureIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        self.client.delete_feature(id).await.map_err(Self::api_err)?;

        Self::json(&DeletedResponse::new("Feature deleted"))
    }

    #[tool(description = "Add a comment to a feature.")]
    pub async fn add_feature_comment(
        &self,
        params: Parameters<AddFeatureCommentRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let feature_id = Self::parse_uuid(&req.feature_id)?;
        let comment = CreateCommentInput {
            content: req.content,
            mentioned_users: req.mentioned_users,
            created_by_source: Some(CommentSource::Mcp),
        };

        let result = self
            .client
            .add_feature_comment(feature_id, &comment)
            .await
            .map_err(Self::api_err)?;

        Self::json(&result)
    }

    #[tool(description = "List all comments on a feature.")]
    pub async fn list_feature_comments(
        &self,
        params: Parameters<ListFeatureCommentsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let feature_id = Self::parse_uuid(&req.feature_id)?;

        let comments = self
            .client
            .list_feature_comments(feature_id, &req.page)
            .await
            .map_err(Self::api_err)?;

        Self::json(&comments)
    }

    // ============================================================
    // AI Generation Tools
    // ============================================================

    #[tool(
        description = "Generate development tasks from a feature using AI. Feature must have status \"ready_for_dev\" and no existing tasks."
    )]
    pub async fn generate_tasks_from_feature(
        &self,
        params: Parameters<GenerateTasksRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let feature_id = Self::parse_uuid(&req.feature_id)?;

        let result = self
            .client
            .generate_tasks_from_feature(feature_id, &req.generation)
            .await
            .map_err(Self::api_err)?;

        Self::json(&result)
    }

    #[tool(
        description = "Generate tasks from all \"ready_for_dev\" features in a project that have no existing tasks."
    )]
    pub async fn generate_tasks_bulk(
        &self,
        params: Parameters<GenerateTasksBulkRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let project_id = Self::parse_uuid(&req.project_id)?;

        let result = self
            .client
            .generate_tasks_bulk(project_id, &req.generation)
            .await
            .map_err(Self::api_err)?;

        Self::json(&result)
    }

    #[tool(
        description = "Generate features from a document/transcription using AI. Provide document text and optional context."
    )]
    pub async fn generate_features_from_document(
        &self,
        params: Parameters<GenerateFeaturesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let project_id = Self::parse_uuid(&req.project_id)?;
        let input = GenerateFeaturesInput {
            document: Some(req.document),
            additional_context: req.additional_context,
            model: req.model,
        };

        let result = self
            .client
            .generate_features_from_document(project_id, &input)
            .await
            .map_err(Self::api_err)?;

        Self::json(&result)
    }
}
