use uuid::Uuid;

use super::{ApiClient, ApiError, Query};
use crate::models::*;

impl ApiClient {
    // ============================================================
    // Project Operations
    // ============================================================

    pub async fn list_projects(&self, include_archived: bool) -> Result<Option<Vec<Project>>, ApiError> {
        let query = Query::new().flag("includeArchived", include_archived);
        self.get("/projects", query).await
    }

    pub async fn get_project(&self, id: Uuid) -> Result<Option<Project>, ApiError> {
        self.get(&format!("/projects/{}", id), Query::new()).await
    }

    pub async fn create_project(&self, input: &CreateProjectInput) -> Result<Option<Project>, ApiError> {
        self.post("/projects", input).await
    }

    pub async fn update_project(
        &self,
        id: Uuid,
        input: &UpdateProjectInput,
    ) -> Result<Option<Project>, ApiError> {
        self.patch(&format!("/projects/{}", id), input).await
    }

    pub async fn get_project_statistics(&self, id: Uuid) -> Result<Option<ProjectStatistics>, ApiError> {
        self.get(&format!("/projects/{}/statistics", id), Query::new())
            .await
    }

    // ============================================================
    // Feature Operations
    // ============================================================

    pub async fn list_features(
        &self,
        project_id: Uuid,
        params: &FeatureListParams,
    ) -> Result<Option<Vec<Feature>>, ApiError> {
        let query = Query::new()
            .flag("includeArchived", params.include_archived)
            .flag("compact", params.compact);
        self.get(&format!("/projects/{}/features", project_id), query)
            .await
    }

    pub async fn get_feature(&self, id: Uuid) -> Result<Option<Feature>, ApiError> {
        self.get(&format!("/features/{}", id), Query::new()).await
    }

    pub async fn create_feature(
        &self,
        project_id: Uuid,
        input: &CreateFeatureInput,
    ) -> Result<Option<Feature>, ApiError> {
        self.post(&format!("/projects/{}/features", project_id), input)
            .await
    }

    pub async fn update_feature(
        &self,
        id: Uuid,
        input: &UpdateFeatureInput,
    ) -> Result<Option<Feature>, ApiError> {
        self.patch(&format!("/features/{}", id), input).await
    }

    /// Change a feature's status. `force` skips the open-task check on `ready_for_review`.
    pub async fn update_feature_status(
        &self,
        id: Uuid,
        status: FeatureStatus,
        force: Option<bool>,
    ) -> Result<Option<Feature>, ApiError> {
        let body = FeatureStatusBody { status, force };
        self.patch(&format!("/features/{}/status", id), &body).await
    }

    pub async fn get_feature_history(&self, id: Uuid) -> Result<Option<Vec<FeatureHistory>>, ApiError> {
        self.get(&format!("/features/{}/history", id), Query::new())
            .await
    }

    pub async fn list_ready_for_dev_features(
        &self,
        project_id: Uuid,
    ) -> Result<Option<Vec<Feature>>, ApiError> {
        self.get(
            &format!("/projects/{}/features/ready-for-dev", project_id),
            Query::new(),
        )
        .await
    }

    pub async fn get_feature_children(
        &self,
        parent_id: Uuid,
        params: &FeatureChildrenParams,
    ) -> Result<Option<Vec<Feature>>, ApiError> {
        let query = Query::new()
            .flag("recursive", params.recursive)
            .flag("includeArchived", params.include_archived);
        self.get(&format!("/features/{}/children", parent_id), query)
            .await
    }

    /// Search feature names and descriptions. The search term is always sent.
    pub async fn search_features(
        &self,
        project_id: Uuid,
        q: &str,
        include_archived: bool,
    ) -> Result<Option<Vec<Feature>>, ApiError> {
        let query = Query::new()
            .set("q", q)
            .flag("includeArchived", include_archived);
        self.get(&format!("/projects/{}/features/search", project_id), query)
            .await
    }

    pub async fn list_feature_comments(
        &self,
        feature_id: Uuid,
        params: &PageParams,
    ) -> Result<Option<PaginatedResponse<FeatureComment>>, ApiError> {
        let query = Query::new()
            .opt("page", params.page)
            .opt("limit", params.limit);
        self.get(&format!("/features/{}/comments", feature_id), query)
            .await
    }

    pub async fn add_feature_comment(
        &self,
        feature_id: Uuid,
        input: &CreateCommentInput,
    ) -> Result<Option<FeatureComment>, ApiError> {
        self.post(&format!("/features/{}/comments", feature_id), input)
            .await
    }

    pub async fn delete_feature(&self, id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/features/{}", id)).await
    }

    pub async fn add_feature_tags(&self, feature_id: Uuid, tag_ids: &[Uuid]) -> Result<(), ApiError> {
        self.post_empty(
            &format!("/features/{}/tags", feature_id),
            &TagIdsBody { tag_ids },
        )
        .await
    }

    pub async fn remove_feature_tag(&self, feature_id: Uuid, tag_id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/features/{}/tags/{}", feature_id, tag_id))
            .await
    }

    pub async fn get_feature_tags(&self, feature_id: Uuid) -> Result<Option<Vec<Tag>>, ApiError> {
        self.get(&format!("/features/{}/tags", feature_id), Query::new())
            .await
    }

    /// Let the server's model break a feature into tasks.
    pub async fn generate_tasks_from_feature(
        &self,
        feature_id: Uuid,
        input: &GenerationInput,
    ) -> Result<Option<GenerateTasksResponse>, ApiError> {
        self.post(&format!("/features/{}/generate-tasks", feature_id), input)
            .await
    }

    /// Generate tasks for every eligible feature of a project in one call.
    pub async fn generate_tasks_bulk(
        &self,
        project_id: Uuid,
        input: &GenerationInput,
    ) -> Result<Option<BulkGenerateTasksResponse>, ApiError> {
        self.post(
            &format!("/projects/{}/generate-tasks-bulk", project_id),
            input,
        )
        .await
    }

    pub async fn generate_features_from_document(
        &self,
        project_id: Uuid,
        input: &GenerateFeaturesInput,
    ) -> Result<Option<GenerateFeaturesResponse>, ApiError> {
        self.post(&format!("/projects/{}/generate-features", project_id), input)
            .await
    }

    // ============================================================
    // Task Operations
    // ============================================================

    pub async fn list_tasks(
        &self,
        params: &ListTasksParams,
    ) -> Result<Option<PaginatedResponse<Task>>, ApiError> {
        let query = Query::new()
            .opt("projectId", params.project_id)
            .opt("featureId", params.feature_id)
            .opt("status", params.status)
            .opt("priority", params.priority)
            .opt("complexity", params.complexity)
            .opt("assigneeId", params.assignee_id.as_deref())
            .opt("search", params.search.as_deref())
            .opt("page", params.page)
            .opt("limit", params.limit)
            .flag("includeArchived", params.include_archived.unwrap_or(false));
        self.get("/tasks", query).await
    }

    pub async fn get_task(&self, id: Uuid) -> Result<Option<Task>, ApiError> {
        self.get(&format!("/tasks/{}", id), Query::new()).await
    }

    /// Look a task up by its project-scoped code, e.g. `TP-001`.
    pub async fn get_task_by_kuerzel(&self, kuerzel: &str) -> Result<Option<Task>, ApiError> {
        self.get(&format!("/tasks/by-kuerzel/{}", kuerzel), Query::new())
            .await
    }

    pub async fn create_task(&self, input: &CreateTaskInput) -> Result<Option<Task>, ApiError> {
        self.post("/tasks", input).await
    }

    pub async fn update_task(&self, id: Uuid, input: &UpdateTaskInput) -> Result<Option<Task>, ApiError> {
        self.patch(&format!("/tasks/{}", id), input).await
    }

    pub async fn update_task_status(&self, id: Uuid, status: TaskStatus) -> Result<Option<Task>, ApiError> {
        self.patch(&format!("/tasks/{}/status", id), &TaskStatusBody { status })
            .await
    }

    pub async fn get_task_history(&self, id: Uuid) -> Result<Option<Vec<TaskHistory>>, ApiError> {
        self.get(&format!("/tasks/{}/history", id), Query::new())
            .await
    }

    pub async fn ai_edit_task(
        &self,
        id: Uuid,
        input: &AiEditTaskInput,
    ) -> Result<Option<AiEditTaskResult>, ApiError> {
        self.post(&format!("/tasks/{}/ai-edit", id), input).await
    }

    pub async fn delete_task(&self, id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/tasks/{}", id)).await
    }

    pub async fn add_task_tags(&self, task_id: Uuid, tag_ids: &[Uuid]) -> Result<(), ApiError> {
        self.post_empty(&format!("/tasks/{}/tags", task_id), &TagIdsBody { tag_ids })
            .await
    }

    pub async fn remove_task_tag(&self, task_id: Uuid, tag_id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/tasks/{}/tags/{}", task_id, tag_id))
            .await
    }

    pub async fn get_task_tags(&self, task_id: Uuid) -> Result<Option<Vec<Tag>>, ApiError> {
        self.get(&format!("/tasks/{}/tags", task_id), Query::new())
            .await
    }

    pub async fn list_task_comments(
        &self,
        task_id: Uuid,
        params: &PageParams,
    ) -> Result<Option<PaginatedResponse<TaskComment>>, ApiError> {
        let query = Query::new()
            .opt("page", params.page)
            .opt("limit", params.limit);
        self.get(&format!("/tasks/{}/comments", task_id), query).await
    }

    pub async fn add_task_comment(
        &self,
        task_id: Uuid,
        input: &CreateCommentInput,
    ) -> Result<Option<TaskComment>, ApiError> {
        self.post(&format!("/tasks/{}/comments", task_id), input)
            .await
    }
}
