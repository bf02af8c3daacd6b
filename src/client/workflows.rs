use uuid::Uuid;

use super::{ApiClient, ApiError, Query};
use crate::models::*;

impl ApiClient {
    // ============================================================
    // Workflow Operations
    // ============================================================

    pub async fn list_workflows(
        &self,
        params: &ListWorkflowsParams,
    ) -> Result<Option<PaginatedResponse<Workflow>>, ApiError> {
        let query = Query::new()
            .opt("limit", params.limit)
            .opt("page", params.page)
            .opt("search", params.search.as_deref())
            .opt("category", params.category.as_deref())
            .opt("status", params.status)
            .flag("includeArchived", params.include_archived.unwrap_or(false));
        self.get("/workflows", query).await
    }

    pub async fn get_workflow(&self, id: Uuid) -> Result<Option<Workflow>, ApiError> {
        self.get(&format!("/workflows/{}", id), Query::new()).await
    }

    pub async fn create_workflow(&self, input: &CreateWorkflowInput) -> Result<Option<Workflow>, ApiError> {
        self.post("/workflows", input).await
    }

    pub async fn update_workflow(
        &self,
        id: Uuid,
        input: &UpdateWorkflowInput,
    ) -> Result<Option<Workflow>, ApiError> {
        self.patch(&format!("/workflows/{}", id), input).await
    }

    pub async fn delete_workflow(&self, id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/workflows/{}", id)).await
    }

    /// Check that every resource a workflow references still exists.
    pub async fn validate_workflow(&self, id: Uuid) -> Result<Option<WorkflowValidationResult>, ApiError> {
        self.get(&format!("/workflows/{}/validate", id), Query::new())
            .await
    }

    pub async fn execute_workflow(
        &self,
        id: Uuid,
        input: &ExecuteWorkflowInput,
    ) -> Result<Option<WorkflowExecution>, ApiError> {
        self.post(&format!("/workflows/{}/execute", id), input).await
    }

    pub async fn get_workflow_executions(
        &self,
        workflow_id: Uuid,
        params: &PageParams,
    ) -> Result<Option<PaginatedResponse<WorkflowExecution>>, ApiError> {
        let query = Query::new()
            .opt("page", params.page)
            .opt("limit", params.limit);
        self.get(&format!("/workflows/{}/executions", workflow_id), query)
            .await
    }

    /// Executions across every workflow, optionally narrowed to one.
    pub async fn get_all_workflow_executions(
        &self,
        workflow_id: Option<Uuid>,
        params: &PageParams,
    ) -> Result<Option<PaginatedResponse<WorkflowExecution>>, ApiError> {
        let query = Query::new()
            .opt("workflowId", workflow_id)
            .opt("page", params.page)
            .opt("limit", params.limit);
        self.get("/workflows/all/executions", query).await
    }

    pub async fn get_workflow_execution(&self, id: Uuid) -> Result<Option<WorkflowExecution>, ApiError> {
        self.get(&format!("/workflows/executions/{}", id), Query::new())
            .await
    }
}
