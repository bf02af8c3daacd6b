use uuid::Uuid;

use super::{ApiClient, ApiError, Query};
use crate::models::*;

impl ApiClient {
    // ============================================================
    // Test Session Operations
    // ============================================================

    pub async fn create_test_session(
        &self,
        input: &CreateTestSessionInput,
    ) -> Result<Option<TestSession>, ApiError> {
        self.post("/test-sessions", input).await
    }

    pub async fn list_test_sessions(
        &self,
        params: &ListTestSessionsParams,
    ) -> Result<Option<PaginatedResponse<TestSession>>, ApiError> {
        let query = Query::new()
            .opt("projectId", params.project_id)
            .opt("featureId", params.feature_id)
            .opt("status", params.status)
            .opt("triggeredBy", params.triggered_by)
            .flag("includeMetrics", params.include_metrics.unwrap_or(false))
            .opt("page", params.page)
            .opt("limit", params.limit);
        self.get("/test-sessions", query).await
    }

    pub async fn get_test_session(
        &self,
        id: Uuid,
        include_metrics: bool,
    ) -> Result<Option<TestSession>, ApiError> {
        let query = Query::new().flag("includeMetrics", include_metrics);
        self.get(&format!("/test-sessions/{}", id), query).await
    }

    /// Record one observation. The body is reshaped into `{metricType, metricData}`.
    pub async fn record_metric(
        &self,
        session_id: Uuid,
        input: RecordMetricInput,
    ) -> Result<Option<TestMetric>, ApiError> {
        let payload = MetricPayload::from(input);
        self.post(&format!("/test-sessions/{}/metrics", session_id), &payload)
            .await
    }

    pub async fn get_session_metrics(&self, session_id: Uuid) -> Result<Option<Vec<TestMetric>>, ApiError> {
        self.get(&format!("/test-sessions/{}/metrics", session_id), Query::new())
            .await
    }

    /// Close a session. The server computes the summary.
    pub async fn complete_session(
        &self,
        session_id: Uuid,
        input: &CompleteSessionInput,
    ) -> Result<Option<SessionCompletionResponse>, ApiError> {
        self.post(&format!("/test-sessions/{}/complete", session_id), input)
            .await
    }

    // ============================================================
    // Test Issue Operations
    // ============================================================

    pub async fn create_test_issue(&self, input: &CreateTestIssueInput) -> Result<Option<TestIssue>, ApiError> {
        self.post("/test-issues", input).await
    }

    pub async fn list_test_issues(
        &self,
        params: &ListTestIssuesParams,
    ) -> Result<Option<PaginatedResponse<TestIssue>>, ApiError> {
        let query = Query::new()
            .opt("sessionId", params.session_id)
            .opt("projectId", params.project_id)
            .opt("featureId", params.feature_id)
            .opt("taskId", params.task_id)
            .opt("issueType", params.issue_type)
            .opt("severity", params.severity)
            .opt("status", params.status)
            .opt("search", params.search.as_deref())
            .opt("page", params.page)
            .opt("limit", params.limit);
        self.get("/test-issues", query).await
    }

    pub async fn get_test_issue(&self, id: Uuid) -> Result<Option<TestIssue>, ApiError> {
        self.get(&format!("/test-issues/{}", id), Query::new()).await
    }

    pub async fn update_test_issue(
        &self,
        id: Uuid,
        input: &UpdateTestIssueInput,
    ) -> Result<Option<TestIssue>, ApiError> {
        self.patch(&format!("/test-issues/{}", id), input).await
    }
}
