use uuid::Uuid;

use super::{ApiClient, ApiError, Query};
use crate::models::*;

impl ApiClient {
    // ============================================================
    // Quality Snapshot Operations
    // ============================================================

    pub async fn create_quality_snapshot(
        &self,
        input: &CreateQualitySnapshotInput,
    ) -> Result<Option<QualitySnapshot>, ApiError> {
        self.post("/quality-snapshots", input).await
    }

    pub async fn list_quality_snapshots(
        &self,
        params: &ListQualitySnapshotsParams,
    ) -> Result<Option<PaginatedResponse<QualitySnapshot>>, ApiError> {
        let query = Query::new()
            .opt("projectId", params.project_id)
            .opt("status", params.status)
            .opt("source", params.source)
            .opt("page", params.page)
            .opt("limit", params.limit);
        self.get("/quality-snapshots", query).await
    }

    pub async fn get_quality_snapshot(
        &self,
        id: Uuid,
        include_metrics: bool,
    ) -> Result<Option<QualitySnapshot>, ApiError> {
        let query = Query::new().flag("includeMetrics", include_metrics);
        self.get(&format!("/quality-snapshots/{}", id), query).await
    }

    pub async fn record_quality_metric(
        &self,
        snapshot_id: Uuid,
        input: &RecordQualityMetricInput,
    ) -> Result<Option<QualityMetric>, ApiError> {
        self.post(&format!("/quality-snapshots/{}/metrics", snapshot_id), input)
            .await
    }

    pub async fn get_quality_snapshot_metrics(
        &self,
        snapshot_id: Uuid,
    ) -> Result<Option<Vec<QualityMetric>>, ApiError> {
        self.get(
            &format!("/quality-snapshots/{}/metrics", snapshot_id),
            Query::new(),
        )
        .await
    }

    pub async fn complete_quality_snapshot(
        &self,
        snapshot_id: Uuid,
        input: &CompleteQualitySnapshotInput,
    ) -> Result<Option<QualitySnapshotCompletionResponse>, ApiError> {
        self.post(&format!("/quality-snapshots/{}/complete", snapshot_id), input)
            .await
    }

    pub async fn delete_quality_snapshot(&self, snapshot_id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/quality-snapshots/{}", snapshot_id))
            .await
    }

    // ============================================================
    // Quality Issue Operations
    // ============================================================

    pub async fn create_quality_issue(
        &self,
        input: &CreateQualityIssueInput,
    ) -> Result<Option<QualityIssue>, ApiError> {
        self.post("/quality-issues", input).await
    }

    pub async fn bulk_create_quality_issues(
        &self,
        input: &BulkCreateQualityIssuesInput,
    ) -> Result<Option<BulkCreateQualityIssuesResponse>, ApiError> {
        self.post("/quality-issues/bulk", input).await
    }

    pub async fn list_quality_issues(
        &self,
        params: &ListQualityIssuesParams,
    ) -> Result<Option<PaginatedResponse<QualityIssue>>, ApiError> {
        let query = Query::new()
            .opt("snapshotId", params.snapshot_id)
            .opt("projectId", params.project_id)
            .opt("category", params.category)
            .opt("severity", params.severity)
            .opt("status", params.status)
            .opt("tool", params.tool.as_deref())
            .opt("ruleId", params.rule_id.as_deref())
            .opt("filePath", params.file_path.as_deref())
            .opt("search", params.search.as_deref())
            .opt("page", params.page)
            .opt("limit", params.limit);
        self.get("/quality-issues", query).await
    }

    pub async fn get_quality_issue(&self, id: Uuid) -> Result<Option<QualityIssue>, ApiError> {
        self.get(&format!("/quality-issues/{}", id), Query::new())
            .await
    }

    pub async fn update_quality_issue(
        &self,
        id: Uuid,
        input: &UpdateQualityIssueInput,
    ) -> Result<Option<QualityIssue>, ApiError> {
        self.patch(&format!("/quality-issues/{}", id), input).await
    }

    pub async fn update_quality_issue_status(
        &self,
        id: Uuid,
        status: QualityIssueStatus,
    ) -> Result<Option<QualityIssue>, ApiError> {
        self.patch(
            &format!("/quality-issues/{}/status", id),
            &QualityIssueStatusBody { status },
        )
        .await
    }

    // ============================================================
    // Quality Analytics
    // ============================================================

    pub async fn get_quality_overview(
        &self,
        project_id: Uuid,
        params: &QualityOverviewParams,
    ) -> Result<Option<QualityOverview>, ApiError> {
        let query = Query::new()
            .opt("period", params.period)
            .opt("granularity", params.granularity);
        self.get(&format!("/projects/{}/quality-analytics", project_id), query)
            .await
    }

    pub async fn get_quality_trends(
        &self,
        project_id: Uuid,
        params: &QualityTrendsParams,
    ) -> Result<Option<QualityTrends>, ApiError> {
        let query = Query::new()
            .opt("period", params.period)
            .opt("granularity", params.granularity)
            .opt("metricType", params.metric_type);
        self.get(
            &format!("/projects/{}/quality-analytics/trends", project_id),
            query,
        )
        .await
    }
}
