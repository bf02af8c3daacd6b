//! Code quality tools: snapshots, metrics, issues and analytics.

use rmcp::{
    handler::server::wrapper::Parameters, model::CallToolResult, schemars::JsonSchema, tool,
    tool_router, ErrorData as McpError,
};
use serde::Deserialize;

use crate::mcp::{
    DeletedResponse, QualityAnalysisCompleted, QualityAnalysisStarted, QualityIssueReported,
    QualityIssuesReported, QualityMetricRecorded, ThinkPromptServer,
};
use crate::models::*;

// ============================================================
// Request Types
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordQualityMetricRequest {
    #[schemars(description = "The UUID of the active quality snapshot")]
    pub snapshot_id: String,
    #[serde(flatten)]
    pub metric: RecordQualityMetricInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompleteQualityAnalysisRequest {
    #[schemars(description = "The UUID of the snapshot to complete")]
    pub snapshot_id: String,
    #[schemars(description = "Final status (default: completed)")]
    pub status: Option<SnapshotOutcome>,
    #[schemars(description = "Summary notes about the analysis")]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotIdRequest {
    #[schemars(description = "The UUID of the quality snapshot")]
    pub snapshot_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetQualitySnapshotRequest {
    #[schemars(description = "The UUID of the quality snapshot")]
    pub snapshot_id: String,
    #[schemars(description = "Include all recorded metrics (default: false)")]
    pub include_metrics: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QualityOverviewRequest {
    #[schemars(description = "The UUID of the project")]
    pub project_id: String,
    #[serde(flatten)]
    pub params: QualityOverviewParams,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QualityTrendsRequest {
    #[schemars(description = "The UUID of the project")]
    pub project_id: String,
    #[serde(flatten)]
    pub params: QualityTrendsParams,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QualityIssueIdRequest {
    #[schemars(description = "The UUID of the quality issue")]
    pub issue_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQualityIssueStatusRequest {
    #[schemars(description = "The UUID of the quality issue")]
    pub issue_id: String,
    #[schemars(description = "New status")]
    pub status: QualityIssueStatus,
}

#[tool_router(router = quality_tools, vis = "pub(crate)")]
impl ThinkPromptServer {
    // ============================================================
    // Snapshot Tools
    // ============================================================

    #[tool(
        description = "Start a new quality analysis snapshot for a project. Use this at the beginning of a code quality analysis session. Returns a snapshot ID for recording metrics."
    )]
    pub async fn start_quality_analysis(
        &self,
        params: Parameters<CreateQualitySnapshotInput>,
    ) -> Result<CallToolResult, McpError> {
        let mut input = params.0;
        input.source.get_or_insert(SnapshotSource::Mcp);

        let Some(snapshot) = self
            .client
            .create_quality_snapshot(&input)
            .await
            .map_err(Self::api_err)?
        else {
            return Self::absent();
        };
        tracing::info!(snapshot_id = %snapshot.id, "Started quality analysis");

        Self::json(&QualityAnalysisStarted {
            snapshot_id: snapshot.id,
            name: snapshot.name,
            status: snapshot.status,
            started_at: snapshot.started_at,
            message: format!(
                "Quality analysis started. Use snapshot ID \"{}\" to record metrics.",
                snapshot.id
            ),
        })
    }

    #[tool(
        description = "Record a quality metric during an active analysis snapshot. Use for eslint results, type coverage, test coverage, complexity, etc."
    )]
    pub async fn record_quality_metric(
        &self,
        params: Parameters<RecordQualityMetricRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let snapshot_id = Self::parse_uuid(&req.snapshot_id)?;

        let Some(metric) = self
            .client
            .record_quality_metric(snapshot_id, &req.metric)
            .await
            .map_err(Self::api_err)?
        else {
            return Self::absent();
        };

        Self::json(&QualityMetricRecorded {
            metric_id: metric.id,
            metric_type: metric.metric_type,
            message: format!("Metric \"{}\" recorded successfully.", metric.metric_name),
            metric_name: metric.metric_name,
            score: metric.score,
        })
    }

    #[tool(
        description = "Complete a quality analysis snapshot and calculate summary scores. Call this when analysis is done."
    )]
    pub async fn complete_quality_analysis(
        &self,
        params: Parameters<CompleteQualityAnalysisRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let snapshot_id = Self::parse_uuid(&req.snapshot_id)?;
        let input = CompleteQualitySnapshotInput {
            status: Some(req.status.unwrap_or(SnapshotOutcome::Completed)),
            notes: req.notes,
        };

        let Some(completion) = self
            .client
            .complete_quality_snapshot(snapshot_id, &input)
            .await
            .map_err(Self::api_err)?
        else {
            return Self::absent();
        };
        tracing::info!(snapshot_id = %completion.id, status = %completion.status, "Completed quality analysis");

        Self::json(&QualityAnalysisCompleted {
            snapshot_id: completion.id,
            status: completion.status,
            duration_ms: completion.duration_ms,
            summary: completion.summary,
            message: completion.message,
        })
    }

    #[tool(
        description = "Delete a quality snapshot and all its related metrics and issues. Use this to clean up empty or invalid snapshots."
    )]
    pub async fn delete_quality_snapshot(
        &self,
        params: Parameters<SnapshotIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.snapshot_id)?;

        self.client
            .delete_quality_snapshot(id)
            .await
            .map_err(Self::api_err)?;

        Self::json(&DeletedResponse::new(format!(
            "Quality snapshot {} deleted successfully",
            id
        )))
    }

    #[tool(description = "List quality snapshots for a project with optional filters.")]
    pub async fn list_quality_snapshots(
        &self,
        params: Parameters<ListQualitySnapshotsParams>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;

        let snapshots = self
            .client
            .list_quality_snapshots(&req)
            .await
            .map_err(Self::api_err)?;

        Self::json(&snapshots)
    }

    #[tool(
        description = "Get a quality snapshot with its summary, optionally including every recorded metric."
    )]
    pub async fn get_quality_snapshot(
        &self,
        params: Parameters<GetQualitySnapshotRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.snapshot_id)?;

        let snapshot = self
            .client
            .get_quality_snapshot(id, req.include_metrics.unwrap_or(false))
            .await
            .map_err(Self::api_err)?;

        Self::json(&snapshot)
    }

    // ============================================================
    // Issue Tools
    // ============================================================

    #[tool(
        description = "Report a code quality issue found during analysis. Can include location info, rule details, and fix suggestions."
    )]
    pub async fn report_quality_issue(
        &self,
        params: Parameters<CreateQualityIssueInput>,
    ) -> Result<CallToolResult, McpError> {
        let Some(issue) = self
            .client
            .create_quality_issue(&params.0)
            .await
            .map_err(Self::api_err)?
        else {
            return Self::absent();
        };

        Self::json(&QualityIssueReported {
            issue_id: issue.id,
            message: format!("Quality issue \"{}\" reported successfully.", issue.title),
            title: issue.title,
            category: issue.category,
            severity: issue.severity,
        })
    }

    #[tool(
        description = "Report multiple quality issues at once. More efficient for large analysis results."
    )]
    pub async fn bulk_report_quality_issues(
        &self,
        params: Parameters<BulkCreateQualityIssuesInput>,
    ) -> Result<CallToolResult, McpError> {
        let Some(result) = self
            .client
            .bulk_create_quality_issues(&params.0)
            .await
            .map_err(Self::api_err)?
        else {
            return Self::absent();
        };

        Self::json(&QualityIssuesReported {
            created: result.created,
            message: format!("{} quality issues reported successfully.", result.created),
        })
    }

    #[tool(description = "List quality issues with optional filters.")]
    pub async fn list_quality_issues(
        &self,
        params: Parameters<ListQualityIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;

        let issues = self
            .client
            .list_quality_issues(&req)
            .await
            .map_err(Self::api_err)?;

        Self::json(&issues)
    }

    #[tool(description = "Get details of a specific quality issue by ID.")]
    pub async fn get_quality_issue(
        &self,
        params: Parameters<QualityIssueIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.issue_id)?;

        let issue = self
            .client
            .get_quality_issue(id)
            .await
            .map_err(Self::api_err)?;

        Self::json(&issue)
    }

    #[tool(
        description = "Change the triage status of a quality issue (new, acknowledged, fixed, wont_fix)."
    )]
    pub async fn update_quality_issue_status(
        &self,
        params: Parameters<UpdateQualityIssueStatusRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.issue_id)?;

        let issue = self
            .client
            .update_quality_issue_status(id, req.status)
            .await
            .map_err(Self::api_err)?;

        Self::json(&issue)
    }

    // ============================================================
    // Analytics Tools
    // ============================================================

    #[tool(
        description = "Get quality analytics overview for a project including scores, trends, and issue breakdown."
    )]
    pub async fn get_quality_overview(
        &self,
        params: Parameters<QualityOverviewRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let project_id = Self::parse_uuid(&req.project_id)?;

        let overview = self
            .client
            .get_quality_overview(project_id, &req.params)
            .await
            .map_err(Self::api_err)?;

        Self::json(&overview)
    }

    #[tool(description = "Get quality metric trends over time for a project.")]
    pub async fn get_quality_trends(
        &self,
        params: Parameters<QualityTrendsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let project_id = Self::parse_uuid(&req.project_id)?;

        let trends = self
            .client
            .get_quality_trends(project_id, &req.params)
            .await
            .map_err(Self::api_err)?;

        Self::json(&trends)
    }
}
