//! Test session and test issue tools.
//!
//! A session is opened with `start_test_session`, fed with `record_metric` and
//! `report_issue`, and closed with `end_test_session`, at which point the server computes
//! the summary.

use rmcp::{
    handler::server::wrapper::Parameters, model::CallToolResult, schemars::JsonSchema, tool,
    tool_router, ErrorData as McpError,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::mcp::{
    TestIssueReported, TestIssueUpdated, TestSessionEnded, TestSessionStarted, ThinkPromptServer,
};
use crate::models::*;

// ============================================================
// Request Types
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartTestSessionRequest {
    #[schemars(description = "Session name (e.g., \"Homepage Testing - Jan 2026\")")]
    pub name: String,
    #[schemars(description = "Optional project UUID to link this session to")]
    pub project_id: Option<Uuid>,
    #[schemars(description = "Optional feature UUID to link this session to")]
    pub feature_id: Option<Uuid>,
    #[schemars(description = "Optional metadata (e.g., browser, OS, test plan)")]
    pub metadata: Option<JsonObject>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetricRequest {
    #[schemars(description = "The UUID of the active test session")]
    pub session_id: String,
    #[serde(flatten)]
    pub metric: RecordMetricInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EndTestSessionRequest {
    #[schemars(description = "The UUID of the session to complete")]
    pub session_id: String,
    #[schemars(description = "Final session status (default: completed)")]
    pub status: Option<SessionOutcome>,
    #[schemars(description = "Final notes or summary about the session")]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTestSessionRequest {
    #[schemars(description = "The UUID of the test session")]
    pub session_id: String,
    #[schemars(description = "Include all metrics in the response (default: false)")]
    pub include_metrics: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestIssueIdRequest {
    #[schemars(description = "The UUID of the test issue")]
    pub issue_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestIssueRequest {
    #[schemars(description = "The UUID of the test issue to update")]
    pub issue_id: String,
    #[serde(flatten)]
    pub changes: UpdateTestIssueInput,
}

#[tool_router(router = testing_tools, vis = "pub(crate)")]
impl ThinkPromptServer {
    // ============================================================
    // Test Session Tools
    // ============================================================

    #[tool(
        description = "Start a new test session for tracking QA metrics and issues during Playwright testing. Returns a session ID to use with record_metric and end_test_session."
    )]
    pub async fn start_test_session(
        &self,
        params: Parameters<StartTestSessionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let input = CreateTestSessionInput {
            project_id: req.project_id,
            feature_id: req.feature_id,
            name: Some(req.name.clone()),
            triggered_by: None,
            metadata: req.metadata,
        };

        let Some(session) = self
            .client
            .create_test_session(&input)
            .await
            .map_err(Self::api_err)?
        else {
            return Self::absent();
        };
        tracing::info!(session_id = %session.id, "Started test session");

        Self::json(&TestSessionStarted {
            session_id: session.id,
            status: session.status,
            started_at: session.started_at,
            message: format!(
                "Test session \"{}\" started. Use record_metric to log metrics and end_test_session to complete.",
                req.name
            ),
        })
    }

    #[tool(
        description = "Record a test metric during an active session. Use for tracking network requests, console messages, interactions, page visits, etc."
    )]
    pub async fn record_metric(
        &self,
        params: Parameters<RecordMetricRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let session_id = Self::parse_uuid(&req.session_id)?;

        let metric = self
            .client
            .record_metric(session_id, req.metric)
            .await
            .map_err(Self::api_err)?;

        Self::json(&metric)
    }

    #[tool(
        description = "Report a bug or issue found during testing. Can be linked to a session, project, feature, or task."
    )]
    pub async fn report_issue(
        &self,
        params: Parameters<CreateTestIssueInput>,
    ) -> Result<CallToolResult, McpError> {
        let Some(issue) = self
            .client
            .create_test_issue(&params.0)
            .await
            .map_err(Self::api_err)?
        else {
            return Self::absent();
        };

        Self::json(&TestIssueReported {
            issue_id: issue.id,
            message: format!("Issue \"{}\" reported successfully.", issue.title),
            title: issue.title,
            severity: issue.severity,
            status: issue.status,
        })
    }

    #[tool(
        description = "Complete a test session and get a summary of metrics and issues found. Calculates duration, success rates, and aggregates metrics by type."
    )]
    pub async fn end_test_session(
        &self,
        params: Parameters<EndTestSessionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let session_id = Self::parse_uuid(&req.session_id)?;
        let input = CompleteSessionInput {
            status: Some(req.status.unwrap_or(SessionOutcome::Completed)),
            notes: req.notes,
        };

        let Some(completion) = self
            .client
            .complete_session(session_id, &input)
            .await
            .map_err(Self::api_err)?
        else {
            return Self::absent();
        };
        tracing::info!(session_id = %completion.id, status = %completion.status, "Ended test session");

        Self::json(&TestSessionEnded {
            session_id: completion.id,
            status: completion.status,
            duration_ms: completion.duration_ms,
            summary: completion.summary,
            message: completion.message,
        })
    }

    #[tool(description = "List test sessions with optional filters. Returns paginated results.")]
    pub async fn list_test_sessions(
        &self,
        params: Parameters<ListTestSessionsParams>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;

        let sessions = self
            .client
            .list_test_sessions(&req)
            .await
            .map_err(Self::api_err)?;

        Self::json(&sessions)
    }

    #[tool(
        description = "Get details of a specific test session, optionally including all metrics."
    )]
    pub async fn get_test_session(
        &self,
        params: Parameters<GetTestSessionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.session_id)?;

        let session = self
            .client
            .get_test_session(id, req.include_metrics.unwrap_or(false))
            .await
            .map_err(Self::api_err)?;

        Self::json(&session)
    }

    // ============================================================
    // Test Issue Tools
    // ============================================================

    #[tool(description = "List test issues with optional filters. Returns paginated results.")]
    pub async fn list_test_issues(
        &self,
        params: Parameters<ListTestIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;

        let issues = self
            .client
            .list_test_issues(&req)
            .await
            .map_err(Self::api_err)?;

        Self::json(&issues)
    }

    #[tool(description = "Get details of a specific test issue by ID.")]
    pub async fn get_test_issue(
        &self,
        params: Parameters<TestIssueIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.issue_id)?;

        let issue = self.client.get_test_issue(id).await.map_err(Self::api_err)?;

        Self::json(&issue)
    }

    #[tool(
        description = "Update a test issue (e.g., change status, severity, or add more details)."
    )]
    pub async fn update_test_issue(
        &self,
        params: Parameters<UpdateTestIssueRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.issue_id)?;

        let Some(issue) = self
            .client
            .update_test_issue(id, &req.changes)
            .await
            .map_err(Self::api_err)?
        else {
            return Self::absent();
        };

        Self::json(&TestIssueUpdated {
            issue_id: issue.id,
            message: format!("Issue \"{}\" updated successfully.", issue.title),
            title: issue.title,
            status: issue.status,
            severity: issue.severity,
        })
    }
}
