use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::JsonObject;

wire_enum! {
    pub enum TestSessionStatus {
        Running => "running",
        Completed => "completed",
        Failed => "failed",
        Cancelled => "cancelled",
    }
}

wire_enum! {
    pub enum TestSessionTrigger {
        Ai => "ai",
        Manual => "manual",
        Ci => "ci",
    }
}

wire_enum! {
    /// Final states a session may be closed with.
    pub enum SessionOutcome {
        Completed => "completed",
        Failed => "failed",
        Cancelled => "cancelled",
    }
}

wire_enum! {
    pub enum MetricType {
        Network => "network",
        Console => "console",
        Interaction => "interaction",
        PageVisit => "page_visit",
        Screenshot => "screenshot",
        Performance => "performance",
        Custom => "custom",
    }
}

wire_enum! {
    pub enum IssueType {
        Bug => "bug",
        Ux => "ux",
        Performance => "performance",
        Accessibility => "accessibility",
        Security => "security",
        Other => "other",
    }
}

wire_enum! {
    pub enum IssueSeverity {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

wire_enum! {
    pub enum IssueStatus {
        New => "new",
        Confirmed => "confirmed",
        FalsePositive => "false_positive",
        Fixed => "fixed",
    }
}

/// A QA run that aggregates metrics and issues until it is completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSession {
    pub id: Uuid,
    pub tenant_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub feature_id: Option<Uuid>,
    pub name: Option<String>,
    pub triggered_by: TestSessionTrigger,
    pub status: TestSessionStatus,
    pub metadata: Option<JsonObject>,
    pub summary: Option<JsonObject>,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub duration_ms: Option<u64>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<TestMetric>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<TestIssue>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestMetric {
    pub id: Uuid,
    pub session_id: Uuid,
    pub metric_type: MetricType,
    pub metric_name: String,
    pub value: Value,
    pub metadata: Option<JsonObject>,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A defect found during testing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestIssue {
    pub id: Uuid,
    pub tenant_id: Option<Uuid>,
    pub session_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub feature_id: Option<Uuid>,
    pub task_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub issue_type: IssueType,
    pub severity: IssueSeverity,
    pub status: IssueStatus,
    pub steps_to_reproduce: Option<Vec<String>>,
    pub expected_behavior: Option<String>,
    pub actual_behavior: Option<String>,
    pub environment: Option<JsonObject>,
    pub page_url: Option<String>,
    pub selector: Option<String>,
    pub screenshot_url: Option<String>,
    pub console_errors: Option<Vec<JsonObject>>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestSessionInput {
    /// Optional project UUID to link this session to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    /// Optional feature UUID to link this session to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_id: Option<Uuid>,
    /// Session name (e.g., "Homepage Testing - Jan 2026")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Who started the session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggered_by: Option<TestSessionTrigger>,
    /// Optional metadata (e.g., browser, OS, test plan)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
}

/// A metric as callers describe it. The client reshapes it before sending.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetricInput {
    /// Type of metric being recorded
    pub metric_type: MetricType,
    /// Name of the metric (e.g., "API call to /login", "Click on Submit button")
    pub metric_name: String,
    /// Metric value - can be number, string, object, or boolean
    pub value: Value,
    /// Additional context (status code, duration, selector, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
}

/// The metric body the test-session endpoint expects: `{metricType, metricData}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MetricPayload {
    pub metric_type: MetricType,
    pub metric_data: JsonObject,
}

impl From<RecordMetricInput> for MetricPayload {
    /// `metricData` holds `name` and `value`, then every metadata key. Metadata wins on
    /// collision.
    fn from(input: RecordMetricInput) -> Self {
        let mut metric_data = JsonObject::new();
        metric_data.insert("name".into(), Value::String(input.metric_name));
        metric_data.insert("value".into(), input.value);
        if let Some(metadata) = input.metadata {
            metric_data.extend(metadata);
        }
        Self {
            metric_type: input.metric_type,
            metric_data,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CompleteSessionInput {
    /// Final session status (default: completed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionOutcome>,
    /// Final notes or summary about the session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCompletionResponse {
    pub id: Uuid,
    pub status: SessionOutcome,
    pub duration_ms: u64,
    pub summary: SessionSummary,
    pub message: String,
}

/// Aggregates computed by the server when a session completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub total_duration_ms: u64,
    pub pages_visited: u32,
    #[serde(default)]
    pub unique_routes: Vec<String>,
    pub network_requests: NetworkSummary,
    pub console_messages: ConsoleSummary,
    pub interactions: InteractionSummary,
    pub issues_found: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSummary {
    pub total: u32,
    pub failed: u32,
    pub avg_duration_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleSummary {
    pub errors: u32,
    pub warnings: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionSummary {
    pub total: u32,
    pub successful: u32,
    pub failed: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestIssueInput {
    /// Optional test session UUID to link this issue to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
    /// Optional project UUID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    /// Optional feature UUID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_id: Option<Uuid>,
    /// Optional task UUID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<Uuid>,
    /// Brief title of the issue
    pub title: String,
    /// Detailed description of the issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Type of issue
    pub issue_type: IssueType,
    /// Issue severity
    pub severity: IssueSeverity,
    /// Steps to reproduce the issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps_to_reproduce: Option<Vec<String>>,
    /// What should happen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_behavior: Option<String>,
    /// What actually happened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_behavior: Option<String>,
    /// Environment info (browser, OS, viewport, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<JsonObject>,
    /// URL where the issue was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    /// CSS selector of the problematic element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    /// Screenshot URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot_url: Option<String>,
    /// Console errors captured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console_errors: Option<Vec<JsonObject>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestIssueInput {
    /// Updated title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Updated description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Updated issue type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<IssueType>,
    /// Updated severity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<IssueSeverity>,
    /// Updated status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IssueStatus>,
    /// Updated steps to reproduce
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps_to_reproduce: Option<Vec<String>>,
    /// Updated expected behavior
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_behavior: Option<String>,
    /// Updated actual behavior
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_behavior: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTestSessionsParams {
    #[schemars(description = "Filter by project UUID")]
    pub project_id: Option<Uuid>,
    #[schemars(description = "Filter by feature UUID")]
    pub feature_id: Option<Uuid>,
    #[schemars(description = "Filter by session status")]
    pub status: Option<TestSessionStatus>,
    #[schemars(description = "Filter by who started the session")]
    pub triggered_by: Option<TestSessionTrigger>,
    #[schemars(description = "Embed metrics in each session")]
    pub include_metrics: Option<bool>,
    #[schemars(description = "Page number (default: 1)")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page (default: 20)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTestIssuesParams {
    #[schemars(description = "Filter by test session UUID")]
    pub session_id: Option<Uuid>,
    #[schemars(description = "Filter by project UUID")]
    pub project_id: Option<Uuid>,
    #[schemars(description = "Filter by feature UUID")]
    pub feature_id: Option<Uuid>,
    #[schemars(description = "Filter by task UUID")]
    pub task_id: Option<Uuid>,
    #[schemars(description = "Filter by issue type")]
    pub issue_type: Option<IssueType>,
    #[schemars(description = "Filter by severity")]
    pub severity: Option<IssueSeverity>,
    #[schemars(description = "Filter by issue status")]
    pub status: Option<IssueStatus>,
    #[schemars(description = "Search in title and description")]
    pub search: Option<String>,
    #[schemars(description = "Page number (default: 1)")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page (default: 20)")]
    pub limit: Option<u32>,
}
