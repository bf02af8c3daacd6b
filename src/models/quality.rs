use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::JsonObject;

wire_enum! {
    pub enum SnapshotStatus {
        Running => "running",
        Completed => "completed",
        Failed => "failed",
    }
}

wire_enum! {
    /// Terminal states accepted by the snapshot completion endpoint.
    pub enum SnapshotOutcome {
        Completed => "completed",
        Failed => "failed",
    }
}

wire_enum! {
    pub enum SnapshotSource {
        Mcp => "mcp",
        Ci => "ci",
        Manual => "manual",
    }
}

wire_enum! {
    pub enum QualityMetricType {
        Eslint => "eslint",
        Typescript => "typescript",
        TestCoverage => "test_coverage",
        CyclomaticComplexity => "cyclomatic_complexity",
        CodeDuplication => "code_duplication",
        BundleSize => "bundle_size",
        DependencyHealth => "dependency_health",
        DeadCode => "dead_code",
        PatternAdherence => "pattern_adherence",
        Custom => "custom",
    }
}

wire_enum! {
    /// Metric selector for trend queries. `overall` aggregates every metric type.
    pub enum TrendMetric {
        Overall => "overall",
        Eslint => "eslint",
        Typescript => "typescript",
        TestCoverage => "test_coverage",
        CyclomaticComplexity => "cyclomatic_complexity",
        CodeDuplication => "code_duplication",
        BundleSize => "bundle_size",
        DependencyHealth => "dependency_health",
        DeadCode => "dead_code",
        PatternAdherence => "pattern_adherence",
        Custom => "custom",
    }
}

wire_enum! {
    pub enum QualitySeverity {
        Error => "error",
        Warning => "warning",
        Info => "info",
        Hint => "hint",
    }
}

wire_enum! {
    pub enum QualityIssueStatus {
        New => "new",
        Acknowledged => "acknowledged",
        Fixed => "fixed",
        WontFix => "wont_fix",
    }
}

wire_enum! {
    pub enum QualityCategory {
        Lint => "lint",
        Type => "type",
        Coverage => "coverage",
        Complexity => "complexity",
        Duplication => "duplication",
        Bundle => "bundle",
        Dependency => "dependency",
        DeadCode => "dead_code",
        Pattern => "pattern",
        Security => "security",
    }
}

wire_enum! {
    pub enum AnalyticsPeriod {
        Week => "7d",
        Month => "30d",
        Quarter => "90d",
        Year => "1y",
        All => "all",
    }
}

wire_enum! {
    pub enum Granularity {
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
    }
}

wire_enum! {
    pub enum Trend {
        Up => "up",
        Down => "down",
        Stable => "stable",
    }
}

/// A static analysis run. Metrics and issues attach to it until it is completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualitySnapshot {
    pub id: Uuid,
    pub tenant_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub name: Option<String>,
    pub source: SnapshotSource,
    pub status: SnapshotStatus,
    pub git_branch: Option<String>,
    pub git_commit_sha: Option<String>,
    pub metadata: Option<JsonObject>,
    pub summary: Option<QualitySnapshotSummary>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<QualityMetric>>,
}

/// Numeric readings of one analysis tool, keyed by reading name (`score`, `errors`, ...).
pub type SummarySection = BTreeMap<String, f64>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualitySnapshotSummary {
    #[serde(rename = "overall_score", skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eslint: Option<SummarySection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typescript: Option<SummarySection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<SummarySection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<SummarySection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplication: Option<SummarySection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<SummarySection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<SummarySection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dead_code: Option<SummarySection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<SummarySection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetric {
    pub id: Uuid,
    pub snapshot_id: Uuid,
    pub metric_type: QualityMetricType,
    pub metric_name: String,
    pub value: Value,
    pub score: Option<f64>,
    pub metadata: Option<JsonObject>,
    pub created_at: DateTime<Utc>,
}

/// A finding at a source location, deduplicated remotely by rule and position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityIssue {
    pub id: Uuid,
    pub tenant_id: Option<Uuid>,
    pub snapshot_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub category: QualityCategory,
    pub severity: QualitySeverity,
    pub status: QualityIssueStatus,
    pub file_path: Option<String>,
    pub line_number: Option<u32>,
    pub column_number: Option<u32>,
    pub end_line: Option<u32>,
    pub end_column: Option<u32>,
    pub code_snippet: Option<String>,
    pub rule_id: Option<String>,
    pub rule_url: Option<String>,
    pub tool: Option<String>,
    pub suggested_fix: Option<String>,
    #[serde(default)]
    pub auto_fixable: bool,
    pub first_seen_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
    #[serde(default)]
    pub occurrence_count: u32,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQualitySnapshotInput {
    /// Optional project UUID to link this analysis to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    /// Analysis name (e.g., "Pre-release check")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Who triggered the analysis (default: mcp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SnapshotSource>,
    /// Git branch being analyzed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,
    /// Git commit SHA being analyzed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_commit_sha: Option<String>,
    /// Additional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CompleteQualitySnapshotInput {
    /// Final status (default: completed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SnapshotOutcome>,
    /// Summary notes about the analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordQualityMetricInput {
    /// Type of quality metric
    pub metric_type: QualityMetricType,
    /// Metric name (e.g., "ESLint Errors", "Line Coverage")
    pub metric_name: String,
    /// Metric values (e.g., {"errors": 5, "warnings": 12})
    pub value: Value,
    /// Normalized score 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Additional context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQualityIssueInput {
    /// Snapshot UUID this issue was found in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<Uuid>,
    /// Project UUID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    /// Brief issue title
    pub title: String,
    /// Detailed description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Issue category
    pub category: QualityCategory,
    /// Issue severity (default: warning)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<QualitySeverity>,
    /// File path relative to project root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// Line number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
    /// Column number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_number: Option<u32>,
    /// End line number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_line: Option<u32>,
    /// End column number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_column: Option<u32>,
    /// Relevant code snippet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    /// Rule identifier (e.g., "no-unused-vars")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    /// Link to rule documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_url: Option<String>,
    /// Tool that found the issue (e.g., "eslint", "tsc")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    /// Suggested fix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
    /// Whether the issue can be fixed automatically
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_fixable: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BulkCreateQualityIssuesInput {
    /// Issues to report in one request
    pub issues: Vec<CreateQualityIssueInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkCreateQualityIssuesResponse {
    pub created: u32,
    #[serde(default)]
    pub issues: Vec<QualityIssue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQualityIssueInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<QualityCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<QualitySeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<QualityIssueStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_column: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_fixable: Option<bool>,
}

/// Body of `PATCH /quality-issues/{id}/status`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct QualityIssueStatusBody {
    pub status: QualityIssueStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualitySnapshotCompletionResponse {
    pub id: Uuid,
    pub status: SnapshotOutcome,
    pub duration_ms: u64,
    #[serde(default)]
    pub summary: QualitySnapshotSummary,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityOverview {
    pub project_id: Uuid,
    pub project_name: Option<String>,
    pub overall_score: Option<f64>,
    pub overall_trend: Option<Trend>,
    #[serde(default)]
    pub metrics: HashMap<String, MetricOverview>,
    pub issues: IssueOverview,
    pub latest_snapshot: Option<LatestSnapshot>,
    #[serde(default)]
    pub snapshot_count: u32,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricOverview {
    pub score: Option<f64>,
    pub value: Option<Value>,
    pub trend: Option<Trend>,
    pub change_percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueOverview {
    pub total: u32,
    #[serde(default)]
    pub by_status: HashMap<String, u32>,
    #[serde(default)]
    pub by_severity: HashMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestSnapshot {
    pub id: Uuid,
    pub completed_at: Option<DateTime<Utc>>,
    pub source: SnapshotSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityTrends {
    pub project_id: Uuid,
    pub metric_type: String,
    pub granularity: Granularity,
    #[serde(default)]
    pub data_points: Vec<TrendPoint>,
    pub average_score: Option<f64>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    pub change_percent: Option<f64>,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    pub score: Option<f64>,
    pub snapshot_id: Option<Uuid>,
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListQualitySnapshotsParams {
    #[schemars(description = "Filter by project UUID")]
    pub project_id: Option<Uuid>,
    #[schemars(description = "Filter by snapshot status")]
    pub status: Option<SnapshotStatus>,
    #[schemars(description = "Filter by source")]
    pub source: Option<SnapshotSource>,
    #[schemars(description = "Page number (default: 1)")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page (default: 20)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListQualityIssuesParams {
    #[schemars(description = "Filter by snapshot UUID")]
    pub snapshot_id: Option<Uuid>,
    #[schemars(description = "Filter by project UUID")]
    pub project_id: Option<Uuid>,
    #[schemars(description = "Filter by category")]
    pub category: Option<QualityCategory>,
    #[schemars(description = "Filter by severity")]
    pub severity: Option<QualitySeverity>,
    #[schemars(description = "Filter by status")]
    pub status: Option<QualityIssueStatus>,
    #[schemars(description = "Filter by tool (e.g., \"eslint\")")]
    pub tool: Option<String>,
    #[schemars(description = "Filter by rule ID")]
    pub rule_id: Option<String>,
    #[schemars(description = "Filter by file path")]
    pub file_path: Option<String>,
    #[schemars(description = "Search in title and description")]
    pub search: Option<String>,
    #[schemars(description = "Page number (default: 1)")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page (default: 20)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QualityOverviewParams {
    #[schemars(description = "Time period (default: 30d)")]
    pub period: Option<AnalyticsPeriod>,
    #[schemars(description = "Data granularity (default: daily)")]
    pub granularity: Option<Granularity>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QualityTrendsParams {
    #[schemars(description = "Time period (default: 30d)")]
    pub period: Option<AnalyticsPeriod>,
    #[schemars(description = "Data granularity (default: daily)")]
    pub granularity: Option<Granularity>,
    #[schemars(description = "Metric type to chart (default: overall)")]
    pub metric_type: Option<TrendMetric>,
}
