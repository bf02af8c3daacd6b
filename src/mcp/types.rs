//! Confirmation payloads returned by tools that do not echo the full record.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::*;

// ============================================================
// Workspace Responses
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceListResponse {
    pub current_workspace_id: Option<Uuid>,
    pub workspaces: Vec<Workspace>,
}

/// Plain `{message}` body for calls that have nothing else to report.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body returned after a delete.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub message: String,
}

impl DeletedResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

// ============================================================
// Test Session Responses
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSessionStarted {
    pub session_id: Uuid,
    pub status: TestSessionStatus,
    pub started_at: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestIssueReported {
    pub issue_id: Uuid,
    pub title: String,
    pub severity: IssueSeverity,
    pub status: IssueStatus,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestIssueUpdated {
    pub issue_id: Uuid,
    pub title: String,
    pub status: IssueStatus,
    pub severity: IssueSeverity,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSessionEnded {
    pub session_id: Uuid,
    pub status: SessionOutcome,
    pub duration_ms: u64,
    pub summary: SessionSummary,
    pub message: String,
}

// ============================================================
// Quality Responses
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityAnalysisStarted {
    pub snapshot_id: Uuid,
    pub name: Option<String>,
    pub status: SnapshotStatus,
    pub started_at: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetricRecorded {
    pub metric_id: Uuid,
    pub metric_type: QualityMetricType,
    pub metric_name: String,
    pub score: Option<f64>,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityIssueReported {
    pub issue_id: Uuid,
    pub title: String,
    pub category: QualityCategory,
    pub severity: QualitySeverity,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct QualityIssuesReported {
    pub created: u32,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityAnalysisCompleted {
    pub snapshot_id: Uuid,
    pub status: SnapshotOutcome,
    pub duration_ms: u64,
    pub summary: QualitySnapshotSummary,
    pub message: String,
}
