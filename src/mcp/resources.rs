//! Read-only resources: prompts, templates, workflows, test sessions and test issues
//! rendered as markdown text.
//!
//! | URI | Record |
//! |---|---|
//! | `prompt://{id}` | [`Prompt`] |
//! | `template://{id}` | [`Template`] |
//! | `workflow://{id}` | [`Workflow`] |
//! | `test://sessions/{id}` | [`TestSession`] with metrics |
//! | `test://issues/{id}` | [`TestIssue`] |

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use rmcp::{
    model::{AnnotateAble, RawResource, Resource, ResourceContents},
    ErrorData as McpError,
};
use serde_json::Value;
use uuid::Uuid;

use crate::client::ApiError;
use crate::mcp::ThinkPromptServer;
use crate::models::*;

const MIME_TYPE: &str = "text/plain";

const PROMPT_LIMIT: u32 = 100;
const TEMPLATE_LIMIT: u32 = 100;
const WORKFLOW_LIMIT: u32 = 100;
const TEST_SESSION_LIMIT: u32 = 50;
const TEST_ISSUE_LIMIT: u32 = 50;

/// Metrics beyond this count are left out of a rendered session.
const MAX_RENDERED_METRICS: usize = 50;

const UNNAMED_SESSION: &str = "Unnamed session";

/// A parsed resource URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceUri {
    Prompt(Uuid),
    Template(Uuid),
    Workflow(Uuid),
    TestSession(Uuid),
    TestIssue(Uuid),
}

impl ResourceUri {
    const SCHEMES: [(&'static str, fn(Uuid) -> Self); 5] = [
        ("prompt://", Self::Prompt),
        ("template://", Self::Template),
        ("workflow://", Self::Workflow),
        ("test://sessions/", Self::TestSession),
        ("test://issues/", Self::TestIssue),
    ];
}

impl FromStr for ResourceUri {
    type Err = McpError;

    fn from_str(uri: &str) -> Result<Self, Self::Err> {
        for (prefix, make) in Self::SCHEMES {
            if let Some(id) = uri.strip_prefix(prefix) {
                return ThinkPromptServer::parse_uuid(id).map(make);
            }
        }
        Err(McpError::resource_not_found(
            format!("Unknown resource URI: {}", uri),
            None,
        ))
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prompt(id) => write!(f, "prompt://{}", id),
            Self::Template(id) => write!(f, "template://{}", id),
            Self::Workflow(id) => write!(f, "workflow://{}", id),
            Self::TestSession(id) => write!(f, "test://sessions/{}", id),
            Self::TestIssue(id) => write!(f, "test://issues/{}", id),
        }
    }
}

impl ThinkPromptServer {
    /// Every readable resource, in the order prompts, templates, workflows, test sessions,
    /// test issues. If any listing fails the catalog is empty.
    pub async fn resource_catalog(&self) -> Vec<Resource> {
        let prompts = ListPromptsParams {
            limit: Some(PROMPT_LIMIT),
            ..Default::default()
        };
        let templates = ListTemplatesParams {
            limit: Some(TEMPLATE_LIMIT),
            ..Default::default()
        };
        let workflows = ListWorkflowsParams {
            limit: Some(WORKFLOW_LIMIT),
            ..Default::default()
        };
        let sessions = ListTestSessionsParams {
            limit: Some(TEST_SESSION_LIMIT),
            ..Default::default()
        };
        let issues = ListTestIssuesParams {
            limit: Some(TEST_ISSUE_LIMIT),
            ..Default::default()
        };

        let listed = tokio::try_join!(
            self.client.list_prompts(&prompts),
            self.client.list_templates(&templates),
            self.client.list_workflows(&workflows),
            self.client.list_test_sessions(&sessions),
            self.client.list_test_issues(&issues),
        );

        match listed {
            // An absent listing contributes nothing.
            Ok((prompts, templates, workflows, sessions, issues)) => prompts
                .iter()
                .flat_map(|page| page.data.iter().map(prompt_entry))
                .chain(templates.iter().flat_map(|page| page.data.iter().map(template_entry)))
                .chain(workflows.iter().flat_map(|page| page.data.iter().map(workflow_entry)))
                .chain(sessions.iter().flat_map(|page| page.data.iter().map(test_session_entry)))
                .chain(issues.iter().flat_map(|page| page.data.iter().map(test_issue_entry)))
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to list resources");
                Vec::new()
            }
        }
    }

    /// Fetch one record and render it as text.
    pub async fn read_resource_contents(&self, uri: &str) -> Result<ResourceContents, McpError> {
        let text = match uri.parse::<ResourceUri>()? {
            ResourceUri::Prompt(id) => {
                render_prompt(&found(uri, self.client.get_prompt(id).await)?)
            }
            ResourceUri::Template(id) => {
                render_template(&found(uri, self.client.get_template(id).await)?)
            }
            ResourceUri::Workflow(id) => {
                render_workflow(&found(uri, self.client.get_workflow(id).await)?)
            }
            ResourceUri::TestSession(id) => {
                render_test_session(&found(uri, self.client.get_test_session(id, true).await)?)
            }
            ResourceUri::TestIssue(id) => {
                render_test_issue(&found(uri, self.client.get_test_issue(id).await)?)
            }
        };

        let mut contents = ResourceContents::text(text, uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(MIME_TYPE.into());
        }
        Ok(contents)
    }
}

/// A read that came back without a body has nothing to render.
fn found<T>(uri: &str, record: Result<Option<T>, ApiError>) -> Result<T, McpError> {
    record.map_err(ThinkPromptServer::api_err)?.ok_or_else(|| {
        McpError::resource_not_found(format!("Resource not found: {}", uri), None)
    })
}

// ============================================================
// Catalog Entries
// ============================================================

fn entry(uri: ResourceUri, name: String, description: Option<String>) -> Resource {
    let mut raw = RawResource::new(uri.to_string(), name);
    raw.description = description;
    raw.mime_type = Some(MIME_TYPE.into());
    raw.no_annotation()
}

pub fn prompt_entry(prompt: &Prompt) -> Resource {
    entry(
        ResourceUri::Prompt(prompt.id),
        prompt.title.clone(),
        prompt.description.clone(),
    )
}

pub fn template_entry(template: &Template) -> Resource {
    let description = template.description.clone().unwrap_or_else(|| {
        match &template.category {
            Some(category) => format!("{} template for {}", template.kind, category),
            None => format!("{} template", template.kind),
        }
    });
    entry(
        ResourceUri::Template(template.id),
        format!("[{}] {}", template.kind, template.title),
        Some(description),
    )
}

pub fn workflow_entry(workflow: &Workflow) -> Resource {
    let description = workflow.description.clone().unwrap_or_else(|| {
        format!(
            "Workflow with {} resources and {} steps",
            workflow.resources.len(),
            workflow.steps.len()
        )
    });
    entry(
        ResourceUri::Workflow(workflow.id),
        format!("[WORKFLOW] {}", workflow.title),
        Some(description),
    )
}

pub fn test_session_entry(session: &TestSession) -> Resource {
    let linked = if session.project_id.is_some() {
        " - project linked"
    } else {
        ""
    };
    entry(
        ResourceUri::TestSession(session.id),
        format!("[TEST] {}", session_name(session)),
        Some(format!("{} session{}", session.status, linked)),
    )
}

pub fn test_issue_entry(issue: &TestIssue) -> Resource {
    entry(
        ResourceUri::TestIssue(issue.id),
        format!("[ISSUE] {}", issue.title),
        Some(format!(
            "[{}] {} - {}",
            issue.severity, issue.issue_type, issue.status
        )),
    )
}

// ============================================================
// Rendering
// ============================================================

fn timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn session_name(session: &TestSession) -> &str {
    session.name.as_deref().unwrap_or(UNNAMED_SESSION)
}

fn json_block<T: serde::Serialize>(value: &T) -> String {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".into());
    format!("```json\n{}\n```", json)
}

/// Strings are shown as-is, everything else as compact JSON.
fn metric_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn bullet_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn finish(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

pub fn render_prompt(prompt: &Prompt) -> String {
    let variables = if prompt.variables.is_empty() {
        "No variables required".to_string()
    } else {
        prompt
            .variables
            .iter()
            .map(|v| {
                format!(
                    "- **{}** ({}): {}",
                    v.name,
                    v.kind,
                    v.description.as_deref().unwrap_or("No description")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    finish(vec![
        format!("# {}", prompt.title),
        String::new(),
        prompt.description.clone().unwrap_or_default(),
        String::new(),
        "## Content".into(),
        prompt.content.clone(),
        String::new(),
        "## Variables".into(),
        variables,
        String::new(),
        "## Statistics".into(),
        format!("- Usage count: {}", prompt.usage_count),
        format!("- Created: {}", timestamp(&prompt.created_at)),
        format!("- Updated: {}", timestamp(&prompt.updated_at)),
    ])
}

pub fn render_template(template: &Template) -> String {
    let mut lines = vec![
        format!("# {}", template.title),
        format!("**Type:** {}", template.kind.label()),
    ];
    if let Some(category) = &template.category {
        lines.push(format!("**Category:** {}", category));
    }
    if let Some(language) = &template.language {
        lines.push(format!("**Language:** {}", language));
    }
    lines.extend([
        String::new(),
        template.description.clone().unwrap_or_default(),
        String::new(),
        "## Content".into(),
        template.content.clone(),
        String::new(),
    ]);

    if !template.use_case_hints.is_empty() {
        lines.push("## When to Use This Template".into());
        lines.push(bullet_list(&template.use_case_hints));
        lines.push(String::new());
    }
    if !template.tags.is_empty() {
        lines.push("## Tags".into());
        lines.push(bullet_list(template.tags.iter().map(|t| &t.name)));
        lines.push(String::new());
    }

    lines.extend([
        "## Statistics".into(),
        format!("- Usage count: {}", template.usage_count),
        format!("- Created: {}", timestamp(&template.created_at)),
        format!("- Updated: {}", timestamp(&template.updated_at)),
    ]);
    finish(lines)
}

pub fn render_workflow(workflow: &Workflow) -> String {
    let mut lines = vec![
        format!("# {}", workflow.title),
        String::new(),
        "## Description".into(),
        workflow
            .description
            .clone()
            .unwrap_or_else(|| "No description".into()),
        String::new(),
    ];

    if let Some(instructions) = &workflow.custom_instructions {
        lines.extend([
            "## Custom Instructions".into(),
            instructions.clone(),
            String::new(),
        ]);
    }

    lines.extend([
        "## Status".into(),
        format!("- **Status:** {}", workflow.status),
        format!("- **Version:** {}", workflow.version),
        format!(
            "- **Public:** {}",
            if workflow.is_public { "Yes" } else { "No" }
        ),
    ]);
    if let Some(category) = &workflow.category {
        lines.push(format!("- **Category:** {}", category));
    }
    lines.push(String::new());

    lines.push(format!("## Resources ({})", workflow.resources.len()));
    if workflow.resources.is_empty() {
        lines.push("No resources attached".into());
    } else {
        lines.extend(workflow.resources.iter().map(|r| {
            let label = r
                .alias
                .clone()
                .unwrap_or_else(|| r.resource_id.to_string());
            format!("- [{}] {}", r.resource_type.as_str().to_uppercase(), label)
        }));
    }
    lines.push(String::new());

    lines.push(format!("## Steps ({})", workflow.steps.len()));
    if workflow.steps.is_empty() {
        lines.push("No steps defined".into());
    } else {
        lines.extend(workflow.steps.iter().map(|s| {
            let condition = match (&s.condition, s.condition_type) {
                (Some(_), Some(kind)) => format!(" (condition: {})", kind),
                (Some(_), None) => " (condition)".to_string(),
                (None, _) => String::new(),
            };
            format!(
                "{}. **{}**: {}{}",
                s.step_number, s.title, s.action_type, condition
            )
        }));
    }
    lines.push(String::new());

    if !workflow.tags.is_empty() {
        lines.push("## Tags".into());
        lines.push(bullet_list(workflow.tags.iter().map(|t| &t.name)));
        lines.push(String::new());
    }

    lines.push("## Statistics".into());
    lines.push(format!("- Usage count: {}", workflow.usage_count));
    if let Some(last_used) = &workflow.last_used_at {
        lines.push(format!("- Last used: {}", timestamp(last_used)));
    }
    lines.push(format!("- Created: {}", timestamp(&workflow.created_at)));
    lines.push(format!("- Updated: {}", timestamp(&workflow.updated_at)));
    finish(lines)
}

pub fn render_test_session(session: &TestSession) -> String {
    let metrics = session.metrics.as_deref().unwrap_or_default();
    let issues = session.issues.as_deref().unwrap_or_default();

    let mut lines = vec![
        format!("# Test Session: {}", session_name(session)),
        String::new(),
        "## Status".into(),
        format!("- **Status:** {}", session.status),
        format!("- **Started:** {}", timestamp(&session.started_at)),
        match &session.ended_at {
            Some(ended) => format!("- **Completed:** {}", timestamp(ended)),
            None => "- **Completed:** In progress".into(),
        },
    ];
    if let Some(project_id) = session.project_id {
        lines.push(format!("- **Project ID:** {}", project_id));
    }
    if let Some(feature_id) = session.feature_id {
        lines.push(format!("- **Feature ID:** {}", feature_id));
    }
    lines.push(String::new());

    if let Some(metadata) = &session.metadata {
        lines.extend(["## Metadata".into(), json_block(metadata), String::new()]);
    }

    lines.push(format!("## Metrics ({})", metrics.len()));
    if metrics.is_empty() {
        lines.push("No metrics recorded".into());
    } else {
        lines.extend(metrics.iter().take(MAX_RENDERED_METRICS).map(|m| {
            format!(
                "- [{}] **{}**: {}",
                m.metric_type,
                m.metric_name,
                metric_value(&m.value)
            )
        }));
    }
    lines.push(String::new());

    lines.push(format!("## Issues ({})", issues.len()));
    if issues.is_empty() {
        lines.push("No issues reported".into());
    } else {
        lines.extend(issues.iter().map(|i| {
            format!(
                "- [{}] **{}** ({}): {}",
                i.severity.as_str().to_uppercase(),
                i.title,
                i.issue_type,
                i.description.as_deref().unwrap_or("No description")
            )
        }));
    }
    lines.push(String::new());

    lines.push("## Summary".into());
    lines.push(match &session.summary {
        Some(summary) => json_block(summary),
        None => "No summary available (session still running)".into(),
    });
    finish(lines)
}

pub fn render_test_issue(issue: &TestIssue) -> String {
    let mut lines = vec![
        format!("# Issue: {}", issue.title),
        String::new(),
        "## Details".into(),
        format!("- **Type:** {}", issue.issue_type),
        format!("- **Severity:** {}", issue.severity),
        format!("- **Status:** {}", issue.status),
        format!("- **Created:** {}", timestamp(&issue.created_at)),
    ];
    let links = [
        ("Session ID", issue.session_id),
        ("Project ID", issue.project_id),
        ("Feature ID", issue.feature_id),
        ("Task ID", issue.task_id),
    ];
    for (label, id) in links {
        if let Some(id) = id {
            lines.push(format!("- **{}:** {}", label, id));
        }
    }
    lines.push(String::new());

    lines.extend([
        "## Description".into(),
        issue
            .description
            .clone()
            .unwrap_or_else(|| "No description provided".into()),
        String::new(),
        "## Steps to Reproduce".into(),
    ]);
    match issue.steps_to_reproduce.as_deref() {
        Some(steps) if !steps.is_empty() => lines.extend(
            steps
                .iter()
                .enumerate()
                .map(|(i, step)| format!("{}. {}", i + 1, step)),
        ),
        _ => lines.push("No steps provided".into()),
    }

    lines.extend([
        String::new(),
        "## Expected Behavior".into(),
        issue
            .expected_behavior
            .clone()
            .unwrap_or_else(|| "Not specified".into()),
        String::new(),
        "## Actual Behavior".into(),
        issue
            .actual_behavior
            .clone()
            .unwrap_or_else(|| "Not specified".into()),
        String::new(),
        "## Environment".into(),
        match &issue.environment {
            Some(environment) => json_block(environment),
            None => "Not specified".into(),
        },
    ]);

    if let Some(url) = &issue.screenshot_url {
        lines.extend([String::new(), "## Screenshot".into(), url.clone()]);
    }
    finish(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "6f1c2f0e-8d2a-4b51-9a57-0c6c1f3e9b21";

    #[test]
    fn parses_every_scheme() {
        let id = Uuid::parse_str(ID).unwrap();

        assert_eq!(
            format!("prompt://{}", ID).parse::<ResourceUri>().unwrap(),
            ResourceUri::Prompt(id)
        );
        assert_eq!(
            format!("template://{}", ID).parse::<ResourceUri>().unwrap(),
            ResourceUri::Template(id)
        );
        assert_eq!(
            format!("workflow://{}", ID).parse::<ResourceUri>().unwrap(),
            ResourceUri::Workflow(id)
        );
        assert_eq!(
            format!("test://sessions/{}", ID)
                .parse::<ResourceUri>()
                .unwrap(),
            ResourceUri::TestSession(id)
        );
        assert_eq!(
            format!("test://issues/{}", ID).parse::<ResourceUri>().unwrap(),
            ResourceUri::TestIssue(id)
        );
    }

    #[test]
    fn display_round_trips() {
        let uri = ResourceUri::TestSession(Uuid::parse_str(ID).unwrap());
        assert_eq!(uri.to_string(), format!("test://sessions/{}", ID));
        assert_eq!(uri.to_string().parse::<ResourceUri>().unwrap(), uri);
    }

    #[test]
    fn unknown_scheme_is_not_found() {
        let err = "feature://123".parse::<ResourceUri>().unwrap_err();
        assert_eq!(err.message, "Unknown resource URI: feature://123");
    }

    #[test]
    fn test_scheme_needs_a_known_collection() {
        let err = format!("test://runs/{}", ID)
            .parse::<ResourceUri>()
            .unwrap_err();
        assert!(err.message.starts_with("Unknown resource URI"));
    }

    #[test]
    fn malformed_id_is_rejected() {
        let err = "prompt://not-a-uuid".parse::<ResourceUri>().unwrap_err();
        assert!(err.message.starts_with("Invalid UUID"));
    }

    #[test]
    fn metric_values_keep_strings_raw() {
        assert_eq!(metric_value(&Value::String("ok".into())), "ok");
        assert_eq!(metric_value(&serde_json::json!(200)), "200");
        assert_eq!(metric_value(&serde_json::json!(true)), "true");
        assert_eq!(
            metric_value(&serde_json::json!({"status": 500})),
            r#"{"status":500}"#
        );
    }
}
