use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{JsonObject, TagRef};

/// A reusable prompt with `{{variable}}` placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    #[serde(default)]
    pub variables: Vec<PromptVariable>,
    #[serde(default)]
    pub usage_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A placeholder declared by a prompt.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptVariable {
    /// Variable name (without braces)
    pub name: String,
    /// Variable type
    #[serde(rename = "type")]
    pub kind: VariableType,
    /// Display label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Variable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the variable is required
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Default value for the variable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    /// Options for select type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Value constraints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<VariableValidation>,
}

wire_enum! {
    pub enum VariableType {
        Text => "text",
        Textarea => "textarea",
        Number => "number",
        Select => "select",
        Date => "date",
        Boolean => "boolean",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VariableValidation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromptInput {
    /// The title of the prompt
    pub title: String,
    /// The prompt content with {{variable}} placeholders
    pub content: String,
    /// Optional description of the prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// List of variables used in the prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<PromptVariable>>,
    /// Whether the prompt is publicly visible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    /// Tag IDs to associate with the prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePromptInput {
    /// New title for the prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New prompt content with {{variable}} placeholders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New description of the prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Updated list of variables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<PromptVariable>>,
    /// Whether the prompt is publicly visible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    /// New tag IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<Uuid>>,
}

/// Body of `POST /prompts/{id}/execute`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ExecutePromptInput {
    /// Values for the prompt's variables, keyed by variable name
    #[serde(default)]
    pub variables: JsonObject,
    /// AI provider to run the prompt with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Model to use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub content: String,
    pub tokens_used: TokenUsage,
    pub execution_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input: u64,
    pub output: u64,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListPromptsParams {
    #[schemars(description = "Maximum number of prompts to return (default: 20)")]
    pub limit: Option<u32>,
    #[schemars(description = "Page number for pagination (default: 1)")]
    pub page: Option<u32>,
    #[schemars(description = "Search query to filter prompts by title or description")]
    pub search: Option<String>,
    #[schemars(description = "Filter prompts by tags")]
    pub tags: Option<Vec<String>>,
}

// ============================================================
// Templates
// ============================================================

wire_enum! {
    /// `example` templates show a finished prompt, `style` templates show how to write one.
    pub enum TemplateType {
        Example => "example",
        Style => "style",
    }
}

impl TemplateType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Example => "Example Prompt",
            Self::Style => "Style Guide",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: TemplateType,
    pub category: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub use_case_hints: Vec<String>,
    #[serde(default)]
    pub usage_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateInput {
    /// The title of the template
    pub title: String,
    /// The template content
    pub content: String,
    /// Template type: "example" for example prompts, "style" for writing style guides
    #[serde(rename = "type")]
    pub kind: TemplateType,
    /// Optional description of the template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category (e.g., "code-review", "documentation", "email")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Language code (e.g., "en", "de")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// List of hints describing when to use this template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_case_hints: Option<Vec<String>>,
    /// Whether the template is publicly visible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    /// Tag IDs to associate with the template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplateInput {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TemplateType>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// New use case hints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_case_hints: Option<Vec<String>>,
    /// New visibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    /// New tag IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListTemplatesParams {
    #[schemars(description = "Maximum number of templates to return (default: 20)")]
    pub limit: Option<u32>,
    #[schemars(description = "Page number for pagination (default: 1)")]
    pub page: Option<u32>,
    #[schemars(description = "Search query to filter templates")]
    pub search: Option<String>,
    #[serde(rename = "type")]
    #[schemars(
        description = "Filter by template type: \"example\" for example prompts, \"style\" for writing style guides"
    )]
    pub kind: Option<TemplateType>,
    #[schemars(description = "Filter by category (e.g., \"code-review\", \"documentation\", \"email\")")]
    pub category: Option<String>,
    #[schemars(description = "Filter by language code (e.g., \"en\", \"de\")")]
    pub language: Option<String>,
    #[schemars(description = "Filter by tag IDs")]
    pub tags: Option<Vec<String>>,
}
