//! Prompt, template and tag tools.

use rmcp::{
    handler::server::wrapper::Parameters, model::CallToolResult, schemars::JsonSchema, tool,
    tool_router, ErrorData as McpError,
};
use serde::Deserialize;

use crate::mcp::{DeletedResponse, ThinkPromptServer};
use crate::models::*;

// ============================================================
// Request Types
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PromptIdRequest {
    #[schemars(description = "The UUID of the prompt")]
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdatePromptRequest {
    #[schemars(description = "The UUID of the prompt to update")]
    pub id: String,
    #[serde(flatten)]
    pub changes: UpdatePromptInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ExecutePromptRequest {
    #[schemars(description = "The UUID of the prompt to execute")]
    pub id: String,
    #[serde(flatten)]
    pub input: ExecutePromptInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TemplateIdRequest {
    #[schemars(description = "The UUID of the template")]
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateTemplateRequest {
    #[schemars(description = "The UUID of the template to update")]
    pub id: String,
    #[serde(flatten)]
    pub changes: UpdateTemplateInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TagIdRequest {
    #[schemars(description = "The UUID of the tag")]
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateTagRequest {
    #[schemars(description = "The UUID of the tag to update")]
    pub id: String,
    #[serde(flatten)]
    pub changes: UpdateTagInput,
}

#[tool_router(router = prompt_tools, vis = "pub(crate)")]
impl ThinkPromptServer {
    // ============================================================
    // Prompt Tools
    // ============================================================

    #[tool(
        description = "List all available prompts from ThinkPrompt. Returns a paginated list of prompts with their titles, descriptions, and usage statistics."
    )]
    pub async fn list_prompts(
        &self,
        params: Parameters<ListPromptsParams>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;

        let result = self
            .client
            .list_prompts(&req)
            .await
            .map_err(Self::api_err)?;

        Self::json(&result)
    }

    #[tool(
        description = "Get detailed information about a specific prompt, including its content and variables."
    )]
    pub async fn get_prompt(
        &self,
        params: Parameters<PromptIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        let prompt = self.client.get_prompt(id).await.map_err(Self::api_err)?;

        Self::json(&prompt)
    }

    #[tool(
        description = "Get the list of variables required by a prompt, with their types and descriptions."
    )]
    pub async fn get_prompt_variables(
        &self,
        params: Parameters<PromptIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        let variables = self
            .client
            .get_prompt_variables(id)
            .await
            .map_err(Self::api_err)?;

        Self::json(&variables)
    }

    #[tool(description = "Create a new prompt with title, content, and optional variables.")]
    pub async fn create_prompt(
        &self,
        params: Parameters<CreatePromptInput>,
    ) -> Result<CallToolResult, McpError> {
        let prompt = self
            .client
            .create_prompt(&params.0)
            .await
            .map_err(Self::api_err)?;

        Self::json(&prompt)
    }

    #[tool(description = "Update an existing prompt. Only include fields you want to change.")]
    pub async fn update_prompt(
        &self,
        params: Parameters<UpdatePromptRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.id)?;

        let prompt = self
            .client
            .update_prompt(id, &req.changes)
            .await
            .map_err(Self::api_err)?;

        Self::json(&prompt)
    }

    #[tool(
        description = "Execute a prompt with the server-side AI model. Provide values for the prompt's variables."
    )]
    pub async fn execute_prompt(
        &self,
        params: Parameters<ExecutePromptRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.id)?;

        let result = self
            .client
            .execute_prompt(id, &req.input)
            .await
            .map_err(Self::api_err)?;

        Self::json(&result)
    }

    // ============================================================
    // Template Tools
    // ============================================================

    #[tool(
        description = "List all available templates from ThinkPrompt. Templates can be example prompts or style guides showing HOW to write prompts. Filter by type, category, or language."
    )]
    pub async fn list_templates(
        &self,
        params: Parameters<ListTemplatesParams>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;

        let result = self
            .client
            .list_templates(&req)
            .await
            .map_err(Self::api_err)?;

        Self::json(&result)
    }

    #[tool(
        description = "Get detailed information about a specific template, including its content and use case hints."
    )]
    pub async fn get_template(
        &self,
        params: Parameters<TemplateIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        let template = self.client.get_template(id).await.map_err(Self::api_err)?;

        Self::json(&template)
    }

    #[tool(
        description = "Create a new template. Templates can be example prompts or style guides for AI assistants."
    )]
    pub async fn create_template(
        &self,
        params: Parameters<CreateTemplateInput>,
    ) -> Result<CallToolResult, McpError> {
        let template = self
            .client
            .create_template(&params.0)
            .await
            .map_err(Self::api_err)?;

        Self::json(&template)
    }

    #[tool(description = "Update an existing template. Only include fields you want to change.")]
    pub async fn update_template(
        &self,
        params: Parameters<UpdateTemplateRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.id)?;

        let template = self
            .client
            .update_template(id, &req.changes)
            .await
            .map_err(Self::api_err)?;

        Self::json(&template)
    }

    #[tool(description = "Delete a template.")]
    pub async fn delete_template(
        &self,
        params: Parameters<TemplateIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        self.client
            .delete_template(id)
            .await
            .map_err(Self::api_err)?;

        Self::json(&DeletedResponse::new("Template deleted"))
    }

    // ============================================================
    // Tag Tools
    // ============================================================

    #[tool(description = "List all tags in the current workspace.")]
    pub async fn list_tags(&self) -> Result<CallToolResult, McpError> {
        let tags = self.client.list_tags().await.map_err(Self::api_err)?;

        Self::json(&tags)
    }

    #[tool(
        description = "Create a tag. Tags can be attached to prompts, templates, workflows, features, tasks and documents."
    )]
    pub async fn create_tag(
        &self,
        params: Parameters<CreateTagInput>,
    ) -> Result<CallToolResult, McpError> {
        let tag = self
            .client
            .create_tag(&params.0)
            .await
            .map_err(Self::api_err)?;

        Self::json(&tag)
    }

    #[tool(description = "Rename or recolour a tag.")]
    pub async fn update_tag(
        &self,
        params: Parameters<UpdateTagRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.id)?;

        let tag = self
            .client
            .update_tag(id, &req.changes)
            .await
            .map_err(Self::api_err)?;

        Self::json(&tag)
    }

    #[tool(description = "Delete a tag. It is removed from every record it was attached to.")]
    pub async fn delete_tag(
        &self,
        params: Parameters<TagIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        self.client.delete_tag(id).await.map_err(Self::api_err)?;

        Self::json(&DeletedResponse::new("Tag deleted"))
    }
}
