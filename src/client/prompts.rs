use uuid::Uuid;

use super::{ApiClient, ApiError, Query};
use crate::models::*;

impl ApiClient {
    // ============================================================
    // Prompt Operations
    // ============================================================

    pub async fn list_prompts(
        &self,
        params: &ListPromptsParams,
    ) -> Result<Option<PaginatedResponse<Prompt>>, ApiError> {
        let query = Query::new()
            .opt("limit", params.limit)
            .opt("page", params.page)
            .opt("search", params.search.as_deref())
            .list("tags", params.tags.as_deref());
        self.get("/prompts", query).await
    }

    pub async fn get_prompt(&self, id: Uuid) -> Result<Option<Prompt>, ApiError> {
        self.get(&format!("/prompts/{}", id), Query::new()).await
    }

    pub async fn get_prompt_variables(&self, id: Uuid) -> Result<Option<Vec<PromptVariable>>, ApiError> {
        self.get(&format!("/prompts/{}/variables", id), Query::new())
            .await
    }

    /// Run a prompt through the server-side model with the given variable values.
    pub async fn execute_prompt(
        &self,
        id: Uuid,
        input: &ExecutePromptInput,
    ) -> Result<Option<ExecutionResult>, ApiError> {
        self.post(&format!("/prompts/{}/execute", id), input).await
    }

    pub async fn create_prompt(&self, input: &CreatePromptInput) -> Result<Option<Prompt>, ApiError> {
        self.post("/prompts", input).await
    }

    pub async fn update_prompt(
        &self,
        id: Uuid,
        input: &UpdatePromptInput,
    ) -> Result<Option<Prompt>, ApiError> {
        self.patch(&format!("/prompts/{}", id), input).await
    }

    // ============================================================
    // Template Operations
    // ============================================================

    pub async fn list_templates(
        &self,
        params: &ListTemplatesParams,
    ) -> Result<Option<PaginatedResponse<Template>>, ApiError> {
        let query = Query::new()
            .opt("limit", params.limit)
            .opt("page", params.page)
            .opt("search", params.search.as_deref())
            .opt("type", params.kind)
            .opt("category", params.category.as_deref())
            .opt("language", params.language.as_deref())
            .list("tagIds", params.tags.as_deref());
        self.get("/templates", query).await
    }

    pub async fn get_template(&self, id: Uuid) -> Result<Option<Template>, ApiError> {
        self.get(&format!("/templates/{}", id), Query::new()).await
    }

    pub async fn create_template(&self, input: &CreateTemplateInput) -> Result<Option<Template>, ApiError> {
        self.post("/templates", input).await
    }

    pub async fn update_template(
        &self,
        id: Uuid,
        input: &UpdateTemplateInput,
    ) -> Result<Option<Template>, ApiError> {
        self.patch(&format!("/templates/{}", id), input).await
    }

    pub async fn delete_template(&self, id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/templates/{}", id)).await
    }

    // ============================================================
    // Tag Operations
    // ============================================================

    pub async fn list_tags(&self) -> Result<Option<Vec<Tag>>, ApiError> {
        self.get("/tags", Query::new()).await
    }

    pub async fn get_tag(&self, id: Uuid) -> Result<Option<Tag>, ApiError> {
        self.get(&format!("/tags/{}", id), Query::new()).await
    }

    pub async fn create_tag(&self, input: &CreateTagInput) -> Result<Option<Tag>, ApiError> {
        self.post("/tags", input).await
    }

    pub async fn update_tag(&self, id: Uuid, input: &UpdateTagInput) -> Result<Option<Tag>, ApiError> {
        self.patch(&format!("/tags/{}", id), input).await
    }

    pub async fn delete_tag(&self, id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/tags/{}", id)).await
    }
}
