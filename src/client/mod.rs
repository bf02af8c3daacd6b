//! HTTP client for the ThinkPrompt API.
//!
//! One method per endpoint. Every request carries `X-API-Key` and, once a workspace has
//! been selected, `X-Workspace-ID`. The selected workspace and the last workspace listing
//! live in a cache shared by all clones of the client.

mod documents;
mod projects;
mod prompts;
mod quality;
mod testing;
mod workflows;
mod workspaces;

use std::sync::{Arc, PoisonError, RwLock};

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::Config;
use crate::models::Workspace;

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Session-scoped workspace state.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceCache {
    pub current_id: Option<Uuid>,
    pub workspaces: Vec<Workspace>,
}

/// HTTP client for the ThinkPrompt API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    api_key: String,
    client: Client,
    workspace: Arc<RwLock<WorkspaceCache>>,
}

impl ApiClient {
    /// Create with explicit configuration. A single trailing `/` on the URL is dropped.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
            client: Client::new(),
            workspace: Arc::new(RwLock::new(WorkspaceCache::default())),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone(), config.api_key.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ============================================================
    // Workspace cache
    // ============================================================

    /// Select the workspace sent with every following request, or clear it.
    pub fn set_current_workspace(&self, id: Option<Uuid>) {
        self.cache_mut(|cache| cache.current_id = id);
    }

    pub fn current_workspace_id(&self) -> Option<Uuid> {
        self.cache(|cache| cache.current_id)
    }

    /// Workspaces as of the last listing.
    pub fn cached_workspaces(&self) -> Vec<Workspace> {
        self.cache(|cache| cache.workspaces.clone())
    }

    fn cache<R>(&self, read: impl FnOnce(&WorkspaceCache) -> R) -> R {
        let guard = self.workspace.read().unwrap_or_else(PoisonError::into_inner);
        read(&guard)
    }

    fn cache_mut<R>(&self, write: impl FnOnce(&mut WorkspaceCache) -> R) -> R {
        let mut guard = self.workspace.write().unwrap_or_else(PoisonError::into_inner);
        write(&mut guard)
    }

    // ============================================================
    // Request plumbing
    // ============================================================

    /// Build a request with auth and workspace headers.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self
            .client
            .request(method, &url)
            .header("X-API-Key", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(id) = self.current_workspace_id() {
            req = req.header("X-Workspace-ID", id.to_string());
        }
        req
    }

    /// Send a request and decode its body. A 204, a zero content length or an empty body
    /// yield `None`. Every record endpoint goes through here, so callers see the absent
    /// value rather than an error.
    async fn send_optional<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "API request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if status == StatusCode::NO_CONTENT || response.content_length() == Some(0) {
            return Ok(None);
        }

        let text = response.text().await?;
        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Send a request and discard whatever body comes back.
    async fn send_empty(&self, req: RequestBuilder) -> Result<(), ApiError> {
        self.send_optional::<serde_json::Value>(req).await?;
        Ok(())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Query,
    ) -> Result<Option<T>, ApiError> {
        tracing::debug!(path, workspace = ?self.current_workspace_id(), "GET");
        let req = query.apply(self.request(Method::GET, path));
        self.send_optional(req).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        tracing::debug!(path, workspace = ?self.current_workspace_id(), "POST");
        let req = self.request(Method::POST, path).json(body);
        self.send_optional(req).await
    }

    async fn post_empty<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        tracing::debug!(path, workspace = ?self.current_workspace_id(), "POST");
        self.send_empty(self.request(Method::POST, path).json(body))
            .await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        tracing::debug!(path, workspace = ?self.current_workspace_id(), "PATCH");
        let req = self.request(Method::PATCH, path).json(body);
        self.send_optional(req).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        tracing::debug!(path, workspace = ?self.current_workspace_id(), "DELETE");
        self.send_empty(self.request(Method::DELETE, path)).await
    }
}

/// Query string builder that leaves out unset filters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Query(Vec<(&'static str, String)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always sent, even when empty.
    pub fn set(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    /// Sent when present and not an empty string.
    pub fn opt<V: ToString>(mut self, key: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.0.push((key, value));
            }
        }
        self
    }

    /// Sent as `true` only when set.
    pub fn flag(mut self, key: &'static str, value: bool) -> Self {
        if value {
            self.0.push((key, "true".to_string()));
        }
        self
    }

    /// Comma-joined, sent only when the list is non-empty.
    pub fn list<V: ToString>(mut self, key: &'static str, values: Option<&[V]>) -> Self {
        if let Some(values) = values.filter(|v| !v.is_empty()) {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.0.push((key, joined));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        if self.is_empty() {
            req
        } else {
            req.query(&self.0)
        }
    }
}
