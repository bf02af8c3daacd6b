use reqwest::Method;
use serde_json::Value;
use uuid::Uuid;

use super::{ApiClient, ApiError};
use crate::models::Workspace;

/// Pick the workspace array out of a listing body: bare, under `data`, or under `data.data`.
fn listing_items(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut outer) => match outer.remove("data") {
            Some(Value::Array(items)) => items,
            Some(Value::Object(mut inner)) => match inner.remove("data") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Extract the workspaces from a listing body. Unrecognised shapes give an empty list and
/// entries that do not decode are skipped.
pub(crate) fn unwrap_workspaces(body: Option<Value>) -> Vec<Workspace> {
    let Some(body) = body else {
        return Vec::new();
    };
    listing_items(body)
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(workspace) => Some(workspace),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed workspace entry");
                None
            }
        })
        .collect()
}

impl ApiClient {
    // ============================================================
    // Workspace Operations
    // ============================================================

    /// List the caller's workspaces and replace the cached listing with the result.
    pub async fn list_workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        let body: Option<Value> = self
            .send_optional(self.request(Method::GET, "/workspaces/list"))
            .await?;
        let workspaces = unwrap_workspaces(body);
        self.cache_mut(|cache| cache.workspaces = workspaces.clone());
        Ok(workspaces)
    }

    /// Switch the session to another workspace. Returns the endpoint's JSON as is.
    ///
    /// The id is selected whatever the response contains. When the id is in the cached
    /// listing, its entry becomes the only default.
    pub async fn switch_workspace(&self, id: Uuid) -> Result<Value, ApiError> {
        let path = format!("/workspaces/{}/switch", id);
        tracing::debug!(path = %path, workspace = ?self.current_workspace_id(), "POST");
        let result: Option<Value> = self
            .send_optional(self.request(Method::POST, &path))
            .await?;

        self.set_current_workspace(Some(id));

        if self.cache(|cache| cache.workspaces.is_empty()) {
            self.list_workspaces().await?;
        }
        self.cache_mut(|cache| {
            if cache.workspaces.iter().any(|w| w.id == id) {
                for workspace in &mut cache.workspaces {
                    workspace.is_default = workspace.id == id;
                }
            }
        });

        Ok(result.unwrap_or(Value::Null))
    }

    /// The workspace requests are scoped to.
    ///
    /// With a selected id, the matching cached entry (or `None`). Otherwise the default
    /// workspace, falling back to the first one listed.
    pub async fn current_workspace(&self) -> Result<Option<Workspace>, ApiError> {
        if self.cache(|cache| cache.workspaces.is_empty()) {
            self.list_workspaces().await?;
        }

        Ok(self.cache(|cache| match cache.current_id {
            Some(id) => cache.workspaces.iter().find(|w| w.id == id).cloned(),
            None => cache
                .workspaces
                .iter()
                .find(|w| w.is_default)
                .or_else(|| cache.workspaces.first())
                .cloned(),
        }))
    }
}
