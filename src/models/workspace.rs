use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tenant the API key's user belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
    pub role: WorkspaceRole,
    /// Marks the workspace the server scopes requests to when no header is sent.
    #[serde(default)]
    pub is_default: bool,
    pub joined_at: Option<DateTime<Utc>>,
}

wire_enum! {
    pub enum WorkspaceRole {
        Admin => "admin",
        Editor => "editor",
        Viewer => "viewer",
        ApiUser => "api_user",
    }
}
