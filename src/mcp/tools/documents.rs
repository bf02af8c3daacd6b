//! Document and document folder tools.

use rmcp::{
    handler::server::wrapper::Parameters, model::CallToolResult, schemars::JsonSchema, tool,
    tool_router, ErrorData as McpError,
};
use serde::Deserialize;

use crate::mcp::{DeletedResponse, MessageResponse, ThinkPromptServer};
use crate::models::*;

// ============================================================
// Request Types
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DocumentIdRequest {
    #[schemars(description = "The UUID of the document")]
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateDocumentRequest {
    #[schemars(description = "The UUID of the document to update")]
    pub id: String,
    #[serde(flatten)]
    pub changes: UpdateDocumentInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DocumentVersionRequest {
    #[schemars(description = "The UUID of the document")]
    pub id: String,
    #[schemars(description = "Version number")]
    pub version: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FolderTreeRequest {
    #[schemars(description = "Only folders of this project")]
    pub project_id: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FolderIdRequest {
    #[schemars(description = "The UUID of the folder")]
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateFolderRequest {
    #[schemars(description = "The UUID of the folder to update")]
    pub id: String,
    #[serde(flatten)]
    pub changes: UpdateDocumentFolderInput,
}

#[tool_router(router = document_tools, vis = "pub(crate)")]
impl ThinkPromptServer {
    // ============================================================
    // Document Tools
    // ============================================================

    #[tool(
        description = "List documents with optional filters by project, folder, tags or search term."
    )]
    pub async fn list_documents(
        &self,
        params: Parameters<ListDocumentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;

        let documents = self
            .client
            .list_documents(&req)
            .await
            .map_err(Self::api_err)?;

        Self::json(&documents)
    }

    #[tool(description = "Get a document with its full markdown content and frontmatter.")]
    pub async fn get_document(
        &self,
        params: Parameters<DocumentIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        let document = self.client.get_document(id).await.map_err(Self::api_err)?;

        Self::json(&document)
    }

    #[tool(description = "Create a markdown document, optionally inside a folder.")]
    pub async fn create_document(
        &self,
        params: Parameters<CreateDocumentInput>,
    ) -> Result<CallToolResult, McpError> {
        let document = self
            .client
            .create_document(&params.0)
            .await
            .map_err(Self::api_err)?;

        Self::json(&document)
    }

    #[tool(
        description = "Update a document. The previous content is kept as a version that can be restored."
    )]
    pub async fn update_document(
        &self,
        params: Parameters<UpdateDocumentRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.id)?;

        let document = self
            .client
            .update_document(id, &req.changes)
            .await
            .map_err(Self::api_err)?;

        Self::json(&document)
    }

    #[tool(description = "Delete a document.")]
    pub async fn delete_document(
        &self,
        params: Parameters<DocumentIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        self.client
            .delete_document(id)
            .await
            .map_err(Self::api_err)?;

        Self::json(&DeletedResponse::new("Document deleted"))
    }

    #[tool(description = "Full-text search across document titles and content.")]
    pub async fn search_documents(
        &self,
        params: Parameters<SearchDocumentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;

        let results = self
            .client
            .search_documents(&req)
            .await
            .map_err(Self::api_err)?;

        Self::json(&results)
    }

    #[tool(description = "List the stored versions of a document.")]
    pub async fn list_document_versions(
        &self,
        params: Parameters<DocumentIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        let versions = self
            .client
            .get_document_versions(id)
            .await
            .map_err(Self::api_err)?;

        Self::json(&versions)
    }

    #[tool(description = "Get the content of a document as it was at a given version.")]
    pub async fn get_document_version(
        &self,
        params: Parameters<DocumentVersionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.id)?;

        let version = self
            .client
            .get_document_version(id, req.version)
            .await
            .map_err(Self::api_err)?;

        Self::json(&version)
    }

    #[tool(
        description = "Restore a document to an earlier version. This creates a new version with the old content."
    )]
    pub async fn restore_document_version(
        &self,
        params: Parameters<DocumentVersionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.id)?;

        let document = self
            .client
            .restore_document_version(id, req.version)
            .await
            .map_err(Self::api_err)?;
        tracing::info!(document_id = %id, version = req.version, "Restored document version");

        Self::json(&document)
    }

    // ============================================================
    // Folder Tools
    // ============================================================

    #[tool(description = "List document folders, optionally only the children of one folder.")]
    pub async fn list_document_folders(
        &self,
        params: Parameters<ListDocumentFoldersParams>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;

        let folders = self
            .client
            .list_document_folders(&req)
            .await
            .map_err(Self::api_err)?;

        Self::json(&folders)
    }

    #[tool(description = "Get the complete folder tree, with document counts per folder.")]
    pub async fn get_document_folder_tree(
        &self,
        params: Parameters<FolderTreeRequest>,
    ) -> Result<CallToolResult, McpError> {
        let project_id = Self::parse_optional_uuid(params.0.project_id.as_deref())?;

        let tree = self
            .client
            .get_document_folder_tree(project_id)
            .await
            .map_err(Self::api_err)?;

        Self::json(&tree)
    }

    #[tool(description = "Create a document folder. Omit parentId for a top-level folder.")]
    pub async fn create_document_folder(
        &self,
        params: Parameters<CreateDocumentFolderInput>,
    ) -> Result<CallToolResult, McpError> {
        let folder = self
            .client
            .create_document_folder(&params.0)
            .await
            .map_err(Self::api_err)?;

        Self::json(&folder)
    }

    #[tool(description = "Rename a folder or move it under another parent.")]
    pub async fn update_document_folder(
        &self,
        params: Parameters<UpdateFolderRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let id = Self::parse_uuid(&req.id)?;

        let folder = self
            .client
            .update_document_folder(id, &req.changes)
            .await
            .map_err(Self::api_err)?;

        Self::json(&folder)
    }

    #[tool(description = "Delete a document folder.")]
    pub async fn delete_document_folder(
        &self,
        params: Parameters<FolderIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = Self::parse_uuid(&params.0.id)?;

        self.client
            .delete_document_folder(id)
            .await
            .map_err(Self::api_err)?;

        Self::json(&DeletedResponse::new("Folder deleted"))
    }

    #[tool(description = "Set the sort order of sibling folders in one call.")]
    pub async fn reorder_document_folders(
        &self,
        params: Parameters<ReorderFoldersInput>,
    ) -> Result<CallToolResult, McpError> {
        let input = params.0;

        self.client
            .reorder_document_folders(&input)
            .await
            .map_err(Self::api_err)?;

        Self::json(&MessageResponse {
            message: format!("Reordered {} folders", input.items.len()),
        })
    }
}
