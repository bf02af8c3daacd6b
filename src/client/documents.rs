use uuid::Uuid;

use super::{ApiClient, ApiError, Query};
use crate::models::*;

impl ApiClient {
    // ============================================================
    // Document Operations
    // ============================================================

    pub async fn list_documents(
        &self,
        params: &ListDocumentsParams,
    ) -> Result<Option<PaginatedResponse<Document>>, ApiError> {
        let query = Query::new()
            .opt("projectId", params.project_id)
            .opt("folderId", params.folder_id)
            .opt("search", params.search.as_deref())
            .list("tagIds", params.tag_ids.as_deref())
            .flag("includeArchived", params.include_archived.unwrap_or(false))
            .opt("page", params.page)
            .opt("limit", params.limit);
        self.get("/documents", query).await
    }

    pub async fn get_document(&self, id: Uuid) -> Result<Option<Document>, ApiError> {
        self.get(&format!("/documents/{}", id), Query::new()).await
    }

    pub async fn create_document(&self, input: &CreateDocumentInput) -> Result<Option<Document>, ApiError> {
        self.post("/documents", input).await
    }

    /// Update a document. The server stores the previous text as a new version.
    pub async fn update_document(
        &self,
        id: Uuid,
        input: &UpdateDocumentInput,
    ) -> Result<Option<Document>, ApiError> {
        self.patch(&format!("/documents/{}", id), input).await
    }

    pub async fn delete_document(&self, id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/documents/{}", id)).await
    }

    /// Full-text search. The query term is always sent.
    pub async fn search_documents(
        &self,
        params: &SearchDocumentsParams,
    ) -> Result<Option<Vec<DocumentSearchResult>>, ApiError> {
        let query = Query::new()
            .set("query", &params.query)
            .opt("projectId", params.project_id)
            .opt("folderId", params.folder_id)
            .opt("limit", params.limit);
        self.get("/documents/search", query).await
    }

    pub async fn get_document_versions(
        &self,
        document_id: Uuid,
    ) -> Result<Option<Vec<DocumentVersion>>, ApiError> {
        self.get(&format!("/documents/{}/versions", document_id), Query::new())
            .await
    }

    pub async fn get_document_version(
        &self,
        document_id: Uuid,
        version: u32,
    ) -> Result<Option<DocumentVersion>, ApiError> {
        self.get(
            &format!("/documents/{}/versions/{}", document_id, version),
            Query::new(),
        )
        .await
    }

    pub async fn restore_document_version(
        &self,
        document_id: Uuid,
        version: u32,
    ) -> Result<Option<Document>, ApiError> {
        let path = format!("/documents/{}/restore/{}", document_id, version);
        tracing::debug!(path = %path, workspace = ?self.current_workspace_id(), "POST");
        self.send_optional(self.request(reqwest::Method::POST, &path))
            .await
    }

    pub async fn add_document_tags(
        &self,
        document_id: Uuid,
        tag_ids: &[Uuid],
    ) -> Result<(), ApiError> {
        self.post_empty(
            &format!("/documents/{}/tags", document_id),
            &TagIdsBody { tag_ids },
        )
        .await
    }

    pub async fn remove_document_tag(&self, document_id: Uuid, tag_id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/documents/{}/tags/{}", document_id, tag_id))
            .await
    }

    pub async fn get_document_tags(&self, document_id: Uuid) -> Result<Option<Vec<Tag>>, ApiError> {
        self.get(&format!("/documents/{}/tags", document_id), Query::new())
            .await
    }

    // ============================================================
    // Document Folder Operations
    // ============================================================

    pub async fn list_document_folders(
        &self,
        params: &ListDocumentFoldersParams,
    ) -> Result<Option<Vec<DocumentFolder>>, ApiError> {
        let query = Query::new()
            .opt("projectId", params.project_id)
            .opt("parentId", params.parent_id)
            .flag("includeArchived", params.include_archived.unwrap_or(false));
        self.get("/document-folders", query).await
    }

    pub async fn get_document_folder_tree(
        &self,
        project_id: Option<Uuid>,
    ) -> Result<Option<DocumentFolderTree>, ApiError> {
        let query = Query::new().opt("projectId", project_id);
        self.get("/document-folders/tree", query).await
    }

    pub async fn get_document_folder(&self, id: Uuid) -> Result<Option<DocumentFolder>, ApiError> {
        self.get(&format!("/document-folders/{}", id), Query::new())
            .await
    }

    pub async fn create_document_folder(
        &self,
        input: &CreateDocumentFolderInput,
    ) -> Result<Option<DocumentFolder>, ApiError> {
        self.post("/document-folders", input).await
    }

    pub async fn update_document_folder(
        &self,
        id: Uuid,
        input: &UpdateDocumentFolderInput,
    ) -> Result<Option<DocumentFolder>, ApiError> {
        self.patch(&format!("/document-folders/{}", id), input).await
    }

    pub async fn delete_document_folder(&self, id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/document-folders/{}", id)).await
    }

    pub async fn reorder_document_folders(&self, input: &ReorderFoldersInput) -> Result<(), ApiError> {
        self.post_empty("/document-folders/reorder", input).await
    }
}
