//! API client tests against a mock ThinkPrompt server.

use serde_json::{json, Value};
use thinkprompt_mcp::client::{ApiClient, ApiError};
use thinkprompt_mcp::models::*;
use uuid::Uuid;
use wiremock::matchers::{
    body_json, header, header_exists, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const API_KEY: &str = "test-key";
const PROMPT_ID: &str = "0b6a4c1e-5d3f-4e2a-9c8b-7a6f5e4d3c2b";
const WORKSPACE_A: &str = "11111111-1111-4111-8111-111111111111";
const WORKSPACE_B: &str = "22222222-2222-4222-8222-222222222222";

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(server.uri(), API_KEY);
    (server, client)
}

fn prompt_json() -> Value {
    json!({
        "id": PROMPT_ID,
        "title": "Code Review",
        "description": "Review a diff",
        "content": "Review {{code}}",
        "variables": [{"name": "code", "type": "textarea"}],
        "usageCount": 3,
        "createdAt": "2025-01-01T00:00:00.000Z",
        "updatedAt": "2025-01-02T00:00:00.000Z"
    })
}

fn workspace_json(id: &str, name: &str, is_default: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "slug": name.to_lowercase(),
        "logoUrl": null,
        "role": "editor",
        "isDefault": is_default,
        "joinedAt": "2025-01-01T00:00:00.000Z"
    })
}

fn page_json(data: Vec<Value>) -> Value {
    let total = data.len();
    json!({
        "data": data,
        "meta": {"total": total, "page": 1, "limit": 20, "totalPages": 1}
    })
}

fn uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).unwrap()
}

// ============================================================
// Request Construction
// ============================================================

mod requests {
    use super::*;

    #[tokio::test]
    async fn sends_api_key_and_json_content_type() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(format!("/prompts/{}", PROMPT_ID)))
            .and(header("X-API-Key", API_KEY))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(prompt_json()))
            .expect(1)
            .mount(&server)
            .await;

        let prompt = client.get_prompt(uuid(PROMPT_ID)).await.unwrap().unwrap();

        assert_eq!(prompt.title, "Code Review");
        assert_eq!(prompt.variables[0].kind, VariableType::Textarea);
    }

    #[tokio::test]
    async fn omits_workspace_header_until_one_is_selected() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/prompts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![])))
            .mount(&server)
            .await;

        client
            .list_prompts(&ListPromptsParams::default())
            .await
            .unwrap();
        client.set_current_workspace(Some(uuid(WORKSPACE_A)));
        client
            .list_prompts(&ListPromptsParams::default())
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].headers.contains_key("x-workspace-id"));
        assert_eq!(
            requests[1].headers.get("x-workspace-id").unwrap(),
            WORKSPACE_A
        );
    }

    #[tokio::test]
    async fn leaves_unset_filters_out_of_the_query() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/prompts"))
            .and(query_param("limit", "5"))
            .and(query_param("tags", "rust,review"))
            .and(query_param_is_missing("page"))
            .and(query_param_is_missing("search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![prompt_json()])))
            .expect(1)
            .mount(&server)
            .await;

        let page = client
            .list_prompts(&ListPromptsParams {
                limit: Some(5),
                tags: Some(vec!["rust".into(), "review".into()]),
                ..Default::default()
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.meta.total, 1);
    }

    #[tokio::test]
    async fn sends_boolean_filters_only_when_true() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/projects"))
            .and(query_param_is_missing("includeArchived"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/projects"))
            .and(query_param("includeArchived", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        client.list_projects(false).await.unwrap();
        client.list_projects(true).await.unwrap();
    }

    #[tokio::test]
    async fn always_sends_the_document_search_term() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/documents/search"))
            .and(query_param("query", "onboarding"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let results = client
            .search_documents(&SearchDocumentsParams {
                query: "onboarding".into(),
                project_id: None,
                folder_id: None,
                limit: None,
            })
            .await
            .unwrap();

        assert_eq!(results.map(|r| r.len()), Some(0));
    }

    #[tokio::test]
    async fn looks_tasks_up_by_kuerzel() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/tasks/by-kuerzel/TP-001"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client.get_task_by_kuerzel("TP-001").await.unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }
}

// ============================================================
// Response Handling
// ============================================================

mod responses {
    use super::*;

    #[tokio::test]
    async fn non_success_status_carries_code_and_body() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(format!("/prompts/{}", PROMPT_ID)))
            .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
            .mount(&server)
            .await;

        let err = client.get_prompt(uuid(PROMPT_ID)).await.unwrap_err();

        assert_eq!(err.to_string(), "API request failed: 403 - Forbidden");
    }

    #[tokio::test]
    async fn delete_accepts_no_content() {
        let (server, client) = setup().await;
        Mock::given(method("DELETE"))
            .and(path(format!("/templates/{}", PROMPT_ID)))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client.delete_template(uuid(PROMPT_ID)).await.unwrap();
    }

    #[tokio::test]
    async fn delete_ignores_a_returned_body() {
        let (server, client) = setup().await;
        Mock::given(method("DELETE"))
            .and(path(format!("/workflows/{}", PROMPT_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
            .mount(&server)
            .await;

        client.delete_workflow(uuid(PROMPT_ID)).await.unwrap();
    }

    #[tokio::test]
    async fn empty_body_for_a_record_is_absent() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(format!("/prompts/{}", PROMPT_ID)))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let prompt = client.get_prompt(uuid(PROMPT_ID)).await.unwrap();

        assert!(prompt.is_none());
    }

    #[tokio::test]
    async fn no_content_for_a_mutation_is_absent() {
        let (server, client) = setup().await;
        Mock::given(method("PATCH"))
            .and(path(format!("/tasks/{}/status", PROMPT_ID)))
            .and(body_json(json!({"status": "done"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let task = client
            .update_task_status(uuid(PROMPT_ID), TaskStatus::Done)
            .await
            .unwrap();

        assert!(task.is_none());
    }

    #[tokio::test]
    async fn malformed_json_is_a_decode_error() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(format!("/prompts/{}", PROMPT_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let err = client.get_prompt(uuid(PROMPT_ID)).await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_an_http_error() {
        let client = ApiClient::new("http://127.0.0.1:9", API_KEY);

        let err = client.list_tags().await.unwrap_err();

        assert!(matches!(err, ApiError::Http(_)));
    }
}

// ============================================================
// Workspaces
// ============================================================

mod workspaces {
    use super::*;

    async fn mount_listing(server: &MockServer, body: Value) {
        Mock::given(method("GET"))
            .and(path("/workspaces/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn listing_unwraps_nested_data_and_refreshes_the_cache() {
        let (server, client) = setup().await;
        mount_listing(
            &server,
            json!({"data": {"data": [
                workspace_json(WORKSPACE_A, "Alpha", true),
                workspace_json(WORKSPACE_B, "Beta", false)
            ]}}),
        )
        .await;

        let listed = client.list_workspaces().await.unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(client.cached_workspaces(), listed);
    }

    #[tokio::test]
    async fn one_malformed_workspace_does_not_empty_the_listing() {
        let (server, client) = setup().await;
        let mut owner = workspace_json(WORKSPACE_B, "Beta", false);
        owner["role"] = json!("owner");
        let mut admin = workspace_json(WORKSPACE_A, "Alpha", true);
        admin["role"] = json!("admin");
        mount_listing(&server, json!({"data": [admin, owner]})).await;

        let listed = client.list_workspaces().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, uuid(WORKSPACE_A));
        assert_eq!(listed[0].role, WorkspaceRole::Admin);
        assert_eq!(client.cached_workspaces(), listed);
    }

    #[tokio::test]
    async fn switching_marks_exactly_one_default() {
        let (server, client) = setup().await;
        mount_listing(
            &server,
            json!([
                workspace_json(WORKSPACE_A, "Alpha", true),
                workspace_json(WORKSPACE_B, "Beta", false)
            ]),
        )
        .await;
        Mock::given(method("POST"))
            .and(path(format!("/workspaces/{}/switch", WORKSPACE_B)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client.switch_workspace(uuid(WORKSPACE_B)).await.unwrap();

        assert_eq!(result, json!({"success": true}));
        assert_eq!(client.current_workspace_id(), Some(uuid(WORKSPACE_B)));
        let defaults: Vec<Uuid> = client
            .cached_workspaces()
            .iter()
            .filter(|w| w.is_default)
            .map(|w| w.id)
            .collect();
        assert_eq!(defaults, vec![uuid(WORKSPACE_B)]);
    }

    #[tokio::test]
    async fn switching_to_an_unlisted_workspace_still_selects_it() {
        let (server, client) = setup().await;
        mount_listing(&server, json!([workspace_json(WORKSPACE_A, "Alpha", true)])).await;
        Mock::given(method("POST"))
            .and(path(format!("/workspaces/{}/switch", WORKSPACE_B)))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let result = client.switch_workspace(uuid(WORKSPACE_B)).await.unwrap();

        assert_eq!(result, Value::Null);
        assert_eq!(client.current_workspace_id(), Some(uuid(WORKSPACE_B)));
        assert!(client.cached_workspaces()[0].is_default);
    }

    #[tokio::test]
    async fn current_workspace_falls_back_to_the_default() {
        let (server, client) = setup().await;
        mount_listing(
            &server,
            json!({"data": [
                workspace_json(WORKSPACE_A, "Alpha", false),
                workspace_json(WORKSPACE_B, "Beta", true)
            ]}),
        )
        .await;

        let current = client.current_workspace().await.unwrap().unwrap();

        assert_eq!(current.name, "Beta");
    }

    #[tokio::test]
    async fn current_workspace_uses_the_first_when_none_is_default() {
        let (server, client) = setup().await;
        mount_listing(
            &server,
            json!([
                workspace_json(WORKSPACE_A, "Alpha", false),
                workspace_json(WORKSPACE_B, "Beta", false)
            ]),
        )
        .await;

        let current = client.current_workspace().await.unwrap().unwrap();

        assert_eq!(current.name, "Alpha");
    }

    #[tokio::test]
    async fn selected_id_missing_from_the_cache_gives_none() {
        let (server, client) = setup().await;
        mount_listing(&server, json!([workspace_json(WORKSPACE_A, "Alpha", true)])).await;
        client.set_current_workspace(Some(Uuid::new_v4()));

        assert!(client.current_workspace().await.unwrap().is_none());
    }
}

// ============================================================
// Body Shapes
// ============================================================

mod bodies {
    use super::*;

    const SESSION_ID: &str = "33333333-3333-4333-8333-333333333333";

    #[tokio::test]
    async fn metric_is_reshaped_with_metadata_winning() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path(format!("/test-sessions/{}/metrics", SESSION_ID)))
            .and(body_json(json!({
                "metricType": "network",
                "metricData": {
                    "name": "GET /login",
                    "value": "overridden",
                    "statusCode": 200
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "44444444-4444-4444-8444-444444444444",
                "sessionId": SESSION_ID,
                "metricType": "network",
                "metricName": "GET /login",
                "value": 120,
                "metadata": null,
                "recordedAt": "2025-01-01T00:00:00.000Z",
                "createdAt": "2025-01-01T00:00:00.000Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut metadata = JsonObject::new();
        metadata.insert("statusCode".into(), json!(200));
        metadata.insert("value".into(), json!("overridden"));

        let metric = client
            .record_metric(
                uuid(SESSION_ID),
                RecordMetricInput {
                    metric_type: MetricType::Network,
                    metric_name: "GET /login".into(),
                    value: json!(120),
                    metadata: Some(metadata),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(metric.metric_type, MetricType::Network);
    }

    #[tokio::test]
    async fn optional_input_fields_are_not_sent_as_null() {
        let (server, client) = setup().await;
        Mock::given(method("PATCH"))
            .and(path(format!("/prompts/{}", PROMPT_ID)))
            .and(body_json(json!({"title": "Renamed"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(prompt_json()))
            .expect(1)
            .mount(&server)
            .await;

        client
            .update_prompt(
                uuid(PROMPT_ID),
                &UpdatePromptInput {
                    title: Some("Renamed".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn workflow_action_config_is_sent_unchanged() {
        let (server, client) = setup().await;
        let action_config = json!({"customKey": 42, "webhookUrl": "http://x"});
        Mock::given(method("POST"))
            .and(path("/workflows"))
            .and(body_json(json!({
                "title": "Notify",
                "steps": [{
                    "stepNumber": 1,
                    "title": "Call hook",
                    "actionType": "custom",
                    "actionConfig": action_config
                }]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": PROMPT_ID,
                "title": "Notify",
                "description": null,
                "customInstructions": null,
                "category": null,
                "status": "draft",
                "version": 1,
                "lastUsedAt": null,
                "createdAt": "2025-01-01T00:00:00.000Z",
                "updatedAt": "2025-01-01T00:00:00.000Z",
                "steps": [{
                    "id": WORKSPACE_A,
                    "stepNumber": 1,
                    "title": "Call hook",
                    "description": null,
                    "actionType": "custom",
                    "actionConfig": action_config,
                    "condition": null,
                    "conditionType": null,
                    "timeoutMs": null,
                    "onError": "fail"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let input: CreateWorkflowInput = serde_json::from_value(json!({
            "title": "Notify",
            "steps": [{
                "stepNumber": 1,
                "title": "Call hook",
                "actionType": "custom",
                "actionConfig": action_config
            }]
        }))
        .unwrap();

        let workflow = client.create_workflow(&input).await.unwrap().unwrap();

        assert_eq!(workflow.steps[0].action_config["customKey"], json!(42));
        assert_eq!(workflow.steps[0].action_config["webhookUrl"], json!("http://x"));
    }

    #[tokio::test]
    async fn workflow_execution_without_input_sends_an_empty_object() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path(format!("/workflows/{}/execute", PROMPT_ID)))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client
            .execute_workflow(uuid(PROMPT_ID), &ExecuteWorkflowInput::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "API request failed: 500 - boom");
    }

    #[tokio::test]
    async fn folder_reorder_posts_items() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/document-folders/reorder"))
            .and(body_json(json!({"items": [{"id": WORKSPACE_A, "sortOrder": 2}]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        client
            .reorder_document_folders(&ReorderFoldersInput {
                items: vec![FolderOrder {
                    id: uuid(WORKSPACE_A),
                    sort_order: 2,
                }],
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn document_restore_posts_without_a_body() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path(format!("/documents/{}/restore/3", PROMPT_ID)))
            .respond_with(move |req: &Request| {
                assert!(req.body.is_empty());
                ResponseTemplate::new(404)
            })
            .expect(1)
            .mount(&server)
            .await;

        let err = client
            .restore_document_version(uuid(PROMPT_ID), 3)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn session_metrics_are_listed() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(format!("/test-sessions/{}/metrics", SESSION_ID)))
            .and(header_exists("X-API-Key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let metrics = client
            .get_session_metrics(uuid(SESSION_ID))
            .await
            .unwrap()
            .unwrap();

        assert!(metrics.is_empty());
    }
}

// ============================================================
// Tags and Lookups
// ============================================================

mod tags {
    use super::*;

    const TAG_A: &str = "55555555-5555-4555-8555-555555555555";
    const TAG_B: &str = "66666666-6666-4666-8666-666666666666";

    fn tag_json(id: &str, name: &str) -> Value {
        json!({"id": id, "name": name, "color": "#3b82f6", "createdAt": null})
    }

    /// Attach two tags, detach one and list what is left, for one taggable family.
    async fn exercise_tag_endpoints<Add, AddFut, Remove, RemoveFut, List, ListFut>(
        family: &str,
        add: Add,
        remove: Remove,
        list: List,
    ) where
        Add: FnOnce(ApiClient, Uuid, Vec<Uuid>) -> AddFut,
        AddFut: std::future::Future<Output = Result<(), ApiError>>,
        Remove: FnOnce(ApiClient, Uuid, Uuid) -> RemoveFut,
        RemoveFut: std::future::Future<Output = Result<(), ApiError>>,
        List: FnOnce(ApiClient, Uuid) -> ListFut,
        ListFut: std::future::Future<Output = Result<Option<Vec<Tag>>, ApiError>>,
    {
        let (server, client) = setup().await;
        let owner = uuid(PROMPT_ID);
        Mock::given(method("POST"))
            .and(path(format!("/{}/{}/tags", family, PROMPT_ID)))
            .and(body_json(json!({"tagIds": [TAG_A, TAG_B]})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!("/{}/{}/tags/{}", family, PROMPT_ID, TAG_B)))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/{}/{}/tags", family, PROMPT_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([tag_json(TAG_A, "rust")])))
            .expect(1)
            .mount(&server)
            .await;

        add(client.clone(), owner, vec![uuid(TAG_A), uuid(TAG_B)])
            .await
            .unwrap();
        remove(client.clone(), owner, uuid(TAG_B)).await.unwrap();
        let tags = list(client, owner).await.unwrap().unwrap();

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "rust");
    }

    #[tokio::test]
    async fn feature_tags_are_added_removed_and_listed() {
        exercise_tag_endpoints(
            "features",
            |client, id, tags| async move { client.add_feature_tags(id, &tags).await },
            |client, id, tag| async move { client.remove_feature_tag(id, tag).await },
            |client, id| async move { client.get_feature_tags(id).await },
        )
        .await;
    }

    #[tokio::test]
    async fn task_tags_are_added_removed_and_listed() {
        exercise_tag_endpoints(
            "tasks",
            |client, id, tags| async move { client.add_task_tags(id, &tags).await },
            |client, id, tag| async move { client.remove_task_tag(id, tag).await },
            |client, id| async move { client.get_task_tags(id).await },
        )
        .await;
    }

    #[tokio::test]
    async fn document_tags_are_added_removed_and_listed() {
        exercise_tag_endpoints(
            "documents",
            |client, id, tags| async move { client.add_document_tags(id, &tags).await },
            |client, id, tag| async move { client.remove_document_tag(id, tag).await },
            |client, id| async move { client.get_document_tags(id).await },
        )
        .await;
    }

    #[tokio::test]
    async fn single_tag_is_fetched_by_id() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(format!("/tags/{}", TAG_A)))
            .respond_with(ResponseTemplate::new(200).set_body_json(tag_json(TAG_A, "rust")))
            .expect(1)
            .mount(&server)
            .await;

        let tag = client.get_tag(uuid(TAG_A)).await.unwrap().unwrap();

        assert_eq!(tag.color, "#3b82f6");
    }

    #[tokio::test]
    async fn single_folder_is_fetched_by_id() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(format!("/document-folders/{}", TAG_A)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": TAG_A,
                "tenantId": null,
                "projectId": null,
                "parentId": null,
                "name": "Guides",
                "slug": "guides",
                "createdBy": null,
                "createdAt": "2025-01-01T00:00:00.000Z",
                "updatedAt": "2025-01-01T00:00:00.000Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let folder = client.get_document_folder(uuid(TAG_A)).await.unwrap().unwrap();

        assert_eq!(folder.name, "Guides");
        assert!(folder.children.is_empty());
    }

    #[tokio::test]
    async fn missing_feature_is_a_status_error() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(format!("/features/{}", TAG_A)))
            .respond_with(ResponseTemplate::new(404).set_body_string("Feature not found"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client.get_feature(uuid(TAG_A)).await.unwrap_err();

        assert_eq!(err.to_string(), "API request failed: 404 - Feature not found");
    }

    #[tokio::test]
    async fn snapshot_metrics_are_listed() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(format!("/quality-snapshots/{}/metrics", TAG_A)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let metrics = client
            .get_quality_snapshot_metrics(uuid(TAG_A))
            .await
            .unwrap()
            .unwrap();

        assert!(metrics.is_empty());
    }

    #[tokio::test]
    async fn quality_issue_update_sends_only_set_fields() {
        let (server, client) = setup().await;
        Mock::given(method("PATCH"))
            .and(path(format!("/quality-issues/{}", TAG_A)))
            .and(body_json(json!({"title": "Unused import"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let issue = client
            .update_quality_issue(
                uuid(TAG_A),
                &UpdateQualityIssueInput {
                    title: Some("Unused import".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(issue.is_none());
    }
}

// ============================================================
// Request Logging
// ============================================================

mod logging {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn lines(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.0.lock().unwrap())
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn request_lines_carry_the_selected_workspace() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/prompts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![])))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!("/templates/{}", PROMPT_ID)))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        client
            .list_prompts(&ListPromptsParams::default())
            .await
            .unwrap();
        client.set_current_workspace(Some(uuid(WORKSPACE_A)));
        client.delete_template(uuid(PROMPT_ID)).await.unwrap();

        let lines: Vec<String> = captured
            .lines()
            .into_iter()
            .filter(|l| l.contains("thinkprompt_mcp::client"))
            .collect();
        let get = lines.iter().find(|l| l.contains("GET")).unwrap();
        let delete = lines.iter().find(|l| l.contains("DELETE")).unwrap();
        assert!(get.contains("path=\"/prompts\"") || get.contains("path=/prompts"), "{}", get);
        assert!(get.contains("workspace=None"), "{}", get);
        assert!(
            delete.contains(&format!("workspace=Some({})", WORKSPACE_A)),
            "{}",
            delete
        );
    }
}
