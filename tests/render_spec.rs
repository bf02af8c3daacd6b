use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use speculate2::speculate;
use thinkprompt_mcp::mcp::resources::*;
use thinkprompt_mcp::models::*;

const CREATED: &str = "2025-01-01T00:00:00Z";
const UPDATED: &str = "2025-03-04T05:06:07.891Z";
const SESSION_ID: &str = "33333333-3333-4333-8333-333333333333";
const PROJECT_ID: &str = "6b2e0f3a-4d5c-4e7f-9a8b-0c1d2e3f4a51";

fn from<T: DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("Fixture should deserialize")
}

fn prompt(extra: Value) -> Prompt {
    let mut base = json!({
        "id": "0b6a4c1e-5d3f-4e2a-9c8b-7a6f5e4d3c2b",
        "title": "Summarize",
        "description": null,
        "content": "Summarize {{text}}",
        "usageCount": 3,
        "createdAt": CREATED,
        "updatedAt": UPDATED
    });
    merge(&mut base, extra);
    from(base)
}

fn template(extra: Value) -> Template {
    let mut base = json!({
        "id": "77777777-7777-4777-8777-777777777777",
        "title": "Commit Messages",
        "description": "How we write commits",
        "content": "Use the imperative mood.",
        "type": "style",
        "category": null,
        "language": null,
        "createdAt": CREATED,
        "updatedAt": CREATED
    });
    merge(&mut base, extra);
    from(base)
}

fn workflow(extra: Value) -> Workflow {
    let mut base = json!({
        "id": "88888888-8888-4888-8888-888888888888",
        "title": "Release",
        "description": null,
        "customInstructions": null,
        "category": null,
        "status": "draft",
        "version": 1,
        "lastUsedAt": null,
        "createdAt": CREATED,
        "updatedAt": CREATED
    });
    merge(&mut base, extra);
    from(base)
}

fn session(extra: Value) -> TestSession {
    let mut base = json!({
        "id": SESSION_ID,
        "name": "Checkout",
        "triggeredBy": "ai",
        "status": "running",
        "startedAt": CREATED,
        "createdAt": CREATED,
        "updatedAt": CREATED
    });
    merge(&mut base, extra);
    from(base)
}

fn metric(n: usize) -> Value {
    json!({
        "id": "99999999-9999-4999-8999-999999999999",
        "sessionId": SESSION_ID,
        "metricType": "network",
        "metricName": format!("request {}", n),
        "value": {"status": 200},
        "recordedAt": CREATED,
        "createdAt": CREATED
    })
}

fn issue(extra: Value) -> TestIssue {
    let mut base = json!({
        "id": "44444444-4444-4444-8444-444444444444",
        "title": "Broken link",
        "issueType": "bug",
        "severity": "critical",
        "status": "confirmed",
        "createdAt": UPDATED,
        "updatedAt": UPDATED
    });
    merge(&mut base, extra);
    from(base)
}

fn merge(base: &mut Value, extra: Value) {
    if let (Some(base), Value::Object(extra)) = (base.as_object_mut(), extra) {
        base.extend(extra);
    }
}

speculate! {
    describe "render_prompt" {
        it "renders every section for a bare prompt" {
            let text = render_prompt(&prompt(json!({})));

            assert_eq!(
                text,
                "# Summarize\n\
                 \n\
                 \n\
                 \n\
                 ## Content\n\
                 Summarize {{text}}\n\
                 \n\
                 ## Variables\n\
                 No variables required\n\
                 \n\
                 ## Statistics\n\
                 - Usage count: 3\n\
                 - Created: 2025-01-01T00:00:00.000Z\n\
                 - Updated: 2025-03-04T05:06:07.891Z\n"
            );
        }

        it "lists variables with their types" {
            let text = render_prompt(&prompt(json!({
                "description": "Short summaries",
                "variables": [
                    {"name": "text", "type": "textarea", "description": "Input"},
                    {"name": "tone", "type": "select"}
                ]
            })));

            assert!(text.contains("# Summarize\n\nShort summaries\n"));
            assert!(text.contains(
                "## Variables\n- **text** (textarea): Input\n- **tone** (select): No description\n"
            ));
        }
    }

    describe "render_template" {
        it "labels the template type" {
            let text = render_template(&template(json!({})));

            assert!(text.starts_with("# Commit Messages\n**Type:** Style Guide\n\nHow we write commits\n"));
            assert!(!text.contains("**Category:**"));
            assert!(!text.contains("## When to Use This Template"));
        }

        it "adds optional metadata and hint sections" {
            let text = render_template(&template(json!({
                "type": "example",
                "category": "git",
                "language": "en",
                "useCaseHints": ["Before committing", "In review"],
                "tags": [{"id": "12121212-1212-4212-8212-121212121212", "name": "vcs", "color": "#fff"}]
            })));

            assert!(text.contains("**Type:** Example Prompt\n**Category:** git\n**Language:** en\n"));
            assert!(text.contains(
                "## When to Use This Template\n- Before committing\n- In review\n\n## Tags\n- vcs\n\n## Statistics\n"
            ));
        }
    }

    describe "render_workflow" {
        it "describes an empty workflow" {
            let text = render_workflow(&workflow(json!({})));

            assert!(text.contains("## Description\nNo description\n\n## Status\n"));
            assert!(text.contains("- **Status:** draft\n- **Version:** 1\n- **Public:** No\n\n"));
            assert!(text.contains("## Resources (0)\nNo resources attached\n"));
            assert!(text.contains("## Steps (0)\nNo steps defined\n"));
            assert!(!text.contains("Last used"));
            assert!(!text.contains("## Custom Instructions"));
        }

        it "lists resources and steps" {
            let text = render_workflow(&workflow(json!({
                "isPublic": true,
                "category": "ops",
                "customInstructions": "Be careful",
                "lastUsedAt": UPDATED,
                "resources": [
                    {
                        "id": "a0000000-0000-4000-8000-000000000001",
                        "resourceType": "prompt",
                        "resourceId": "a0000000-0000-4000-8000-000000000002",
                        "alias": "notes"
                    },
                    {
                        "id": "a0000000-0000-4000-8000-000000000003",
                        "resourceType": "task",
                        "resourceId": "a0000000-0000-4000-8000-000000000004",
                        "alias": null
                    }
                ],
                "steps": [
                    {
                        "id": "b0000000-0000-4000-8000-000000000001",
                        "stepNumber": 1,
                        "title": "Draft notes",
                        "description": null,
                        "actionType": "execute_prompt",
                        "condition": null,
                        "conditionType": null,
                        "timeoutMs": null,
                        "onError": "fail"
                    },
                    {
                        "id": "b0000000-0000-4000-8000-000000000002",
                        "stepNumber": 2,
                        "title": "Close task",
                        "description": null,
                        "actionType": "update_task_status",
                        "condition": "notes approved",
                        "conditionType": "ai",
                        "timeoutMs": null,
                        "onError": "skip"
                    }
                ]
            })));

            assert!(text.contains("## Custom Instructions\nBe careful\n\n"));
            assert!(text.contains("- **Public:** Yes\n- **Category:** ops\n"));
            assert!(text.contains(
                "## Resources (2)\n- [PROMPT] notes\n- [TASK] a0000000-0000-4000-8000-000000000004\n"
            ));
            assert!(text.contains(
                "## Steps (2)\n1. **Draft notes**: execute_prompt\n2. **Close task**: update_task_status (condition: ai)\n"
            ));
            assert!(text.contains("- Last used: 2025-03-04T05:06:07.891Z\n- Created:"));
        }
    }

    describe "render_test_session" {
        it "marks a running session" {
            let text = render_test_session(&session(json!({})));

            assert!(text.starts_with("# Test Session: Checkout\n\n## Status\n- **Status:** running\n"));
            assert!(text.contains("- **Completed:** In progress\n\n"));
            assert!(text.contains("## Metrics (0)\nNo metrics recorded\n"));
            assert!(text.contains("## Issues (0)\nNo issues reported\n"));
            assert!(text.ends_with("## Summary\nNo summary available (session still running)\n"));
        }

        it "falls back to a placeholder name" {
            let text = render_test_session(&session(json!({"name": null})));

            assert!(text.starts_with("# Test Session: Unnamed session\n"));
        }

        it "shows links, metadata and the summary" {
            let text = render_test_session(&session(json!({
                "status": "completed",
                "projectId": PROJECT_ID,
                "endedAt": UPDATED,
                "metadata": {"browser": "chromium"},
                "summary": {"pagesVisited": 2}
            })));

            assert!(text.contains(&format!(
                "- **Completed:** 2025-03-04T05:06:07.891Z\n- **Project ID:** {}\n\n",
                PROJECT_ID
            )));
            assert!(text.contains("## Metadata\n```json\n{\n  \"browser\": \"chromium\"\n}\n```\n"));
            assert!(text.ends_with("## Summary\n```json\n{\n  \"pagesVisited\": 2\n}\n```\n"));
        }

        it "caps the metric listing but counts every metric" {
            let metrics: Vec<Value> = (1..=60).map(metric).collect();
            let text = render_test_session(&session(json!({"metrics": metrics})));

            assert!(text.contains("## Metrics (60)\n- [network] **request 1**: {\"status\":200}\n"));
            assert!(text.contains("**request 50**"));
            assert!(!text.contains("**request 51**"));
        }

        it "lists issues with uppercase severity" {
            let text = render_test_session(&session(json!({
                "issues": [{
                    "id": "44444444-4444-4444-8444-444444444444",
                    "title": "Broken link",
                    "issueType": "ux",
                    "severity": "medium",
                    "status": "new",
                    "createdAt": CREATED,
                    "updatedAt": CREATED
                }]
            })));

            assert!(text.contains("## Issues (1)\n- [MEDIUM] **Broken link** (ux): No description\n"));
        }
    }

    describe "render_test_issue" {
        it "fills placeholders for missing details" {
            let text = render_test_issue(&issue(json!({})));

            assert_eq!(
                text,
                "# Issue: Broken link\n\
                 \n\
                 ## Details\n\
                 - **Type:** bug\n\
                 - **Severity:** critical\n\
                 - **Status:** confirmed\n\
                 - **Created:** 2025-03-04T05:06:07.891Z\n\
                 \n\
                 ## Description\n\
                 No description provided\n\
                 \n\
                 ## Steps to Reproduce\n\
                 No steps provided\n\
                 \n\
                 ## Expected Behavior\n\
                 Not specified\n\
                 \n\
                 ## Actual Behavior\n\
                 Not specified\n\
                 \n\
                 ## Environment\n\
                 Not specified\n"
            );
        }

        it "numbers steps and appends the screenshot" {
            let text = render_test_issue(&issue(json!({
                "sessionId": SESSION_ID,
                "stepsToReproduce": ["Open cart", "Click pay"],
                "expectedBehavior": "Payment form",
                "screenshotUrl": "https://example.com/shot.png"
            })));

            assert!(text.contains(&format!("- **Session ID:** {}\n\n", SESSION_ID)));
            assert!(text.contains("## Steps to Reproduce\n1. Open cart\n2. Click pay\n"));
            assert!(text.contains("## Expected Behavior\nPayment form\n"));
            assert!(text.ends_with("## Screenshot\nhttps://example.com/shot.png\n"));
        }

        it "treats an empty step list as missing" {
            let text = render_test_issue(&issue(json!({"stepsToReproduce": []})));

            assert!(text.contains("## Steps to Reproduce\nNo steps provided\n"));
        }
    }
}
