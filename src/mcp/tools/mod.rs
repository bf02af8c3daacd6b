//! Tool families. Each file contributes one router; `router` joins them into the catalog.

mod documents;
mod projects;
mod prompts;
mod quality;
mod tasks;
mod testing;
mod workflows;
mod workspaces;

pub use documents::*;
pub use projects::*;
pub use prompts::*;
pub use quality::*;
pub use tasks::*;
pub use testing::*;
pub use workflows::*;
pub use workspaces::*;

use rmcp::handler::server::tool::ToolRouter;

use super::ThinkPromptServer;

pub(crate) fn router() -> ToolRouter<ThinkPromptServer> {
    ThinkPromptServer::prompt_tools()
        + ThinkPromptServer::workspace_tools()
        + ThinkPromptServer::project_tools()
        + ThinkPromptServer::task_tools()
        + ThinkPromptServer::workflow_tools()
        + ThinkPromptServer::testing_tools()
        + ThinkPromptServer::quality_tools()
        + ThinkPromptServer::document_tools()
}
