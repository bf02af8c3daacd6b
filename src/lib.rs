//! MCP adapter exposing the ThinkPrompt REST API as tools and resources over stdio.

pub mod client;
pub mod config;
pub mod mcp;
pub mod models;
