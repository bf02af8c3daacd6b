use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use thinkprompt_mcp::{
    client::ApiClient,
    config::{Config, API_KEY_ENV, API_URL_ENV},
    mcp,
};

#[derive(Parser)]
#[command(name = "thinkprompt-mcp")]
#[command(version)]
#[command(about = "MCP server for ThinkPrompt prompts, projects, workflows and QA")]
struct Cli {
    /// Base URL of the ThinkPrompt API
    #[arg(long, env = API_URL_ENV)]
    api_url: Option<String>,

    /// API key sent with every request
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,
}

/// Log to stderr. Stdout carries the MCP protocol.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "thinkprompt_mcp=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match Config::resolve(cli.api_url, cli.api_key) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing();
    tracing::info!(api_url = %config.api_url, "Using ThinkPrompt API");

    let client = ApiClient::from_config(&config);
    mcp::run_stdio_server(client).await
}
