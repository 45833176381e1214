use mcp_recipe_finder::client::{client::DEFAULT_BASE_URL, SpoonacularAuth, SpoonacularClient};
use mcp_recipe_finder::server::RecipeFinderMcpServer;
use mcp_recipe_finder::translation::Translations;
use rmcp::ServiceExt;
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use std::env;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the stdio transport
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Get configuration from environment variables
    let base_url =
        env::var("SPOONACULAR_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let transport = env::var("MCP_TRANSPORT").unwrap_or_else(|_| "stdio".to_string());

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

    let auth = SpoonacularAuth::from_env();
    let client = Arc::new(SpoonacularClient::with_base_url(base_url, auth));
    let translations = Arc::new(Translations::builtin());

    tracing::info!(
        "Loaded {} ingredient and {} recipe term translations",
        translations.ingredients.len(),
        translations.recipe_terms.len()
    );
    tracing::info!("Using recipe API at {}", client.base_url());

    match transport.as_str() {
        "stdio" => {
            tracing::info!("Recipe Finder MCP Server starting on stdio");

            let service = RecipeFinderMcpServer::new(client, translations)
                .serve(rmcp::transport::stdio())
                .await
                .inspect_err(|e| tracing::error!("Failed to start stdio server: {}", e))?;

            service.waiting().await?;
        }
        "sse" => {
            let config = SseServerConfig {
                bind: bind_addr.parse()?,
                sse_path: "/sse".to_string(),
                post_path: "/message".to_string(),
                ct: tokio_util::sync::CancellationToken::new(),
                sse_keep_alive: None,
            };

            tracing::info!("Recipe Finder MCP Server listening on {}", config.bind);

            // serve_with_config handles binding, axum server setup, and graceful shutdown internally
            let sse_server = SseServer::serve_with_config(config).await?;

            let ct = sse_server.with_service(move || {
                RecipeFinderMcpServer::new(client.clone(), translations.clone())
            });

            tracing::info!("Recipe Finder MCP Server started successfully");

            // Wait for Ctrl+C
            tokio::signal::ctrl_c().await?;
            tracing::info!("Shutting down...");
            ct.cancel();
        }
        other => {
            anyhow::bail!("Unknown MCP_TRANSPORT '{}': expected 'stdio' or 'sse'", other);
        }
    }

    Ok(())
}
