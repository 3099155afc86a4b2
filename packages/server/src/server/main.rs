// Main entry point for the comparison page server

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use comparison::{OpenAiGenerator, PipelineConfig, TextGenerator};
use openai_client::OpenAiClient;
use server_core::{server::build_app, server::AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,comparison=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Matchup AI comparison server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Build the OpenAI-backed generator
    let mut client = OpenAiClient::new(config.openai_api_key.clone())
        .with_timeout(Duration::from_secs(config.openai_timeout_secs));
    if let Some(base_url) = &config.openai_base_url {
        client = client.with_base_url(base_url.clone());
    }
    let generator: Arc<dyn TextGenerator> = Arc::new(OpenAiGenerator::new(client));

    let pipeline_config = PipelineConfig::default().with_model(config.openai_model.clone());

    // Build application
    let app = build_app(AppState::new(generator, pipeline_config));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
