// CLI for bulk comparison page generation

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use comparison::{packager, KeywordSet, OpenAiGenerator, Pipeline, PipelineConfig};
use openai_client::OpenAiClient;
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Generate a comparison page for every pair of keywords.
#[derive(Parser)]
#[command(name = "generate_pages")]
struct Args {
    /// Keywords to compare (at least 2)
    #[arg(required = true, num_args = 2..)]
    keywords: Vec<String>,

    /// Directory for the generated site
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,

    /// Path of the ZIP archive to write
    #[arg(long, default_value = "comparison_pages.zip")]
    archive: PathBuf,

    /// Model override (defaults to OPENAI_MODEL, then gpt-4)
    #[arg(long)]
    model: Option<String>,

    /// Seed for snippet category selection, for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,comparison=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    let keywords = KeywordSet::new(&args.keywords).context("Invalid keyword list")?;

    let mut client = OpenAiClient::new(config.openai_api_key.clone())
        .with_timeout(Duration::from_secs(config.openai_timeout_secs));
    if let Some(base_url) = &config.openai_base_url {
        client = client.with_base_url(base_url.clone());
    }
    let generator = OpenAiGenerator::new(client);

    let mut pipeline_config =
        PipelineConfig::default().with_model(args.model.unwrap_or(config.openai_model));
    if let Some(seed) = args.seed {
        pipeline_config = pipeline_config.with_snippet_seed(seed);
    }

    let pipeline = Pipeline::with_config(generator, pipeline_config);
    let documents = pipeline.run(&keywords).await?;

    packager::write_site(&documents, &args.out_dir)?;
    packager::write_archive(&documents, &args.archive)?;

    tracing::info!(
        pages = documents.len(),
        out_dir = %args.out_dir.display(),
        archive = %args.archive.display(),
        "generation complete"
    );

    Ok(())
}
