mod catalog;
mod config;
mod errors;
mod matching;
mod recommend;
mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StorageBackend};
use crate::recommend::{RecommendOptions, RecommendationEngine};
use crate::storage::{DocumentStore, LocalDocumentStore, S3DocumentStore};

/// Smoke runner: loads the catalog through the configured document store,
/// ranks it against skills passed as CLI arguments, and prints the result
/// as JSON.
///
///   engine "Python" "SQL" "Tableau"
#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting career recommendation engine v{}", env!("CARGO_PKG_VERSION"));

    // Initialize document storage and fetch the catalog source
    let store = build_store(&config).await?;
    let bytes = store
        .fetch_document_bytes(&config.catalog_reference)
        .await
        .with_context(|| format!("fetching catalog '{}'", config.catalog_reference))?;

    // Load the catalog once; it is immutable from here on
    let catalog = Arc::new(catalog::loader::from_json_bytes(&bytes)?);
    info!("Catalog summary: {:?}", catalog.summary());

    // Build the engine by dependency injection and run one recommendation
    let engine = RecommendationEngine::new(catalog);
    let raw_skills: Vec<String> = std::env::args().skip(1).collect();
    let options = RecommendOptions {
        limit: config.recommend_limit,
        min_score: config.recommend_min_score,
    };

    let recommendations = engine.recommend(&raw_skills, &options)?;
    info!("Returning {} recommendations", recommendations.len());
    println!("{}", serde_json::to_string_pretty(&recommendations)?);

    Ok(())
}

/// Selects the document store backend from configuration.
async fn build_store(config: &Config) -> Result<Arc<dyn DocumentStore>> {
    Ok(match config.storage_backend {
        StorageBackend::Local => {
            info!("Using local document store at '{}'", config.local_store_root);
            Arc::new(LocalDocumentStore::new(config.local_store_root.clone()))
        }
        StorageBackend::S3 => Arc::new(S3DocumentStore::connect(config).await?),
    })
}
