use anyhow::{bail, Context, Result};

/// Which document storage backend serves the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Local,
    S3,
}

/// Application configuration loaded from environment variables.
/// S3 settings are required only when the S3 backend is selected.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_backend: StorageBackend,
    pub local_store_root: String,
    pub catalog_reference: String,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub recommend_limit: usize,
    pub recommend_min_score: f64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let storage_backend = match std::env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "local".to_string())
            .to_lowercase()
            .as_str()
        {
            "local" => StorageBackend::Local,
            "s3" => StorageBackend::S3,
            other => bail!("STORAGE_BACKEND must be 'local' or 's3', got '{other}'"),
        };

        let (s3_bucket, s3_endpoint, aws_access_key_id, aws_secret_access_key) =
            if storage_backend == StorageBackend::S3 {
                (
                    require_env("S3_BUCKET")?,
                    require_env("S3_ENDPOINT")?,
                    require_env("AWS_ACCESS_KEY_ID")?,
                    require_env("AWS_SECRET_ACCESS_KEY")?,
                )
            } else {
                Default::default()
            };

        Ok(Config {
            storage_backend,
            local_store_root: std::env::var("LOCAL_STORE_ROOT")
                .unwrap_or_else(|_| "data".to_string()),
            catalog_reference: std::env::var("CATALOG_REFERENCE")
                .unwrap_or_else(|_| "careers.json".to_string()),
            s3_bucket,
            s3_endpoint,
            aws_access_key_id,
            aws_secret_access_key,
            recommend_limit: std::env::var("RECOMMEND_LIMIT")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<usize>()
                .context("RECOMMEND_LIMIT must be a positive integer")?,
            recommend_min_score: std::env::var("RECOMMEND_MIN_SCORE")
                .unwrap_or_else(|_| "0".to_string())
                .parse::<f64>()
                .context("RECOMMEND_MIN_SCORE must be a number in [0, 1]")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
