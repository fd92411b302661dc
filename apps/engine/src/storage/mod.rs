//! Document storage collaborator — the single "fetch raw document bytes"
//! capability the core consumes. The matching core never touches the
//! filesystem or network itself; the startup sequence picks a backend and
//! hands it over behind `Arc<dyn DocumentStore>`.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use bytes::Bytes;
use tracing::info;

use crate::config::Config;
use crate::errors::AppError;

/// Opaque byte-fetch capability. Implement this to swap backends without
/// touching the catalog loader or caller code.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn fetch_document_bytes(&self, reference: &str) -> Result<Bytes, AppError>;
}

/// S3-backed store, MinIO-compatible through the configurable endpoint.
pub struct S3DocumentStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3DocumentStore {
    /// Constructs an S3 client configured for MinIO (local) or AWS
    /// (production).
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let credentials = Credentials::new(
            &config.aws_access_key_id,
            &config.aws_secret_access_key,
            None,
            None,
            "careers-static",
        );

        let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(credentials)
            .endpoint_url(&config.s3_endpoint)
            .load()
            .await;

        info!("S3 client initialized (bucket: {})", config.s3_bucket);
        Ok(Self {
            client: aws_sdk_s3::Client::new(&s3_config),
            bucket: config.s3_bucket.clone(),
        })
    }
}

#[async_trait]
impl DocumentStore for S3DocumentStore {
    async fn fetch_document_bytes(&self, reference: &str) -> Result<Bytes, AppError> {
        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(reference)
            .send()
            .await
            .map_err(|e| {
                AppError::Storage(format!(
                    "S3 fetch failed for s3://{}/{}: {e}",
                    self.bucket, reference
                ))
            })?;

        let data = object
            .body
            .collect()
            .await
            .map_err(|e| AppError::Storage(format!("S3 body read failed for {reference}: {e}")))?;
        Ok(data.into_bytes())
    }
}

/// Directory-rooted store for local development. References are resolved
/// relative to the root; anything that would escape it is rejected.
pub struct LocalDocumentStore {
    root: PathBuf,
}

impl LocalDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, reference: &str) -> Result<PathBuf, AppError> {
        let path = Path::new(reference);
        let escapes = path.is_absolute()
            || path
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
        if escapes {
            return Err(AppError::Storage(format!(
                "document reference {reference:?} escapes the store root"
            )));
        }
        Ok(self.root.join(path))
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn fetch_document_bytes(&self, reference: &str) -> Result<Bytes, AppError> {
        let path = self.resolve(reference)?;
        let data = tokio::fs::read(&path).await.map_err(|e| {
            AppError::Storage(format!("local fetch failed for {}: {e}", path.display()))
        })?;
        Ok(Bytes::from(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_store_fetches_bytes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("careers.json"), b"[]").unwrap();

        let store = LocalDocumentStore::new(dir.path());
        let bytes = store.fetch_document_bytes("careers.json").await.unwrap();
        assert_eq!(&bytes[..], b"[]");
    }

    #[tokio::test]
    async fn test_local_store_missing_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDocumentStore::new(dir.path());
        assert!(matches!(
            store.fetch_document_bytes("nope.json").await,
            Err(AppError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn test_local_store_rejects_root_escape() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDocumentStore::new(dir.path());
        for reference in ["../secrets.json", "/etc/passwd", "sub/../../x"] {
            assert!(
                matches!(
                    store.fetch_document_bytes(reference).await,
                    Err(AppError::Storage(_))
                ),
                "reference {reference:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_local_store_allows_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("catalogs")).unwrap();
        std::fs::write(dir.path().join("catalogs/v2.json"), b"[]").unwrap();

        let store = LocalDocumentStore::new(dir.path());
        assert!(store.fetch_document_bytes("catalogs/v2.json").await.is_ok());
    }
}
