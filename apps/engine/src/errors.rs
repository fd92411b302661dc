use thiserror::Error;

/// Application-level error type.
/// Callers throughout the crate return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// A raw skill string that cannot be normalized (empty after trimming).
    /// Recovered locally when normalizing a list; escalates to `InvalidInput`
    /// only when the whole candidate set ends up empty.
    #[error("Invalid skill: {0}")]
    InvalidSkill(String),

    /// Malformed caller input: empty candidate set, zero limit, or a
    /// threshold outside [0, 1]. Surfaced to the caller, never retried.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed catalog source. Fatal at startup — no partial catalog is
    /// ever returned.
    #[error("Catalog load error: {0}")]
    CatalogLoad(String),

    /// Document storage collaborator failure (S3 or local store).
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
