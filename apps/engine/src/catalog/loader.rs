//! Catalog loading — parses the JSON source format into a validated,
//! fully-normalized `CareerCatalog`. Any malformed record fails the whole
//! load; no partial catalog is ever returned.

use tracing::info;

use crate::catalog::{CareerCatalog, CareerProfile, ProfileRecord};
use crate::errors::AppError;

/// Parses a JSON array of profile records fetched from document storage.
pub fn from_json_bytes(bytes: &[u8]) -> Result<CareerCatalog, AppError> {
    let records: Vec<ProfileRecord> = serde_json::from_slice(bytes)
        .map_err(|e| AppError::CatalogLoad(format!("unparseable catalog JSON: {e}")))?;
    from_records(records)
}

/// Builds a catalog from already-parsed records. Used directly by tests
/// with synthetic catalogs; `from_json_bytes` funnels through here.
pub fn from_records(records: Vec<ProfileRecord>) -> Result<CareerCatalog, AppError> {
    let profiles = records
        .into_iter()
        .map(CareerProfile::from_record)
        .collect::<Result<Vec<_>, _>>()?;

    let catalog = CareerCatalog::from_profiles(profiles)?;
    info!(
        "Catalog loaded: {} profiles across {} categories",
        catalog.len(),
        catalog.summary().categories
    );
    Ok(catalog)
}
