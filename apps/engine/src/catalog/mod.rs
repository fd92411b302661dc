//! Career Catalog — the immutable, in-memory collection of career profiles.
//!
//! Loaded once at process start and shared across concurrent recommendation
//! calls behind an `Arc`, with no synchronization needed since nothing
//! mutates after load.

pub mod loader;
pub mod profile;

pub use profile::{CareerProfile, ProfileRecord};

use std::collections::HashMap;
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;

/// Lightweight catalog statistics for startup logging.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub profiles: usize,
    pub categories: usize,
    pub loaded_at: DateTime<Utc>,
}

/// The ground truth against which matching occurs. Owns every
/// `CareerProfile` exclusively; queries hand out references that never
/// outlive one recommendation call, and results carry clones.
#[derive(Debug)]
pub struct CareerCatalog {
    profiles: Vec<CareerProfile>,
    by_id: HashMap<String, usize>,
    loaded_at: DateTime<Utc>,
}

impl CareerCatalog {
    /// Assembles a catalog from already-validated profiles, rejecting
    /// duplicate ids. Load order is preserved as the stable iteration order.
    pub(crate) fn from_profiles(profiles: Vec<CareerProfile>) -> Result<Self, AppError> {
        let mut by_id = HashMap::with_capacity(profiles.len());
        for (idx, profile) in profiles.iter().enumerate() {
            if by_id.insert(profile.id.clone(), idx).is_some() {
                return Err(AppError::CatalogLoad(format!(
                    "duplicate profile id '{}'",
                    profile.id
                )));
            }
        }
        Ok(Self {
            profiles,
            by_id,
            loaded_at: Utc::now(),
        })
    }

    /// Read-only view of every profile in stable load order.
    pub fn all(&self) -> &[CareerProfile] {
        &self.profiles
    }

    /// Looks up a profile by id. An unknown id is a normal outcome, not an
    /// error.
    pub fn profile(&self, id: &str) -> Option<&CareerProfile> {
        self.by_id.get(id).map(|&idx| &self.profiles[idx])
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn summary(&self) -> CatalogSummary {
        let categories: HashSet<&str> = self
            .profiles
            .iter()
            .map(|p| p.category.as_str())
            .collect();
        CatalogSummary {
            profiles: self.profiles.len(),
            categories: categories.len(),
            loaded_at: self.loaded_at,
        }
    }
}
