// Recommendation orchestration.
// Implements: input normalization, catalog-wide scoring, deterministic
// ranking with tie-breaks, truncation to the caller's limit.

pub mod engine;

pub use engine::{Recommendation, RecommendationEngine, RecommendOptions};
