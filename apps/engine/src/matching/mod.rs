// Skill matching core.
// Implements: skill string canonicalization, pairwise match classification,
// weighted candidate-vs-profile overlap scoring.

pub mod matcher;
pub mod normalizer;
pub mod weights;

// Re-export the public API consumed by other modules (catalog, recommend).
pub use matcher::{score_profile, MatchScore, MatchType, SkillMatch};
pub use normalizer::{normalize_set, Skill};
pub use weights::MatchWeights;
