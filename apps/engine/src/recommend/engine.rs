//! Recommendation Engine — scores every catalog profile against a candidate
//! skill set and returns the top-N, fully-ordered recommendations.
//!
//! Pure computation over immutable inputs: the catalog is injected behind an
//! `Arc` at construction, each call allocates its own ephemeral candidate
//! set and results, and concurrent calls need no coordination.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{CareerCatalog, CareerProfile};
use crate::errors::AppError;
use crate::matching::{normalize_set, score_profile, MatchScore, MatchWeights};

/// Caller-facing options, validated once at the `recommend` boundary.
#[derive(Debug, Clone, Copy)]
pub struct RecommendOptions {
    /// Maximum number of recommendations returned. Must be positive.
    pub limit: usize,
    /// Profiles scoring below this threshold are dropped. Must lie in
    /// [0, 1]; the default 0 keeps every scoreable profile.
    pub min_score: f64,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            limit: 5,
            min_score: 0.0,
        }
    }
}

/// A career profile paired with its match score, ranked for presentation.
/// Produced fresh per request; carries a clone of the profile so nothing
/// borrows from the catalog past the call.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub profile: CareerProfile,
    pub score: MatchScore,
}

pub struct RecommendationEngine {
    catalog: Arc<CareerCatalog>,
    weights: MatchWeights,
}

impl RecommendationEngine {
    /// Engine over an injected catalog with the default weight policy.
    pub fn new(catalog: Arc<CareerCatalog>) -> Self {
        Self::with_weights(catalog, MatchWeights::default())
    }

    pub fn with_weights(catalog: Arc<CareerCatalog>, weights: MatchWeights) -> Self {
        Self { catalog, weights }
    }

    /// Ranks the catalog against a raw candidate skill list.
    ///
    /// Normalizes the input (skipping unnormalizable entries), scores every
    /// profile in load order, discards unscoreable profiles and those below
    /// `min_score`, sorts by the deterministic total order, and truncates to
    /// `limit`. Fails with `InvalidInput` on a zero limit, a threshold
    /// outside [0, 1], or a candidate set that normalizes to nothing.
    pub fn recommend(
        &self,
        raw_skills: &[String],
        options: &RecommendOptions,
    ) -> Result<Vec<Recommendation>, AppError> {
        if options.limit == 0 {
            return Err(AppError::InvalidInput(
                "limit must be a positive integer".to_string(),
            ));
        }
        if !options.min_score.is_finite() || !(0.0..=1.0).contains(&options.min_score) {
            return Err(AppError::InvalidInput(format!(
                "min_score must lie in [0, 1], got {}",
                options.min_score
            )));
        }

        let candidate = normalize_set(raw_skills);
        if candidate.is_empty() {
            return Err(AppError::InvalidInput(
                "candidate skill set is empty after normalization".to_string(),
            ));
        }
        debug!(
            "Scoring {} profiles against {} candidate skills",
            self.catalog.len(),
            candidate.len()
        );

        let mut results: Vec<Recommendation> = Vec::new();
        for profile in self.catalog.all() {
            if profile.required_skills.is_empty() && profile.desirable_skills.is_empty() {
                debug!("Skipping unscoreable profile '{}'", profile.id);
                continue;
            }
            let score = score_profile(&candidate, profile, &self.weights);
            if score.value < options.min_score {
                continue;
            }
            results.push(Recommendation {
                profile: profile.clone(),
                score,
            });
        }

        results.sort_by(rank_order);
        results.truncate(options.limit);
        Ok(results)
    }
}

/// The output ordering contract: descending score, then more matched
/// required skills, then lexicographically smaller title, then smaller id.
/// Ids are unique, so the order is total and reruns are reproducible.
fn rank_order(a: &Recommendation, b: &Recommendation) -> Ordering {
    b.score
        .value
        .partial_cmp(&a.score.value)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.score.matched_required.cmp(&a.score.matched_required))
        .then_with(|| a.profile.title.cmp(&b.profile.title))
        .then_with(|| a.profile.id.cmp(&b.profile.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{loader, ProfileRecord};

    fn record(id: &str, title: &str, required: &[&str], desirable: &[&str]) -> ProfileRecord {
        ProfileRecord {
            id: id.to_string(),
            title: title.to_string(),
            category: "Test".to_string(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            desirable_skills: desirable.iter().map(|s| s.to_string()).collect(),
            description: None,
            seniority: None,
        }
    }

    fn engine(records: Vec<ProfileRecord>) -> RecommendationEngine {
        RecommendationEngine::new(Arc::new(loader::from_records(records).unwrap()))
    }

    fn skills(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_python_sql_scenario() {
        let engine = engine(vec![
            record("data-analyst", "Data Analyst", &["python", "sql"], &["tableau"]),
            record("barista", "Barista", &["customer service"], &[]),
        ]);
        let results = engine
            .recommend(
                &skills(&["Python", "SQL"]),
                &RecommendOptions {
                    limit: 3,
                    min_score: 0.0,
                },
            )
            .unwrap();

        let non_zero: Vec<_> = results.iter().filter(|r| r.score.value > 0.0).collect();
        assert_eq!(non_zero.len(), 1);
        let top = non_zero[0];
        assert_eq!(top.profile.id, "data-analyst");
        // required fully covered, desirable tableau unmatched: 2.0 / 2.5
        assert!((top.score.value - 0.8).abs() < 1e-9);
        assert_eq!(top.score.matched_required, 2);
    }

    #[test]
    fn test_full_coverage_scores_one() {
        let engine = engine(vec![record(
            "data-analyst",
            "Data Analyst",
            &["python", "sql"],
            &["tableau"],
        )]);
        let results = engine
            .recommend(
                &skills(&["Python", "SQL", "Tableau"]),
                &RecommendOptions::default(),
            )
            .unwrap();
        assert!((results[0].score.value - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_candidate_set_is_invalid_input() {
        let engine = engine(vec![record("dev", "Dev", &["python"], &[])]);
        assert!(matches!(
            engine.recommend(&[], &RecommendOptions { limit: 5, min_score: 0.0 }),
            Err(AppError::InvalidInput(_))
        ));
        // Entries that all fail normalization escalate the same way.
        assert!(matches!(
            engine.recommend(&skills(&["  ", ""]), &RecommendOptions::default()),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_limit_is_invalid_input() {
        let engine = engine(vec![record("dev", "Dev", &["python"], &[])]);
        assert!(matches!(
            engine.recommend(&skills(&["python"]), &RecommendOptions { limit: 0, min_score: 0.0 }),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_malformed_threshold_is_invalid_input() {
        let engine = engine(vec![record("dev", "Dev", &["python"], &[])]);
        for bad in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                engine.recommend(
                    &skills(&["python"]),
                    &RecommendOptions { limit: 5, min_score: bad }
                ),
                Err(AppError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_min_score_drops_zero_score_profiles() {
        let engine = engine(vec![
            record("data-analyst", "Data Analyst", &["python"], &[]),
            record("barista", "Barista", &["customer service"], &[]),
        ]);
        let results = engine
            .recommend(
                &skills(&["python"]),
                &RecommendOptions {
                    limit: 5,
                    min_score: 0.01,
                },
            )
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].profile.id, "data-analyst");

        // Default threshold keeps scoreable zero-score profiles.
        let all = engine
            .recommend(&skills(&["python"]), &RecommendOptions::default())
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_unscoreable_profiles_never_ranked() {
        let engine = engine(vec![
            record("empty", "Empty", &[], &[]),
            record("dev", "Dev", &["python"], &[]),
        ]);
        let results = engine
            .recommend(&skills(&["python"]), &RecommendOptions::default())
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].profile.id, "dev");
    }

    #[test]
    fn test_truncates_to_limit() {
        let engine = engine(vec![
            record("a", "A", &["python"], &[]),
            record("b", "B", &["python"], &[]),
            record("c", "C", &["python"], &[]),
        ]);
        let results = engine
            .recommend(
                &skills(&["python"]),
                &RecommendOptions {
                    limit: 2,
                    min_score: 0.0,
                },
            )
            .unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_tie_break_chain() {
        // All four tie on score 1.0; matched_required separates the first,
        // then title, then id.
        let engine = engine(vec![
            record("one-skill", "Zeta Role", &["python"], &[]),
            record("two-skills", "Two Skills", &["python", "sql"], &[]),
            record("beta", "Alpha Role", &["python"], &[]),
            record("alpha", "Alpha Role", &["python"], &[]),
        ]);
        let results = engine
            .recommend(&skills(&["python", "sql"]), &RecommendOptions::default())
            .unwrap();
        let ids: Vec<_> = results.iter().map(|r| r.profile.id.as_str()).collect();
        assert_eq!(ids, vec!["two-skills", "alpha", "beta", "one-skill"]);
    }

    #[test]
    fn test_output_is_reproducible() {
        let engine = engine(vec![
            record("frontend", "Frontend Developer", &["javascript", "css"], &["react"]),
            record("backend", "Backend Developer", &["python", "sql"], &["postgresql"]),
            record("data-analyst", "Data Analyst", &["python", "sql"], &["tableau"]),
        ]);
        let input = skills(&["Python", "js", "SQL"]);
        let a = engine.recommend(&input, &RecommendOptions::default()).unwrap();
        let b = engine.recommend(&input, &RecommendOptions::default()).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_failed_call_leaves_engine_usable() {
        let engine = engine(vec![record("dev", "Dev", &["python"], &[])]);
        assert!(engine.recommend(&[], &RecommendOptions::default()).is_err());
        let ok = engine
            .recommend(&skills(&["python"]), &RecommendOptions::default())
            .unwrap();
        assert_eq!(ok.len(), 1);
    }

    #[test]
    fn test_output_shape_serializes_contract_fields() {
        let engine = engine(vec![record(
            "data-analyst",
            "Data Analyst",
            &["python"],
            &["tableau"],
        )]);
        let results = engine
            .recommend(&skills(&["Python", "Tableau"]), &RecommendOptions::default())
            .unwrap();
        let json = serde_json::to_value(&results).unwrap();
        let first = &json[0];
        assert_eq!(first["profile"]["id"], "data-analyst");
        assert_eq!(first["profile"]["required_skills"][0], "python");
        assert_eq!(first["score"]["matched_required"], 1);
        assert_eq!(first["score"]["matched_desirable"], 1);
        assert_eq!(first["score"]["breakdown"][0]["match_type"], "EXACT");
    }
}
