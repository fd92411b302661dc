//! Skill Matcher — pairwise match classification and profile-level overlap
//! scoring.
//!
//! `classify` compares two normalized skills; `score_profile` aggregates a
//! whole candidate set against one career profile's required/desirable
//! skills into a weighted [0, 1] score with a per-skill breakdown.

use serde::Serialize;

use crate::catalog::profile::CareerProfile;
use crate::matching::normalizer::Skill;
use crate::matching::weights::{MatchWeights, MIN_PARTIAL_TOKEN_LEN};

/// How closely two skill tokens correspond. Declaration order is weakest to
/// strongest so `Ord` picks the best classification directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    None,
    Partial,
    Synonym,
    Exact,
}

impl MatchType {
    /// Full-credit matches: identical tokens, literal or via alias.
    pub fn is_full(self) -> bool {
        matches!(self, MatchType::Exact | MatchType::Synonym)
    }

    pub fn is_match(self) -> bool {
        self != MatchType::None
    }
}

/// Result of comparing one candidate skill against one profile skill.
#[derive(Debug, Clone, Serialize)]
pub struct SkillMatch {
    /// The candidate's skill as originally supplied (pre-normalization), so
    /// a SYNONYM entry shows which spelling actually matched.
    pub candidate_skill: String,
    /// The profile's canonical skill token.
    pub profile_skill: String,
    pub match_type: MatchType,
}

/// Aggregate result for one (candidate set, career profile) pair.
#[derive(Debug, Clone, Serialize)]
pub struct MatchScore {
    /// Normalized overlap in [0, 1].
    pub value: f64,
    /// Required skills with any non-NONE match.
    pub matched_required: usize,
    /// Desirable skills with any non-NONE match.
    pub matched_desirable: usize,
    /// Contributing (non-NONE) matches: required skills first, then
    /// desirable, each in profile order.
    pub breakdown: Vec<SkillMatch>,
}

/// Classifies the correspondence between one candidate skill and one
/// profile skill.
///
/// EXACT means the folded forms already agreed before alias resolution;
/// SYNONYM means the tokens agree only through the alias table. PARTIAL
/// requires a substring relation between tokens at least
/// `MIN_PARTIAL_TOKEN_LEN` characters long on both sides, so one-letter
/// skills like "c" never swallow "css" or "csharp".
pub fn classify(candidate: &Skill, profile: &Skill) -> MatchType {
    if candidate.token() == profile.token() {
        return if candidate.folded() == profile.folded() {
            MatchType::Exact
        } else {
            MatchType::Synonym
        };
    }

    let c = candidate.token();
    let p = profile.token();
    let long_enough =
        c.chars().count() >= MIN_PARTIAL_TOKEN_LEN && p.chars().count() >= MIN_PARTIAL_TOKEN_LEN;
    if long_enough && (c.contains(p) || p.contains(c)) {
        MatchType::Partial
    } else {
        MatchType::None
    }
}

/// Scores a candidate skill set against one career profile.
///
/// Each profile skill takes its strongest classification over the candidate
/// set. Full matches on required skills earn `required_full`, partial ones
/// `required_partial`; the desirable bucket works the same at lower weights.
/// The weighted sum is divided by the profile's maximum attainable sum. A
/// profile with no skills at all is unscoreable: value 0 with an empty
/// breakdown, for the engine to exclude from ranking.
///
/// Adding candidate skills can only raise per-skill classifications, so the
/// score is monotonically non-decreasing under candidate-set growth.
pub fn score_profile(
    candidate: &[Skill],
    profile: &CareerProfile,
    weights: &MatchWeights,
) -> MatchScore {
    let max_sum = weights.max_sum(
        profile.required_skills.len(),
        profile.desirable_skills.len(),
    );
    if max_sum == 0.0 {
        return MatchScore {
            value: 0.0,
            matched_required: 0,
            matched_desirable: 0,
            breakdown: Vec::new(),
        };
    }

    let mut sum = 0.0;
    let mut matched_required = 0;
    let mut matched_desirable = 0;
    let mut breakdown = Vec::new();

    for skill in &profile.required_skills {
        if let Some(hit) = best_match(candidate, skill) {
            sum += if hit.match_type.is_full() {
                weights.required_full
            } else {
                weights.required_partial
            };
            matched_required += 1;
            breakdown.push(hit);
        }
    }

    for skill in &profile.desirable_skills {
        if let Some(hit) = best_match(candidate, skill) {
            sum += if hit.match_type.is_full() {
                weights.desirable_full
            } else {
                weights.desirable_partial
            };
            matched_desirable += 1;
            breakdown.push(hit);
        }
    }

    MatchScore {
        value: (sum / max_sum).clamp(0.0, 1.0),
        matched_required,
        matched_desirable,
        breakdown,
    }
}

/// Strongest classification of one profile skill over the candidate set.
/// The first candidate in set order wins rank ties, keeping breakdowns
/// deterministic. Returns `None` when nothing matches.
fn best_match(candidate: &[Skill], profile_skill: &Skill) -> Option<SkillMatch> {
    let mut best: Option<(&Skill, MatchType)> = None;
    for c in candidate {
        let match_type = classify(c, profile_skill);
        if !match_type.is_match() {
            continue;
        }
        if best.map_or(true, |(_, prev)| match_type > prev) {
            best = Some((c, match_type));
        }
        if match_type == MatchType::Exact {
            break; // cannot improve
        }
    }

    best.map(|(c, match_type)| SkillMatch {
        candidate_skill: c.raw().to_string(),
        profile_skill: profile_skill.token().to_string(),
        match_type,
    })
}
