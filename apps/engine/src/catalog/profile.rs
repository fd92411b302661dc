use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::normalizer::{normalize, Skill};

/// One record of the catalog source format: a JSON object with raw,
/// un-normalized skill strings. `desirable_skills` and the metadata fields
/// are optional in the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub desirable_skills: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub seniority: Option<String>,
}

/// A catalog entry describing a career and its skill requirements.
///
/// Skill vectors are normalized, deduplicated by token, and keep source
/// order, so iteration is deterministic. Constructed once at catalog load,
/// immutable thereafter; the catalog owns all instances and recommendation
/// results carry clones.
#[derive(Debug, Clone, Serialize)]
pub struct CareerProfile {
    pub id: String,
    pub title: String,
    pub category: String,
    pub required_skills: Vec<Skill>,
    pub desirable_skills: Vec<Skill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seniority: Option<String>,
}

impl CareerProfile {
    /// Builds a profile from a source record, normalizing every skill string
    /// and enforcing the invariant that the required and desirable token
    /// sets are disjoint (checked after normalization, so a collision
    /// through an alias is also rejected).
    pub fn from_record(record: ProfileRecord) -> Result<Self, AppError> {
        if record.id.trim().is_empty() {
            return Err(AppError::CatalogLoad(format!(
                "profile with blank id (title: {:?})",
                record.title
            )));
        }

        let required_skills =
            normalize_skill_list(&record.required_skills, &record.id, "required")?;
        let desirable_skills =
            normalize_skill_list(&record.desirable_skills, &record.id, "desirable")?;

        if let Some(clash) = required_skills
            .iter()
            .find(|r| desirable_skills.iter().any(|d| d.token() == r.token()))
        {
            return Err(AppError::CatalogLoad(format!(
                "profile '{}': skill '{}' appears in both required and desirable sets",
                record.id,
                clash.token()
            )));
        }

        Ok(Self {
            id: record.id,
            title: record.title,
            category: record.category,
            required_skills,
            desirable_skills,
            description: record.description,
            seniority: record.seniority,
        })
    }
}

/// Normalizes one skill list of a source record. Unlike candidate input,
/// a catalog skill that fails normalization is a load error, not a skip —
/// no partial catalog is ever produced. Duplicate tokens within the list
/// collapse silently (set semantics).
fn normalize_skill_list(
    raw: &[String],
    profile_id: &str,
    bucket: &str,
) -> Result<Vec<Skill>, AppError> {
    let mut skills: Vec<Skill> = Vec::with_capacity(raw.len());
    for entry in raw {
        let skill = normalize(entry).map_err(|e| {
            AppError::CatalogLoad(format!("profile '{profile_id}', {bucket} skills: {e}"))
        })?;
        if !skills.iter().any(|s| s.token() == skill.token()) {
            skills.push(skill);
        }
    }
    Ok(skills)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, required: &[&str], desirable: &[&str]) -> ProfileRecord {
        ProfileRecord {
            id: id.to_string(),
            title: id.to_string(),
            category: "Test".to_string(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            desirable_skills: desirable.iter().map(|s| s.to_string()).collect(),
            description: None,
            seniority: None,
        }
    }

    #[test]
    fn test_skills_normalized_and_deduped() {
        let profile =
            CareerProfile::from_record(record("dev", &["JS", "javascript", "SQL"], &[])).unwrap();
        let tokens: Vec<_> = profile.required_skills.iter().map(|s| s.token()).collect();
        assert_eq!(tokens, vec!["javascript", "sql"]);
    }

    #[test]
    fn test_blank_id_rejected() {
        let result = CareerProfile::from_record(record("  ", &["sql"], &[]));
        assert!(matches!(result, Err(AppError::CatalogLoad(_))));
    }

    #[test]
    fn test_invalid_skill_is_load_error() {
        let result = CareerProfile::from_record(record("dev", &["sql", "  "], &[]));
        assert!(matches!(result, Err(AppError::CatalogLoad(_))));
    }

    #[test]
    fn test_required_desirable_overlap_rejected() {
        let result = CareerProfile::from_record(record("dev", &["python"], &["python"]));
        assert!(matches!(result, Err(AppError::CatalogLoad(_))));
    }

    #[test]
    fn test_overlap_through_alias_rejected() {
        // "js" and "javascript" collapse to the same token, so the sets are
        // not disjoint even though the raw strings differ.
        let result = CareerProfile::from_record(record("dev", &["JS"], &["JavaScript"]));
        assert!(matches!(result, Err(AppError::CatalogLoad(_))));
    }

    #[test]
    fn test_profile_with_no_skills_is_allowed() {
        // Unscoreable, but not malformed — the engine excludes it from
        // ranking instead.
        let profile = CareerProfile::from_record(record("empty", &[], &[])).unwrap();
        assert!(profile.required_skills.is_empty());
        assert!(profile.desirable_skills.is_empty());
    }

    #[test]
    fn test_source_record_with_missing_optionals_parses() {
        let json = r#"{
            "id": "data-analyst",
            "title": "Data Analyst",
            "category": "Data & Analytics",
            "required_skills": ["python", "sql"]
        }"#;
        let record: ProfileRecord = serde_json::from_str(json).unwrap();
        assert!(record.desirable_skills.is_empty());
        assert!(record.description.is_none());
        let profile = CareerProfile::from_record(record).unwrap();
        assert_eq!(profile.id, "data-analyst");
        assert_eq!(profile.required_skills.len(), 2);
    }
}
