//! Skill Normalizer — the single canonicalization point for skill strings.
//!
//! Every `Skill` in the system is produced here. No other module
//! re-implements casing, whitespace, or alias logic: two raw strings that
//! normalize to the same token ARE the same skill everywhere downstream.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use serde::{Serialize, Serializer};
use tracing::warn;
use unicode_normalization::UnicodeNormalization;

use crate::errors::AppError;

/// Skill alias → canonical token mapping (O(1) lookup).
///
/// Keys are in folded form (lower-cased, NFKC, whitespace-collapsed), so a
/// lookup with any surface spelling lands here after folding. Entries cover
/// the stack names that show up under several spellings in real catalogs and
/// resumes, plus a couple of non-tech skills common in career profiles.
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let aliases: &[(&str, &[&str])] = &[
        // JavaScript ecosystem
        ("javascript", &["js", "java script", "ecmascript", "es6"]),
        ("typescript", &["ts", "type script"]),
        ("nodejs", &["node", "node.js", "node js"]),
        ("react", &["react.js", "reactjs", "react js"]),
        ("reactnative", &["react native", "react-native"]),
        ("vue", &["vue.js", "vuejs", "vue js"]),
        ("angular", &["angularjs", "angular.js"]),
        ("nextjs", &["next.js", "next js"]),
        // Styling
        ("css", &["css3", "cascading style sheets"]),
        ("html", &["html5"]),
        ("sass", &["scss"]),
        // Languages
        ("python", &["py", "python3", "python 3"]),
        ("java", &["java8", "java11", "java17", "openjdk"]),
        ("csharp", &["c#", "c sharp", ".net", "dotnet"]),
        ("cplusplus", &["c++", "cpp", "c plus plus"]),
        ("golang", &["go", "go lang"]),
        ("rust", &["rust lang", "rustlang"]),
        ("php", &["php7", "php8"]),
        // Databases
        ("postgresql", &["postgres", "pg", "postgre sql"]),
        ("mysql", &["my sql", "mariadb"]),
        ("mongodb", &["mongo", "mongo db"]),
        ("elasticsearch", &["elastic search"]),
        ("sqlite", &["sqlite3"]),
        // Cloud and infrastructure
        ("aws", &["amazon web services", "aws cloud"]),
        ("gcp", &["google cloud", "google cloud platform"]),
        ("azure", &["microsoft azure", "ms azure"]),
        ("kubernetes", &["k8s", "kube"]),
        // Data and ML
        ("machine learning", &["ml"]),
        ("artificial intelligence", &["ai"]),
        ("tensorflow", &["tensor flow", "tf"]),
        ("pytorch", &["torch", "py torch"]),
        ("data analysis", &["data analytics"]),
        // Non-tech skills seen in career catalogs
        ("excel", &["microsoft excel", "ms excel"]),
        ("customer service", &["customer support", "customer care"]),
    ];

    let mut map = HashMap::new();
    for (canonical, alias_list) in aliases {
        map.insert(*canonical, *canonical);
        for alias in *alias_list {
            map.insert(*alias, *canonical);
        }
    }
    map
});

/// A normalized skill token with provenance.
///
/// `raw` is the exact caller-supplied string, kept so match breakdowns can
/// distinguish "originally different spelling" (SYNONYM) from "literally the
/// same string" (EXACT) after normalization has collapsed them. Equality and
/// hashing use the canonical `token` only.
#[derive(Debug, Clone)]
pub struct Skill {
    raw: String,
    folded: String,
    token: String,
}

impl Skill {
    /// The exact string the skill was normalized from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The folded (lower-cased, whitespace-collapsed) form before alias
    /// resolution.
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// The canonical token. All comparison and hashing go through this.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether alias resolution rewrote the folded form.
    pub fn is_aliased(&self) -> bool {
        self.token != self.folded
    }
}

impl PartialEq for Skill {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for Skill {}

impl Hash for Skill {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token.hash(state);
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

// Serializes as the bare token string. There is intentionally no
// `Deserialize` impl: skills enter the system only through `normalize`.
impl Serialize for Skill {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.token)
    }
}

/// NFKC-fold, lower-case, trim, and collapse internal whitespace runs.
fn fold(raw: &str) -> String {
    raw.nfkc()
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes one raw skill string into a `Skill`.
///
/// Rules, in order: NFKC fold, lower-case, trim/collapse whitespace, then
/// resolve against the static alias table; without an alias entry the folded
/// form is the token as-is. Fails with `InvalidSkill` when the input is
/// empty after trimming.
pub fn normalize(raw: &str) -> Result<Skill, AppError> {
    let folded = fold(raw);
    if folded.is_empty() {
        return Err(AppError::InvalidSkill(format!(
            "skill string {raw:?} is empty after trimming"
        )));
    }

    let token = match ALIAS_TO_CANONICAL.get(folded.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => folded.clone(),
    };

    Ok(Skill {
        raw: raw.to_string(),
        folded,
        token,
    })
}

/// Normalizes a list of raw skill strings into a candidate set.
///
/// Entries that fail normalization are skipped with a warning — the caller
/// escalates to `InvalidInput` only if nothing survives. Duplicate tokens
/// collapse to the first occurrence, preserving input order so downstream
/// best-match selection is deterministic.
pub fn normalize_set(raw_skills: &[String]) -> Vec<Skill> {
    let mut seen: Vec<Skill> = Vec::with_capacity(raw_skills.len());
    for raw in raw_skills {
        match normalize(raw) {
            Ok(skill) => {
                if !seen.iter().any(|s| s.token() == skill.token()) {
                    seen.push(skill);
                }
            }
            Err(e) => warn!("Skipping unnormalizable skill entry: {e}"),
        }
    }
    seen
}
