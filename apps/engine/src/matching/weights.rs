/// Default match weights.
/// A required skill fully covered (EXACT/SYNONYM) counts double a desirable
/// one; a PARTIAL hit earns half the full credit in either bucket. These are
/// a default policy, kept in one place so a deployment can tune them without
/// touching the scoring code.
pub const DEFAULT_WEIGHTS: MatchWeights = MatchWeights {
    required_full: 1.0,
    required_partial: 0.5,
    desirable_full: 0.5,
    desirable_partial: 0.25,
};

/// Minimum token length for a substring hit to classify as PARTIAL.
/// Guards against spurious matches on very short tokens ("r" in "ruby").
pub const MIN_PARTIAL_TOKEN_LEN: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    pub required_full: f64,
    pub required_partial: f64,
    pub desirable_full: f64,
    pub desirable_partial: f64,
}

impl MatchWeights {
    /// Maximum attainable weighted sum for a profile with the given set
    /// sizes. The scoring denominator; zero means the profile is
    /// unscoreable.
    pub fn max_sum(&self, required: usize, desirable: usize) -> f64 {
        required as f64 * self.required_full + desirable as f64 * self.desirable_full
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}
