//! Weighted score aggregation.

use discount_allocator_core::{Metric, WeightSet};

use crate::normalize::NormalizedMetrics;

/// Combine normalized metrics into one weighted score per agent.
///
/// Scores are non-negative reals; under weights summing to 1.0 they lie in
/// [0, 1]. The caller is responsible for rejecting a zero total before
/// dividing by it.
pub fn weighted_scores(normalized: &[NormalizedMetrics], weights: &WeightSet) -> Vec<f64> {
    normalized
        .iter()
        .map(|metrics| {
            Metric::ALL
                .iter()
                .map(|&metric| weights.weight_of(metric) * metrics.get(metric))
                .sum()
        })
        .collect()
}
