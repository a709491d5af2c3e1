//! Discount allocation engine
//!
//! A pure, synchronous pipeline in three stages:
//! 1. Normalizer - maps each raw metric into the unit interval across the cohort
//! 2. Scorer - weighted aggregation plus derived justification text
//! 3. Distributor - proportional split, clamping, rounding and exact-sum reconciliation
//!
//! One call, one deterministic output; no state survives an invocation, so
//! concurrent calls need no coordination.

pub mod distribute;
pub mod justify;
pub mod normalize;
pub mod score;

pub use distribute::{Bounds, Distribution};
pub use justify::CohortMeans;
pub use normalize::{MetricBounds, NormalizedMetrics};

use discount_allocator_core::{
    AgentAllocation, AllocationError, AllocationSummary, DiscountInput, DiscountOutput, Result,
};

/// Tolerance for the conventional weights-sum-to-one check.
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Run the full allocation pipeline for one input snapshot.
///
/// Guards the two degenerate inputs that make proportional division
/// meaningless (empty roster, zero total score). Every other input yields
/// a best-effort result: an unreconcilable bound configuration is surfaced
/// as a non-zero `remainingKitty`, never as an error or an unbounded loop.
pub fn allocate(input: &DiscountInput) -> Result<DiscountOutput> {
    if input.sales_agents.is_empty() {
        return Err(AllocationError::EmptyRoster);
    }
    if input.site_kitty <= 0 {
        return Err(AllocationError::NonPositiveKitty(input.site_kitty));
    }

    let weights = input.effective_weights();
    let weight_total = weights.total();
    if (weight_total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        tracing::warn!(
            weight_total,
            "metric weights do not sum to 1.0; scores are not renormalized"
        );
    }

    let normalized = normalize::normalize_cohort(&input.sales_agents);
    let scores = score::weighted_scores(&normalized, &weights);
    let total_score: f64 = scores.iter().sum();
    if total_score <= 0.0 {
        return Err(AllocationError::ZeroTotalScore);
    }

    let bounds = Bounds {
        min: input.min_per_agent(),
        max: input.max_per_agent(),
    };
    let distribution = distribute::distribute(input.site_kitty, &scores, bounds);

    let means = justify::CohortMeans::of(&input.sales_agents);
    let allocations = input
        .sales_agents
        .iter()
        .zip(&distribution.amounts)
        .map(|(agent, &amount)| AgentAllocation {
            id: agent.id.clone(),
            assigned_discount: amount,
            justification: justify::justification(agent, &means),
        })
        .collect();

    Ok(DiscountOutput {
        allocations,
        situation: input.situation,
        summary: AllocationSummary {
            total_allocated: distribution.total_allocated,
            remaining_kitty: distribution.remaining,
        },
    })
}
