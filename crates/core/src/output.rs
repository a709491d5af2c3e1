//! Allocation result types.

use serde::{Deserialize, Serialize};

use crate::weights::DiscountSituation;

/// One agent's share of the kitty plus the derived narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAllocation {
    /// Echoes the input agent id.
    pub id: String,
    /// Whole currency units awarded to this agent; never negative.
    pub assigned_discount: i64,
    /// Deterministic template text explaining the award.
    pub justification: String,
}

/// Totals for one allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSummary {
    /// Sum of all assigned discounts.
    pub total_allocated: i64,
    /// siteKitty - totalAllocated; zero whenever reconciliation succeeds,
    /// non-zero only when every agent is pinned at a bound.
    pub remaining_kitty: i64,
}

/// Full response: allocations in input order plus the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountOutput {
    pub allocations: Vec<AgentAllocation>,
    /// Situation preset the allocation ran under, when one was named.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situation: Option<DiscountSituation>,
    pub summary: AllocationSummary,
}

impl DiscountOutput {
    /// True when every kitty unit was placed.
    pub fn is_fully_allocated(&self) -> bool {
        self.summary.remaining_kitty == 0
    }
}
