//! Allocation request types and input validation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::agent::{Metric, SalesAgent};
use crate::error::{AllocationError, Result};
use crate::weights::{DiscountSituation, WeightOverrides, WeightSet};

/// Optional per-call constraints and weight overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllocationConfig {
    /// Floor for every agent's allocation, in whole currency units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_per_agent: Option<i64>,
    /// Ceiling for every agent's allocation, in whole currency units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_per_agent: Option<i64>,
    /// Partial weight override merged over the base weight set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<WeightOverrides>,
}

/// One allocation request: the kitty, the agent roster and optional config.
///
/// The kitty is a whole number of currency units; exact conservation
/// (allocations summing to the kitty) is only defined for integral pools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountInput {
    /// Total amount to distribute, in whole currency units.
    pub site_kitty: i64,
    /// Agents competing for the kitty; order is preserved in the output.
    pub sales_agents: Vec<SalesAgent>,
    /// Optional situation preset supplying the base weights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situation: Option<DiscountSituation>,
    /// Optional constraints and overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<AllocationConfig>,
}

impl DiscountInput {
    /// Resolve the weight set for this call: the situation preset (or the
    /// defaults) with any explicit overrides merged on top.
    pub fn effective_weights(&self) -> WeightSet {
        let base = self
            .situation
            .map(|situation| situation.weights())
            .unwrap_or_default();
        match self.config.as_ref().and_then(|config| config.weights.as_ref()) {
            Some(overrides) => base.merged(overrides),
            None => base,
        }
    }

    /// Configured floor, if any.
    pub fn min_per_agent(&self) -> Option<i64> {
        self.config.as_ref().and_then(|config| config.min_per_agent)
    }

    /// Configured ceiling, if any.
    pub fn max_per_agent(&self) -> Option<i64> {
        self.config.as_ref().and_then(|config| config.max_per_agent)
    }

    /// Check the structural invariants the engine relies on.
    ///
    /// Shape/type errors are the transport layer's job; this catches what
    /// survives a well-typed decode: non-positive kitty, empty roster,
    /// duplicate ids, non-finite metrics, negative bounds and invalid
    /// effective weights.
    pub fn validate(&self) -> Result<()> {
        if self.site_kitty <= 0 {
            return Err(AllocationError::NonPositiveKitty(self.site_kitty));
        }
        if self.sales_agents.is_empty() {
            return Err(AllocationError::EmptyRoster);
        }

        let mut seen = HashSet::with_capacity(self.sales_agents.len());
        for agent in &self.sales_agents {
            if !seen.insert(agent.id.as_str()) {
                return Err(AllocationError::DuplicateAgentId(agent.id.clone()));
            }
            for metric in Metric::ALL {
                let value = metric.value_of(agent);
                if !value.is_finite() {
                    return Err(AllocationError::InvalidMetric {
                        id: agent.id.clone(),
                        metric: metric.field_name(),
                        value,
                    });
                }
            }
        }

        if let Some(config) = &self.config {
            if let Some(min) = config.min_per_agent {
                if min < 0 {
                    return Err(AllocationError::InvalidBound {
                        field: "minPerAgent",
                        value: min,
                    });
                }
            }
            if let Some(max) = config.max_per_agent {
                if max < 0 {
                    return Err(AllocationError::InvalidBound {
                        field: "maxPerAgent",
                        value: max,
                    });
                }
            }
        }

        let weights = self.effective_weights();
        for metric in Metric::ALL {
            let weight = weights.weight_of(metric);
            if !weight.is_finite() || weight < 0.0 {
                return Err(AllocationError::InvalidWeight {
                    metric: metric.field_name(),
                    value: weight,
                });
            }
        }

        Ok(())
    }
}
