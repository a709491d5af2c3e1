//! Metric weight sets and situation presets.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::agent::Metric;

/// Relative importance of each metric in the combined score.
///
/// By convention the weights sum to 1.0. The engine does not enforce or
/// renormalize this; it only logs a warning when the sum strays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightSet {
    pub performance_score: f64,
    pub seniority_months: f64,
    pub target_achieved_percent: f64,
    pub active_clients: f64,
}

impl Default for WeightSet {
    fn default() -> Self {
        Self {
            performance_score: 0.35,
            seniority_months: 0.25,
            target_achieved_percent: 0.25,
            active_clients: 0.15,
        }
    }
}

impl WeightSet {
    /// Weight assigned to one metric.
    pub fn weight_of(&self, metric: Metric) -> f64 {
        match metric {
            Metric::PerformanceScore => self.performance_score,
            Metric::SeniorityMonths => self.seniority_months,
            Metric::TargetAchievedPercent => self.target_achieved_percent,
            Metric::ActiveClients => self.active_clients,
        }
    }

    /// Sum over all four weights.
    pub fn total(&self) -> f64 {
        self.performance_score
            + self.seniority_months
            + self.target_achieved_percent
            + self.active_clients
    }

    /// Apply a partial override field-by-field.
    pub fn merged(mut self, overrides: &WeightOverrides) -> WeightSet {
        if let Some(weight) = overrides.performance_score {
            self.performance_score = weight;
        }
        if let Some(weight) = overrides.seniority_months {
            self.seniority_months = weight;
        }
        if let Some(weight) = overrides.target_achieved_percent {
            self.target_achieved_percent = weight;
        }
        if let Some(weight) = overrides.active_clients {
            self.active_clients = weight;
        }
        self
    }
}

/// Partial weight override supplied by the caller, merged over a base set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seniority_months: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_achieved_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_clients: Option<f64>,
}

/// Named business context that selects a predefined weight set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DiscountSituation {
    #[default]
    Standard,
    Seasonal,
    NewProduct,
    CompetitiveResponse,
    CustomerRetention,
}

impl DiscountSituation {
    /// Display name for result rendering.
    pub fn display_name(&self) -> &'static str {
        match self {
            DiscountSituation::Standard => "Standard",
            DiscountSituation::Seasonal => "Seasonal",
            DiscountSituation::NewProduct => "New Product Launch",
            DiscountSituation::CompetitiveResponse => "Competitive Response",
            DiscountSituation::CustomerRetention => "Customer Retention",
        }
    }

    /// Predefined weights for this situation.
    pub fn weights(&self) -> WeightSet {
        SITUATION_WEIGHTS[self]
    }
}

impl std::fmt::Display for DiscountSituation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Immutable situation -> weights lookup, resolved once. Each preset sums
/// to 1.0.
static SITUATION_WEIGHTS: Lazy<HashMap<DiscountSituation, WeightSet>> = Lazy::new(|| {
    HashMap::from([
        (DiscountSituation::Standard, WeightSet::default()),
        (
            // Reward closing against target during seasonal pushes.
            DiscountSituation::Seasonal,
            WeightSet {
                performance_score: 0.25,
                seniority_months: 0.15,
                target_achieved_percent: 0.40,
                active_clients: 0.20,
            },
        ),
        (
            // New launches lean on raw performance and reach.
            DiscountSituation::NewProduct,
            WeightSet {
                performance_score: 0.40,
                seniority_months: 0.10,
                target_achieved_percent: 0.20,
                active_clients: 0.30,
            },
        ),
        (
            DiscountSituation::CompetitiveResponse,
            WeightSet {
                performance_score: 0.45,
                seniority_months: 0.10,
                target_achieved_percent: 0.25,
                active_clients: 0.20,
            },
        ),
        (
            // Retention favors tenure and book size over raw numbers.
            DiscountSituation::CustomerRetention,
            WeightSet {
                performance_score: 0.20,
                seniority_months: 0.35,
                target_achieved_percent: 0.15,
                active_clients: 0.30,
            },
        ),
    ])
});
