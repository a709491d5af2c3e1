//! Sales agent records and the metric accessor enum.

use serde::{Deserialize, Serialize};

/// A sales agent and the raw performance metrics used for scoring.
///
/// Immutable input; one record per agent per allocation call. Wire names
/// are camelCase to match the public JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAgent {
    /// Unique identifier within one allocation call.
    pub id: String,
    /// Overall performance rating, expected in 0-100.
    pub performance_score: f64,
    /// Months of tenure, >= 0.
    pub seniority_months: f64,
    /// Percentage of sales target achieved, expected in 0-100.
    pub target_achieved_percent: f64,
    /// Number of clients currently managed, >= 0.
    pub active_clients: f64,
}

/// The four performance metrics an allocation is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    PerformanceScore,
    SeniorityMonths,
    TargetAchievedPercent,
    ActiveClients,
}

impl Metric {
    /// All metrics, in scoring order.
    pub const ALL: [Metric; 4] = [
        Metric::PerformanceScore,
        Metric::SeniorityMonths,
        Metric::TargetAchievedPercent,
        Metric::ActiveClients,
    ];

    /// Read this metric's raw value from an agent.
    pub fn value_of(&self, agent: &SalesAgent) -> f64 {
        match self {
            Metric::PerformanceScore => agent.performance_score,
            Metric::SeniorityMonths => agent.seniority_months,
            Metric::TargetAchievedPercent => agent.target_achieved_percent,
            Metric::ActiveClients => agent.active_clients,
        }
    }

    /// Field name as it appears on the wire.
    pub fn field_name(&self) -> &'static str {
        match self {
            Metric::PerformanceScore => "performanceScore",
            Metric::SeniorityMonths => "seniorityMonths",
            Metric::TargetAchievedPercent => "targetAchievedPercent",
            Metric::ActiveClients => "activeClients",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name())
    }
}
