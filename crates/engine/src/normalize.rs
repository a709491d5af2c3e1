//! Metric normalization across the agent cohort.

use discount_allocator_core::{Metric, SalesAgent};

/// Observed extremes of one metric across the cohort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricBounds {
    pub min: f64,
    pub max: f64,
}

impl MetricBounds {
    /// Scan the cohort for this metric's min and max.
    pub fn of(agents: &[SalesAgent], metric: Metric) -> MetricBounds {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for agent in agents {
            let value = metric.value_of(agent);
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
        }
        MetricBounds { min, max }
    }

    /// Map a raw value into the unit interval relative to these bounds.
    ///
    /// A tied cohort (min == max, including the single-agent case)
    /// normalizes to 1.0: a metric with no discriminating power contributes
    /// its full weight to every agent instead of zeroing out. Changing this
    /// to 0.0 would reorder degenerate inputs.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.min == self.max {
            return 1.0;
        }
        (value - self.min) / (self.max - self.min)
    }
}

/// An agent's four metrics mapped into the unit interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedMetrics {
    pub performance_score: f64,
    pub seniority_months: f64,
    pub target_achieved_percent: f64,
    pub active_clients: f64,
}

impl NormalizedMetrics {
    /// Normalized value for one metric.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::PerformanceScore => self.performance_score,
            Metric::SeniorityMonths => self.seniority_months,
            Metric::TargetAchievedPercent => self.target_achieved_percent,
            Metric::ActiveClients => self.active_clients,
        }
    }
}

/// Normalize every metric for every agent, preserving input order.
pub fn normalize_cohort(agents: &[SalesAgent]) -> Vec<NormalizedMetrics> {
    let performance = MetricBounds::of(agents, Metric::PerformanceScore);
    let seniority = MetricBounds::of(agents, Metric::SeniorityMonths);
    let target = MetricBounds::of(agents, Metric::TargetAchievedPercent);
    let clients = MetricBounds::of(agents, Metric::ActiveClients);

    agents
        .iter()
        .map(|agent| NormalizedMetrics {
            performance_score: performance.normalize(agent.performance_score),
            seniority_months: seniority.normalize(agent.seniority_months),
            target_achieved_percent: target.normalize(agent.target_achieved_percent),
            active_clients: clients.normalize(agent.active_clients),
        })
        .collect()
}
