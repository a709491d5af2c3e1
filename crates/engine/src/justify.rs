//! Justification text derived from cohort comparisons.
//!
//! The wording and thresholds are part of the output contract: downstream
//! rendering and compatibility tests match on the exact strings.

use discount_allocator_core::SalesAgent;

/// Multiplier above the cohort mean that marks a metric as a strength.
const STRENGTH_FACTOR: f64 = 1.1;
/// Seniority needs a larger margin before it reads as long-term contribution.
const SENIORITY_STRENGTH_FACTOR: f64 = 1.2;
/// Multiplier below the cohort mean that flags a growth area.
const GROWTH_FACTOR: f64 = 0.9;

/// Arithmetic mean of each metric across the cohort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohortMeans {
    pub performance_score: f64,
    pub seniority_months: f64,
    pub target_achieved_percent: f64,
    pub active_clients: f64,
}

impl CohortMeans {
    /// Compute the four means over a non-empty cohort.
    pub fn of(agents: &[SalesAgent]) -> CohortMeans {
        let count = agents.len() as f64;
        CohortMeans {
            performance_score: agents.iter().map(|a| a.performance_score).sum::<f64>() / count,
            seniority_months: agents.iter().map(|a| a.seniority_months).sum::<f64>() / count,
            target_achieved_percent: agents
                .iter()
                .map(|a| a.target_achieved_percent)
                .sum::<f64>()
                / count,
            active_clients: agents.iter().map(|a| a.active_clients).sum::<f64>() / count,
        }
    }
}

/// Build the deterministic justification line for one agent.
pub fn justification(agent: &SalesAgent, means: &CohortMeans) -> String {
    let mut strengths: Vec<&str> = Vec::new();
    let mut areas: Vec<&str> = Vec::new();

    if agent.performance_score > means.performance_score * STRENGTH_FACTOR {
        strengths.push("high performance");
    } else if agent.performance_score < means.performance_score * GROWTH_FACTOR {
        areas.push("performance");
    }

    // Seniority has no growth-area counterpart.
    if agent.seniority_months > means.seniority_months * SENIORITY_STRENGTH_FACTOR {
        strengths.push("long-term contribution");
    }

    if agent.target_achieved_percent > means.target_achieved_percent * STRENGTH_FACTOR {
        strengths.push("consistent target achievement");
    } else if agent.target_achieved_percent < means.target_achieved_percent * GROWTH_FACTOR {
        areas.push("target achievement");
    }

    // Client count has no growth-area counterpart either.
    if agent.active_clients > means.active_clients * STRENGTH_FACTOR {
        strengths.push("managing many active clients");
    }

    if !strengths.is_empty() {
        let mut text = format!("Recognized for {}", strengths.join(" and "));
        if !areas.is_empty() {
            text.push_str(" with potential for growth in ");
            text.push_str(&areas.join(" and "));
        }
        text
    } else if !areas.is_empty() {
        format!(
            "Moderate overall contribution with opportunity to improve {}",
            areas.join(" and ")
        )
    } else {
        "Balanced contribution across all performance metrics".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(id: &str, perf: f64, seniority: f64, target: f64, clients: f64) -> SalesAgent {
        SalesAgent {
            id: id.to_string(),
            performance_score: perf,
            seniority_months: seniority,
            target_achieved_percent: target,
            active_clients: clients,
        }
    }

    #[test]
    fn test_balanced_cohort() {
        let agents = vec![
            agent("A1", 80.0, 12.0, 75.0, 8.0),
            agent("A2", 80.0, 12.0, 75.0, 8.0),
        ];
        let means = CohortMeans::of(&agents);
        assert_eq!(
            justification(&agents[0], &means),
            "Balanced contribution across all performance metrics"
        );
    }

    #[test]
    fn test_strength_with_growth_area() {
        // Performance spread makes A1 a high performer; target spread the
        // other way flags its growth area. Seniority/clients are tied.
        let agents = vec![
            agent("A1", 100.0, 12.0, 50.0, 8.0),
            agent("A2", 50.0, 12.0, 100.0, 8.0),
        ];
        let means = CohortMeans::of(&agents);
        assert_eq!(
            justification(&agents[0], &means),
            "Recognized for high performance with potential for growth in target achievement"
        );
        assert_eq!(
            justification(&agents[1], &means),
            "Recognized for consistent target achievement with potential for growth in performance"
        );
    }

    #[test]
    fn test_multiple_strengths_join_with_and() {
        let agents = vec![
            agent("A1", 100.0, 48.0, 100.0, 20.0),
            agent("A2", 40.0, 6.0, 40.0, 4.0),
            agent("A3", 40.0, 6.0, 40.0, 4.0),
        ];
        let means = CohortMeans::of(&agents);
        assert_eq!(
            justification(&agents[0], &means),
            "Recognized for high performance and long-term contribution and \
             consistent target achievement and managing many active clients"
        );
    }

    #[test]
    fn test_growth_area_without_strengths() {
        // A3 lags on performance only; everything else is tied, and the
        // tie means no strength can trigger for it.
        let agents = vec![
            agent("A1", 100.0, 12.0, 75.0, 8.0),
            agent("A2", 100.0, 12.0, 75.0, 8.0),
            agent("A3", 70.0, 12.0, 75.0, 8.0),
        ];
        let means = CohortMeans::of(&agents);
        assert_eq!(
            justification(&agents[2], &means),
            "Moderate overall contribution with opportunity to improve performance"
        );
    }

    #[test]
    fn test_seniority_needs_the_larger_margin() {
        // 15% above the mean: enough for most strengths, not for seniority.
        let agents = vec![
            agent("A1", 80.0, 23.0, 75.0, 8.0),
            agent("A2", 80.0, 17.0, 75.0, 8.0),
        ];
        let means = CohortMeans::of(&agents);
        // mean seniority = 20.0; threshold is 24.0, so 23.0 stays quiet.
        assert_eq!(
            justification(&agents[0], &means),
            "Balanced contribution across all performance metrics"
        );
    }
}
