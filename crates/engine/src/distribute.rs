//! Proportional distribution, clamping, rounding and reconciliation.

use std::cmp::Ordering;

/// Per-agent floor and ceiling, in whole currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

/// Result of distributing the kitty across scored agents.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    /// Whole-unit amounts, in input order.
    pub amounts: Vec<i64>,
    /// Sum of all amounts after reconciliation.
    pub total_allocated: i64,
    /// Kitty units left unplaced; non-zero only when every agent is pinned
    /// at a bound.
    pub remaining: i64,
}

/// Split the kitty proportionally to score, clamp to the bounds, round to
/// whole units and reconcile the rounding error against the exact kitty.
///
/// The caller guards a zero total score. When `min > max` the ceiling wins
/// (min is applied first, max second); that is a caller misconfiguration
/// and is not guarded here.
pub fn distribute(kitty: i64, scores: &[f64], bounds: Bounds) -> Distribution {
    let total_score: f64 = scores.iter().sum();
    debug_assert!(total_score > 0.0, "caller guards a zero total score");

    let mut amounts: Vec<i64> = scores
        .iter()
        .map(|&score| {
            let mut raw = score / total_score * kitty as f64;
            if let Some(min) = bounds.min {
                raw = raw.max(min as f64);
            }
            if let Some(max) = bounds.max {
                raw = raw.min(max as f64);
            }
            // f64::round is round-half-away-from-zero.
            raw.round() as i64
        })
        .collect();

    let allocated: i64 = amounts.iter().sum();
    let diff = kitty - allocated;
    if diff != 0 {
        reconcile(&mut amounts, scores, diff, bounds);
    }

    let total_allocated: i64 = amounts.iter().sum();
    let remaining = kitty - total_allocated;
    if remaining != 0 {
        tracing::warn!(
            remaining,
            kitty,
            "reconciliation left kitty units unplaced: every agent is pinned at a bound"
        );
    }

    Distribution {
        amounts,
        total_allocated,
        remaining,
    }
}

/// Move `diff` single units between agents so the total matches the kitty.
///
/// Surplus units go to agents in descending score order; deficit units are
/// taken back in ascending score order. Both orders are stable, so tied
/// scores keep input order. An agent pinned at its bound is skipped; a full
/// cycle that moves nothing proves every agent is pinned, and the loop
/// stops with the difference unresolved instead of spinning.
fn reconcile(amounts: &mut [i64], scores: &[f64], diff: i64, bounds: Bounds) {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    if diff > 0 {
        order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));
    } else {
        order.sort_by(|&a, &b| scores[a].partial_cmp(&scores[b]).unwrap_or(Ordering::Equal));
    }

    let mut remaining = diff.abs();
    while remaining > 0 {
        let mut moved = false;
        for &index in &order {
            if remaining == 0 {
                break;
            }
            if diff > 0 {
                if bounds.max.map_or(true, |max| amounts[index] < max) {
                    amounts[index] += 1;
                    remaining -= 1;
                    moved = true;
                }
            } else {
                // The floor is minPerAgent when set, zero otherwise: an
                // allocation never goes negative.
                if amounts[index] > bounds.min.unwrap_or(0) {
                    amounts[index] -= 1;
                    remaining -= 1;
                    moved = true;
                }
            }
        }
        if !moved {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_split_needs_no_reconciliation() {
        let result = distribute(10_000, &[0.75, 0.25], Bounds::default());
        assert_eq!(result.amounts, vec![7_500, 2_500]);
        assert_eq!(result.total_allocated, 10_000);
        assert_eq!(result.remaining, 0);
    }

    #[test]
    fn test_surplus_goes_to_highest_score_first() {
        // Equal thirds of 10 round down to 3 each; the leftover unit goes
        // to the first agent (descending order, ties keep input order).
        let result = distribute(10, &[1.0, 1.0, 1.0], Bounds::default());
        assert_eq!(result.amounts, vec![4, 3, 3]);
        assert_eq!(result.remaining, 0);
    }

    #[test]
    fn test_deficit_taken_from_lowest_score_first() {
        // Halves of 5 round up to 3 each; the extra unit comes back from
        // the first agent (ascending order, ties keep input order).
        let result = distribute(5, &[0.5, 0.5], Bounds::default());
        assert_eq!(result.amounts, vec![2, 3]);
        assert_eq!(result.remaining, 0);
    }

    #[test]
    fn test_capped_agent_is_skipped_during_surplus() {
        let bounds = Bounds {
            min: None,
            max: Some(6),
        };
        // Raw shares 8.33/1.67 clamp to 6/1.67 and round to 6/2; the two
        // missing units cycle past the capped agent into the other one.
        let result = distribute(10, &[5.0, 1.0], bounds);
        assert_eq!(result.amounts, vec![6, 4]);
        assert_eq!(result.remaining, 0);
    }

    #[test]
    fn test_floored_agent_is_skipped_during_deficit() {
        let bounds = Bounds {
            min: Some(2_000),
            max: None,
        };
        // Floors push the sum over the kitty; the giveback must come from
        // the agent with slack, not the one sitting on the floor.
        let result = distribute(10_000, &[1.0, 9.0], bounds);
        assert_eq!(result.amounts.iter().sum::<i64>(), 10_000);
        assert!(result.amounts[0] >= 2_000);
        assert!(result.amounts[1] >= 2_000);
        assert_eq!(result.remaining, 0);
    }

    #[test]
    fn test_deficit_never_drives_an_allocation_negative() {
        // A zero-score agent holds 0 and sits first in ascending order;
        // the implicit floor keeps it at 0 while others give back.
        let result = distribute(1, &[0.0, 0.5, 0.5], Bounds::default());
        assert_eq!(result.amounts, vec![0, 0, 1]);
        assert_eq!(result.remaining, 0);
        assert!(result.amounts.iter().all(|&a| a >= 0));
    }

    #[test]
    fn test_all_pinned_terminates_with_remainder() {
        let bounds = Bounds {
            min: Some(1_000),
            max: Some(1_000),
        };
        // Every agent is pinned at 1000 and the kitty cannot be reached;
        // the loop must stop and report the shortfall.
        let result = distribute(5_000, &[1.0, 1.0, 1.0], bounds);
        assert_eq!(result.amounts, vec![1_000, 1_000, 1_000]);
        assert_eq!(result.total_allocated, 3_000);
        assert_eq!(result.remaining, 2_000);
    }

    #[test]
    fn test_min_above_max_lets_max_win() {
        let bounds = Bounds {
            min: Some(8_000),
            max: Some(3_000),
        };
        let result = distribute(6_000, &[1.0, 1.0], bounds);
        // Min is applied first, max second, so max always wins.
        assert_eq!(result.amounts, vec![3_000, 3_000]);
        assert_eq!(result.remaining, 0);
    }

    #[test]
    fn test_reconciliation_cycles_more_than_once() {
        let bounds = Bounds {
            min: None,
            max: Some(4),
        };
        // Kitty 12 across three agents capped at 4: raw rounding leaves a
        // multi-unit gap that takes repeated cycles to close.
        let result = distribute(12, &[10.0, 1.0, 1.0], bounds);
        assert_eq!(result.amounts, vec![4, 4, 4]);
        assert_eq!(result.remaining, 0);
    }
}
