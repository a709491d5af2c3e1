//! Error types for input validation and the allocation engine.

use thiserror::Error;

/// Errors produced by `DiscountInput::validate` and the allocation engine.
///
/// Conflicting min/max bounds are deliberately not an error: the engine
/// produces a best-effort result and reports any unplaced kitty units via
/// a non-zero `remainingKitty` instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    #[error("salesAgents array cannot be empty")]
    EmptyRoster,

    #[error("siteKitty must be a positive number, got {0}")]
    NonPositiveKitty(i64),

    #[error("total score across all agents is zero; proportional allocation is undefined")]
    ZeroTotalScore,

    #[error("duplicate agent id: {0}")]
    DuplicateAgentId(String),

    #[error("agent {id}: {metric} must be a finite number, got {value}")]
    InvalidMetric {
        id: String,
        metric: &'static str,
        value: f64,
    },

    #[error("{field} must be a non-negative amount, got {value}")]
    InvalidBound { field: &'static str, value: i64 },

    #[error("weight for {metric} must be a finite, non-negative number, got {value}")]
    InvalidWeight { metric: &'static str, value: f64 },
}

/// Convenience alias used across the allocator crates.
pub type Result<T> = std::result::Result<T, AllocationError>;
