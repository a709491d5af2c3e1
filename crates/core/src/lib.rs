//! Core types for the discount allocation engine
//!
//! This crate provides the data model shared across the workspace:
//! - Sales agent input records and the metric accessor enum
//! - Weight sets, partial overrides and situation presets
//! - Allocation request/response types with input validation
//! - Error types

pub mod agent;
pub mod error;
pub mod input;
pub mod output;
pub mod weights;

pub use agent::{Metric, SalesAgent};
pub use error::{AllocationError, Result};
pub use input::{AllocationConfig, DiscountInput};
pub use output::{AgentAllocation, AllocationSummary, DiscountOutput};
pub use weights::{DiscountSituation, WeightOverrides, WeightSet};
