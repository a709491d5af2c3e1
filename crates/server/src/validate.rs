//! Request validation for the allocate endpoint.
//!
//! Presence and type checks happen here, before anything reaches the
//! engine. The check order and messages are part of the public API
//! contract and must stay stable.

use serde_json::Value;

use discount_allocator_core::DiscountInput;

pub const ERR_REQUIRED_FIELDS: &str =
    "Invalid input. Required fields: siteKitty, salesAgents (array)";
pub const ERR_KITTY_POSITIVE: &str = "siteKitty must be a positive number";
pub const ERR_KITTY_WHOLE: &str = "siteKitty must be a whole number of currency units";
pub const ERR_AGENTS_EMPTY: &str = "salesAgents array cannot be empty";
pub const ERR_AGENT_FIELDS: &str = "Each sales agent must have id, performanceScore, \
     seniorityMonths, targetAchievedPercent, and activeClients fields";

const AGENT_METRIC_FIELDS: [&str; 4] = [
    "performanceScore",
    "seniorityMonths",
    "targetAchievedPercent",
    "activeClients",
];

/// Validate a raw JSON body and decode it into a `DiscountInput`.
pub fn parse_request(body: &Value, max_agents: usize) -> Result<DiscountInput, String> {
    let agents = match body.get("salesAgents").and_then(Value::as_array) {
        Some(agents) => agents,
        None => return Err(ERR_REQUIRED_FIELDS.to_string()),
    };
    if body.get("siteKitty").is_none() {
        return Err(ERR_REQUIRED_FIELDS.to_string());
    }

    let kitty = match body.get("siteKitty").and_then(Value::as_f64) {
        Some(kitty) if kitty > 0.0 => {
            if kitty.fract() != 0.0 || kitty > i64::MAX as f64 {
                return Err(ERR_KITTY_WHOLE.to_string());
            }
            kitty as i64
        }
        _ => return Err(ERR_KITTY_POSITIVE.to_string()),
    };

    if agents.is_empty() {
        return Err(ERR_AGENTS_EMPTY.to_string());
    }
    if agents.len() > max_agents {
        return Err(format!("salesAgents cannot exceed {max_agents} entries"));
    }

    for agent in agents {
        let has_id = agent
            .get("id")
            .and_then(Value::as_str)
            .is_some_and(|id| !id.is_empty());
        let has_metrics = AGENT_METRIC_FIELDS
            .iter()
            .all(|field| agent.get(*field).is_some_and(Value::is_number));
        if !has_id || !has_metrics {
            return Err(ERR_AGENT_FIELDS.to_string());
        }
    }

    // A JSON float such as 10000.0 passed the whole-number check above but
    // would not decode into an integer field; normalize it first.
    let mut body = body.clone();
    body["siteKitty"] = Value::from(kitty);

    let input: DiscountInput =
        serde_json::from_value(body).map_err(|e| format!("Invalid input: {e}"))?;
    input.validate().map_err(|e| e.to_string())?;
    Ok(input)
}
