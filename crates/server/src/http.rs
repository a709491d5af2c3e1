//! HTTP Endpoints
//!
//! REST API for the allocation engine.

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::{HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use discount_allocator_core::DiscountOutput;

use crate::state::AppState;
use crate::{metrics, validate, ApiError};

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.settings.server.cors_origins,
        state.settings.server.cors_enabled,
    );

    Router::new()
        // Allocation endpoint
        .route("/api/allocate", post(allocate))
        // Health check
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics::metrics_handler))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If cors_origins is empty, defaults to localhost:3000 for safety
/// - Otherwise, uses the configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        // CORS disabled - allow all (only for development!)
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    if origins.is_empty() {
        // No origins configured - default to localhost for safety
        tracing::info!("No CORS origins configured, defaulting to localhost:3000");
        return CorsLayer::new()
            .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    // Parse configured origins
    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::error!("All configured CORS origins are invalid, falling back to localhost");
        return CorsLayer::new()
            .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Allocation endpoint
async fn allocate(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<DiscountOutput>, ApiError> {
    let run_id = Uuid::new_v4();

    let Json(body) = body.map_err(|rejection| {
        metrics::record_validation_failure();
        tracing::warn!(%run_id, %rejection, "rejected malformed request body");
        ApiError::InvalidInput(format!("Invalid JSON body: {rejection}"))
    })?;

    let mut input = validate::parse_request(
        &body,
        state.settings.allocation.max_agents_per_request,
    )
    .map_err(|message| {
        metrics::record_validation_failure();
        tracing::warn!(%run_id, %message, "rejected allocation request");
        ApiError::InvalidInput(message)
    })?;

    if input.situation.is_none() {
        input.situation = state.settings.allocation.default_situation;
    }

    let roster_size = input.sales_agents.len();
    let kitty = input.site_kitty;

    // The engine is CPU-bound and synchronous; keep it off the async
    // executor. A panic inside the task surfaces as a JoinError.
    let result = tokio::task::spawn_blocking(move || {
        discount_allocator_engine::allocate(&input)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("allocation task failed: {e}")))?;

    match result {
        Ok(output) => {
            metrics::record_allocation(roster_size, !output.is_fully_allocated());
            tracing::info!(
                %run_id,
                agents = roster_size,
                kitty,
                total_allocated = output.summary.total_allocated,
                remaining = output.summary.remaining_kitty,
                "allocation complete"
            );
            Ok(Json(output))
        }
        Err(err) => {
            // Degenerate inputs the shape checks cannot rule out, e.g. an
            // all-zero weight override.
            metrics::record_validation_failure();
            tracing::warn!(%run_id, error = %err, "allocation rejected");
            Err(ApiError::InvalidInput(err.to_string()))
        }
    }
}

/// Health check
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness check
async fn readiness_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ready",
    }))
}
