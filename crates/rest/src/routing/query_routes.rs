//! Query API route configuration.

use axum::{
    Router,
    routing::{get, post},
};
use fhirq_query::PatientSource;

use crate::handlers;
use crate::state::AppState;

/// Creates all query API routes.
///
/// # Routes
///
/// - `POST /query` - Interpret a free-text query
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: PatientSource + Send + Sync + 'static,
{
    Router::new()
        .route("/query", post(handlers::query_handler::<S>))
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::health::liveness_handler))
        .route("/_readiness", get(handlers::health::readiness_handler::<S>))
        .with_state(state)
}
