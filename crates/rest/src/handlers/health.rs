//! Health check endpoint handlers.
//!
//! Provides simple health endpoints for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fhirq_query::PatientSource;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - Server is healthy
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: PatientSource + Send + Sync,
{
    debug!("Processing health check request");

    let health_response = serde_json::json!({
        "status": "healthy",
        "source": state.patients().source_name(),
        "patients": state.patient_count(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for a liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for a readiness probe.
///
/// The server is ready once it has patients to query.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
///
/// # Response
///
/// - `200 OK` - Patient store loaded and non-empty
/// - `503 Service Unavailable` - Patient store is empty
pub async fn readiness_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: PatientSource + Send + Sync,
{
    debug!("Processing readiness check request");

    let count = state.patient_count();
    let (status, label, check) = if count > 0 {
        (StatusCode::OK, "ready", "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not-ready", "empty")
    };

    let response = serde_json::json!({
        "status": label,
        "patients": count,
        "checks": {
            "patients": check
        }
    });

    Ok((status, Json(response)).into_response())
}
