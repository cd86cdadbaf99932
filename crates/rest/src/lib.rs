//! # fhirq-rest - HTTP API for free-text cohort queries
//!
//! This crate exposes [`fhirq_query`] over HTTP with Axum. A client posts a
//! short clinical question and receives the structured filter the server read
//! from it, plus a FHIR-flavored `searchset` Bundle of matching patients with
//! condition and age histograms for charting.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fhirq_query::PatientStore;
//! use fhirq_rest::{create_app_with_config, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = create_app_with_config(PatientStore::seed(), ServerConfig::default());
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | query | POST | `/query` |
//! | health | GET | `/health` |
//! | liveness | GET | `/_liveness` |
//! | readiness | GET | `/_readiness` |
//!
//! ## Query Exchange
//!
//! Request body: `{"query": "Show cancer patients older than 45"}`
//!
//! Response body:
//!
//! ```json
//! {
//!   "parsed": {"age": 45, "condition": "cancer", "operator": "over"},
//!   "fhir_response": {
//!     "resourceType": "Bundle",
//!     "type": "searchset",
//!     "entry": [{"resource": {"resourceType": "Patient", "id": "001", "...": "..."}}],
//!     "chart_data": [{"label": "cancer", "value": 8}],
//!     "age_distribution": [{"label": "48", "value": 1}]
//!   }
//! }
//! ```
//!
//! ## Error Handling
//!
//! Errors are returned as FHIR [OperationOutcome](https://hl7.org/fhir/operationoutcome.html)
//! resources. An unrecognized query is not an error; it simply matches every
//! patient.
//!
//! ## Architecture
//!
//! - [`error`] - Error types and OperationOutcome generation
//! - [`config`] - Server configuration
//! - [`state`] - Application state (patients, lexicon, tokenizer, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for request bodies
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::{AppState, load_patient_store};

use std::sync::Arc;

use axum::Router;
use fhirq_query::PatientSource;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with custom configuration.
///
/// This function sets up the query API with all handlers, middleware, and
/// configuration, using the built-in lexicon and word tokenizer. Use
/// [`create_app_with_state`] to supply a different lexicon or tokenizer.
///
/// # Example
///
/// ```rust,ignore
/// use fhirq_query::PatientStore;
/// use fhirq_rest::{create_app_with_config, ServerConfig};
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(PatientStore::seed(), config);
/// ```
pub fn create_app_with_config<S>(patients: S, config: ServerConfig) -> Router
where
    S: PatientSource + Send + Sync + 'static,
{
    create_app_with_state(AppState::new(Arc::new(patients), config))
}

/// Creates the Axum application from a prepared [`AppState`].
pub fn create_app_with_state<S>(state: AppState<S>) -> Router
where
    S: PatientSource + Send + Sync + 'static,
{
    info!(
        "Creating query API server with patient source: {}",
        state.patients().source_name()
    );

    let config = state.config().clone();

    // Build the router with all query routes
    let router = routing::query_routes::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` takes
/// precedence over `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "fhirq={level},fhirq_rest={level},fhirq_query={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
