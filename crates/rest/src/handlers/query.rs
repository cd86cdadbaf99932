//! Query interaction handler.
//!
//! `POST [base]/query` takes `{"query": "..."}`, interprets the text and
//! returns the parsed filter together with a `searchset` Bundle of the matching
//! patients and their condition and age histograms.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fhirq_query::{PatientSource, execute};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::QueryBody;
use crate::state::AppState;

/// Handler for the query endpoint.
///
/// # HTTP Request
///
/// `POST [base]/query`
///
/// # Response
///
/// - `200 OK` - `{"parsed": {...}, "fhir_response": {...}}`
/// - `400 Bad Request` - Body is not valid JSON
/// - `415 Unsupported Media Type` - Body is not JSON
pub async fn query_handler<S>(
    State(state): State<AppState<S>>,
    body: QueryBody,
) -> RestResult<Response>
where
    S: PatientSource + Send + Sync,
{
    debug!(query = %body.text(), "Processing query request");

    let response = execute(
        body.text(),
        state.tokenizer(),
        state.lexicon(),
        state.patients(),
    );

    debug!(
        matched = response.fhir_response.total(),
        "Query completed"
    );

    Ok((StatusCode::OK, Json(response)).into_response())
}
