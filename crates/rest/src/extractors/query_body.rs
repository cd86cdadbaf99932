//! Query request body extractor.
//!
//! Extracts the free-text query from a JSON request body of the form
//! `{"query": "..."}`.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::RestError;

/// Axum extractor for the query text.
///
/// A missing or `null` `query` field, and an empty body, all yield an empty
/// query rather than an error.
///
/// # Example
///
/// ```rust,ignore
/// use fhirq_rest::extractors::QueryBody;
///
/// async fn handler(QueryBody(query): QueryBody) {
///     println!("Query: {}", query);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBody(pub String);

impl QueryBody {
    /// Returns the query text.
    pub fn text(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Default, Deserialize)]
struct QueryRequest {
    #[serde(default)]
    query: Option<String>,
}

/// Error type for query body extraction failures.
#[derive(Debug)]
pub enum QueryBodyRejection {
    /// The body could not be read.
    UnreadableBody(String),
    /// The body is not a JSON object with a string `query`.
    InvalidJson(serde_json::Error),
    /// The content type is not JSON.
    UnsupportedMediaType(String),
}

impl IntoResponse for QueryBodyRejection {
    fn into_response(self) -> Response {
        let error = match self {
            QueryBodyRejection::UnreadableBody(msg) => RestError::BadRequest {
                message: format!("Failed to read body: {}", msg),
            },
            QueryBodyRejection::InvalidJson(err) => RestError::from(err),
            QueryBodyRejection::UnsupportedMediaType(ct) => {
                RestError::UnsupportedMediaType { content_type: ct }
            }
        };
        error.into_response()
    }
}

impl<S> FromRequest<S> for QueryBody
where
    S: Send + Sync,
{
    type Rejection = QueryBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Must own the string before moving req
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();

        if !is_json_media_type(&content_type) {
            return Err(QueryBodyRejection::UnsupportedMediaType(content_type));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| QueryBodyRejection::UnreadableBody(e.to_string()))?;

        let request: QueryRequest = if bytes.iter().all(u8::is_ascii_whitespace) {
            QueryRequest::default()
        } else {
            serde_json::from_slice(&bytes).map_err(QueryBodyRejection::InvalidJson)?
        };

        Ok(QueryBody(request.query.unwrap_or_default()))
    }
}

/// Accepts `application/json` and structured `+json` types, ignoring parameters.
fn is_json_media_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some((kind, subtype)) => {
            (kind == "application" && subtype == "json") || subtype.ends_with("+json")
        }
        None => false,
    }
}
