//! Axum extractors for query requests.
//!
//! - [`QueryBody`] - Extract the free-text query from a JSON body

mod query_body;

pub use query_body::{QueryBody, QueryBodyRejection};
