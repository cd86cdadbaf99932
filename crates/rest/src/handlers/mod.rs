//! HTTP request handlers.
//!
//! - [`query`] - Interpret a free-text query and return the matching patients
//! - [`health`] - Health check endpoints

pub mod health;
pub mod query;

// Re-export handlers for convenience
pub use health::health_handler;
pub use query::query_handler;
