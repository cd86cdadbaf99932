//! Route configuration for the query API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod query_routes;

pub use query_routes::create_routes;
