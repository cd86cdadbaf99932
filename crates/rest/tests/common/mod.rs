//! Common test utilities for query API testing.
//!
//! - [`harness`] - Test server construction and request helpers
//! - [`assertions`] - HTTP response and bundle assertions

#![allow(dead_code)]

pub mod assertions;
pub mod harness;
