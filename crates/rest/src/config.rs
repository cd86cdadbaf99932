//! Server configuration for the query API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `FHIRQ_SERVER_PORT` | 5000 | Server port |
//! | `FHIRQ_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `FHIRQ_LOG_LEVEL` | info | Log level |
//! | `FHIRQ_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `FHIRQ_ENABLE_CORS` | true | Enable CORS |
//! | `FHIRQ_CORS_ORIGINS` | * | Allowed origins |
//! | `FHIRQ_CORS_METHODS` | GET,POST,OPTIONS | Allowed methods |
//! | `FHIRQ_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `FHIRQ_PATIENTS_FILE` | (built-in seed) | JSON patient seed file |
//!
//! # Example
//!
//! ```rust
//! use fhirq_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Server configuration for the query API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "fhirq")]
#[command(about = "Free-text cohort query server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "FHIRQ_SERVER_PORT", default_value = "5000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "FHIRQ_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "FHIRQ_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "FHIRQ_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "FHIRQ_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "FHIRQ_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "FHIRQ_CORS_METHODS", default_value = "GET,POST,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "FHIRQ_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// JSON file with the patient records to serve instead of the built-in seed.
    #[arg(long, env = "FHIRQ_PATIENTS_FILE")]
    pub patients_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            patients_file: None,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if !matches!(
            self.log_level.to_ascii_lowercase().as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            errors.push(format!("Unknown log level '{}'", self.log_level));
        }

        if let Some(path) = &self.patients_file {
            if !path.is_file() {
                errors.push(format!("Patients file {} does not exist", path.display()));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            ..Default::default()
        }
    }
}
