//! fhirq server
//!
//! Answers free-text cohort questions over a patient store.

use std::sync::Arc;

use clap::Parser;
use fhirq_query::{Lexicon, PatientSource, WordTokenizer};
use fhirq_rest::{AppState, ServerConfig, create_app_with_state, init_logging, load_patient_store};
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let lexicon = Lexicon::builtin();
    let store = load_patient_store(&config, &lexicon)
        .map_err(|e| anyhow::anyhow!("Failed to load patients: {}", e))?;

    info!(
        port = config.port,
        host = %config.host,
        source = %store.source_name(),
        patients = store.len(),
        conditions = lexicon.canonical_conditions().len(),
        "Starting fhirq server"
    );

    let state = AppState::with_components(
        Arc::new(store),
        lexicon,
        Arc::new(WordTokenizer),
        config.clone(),
    );
    let app = create_app_with_state(state);
    serve(app, &config).await
}
