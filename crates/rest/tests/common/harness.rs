//! Query API test harness.
//!
//! Provides a configured test server over a patient store.

use axum_test::TestServer;
use fhirq_query::{Lexicon, PatientRecord, PatientStore};
use serde_json::{Value, json};

use fhirq_rest::{ServerConfig, create_app_with_config};

/// Creates a test server over the built-in seed patients.
pub fn seed_server() -> TestServer {
    server_for(PatientStore::seed())
}

/// Creates a test server over the given patient store.
pub fn server_for(store: PatientStore) -> TestServer {
    let app = create_app_with_config(store, ServerConfig::for_testing());
    TestServer::new(app).expect("Failed to create test server")
}

/// Creates a test server over an explicit patient list.
pub fn server_with(records: Vec<PatientRecord>) -> TestServer {
    let store = PatientStore::from_records("fixture", records, &Lexicon::builtin())
        .expect("Failed to build fixture store");
    server_for(store)
}

/// Posts a query and returns the response.
pub async fn post_query(server: &TestServer, query: &str) -> axum_test::TestResponse {
    server.post("/query").json(&json!({ "query": query })).await
}

/// Posts a query, asserts success and returns the JSON body.
pub async fn query_json(server: &TestServer, query: &str) -> Value {
    let response = post_query(server, query).await;
    response.assert_status_ok();
    response.json::<Value>()
}
