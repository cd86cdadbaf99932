//! Application state for the query API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the patient source, the lexicon, the tokenizer and the
//! server configuration. Everything is read-only after startup, so handlers
//! share it through `Arc` without locking.

use std::sync::Arc;

use fhirq_query::{Lexicon, PatientSource, PatientStore, StoreResult, Tokenizer, WordTokenizer};
use tracing::info;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The patient source type (must implement [`PatientSource`])
///
/// # Example
///
/// ```rust
/// use fhirq_rest::{AppState, ServerConfig};
/// use fhirq_query::PatientStore;
/// use std::sync::Arc;
///
/// let state = AppState::new(Arc::new(PatientStore::seed()), ServerConfig::default());
/// assert_eq!(state.patient_count(), 15);
/// ```
pub struct AppState<S> {
    /// The patient source.
    patients: Arc<S>,

    /// Query vocabulary.
    lexicon: Arc<Lexicon>,

    /// Query tokenizer.
    tokenizer: Arc<dyn Tokenizer>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            patients: Arc::clone(&self.patients),
            lexicon: Arc::clone(&self.lexicon),
            tokenizer: Arc::clone(&self.tokenizer),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: PatientSource> AppState<S> {
    /// Creates a new AppState with the built-in lexicon and word tokenizer.
    ///
    /// # Arguments
    ///
    /// * `patients` - The patient source (wrapped in Arc)
    /// * `config` - Server configuration
    pub fn new(patients: Arc<S>, config: ServerConfig) -> Self {
        Self::with_components(
            patients,
            Lexicon::builtin(),
            Arc::new(WordTokenizer),
            config,
        )
    }

    /// Creates a new AppState with a custom lexicon and tokenizer.
    pub fn with_components(
        patients: Arc<S>,
        lexicon: Lexicon,
        tokenizer: Arc<dyn Tokenizer>,
        config: ServerConfig,
    ) -> Self {
        Self {
            patients,
            lexicon: Arc::new(lexicon),
            tokenizer,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the patient source.
    pub fn patients(&self) -> &S {
        &self.patients
    }

    /// Returns the number of patients available to queries.
    pub fn patient_count(&self) -> usize {
        self.patients.patients().len()
    }

    /// Returns a reference to the lexicon.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns a reference to the tokenizer.
    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Builds the patient store named by the configuration.
///
/// Uses the JSON file from `patients_file` when set, otherwise the built-in
/// seed patients.
pub fn load_patient_store(config: &ServerConfig, lexicon: &Lexicon) -> StoreResult<PatientStore> {
    let store = match &config.patients_file {
        Some(path) => PatientStore::from_json_file(path, lexicon)?,
        None => PatientStore::seed(),
    };
    info!(
        source = %store.source_name(),
        patients = store.len(),
        "Patient store ready"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhirq_query::{Operator, PatientRecord};
    use std::io::Write;

    // Fixed patient list for testing
    struct MockPatients(Vec<PatientRecord>);

    impl PatientSource for MockPatients {
        fn source_name(&self) -> &str {
            "mock"
        }

        fn patients(&self) -> &[PatientRecord] {
            &self.0
        }
    }

    #[test]
    fn test_app_state_creation() {
        let patients = Arc::new(MockPatients(vec![PatientRecord::new("Ana Ruiz", 30, "asthma")]));
        let state = AppState::new(patients, ServerConfig::default());

        assert_eq!(state.patients().source_name(), "mock");
        assert_eq!(state.patient_count(), 1);
        assert_eq!(state.tokenizer().name(), "word");
        assert_eq!(state.lexicon().condition("asma"), Some("asthma"));
    }

    #[test]
    fn test_app_state_custom_components() {
        let lexicon = Lexicon::empty().with_keyword(Operator::Over, "plus");
        let state = AppState::with_components(
            Arc::new(MockPatients(Vec::new())),
            lexicon,
            Arc::new(WordTokenizer),
            ServerConfig::for_testing(),
        );

        assert_eq!(state.lexicon().operator("plus"), Some(Operator::Over));
        assert_eq!(state.lexicon().operator("over"), None);
        assert_eq!(state.config().port, 0);
    }

    #[test]
    fn test_app_state_clone() {
        let state = AppState::new(Arc::new(PatientStore::seed()), ServerConfig::default());
        let cloned = state.clone();

        assert_eq!(state.patient_count(), cloned.patient_count());
    }

    #[test]
    fn test_load_patient_store_default_seed() {
        let store = load_patient_store(&ServerConfig::default(), &Lexicon::builtin()).unwrap();
        assert_eq!(store.len(), 15);
    }

    #[test]
    fn test_load_patient_store_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Ana Ruiz", "age": 30, "condition": "asthma"}}]"#
        )
        .unwrap();

        let config = ServerConfig {
            patients_file: Some(file.path().to_path_buf()),
            ..ServerConfig::for_testing()
        };
        let store = load_patient_store(&config, &Lexicon::builtin()).unwrap();
        assert_eq!(store.len(), 1);
    }
}
