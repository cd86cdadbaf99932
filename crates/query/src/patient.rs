//! Patient records and the read-only store that holds them.
//!
//! The store is built once at startup, either from the built-in seed data or
//! from a JSON seed file, and never changes afterwards. Handlers read it
//! through the [`PatientSource`] trait.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::lexicon::Lexicon;

/// A single patient: display name, age in years and canonical condition tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Display name, normally "First Last".
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Canonical condition tag.
    pub condition: String,
}

impl PatientRecord {
    /// Creates a record.
    pub fn new(name: impl Into<String>, age: u32, condition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            condition: condition.into(),
        }
    }

    /// Splits the name into given and family parts.
    ///
    /// The first whitespace-separated part is the given name; the remaining
    /// parts, joined by single spaces, form the family name. Missing parts come
    /// back as `None` and an empty string respectively.
    pub fn split_name(&self) -> (Option<&str>, String) {
        let mut parts = self.name.split_whitespace();
        let given = parts.next();
        let family = parts.collect::<Vec<_>>().join(" ");
        (given, family)
    }
}

/// Read access to an ordered set of patient records.
pub trait PatientSource: Send + Sync {
    /// Returns a short name describing where the records came from.
    fn source_name(&self) -> &str;

    /// Returns all records in their original order.
    fn patients(&self) -> &[PatientRecord];
}

const SEED: &[(&str, u32, &str)] = &[
    ("Alice Johnson", 62, "cancer"),
    ("Bob Lee", 70, "cancer"),
    ("Carla Singh", 53, "cancer"),
    ("David Nguyen", 67, "hypertension"),
    ("Esha Patel", 59, "asthma"),
    ("Felix Wang", 45, "obesity"),
    ("Gina Torres", 38, "diabetes"),
    ("Hector Silva", 29, "asthma"),
    ("Irene Kim", 64, "cancer"),
    ("Jason Park", 72, "cancer"),
    ("Kelly Brown", 48, "cancer"),
    ("Luis Romero", 51, "hypertension"),
    ("Maria Lopez", 60, "diabetes"),
    ("Nina Shah", 57, "cancer"),
    ("Omar Malik", 66, "cancer"),
];

/// In-memory, immutable patient store.
#[derive(Debug, Clone)]
pub struct PatientStore {
    name: String,
    records: Vec<PatientRecord>,
}

impl PatientStore {
    /// Creates the store holding the built-in seed patients.
    pub fn seed() -> Self {
        Self {
            name: "seed".to_string(),
            records: SEED
                .iter()
                .map(|(name, age, condition)| PatientRecord::new(*name, *age, *condition))
                .collect(),
        }
    }

    /// Creates a store from records, validating them against `lexicon`.
    ///
    /// Every record needs a non-blank name and a condition that is one of the
    /// lexicon's canonical tags.
    pub fn from_records(
        name: impl Into<String>,
        records: Vec<PatientRecord>,
        lexicon: &Lexicon,
    ) -> StoreResult<Self> {
        for (index, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(StoreError::EmptyName { index });
            }
            if !lexicon.is_canonical(&record.condition) {
                return Err(StoreError::UnknownCondition {
                    index,
                    name: record.name.clone(),
                    condition: record.condition.clone(),
                });
            }
        }

        Ok(Self {
            name: name.into(),
            records,
        })
    }

    /// Parses a JSON array of `{name, age, condition}` objects.
    pub fn from_json_str(
        name: impl Into<String>,
        json: &str,
        lexicon: &Lexicon,
    ) -> StoreResult<Self> {
        let records: Vec<PatientRecord> = serde_json::from_str(json)?;
        Self::from_records(name, records, lexicon)
    }

    /// Loads a JSON seed file.
    pub fn from_json_file(path: impl AsRef<Path>, lexicon: &Lexicon) -> StoreResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(path.display().to_string(), &json, lexicon)?;
        debug!(path = %path.display(), patients = store.len(), "Loaded patient seed file");
        Ok(store)
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for PatientStore {
    fn default() -> Self {
        Self::seed()
    }
}

impl PatientSource for PatientStore {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn patients(&self) -> &[PatientRecord] {
        &self.records
    }
}
