//! Response bundle types.
//!
//! A [`ResponseBundle`] is a FHIR-flavored `searchset` Bundle carrying the
//! matched patients plus two histograms used for charting. It is produced by
//! the [engine](crate::engine) and serialized as-is into the HTTP response.

use serde::{Deserialize, Serialize};

use crate::patient::PatientRecord;

/// Bundle type codes used by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleType {
    /// Search results bundle.
    Searchset,
}

/// The per-query response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBundle {
    /// Always `"Bundle"`.
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    /// Bundle type.
    #[serde(rename = "type")]
    pub bundle_type: BundleType,
    /// Matched patients in store order.
    #[serde(rename = "entry")]
    pub entries: Vec<PatientEntry>,
    /// Count per condition, in first-seen order.
    #[serde(rename = "chart_data")]
    pub condition_histogram: Vec<HistogramBin>,
    /// Count per age, ascending by age.
    #[serde(rename = "age_distribution")]
    pub age_histogram: Vec<HistogramBin>,
}

impl ResponseBundle {
    /// Creates an empty searchset bundle.
    pub fn searchset() -> Self {
        Self {
            resource_type: "Bundle".to_string(),
            bundle_type: BundleType::Searchset,
            entries: Vec::new(),
            condition_histogram: Vec::new(),
            age_histogram: Vec::new(),
        }
    }

    /// Returns the number of matched patients.
    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

/// A bundle entry wrapping one patient resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientEntry {
    /// The patient resource.
    pub resource: PatientResource,
}

/// Patient resource view of a [`PatientRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientResource {
    /// Always `"Patient"`.
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    /// Positional id within this response ("001", "002", ...).
    pub id: String,
    /// A single human name.
    pub name: Vec<HumanName>,
    /// Age in years.
    pub age: u32,
    /// Canonical condition tag.
    pub condition: String,
}

/// Given and family name parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanName {
    /// Given names (at most one).
    pub given: Vec<String>,
    /// Family name, possibly empty.
    pub family: String,
}

impl PatientEntry {
    /// Builds the entry for the patient at 1-based `position` in the results.
    pub fn from_record(position: usize, record: &PatientRecord) -> Self {
        let (given, family) = record.split_name();
        Self {
            resource: PatientResource {
                resource_type: "Patient".to_string(),
                id: format!("{:03}", position),
                name: vec![HumanName {
                    given: given.map(str::to_string).into_iter().collect(),
                    family,
                }],
                age: record.age,
                condition: record.condition.clone(),
            },
        }
    }
}

/// One labelled count in a histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Bin label (condition tag or age).
    pub label: String,
    /// Number of matched patients in the bin.
    pub value: usize,
}

impl HistogramBin {
    /// Creates a bin.
    pub fn new(label: impl Into<String>, value: usize) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
