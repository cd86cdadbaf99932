//! Filter and aggregation engine.
//!
//! [`apply`] narrows a patient list with a [`StructuredFilter`] and builds the
//! [`ResponseBundle`]: entries with positional ids, a condition histogram in
//! first-seen order and an age histogram sorted by age. [`execute`] runs the
//! whole pipeline from raw query text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bundle::{HistogramBin, PatientEntry, ResponseBundle};
use crate::filter::StructuredFilter;
use crate::interpreter::interpret;
use crate::lexicon::Lexicon;
use crate::patient::{PatientRecord, PatientSource};
use crate::tokenize::Tokenizer;

/// The interpreted filter together with the bundle it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// The structured filter derived from the query text.
    pub parsed: StructuredFilter,
    /// The filtered patients and their histograms.
    pub fhir_response: ResponseBundle,
}

/// Returns the records matching `filter`, in their original order.
///
/// The age constraint is applied first, then the condition. Unset constraints
/// let every record through.
pub fn select<'a>(
    filter: &StructuredFilter,
    patients: &'a [PatientRecord],
) -> Vec<&'a PatientRecord> {
    let age_constraint = filter.age_constraint();
    patients
        .iter()
        .filter(|p| age_constraint.is_none_or(|(operator, age)| operator.matches(p.age, age)))
        .filter(|p| {
            filter
                .condition
                .as_deref()
                .is_none_or(|condition| p.condition == condition)
        })
        .collect()
}

/// Applies `filter` to `patients` and builds the response bundle.
pub fn apply(filter: &StructuredFilter, patients: &[PatientRecord]) -> ResponseBundle {
    let matched = select(filter, patients);

    let mut bundle = ResponseBundle::searchset();
    bundle.entries = matched
        .iter()
        .enumerate()
        .map(|(i, record)| PatientEntry::from_record(i + 1, record))
        .collect();
    bundle.condition_histogram = condition_histogram(&matched);
    bundle.age_histogram = age_histogram(&matched);
    bundle
}

/// Tokenizes and interprets `query`, then applies the filter to `source`.
pub fn execute(
    query: &str,
    tokenizer: &dyn Tokenizer,
    lexicon: &Lexicon,
    source: &dyn PatientSource,
) -> QueryResponse {
    let tokens = tokenizer.tokenize(query);
    let parsed = interpret(&tokens, lexicon);
    let fhir_response = apply(&parsed, source.patients());

    debug!(
        tokens = tokens.len(),
        unconstrained = parsed.is_unconstrained(),
        age = ?parsed.age,
        operator = ?parsed.operator,
        condition = ?parsed.condition,
        matched = fhir_response.total(),
        "Executed query"
    );

    QueryResponse {
        parsed,
        fhir_response,
    }
}

fn condition_histogram(records: &[&PatientRecord]) -> Vec<HistogramBin> {
    let mut bins: Vec<HistogramBin> = Vec::new();
    for record in records {
        match bins.iter_mut().find(|bin| bin.label == record.condition) {
            Some(bin) => bin.value += 1,
            None => bins.push(HistogramBin::new(record.condition.as_str(), 1)),
        }
    }
    bins
}

fn age_histogram(records: &[&PatientRecord]) -> Vec<HistogramBin> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.age).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(age, count)| HistogramBin::new(age.to_string(), count))
        .collect()
}
