//! # fhirq-query - Free-text cohort queries over patient records
//!
//! This crate turns a short clinical query in English or Spanish, such as
//! *"Show cancer patients older than 45"* or *"pacientes con asma menores de
//! 30"*, into a structured filter and applies it to a read-only patient store.
//! The result is a FHIR-flavored `searchset` Bundle plus a condition histogram
//! and an age histogram.
//!
//! ## Pipeline
//!
//! ```text
//! text -> Tokenizer -> tokens -> interpret -> StructuredFilter -> apply -> ResponseBundle
//! ```
//!
//! - [`tokenize`] - the [`Tokenizer`] seam and the built-in [`WordTokenizer`]
//! - [`lexicon`] - multilingual condition synonyms and operator keywords
//! - [`interpreter`] - single forward scan from tokens to a [`StructuredFilter`]
//! - [`patient`] - [`PatientRecord`], the [`PatientSource`] trait and [`PatientStore`]
//! - [`engine`] - filtering, entry construction and histograms
//! - [`bundle`] - the serialized response types
//!
//! ## Quick Start
//!
//! ```
//! use fhirq_query::{Lexicon, PatientStore, WordTokenizer, execute};
//!
//! let store = PatientStore::seed();
//! let response = execute("patients under 30", &WordTokenizer, &Lexicon::builtin(), &store);
//!
//! assert_eq!(response.parsed.age, Some(30));
//! assert_eq!(response.fhir_response.entries.len(), 1);
//! ```
//!
//! Interpretation never fails: words it does not recognize are ignored and an
//! empty query matches every patient.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bundle;
pub mod engine;
pub mod error;
pub mod filter;
pub mod interpreter;
pub mod lexicon;
pub mod patient;
pub mod tokenize;

pub use bundle::{HistogramBin, HumanName, PatientEntry, PatientResource, ResponseBundle};
pub use engine::{QueryResponse, apply, execute, select};
pub use error::{StoreError, StoreResult};
pub use filter::{Operator, StructuredFilter};
pub use interpreter::interpret;
pub use lexicon::Lexicon;
pub use patient::{PatientRecord, PatientSource, PatientStore};
pub use tokenize::{Tokenizer, WordTokenizer};
