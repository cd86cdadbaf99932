//! Multilingual query vocabulary.
//!
//! A [`Lexicon`] maps condition names to canonical condition tags and holds the
//! keyword sets that introduce an age comparison, plus the connector words
//! ("than", "de") allowed between such a keyword and its age. The built-in
//! vocabulary covers English and Spanish; more synonyms are added through the
//! builder methods without touching the interpreter.
//!
//! All lookups are exact token matches against lower-cased entries.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::filter::Operator;

const CONDITIONS: &[(&str, &str)] = &[
    ("diabetes", "diabetes"),
    ("asthma", "asthma"),
    ("hypertension", "hypertension"),
    ("cancer", "cancer"),
    ("obesity", "obesity"),
    ("obesidad", "obesity"),
    ("cáncer", "cancer"),
    ("asma", "asthma"),
    ("hipertensión", "hypertension"),
];

const OVER_WORDS: &[&str] = &["over", "older", "greater", "above", "mayores", "más", "mas"];

const UNDER_WORDS: &[&str] = &["under", "younger", "less", "below", "menores"];

const CONNECTORS: &[&str] = &["than", "de", "que"];

/// Condition synonyms and operator keywords.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    conditions: HashMap<String, String>,
    over: HashSet<String>,
    under: HashSet<String>,
    connectors: HashSet<String>,
}

impl Lexicon {
    /// Creates a lexicon with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the built-in English and Spanish lexicon.
    pub fn builtin() -> Self {
        let mut lexicon = Self::empty();
        for (word, tag) in CONDITIONS {
            lexicon = lexicon.with_condition(*word, *tag);
        }
        for word in OVER_WORDS {
            lexicon = lexicon.with_keyword(Operator::Over, *word);
        }
        for word in UNDER_WORDS {
            lexicon = lexicon.with_keyword(Operator::Under, *word);
        }
        for word in CONNECTORS {
            lexicon = lexicon.with_connector(*word);
        }
        lexicon
    }

    /// Adds a condition synonym resolving to `tag`.
    pub fn with_condition(mut self, word: impl AsRef<str>, tag: impl AsRef<str>) -> Self {
        self.conditions
            .insert(word.as_ref().to_lowercase(), tag.as_ref().to_lowercase());
        self
    }

    /// Adds a keyword that introduces an age comparison.
    pub fn with_keyword(mut self, operator: Operator, word: impl AsRef<str>) -> Self {
        let word = word.as_ref().to_lowercase();
        match operator {
            Operator::Over => self.over.insert(word),
            Operator::Under => self.under.insert(word),
        };
        self
    }

    /// Adds a filler word allowed between an operator keyword and its age,
    /// as in "older *than* 45" or "mayores *de* 60".
    pub fn with_connector(mut self, word: impl AsRef<str>) -> Self {
        self.connectors.insert(word.as_ref().to_lowercase());
        self
    }

    /// Resolves a token to its canonical condition tag.
    pub fn condition(&self, token: &str) -> Option<&str> {
        self.conditions.get(token).map(String::as_str)
    }

    /// Returns the comparison a token introduces, if it is an operator keyword.
    ///
    /// A word registered for both directions resolves to [`Operator::Over`].
    pub fn operator(&self, token: &str) -> Option<Operator> {
        if self.over.contains(token) {
            Some(Operator::Over)
        } else if self.under.contains(token) {
            Some(Operator::Under)
        } else {
            None
        }
    }

    /// Returns true if `token` is a connector word.
    pub fn is_connector(&self, token: &str) -> bool {
        self.connectors.contains(token)
    }

    /// Returns true if `tag` is one of the canonical condition tags.
    pub fn is_canonical(&self, tag: &str) -> bool {
        self.conditions.values().any(|t| t == tag)
    }

    /// Returns the canonical condition tags in sorted order.
    pub fn canonical_conditions(&self) -> BTreeSet<&str> {
        self.conditions.values().map(String::as_str).collect()
    }
}
