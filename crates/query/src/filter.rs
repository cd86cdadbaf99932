//! The structured filter derived from a free-text query.
//!
//! A [`StructuredFilter`] is the triple of optional constraints produced by the
//! [interpreter](crate::interpreter). Each field is independent; an unset field
//! means "no constraint" rather than "match nothing".

use std::fmt;

use serde::{Deserialize, Serialize};

/// Age comparison direction.
///
/// Both directions are strict: a patient whose age equals the filter age is
/// excluded either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Keep patients strictly older than the filter age.
    Over,
    /// Keep patients strictly younger than the filter age.
    Under,
}

impl Operator {
    /// Returns the wire representation (`"over"` or `"under"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Over => "over",
            Operator::Under => "under",
        }
    }

    /// Returns true if `age` satisfies this comparison against `threshold`.
    pub fn matches(&self, age: u32, threshold: u32) -> bool {
        match self {
            Operator::Over => age > threshold,
            Operator::Under => age < threshold,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional age, operator and condition constraints.
///
/// Serializes to the `parsed` object of the query response, with unset fields
/// rendered as `null`.
///
/// `age` and `operator` are only ever set together by the interpreter. A filter
/// built by hand with just one of them applies no age constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredFilter {
    /// Age threshold.
    pub age: Option<u32>,
    /// Canonical condition tag.
    pub condition: Option<String>,
    /// Age comparison direction.
    pub operator: Option<Operator>,
}

impl StructuredFilter {
    /// Creates a filter with no constraints.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Sets the age constraint.
    pub fn with_age(mut self, operator: Operator, age: u32) -> Self {
        self.operator = Some(operator);
        self.age = Some(age);
        self
    }

    /// Sets the condition constraint.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Returns the age constraint when both parts of it are present.
    pub fn age_constraint(&self) -> Option<(Operator, u32)> {
        match (self.operator, self.age) {
            (Some(operator), Some(age)) => Some((operator, age)),
            _ => None,
        }
    }

    /// Returns true if no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.age_constraint().is_none() && self.condition.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_is_strict() {
        assert!(Operator::Over.matches(46, 45));
        assert!(!Operator::Over.matches(45, 45));
        assert!(Operator::Under.matches(29, 30));
        assert!(!Operator::Under.matches(30, 30));
    }

    #[test]
    fn test_serializes_unset_fields_as_null() {
        let json = serde_json::to_value(StructuredFilter::unconstrained()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"age": null, "condition": null, "operator": null})
        );
    }

    #[test]
    fn test_serializes_operator_lowercase() {
        let filter = StructuredFilter::unconstrained()
            .with_age(Operator::Under, 30)
            .with_condition("asthma");
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["operator"], "under");
        assert_eq!(json["age"], 30);
        assert_eq!(json["condition"], "asthma");
    }

    #[test]
    fn test_half_age_constraint_is_ignored() {
        let filter = StructuredFilter {
            age: Some(40),
            ..Default::default()
        };
        assert!(filter.age_constraint().is_none());
        assert!(filter.is_unconstrained());
    }
}
