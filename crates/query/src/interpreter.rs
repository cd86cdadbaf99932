//! Free text to [`StructuredFilter`] interpretation.
//!
//! The interpreter makes one forward pass over the tokens and tracks each
//! field separately:
//!
//! - **age/operator**: the first operator keyword that is followed by a
//!   non-negative integer sets both fields. Connector words ("than", "de") may
//!   sit in between. A keyword followed by anything else (or by nothing) is
//!   skipped and the scan carries on.
//! - **condition**: the first token found in the lexicon's condition table.
//!
//! Once a field is found, later candidates for it are ignored. Nothing here
//! fails: unmatched fields are simply left unset.

use tracing::trace;

use crate::filter::StructuredFilter;
use crate::lexicon::Lexicon;

/// Interprets a token sequence against `lexicon`.
///
/// # Example
///
/// ```
/// use fhirq_query::{Lexicon, Operator, interpret};
///
/// let tokens = ["show", "cancer", "patients", "older", "than", "45"];
/// let filter = interpret(&tokens, &Lexicon::builtin());
///
/// assert_eq!(filter.condition.as_deref(), Some("cancer"));
/// assert_eq!(filter.age_constraint(), Some((Operator::Over, 45)));
///
/// let tokens = ["over", "asthma"];
/// let filter = interpret(&tokens, &Lexicon::builtin());
/// assert_eq!(filter.age_constraint(), None);
/// ```
pub fn interpret<T: AsRef<str>>(tokens: &[T], lexicon: &Lexicon) -> StructuredFilter {
    let mut filter = StructuredFilter::unconstrained();

    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();

        if filter.operator.is_none() {
            if let Some(operator) = lexicon.operator(token) {
                match age_after(tokens, i, lexicon) {
                    Some(age) => {
                        filter.operator = Some(operator);
                        filter.age = Some(age);
                    }
                    None => trace!(keyword = token, "operator keyword without an age"),
                }
            }
        }

        if filter.condition.is_none() {
            if let Some(tag) = lexicon.condition(token) {
                filter.condition = Some(tag.to_string());
            }
        }

        if filter.operator.is_some() && filter.condition.is_some() {
            break;
        }
    }

    filter
}

/// Parses the age following the keyword at `keyword`, skipping connectors.
fn age_after<T: AsRef<str>>(tokens: &[T], keyword: usize, lexicon: &Lexicon) -> Option<u32> {
    tokens[keyword + 1..]
        .iter()
        .map(|token| token.as_ref())
        .find(|token| !lexicon.is_connector(token))
        .and_then(parse_age)
}

fn parse_age(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
