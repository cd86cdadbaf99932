//! Tokenizer adapter.
//!
//! The interpreter only needs an ordered sequence of lower-cased word tokens.
//! Anything that can produce one implements [`Tokenizer`]; [`WordTokenizer`] is
//! the built-in adapter.

use std::sync::LazyLock;

use regex::Regex;

/// Splits query text into normalized word tokens.
pub trait Tokenizer: Send + Sync {
    /// Returns a short name for logging.
    fn name(&self) -> &'static str;

    /// Lower-cases `text` and splits it into tokens, preserving order.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

// Numbers keep a leading sign and any decimal part so that "-5" and "45.5"
// stay whole. A sign glued to a preceding word is not taken.
static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\B[-+])?\d+(?:[.,]\d+)*|\w+").expect("word pattern is valid")
});

/// Unicode-aware word tokenizer.
///
/// Punctuation is dropped and accented letters are kept, so `"¿Cáncer, más 60?"`
/// becomes `["cáncer", "más", "60"]`. Signed and decimal numbers come out as a
/// single token (`"-5"`, `"45.5"`).
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn name(&self) -> &'static str {
        "word"
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        WORD.find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits() {
        let tokens = WordTokenizer.tokenize("Show Cancer patients OLDER than 45");
        assert_eq!(
            tokens,
            vec!["show", "cancer", "patients", "older", "than", "45"]
        );
    }

    #[test]
    fn test_drops_punctuation() {
        let tokens = WordTokenizer.tokenize("patients over 50, with diabetes.");
        assert_eq!(tokens, vec!["patients", "over", "50", "with", "diabetes"]);
    }

    #[test]
    fn test_keeps_accented_words() {
        let tokens = WordTokenizer.tokenize("¿Pacientes con CÁNCER mayores de 60?");
        assert_eq!(tokens, vec!["pacientes", "con", "cáncer", "mayores", "de", "60"]);
    }

    #[test]
    fn test_keeps_signed_and_decimal_numbers_whole() {
        let tokens = WordTokenizer.tokenize("patients under -5 or older than 45.5");
        assert_eq!(
            tokens,
            vec!["patients", "under", "-5", "or", "older", "than", "45.5"]
        );

        let tokens = WordTokenizer.tokenize("mayores de 60,5 y +40");
        assert_eq!(tokens, vec!["mayores", "de", "60,5", "y", "+40"]);
    }

    #[test]
    fn test_trailing_punctuation_after_number() {
        let tokens = WordTokenizer.tokenize("over 50, with diabetes. under 30.");
        assert_eq!(tokens, vec!["over", "50", "with", "diabetes", "under", "30"]);
    }

    #[test]
    fn test_hyphen_inside_word_is_not_a_sign() {
        let tokens = WordTokenizer.tokenize("covid-19");
        assert_eq!(tokens, vec!["covid", "19"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(WordTokenizer.tokenize("").is_empty());
        assert!(WordTokenizer.tokenize("  ?! ").is_empty());
    }
}
