//! # wordcalc
//!
//! wordcalc evaluates spoken-style English arithmetic such as
//! `"one hundred twenty three million minus four hundred plus ten multiply by
//! two"` and spells whole numbers back out as English words.
//!
//! The forward direction normalizes the text, aggregates number words into a
//! flat sequence of values and operators, and folds that sequence with
//! multiplication and division taking precedence over addition and
//! subtraction. Problems that do not stop the analysis are returned as
//! diagnostics next to the value.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::{Diagnostic, WordsError},
    interpreter::{
        evaluator::evaluate,
        tokenizer::{Tokenized, tokenize},
    },
    item::ArithmeticItem,
};

/// Provides the diagnostics and error types.
///
/// Analysis never fails: skipped or normalized input is described by
/// [`Diagnostic`] values returned next to the result. Spelling a number can
/// fail, which is described by [`WordsError`].
pub mod error;
/// Orchestrates the forward direction, from text to value.
///
/// This module ties together normalization, word classification, number
/// aggregation and precedence evaluation.
///
/// # Responsibilities
/// - Turns raw text into a flat sequence of arithmetic items.
/// - Folds that sequence into a single value.
/// - Collects diagnostics from every stage.
pub mod interpreter;
/// Defines the arithmetic items exchanged between tokenizer and evaluator.
pub mod item;
/// Rewrites digits and operator symbols in transcribed text as words.
pub mod symbols;
/// General utilities for safe numeric conversion.
pub mod util;
/// Spells whole numbers as English words.
pub mod words;

/// The outcome of analysing one sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// The evaluated result.
    pub value:       f64,
    /// The item sequence the value was computed from.
    pub items:       Vec<ArithmeticItem>,
    /// Everything that was skipped or normalized, in the order noticed.
    pub diagnostics: Vec<Diagnostic>,
}

/// Owns the text of one analysis.
///
/// Analyzers share no state, so independent instances can run on different
/// threads without coordination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analyzer {
    text: String,
}

impl Analyzer {
    /// Creates an analyzer for `text`. The text is stored lowercased.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { text: text.to_lowercase() }
    }

    /// Returns the stored text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Tokenizes the stored text without evaluating it.
    #[must_use]
    pub fn tokenize(&self) -> Tokenized {
        tokenize(&self.text)
    }

    /// Tokenizes and evaluates the stored text.
    ///
    /// # Example
    /// ```
    /// use wordcalc::Analyzer;
    ///
    /// let analyzer = Analyzer::new("Three minus one multiply by four");
    /// assert_eq!(analyzer.analyze().value, -1.0);
    /// ```
    #[must_use]
    pub fn analyze(&self) -> Analysis {
        let Tokenized { items, mut diagnostics } = self.tokenize();
        let evaluation = evaluate(&items);
        diagnostics.extend(evaluation.diagnostics);

        debug!(value = evaluation.value, diagnostics = diagnostics.len(), "analysis finished");
        Analysis { value: evaluation.value,
                   items,
                   diagnostics }
    }
}

/// Evaluates a sentence of number and operator words.
///
/// Unknown words are skipped and reported; the analysis itself never fails.
///
/// # Examples
/// ```
/// use wordcalc::{analyze, error::Diagnostic};
///
/// let analysis = analyze("fifty-six minus two multiply by forty multiply by five plus six minus seven");
/// assert_eq!(analysis.value, -345.0);
///
/// let analysis = analyze("one plus banana two");
/// assert_eq!(analysis.value, 3.0);
/// assert_eq!(analysis.diagnostics,
///            vec![Diagnostic::UnrecognizedWord { word:     "banana".to_string(),
///                                                position: 2, }]);
/// ```
#[must_use]
pub fn analyze(text: &str) -> Analysis {
    Analyzer::new(text).analyze()
}

/// Spells a whole number in English words, `minus` first if it is negative.
///
/// Zero renders as an empty string.
///
/// # Errors
/// Returns a [`WordsError`] for fractional, non-finite or too large values.
///
/// # Example
/// ```
/// use wordcalc::spell;
///
/// assert_eq!(spell(77_000.0).unwrap(), "seventy-seven thousand");
/// assert!(spell(0.5).is_err());
/// ```
pub fn spell(value: f64) -> Result<String, WordsError> {
    words::to_signed_words(value)
}
