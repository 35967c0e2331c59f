use logos::Logos;

use crate::{
    interpreter::tables::{cardinal_value, is_connector, multiplier_scale},
    item::OperatorKind,
};

/// Represents one classified word of normalized input.
///
/// Every run of non-whitespace characters is one word. Its kind comes from the
/// operator words of [`OperatorKind`] and the tables in
/// [`tables`](crate::interpreter::tables); a word found nowhere is unknown.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Word {
    /// Operator words: `plus`, `minus`, `multiply`, `divide`.
    Operator(OperatorKind),
    /// Filler words: `and`, `by`.
    Connector,
    /// Cardinal words, one to ninety.
    Cardinal(f64),
    /// Multiplier words, `hundred` to `trillions`.
    Multiplier(f64),
    /// Anything else. Every word is matched here first and reclassified.
    #[regex(r"[^ \t\n\f\r]+", classify)]
    Unknown,
    /// Whitespace.
    #[regex(r"[ \t\n\f\r]+", logos::skip)]
    Ignored,
}

/// Looks the current slice up in the operator and number tables.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Word::Operator` or `Word::Connector` for the fixed words.
/// - `Word::Cardinal` or `Word::Multiplier` if the slice is in a number table.
/// - `Word::Unknown` otherwise.
#[allow(clippy::needless_pass_by_ref_mut)]
fn classify(lex: &mut logos::Lexer<Word>) -> Word {
    let slice = lex.slice();
    if let Ok(op) = slice.parse::<OperatorKind>() {
        return Word::Operator(op);
    }
    if is_connector(slice) {
        return Word::Connector;
    }
    cardinal_value(slice).map(Word::Cardinal)
                         .or_else(|| multiplier_scale(slice).map(Word::Multiplier))
                         .unwrap_or(Word::Unknown)
}

/// Classifies every word of normalized input.
///
/// Returns the classified word next to its source slice so callers can report
/// unknown words verbatim. Each entry corresponds to exactly one
/// whitespace-delimited word, so the entry index is the word position.
///
/// # Example
/// ```
/// use wordcalc::{interpreter::lexer::{Word, lex}, item::OperatorKind};
///
/// let words = lex("twenty plus apple");
/// assert_eq!(words[0], (Word::Cardinal(20.0), "twenty"));
/// assert_eq!(words[1], (Word::Operator(OperatorKind::Plus), "plus"));
/// assert_eq!(words[2], (Word::Unknown, "apple"));
/// ```
#[must_use]
pub fn lex(normalized: &str) -> Vec<(Word, &str)> {
    let mut lexer = Word::lexer(normalized);
    let mut words = Vec::new();

    while let Some(token) = lexer.next() {
        words.push((token.unwrap_or(Word::Unknown), lexer.slice()));
    }

    words
}
