//! Symbol and digit substitution for transcribed text.
//!
//! Speech recognizers often return digits and arithmetic symbols
//! (`"12 + 3 × 4"`) instead of words. This module rewrites such mixed text
//! into the word forms the tokenizer understands.

use logos::Logos;
use tracing::debug;

use crate::{util::num::u64_to_f64_checked, words::to_words};

/// Represents one lexical unit of mixed transcribed text.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Symbol {
    /// A digit run; commas between digits are thousands separators.
    #[regex(r"[0-9]+(,[0-9]+)*")]
    Digits,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*` or `×`
    #[token("*")]
    #[token("×")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// A word, including hyphenated compounds such as `seventy-one`.
    #[regex(r"[a-zA-Z]+(-[a-zA-Z]+)*")]
    Word,
    /// Whitespace.
    #[regex(r"[ \t\n\f\r]+")]
    Space,
}

impl Symbol {
    /// Returns the words an operator symbol is spoken as.
    #[must_use]
    pub const fn operator_words(self) -> Option<&'static str> {
        match self {
            Self::Plus => Some("plus"),
            Self::Minus => Some("minus"),
            Self::Multiply => Some("multiply by"),
            Self::Divide => Some("divide by"),
            Self::Digits | Self::Word | Self::Space => None,
        }
    }
}

/// Rewrites digits and operator symbols in mixed text as words.
///
/// Digit runs are spelled with the words converter; a run that is zero or too
/// large to spell is copied unchanged. Operator symbols become their spoken
/// form. Everything else is copied verbatim, with runs of whitespace reduced
/// to a single space.
///
/// # Parameters
/// - `mixed`: Transcribed text that may contain digits and symbols.
///
/// # Returns
/// The rewritten, trimmed text.
///
/// # Example
/// ```
/// use wordcalc::symbols::to_word_text;
///
/// assert_eq!(to_word_text("12 + 3×4"), "twelve plus three multiply by four");
/// assert_eq!(to_word_text("1,024/seventy-one"), "one thousand twenty-four divide by seventy-one");
/// ```
#[must_use]
pub fn to_word_text(mixed: &str) -> String {
    let mut lexer = Symbol::lexer(mixed);
    let mut result = String::new();

    while let Some(token) = lexer.next() {
        let slice = lexer.slice();
        match token {
            Ok(Symbol::Digits) => match spell_digits(slice) {
                Some(words) => push_spaced(&mut result, &words),
                None => result.push_str(slice),
            },
            Ok(Symbol::Space) => {
                if !result.is_empty() && !result.ends_with(' ') {
                    result.push(' ');
                }
            },
            Ok(symbol) => match symbol.operator_words() {
                Some(words) => push_spaced(&mut result, words),
                None => result.push_str(slice),
            },
            Err(()) => result.push_str(slice),
        }
    }

    let converted = result.trim().to_string();
    debug!(mixed, %converted, "substituted symbols");
    converted
}

fn spell_digits(run: &str) -> Option<String> {
    let digits: String = run.chars().filter(char::is_ascii_digit).collect();
    let value = digits.parse::<u64>().ok()?;
    let words = u64_to_f64_checked(value).and_then(to_words).ok()?;
    (!words.is_empty()).then_some(words)
}

fn push_spaced(result: &mut String, words: &str) {
    if !result.is_empty() && !result.ends_with(' ') {
        result.push(' ');
    }
    result.push_str(words);
    result.push(' ');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_are_spelled() {
        assert_eq!(to_word_text("5+6-7*8/2"),
                   "five plus six minus seven multiply by eight divide by two");
    }

    #[test]
    fn words_pass_through() {
        assert_eq!(to_word_text("one plus  two"), "one plus two");
        assert_eq!(to_word_text("seventy-one minus 1"), "seventy-one minus one");
    }

    #[test]
    fn thousands_separators_are_ignored() {
        assert_eq!(to_word_text("11,242,043"),
                   "eleven million two hundred forty-two thousand forty-three");
    }

    #[test]
    fn trailing_comma_is_kept() {
        assert_eq!(to_word_text("12, 13"), "twelve , thirteen");
    }

    #[test]
    fn unspellable_runs_are_copied() {
        assert_eq!(to_word_text("0 plus 3"), "0 plus three");
        assert_eq!(to_word_text("99999999999999999999"), "99999999999999999999");
    }

    #[test]
    fn other_characters_are_copied() {
        assert_eq!(to_word_text("2 = 2"), "two = two");
    }
}
