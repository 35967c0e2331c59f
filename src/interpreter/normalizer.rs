/// Normalizes raw text into lowercase words separated by single spaces.
///
/// Hyphenated compounds are split (`seventy-one` becomes `seventy one`) and
/// sentence punctuation a transcriber tends to leave behind (`. , ; : ! ?`) is
/// treated as a separator.
///
/// # Parameters
/// - `text`: Raw input text.
///
/// # Returns
/// The normalized text; empty if the input has no words.
///
/// # Example
/// ```
/// use wordcalc::interpreter::normalizer::normalize;
///
/// assert_eq!(normalize("  Fifty-Six   minus\ttwo. "), "fifty six minus two");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || is_separator(c))
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

const fn is_separator(c: char) -> bool {
    matches!(c, '-' | '.' | ',' | ';' | ':' | '!' | '?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("one \n\n plus\t\ttwo"), "one plus two");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn splits_hyphenated_compounds() {
        assert_eq!(normalize("Twenty-Four"), "twenty four");
        assert_eq!(normalize("seventy--one"), "seventy one");
    }
}
