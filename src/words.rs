use crate::{
    error::WordsError,
    interpreter::tables::{cardinal_word, multiplier_word},
    util::num::f64_to_u64_checked,
};

/// Powers of ten a number is split at, largest first.
///
/// `12`, `9`, `6` and `3` carry the trillion, billion, million and thousand
/// words, `2` carries `hundred`, `0` is the trailing tens and ones.
const GROUP_POWERS: [u32; 6] = [12, 9, 6, 3, 2, 0];

/// Spells a non-negative whole number in English words.
///
/// Zero has no digit groups and renders as an empty string; callers that need
/// a literal `zero` have to special-case it.
///
/// # Errors
/// Returns a [`WordsError`] if the value is fractional, negative, not finite,
/// or too large to be an exact `f64` integer.
///
/// # Example
/// ```
/// use wordcalc::{error::WordsError, words::to_words};
///
/// assert_eq!(to_words(624.0).unwrap(), "six hundred twenty-four");
/// assert_eq!(to_words(11_242_043.0).unwrap(),
///            "eleven million two hundred forty-two thousand forty-three");
/// assert_eq!(to_words(0.0).unwrap(), "");
/// assert_eq!(to_words(1.5), Err(WordsError::Fractional { value: 1.5 }));
/// ```
pub fn to_words(value: f64) -> Result<String, WordsError> {
    let integer = f64_to_u64_checked(value)?;
    Ok(render(integer))
}

/// Spells a whole number, prefixing negative values with `minus`.
///
/// The output reads back through the tokenizer as the same value.
///
/// # Errors
/// Same as [`to_words`], except that negative values are accepted.
///
/// # Example
/// ```
/// use wordcalc::words::to_signed_words;
///
/// assert_eq!(to_signed_words(-345.0).unwrap(), "minus three hundred forty-five");
/// assert_eq!(to_signed_words(7.0).unwrap(), "seven");
/// ```
pub fn to_signed_words(value: f64) -> Result<String, WordsError> {
    if value < 0.0 {
        return to_words(-value).map(|words| format!("minus {words}"))
                                .map_err(|e| with_value(e, value));
    }
    to_words(value)
}

/// Restores the caller's value in an error raised for its magnitude.
const fn with_value(error: WordsError, value: f64) -> WordsError {
    match error {
        WordsError::Fractional { .. } => WordsError::Fractional { value },
        WordsError::Negative { .. } => WordsError::Negative { value },
        WordsError::NonFinite { .. } => WordsError::NonFinite { value },
        WordsError::TooLarge { .. } => WordsError::TooLarge { value },
    }
}

fn render(value: u64) -> String {
    let mut remaining = value;
    let mut result = String::new();
    let mut phrase = String::new();

    for power in GROUP_POWERS {
        let Some(magnitude) = remaining.checked_ilog10() else {
            break;
        };
        if power > magnitude {
            continue;
        }

        let divider = 10_u64.pow(power);
        let group = remaining / divider;

        phrase = if group < 100 { render_below_hundred(group) } else { render(group) };

        if group != 0
           && let Some(word) = multiplier_word(divider)
        {
            phrase.push(' ');
            phrase.push_str(word);
            push_phrase(&mut result, &phrase);
            phrase.clear();
        }

        remaining -= group * divider;
    }

    if !phrase.is_empty() {
        push_phrase(&mut result, &phrase);
    }

    result
}

/// Renders `1..=99` from the cardinal table, composing `tens-ones` for the
/// values the table does not list. A value the table cannot express renders
/// as an empty string.
fn render_below_hundred(value: u64) -> String {
    if let Some(word) = cardinal_word(value) {
        return word.to_string();
    }
    if value > 20 {
        let tens = cardinal_word(value / 10 * 10);
        let ones = cardinal_word(value % 10);
        if let (Some(tens), Some(ones)) = (tens, ones) {
            return format!("{tens}-{ones}");
        }
    }
    String::new()
}

fn push_phrase(result: &mut String, phrase: &str) {
    if !result.is_empty() {
        result.push(' ');
    }
    result.push_str(phrase);
}
