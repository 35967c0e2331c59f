use tracing::debug;

use crate::interpreter::lexer::Word;

/// Derives the multiplier boundary list for one analysis.
///
/// The list holds, in order, the multiplier scales that close a magnitude
/// group. Multipliers are scanned left to right while tracking a running
/// maximum: a multiplier strictly greater than the maximum joins the current
/// run and becomes the new maximum, anything else ends the run (the maximum is
/// recorded as a boundary) and starts a new one.
///
/// For `one hundred twenty three million four hundred fifty six thousand seven
/// hundred` the multipliers `100, 1e6, 100, 1e3, 100` yield `[1e6, 1e3, 100]`:
/// the first `hundred` is nested inside the `million` group, the last one
/// closes a group of its own.
///
/// # Parameters
/// - `words`: All classified words of the input.
///
/// # Returns
/// The ordered boundary scales.
///
/// # Example
/// ```
/// use wordcalc::interpreter::{boundaries::multiplier_boundaries, lexer::Word};
///
/// let words = [Word::Multiplier(1e2), Word::Multiplier(1e3), Word::Multiplier(1e2)];
/// assert_eq!(multiplier_boundaries(&words), vec![1e3, 1e2]);
/// ```
#[must_use]
pub fn multiplier_boundaries(words: &[Word]) -> Vec<f64> {
    let mut boundaries = Vec::new();
    let mut running_max = 0.0;

    for word in words {
        if let Word::Multiplier(scale) = *word {
            if scale <= running_max {
                boundaries.push(running_max);
            }
            running_max = scale;
        }
    }

    if running_max != 0.0 {
        boundaries.push(running_max);
    }

    debug!(?boundaries, "multiplier boundaries");
    boundaries
}
