/// Non-fatal analysis diagnostics.
///
/// Describes everything the tokenizer and evaluator skip over or normalize
/// while analysing a sentence: unrecognized words, doubled minus signs and
/// operators without an operand. Diagnostics never abort an analysis; they are
/// returned next to the result.
pub mod diagnostic;
/// Words converter errors.
///
/// Contains the errors raised when a value cannot be spelled out, such as
/// fractional, negative, non-finite or too large numbers.
pub mod words_error;

pub use diagnostic::Diagnostic;
pub use words_error::WordsError;
