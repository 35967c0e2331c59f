/// Immutable word tables shared by both directions.
///
/// Holds the cardinal words (one to ninety), the multiplier words (hundred to
/// trillion, singular and plural) and the connector words, together with the
/// forward and reverse lookups built on them.
pub mod tables;
/// The normalizer prepares raw text for lexing.
///
/// Lowercases the input, splits hyphenated compounds, drops sentence
/// punctuation and collapses whitespace so that every word is separated by a
/// single space.
pub mod normalizer;
/// The lexer classifies normalized words.
///
/// Each whitespace-delimited word becomes a cardinal, a multiplier, an
/// operator, a connector or an unknown word.
///
/// # Responsibilities
/// - Classifies every word against the operator, connector and number tables.
/// - Never fails: unrecognized input is classified as unknown.
pub mod lexer;
/// Derives which multiplier word closes each magnitude group.
pub mod boundaries;
/// The tokenizer aggregates words into arithmetic items.
///
/// Folds the classified words through an explicit accumulator that builds
/// multi-word numbers, tracks pending operators and signs, and emits a flat
/// sequence alternating values and operators.
///
/// # Responsibilities
/// - Aggregates cardinals and multipliers into numbers.
/// - Handles unary minus, doubled minus and `plus minus`.
/// - Drops meaningless leading and trailing operators.
/// - Reports unknown words as diagnostics.
pub mod tokenizer;
/// The evaluator folds an item sequence into one value.
///
/// Runs two passes over the flat sequence without building a tree:
/// multiplicative operators are folded and spliced back first, additive
/// operators second. Operators of one level associate left to right.
pub mod evaluator;
