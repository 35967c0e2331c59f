//! Immutable number word tables.
//!
//! Both directions of the engine read from the same tables: the tokenizer maps
//! words to magnitudes, the words converter maps magnitudes back to words.

/// Basic cardinal words and their magnitudes.
///
/// Covers one to twenty and the round tens up to ninety. Every other number
/// below one hundred is composed from a tens word and a ones word.
pub const CARDINALS: &[(&str, f64)] = &[("one", 1.0),
                                        ("two", 2.0),
                                        ("three", 3.0),
                                        ("four", 4.0),
                                        ("five", 5.0),
                                        ("six", 6.0),
                                        ("seven", 7.0),
                                        ("eight", 8.0),
                                        ("nine", 9.0),
                                        ("ten", 10.0),
                                        ("eleven", 11.0),
                                        ("twelve", 12.0),
                                        ("thirteen", 13.0),
                                        ("fourteen", 14.0),
                                        ("fifteen", 15.0),
                                        ("sixteen", 16.0),
                                        ("seventeen", 17.0),
                                        ("eighteen", 18.0),
                                        ("nineteen", 19.0),
                                        ("twenty", 20.0),
                                        ("thirty", 30.0),
                                        ("forty", 40.0),
                                        ("fifty", 50.0),
                                        ("sixty", 60.0),
                                        ("seventy", 70.0),
                                        ("eighty", 80.0),
                                        ("ninety", 90.0)];

/// Multiplier words and the power-of-ten scale they stand for.
///
/// Singular forms come first; the reverse lookup only ever returns those.
pub const MULTIPLIERS: &[(&str, f64)] = &[("hundred", 1e2),
                                          ("thousand", 1e3),
                                          ("million", 1e6),
                                          ("billion", 1e9),
                                          ("trillion", 1e12),
                                          ("hundreds", 1e2),
                                          ("thousands", 1e3),
                                          ("millions", 1e6),
                                          ("billions", 1e9),
                                          ("trillions", 1e12)];

/// Words that only glue other words together (`one million and two`,
/// `multiply by three`).
pub const CONNECTORS: &[&str] = &["and", "by"];

/// Returns the magnitude of a cardinal word.
///
/// # Example
/// ```
/// use wordcalc::interpreter::tables::cardinal_value;
///
/// assert_eq!(cardinal_value("seventeen"), Some(17.0));
/// assert_eq!(cardinal_value("hundred"), None);
/// ```
#[must_use]
pub fn cardinal_value(word: &str) -> Option<f64> {
    CARDINALS.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

/// Returns the scale of a multiplier word, singular or plural.
///
/// # Example
/// ```
/// use wordcalc::interpreter::tables::multiplier_scale;
///
/// assert_eq!(multiplier_scale("millions"), Some(1e6));
/// assert_eq!(multiplier_scale("ten"), None);
/// ```
#[must_use]
pub fn multiplier_scale(word: &str) -> Option<f64> {
    MULTIPLIERS.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

/// Returns the cardinal word for a magnitude, if the table has one.
#[must_use]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::float_cmp)]
pub fn cardinal_word(value: u64) -> Option<&'static str> {
    CARDINALS.iter().find(|(_, v)| *v == value as f64).map(|(w, _)| *w)
}

/// Returns the singular multiplier word for a scale, if the table has one.
#[must_use]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::float_cmp)]
pub fn multiplier_word(scale: u64) -> Option<&'static str> {
    MULTIPLIERS.iter()
               .find(|(w, v)| *v == scale as f64 && !w.ends_with('s'))
               .map(|(w, _)| *w)
}

/// Returns `true` for connector words.
///
/// # Example
/// ```
/// use wordcalc::interpreter::tables::is_connector;
///
/// assert!(is_connector("by"));
/// assert!(!is_connector("plus"));
/// ```
#[must_use]
pub fn is_connector(word: &str) -> bool {
    CONNECTORS.contains(&word)
}
