/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between `u64` and `f64`
/// without risking silent data loss or rounding errors. Analysis results are
/// `f64`, while the words converter works on exact integers, so every crossing
/// between the two goes through these helpers.
pub mod num;
