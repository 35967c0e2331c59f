#[derive(Debug, Clone, Copy, PartialEq)]
/// Represents all reasons a value cannot be spelled out in words.
pub enum WordsError {
    /// The value has a fractional part. Only whole numbers have a spelling.
    Fractional {
        /// The rejected value.
        value: f64,
    },
    /// The value is below zero.
    Negative {
        /// The rejected value.
        value: f64,
    },
    /// The value is infinite or NaN, e.g. after a division by zero.
    NonFinite {
        /// The rejected value.
        value: f64,
    },
    /// The value is too large to be represented exactly as an `f64` integer.
    TooLarge {
        /// The rejected value.
        value: f64,
    },
}

impl std::fmt::Display for WordsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fractional { value } => {
                write!(f, "Cannot spell {value}: only whole numbers are supported.")
            },
            Self::Negative { value } => {
                write!(f, "Cannot spell {value}: value is negative.")
            },
            Self::NonFinite { value } => {
                write!(f, "Cannot spell {value}: value is not finite.")
            },
            Self::TooLarge { value } => write!(f,
                                               "Cannot spell {value}: value is too large to be represented exactly."),
        }
    }
}

impl std::error::Error for WordsError {}
