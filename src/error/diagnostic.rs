#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a recoverable problem noticed during analysis.
pub enum Diagnostic {
    /// A word that is neither a number, a multiplier, an operator nor a
    /// connector. It was skipped.
    UnrecognizedWord {
        /// The word as it appeared in the normalized input.
        word:     String,
        /// Zero-based index of the word in the normalized input.
        position: usize,
    },
    /// A second `minus` in a row cancelled the sign flip of the first one.
    DoubleMinus {
        /// Zero-based index of the cancelling word.
        position: usize,
    },
    /// An operator had no value next to it; the identity of its precedence
    /// level was used instead.
    MissingOperand {
        /// Index of the operator in the item sequence.
        index: usize,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedWord { word, position } => {
                write!(f, "Warning at word {position}: Unsupported word '{word}' was skipped.")
            },
            Self::DoubleMinus { position } => write!(f,
                                                     "Warning at word {position}: Double minus detected, sign reset to positive."),
            Self::MissingOperand { index } => write!(f,
                                                     "Warning at item {index}: Operator is missing an operand."),
        }
    }
}
