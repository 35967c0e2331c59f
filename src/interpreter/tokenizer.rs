use tracing::{debug, trace, warn};

use crate::{
    error::Diagnostic,
    interpreter::{
        boundaries::multiplier_boundaries,
        lexer::{Word, lex},
        normalizer::normalize,
    },
    item::{ArithmeticItem, OperatorKind},
};

/// Result of tokenizing one sentence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tokenized {
    /// Alternating values and operators, starting and ending with a value.
    pub items:       Vec<ArithmeticItem>,
    /// Words that were skipped or normalized along the way.
    pub diagnostics: Vec<Diagnostic>,
}

/// State threaded through the left-to-right scan of the words.
///
/// Every transition of the tokenizer is a method on this value, so the state
/// machine can be driven word by word in isolation. A number is built from
/// two parts: `total` holds the magnitude groups that have already been
/// closed by a boundary multiplier, `partial` holds the group being built.
#[derive(Debug, Clone)]
pub struct Accumulator {
    items:            Vec<ArithmeticItem>,
    diagnostics:      Vec<Diagnostic>,
    boundaries:       Vec<f64>,
    boundary:         usize,
    accumulating:     bool,
    partial:          Option<f64>,
    total:            Option<f64>,
    pending:          Option<OperatorKind>,
    minus_run:        usize,
    sign_is_positive: bool,
}

impl Accumulator {
    /// Creates an accumulator for one analysis.
    ///
    /// # Parameters
    /// - `boundaries`: The multiplier boundary list of the whole input, see
    ///   [`multiplier_boundaries`].
    #[must_use]
    pub const fn new(boundaries: Vec<f64>) -> Self {
        Self { items: Vec::new(),
               diagnostics: Vec::new(),
               boundaries,
               boundary: 0,
               accumulating: false,
               partial: None,
               total: None,
               pending: None,
               minus_run: 0,
               sign_is_positive: true }
    }

    /// Feeds one classified word into the accumulator.
    ///
    /// # Parameters
    /// - `position`: Zero-based index of the word, used in diagnostics.
    /// - `word`: The classified word.
    /// - `slice`: The word's text.
    ///
    /// # Returns
    /// The updated accumulator.
    #[must_use]
    pub fn step(mut self, position: usize, word: Word, slice: &str) -> Self {
        trace!(position, ?word, partial = ?self.partial, total = ?self.total, "tokenizer step");

        match word {
            Word::Cardinal(value) => self.push_digit(value),
            Word::Multiplier(scale) => self.push_multiplier(scale),
            Word::Operator(op) => self.push_operator(op, position),
            // `Ignored` is skipped by the lexer and never produced.
            Word::Connector | Word::Ignored => {},
            Word::Unknown => {
                warn!(word = slice, position, "unsupported word skipped");
                self.diagnostics
                    .push(Diagnostic::UnrecognizedWord { word: slice.to_string(),
                                                         position });
            },
        }
        self
    }

    /// Closes the scan and returns the item sequence.
    ///
    /// A number still being built is emitted. An operator still waiting for
    /// its right-hand value is dropped.
    #[must_use]
    pub fn finish(mut self) -> Tokenized {
        if self.accumulating {
            self.close_number();
        } else if let Some(op) = self.pending.take() {
            debug!(%op, "dropping trailing operator");
        }

        debug!(items = ?self.items, "tokenized");
        Tokenized { items:       self.items,
                    diagnostics: self.diagnostics, }
    }

    fn start_number(&mut self) {
        if let Some(op) = self.pending.take()
           && !self.items.is_empty()
        {
            self.items.push(op.into());
        }
        self.accumulating = true;
        self.partial = None;
        self.total = None;
        self.minus_run = 0;
    }

    fn push_digit(&mut self, value: f64) {
        if self.accumulating {
            self.partial = Some(self.partial.unwrap_or(0.0) + value);
        } else {
            self.start_number();
            self.partial = Some(value);
        }
    }

    #[allow(clippy::float_cmp)]
    fn push_multiplier(&mut self, scale: f64) {
        if !self.accumulating {
            self.start_number();
        }

        // A bare multiplier applies to an implicit one.
        let grouped = self.partial.map_or(scale, |p| p * scale);

        let closes_group = self.boundaries
                               .get(self.boundary)
                               .is_none_or(|boundary| *boundary == scale);

        if closes_group {
            if self.boundary < self.boundaries.len() {
                self.boundary += 1;
            }
            self.total = Some(self.total.unwrap_or(0.0) + grouped);
            self.partial = None;
        } else {
            self.partial = Some(grouped);
        }
    }

    fn push_operator(&mut self, op: OperatorKind, position: usize) {
        if self.accumulating {
            self.close_number();
            self.pending = Some(op);
            return;
        }

        match op {
            OperatorKind::Minus if self.minus_run == 0 => {
                self.sign_is_positive = false;
                self.minus_run = 1;
                // A leading minus is a sign, not a subtraction from nothing.
                if self.pending.is_none() {
                    self.pending = Some(OperatorKind::Plus);
                }
            },
            OperatorKind::Minus => {
                warn!(position, "double minus detected");
                self.diagnostics.push(Diagnostic::DoubleMinus { position });
                self.sign_is_positive = true;
                self.minus_run = 0;
            },
            OperatorKind::Plus if !self.sign_is_positive => {
                self.pending = Some(OperatorKind::Minus);
                self.sign_is_positive = true;
                self.minus_run = 0;
            },
            _ => {
                self.pending = Some(op);
                self.minus_run = 0;
            },
        }
    }

    fn close_number(&mut self) {
        let mut value = self.total.unwrap_or(0.0) + self.partial.unwrap_or(0.0);
        if !self.sign_is_positive {
            value = -value;
        }

        self.items.push(value.into());
        self.accumulating = false;
        self.partial = None;
        self.total = None;
        self.minus_run = 0;
        self.sign_is_positive = true;
    }
}

/// Tokenizes a sentence into arithmetic items.
///
/// The text is normalized, every word is classified, the multiplier boundary
/// list is derived, and the words are folded through an [`Accumulator`].
///
/// # Parameters
/// - `text`: Raw input text.
///
/// # Returns
/// The item sequence and any diagnostics.
///
/// # Example
/// ```
/// use wordcalc::{
///     interpreter::tokenizer::tokenize,
///     item::{ArithmeticItem, OperatorKind},
/// };
///
/// let tokenized = tokenize("two multiply by twenty-three");
/// assert_eq!(tokenized.items,
///            vec![ArithmeticItem::Value(2.0),
///                 ArithmeticItem::Operator(OperatorKind::Multiply),
///                 ArithmeticItem::Value(23.0)]);
/// assert!(tokenized.diagnostics.is_empty());
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Tokenized {
    let normalized = normalize(text);
    let words = lex(&normalized);

    let kinds: Vec<Word> = words.iter().map(|(word, _)| *word).collect();
    let boundaries = multiplier_boundaries(&kinds);

    words.into_iter()
         .enumerate()
         .fold(Accumulator::new(boundaries), |acc, (position, (word, slice))| {
             acc.step(position, word, slice)
         })
         .finish()
}
