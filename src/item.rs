use std::str::FromStr;

/// Represents an arithmetic operator spoken as a word.
///
/// Operators are split into two precedence levels, see [`Level`].
/// Multiplicative operators are always folded before additive ones.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperatorKind {
    /// Addition (`plus`)
    Plus,
    /// Subtraction (`minus`)
    Minus,
    /// Multiplication (`multiply`, `multiply by`)
    Multiply,
    /// Division (`divide`, `divide by`)
    Divide,
}

/// One of the two evaluation passes of the precedence evaluator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Level {
    /// `multiply` and `divide`.
    Multiplicative,
    /// `plus` and `minus`.
    Additive,
}

impl Level {
    /// Returns the value that leaves any operand of this level unchanged.
    ///
    /// Used as a stand-in operand when an operator is missing one of its
    /// neighbouring values.
    ///
    /// # Example
    /// ```
    /// use wordcalc::item::Level;
    ///
    /// assert_eq!(Level::Multiplicative.identity(), 1.0);
    /// assert_eq!(Level::Additive.identity(), 0.0);
    /// ```
    #[must_use]
    pub const fn identity(self) -> f64 {
        match self {
            Self::Multiplicative => 1.0,
            Self::Additive => 0.0,
        }
    }
}

impl OperatorKind {
    /// Returns the precedence level the operator belongs to.
    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::Multiply | Self::Divide => Level::Multiplicative,
            Self::Plus | Self::Minus => Level::Additive,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division by zero is not trapped: the usual floating-point infinity and
    /// NaN results propagate to the caller.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The result of `left <op> right`.
    ///
    /// # Example
    /// ```
    /// use wordcalc::item::OperatorKind;
    ///
    /// assert_eq!(OperatorKind::Minus.apply(2.0, 4.0), -2.0);
    /// assert!(OperatorKind::Divide.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Plus => left + right,
            Self::Minus => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }
}

/// Error returned when a word is not one of the operator words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator(pub String);

impl std::fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not an operator word.", self.0)
    }
}

impl std::error::Error for UnknownOperator {}

impl FromStr for OperatorKind {
    type Err = UnknownOperator;

    /// Parses an operator from its literal word form.
    ///
    /// Accepts the one-word forms as well as `multiply by` and `divide by`.
    ///
    /// # Example
    /// ```
    /// use wordcalc::item::OperatorKind;
    ///
    /// assert_eq!("divide by".parse::<OperatorKind>(), Ok(OperatorKind::Divide));
    /// assert!("times".parse::<OperatorKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plus" => Ok(Self::Plus),
            "minus" => Ok(Self::Minus),
            "multiply" | "multiply by" => Ok(Self::Multiply),
            "divide" | "divide by" => Ok(Self::Divide),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        };
        write!(f, "{word}")
    }
}

/// One element of a tokenized expression.
///
/// A well-formed sequence alternates `Value`, `Operator`, `Value`, ...,
/// `Value` and never starts or ends with an operator. Equality compares the
/// variant and its payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ArithmeticItem {
    /// An operator between two values.
    Operator(OperatorKind),
    /// A fully aggregated number.
    Value(f64),
}

impl ArithmeticItem {
    /// Returns the operator if this item is one.
    #[must_use]
    pub const fn operator(&self) -> Option<OperatorKind> {
        match self {
            Self::Operator(op) => Some(*op),
            Self::Value(_) => None,
        }
    }

    /// Returns the numeric payload if this item is a value.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Operator(_) => None,
        }
    }
}

impl From<f64> for ArithmeticItem {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl From<OperatorKind> for ArithmeticItem {
    fn from(op: OperatorKind) -> Self {
        Self::Operator(op)
    }
}

impl std::fmt::Display for ArithmeticItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operator(op) => write!(f, "{op}"),
            Self::Value(v) => write!(f, "{v}"),
        }
    }
}
