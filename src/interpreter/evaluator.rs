use std::ops::RangeInclusive;

use tracing::{debug, warn};

use crate::{
    error::Diagnostic,
    item::{ArithmeticItem, Level},
};

/// The fold result of one run of same-level operators.
///
/// `range` covers the run's left operand through its right operand in the
/// sequence the run was found in; `value` replaces that whole range.
#[derive(Debug, Clone, PartialEq)]
pub struct ReductionSpan {
    /// Inclusive item range collapsed by the run.
    pub range: RangeInclusive<usize>,
    /// The folded value.
    pub value: f64,
}

/// Result of evaluating an item sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The final value; `0` for an empty sequence.
    pub value:       f64,
    /// Operators that had to fall back to an identity operand.
    pub diagnostics: Vec<Diagnostic>,
}

/// Returns the indices of all operators belonging to `level`, in order.
///
/// # Example
/// ```
/// use wordcalc::{
///     interpreter::evaluator::collect_operator_indices,
///     item::{ArithmeticItem::*, Level, OperatorKind::*},
/// };
///
/// let items = [Value(1.0), Operator(Plus), Value(2.0), Operator(Multiply), Value(3.0)];
/// assert_eq!(collect_operator_indices(&items, Level::Multiplicative), vec![3]);
/// assert_eq!(collect_operator_indices(&items, Level::Additive), vec![1]);
/// ```
#[must_use]
pub fn collect_operator_indices(items: &[ArithmeticItem], level: Level) -> Vec<usize> {
    items.iter()
         .enumerate()
         .filter(|(_, item)| item.operator().is_some_and(|op| op.level() == level))
         .map(|(index, _)| index)
         .collect()
}

/// Folds every run of `level` operators into a reduction span.
///
/// A run is a maximal sequence of operator indices exactly two apart, i.e.
/// separated by a single value. Each run is folded strictly left to right,
/// starting from the value just before its first operator.
///
/// # Parameters
/// - `items`: The item sequence.
/// - `level`: The precedence level to fold.
/// - `diagnostics`: Receives a [`Diagnostic::MissingOperand`] for every
///   operator without a neighbouring value.
///
/// # Returns
/// One span per run, in sequence order.
pub fn reduce_level(items: &[ArithmeticItem],
                    level: Level,
                    diagnostics: &mut Vec<Diagnostic>)
                    -> Vec<ReductionSpan> {
    let indices = collect_operator_indices(items, level);

    let mut spans = Vec::new();
    let mut run_start = 0;

    while run_start < indices.len() {
        let mut run_end = run_start + 1;
        while run_end < indices.len() && indices[run_end] - indices[run_end - 1] == 2 {
            run_end += 1;
        }
        spans.push(fold_run(items, &indices[run_start..run_end], level, diagnostics));
        run_start = run_end;
    }

    spans
}

fn fold_run(items: &[ArithmeticItem],
            run: &[usize],
            level: Level,
            diagnostics: &mut Vec<Diagnostic>)
            -> ReductionSpan {
    let first = run[0];
    let last = run[run.len() - 1];

    let left = first.checked_sub(1).and_then(|i| items[i].value());
    let start = if left.is_some() { first - 1 } else { first };
    let mut acc = operand(left, first, level, diagnostics);

    let mut end = last;
    for &index in run {
        let right = items.get(index + 1).and_then(ArithmeticItem::value);
        if right.is_some() {
            end = end.max(index + 1);
        }
        let right = operand(right, index, level, diagnostics);

        if let Some(op) = items[index].operator() {
            acc = op.apply(acc, right);
        }
    }

    debug!(start, end, value = acc, ?level, "reduced run");
    ReductionSpan { range: start..=end,
                    value: acc, }
}

fn operand(value: Option<f64>, index: usize, level: Level, diagnostics: &mut Vec<Diagnostic>) -> f64 {
    value.unwrap_or_else(|| {
             warn!(index, "operator is missing an operand");
             diagnostics.push(Diagnostic::MissingOperand { index });
             level.identity()
         })
}

/// Rebuilds a sequence with every span replaced by a single value.
///
/// Items outside the spans are copied verbatim.
///
/// # Example
/// ```
/// use wordcalc::{
///     interpreter::evaluator::{ReductionSpan, splice},
///     item::{ArithmeticItem::*, OperatorKind::*},
/// };
///
/// let items = [Value(1.0), Operator(Plus), Value(2.0), Operator(Multiply), Value(3.0)];
/// let spans = [ReductionSpan { range: 2..=4,
///                              value: 6.0, }];
/// assert_eq!(splice(&items, &spans), vec![Value(1.0), Operator(Plus), Value(6.0)]);
/// ```
#[must_use]
pub fn splice(items: &[ArithmeticItem], spans: &[ReductionSpan]) -> Vec<ArithmeticItem> {
    let mut spliced = Vec::with_capacity(items.len());
    let mut copied_up_to = 0;

    for span in spans {
        spliced.extend_from_slice(&items[copied_up_to..*span.range.start()]);
        spliced.push(ArithmeticItem::Value(span.value));
        copied_up_to = span.range.end() + 1;
    }
    spliced.extend_from_slice(&items[copied_up_to.min(items.len())..]);

    spliced
}

/// Evaluates an item sequence into a single value.
///
/// Multiplicative runs are folded and spliced back first, then the same
/// procedure runs over the additive operators of the rewritten sequence.
/// Within a level, operators associate strictly left to right.
///
/// # Parameters
/// - `items`: A sequence alternating values and operators.
///
/// # Returns
/// The final value (`0` for an empty sequence) and any diagnostics.
///
/// # Example
/// ```
/// use wordcalc::{
///     interpreter::evaluator::evaluate,
///     item::{ArithmeticItem::*, OperatorKind::*},
/// };
///
/// // 3 - 1 * 4
/// let items = [Value(3.0), Operator(Minus), Value(1.0), Operator(Multiply), Value(4.0)];
/// assert_eq!(evaluate(&items).value, -1.0);
/// ```
#[must_use]
pub fn evaluate(items: &[ArithmeticItem]) -> Evaluation {
    let mut diagnostics = Vec::new();

    let spans = reduce_level(items, Level::Multiplicative, &mut diagnostics);
    let additive = splice(items, &spans);

    let spans = reduce_level(&additive, Level::Additive, &mut diagnostics);
    let reduced = splice(&additive, &spans);

    if reduced.len() > 1 {
        debug!(?reduced, "sequence did not reduce to a single value");
    }

    let value = reduced.first().and_then(ArithmeticItem::value).unwrap_or(0.0);
    Evaluation { value, diagnostics }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{
        ArithmeticItem::{Operator, Value},
        OperatorKind::{Divide, Minus, Multiply, Plus},
    };

    #[test]
    fn empty_sequence_is_zero() {
        assert_eq!(evaluate(&[]).value, 0.0);
    }

    #[test]
    fn lone_value() {
        assert_eq!(evaluate(&[Value(42.0)]).value, 42.0);
    }

    #[test]
    fn multiplicative_runs_become_spans() {
        // 56 - 2 * 40 * 5 + 6 - 7
        let items = [Value(56.0),
                     Operator(Minus),
                     Value(2.0),
                     Operator(Multiply),
                     Value(40.0),
                     Operator(Multiply),
                     Value(5.0),
                     Operator(Plus),
                     Value(6.0),
                     Operator(Minus),
                     Value(7.0)];
        let mut diagnostics = Vec::new();
        let spans = reduce_level(&items, Level::Multiplicative, &mut diagnostics);
        assert_eq!(spans,
                   vec![ReductionSpan { range: 2..=6,
                                        value: 400.0, }]);
        assert!(diagnostics.is_empty());

        let spliced = splice(&items, &spans);
        assert_eq!(spliced,
                   vec![Value(56.0),
                        Operator(Minus),
                        Value(400.0),
                        Operator(Plus),
                        Value(6.0),
                        Operator(Minus),
                        Value(7.0)]);
        assert_eq!(evaluate(&items).value, -345.0);
    }

    #[test]
    fn separate_runs_are_separate_spans() {
        // 2 * 3 + 4 / 2
        let items = [Value(2.0),
                     Operator(Multiply),
                     Value(3.0),
                     Operator(Plus),
                     Value(4.0),
                     Operator(Divide),
                     Value(2.0)];
        let mut diagnostics = Vec::new();
        let spans = reduce_level(&items, Level::Multiplicative, &mut diagnostics);
        assert_eq!(spans,
                   vec![ReductionSpan { range: 0..=2,
                                        value: 6.0, },
                        ReductionSpan { range: 4..=6,
                                        value: 2.0, }]);
        assert_eq!(evaluate(&items).value, 8.0);
    }

    #[test]
    fn left_to_right_within_a_level() {
        // 8 / 4 * 2 is (8 / 4) * 2, not 8 / (4 * 2)
        let items = [Value(8.0), Operator(Divide), Value(4.0), Operator(Multiply), Value(2.0)];
        assert_eq!(evaluate(&items).value, 4.0);

        // 10 - 5 - 3 is (10 - 5) - 3
        let items = [Value(10.0), Operator(Minus), Value(5.0), Operator(Minus), Value(3.0)];
        assert_eq!(evaluate(&items).value, 2.0);
    }

    #[test]
    fn division_by_zero_propagates() {
        let items = [Value(1.0), Operator(Divide), Value(0.0)];
        assert!(evaluate(&items).value.is_infinite());

        let items = [Value(0.0), Operator(Divide), Value(0.0)];
        assert!(evaluate(&items).value.is_nan());
    }

    #[test]
    fn missing_operands_fall_back_to_identity() {
        let items = [Operator(Multiply), Value(3.0)];
        let evaluation = evaluate(&items);
        assert_eq!(evaluation.value, 3.0);
        assert_eq!(evaluation.diagnostics, vec![Diagnostic::MissingOperand { index: 0 }]);

        let items = [Value(3.0), Operator(Plus)];
        let evaluation = evaluate(&items);
        assert_eq!(evaluation.value, 3.0);
        assert_eq!(evaluation.diagnostics, vec![Diagnostic::MissingOperand { index: 1 }]);
    }
}
