use std::fs;

use walkdir::WalkDir;
use wordcalc::{
    Analyzer, analyze,
    error::Diagnostic,
    interpreter::{evaluator::evaluate, tokenizer::tokenize},
    item::{ArithmeticItem, OperatorKind},
    spell,
    symbols::to_word_text,
    words::to_words,
};

#[test]
fn scenario_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scenarios").into_iter()
                                       .filter_map(Result::ok)
                                       .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (input, expected) in extract_scenarios(&content) {
            count += 1;
            let value = analyze(&input).value;
            assert_eq!(value, expected, "Scenario '{input}' in {path:?} evaluated to {value}");
        }
    }

    assert!(count > 0, "No scenarios found in tests/scenarios");
}

fn extract_scenarios(content: &str) -> Vec<(String, f64)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.split_once("=>"))
           .map(|(input, expected)| {
               let expected = expected.trim()
                                      .parse()
                                      .unwrap_or_else(|e| panic!("Bad expected value in '{input}': {e}"));
               (input.trim().to_string(), expected)
           })
           .collect()
}

fn assert_value(src: &str, expected: f64) {
    let analysis = analyze(src);
    assert_eq!(analysis.value, expected, "'{src}' produced items {:?}", analysis.items);
}

#[test]
fn literal_scenarios() {
    assert_value("one plus two", 3.0);
    assert_value("two minus four", -2.0);
    assert_value("seventy one multiply by seventy two divide by twenty four", 213.0);
    assert_value("ten minus five minus three minus thirty three", -31.0);
    assert_value("fifty-six minus two multiply by forty multiply by five plus six minus seven",
                 -345.0);
}

#[test]
fn multiplicative_before_additive() {
    // a multiply b plus c
    assert_value("six multiply by seven plus three", 45.0);
    // a plus b multiply c
    assert_value("three plus six multiply by seven", 45.0);
    assert_value("twenty divide by four minus two multiply three", -1.0);
}

#[test]
fn sign_normalization() {
    assert_value("nine plus minus four", 5.0);
    assert_value("nine minus minus four", 13.0);
}

#[test]
fn double_minus_is_reported() {
    let analysis = analyze("minus minus two");
    assert_eq!(analysis.value, 2.0);
    assert_eq!(analysis.diagnostics, vec![Diagnostic::DoubleMinus { position: 1 }]);
}

#[test]
fn magnitude_grouping() {
    assert_value("one hundred twenty three million four hundred fifty six thousand seven hundred \
                  eighty nine",
                 123_456_789.0);
}

#[test]
fn degenerate_input_is_zero() {
    assert_value("", 0.0);
    assert_value("and and by", 0.0);
    assert_value("the quick brown fox", 0.0);
    assert_value("plus minus multiply divide", 0.0);
}

#[test]
fn unknown_words_are_skipped_and_reported() {
    let analysis = analyze("four apples plus two");
    assert_eq!(analysis.value, 6.0);
    assert_eq!(analysis.diagnostics,
               vec![Diagnostic::UnrecognizedWord { word:     "apples".to_string(),
                                                   position: 1, }]);
}

#[test]
fn items_alternate_values_and_operators() {
    for src in ["plus one plus two minus",
                "minus three multiply by minus four divide",
                "one hundred and five plus plus six"]
    {
        let items = tokenize(src).items;
        assert!(!items.is_empty());
        for (index, item) in items.iter().enumerate() {
            match item {
                ArithmeticItem::Value(_) => assert_eq!(index % 2, 0, "{src}: {items:?}"),
                ArithmeticItem::Operator(_) => assert_eq!(index % 2, 1, "{src}: {items:?}"),
            }
        }
        assert!(matches!(items.last(), Some(ArithmeticItem::Value(_))));
    }
}

#[test]
fn analyzer_instances_are_independent() {
    let first = Analyzer::new("ONE plus TWO");
    let second = Analyzer::new("three multiply by three");
    assert_eq!(first.text(), "one plus two");
    assert_eq!(second.analyze().value, 9.0);
    assert_eq!(first.analyze().value, 3.0);
    assert_eq!(first.tokenize().items,
               vec![ArithmeticItem::Value(1.0),
                    ArithmeticItem::Operator(OperatorKind::Plus),
                    ArithmeticItem::Value(2.0)]);
}

#[test]
fn analyzers_run_on_separate_threads() {
    let handles: Vec<_> = (1..=8_u32).map(|n| {
                                         std::thread::spawn(move || {
                                             let words = to_words(f64::from(n)).unwrap();
                                             analyze(&format!("{words} multiply by {words}")).value
                                         })
                                     })
                                     .collect();

    for (n, handle) in (1..=8_u32).zip(handles) {
        assert_eq!(handle.join().unwrap(), f64::from(n * n));
    }
}

/// Deterministic xorshift so the sample is the same on every run.
fn sample_integers(count: usize) -> Vec<u64> {
    let mut state = 0x2545_f491_4f6c_dd1d_u64;
    let mut values = vec![1, 9, 10, 11, 19, 20, 21, 99, 100, 101, 110, 999, 1_000, 1_001,
                          10_000, 100_000, 100_100, 1_000_000, 1_000_100, 1_100_000,
                          100_100_100, 999_999_999_999_999];
    while values.len() < count {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        // Below a thousand trillion, where the spelling never nests a group
        // under trillion.
        values.push(state % 1_000_000_000_000_000);
    }
    values
}

#[test]
#[allow(clippy::cast_precision_loss)]
fn spelled_numbers_evaluate_back() {
    for n in sample_integers(500) {
        let value = n as f64;
        let words = to_words(value).unwrap();
        if n == 0 {
            assert!(words.is_empty());
            continue;
        }
        let evaluated = evaluate(&tokenize(&words).items).value;
        assert_eq!(evaluated, value, "{n} was spelled '{words}'");
    }
}

#[test]
fn negative_results_spell_back() {
    let analysis = analyze("two minus four hundred");
    let words = spell(analysis.value).unwrap();
    assert_eq!(words, "minus three hundred ninety-eight");
    assert_eq!(analyze(&words).value, -398.0);
}

#[test]
fn mixed_transcription_text() {
    assert_eq!(analyze(&to_word_text("12 + 3 × 4")).value, 24.0);
    assert_eq!(analyze(&to_word_text("1,000,000 / 8 - 25")).value, 124_975.0);
    assert_eq!(analyze(&to_word_text("seventy-one * 3")).value, 213.0);
}

#[test]
fn fractional_values_have_no_spelling() {
    assert!(spell(analyze("one divide by four").value).is_err());
}
