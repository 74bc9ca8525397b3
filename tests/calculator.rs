//! Integration tests for the calculator's core contract.
//!
//! Covers the arithmetic table, determinism, memoization behavior, and the
//! explicit failure for unsupported operation tokens.

use std::sync::Arc;

use layered_calc::infrastructure::mocks::CountingEvaluator;
use layered_calc::{
    ArithmeticEngine, CalculationRequest, EvalError, Evaluator, LayeredCalculator,
    MemoizedEvaluator, Metrics, OperationKind, SharedCache,
};

fn quiet() -> LayeredCalculator {
    LayeredCalculator::builder()
        .with_tracing_emission(false)
        .build()
}

#[test]
fn test_arithmetic_table() {
    let calc = quiet();

    assert_eq!(calc.calculate(2.0, 3.0, "add").unwrap(), 5.0);
    assert_eq!(calc.calculate(10.0, 4.0, "sub").unwrap(), 6.0);
    assert_eq!(calc.calculate(6.0, 7.0, "multiply").unwrap(), 42.0);
    assert_eq!(calc.calculate(10.0, 4.0, "divide").unwrap(), 2.5);
}

#[test]
fn test_operation_tokens_are_case_insensitive_with_aliases() {
    let calc = quiet();

    assert_eq!(calc.calculate(10.0, 4.0, "SUB").unwrap(), 6.0);
    assert_eq!(calc.calculate(10.0, 4.0, "subtract").unwrap(), 6.0);
    assert_eq!(calc.calculate(2.0, 3.0, "Add").unwrap(), 5.0);
}

#[test]
fn test_unknown_operation_fails_explicitly() {
    let calc = quiet();

    let err = calc.calculate(1.0, 1.0, "unknown").unwrap_err();
    assert_eq!(err, EvalError::UnsupportedOperation("unknown".to_string()));
    assert_eq!(err.to_string(), "unsupported operation kind: unknown");
}

#[test]
fn test_evaluation_is_deterministic() {
    let calc = quiet();

    let first = calc.calculate(10.0, 3.0, "divide").unwrap();
    for _ in 0..10 {
        assert_eq!(calc.calculate(10.0, 3.0, "divide").unwrap(), first);
    }
}

#[test]
fn test_repeated_request_reaches_the_base_once() {
    // Observe the base calculator directly through a counting wrapper.
    let counting = Arc::new(CountingEvaluator::new(ArithmeticEngine::new()));
    let memo = MemoizedEvaluator::new(Arc::clone(&counting), SharedCache::new(), Metrics::new());

    let request = CalculationRequest::new(10.0, 10.0, OperationKind::Add);
    assert_eq!(memo.evaluate(request).unwrap(), 20.0);
    assert_eq!(memo.evaluate(request).unwrap(), 20.0);
    assert_eq!(memo.evaluate(request).unwrap(), 20.0);

    assert_eq!(
        counting.calls(),
        1,
        "repeated requests should be answered from the cache"
    );
}

#[test]
fn test_subtraction_is_not_commutative_in_the_cache() {
    let calc = quiet();

    assert_eq!(calc.calculate(10.0, 4.0, "sub").unwrap(), 6.0);
    assert_eq!(calc.calculate(4.0, 10.0, "sub").unwrap(), -6.0);

    // Both orders were computed; neither was served from the other's entry.
    assert_eq!(calc.metrics().cache_misses(), 2);
    assert_eq!(calc.metrics().cache_hits(), 0);
    assert_eq!(calc.cached_results(), 2);
}

#[test]
fn test_division_by_zero_is_a_value_not_an_error() {
    let calc = quiet();

    assert_eq!(calc.calculate(1.0, 0.0, "divide").unwrap(), f64::INFINITY);
    assert_eq!(
        calc.calculate(-1.0, 0.0, "divide").unwrap(),
        f64::NEG_INFINITY
    );
    assert!(calc.calculate(0.0, 0.0, "divide").unwrap().is_nan());
}

#[test]
fn test_metrics_through_the_full_stack() {
    let calc = quiet();

    calc.add(1.0, 2.0).unwrap();
    calc.add(1.0, 2.0).unwrap();
    calc.multiply(3.0, 4.0).unwrap();
    assert!(calc.calculate(1.0, 1.0, "bogus").is_err());

    let snapshot = calc.metrics().snapshot();
    assert_eq!(snapshot.evaluations, 3);
    assert_eq!(snapshot.cache_misses, 2);
    assert_eq!(snapshot.cache_hits, 1);
    assert!((snapshot.hit_rate() - 1.0 / 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_calculators_are_independent() {
    let first = quiet();
    let second = quiet();

    first.add(1.0, 1.0).unwrap();

    assert_eq!(first.cached_results(), 1);
    assert_eq!(second.cached_results(), 0);
    assert_eq!(second.metrics().evaluations(), 0);
}

#[test]
fn test_calculator_is_usable_across_threads() {
    use std::thread;

    let calc = Arc::new(quiet());
    let mut handles = vec![];

    for _ in 0..4 {
        let calc = Arc::clone(&calc);
        handles.push(thread::spawn(move || {
            for i in 0..50 {
                let expected = f64::from(i) * 2.0;
                assert_eq!(calc.add(f64::from(i), f64::from(i)).unwrap(), expected);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // 50 distinct requests, evaluated 4 times each.
    assert_eq!(calc.metrics().evaluations(), 200);
    assert_eq!(calc.cached_results(), 50);
}
