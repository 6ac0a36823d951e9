use next_odd::demo::{format_line, run_demo, DEMO_INPUTS};
use next_odd::{next_odd, next_odd_value, parse_number, EvaluationReport, NextOddError};
use serde_json::json;

#[test]
fn test_documented_scenarios() {
    assert_eq!(next_odd(3.0), Ok(5));
    assert_eq!(next_odd(4.0), Ok(5));
    assert_eq!(next_odd(0.0), Ok(1));
    assert_eq!(next_odd(-1.0), Ok(1));
    assert_eq!(next_odd(2.9), Ok(3));
}

#[test]
fn test_invalid_inputs() {
    let nan = next_odd(f64::NAN).unwrap_err();
    let inf = next_odd(f64::INFINITY).unwrap_err();
    let text = next_odd_value(&json!("not a number")).unwrap_err();

    for err in [nan, inf, text] {
        let NextOddError::InvalidArgument(message) = err;
        assert!(message.starts_with("input must be a finite number"));
    }
}

#[test]
fn test_textual_input_round() {
    let n = parse_number("-1.9").unwrap();
    assert_eq!(next_odd(n), Ok(1));
}

#[test]
fn test_demo_report() {
    let evaluations = run_demo(&DEMO_INPUTS);
    let lines: Vec<String> = evaluations.iter().map(format_line).collect();
    assert_eq!(lines.join("\n"), "3 -> 5\n4 -> 5\n0 -> 1\n-1 -> 1\n2.9 -> 3");

    let report = EvaluationReport::new(evaluations);
    assert_eq!(report.succeeded, 5);
    assert_eq!(report.failed, 0);
}

#[test]
fn test_concurrent_callers() {
    let handles: Vec<_> = (0..8)
        .map(|i| std::thread::spawn(move || next_odd(i as f64 + 0.5)))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let expected = if i % 2 == 0 { i as i64 + 1 } else { i as i64 + 2 };
        assert_eq!(handle.join().unwrap(), Ok(expected));
    }
}
