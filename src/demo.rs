//! Demonstration harness: evaluates a list of sample inputs and renders
//! one `"<input> -> <output>"` line per input.

use colored::*;

use crate::models::Evaluation;
use crate::odd::next_odd;

/// Sample inputs evaluated when no values are given.
pub const DEMO_INPUTS: [f64; 5] = [3.0, 4.0, 0.0, -1.0, 2.9];

/// Evaluate numeric inputs, rendering each in shortest form (`3`, `2.9`).
pub fn run_demo(inputs: &[f64]) -> Vec<Evaluation> {
    inputs
        .iter()
        .map(|&n| Evaluation::from_result(n.to_string(), next_odd(n)))
        .collect()
}

/// Plain `"<input> -> <output>"` line.
pub fn format_line(evaluation: &Evaluation) -> String {
    match (&evaluation.output, &evaluation.error) {
        (Some(output), _) => format!("{} -> {}", evaluation.input, output),
        (None, Some(error)) => format!("{} -> {}", evaluation.input, error),
        (None, None) => format!("{} -> ?", evaluation.input),
    }
}

/// Same line as [`format_line`] with terminal colors.
pub fn format_line_colored(evaluation: &Evaluation) -> String {
    match (&evaluation.output, &evaluation.error) {
        (Some(output), _) => format!(
            "{} {} {}",
            evaluation.input.bold(),
            "->".dimmed(),
            output.to_string().green()
        ),
        (None, Some(error)) => format!(
            "{} {} {}",
            evaluation.input.bold(),
            "->".dimmed(),
            error.red()
        ),
        (None, None) => format!("{} {} ?", evaluation.input.bold(), "->".dimmed()),
    }
}
