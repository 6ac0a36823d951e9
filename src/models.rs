use serde::{Deserialize, Serialize};

use crate::errors::NextOddError;
use crate::odd::next_odd_str;

/// Outcome of evaluating one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Evaluation {
    pub fn from_result(input: impl Into<String>, result: Result<i64, NextOddError>) -> Self {
        let input = input.into();
        match result {
            Ok(output) => Evaluation {
                input,
                output: Some(output),
                error: None,
            },
            Err(e) => Evaluation {
                input,
                output: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.output.is_some()
    }
}

/// Evaluate textual input.
pub fn evaluate(input: &str) -> Evaluation {
    Evaluation::from_result(input.trim(), next_odd_str(input))
}

/// All evaluations of a run with their tallies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub evaluations: Vec<Evaluation>,
    pub succeeded: usize,
    pub failed: usize,
}

impl EvaluationReport {
    pub fn new(evaluations: Vec<Evaluation>) -> Self {
        let succeeded = evaluations.iter().filter(|e| e.is_ok()).count();
        let failed = evaluations.len() - succeeded;
        EvaluationReport {
            evaluations,
            succeeded,
            failed,
        }
    }
}
