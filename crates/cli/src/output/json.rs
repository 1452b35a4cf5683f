//! JSON output formatting

use serde::{Deserialize, Serialize};
use zap_gate_core::{Evaluation, SeverityCounts, Thresholds};

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput {
    pub counts: SeverityCounts,
    pub thresholds: Thresholds,
    pub violations: Vec<String>,
    pub passed: bool,
}

pub fn build_json_output(evaluation: &Evaluation) -> JsonOutput {
    JsonOutput {
        counts: evaluation.counts,
        thresholds: evaluation.thresholds,
        violations: evaluation
            .violations
            .iter()
            .map(|v| v.to_string())
            .collect(),
        passed: evaluation.passed(),
    }
}
