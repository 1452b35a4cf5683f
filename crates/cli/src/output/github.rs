//! GitHub Actions workflow command output format
//!
//! Emits one `::error` annotation per threshold violation so the failure
//! shows up on the workflow run summary.

use zap_gate_core::Violation;

/// Format a violation as a GitHub Actions workflow command.
///
/// See: https://docs.github.com/en/actions/using-workflows/workflow-commands-for-github-actions
pub fn format_violation(violation: &Violation) -> String {
    format!("::error title=ZAP threshold::{}", violation)
}
