//! Terminal output formatting

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use zap_gate_core::Evaluation;

/// Closing line printed when every count is within its threshold
pub const WITHIN_THRESHOLDS: &str = "Alert counts are within configured thresholds.";

/// Whether each stream gets ANSI styling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Styling {
    pub stdout: bool,
    pub stderr: bool,
}

impl Styling {
    /// Style a stream only when color is enabled and that stream is a terminal.
    pub fn detect(enabled: bool) -> Self {
        Self {
            stdout: enabled && io::stdout().is_terminal(),
            stderr: enabled && io::stderr().is_terminal(),
        }
    }
}

/// Write the summary to `out`, violations to `err`, and the closing line to
/// `out` when the evaluation passed.
pub fn write_evaluation<O: Write, E: Write>(
    evaluation: &Evaluation,
    styling: Styling,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    let summary = evaluation.counts.to_string();
    if styling.stdout {
        writeln!(out, "{}", summary.bold())?;
    } else {
        writeln!(out, "{}", summary)?;
    }

    if !evaluation.passed() {
        for violation in &evaluation.violations {
            let line = violation.to_string();
            if styling.stderr {
                writeln!(err, "{}", line.red())?;
            } else {
                writeln!(err, "{}", line)?;
            }
        }
        return Ok(());
    }

    if styling.stdout {
        writeln!(out, "{}", WITHIN_THRESHOLDS.green())
    } else {
        writeln!(out, "{}", WITHIN_THRESHOLDS)
    }
}
