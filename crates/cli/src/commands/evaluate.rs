//! Evaluate command — load a report, tally alerts, enforce thresholds

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use zap_gate_core::{
    ReportError, SeverityCounts, ThresholdOverrides, Thresholds, ZapGateConfig, ZapReport,
};

use crate::output;
use crate::output::terminal::Styling;
use crate::OutputFormat;

/// Everything the evaluate command needs besides config, env, and sinks.
#[derive(Debug, Clone)]
pub struct EvaluateOptions<'a> {
    pub report: &'a Path,
    /// Output format from the command line; the config file decides otherwise
    pub format: Option<OutputFormat>,
    pub overrides: ThresholdOverrides,
    pub no_color: bool,
}

/// How a gate run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// All counts within thresholds
    Passed,
    /// At least one severity exceeded its threshold
    ThresholdExceeded,
    /// The report could not be found
    InputError,
}

impl GateOutcome {
    pub fn exit_code(self) -> u8 {
        match self {
            GateOutcome::Passed => 0,
            GateOutcome::ThresholdExceeded => 1,
            GateOutcome::InputError => 2,
        }
    }
}

impl From<GateOutcome> for ExitCode {
    fn from(outcome: GateOutcome) -> Self {
        ExitCode::from(outcome.exit_code())
    }
}

/// Run the gate. `load_config` is only called once the report has been read;
/// `env` looks up environment variables; `out` and `err` are the stdout and
/// stderr sinks.
///
/// A missing report is reported on `err` and yields [`GateOutcome::InputError`];
/// malformed JSON, config errors and bad threshold values are returned as errors.
pub fn run<C, F, O, E>(
    options: &EvaluateOptions<'_>,
    load_config: C,
    env: F,
    out: &mut O,
    err: &mut E,
) -> Result<GateOutcome>
where
    C: FnOnce() -> Result<ZapGateConfig>,
    F: Fn(&str) -> Option<String>,
    O: Write,
    E: Write,
{
    // ── 1. Report ────────────────────────────────────────────────
    let report = match ZapReport::load(options.report) {
        Ok(report) => report,
        Err(e @ ReportError::NotFound(_)) => {
            tracing::debug!(error = %e, "report missing");
            writeln!(err, "{}", e)?;
            return Ok(GateOutcome::InputError);
        }
        Err(e) => return Err(e.into()),
    };

    // ── 2. Count ─────────────────────────────────────────────────
    let counts = SeverityCounts::from_report(&report);

    // ── 3. Thresholds ────────────────────────────────────────────
    let config = load_config()?;
    let thresholds = Thresholds::resolve(options.overrides, env, &config.thresholds)
        .context("resolving alert thresholds")?;
    tracing::debug!(
        max_high = thresholds.max_high,
        max_medium = thresholds.max_medium,
        total = counts.total(),
        "evaluating"
    );
    let evaluation = thresholds.evaluate(&counts);

    // ── 4. Output ────────────────────────────────────────────────
    let styling = Styling::detect(!options.no_color && config.output.color);
    match resolve_format(options.format, &config) {
        OutputFormat::Terminal => {
            output::terminal::write_evaluation(&evaluation, styling, out, err)?
        }
        OutputFormat::Github => {
            output::terminal::write_evaluation(&evaluation, styling, out, err)?;
            for violation in &evaluation.violations {
                writeln!(out, "{}", output::github::format_violation(violation))?;
            }
        }
        OutputFormat::Json => {
            let doc = output::json::build_json_output(&evaluation);
            let json = serde_json::to_string_pretty(&doc).context("serializing JSON output")?;
            writeln!(out, "{}", json)?;
            for violation in &evaluation.violations {
                writeln!(err, "{}", violation)?;
            }
        }
    }

    if evaluation.passed() {
        Ok(GateOutcome::Passed)
    } else {
        Ok(GateOutcome::ThresholdExceeded)
    }
}

/// Pick the output format: CLI flag first, then the config file.
pub fn resolve_format(flag: Option<OutputFormat>, config: &ZapGateConfig) -> OutputFormat {
    if let Some(format) = flag {
        return format;
    }
    match OutputFormat::from_config(&config.output.format) {
        Some(format) => format,
        None => {
            tracing::warn!(
                format = %config.output.format,
                "unknown output format in config, using terminal"
            );
            OutputFormat::Terminal
        }
    }
}
