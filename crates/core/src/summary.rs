//! Per-severity alert tallies

use serde::{Deserialize, Serialize};

use crate::report::ZapReport;
use crate::severity::Severity;

/// Alert counts for one report, one field per severity bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub informational: usize,
    pub unknown: usize,
}

impl SeverityCounts {
    /// Tally every alert in `report` in a single pass.
    pub fn from_report(report: &ZapReport) -> Self {
        let mut counts = Self::default();
        for alert in report.alerts() {
            let severity = alert.severity();
            tracing::trace!(
                riskdesc = alert.riskdesc.as_deref().unwrap_or_default(),
                %severity,
                "classified alert"
            );
            counts.record(severity);
        }
        counts
    }

    pub fn record(&mut self, severity: Severity) {
        *self.slot_mut(severity) += 1;
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
            Severity::Informational => self.informational,
            Severity::Unknown => self.unknown,
        }
    }

    pub fn total(&self) -> usize {
        Severity::ALL.iter().map(|s| self.get(*s)).sum()
    }

    fn slot_mut(&mut self, severity: Severity) -> &mut usize {
        match severity {
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
            Severity::Informational => &mut self.informational,
            Severity::Unknown => &mut self.unknown,
        }
    }
}

impl std::fmt::Display for SeverityCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ZAP findings summary: High={}, Medium={}, Low={}, Info={}, Unknown={}",
            self.high, self.medium, self.low, self.informational, self.unknown
        )
    }
}
