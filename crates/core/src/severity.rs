//! Severity labels as they appear in ZAP `riskdesc` fields

use serde::{Deserialize, Serialize};

/// Severity bucket of a ZAP alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
    Informational,
    Unknown,
}

impl Severity {
    /// All buckets in report order.
    pub const ALL: [Severity; 5] = [
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Informational,
        Severity::Unknown,
    ];

    /// Classify a `riskdesc` value such as `"High (3)"`.
    ///
    /// Labels are matched case-sensitively; anything unrecognized lands in
    /// `Unknown`.
    pub fn classify(risk_desc: Option<&str>) -> Severity {
        Severity::from_label(severity_label(risk_desc)).unwrap_or(Severity::Unknown)
    }

    /// Exact-match a label against the known set.
    pub fn from_label(label: &str) -> Option<Severity> {
        match label {
            "High" => Some(Severity::High),
            "Medium" => Some(Severity::Medium),
            "Low" => Some(Severity::Low),
            "Informational" => Some(Severity::Informational),
            "Unknown" => Some(Severity::Unknown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Informational => "Informational",
            Severity::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract the raw severity label from a `riskdesc` value.
///
/// The label is whatever precedes the first space, trimmed. Empty or missing
/// input yields `"Unknown"`.
pub fn severity_label(risk_desc: Option<&str>) -> &str {
    let label = risk_desc
        .unwrap_or_default()
        .split(' ')
        .next()
        .unwrap_or_default()
        .trim();
    if label.is_empty() {
        "Unknown"
    } else {
        label
    }
}
