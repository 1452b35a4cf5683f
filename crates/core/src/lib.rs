//! zap-gate core - ZAP report evaluation
//!
//! This crate holds everything the CI gate needs short of the command line:
//! - Loading ZAP JSON reports
//! - Classifying alerts by the severity label in `riskdesc`
//! - Tallying alerts per severity
//! - Resolving thresholds and evaluating counts against them

pub mod config;
pub mod report;
pub mod severity;
pub mod summary;
pub mod threshold;

pub use config::ZapGateConfig;
pub use report::{Alert, ReportError, Site, ZapReport};
pub use severity::{severity_label, Severity};
pub use summary::SeverityCounts;
pub use threshold::{Evaluation, ThresholdError, ThresholdOverrides, Thresholds, Violation};

/// zap-gate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
