//! Threshold resolution and evaluation of alert counts against it

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ThresholdsConfig;
use crate::severity::Severity;
use crate::summary::SeverityCounts;

/// Environment variable holding the maximum allowed High alerts
pub const MAX_HIGH_ENV: &str = "ZAP_MAX_HIGH_ALERTS";

/// Environment variable holding the maximum allowed Medium alerts
pub const MAX_MEDIUM_ENV: &str = "ZAP_MAX_MEDIUM_ALERTS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThresholdError {
    #[error("invalid value for {var}: {value:?} is not an integer")]
    InvalidInteger { var: &'static str, value: String },
}

/// Maximum allowed alert counts before the gate fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub max_high: i64,
    pub max_medium: i64,
}

/// Explicit overrides, typically from command-line flags
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdOverrides {
    pub max_high: Option<i64>,
    pub max_medium: Option<i64>,
}

impl Thresholds {
    /// Resolve thresholds with precedence: overrides, then environment,
    /// then config file values.
    pub fn resolve<F>(
        overrides: ThresholdOverrides,
        env: F,
        config: &ThresholdsConfig,
    ) -> Result<Self, ThresholdError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_high = match overrides.max_high {
            Some(v) => v,
            None => env_or(&env, MAX_HIGH_ENV, config.max_high)?,
        };
        let max_medium = match overrides.max_medium {
            Some(v) => v,
            None => env_or(&env, MAX_MEDIUM_ENV, config.max_medium)?,
        };
        Ok(Self {
            max_high,
            max_medium,
        })
    }

    /// Compare `counts` against these thresholds.
    pub fn evaluate(&self, counts: &SeverityCounts) -> Evaluation {
        let mut violations = Vec::new();
        for (severity, threshold) in [
            (Severity::High, self.max_high),
            (Severity::Medium, self.max_medium),
        ] {
            let count = counts.get(severity);
            if exceeds(count, threshold) {
                violations.push(Violation {
                    severity,
                    count,
                    threshold,
                });
            }
        }
        Evaluation {
            counts: *counts,
            thresholds: *self,
            violations,
        }
    }
}

fn env_or<F>(env: &F, var: &'static str, fallback: i64) -> Result<i64, ThresholdError>
where
    F: Fn(&str) -> Option<String>,
{
    match env(var) {
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ThresholdError::InvalidInteger { var, value: raw }),
        None => Ok(fallback),
    }
}

fn exceeds(count: usize, threshold: i64) -> bool {
    i64::try_from(count).map_or(true, |c| c > threshold)
}

/// A severity whose count is above its threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub severity: Severity,
    pub count: usize,
    pub threshold: i64,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} findings {} exceed threshold {}.",
            self.severity, self.count, self.threshold
        )
    }
}

/// Result of checking one report against the thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub counts: SeverityCounts,
    pub thresholds: Thresholds,
    pub violations: Vec<Violation>,
}

impl Evaluation {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}
