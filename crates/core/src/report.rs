//! ZAP JSON report model and loader

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::severity::Severity;

/// Errors raised while loading a report from disk.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read report {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse report {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level ZAP report document.
///
/// Only the fields the gate needs are modelled; everything else in the
/// report is ignored during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZapReport {
    #[serde(
        rename = "@version",
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub site: Vec<Site>,
}

/// A scanned site and the alerts raised against it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Site {
    #[serde(
        rename = "@name",
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub alerts: Vec<Alert>,
}

/// A single alert entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Alert {
    /// Severity label plus score, e.g. `"High (3)"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub riskdesc: Option<String>,

    #[serde(
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub alert: Option<String>,

    #[serde(
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub pluginid: Option<String>,

    /// Instance count as reported by ZAP (a string in real reports)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<serde_json::Value>,
}

impl Alert {
    /// Severity bucket this alert falls into.
    pub fn severity(&self) -> Severity {
        Severity::classify(self.riskdesc.as_deref())
    }
}

impl ZapReport {
    /// Load and parse a report from `path`.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        if !path.exists() {
            return Err(ReportError::NotFound(path.to_path_buf()));
        }
        let data = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let report = Self::from_json(&data).map_err(|source| ReportError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            sites = report.site.len(),
            alerts = report.alerts().count(),
            "loaded report"
        );
        Ok(report)
    }

    /// Parse a report from an in-memory JSON string.
    ///
    /// The document, each site and each alert must be JSON objects.
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(data)?;
        ensure_objects(&value)?;
        serde_json::from_value(value)
    }

    /// Iterate every alert across all sites.
    pub fn alerts(&self) -> impl Iterator<Item = &Alert> {
        self.site.iter().flat_map(|s| s.alerts.iter())
    }
}

// Derived struct visitors also accept sequences positionally, so the shape is
// checked on the raw value first.
fn ensure_objects(report: &Value) -> Result<(), serde_json::Error> {
    let root = report
        .as_object()
        .ok_or_else(|| shape_error("report", report))?;
    let Some(Value::Array(sites)) = root.get("site") else {
        return Ok(());
    };
    for site in sites {
        let site = site
            .as_object()
            .ok_or_else(|| shape_error("site entry", site))?;
        if let Some(Value::Array(alerts)) = site.get("alerts") {
            if let Some(alert) = alerts.iter().find(|a| !a.is_object()) {
                return Err(shape_error("alert entry", alert));
            }
        }
    }
    Ok(())
}

fn shape_error(what: &str, found: &Value) -> serde_json::Error {
    let kind = match found {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    serde_json::Error::custom(format!("{what} must be a JSON object, found {kind}"))
}

/// Keep informational fields whatever scalar type the scanner wrote them as.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
