//! Configuration file parsing for .zap-gate.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE: &str = ".zap-gate.toml";

/// Main configuration structure for .zap-gate.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZapGateConfig {
    #[serde(default)]
    pub thresholds: ThresholdsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Fallback thresholds, used when neither a flag nor the environment sets one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default)]
    pub max_high: i64,

    #[serde(default)]
    pub max_medium: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "terminal", "json" or "github"
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable color output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_format() -> String {
    "terminal".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color: true,
        }
    }
}

impl ZapGateConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: ZapGateConfig =
            toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Locate .zap-gate.toml in `start_dir` or the nearest ancestor.
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        start_dir
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE))
            .find(|candidate| candidate.exists())
    }

    /// Find and load .zap-gate.toml, falling back to defaults
    pub fn find_and_load(start_dir: &Path) -> Result<Self> {
        match Self::find(start_dir) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "using config file");
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("serializing config")?;
        std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
