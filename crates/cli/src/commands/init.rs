//! Write a starter .zap-gate.toml

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use zap_gate_core::config::CONFIG_FILE;
use zap_gate_core::threshold::{MAX_HIGH_ENV, MAX_MEDIUM_ENV};
use zap_gate_core::ZapGateConfig;

/// Write the default config into `path` (current directory by default).
///
/// Returns the config path, or `None` when a config already exists there.
pub fn run(path: Option<&Path>) -> Result<Option<PathBuf>> {
    let config_path = path.unwrap_or_else(|| Path::new(".")).join(CONFIG_FILE);

    if config_path.exists() {
        eprintln!(
            "  {} {} (left unchanged)",
            "exists".yellow(),
            config_path.display()
        );
        return Ok(None);
    }

    ZapGateConfig::default().save(&config_path)?;

    println!("  {} {}", "created".green(), config_path.display());
    println!(
        "  Both thresholds start at 0; {} and {} override them per run.",
        MAX_HIGH_ENV, MAX_MEDIUM_ENV
    );

    Ok(Some(config_path))
}
