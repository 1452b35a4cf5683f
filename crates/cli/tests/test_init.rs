//! Tests for `zap-gate init`

use std::fs;
use tempfile::TempDir;
use zap_gate_cli::commands::init;
use zap_gate_core::config::CONFIG_FILE;
use zap_gate_core::ZapGateConfig;

#[test]
fn test_init_writes_default_config() {
    let dir = TempDir::new().unwrap();

    let written = init::run(Some(dir.path())).unwrap();

    let path = dir.path().join(CONFIG_FILE);
    assert_eq!(written.as_deref(), Some(path.as_path()));
    let loaded = ZapGateConfig::from_file(&path).unwrap();
    assert_eq!(loaded, ZapGateConfig::default());
}

#[test]
fn test_init_leaves_existing_config_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    let existing = "[thresholds]\nmax_high = 5\n";
    fs::write(&path, existing).unwrap();

    let written = init::run(Some(dir.path())).unwrap();

    assert!(written.is_none());
    assert_eq!(fs::read_to_string(&path).unwrap(), existing);
}
