//! Tests for threshold resolution and evaluation

use std::collections::HashMap;
use zap_gate_core::config::ThresholdsConfig;
use zap_gate_core::{SeverityCounts, ThresholdError, ThresholdOverrides, Thresholds};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

fn counts(high: usize, medium: usize) -> SeverityCounts {
    SeverityCounts {
        high,
        medium,
        ..Default::default()
    }
}

#[test]
fn test_defaults_are_zero() {
    let t = Thresholds::resolve(
        ThresholdOverrides::default(),
        env(&[]),
        &ThresholdsConfig::default(),
    )
    .unwrap();
    assert_eq!(t, Thresholds { max_high: 0, max_medium: 0 });
}

#[test]
fn test_env_values_are_trimmed() {
    let t = Thresholds::resolve(
        ThresholdOverrides::default(),
        env(&[("ZAP_MAX_HIGH_ALERTS", " 3 "), ("ZAP_MAX_MEDIUM_ALERTS", "7\n")]),
        &ThresholdsConfig::default(),
    )
    .unwrap();
    assert_eq!(t.max_high, 3);
    assert_eq!(t.max_medium, 7);
}

#[test]
fn test_invalid_env_value() {
    let err = Thresholds::resolve(
        ThresholdOverrides::default(),
        env(&[("ZAP_MAX_MEDIUM_ALERTS", "lots")]),
        &ThresholdsConfig::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ThresholdError::InvalidInteger {
            var: "ZAP_MAX_MEDIUM_ALERTS",
            value: "lots".to_string(),
        }
    );
}

#[test]
fn test_precedence_flag_env_config() {
    let config = ThresholdsConfig {
        max_high: 10,
        max_medium: 20,
    };

    let from_config =
        Thresholds::resolve(ThresholdOverrides::default(), env(&[]), &config).unwrap();
    assert_eq!(from_config, Thresholds { max_high: 10, max_medium: 20 });

    let from_env = Thresholds::resolve(
        ThresholdOverrides::default(),
        env(&[("ZAP_MAX_HIGH_ALERTS", "1")]),
        &config,
    )
    .unwrap();
    assert_eq!(from_env, Thresholds { max_high: 1, max_medium: 20 });

    let from_flag = Thresholds::resolve(
        ThresholdOverrides {
            max_high: Some(5),
            max_medium: None,
        },
        env(&[("ZAP_MAX_HIGH_ALERTS", "1"), ("ZAP_MAX_MEDIUM_ALERTS", "2")]),
        &config,
    )
    .unwrap();
    assert_eq!(from_flag, Thresholds { max_high: 5, max_medium: 2 });
}

#[test]
fn test_flag_skips_invalid_env() {
    let t = Thresholds::resolve(
        ThresholdOverrides {
            max_high: Some(4),
            max_medium: Some(4),
        },
        env(&[("ZAP_MAX_HIGH_ALERTS", "nope")]),
        &ThresholdsConfig::default(),
    )
    .unwrap();
    assert_eq!(t.max_high, 4);
}

#[test]
fn test_within_thresholds() {
    let eval = Thresholds::default().evaluate(&counts(0, 0));
    assert!(eval.passed());
    assert!(eval.violations.is_empty());

    let eval = Thresholds {
        max_high: 2,
        max_medium: 5,
    }
    .evaluate(&counts(2, 5));
    assert!(eval.passed());
}

#[test]
fn test_high_violation_message() {
    let eval = Thresholds {
        max_high: 1,
        max_medium: 0,
    }
    .evaluate(&counts(2, 0));
    assert!(!eval.passed());
    assert_eq!(eval.violations.len(), 1);
    assert_eq!(
        eval.violations[0].to_string(),
        "High findings 2 exceed threshold 1."
    );
}

#[test]
fn test_violations_are_ordered_high_then_medium() {
    let eval = Thresholds::default().evaluate(&counts(1, 3));
    let messages: Vec<String> = eval.violations.iter().map(|v| v.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "High findings 1 exceed threshold 0.",
            "Medium findings 3 exceed threshold 0.",
        ]
    );
}

#[test]
fn test_negative_threshold_always_fails() {
    let eval = Thresholds {
        max_high: -1,
        max_medium: 0,
    }
    .evaluate(&counts(0, 0));
    assert_eq!(eval.violations.len(), 1);
    assert_eq!(
        eval.violations[0].to_string(),
        "High findings 0 exceed threshold -1."
    );
}

#[test]
fn test_low_and_info_are_never_gated() {
    let eval = Thresholds::default().evaluate(&SeverityCounts {
        low: 100,
        informational: 100,
        unknown: 100,
        ..Default::default()
    });
    assert!(eval.passed());
}
