//! Tests for riskdesc classification

use zap_gate_core::{severity_label, Severity};

#[test]
fn test_classify_known_labels() {
    assert_eq!(Severity::classify(Some("High (3)")), Severity::High);
    assert_eq!(Severity::classify(Some("Medium (2)")), Severity::Medium);
    assert_eq!(Severity::classify(Some("Low (1)")), Severity::Low);
    assert_eq!(
        Severity::classify(Some("Informational (0)")),
        Severity::Informational
    );
}

#[test]
fn test_classify_empty_or_missing() {
    assert_eq!(Severity::classify(None), Severity::Unknown);
    assert_eq!(Severity::classify(Some("")), Severity::Unknown);
    assert_eq!(severity_label(None), "Unknown");
    assert_eq!(severity_label(Some("")), "Unknown");
}

#[test]
fn test_classify_is_case_sensitive() {
    assert_eq!(severity_label(Some("HIGH (3)")), "HIGH");
    assert_eq!(Severity::classify(Some("HIGH (3)")), Severity::Unknown);
    assert_eq!(Severity::classify(Some("medium (2)")), Severity::Unknown);
}

#[test]
fn test_unrecognized_label_is_unknown() {
    assert_eq!(severity_label(Some("Critical (4)")), "Critical");
    assert_eq!(Severity::classify(Some("Critical (4)")), Severity::Unknown);
}

#[test]
fn test_display_round_trips_label() {
    for severity in Severity::ALL {
        assert_eq!(Severity::from_label(&severity.to_string()), Some(severity));
    }
}
