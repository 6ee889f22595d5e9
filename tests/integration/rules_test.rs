use clinwatch::application::config::ThresholdConfig;
use clinwatch::domain::entities::LabResult;
use clinwatch::domain::rules::{ClinicalSignal, RuleEngine};
use clinwatch::domain::value_objects::{MarkerThresholds, Severity};

const NEGATIVE_IMAGING: &str = "no evidence of infection.";
const POSITIVE_IMAGING: &str = "right lower lobe consolidation.";

fn crp(value: f64) -> LabResult {
    LabResult::new("p1", Some("CRP".into()), value, "mg/L")
}

fn wbc(value: f64) -> LabResult {
    LabResult::new("p1", Some("WBC".into()), value, "cells/mm3")
}

fn classify(imaging: &str, labs: &[LabResult], thresholds: &MarkerThresholds) -> Option<Severity> {
    let signal = ClinicalSignal::extract(imaging, labs);
    RuleEngine::default()
        .classify(&signal, thresholds)
        .map(|c| c.severity)
}

fn default_classify(imaging: &str, labs: &[LabResult]) -> Option<Severity> {
    classify(imaging, labs, &MarkerThresholds::default())
}

#[test]
fn crp_boundaries_with_negative_imaging() {
    assert_eq!(default_classify(NEGATIVE_IMAGING, &[crp(100.01)]), Some(Severity::High));
    assert_eq!(default_classify(NEGATIVE_IMAGING, &[crp(100.0)]), Some(Severity::Medium));
    assert_eq!(default_classify(NEGATIVE_IMAGING, &[crp(50.0)]), Some(Severity::Medium));
    assert_eq!(default_classify(NEGATIVE_IMAGING, &[crp(49.99)]), Some(Severity::Low));
}

#[test]
fn wbc_boundaries_with_negative_imaging() {
    assert_eq!(default_classify(NEGATIVE_IMAGING, &[wbc(15000.01)]), Some(Severity::High));
    assert_eq!(default_classify(NEGATIVE_IMAGING, &[wbc(15000.0)]), Some(Severity::Medium));
    assert_eq!(default_classify(NEGATIVE_IMAGING, &[wbc(11000.0)]), Some(Severity::Medium));
    assert_eq!(default_classify(NEGATIVE_IMAGING, &[wbc(10999.0)]), Some(Severity::Low));
}

#[test]
fn either_marker_can_escalate() {
    let labs = [crp(10.0), wbc(16000.0)];
    assert_eq!(default_classify(NEGATIVE_IMAGING, &labs), Some(Severity::High));
}

#[test]
fn without_negative_imaging_markers_are_low() {
    assert_eq!(default_classify(POSITIVE_IMAGING, &[crp(500.0)]), Some(Severity::Low));
    assert_eq!(default_classify("", &[crp(49.99)]), Some(Severity::Low));
    assert_eq!(default_classify(POSITIVE_IMAGING, &[wbc(30000.0)]), Some(Severity::Low));
}

#[test]
fn no_markers_means_no_classification() {
    let other = LabResult::new("p1", Some("Hemoglobin".into()), 13.5, "g/dL");
    assert_eq!(default_classify(NEGATIVE_IMAGING, &[other]), None);
    assert_eq!(default_classify(NEGATIVE_IMAGING, &[]), None);
}

#[test]
fn last_marker_value_wins() {
    let labs = [crp(150.0), crp(20.0)];
    assert_eq!(default_classify(NEGATIVE_IMAGING, &labs), Some(Severity::Low));
}

#[test]
fn marker_names_match_case_insensitively() {
    let lab = LabResult::new("p1", Some("crp".into()), 120.0, "mg/L");
    assert_eq!(default_classify(NEGATIVE_IMAGING, &[lab]), Some(Severity::High));
}

#[test]
fn configured_thresholds_shift_grades() {
    let config = ThresholdConfig {
        crp_critical: 80.0,
        crp_elevated: 40.0,
        ..ThresholdConfig::default()
    };
    let thresholds = MarkerThresholds::from(&config);
    assert_eq!(classify(NEGATIVE_IMAGING, &[crp(90.0)], &thresholds), Some(Severity::High));
    assert_eq!(classify(NEGATIVE_IMAGING, &[crp(45.0)], &thresholds), Some(Severity::Medium));
}
