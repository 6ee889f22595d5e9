use std::time::Duration;

use clinwatch::application::services::analysis::{
    AnalysisError, AnalysisOutcome, AnalysisService, NO_DATA_MESSAGE, NO_DISCREPANCY_MESSAGE,
};
use clinwatch::application::services::insight::{
    InsightGenerator, FALLBACK_EXPLANATION, NO_NOTES_PLACEHOLDER,
};
use clinwatch::domain::ports::{AlertStore, ExplanationService, RecordStore, RecordWriter};
use clinwatch::domain::rules::{RuleEngine, CRITICAL_TEMPLATE, NO_DISCREPANCY_TEMPLATE};
use clinwatch::domain::value_objects::{MarkerThresholds, ReportCategory, Severity};
use clinwatch::infrastructure::persistence::in_memory_store::InMemoryStore;

use crate::support::{
    load_fixture, FailingAlertStore, FailingExplainer, RecordingExplainer,
};

const TIMEOUT: Duration = Duration::from_secs(5);

async fn analyze(
    records: &dyn RecordStore,
    alerts: &dyn AlertStore,
    explainer: &dyn ExplanationService,
    patient_id: &str,
) -> Result<AnalysisOutcome, AnalysisError> {
    let engine = RuleEngine::default();
    let thresholds = MarkerThresholds::default();
    let insight = InsightGenerator::new(explainer, TIMEOUT);
    let service = AnalysisService::new(records, alerts, &engine, &thresholds, &insight);
    service.analyze(patient_id).await
}

#[tokio::test]
async fn unknown_patient_yields_no_data_and_persists_nothing() {
    let store = InMemoryStore::new();
    let explainer = RecordingExplainer::new("unused");

    let outcome = analyze(&store, &store, &explainer, "nobody")
        .await
        .expect("analysis");

    assert_eq!(outcome, AnalysisOutcome::NoData);
    let json = serde_json::to_value(outcome.to_response()).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!([{"severity": "INFO", "message": NO_DATA_MESSAGE}])
    );
    assert!(store.all_alerts().expect("alerts").is_empty());
    assert!(explainer.requests().is_empty());
}

#[tokio::test]
async fn negative_radiology_with_high_crp_is_high() {
    let store = InMemoryStore::from_records(load_fixture("high_discrepancy.json"));
    let explainer = RecordingExplainer::new("Markers are high despite clear imaging.");

    let outcome = analyze(&store, &store, &explainer, "patient-high")
        .await
        .expect("analysis");

    let AnalysisOutcome::Alerted(alert) = outcome else {
        panic!("expected an alert");
    };
    assert_eq!(alert.severity, Severity::High);
    assert_eq!(alert.patient_id, "patient-high");
    assert!(alert.message.starts_with(CRITICAL_TEMPLATE));
    assert_eq!(
        alert.message,
        format!("{CRITICAL_TEMPLATE} Markers are high despite clear imaging.")
    );

    let stored = store.alerts_for_patient("patient-high").expect("alerts");
    assert_eq!(stored, vec![alert]);
}

#[tokio::test]
async fn explanation_context_is_built_from_records() {
    let store = InMemoryStore::from_records(load_fixture("high_discrepancy.json"));
    let explainer = RecordingExplainer::new("ok");

    analyze(&store, &store, &explainer, "patient-high")
        .await
        .expect("analysis");

    let requests = explainer.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert!(request.imaging_text.contains("no evidence of infection"));
    assert!(!request.imaging_text.contains("discharge planning"));
    assert_eq!(request.lab_summary, "CRP: 120 mg/L");
    assert!(request.clinical_notes.contains("febrile overnight"));
}

#[tokio::test]
async fn wbc_only_patient_is_low() {
    let store = InMemoryStore::from_records(load_fixture("wbc_only.json"));
    let explainer = RecordingExplainer::new("Within expected range.");

    let outcome = analyze(&store, &store, &explainer, "patient-wbc")
        .await
        .expect("analysis");

    assert_eq!(outcome.severity(), Severity::Low);
    let response = outcome.to_response();
    assert_eq!(response[0].patient_id.as_deref(), Some("patient-wbc"));
    assert!(response[0].message.starts_with(NO_DISCREPANCY_TEMPLATE));

    let requests = explainer.requests();
    assert_eq!(requests[0].clinical_notes, NO_NOTES_PLACEHOLDER);
}

#[tokio::test]
async fn records_without_markers_are_info_and_not_persisted() {
    let store = InMemoryStore::from_records(load_fixture("no_markers.json"));
    let explainer = RecordingExplainer::new("unused");

    let outcome = analyze(&store, &store, &explainer, "patient-quiet")
        .await
        .expect("analysis");

    assert_eq!(outcome, AnalysisOutcome::NoDiscrepancy);
    assert_eq!(outcome.to_response()[0].message, NO_DISCREPANCY_MESSAGE);
    assert!(store.all_alerts().expect("alerts").is_empty());
    assert!(explainer.requests().is_empty());
}

#[tokio::test]
async fn crp_without_negative_radiology_is_low() {
    let store = InMemoryStore::new();
    store
        .add_report("p1", Some(ReportCategory::Ct), "Consolidation in right lower lobe.")
        .expect("add");
    store.add_lab("p1", Some("CRP"), 500.0, "mg/L").expect("add");
    let explainer = RecordingExplainer::new("ok");

    let outcome = analyze(&store, &store, &explainer, "p1")
        .await
        .expect("analysis");
    assert_eq!(outcome.severity(), Severity::Low);
}

#[tokio::test]
async fn repeated_invocations_append_distinct_alerts() {
    let store = InMemoryStore::from_records(load_fixture("high_discrepancy.json"));
    let explainer = RecordingExplainer::new("ok");

    let first = analyze(&store, &store, &explainer, "patient-high")
        .await
        .expect("first");
    let second = analyze(&store, &store, &explainer, "patient-high")
        .await
        .expect("second");

    let (AnalysisOutcome::Alerted(a), AnalysisOutcome::Alerted(b)) = (first, second) else {
        panic!("expected two alerts");
    };
    assert_ne!(a.id, b.id);
    assert_eq!(store.alerts_for_patient("patient-high").expect("alerts").len(), 2);
}

#[tokio::test]
async fn failing_explainer_uses_fallback_and_still_persists() {
    let store = InMemoryStore::from_records(load_fixture("high_discrepancy.json"));

    let outcome = analyze(&store, &store, &FailingExplainer, "patient-high")
        .await
        .expect("analysis");

    let AnalysisOutcome::Alerted(alert) = outcome else {
        panic!("expected an alert");
    };
    assert_eq!(
        alert.message,
        format!("{CRITICAL_TEMPLATE} {FALLBACK_EXPLANATION}")
    );
    assert_eq!(store.alerts_for_patient("patient-high").expect("alerts").len(), 1);
}

#[tokio::test]
async fn persistence_failure_propagates() {
    let store = InMemoryStore::from_records(load_fixture("high_discrepancy.json"));
    let explainer = RecordingExplainer::new("ok");

    let result = analyze(&store, &FailingAlertStore, &explainer, "patient-high").await;
    assert!(matches!(result, Err(AnalysisError::PersistenceFailed(_))));
}

#[tokio::test]
async fn patient_records_do_not_leak_across_patients() {
    let store = InMemoryStore::from_records(load_fixture("high_discrepancy.json"));
    store.add_note("other", "afebrile").expect("add");
    let explainer = RecordingExplainer::new("ok");

    let outcome = analyze(&store, &store, &explainer, "other")
        .await
        .expect("analysis");
    assert_eq!(outcome, AnalysisOutcome::NoDiscrepancy);
}
