use std::time::Duration;

use clinwatch::application::config::AppConfig;
use clinwatch::application::services::analysis::{AnalysisOutcome, AnalysisService};
use clinwatch::application::services::insight::InsightGenerator;
use clinwatch::domain::ports::{AlertStore, RecordWriter};
use clinwatch::domain::rules::RuleEngine;
use clinwatch::domain::value_objects::{MarkerThresholds, ReportCategory, Severity};
use clinwatch::infrastructure::ai::create_explanation_service;
use clinwatch::infrastructure::persistence::sqlite_store::SqliteStore;

use crate::support::RecordingExplainer;

fn temp_store() -> (SqliteStore, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("clinwatch.db");
    let store = SqliteStore::new(path.to_str().expect("utf-8 path")).expect("store");
    (store, dir)
}

#[tokio::test]
async fn sqlite_backed_analysis_records_alert() {
    let (store, _dir) = temp_store();
    store
        .add_report("p1", Some(ReportCategory::Xray), "No signs of infection.")
        .expect("add");
    store.add_lab("p1", Some("WBC"), 12500.0, "cells/mm3").expect("add");
    store.add_note("p1", "Mild cough.").expect("add");

    let explainer = RecordingExplainer::new("Moderate leukocytosis with clear film.");
    let insight = InsightGenerator::new(&explainer, Duration::from_secs(5));
    let engine = RuleEngine::default();
    let thresholds = MarkerThresholds::default();
    let service = AnalysisService::new(&store, &store, &engine, &thresholds, &insight);

    let outcome = service.analyze("p1").await.expect("analysis");
    assert_eq!(outcome.severity(), Severity::Medium);

    let history = store.alerts_for_patient("p1").expect("history");
    assert_eq!(history.len(), 1);
    assert!(history[0].message.ends_with("Moderate leukocytosis with clear film."));
}

#[tokio::test]
async fn sqlite_no_data_persists_nothing() {
    let (store, _dir) = temp_store();
    let explainer = RecordingExplainer::new("unused");
    let insight = InsightGenerator::new(&explainer, Duration::from_secs(5));
    let engine = RuleEngine::default();
    let thresholds = MarkerThresholds::default();
    let service = AnalysisService::new(&store, &store, &engine, &thresholds, &insight);

    let outcome = service.analyze("ghost").await.expect("analysis");
    assert_eq!(outcome, AnalysisOutcome::NoData);
    assert!(store.all_alerts().expect("alerts").is_empty());
}

#[tokio::test]
async fn disabled_ai_config_wires_fallback_explanation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[ai]\nenabled = false\n").expect("write config");
    let config = AppConfig::load_from(&config_path).expect("config");

    let (store, _db_dir) = temp_store();
    store
        .add_report("p1", Some(ReportCategory::Radiology), "No infection identified.")
        .expect("add");
    store.add_lab("p1", Some("CRP"), 75.0, "mg/L").expect("add");

    let explainer = create_explanation_service(&config.ai);
    let insight = InsightGenerator::new(&*explainer, Duration::from_secs(config.ai.timeout_secs));
    let engine = RuleEngine::default();
    let thresholds = MarkerThresholds::from(&config.thresholds);
    let service = AnalysisService::new(&store, &store, &engine, &thresholds, &insight);

    let outcome = service.analyze("p1").await.expect("analysis");
    let AnalysisOutcome::Alerted(alert) = outcome else {
        panic!("expected an alert");
    };
    assert_eq!(alert.severity, Severity::Medium);
    assert!(alert.message.contains("Elevated inflammatory values despite normal imaging"));
}
